use reqwest::StatusCode;
use thiserror::Error;

/// Why a single backend attempt produced no answer.
#[derive(Debug, Error)]
pub enum BackendError {
    #[error("capability not available")]
    Unavailable,
    #[error("request failed: {0}")]
    Network(#[from] reqwest::Error),
    #[error("HTTP {0}: {1}")]
    Status(StatusCode, String),
    #[error("malformed response: {0}")]
    MalformedBody(String),
    #[error("assistant failed: {0}")]
    Assistant(String),
}

impl BackendError {
    pub fn kind(&self) -> &'static str {
        match self {
            Self::Unavailable => "unavailable",
            Self::Network(_) => "network",
            Self::Status(..) => "status",
            Self::MalformedBody(_) => "malformed",
            Self::Assistant(_) => "assistant",
        }
    }
}
