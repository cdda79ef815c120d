pub mod embedded;
pub mod error;
pub mod huggingface;
pub mod local;
pub mod ollama;
pub mod openai;

use reqwest::Client;
use std::future::Future;
use std::pin::Pin;

pub use embedded::{CommandAssistant, EmbeddedAssistant, EmbeddedBackend};
pub use error::BackendError;
pub use huggingface::HuggingFaceBackend;
pub use ollama::OllamaBackend;
pub use openai::OpenAiBackend;

pub type BackendFuture<'a> = Pin<Box<dyn Future<Output = Result<String, BackendError>> + Send + 'a>>;

/// One response provider in the dispatch chain.
pub trait Backend: Send + Sync {
    fn name(&self) -> &'static str;
    fn attempt<'a>(&'a self, client: &'a Client, prompt: &'a str) -> BackendFuture<'a>;
}

/// Sends a POST and hands back the JSON body, treating any non-2xx as a failure.
pub(crate) async fn post_json(
    request: reqwest::RequestBuilder,
    body: &serde_json::Value,
) -> Result<serde_json::Value, BackendError> {
    let response = request.json(body).send().await?;

    let status = response.status();
    if !status.is_success() {
        let text = response.text().await.unwrap_or_default();
        return Err(BackendError::Status(status, text));
    }

    response
        .json::<serde_json::Value>()
        .await
        .map_err(|e| BackendError::MalformedBody(e.to_string()))
}

/// A reply counts only if it has visible text; blank answers fall through like any other failure.
pub(crate) fn non_blank(text: Option<&str>, missing: &str) -> Result<String, BackendError> {
    match text {
        Some(t) if !t.trim().is_empty() => Ok(t.to_string()),
        Some(_) => Err(BackendError::MalformedBody(format!("{} is empty", missing))),
        None => Err(BackendError::MalformedBody(format!("no {} in response", missing))),
    }
}


#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn non_blank_rejects_empty_and_whitespace() {
        assert_eq!(non_blank(Some("Namaskara"), "text").unwrap(), "Namaskara");
        assert!(matches!(non_blank(Some(""), "text"), Err(BackendError::MalformedBody(_))));
        assert!(matches!(non_blank(Some(" \n\t"), "text"), Err(BackendError::MalformedBody(_))));
        assert!(matches!(non_blank(None, "text"), Err(BackendError::MalformedBody(_))));
    }

    #[tokio::test]
    async fn server_error_status_is_reported() {
        let url = test_server::respond_once("500 Internal Server Error", r#"{"error":"overloaded"}"#).await;
        let client = Client::new();
        let body = serde_json::json!({"prompt": "hi"});

        let err = post_json(client.post(&url), &body).await.unwrap_err();

        match err {
            BackendError::Status(status, text) => {
                assert_eq!(status.as_u16(), 500);
                assert!(text.contains("overloaded"));
            }
            other => panic!("expected status error, got {:?}", other),
        }
    }
}
