use reqwest::Client;
use serde_json::{json, Value};

use super::{non_blank, post_json, Backend, BackendError, BackendFuture};

const MODEL: &str = "llama2";

/// Local Ollama-style generate endpoint. The configured URL is used verbatim.
#[derive(Debug, Clone)]
pub struct OllamaBackend {
    endpoint: String,
}

impl OllamaBackend {
    pub fn new(endpoint: String) -> Self {
        Self { endpoint }
    }
}

impl Backend for OllamaBackend {
    fn name(&self) -> &'static str {
        "ollama"
    }

    fn attempt<'a>(&'a self, client: &'a Client, prompt: &'a str) -> BackendFuture<'a> {
        Box::pin(async move {
            let body = json!({
                "model": MODEL,
                "prompt": prompt,
                "stream": false
            });
            let request = client
                .post(&self.endpoint)
                .header("Content-Type", "application/json");

            let payload = post_json(request, &body).await?;
            extract_response(&payload)
        })
    }
}

pub(crate) fn extract_response(payload: &Value) -> Result<String, BackendError> {
    non_blank(payload.get("response").and_then(|v| v.as_str()), "'response' field")
}
