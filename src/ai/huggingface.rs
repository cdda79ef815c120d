use reqwest::Client;
use serde_json::{json, Value};

use super::{non_blank, post_json, Backend, BackendError, BackendFuture};

const INFERENCE_URL: &str = "https://api-inference.huggingface.co/models/microsoft/DialoGPT-medium";
const MAX_LENGTH: u32 = 500;
const TEMPERATURE: f32 = 0.7;

/// Hugging Face hosted inference (text generation).
pub struct HuggingFaceBackend {
    token: String,
    url: String,
}

impl HuggingFaceBackend {
    pub fn new(token: String) -> Self {
        Self {
            token,
            url: INFERENCE_URL.to_string(),
        }
    }

    #[cfg(test)]
    pub fn with_url(token: String, url: String) -> Self {
        Self { token, url }
    }
}

impl Backend for HuggingFaceBackend {
    fn name(&self) -> &'static str {
        "huggingface"
    }

    fn attempt<'a>(&'a self, client: &'a Client, prompt: &'a str) -> BackendFuture<'a> {
        Box::pin(async move {
            let body = json!({
                "inputs": prompt,
                "parameters": {
                    "max_length": MAX_LENGTH,
                    "temperature": TEMPERATURE
                }
            });
            let request = client
                .post(&self.url)
                .header("Authorization", format!("Bearer {}", self.token))
                .header("Content-Type", "application/json");

            let payload = post_json(request, &body).await?;
            extract_generated_text(&payload)
        })
    }
}

/// Accepts `{"generated_text": ..}` or `[{"generated_text": ..}]`, the object form first.
/// A blank object field still lets the array form answer.
pub(crate) fn extract_generated_text(payload: &Value) -> Result<String, BackendError> {
    let direct = payload
        .get("generated_text")
        .and_then(|v| v.as_str())
        .filter(|t| !t.trim().is_empty());
    let text = direct.or_else(|| {
        payload
            .get(0)
            .and_then(|first| first.get("generated_text"))
            .and_then(|v| v.as_str())
    });
    non_blank(text, "generated_text")
}
