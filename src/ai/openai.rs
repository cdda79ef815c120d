use reqwest::Client;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::{non_blank, post_json, Backend, BackendError, BackendFuture};

const CHAT_COMPLETIONS_URL: &str = "https://api.openai.com/v1/chat/completions";
const MODEL: &str = "gpt-3.5-turbo";
const MAX_TOKENS: u32 = 500;
const TEMPERATURE: f32 = 0.7;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Message {
    role: String,
    content: String,
}

#[derive(Debug, Clone, Serialize)]
struct OpenAIRequest {
    model: String,
    messages: Vec<Message>,
    max_tokens: u32,
    temperature: f32,
}

#[derive(Debug, Clone, Deserialize)]
struct OpenAIResponse {
    choices: Vec<Choice>,
}

#[derive(Debug, Clone, Deserialize)]
struct Choice {
    message: Message,
}

/// OpenAI chat completions, one user message per call.
pub struct OpenAiBackend {
    api_key: String,
    url: String,
}

impl OpenAiBackend {
    pub fn new(api_key: String) -> Self {
        Self {
            api_key,
            url: CHAT_COMPLETIONS_URL.to_string(),
        }
    }

    #[cfg(test)]
    pub fn with_url(api_key: String, url: String) -> Self {
        Self { api_key, url }
    }
}

impl Backend for OpenAiBackend {
    fn name(&self) -> &'static str {
        "openai"
    }

    fn attempt<'a>(&'a self, client: &'a Client, prompt: &'a str) -> BackendFuture<'a> {
        Box::pin(async move {
            let request = OpenAIRequest {
                model: MODEL.to_string(),
                messages: vec![Message {
                    role: "user".to_string(),
                    content: prompt.to_string(),
                }],
                max_tokens: MAX_TOKENS,
                temperature: TEMPERATURE,
            };
            let body = serde_json::to_value(&request)
                .map_err(|e| BackendError::MalformedBody(e.to_string()))?;

            let builder = client
                .post(&self.url)
                .header("Authorization", format!("Bearer {}", self.api_key))
                .header("Content-Type", "application/json");

            let payload = post_json(builder, &body).await?;
            extract_message_content(payload)
        })
    }
}

pub(crate) fn extract_message_content(payload: Value) -> Result<String, BackendError> {
    let response: OpenAIResponse = serde_json::from_value(payload)
        .map_err(|e| BackendError::MalformedBody(e.to_string()))?;

    let content = response.choices.first().map(|choice| choice.message.content.as_str());
    non_blank(content, "choices[0].message.content")
}
