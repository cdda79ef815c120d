use crate::ai::local::LocalAI;
use crate::ai::{
    Backend, CommandAssistant, EmbeddedAssistant, EmbeddedBackend, HuggingFaceBackend,
    OllamaBackend, OpenAiBackend,
};
use crate::config::{BackendConfig, Config};
use reqwest::Client;
use std::sync::Arc;
use std::time::Duration;

/// Where an answer came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResponseSource {
    Backend(&'static str),
    Fallback,
}

#[derive(Debug, Clone, PartialEq)]
pub struct DispatchResult {
    pub text: String,
    pub source: ResponseSource,
}

/// Tries each configured backend in a fixed order and returns the first
/// answer; local samples otherwise. Holds no per-query state.
pub struct Dispatcher {
    client: Client,
    assistant: Option<Arc<dyn EmbeddedAssistant>>,
    fallback_delay: Duration,
}

impl Dispatcher {
    pub fn new(assistant: Option<Arc<dyn EmbeddedAssistant>>, fallback_delay: Duration) -> Self {
        Self {
            client: Client::new(),
            assistant,
            fallback_delay,
        }
    }

    pub fn from_config(config: &Config) -> Self {
        let assistant = config
            .embedded_assistant_cmd
            .as_deref()
            .and_then(CommandAssistant::parse)
            .map(|cmd| {
                log::info!("🤝 Embedded assistant: {}", cmd.program());
                Arc::new(cmd) as Arc<dyn EmbeddedAssistant>
            });

        Self::new(assistant, config.fallback_delay)
    }

    /// Ordered chain: embedded → Hugging Face → OpenAI → Ollama.
    pub fn backends_for(&self, config: &BackendConfig) -> Vec<Box<dyn Backend>> {
        let mut backends: Vec<Box<dyn Backend>> = Vec::new();

        if config.use_embedded_assistant {
            match &self.assistant {
                Some(assistant) => backends.push(Box::new(EmbeddedBackend::new(Arc::clone(assistant)))),
                None => log::debug!("Embedded assistant enabled but not present, skipping"),
            }
        }
        if let Some(token) = &config.hf_token {
            backends.push(Box::new(HuggingFaceBackend::new(token.clone())));
        }
        if let Some(key) = &config.openai_api_key {
            backends.push(Box::new(OpenAiBackend::new(key.clone())));
        }
        if let Some(endpoint) = &config.ollama_endpoint {
            backends.push(Box::new(OllamaBackend::new(endpoint.clone())));
        }

        backends
    }

    pub async fn dispatch(&self, prompt: &str, question: &str, config: &BackendConfig) -> DispatchResult {
        let backends = self.backends_for(config);
        self.run_chain(&backends, prompt, question).await
    }

    pub(crate) async fn run_chain(
        &self,
        backends: &[Box<dyn Backend>],
        prompt: &str,
        question: &str,
    ) -> DispatchResult {
        for backend in backends {
            match backend.attempt(&self.client, prompt).await {
                Ok(text) => {
                    log::info!("📡 Answered by {}", backend.name());
                    return DispatchResult {
                        text,
                        source: ResponseSource::Backend(backend.name()),
                    };
                }
                Err(e) => {
                    log::warn!("⚠️ {} failed ({}): {}", backend.name(), e.kind(), e);
                }
            }
        }

        if !self.fallback_delay.is_zero() {
            tokio::time::sleep(self.fallback_delay).await;
        }
        log::debug!("📡 Using local sample responses");

        DispatchResult {
            text: LocalAI::get_response(question),
            source: ResponseSource::Fallback,
        }
    }
}
