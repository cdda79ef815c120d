use std::env;
use std::time::Duration;

const DEFAULT_FALLBACK_DELAY_MS: u64 = 1500;

/// Which response backends may be attempted. Presence of a field is the only
/// thing the dispatcher looks at; values are used as-is.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct BackendConfig {
    pub use_embedded_assistant: bool,
    pub hf_token: Option<String>,
    pub openai_api_key: Option<String>,
    pub ollama_endpoint: Option<String>,
}

#[derive(Debug, Clone)]
pub struct Config {
    pub backends: BackendConfig,
    /// Host command that acts as the embedded assistant (prompt on stdin, answer on stdout).
    /// `EMBEDDED_ASSISTANT_CMD` is split on whitespace with no quoting, so neither the
    /// program path nor its arguments may contain spaces; wrap such a command in a script.
    pub embedded_assistant_cmd: Option<String>,
    pub fallback_delay: Duration,
    pub window_width: f32,
    pub window_height: f32,
    pub app_title: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            backends: BackendConfig::default(),
            embedded_assistant_cmd: None,
            fallback_delay: Duration::from_millis(DEFAULT_FALLBACK_DELAY_MS),
            window_width: 560.0,
            window_height: 640.0,
            app_title: "Ask a Bengaluru Local".to_string(),
        }
    }
}

impl Config {
    pub fn from_env() -> Self {
        dotenv::dotenv().ok();

        let use_embedded_assistant = env_var("USE_EMBEDDED_ASSISTANT")
            .map(|v| parse_bool(&v, true))
            .unwrap_or(true);

        let fallback_delay = env_var("FALLBACK_DELAY_MS")
            .and_then(|v| v.parse::<u64>().ok())
            .unwrap_or(DEFAULT_FALLBACK_DELAY_MS);

        Self {
            backends: BackendConfig {
                use_embedded_assistant,
                hf_token: env_var("HF_TOKEN"),
                openai_api_key: env_var("OPENAI_API_KEY"),
                ollama_endpoint: env_var("OLLAMA_ENDPOINT"),
            },
            embedded_assistant_cmd: env_var("EMBEDDED_ASSISTANT_CMD"),
            fallback_delay: Duration::from_millis(fallback_delay),
            ..Self::default()
        }
    }

    /// Short human summary for the startup log. Never prints secrets.
    pub fn describe_backends(&self) -> String {
        let mut enabled = Vec::new();
        if self.backends.use_embedded_assistant && self.embedded_assistant_cmd.is_some() {
            enabled.push("embedded");
        }
        if self.backends.hf_token.is_some() {
            enabled.push("huggingface");
        }
        if self.backends.openai_api_key.is_some() {
            enabled.push("openai");
        }
        if self.backends.ollama_endpoint.is_some() {
            enabled.push("ollama");
        }
        if enabled.is_empty() {
            "none (local samples only)".to_string()
        } else {
            enabled.join(" → ")
        }
    }
}

fn env_var(name: &str) -> Option<String> {
    env::var(name)
        .ok()
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

fn parse_bool(value: &str, default: bool) -> bool {
    match value.to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => true,
        "0" | "false" | "no" | "off" => false,
        _ => default,
    }
}
