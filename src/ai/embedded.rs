use anyhow::{anyhow, Context, Result};
use reqwest::Client;
use std::future::Future;
use std::io::ErrorKind;
use std::pin::Pin;
use std::process::Stdio;
use std::sync::Arc;
use tokio::io::AsyncWriteExt;
use tokio::process::Command;

use super::{Backend, BackendError, BackendFuture};

/// An assistant the host provides in-process: text in, text out.
pub trait EmbeddedAssistant: Send + Sync {
    fn chat<'a>(&'a self, prompt: &'a str) -> Pin<Box<dyn Future<Output = Result<String>> + Send + 'a>>;
}

/// Host assistant exposed as a command: the prompt goes to stdin, the answer
/// is read from stdout.
#[derive(Debug, Clone)]
pub struct CommandAssistant {
    program: String,
    args: Vec<String>,
}

impl CommandAssistant {
    /// Splits on whitespace: first word is the program, the rest are arguments.
    /// No shell quoting, so paths with spaces are not supported. Returns `None` for a blank command line.
    pub fn parse(command_line: &str) -> Option<Self> {
        let mut parts = command_line.split_whitespace().map(str::to_string);
        let program = parts.next()?;
        Some(Self {
            program,
            args: parts.collect(),
        })
    }

    pub fn program(&self) -> &str {
        &self.program
    }
}

impl EmbeddedAssistant for CommandAssistant {
    fn chat<'a>(&'a self, prompt: &'a str) -> Pin<Box<dyn Future<Output = Result<String>> + Send + 'a>> {
        Box::pin(async move {
            let mut child = Command::new(&self.program)
                .args(&self.args)
                .stdin(Stdio::piped())
                .stdout(Stdio::piped())
                .stderr(Stdio::piped())
                .kill_on_drop(true)
                .spawn()
                .with_context(|| format!("failed to start {}", self.program))?;

            if let Some(mut stdin) = child.stdin.take() {
                stdin
                    .write_all(prompt.as_bytes())
                    .await
                    .context("failed to write prompt to assistant")?;
                // dropping stdin closes the pipe so the assistant sees EOF
            }

            let output = child
                .wait_with_output()
                .await
                .context("assistant did not finish")?;

            if !output.status.success() {
                let stderr = String::from_utf8_lossy(&output.stderr);
                return Err(anyhow!("{} exited with {}: {}", self.program, output.status, stderr.trim()));
            }

            let answer = String::from_utf8_lossy(&output.stdout).trim().to_string();
            if answer.is_empty() {
                return Err(anyhow!("{} returned an empty answer", self.program));
            }
            Ok(answer)
        })
    }
}

/// Chain step that hands the prompt to the host assistant and returns its text verbatim.
pub struct EmbeddedBackend {
    assistant: Arc<dyn EmbeddedAssistant>,
}

impl EmbeddedBackend {
    pub fn new(assistant: Arc<dyn EmbeddedAssistant>) -> Self {
        Self { assistant }
    }
}

impl Backend for EmbeddedBackend {
    fn name(&self) -> &'static str {
        "embedded"
    }

    fn attempt<'a>(&'a self, _client: &'a Client, prompt: &'a str) -> BackendFuture<'a> {
        Box::pin(async move {
            self.assistant.chat(prompt).await.map_err(|e| {
                let missing = e
                    .chain()
                    .filter_map(|cause| cause.downcast_ref::<std::io::Error>())
                    .any(|io| io.kind() == ErrorKind::NotFound);
                if missing {
                    BackendError::Unavailable
                } else {
                    BackendError::Assistant(format!("{:#}", e))
                }
            })
        })
    }
}
