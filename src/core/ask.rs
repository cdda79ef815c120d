use crate::ai::local::LocalAI;
use crate::config::BackendConfig;
use crate::core::dispatcher::{DispatchResult, Dispatcher, ResponseSource};
use crate::prompt::PromptRequest;
use std::fmt::Display;
use std::sync::Arc;
use tokio::task::JoinHandle;

pub const EMPTY_QUESTION_PROMPT: &str = "Please ask me something about Bengaluru life!";

/// Answers one question from the input box. Blank input never reaches the dispatcher.
pub async fn ask(dispatcher: Arc<Dispatcher>, config: Arc<BackendConfig>, raw_input: &str) -> String {
    let question = raw_input.trim();
    if question.is_empty() {
        return EMPTY_QUESTION_PROMPT.to_string();
    }

    let owned = question.to_string();
    let task = tokio::spawn(async move {
        let prompt = PromptRequest::for_question(&owned).compose();
        dispatcher.dispatch(&prompt, &owned, &config).await
    });

    settle(question, task).await
}

/// Waits for a dispatch task; if it died, explains and still shows a sample answer.
pub(crate) async fn settle(question: &str, task: JoinHandle<DispatchResult>) -> String {
    match task.await {
        Ok(result) => {
            match result.source {
                ResponseSource::Backend(name) => log::info!("💬 Answer delivered from {}", name),
                ResponseSource::Fallback => log::info!("💬 Answer delivered from local samples"),
            }
            result.text
        }
        Err(e) => {
            log::error!("❌ Query failed: {}", e);
            render_failure(question, &e)
        }
    }
}

pub fn render_failure(question: &str, error: &dyn Display) -> String {
    format!(
        "Guru, something went wrong: {}\n\nFor now, here's a sample local response:\n\n{}",
        error,
        LocalAI::get_response(question)
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ai::EmbeddedAssistant;
    use anyhow::Result;
    use std::future::Future;
    use std::pin::Pin;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::time::Duration;

    #[derive(Default)]
    struct CountingAssistant {
        calls: AtomicUsize,
    }

    impl EmbeddedAssistant for CountingAssistant {
        fn chat<'a>(&'a self, _prompt: &'a str) -> Pin<Box<dyn Future<Output = Result<String>> + Send + 'a>> {
            Box::pin(async move {
                self.calls.fetch_add(1, Ordering::SeqCst);
                Ok("Namaskara! Leave early.".to_string())
            })
        }
    }

    fn embedded_only() -> Arc<BackendConfig> {
        Arc::new(BackendConfig {
            use_embedded_assistant: true,
            ..BackendConfig::default()
        })
    }

    #[tokio::test]
    async fn blank_input_never_dispatches() {
        let assistant = Arc::new(CountingAssistant::default());
        let dispatcher = Arc::new(Dispatcher::new(
            Some(assistant.clone() as Arc<dyn EmbeddedAssistant>),
            Duration::ZERO,
        ));

        for input in ["", "   ", "\n\t"] {
            let answer = ask(Arc::clone(&dispatcher), embedded_only(), input).await;
            assert_eq!(answer, EMPTY_QUESTION_PROMPT);
        }
        assert_eq!(assistant.calls.load(Ordering::SeqCst), 0);
    }

    #[tokio::test]
    async fn question_goes_through_the_dispatcher() {
        let assistant = Arc::new(CountingAssistant::default());
        let dispatcher = Arc::new(Dispatcher::new(
            Some(assistant.clone() as Arc<dyn EmbeddedAssistant>),
            Duration::ZERO,
        ));

        let answer = ask(dispatcher, embedded_only(), "  airport at 6 AM?  ").await;

        assert_eq!(answer, "Namaskara! Leave early.");
        assert_eq!(assistant.calls.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn no_backends_still_answers() {
        let dispatcher = Arc::new(Dispatcher::new(None, Duration::ZERO));
        let answer = ask(dispatcher, Arc::new(BackendConfig::default()), "ORR timing").await;
        assert!(answer.contains("Outer Ring Road"));
    }

    async fn exploding_dispatch() -> DispatchResult {
        panic!("backend exploded")
    }

    #[tokio::test]
    async fn crashed_query_shows_error_and_sample() {
        let task = tokio::spawn(exploding_dispatch());
        let answer = settle("Silk Board at 9?", task).await;

        assert!(answer.starts_with("Guru, something went wrong: "));
        assert!(answer.contains("For now, here's a sample local response:"));
        assert!(answer.contains("Bermuda Triangle"));
    }

    #[tokio::test]
    async fn settled_answer_is_the_dispatch_text() {
        let task = tokio::spawn(async {
            DispatchResult {
                text: "Leave by 4:30".to_string(),
                source: ResponseSource::Backend("openai"),
            }
        });
        assert_eq!(settle("Whitefield?", task).await, "Leave by 4:30");
    }
}
