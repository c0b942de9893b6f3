use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Mutex;
use std::time::Duration;

use anyhow::Result;
use async_trait::async_trait;

use deckforge_core::{GenerationRequest, GenerationResponse, StructuredProvider};

enum Step {
    Respond { content: String, delay: Option<Duration> },
    Fail(String),
}

/// A scripted provider for tests: responses (optionally delayed) and
/// failures are consumed in order; the last step repeats once the script
/// is exhausted.
pub struct MockProvider {
    name: String,
    steps: Mutex<Vec<Step>>,
    calls: AtomicUsize,
}

impl MockProvider {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            steps: Mutex::new(Vec::new()),
            calls: AtomicUsize::new(0),
        }
    }

    pub fn with_response(self, content: impl Into<String>) -> Self {
        self.steps.lock().unwrap().push(Step::Respond {
            content: content.into(),
            delay: None,
        });
        self
    }

    pub fn with_delayed_response(self, content: impl Into<String>, delay: Duration) -> Self {
        self.steps.lock().unwrap().push(Step::Respond {
            content: content.into(),
            delay: Some(delay),
        });
        self
    }

    pub fn with_failure(self, message: impl Into<String>) -> Self {
        self.steps.lock().unwrap().push(Step::Fail(message.into()));
        self
    }

    /// Number of completed `complete` calls.
    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl StructuredProvider for MockProvider {
    fn name(&self) -> &str {
        &self.name
    }

    async fn complete(&self, request: &GenerationRequest) -> Result<GenerationResponse> {
        let call = self.calls.fetch_add(1, Ordering::SeqCst);
        let (content, delay) = {
            let steps = self.steps.lock().unwrap();
            if steps.is_empty() {
                (Ok("Mock response".to_string()), None)
            } else {
                let step = &steps[call.min(steps.len() - 1)];
                match step {
                    Step::Respond { content, delay } => (Ok(content.clone()), *delay),
                    Step::Fail(message) => (Err(message.clone()), None),
                }
            }
        };

        if let Some(delay) = delay {
            tokio::time::sleep(delay).await;
        }

        let content = content.map_err(|message| anyhow::anyhow!("{message}"))?;
        Ok(GenerationResponse {
            content,
            provider: self.name.clone(),
            model: request.model.clone(),
            tokens_used: 0,
            latency_ms: 0,
        })
    }
}
