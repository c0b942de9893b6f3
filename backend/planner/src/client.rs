//! Shared structured-generation client.
//!
//! Wraps a [`StructuredProvider`] with the per-call timeout, the report
//! truncation policy, and retry with exponential backoff, then parses the
//! response content into the caller's type.

use std::sync::Arc;
use std::time::Duration;

use serde::de::DeserializeOwned;
use tracing::{debug, warn};

use deckforge_core::{DeckError, GenerationRequest, ResponseFormat, StructuredProvider};

/// Retry budget for one logical request. Transport failures and malformed
/// responses both consume attempts.
#[derive(Debug, Clone)]
pub struct RetryPolicy {
    /// Total attempts, including the first.
    pub attempts: u32,
    /// Delay before the first retry; doubles per subsequent retry.
    pub base_delay: Duration,
}

impl Default for RetryPolicy {
    fn default() -> Self {
        Self {
            attempts: 2,
            base_delay: Duration::from_millis(500),
        }
    }
}

/// Tunables shared by the planner and expander stages.
#[derive(Debug, Clone)]
pub struct GenerationOptions {
    pub model: String,
    pub max_tokens: u32,
    pub temperature: f32,
    /// Maximum report length sent to the model, in chars. `None` sends the
    /// full report.
    pub report_char_limit: Option<usize>,
    /// Per-call timeout; elapsing counts as a provider failure.
    pub timeout: Duration,
    pub retry: RetryPolicy,
}

impl GenerationOptions {
    pub fn new(model: impl Into<String>) -> Self {
        Self {
            model: model.into(),
            max_tokens: 16384,
            temperature: 0.7,
            report_char_limit: None,
            timeout: Duration::from_secs(120),
            retry: RetryPolicy::default(),
        }
    }
}

/// Provider plus policy; cheap to clone and share across concurrent calls.
#[derive(Clone)]
pub struct StructuredClient {
    provider: Arc<dyn StructuredProvider>,
    options: GenerationOptions,
}

impl StructuredClient {
    pub fn new(provider: Arc<dyn StructuredProvider>, options: GenerationOptions) -> Self {
        Self { provider, options }
    }

    pub fn options(&self) -> &GenerationOptions {
        &self.options
    }

    /// Apply the configured report-length policy.
    pub fn clip_report<'a>(&self, report: &'a str) -> &'a str {
        match self.options.report_char_limit {
            Some(limit) if report.chars().count() > limit => {
                let end = report
                    .char_indices()
                    .nth(limit)
                    .map(|(i, _)| i)
                    .unwrap_or(report.len());
                warn!(
                    original_chars = report.chars().count(),
                    kept_chars = limit,
                    "Truncating report before sending to model"
                );
                &report[..end]
            }
            _ => report,
        }
    }

    /// Issue one structured request and parse the content as `T`.
    ///
    /// Retries per the configured policy; once the budget is exhausted a
    /// parse failure surfaces as `MalformedResponse` and a transport
    /// failure as `Provider`.
    pub async fn generate<T: DeserializeOwned>(
        &self,
        stage: &str,
        system_prompt: &str,
        user_prompt: String,
        format: ResponseFormat,
    ) -> Result<T, DeckError> {
        let request = GenerationRequest {
            model: self.options.model.clone(),
            system_prompt: system_prompt.to_string(),
            user_prompt,
            max_tokens: self.options.max_tokens,
            temperature: self.options.temperature,
            response_format: Some(format),
        };

        let mut last_error = None;
        for attempt in 1..=self.options.retry.attempts.max(1) {
            if attempt > 1 {
                let delay = self.options.retry.base_delay * 2u32.pow(attempt - 2);
                debug!(stage, attempt, delay_ms = delay.as_millis() as u64, "Retrying");
                tokio::time::sleep(delay).await;
            }

            match self.attempt::<T>(stage, &request).await {
                Ok(value) => return Ok(value),
                Err(e) => {
                    warn!(stage, attempt, error = %e, "Structured request failed");
                    last_error = Some(e);
                }
            }
        }

        Err(last_error.unwrap_or_else(|| DeckError::Provider {
            provider: self.provider.name().to_string(),
            message: "no attempts were made".to_string(),
        }))
    }

    async fn attempt<T: DeserializeOwned>(
        &self,
        stage: &str,
        request: &GenerationRequest,
    ) -> Result<T, DeckError> {
        let response = tokio::time::timeout(self.options.timeout, self.provider.complete(request))
            .await
            .map_err(|_| DeckError::Provider {
                provider: self.provider.name().to_string(),
                message: format!("request timed out after {:?}", self.options.timeout),
            })?
            .map_err(|e| DeckError::Provider {
                provider: self.provider.name().to_string(),
                message: e.to_string(),
            })?;

        debug!(
            stage,
            provider = %response.provider,
            tokens = response.tokens_used,
            latency_ms = response.latency_ms,
            "Provider responded"
        );

        serde_json::from_str(&response.content).map_err(|e| DeckError::MalformedResponse {
            stage: stage.to_string(),
            message: e.to_string(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::providers::mock::MockProvider;
    use deckforge_core::{schema, StructureRecord};

    fn outline_json() -> String {
        serde_json::json!({
            "title": "T",
            "description": "D",
            "num_total_slides": 4,
            "sections": [
                { "title": "S", "description": "d", "num_slides": 4 }
            ]
        })
        .to_string()
    }

    fn fast_options() -> GenerationOptions {
        let mut options = GenerationOptions::new("mock-model");
        options.retry.base_delay = Duration::from_millis(1);
        options
    }

    #[tokio::test]
    async fn parses_structured_content() {
        let provider = Arc::new(MockProvider::new("mock").with_response(outline_json()));
        let client = StructuredClient::new(provider, fast_options());

        let outline: StructureRecord = client
            .generate("outline", "sys", "user".into(), schema::structure_format())
            .await
            .unwrap();
        assert_eq!(outline.sections.len(), 1);
    }

    #[tokio::test]
    async fn malformed_content_errors_after_retries() {
        let provider = Arc::new(MockProvider::new("mock").with_response("not json"));
        let client = StructuredClient::new(provider.clone(), fast_options());

        let err = client
            .generate::<StructureRecord>("outline", "sys", "user".into(), schema::structure_format())
            .await
            .unwrap_err();
        assert!(matches!(err, DeckError::MalformedResponse { .. }));
        assert_eq!(provider.calls(), 2);
    }

    #[tokio::test]
    async fn second_attempt_can_recover() {
        let provider = Arc::new(
            MockProvider::new("mock")
                .with_failure("transient")
                .with_response(outline_json()),
        );
        let client = StructuredClient::new(provider.clone(), fast_options());

        let outline: StructureRecord = client
            .generate("outline", "sys", "user".into(), schema::structure_format())
            .await
            .unwrap();
        assert_eq!(outline.title, "T");
        assert_eq!(provider.calls(), 2);
    }

    #[tokio::test]
    async fn report_is_clipped_only_when_configured() {
        let provider = Arc::new(MockProvider::new("mock"));
        let mut options = fast_options();
        let client = StructuredClient::new(provider.clone(), options.clone());
        assert_eq!(client.clip_report("abcdef"), "abcdef");

        options.report_char_limit = Some(3);
        let client = StructuredClient::new(provider, options);
        assert_eq!(client.clip_report("abcdef"), "abc");
        assert_eq!(client.clip_report("ab"), "ab");
    }
}
