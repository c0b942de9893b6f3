use anyhow::Result;
use async_trait::async_trait;

/// Trait for LLM providers that can answer structured-generation requests.
///
/// Schema conformance (rejecting output that does not match the declared
/// response format) is the provider's responsibility; callers still parse
/// the returned content into their own types and treat a parse failure as
/// a malformed response.
#[async_trait]
pub trait StructuredProvider: Send + Sync {
    /// Provider name (e.g., "openai", "mock").
    fn name(&self) -> &str;

    /// Send a completion request and return the response text.
    async fn complete(&self, request: &GenerationRequest) -> Result<GenerationResponse>;
}

/// A declared shape for the model's output, passed through to providers
/// that support constrained decoding.
#[derive(Debug, Clone)]
pub struct ResponseFormat {
    /// Schema name, surfaced to the provider API.
    pub name: String,
    /// JSON Schema for the expected response body.
    pub schema: serde_json::Value,
}

/// Request to a structured-generation provider.
#[derive(Debug, Clone)]
pub struct GenerationRequest {
    pub model: String,
    pub system_prompt: String,
    pub user_prompt: String,
    pub max_tokens: u32,
    pub temperature: f32,
    pub response_format: Option<ResponseFormat>,
}

/// Response from a structured-generation provider.
#[derive(Debug, Clone)]
pub struct GenerationResponse {
    pub content: String,
    pub provider: String,
    pub model: String,
    pub tokens_used: u64,
    pub latency_ms: u64,
}
