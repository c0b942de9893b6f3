use std::time::Duration;

/// Deckforge runtime configuration.
#[derive(Debug, Clone)]
pub struct Config {
    /// API key for the chat-completions endpoint
    pub api_key: Option<String>,
    /// Base URL of the OpenAI-compatible endpoint
    pub base_url: String,
    /// Default model identifier
    pub model: String,
    /// Token budget per structured request
    pub max_tokens: u32,
    /// Sampling temperature
    pub temperature: f32,
    /// Optional report truncation, in chars; unset sends the full report
    pub report_char_limit: Option<usize>,
    /// Per-call timeout in seconds
    pub request_timeout_secs: u64,
    /// Directory for decks built without an explicit output path
    pub output_dir: String,
    /// Log level
    pub log_level: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            api_key: None,
            base_url: "https://api.openai.com/v1".to_string(),
            model: "gpt-4.1-mini".to_string(),
            max_tokens: 16384,
            temperature: 0.7,
            report_char_limit: None,
            request_timeout_secs: 120,
            output_dir: "generated_presentations".to_string(),
            log_level: "info".to_string(),
        }
    }
}

impl Config {
    /// Load configuration from environment variables with sensible defaults.
    pub fn from_env() -> Self {
        let defaults = Self::default();
        Self {
            api_key: std::env::var("DECKFORGE_API_KEY").ok(),
            base_url: std::env::var("DECKFORGE_BASE_URL").unwrap_or(defaults.base_url),
            model: std::env::var("DECKFORGE_MODEL").unwrap_or(defaults.model),
            max_tokens: std::env::var("DECKFORGE_MAX_TOKENS")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(defaults.max_tokens),
            temperature: std::env::var("DECKFORGE_TEMPERATURE")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(defaults.temperature),
            report_char_limit: std::env::var("DECKFORGE_REPORT_CHAR_LIMIT")
                .ok()
                .and_then(|v| v.parse().ok()),
            request_timeout_secs: std::env::var("DECKFORGE_REQUEST_TIMEOUT_SECS")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(defaults.request_timeout_secs),
            output_dir: std::env::var("DECKFORGE_OUTPUT_DIR").unwrap_or(defaults.output_dir),
            log_level: std::env::var("RUST_LOG").unwrap_or(defaults.log_level),
        }
    }

    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout_secs)
    }
}
