mod client;
mod fallback;
mod prompt;

pub use client::{AiConfig, AnalyzerClient};
pub use fallback::{fallback_analysis, rate_limited_fallback};

/// Errors from the chat-completion proxy call.
#[derive(Debug, thiserror::Error)]
pub enum AiError {
    #[error("http error: {0}")]
    Http(#[from] reqwest::Error),
    #[error("upstream error: {0}")]
    Upstream(String),
    #[error("malformed model reply: {0}")]
    Malformed(String),
}

impl AiError {
    /// Rate-limit failures get a distinct user-facing fallback message.
    pub fn is_rate_limited(&self) -> bool {
        let message = match self {
            Self::Http(err) => err.to_string(),
            Self::Upstream(message) | Self::Malformed(message) => message.clone(),
        };
        let lower = message.to_ascii_lowercase();
        lower.contains("rate limit") || lower.contains("429")
    }
}

pub type Result<T> = std::result::Result<T, AiError>;
