use serde::Serialize;

use reverse_ai::{AnalyzerClient, fallback_analysis, rate_limited_fallback};
use reverse_core::ThoughtAnalysis;

use crate::error::{AppError, Result};

/// What the analyze endpoint ships back: either the model's analysis or a
/// pre-written fallback, both as HTTP 200 so the UI always has something
/// to render.
#[derive(Debug, Serialize)]
#[serde(untagged)]
pub enum AnalysisOutcome {
    Analysis(ThoughtAnalysis),
    Fallback {
        error: String,
        fallback: ThoughtAnalysis,
    },
}

#[derive(Clone)]
pub struct AnalysisService {
    client: AnalyzerClient,
}

impl AnalysisService {
    pub(super) fn new(client: AnalyzerClient) -> Self {
        Self { client }
    }

    /// Forwards the thought upstream. Upstream or validation failures are
    /// downgraded to a fallback payload; only empty input is a client error.
    pub async fn analyze(&self, thought: &str) -> Result<AnalysisOutcome> {
        if thought.trim().is_empty() {
            return Err(AppError::InvalidInput("Thought is required".to_string()));
        }
        match self.client.analyze(thought).await {
            Ok(analysis) => Ok(AnalysisOutcome::Analysis(analysis)),
            Err(err) => {
                tracing::warn!(error = %err, "thought analysis failed, returning fallback");
                let (message, fallback) = if err.is_rate_limited() {
                    (
                        "The AI service is rate limited".to_string(),
                        rate_limited_fallback(),
                    )
                } else {
                    ("Failed to analyze thought".to_string(), fallback_analysis())
                };
                Ok(AnalysisOutcome::Fallback {
                    error: message,
                    fallback,
                })
            }
        }
    }
}
