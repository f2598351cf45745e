use std::time::Duration;

use serde::{Deserialize, Serialize};

use reverse_core::ThoughtAnalysis;

use crate::prompt::{SYSTEM_PROMPT, user_prompt};
use crate::{AiError, Result};

/// Upstream chat-completion API settings, supplied by the server at startup.
#[derive(Clone, Debug)]
pub struct AiConfig {
    pub base_url: String,
    pub api_key: String,
    pub model: String,
}

/// Explicitly constructed proxy client; handlers receive it by injection
/// rather than through a module-level cached handle.
#[derive(Clone)]
pub struct AnalyzerClient {
    http: reqwest::Client,
    config: AiConfig,
}

#[derive(Serialize)]
struct ChatRequest<'a> {
    model: &'a str,
    messages: Vec<ChatMessage<'a>>,
    temperature: f32,
    max_tokens: u32,
    response_format: ResponseFormat,
}

#[derive(Serialize)]
struct ChatMessage<'a> {
    role: &'a str,
    content: &'a str,
}

#[derive(Serialize)]
struct ResponseFormat {
    #[serde(rename = "type")]
    kind: &'static str,
}

#[derive(Deserialize)]
struct ChatResponse {
    choices: Vec<ChatChoice>,
}

#[derive(Deserialize)]
struct ChatChoice {
    message: ChoiceMessage,
}

#[derive(Deserialize)]
struct ChoiceMessage {
    content: Option<String>,
}

#[derive(Deserialize)]
struct ModelReply {
    pattern: Option<String>,
    reversal: Option<String>,
    explanation: Option<String>,
}

impl AnalyzerClient {
    pub fn new(config: AiConfig) -> Self {
        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(30))
            .build()
            .expect("build http client");
        Self { http, config }
    }

    /// Forwards the thought to the chat-completion API with the fixed
    /// reframing prompt and parses the structured JSON reply.
    pub async fn analyze(&self, thought: &str) -> Result<ThoughtAnalysis> {
        let user_message = user_prompt(thought);
        let request = ChatRequest {
            model: &self.config.model,
            messages: vec![
                ChatMessage {
                    role: "system",
                    content: SYSTEM_PROMPT,
                },
                ChatMessage {
                    role: "user",
                    content: &user_message,
                },
            ],
            temperature: 0.85,
            max_tokens: 500,
            response_format: ResponseFormat {
                kind: "json_object",
            },
        };

        let url = format!("{}/chat/completions", self.config.base_url.trim_end_matches('/'));
        let response = self
            .http
            .post(&url)
            .bearer_auth(&self.config.api_key)
            .json(&request)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            tracing::warn!(%status, "chat completion request failed");
            return Err(AiError::Upstream(format!("{}: {}", status, body)));
        }

        let reply: ChatResponse = response.json().await?;
        let content = reply
            .choices
            .first()
            .and_then(|choice| choice.message.content.as_deref())
            .ok_or_else(|| AiError::Malformed("no message content".to_string()))?;
        parse_reply(content)
    }
}

/// Validates the model's JSON content: `reversal` and `explanation` must be
/// present and non-empty, `pattern` is optional.
pub(crate) fn parse_reply(content: &str) -> Result<ThoughtAnalysis> {
    let reply: ModelReply = serde_json::from_str(content)
        .map_err(|err| AiError::Malformed(format!("invalid json content: {}", err)))?;
    let reversal = reply
        .reversal
        .filter(|value| !value.trim().is_empty())
        .ok_or_else(|| AiError::Malformed("missing reversal".to_string()))?;
    let explanation = reply
        .explanation
        .filter(|value| !value.trim().is_empty())
        .ok_or_else(|| AiError::Malformed("missing explanation".to_string()))?;
    Ok(ThoughtAnalysis {
        pattern: reply.pattern.filter(|value| !value.trim().is_empty()),
        reversal,
        explanation,
    })
}
