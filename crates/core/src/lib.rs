use serde::{Deserialize, Serialize};

/// Maximum AI invocations per user per calendar day.
pub const DAILY_PROMPT_LIMIT: i64 = 3;

/// One row of the quota table: per-user usage for the current counting window.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PromptUsage {
    pub id: String,
    pub user_id: String,
    pub prompt_count: i64,
    /// ISO calendar date (`YYYY-MM-DD`), server-local midnight truncation.
    pub last_reset_date: String,
    pub created_at: String,
    pub updated_at: String,
}

/// Quota decision returned to the client.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QuotaStatus {
    pub can_use_prompt: bool,
    pub remaining_prompts: i64,
    pub total_used: i64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notice: Option<String>,
}

impl QuotaStatus {
    pub fn from_count(prompt_count: i64) -> Self {
        Self {
            can_use_prompt: prompt_count < DAILY_PROMPT_LIMIT,
            remaining_prompts: DAILY_PROMPT_LIMIT - prompt_count,
            total_used: prompt_count,
            notice: None,
        }
    }

    /// Fully permissive status used when storage is unavailable.
    pub fn permissive(notice: impl Into<String>) -> Self {
        Self {
            can_use_prompt: true,
            remaining_prompts: DAILY_PROMPT_LIMIT,
            total_used: 0,
            notice: Some(notice.into()),
        }
    }
}

/// Free-text feedback row. Write-mostly; read back only by the admin view.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FeedbackEntry {
    pub id: i64,
    pub user_id: String,
    pub feedback: String,
    pub created_at: String,
}

/// Structured reply of the thought-reversal model.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ThoughtAnalysis {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pattern: Option<String>,
    pub reversal: String,
    pub explanation: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn quota_status_from_count() {
        let status = QuotaStatus::from_count(2);
        assert!(status.can_use_prompt);
        assert_eq!(status.remaining_prompts, 1);
        assert_eq!(status.total_used, 2);

        let exhausted = QuotaStatus::from_count(DAILY_PROMPT_LIMIT);
        assert!(!exhausted.can_use_prompt);
        assert_eq!(exhausted.remaining_prompts, 0);
    }

    #[test]
    fn quota_status_serializes_camel_case() {
        let status = QuotaStatus::from_count(0);
        let json = serde_json::to_value(&status).expect("serialize");
        assert_eq!(json["canUsePrompt"], true);
        assert_eq!(json["remainingPrompts"], 3);
        assert_eq!(json["totalUsed"], 0);
        assert!(json.get("notice").is_none());
    }
}
