use serde::Serialize;

use reverse_core::{FeedbackEntry, PromptUsage, QuotaStatus};

/// `/api/check-prompt-limit` answers with either the quota decision or an
/// increment acknowledgement, depending on the requested action.
#[derive(Debug, Serialize)]
#[serde(untagged)]
pub enum PromptLimitResponse {
    Status(QuotaStatus),
    Incremented(IncrementedResponse),
}

#[derive(Debug, Serialize)]
pub struct IncrementedResponse {
    pub success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notice: Option<String>,
}

#[derive(Debug, Serialize)]
#[serde(untagged)]
pub enum AdminDashboardResponse {
    UserPrompts {
        #[serde(rename = "userPrompts")]
        user_prompts: Vec<PromptUsage>,
    },
    Feedback {
        feedback: Vec<FeedbackEntry>,
    },
}

#[derive(Debug, Serialize)]
pub struct SavedResponse {
    pub success: bool,
}

#[derive(Debug, Serialize)]
pub struct OkResponse {
    pub ok: bool,
}

pub fn ok() -> OkResponse {
    OkResponse { ok: true }
}
