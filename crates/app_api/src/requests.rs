use serde::Deserialize;

/// Body of `/api/check-prompt-limit`. `action: "increment"` records a use;
/// no action asks for the current quota decision.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PromptLimitRequest {
    pub user_id: Option<String>,
    pub action: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct AnalyzeThoughtRequest {
    pub thought: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct AdminDashboardRequest {
    pub action: Option<String>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SaveFeedbackRequest {
    pub user_id: Option<String>,
    pub feedback: Option<String>,
}
