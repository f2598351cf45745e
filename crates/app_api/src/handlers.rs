use reverse_app::{AnalysisOutcome, AppError, Result};

use crate::{
    AdminDashboardRequest, AdminDashboardResponse, AnalyzeThoughtRequest, AppContext,
    IncrementedResponse, PromptLimitRequest, PromptLimitResponse, SaveFeedbackRequest,
    SavedResponse,
};

fn require_field(value: Option<String>, name: &str) -> Result<String> {
    match value {
        Some(value) if !value.trim().is_empty() => Ok(value),
        _ => Err(AppError::InvalidInput(format!("{} is required", name))),
    }
}

pub fn check_prompt_limit(
    ctx: &AppContext,
    req: PromptLimitRequest,
) -> Result<PromptLimitResponse> {
    let user_id = require_field(req.user_id, "User ID")?;
    let quota = &ctx.app_state.services.quota;
    match req.action.as_deref() {
        None => Ok(PromptLimitResponse::Status(quota.check(&user_id))),
        Some("increment") => {
            let notice = quota.record_use(&user_id);
            Ok(PromptLimitResponse::Incremented(IncrementedResponse {
                success: true,
                notice,
            }))
        }
        Some(value) => Err(AppError::InvalidInput(format!("unknown action {}", value))),
    }
}

pub async fn analyze_thought(
    ctx: &AppContext,
    req: AnalyzeThoughtRequest,
) -> Result<AnalysisOutcome> {
    let thought = require_field(req.thought, "Thought")?;
    ctx.app_state.services.analysis.analyze(&thought).await
}

pub fn admin_dashboard(
    ctx: &AppContext,
    req: AdminDashboardRequest,
) -> Result<AdminDashboardResponse> {
    let admin = &ctx.app_state.services.admin;
    match req.action.as_deref() {
        Some("fetchAllUserPrompts") => Ok(AdminDashboardResponse::UserPrompts {
            user_prompts: admin.fetch_all_user_prompts()?,
        }),
        Some("fetchAllFeedback") => Ok(AdminDashboardResponse::Feedback {
            feedback: admin.fetch_all_feedback()?,
        }),
        Some(value) => Err(AppError::InvalidInput(format!("unknown action {}", value))),
        None => Err(AppError::InvalidInput(
            "Missing action parameter".to_string(),
        )),
    }
}

pub fn save_feedback(ctx: &AppContext, req: SaveFeedbackRequest) -> Result<SavedResponse> {
    let user_id = require_field(req.user_id, "User ID")?;
    let feedback = require_field(req.feedback, "Feedback")?;
    ctx.app_state.services.feedback.save(&user_id, &feedback)?;
    Ok(SavedResponse { success: true })
}
