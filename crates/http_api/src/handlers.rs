use axum::{
    extract::{Json, State},
    response::IntoResponse,
};

use app_api::{
    AdminDashboardRequest, AnalyzeThoughtRequest, PromptLimitRequest, SaveFeedbackRequest,
};

use crate::{errors::HttpError, state::HttpState};

pub async fn check_prompt_limit(
    State(state): State<HttpState>,
    Json(req): Json<PromptLimitRequest>,
) -> Result<impl IntoResponse, HttpError> {
    let response = app_api::check_prompt_limit(&state.context, req)?;
    Ok(Json(response))
}

pub async fn analyze_thought(
    State(state): State<HttpState>,
    Json(req): Json<AnalyzeThoughtRequest>,
) -> Result<impl IntoResponse, HttpError> {
    let response = app_api::analyze_thought(&state.context, req).await?;
    Ok(Json(response))
}

pub async fn admin_dashboard(
    State(state): State<HttpState>,
    Json(req): Json<AdminDashboardRequest>,
) -> Result<impl IntoResponse, HttpError> {
    let response = app_api::admin_dashboard(&state.context, req)?;
    Ok(Json(response))
}

pub async fn save_feedback(
    State(state): State<HttpState>,
    Json(req): Json<SaveFeedbackRequest>,
) -> Result<impl IntoResponse, HttpError> {
    let response = app_api::save_feedback(&state.context, req)?;
    Ok(Json(response))
}

pub async fn health() -> impl IntoResponse {
    Json(app_api::ok())
}
