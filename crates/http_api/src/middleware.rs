use axum::{
    body::Body,
    extract::State,
    http::Request,
    middleware::Next,
    response::Response,
};

use crate::{errors::HttpError, state::HttpState};

/// Server-side gate for the admin surface. The token lives only on the
/// server; no client-supplied identity is trusted.
pub async fn require_admin(
    State(state): State<HttpState>,
    req: Request<Body>,
    next: Next,
) -> Result<Response, HttpError> {
    let token = req
        .headers()
        .get("x-admin-token")
        .and_then(|value| value.to_str().ok());
    if token != Some(state.admin_token.as_str()) {
        return Err(HttpError::unauthorized(
            "missing or invalid admin token",
            "admin_token_invalid",
        ));
    }
    Ok(next.run(req).await)
}
