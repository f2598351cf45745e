use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};

use reverse_app::{ApiError, AppError};

/// Adapter turning app-level errors into JSON error responses. The body
/// carries the same status the response line does.
#[derive(Debug)]
pub struct HttpError(ApiError);

impl HttpError {
    pub fn unauthorized(message: impl Into<String>, code: &str) -> Self {
        Self(ApiError {
            status: StatusCode::UNAUTHORIZED.as_u16(),
            message: message.into(),
            code: Some(code.to_string()),
        })
    }
}

impl From<AppError> for HttpError {
    fn from(err: AppError) -> Self {
        Self(ApiError::from(err))
    }
}

impl IntoResponse for HttpError {
    fn into_response(self) -> Response {
        let status =
            StatusCode::from_u16(self.0.status).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);
        (status, Json(self.0)).into_response()
    }
}
