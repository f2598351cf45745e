use serde::Serialize;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum AppError {
    #[error("storage error: {0}")]
    Db(#[from] reverse_db::DbError),
    #[error("analysis error: {0}")]
    Ai(#[from] reverse_ai::AiError),
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
    #[error("{0}")]
    InvalidInput(String),
}

pub type Result<T> = std::result::Result<T, AppError>;

impl AppError {
    fn status_and_code(&self) -> (u16, Option<&'static str>) {
        match self {
            Self::InvalidInput(_) => (400, Some("invalid_input")),
            Self::Db(_) | Self::Ai(_) | Self::Io(_) => (500, None),
        }
    }
}

/// Wire shape of every error body the HTTP layer emits.
#[derive(Debug, Serialize)]
pub struct ApiError {
    pub status: u16,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub code: Option<String>,
}

impl From<AppError> for ApiError {
    fn from(err: AppError) -> Self {
        let (status, code) = err.status_and_code();
        Self {
            status,
            message: err.to_string(),
            code: code.map(str::to_string),
        }
    }
}
