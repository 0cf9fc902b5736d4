use axum::http::StatusCode;
use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ListError {
    #[error("'{0}' is already on the list")]
    Duplicate(String),
    #[error("no entry at index {index} (list has {len})")]
    OutOfBounds { index: usize, len: usize },
    #[error("invalid offering: {0}")]
    InvalidOffering(&'static str),
}

#[derive(Debug, Error)]
pub enum HistoryError {
    #[error("history sync is not configured")]
    Disabled,
    #[error("no credential available for history sync")]
    MissingCredential,
    #[error("history request failed: {0}")]
    Transport(#[from] reqwest::Error),
    #[error("history API answered {0}")]
    Status(reqwest::StatusCode),
    #[error("history API reported failure")]
    Rejected,
    #[error("history API response had no history list")]
    Malformed,
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ReportError {
    #[error("nothing to export: both lists are empty")]
    Empty,
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("{name} is not a valid number: {value}")]
    InvalidNumber { name: &'static str, value: String },
}

#[derive(Debug)]
pub struct AppError {
    pub status: StatusCode,
    pub message: String,
}

impl AppError {
    pub fn bad_request(message: impl Into<String>) -> Self {
        Self {
            status: StatusCode::BAD_REQUEST,
            message: message.into(),
        }
    }
}

impl From<ListError> for AppError {
    fn from(err: ListError) -> Self {
        let status = match err {
            ListError::Duplicate(_) => StatusCode::CONFLICT,
            ListError::OutOfBounds { .. } => StatusCode::NOT_FOUND,
            ListError::InvalidOffering(_) => StatusCode::BAD_REQUEST,
        };
        Self {
            status,
            message: err.to_string(),
        }
    }
}

impl From<ReportError> for AppError {
    fn from(err: ReportError) -> Self {
        Self {
            status: StatusCode::UNPROCESSABLE_ENTITY,
            message: err.to_string(),
        }
    }
}

impl axum::response::IntoResponse for AppError {
    fn into_response(self) -> axum::response::Response {
        (self.status, self.message).into_response()
    }
}
