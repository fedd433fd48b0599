use axum::http::StatusCode;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum MissionError {
    #[error("owner name must not be blank")]
    EmptyInput,
    #[error("invalid argument: {0}")]
    InvalidArgument(String),
    #[error("invalid date '{0}', expected YYYY-MM-DD")]
    InvalidDate(String),
    #[error("store unavailable: {0}")]
    StoreUnavailable(String),
    #[error("invalid mission catalogue: {0}")]
    InvalidCatalogue(String),
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

    pub fn unavailable(message: impl Into<String>) -> Self {
        Self {
            status: StatusCode::SERVICE_UNAVAILABLE,
            message: message.into(),
        }
    }

    pub fn internal(err: impl std::error::Error) -> Self {
        Self {
            status: StatusCode::INTERNAL_SERVER_ERROR,
            message: err.to_string(),
        }
    }
}

impl From<MissionError> for AppError {
    fn from(err: MissionError) -> Self {
        match err {
            MissionError::EmptyInput
            | MissionError::InvalidArgument(_)
            | MissionError::InvalidDate(_) => Self::bad_request(err.to_string()),
            MissionError::StoreUnavailable(_) => Self::unavailable(err.to_string()),
            MissionError::InvalidCatalogue(_) => Self::internal(err),
        }
    }
}

impl axum::response::IntoResponse for AppError {
    fn into_response(self) -> axum::response::Response {
        (self.status, self.message).into_response()
    }
}
