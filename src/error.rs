use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde_json::json;

/// Why a single provider item was left out of a normalized batch.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum NormalizeError {
    #[error("Malformed activity: {0}")]
    Malformed(String),
    #[error("Missing activity type")]
    MissingType,
    #[error("Missing or unparseable start date")]
    MissingTimestamp,
    #[error("Invalid {field}: {value}")]
    InvalidNumber { field: &'static str, value: f64 },
    #[error("Duplicate activity id {0}")]
    DuplicateId(String),
}

/// Caller broke a function's input contract.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ContractError {
    #[error("Distance must be finite and non-negative, got {0}")]
    InvalidDistance(f64),
}

#[derive(Debug, thiserror::Error)]
pub enum SourceError {
    #[error("{0} is not configured")]
    MissingCredentials(&'static str),
    #[error("Request to {provider} failed: {message}")]
    Request {
        provider: &'static str,
        message: String,
    },
    #[error("{provider} responded with {status}: {body}")]
    Status {
        provider: &'static str,
        status: u16,
        body: String,
    },
    #[error("Invalid {provider} response: {message}")]
    InvalidResponse {
        provider: &'static str,
        message: String,
    },
}

#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error(transparent)]
    Source(#[from] SourceError),
    #[error(transparent)]
    Contract(#[from] ContractError),
    #[error("Batch not found: {0}")]
    NotFound(String),
    #[error("Invalid request: {0}")]
    BadRequest(String),
    #[error("Internal error: {0}")]
    Internal(String),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = match &self {
            AppError::Source(SourceError::MissingCredentials(_)) | AppError::BadRequest(_) => {
                StatusCode::BAD_REQUEST
            }
            AppError::Source(SourceError::Status { status: 401 | 403, .. }) => {
                StatusCode::UNAUTHORIZED
            }
            AppError::Source(_) => StatusCode::BAD_GATEWAY,
            AppError::NotFound(_) => StatusCode::NOT_FOUND,
            AppError::Contract(_) | AppError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        };

        let body = Json(json!({
            "error": self.to_string()
        }));

        (status, body).into_response()
    }
}
