use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Error taxonomy for the whole app. Deleting or updating an absent id is
/// deliberately not represented here: those are successful no-ops.
#[derive(Error, Debug)]
pub enum AppError {
    #[error("no access token provided")]
    MissingCredential,

    #[error("invalid access token")]
    InvalidCredential,

    #[error("{0}")]
    MalformedInput(String),

    #[error("upstream failure: {0}")]
    Upstream(String),
}

impl AppError {
    pub fn malformed(message: impl Into<String>) -> Self {
        Self::MalformedInput(message.into())
    }

    pub fn upstream(err: impl std::error::Error) -> Self {
        Self::Upstream(err.to_string())
    }
}

impl From<std::io::Error> for AppError {
    fn from(err: std::io::Error) -> Self {
        Self::upstream(err)
    }
}

impl From<serde_json::Error> for AppError {
    fn from(err: serde_json::Error) -> Self {
        Self::upstream(err)
    }
}

#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorBody {
    pub error: String,
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = match self {
            Self::MissingCredential | Self::InvalidCredential => StatusCode::UNAUTHORIZED,
            Self::MalformedInput(_) => StatusCode::BAD_REQUEST,
            Self::Upstream(_) => StatusCode::INTERNAL_SERVER_ERROR,
        };

        let body = ErrorBody {
            error: self.to_string(),
        };
        (status, Json(body)).into_response()
    }
}
