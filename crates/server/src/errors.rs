use axum::extract::rejection::{JsonRejection, PathRejection};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Serialize;
use service::errors::ServiceError;
use thiserror::Error;
use tracing::{error, warn};

use crate::messages::{self, Op};

/// Failure envelope: `{"success": false, "error": "..."}`.
#[derive(Debug)]
pub struct JsonApiError {
    pub status: StatusCode,
    pub message: &'static str,
}

#[derive(Serialize)]
struct ErrorBody {
    success: bool,
    error: &'static str,
}

impl JsonApiError {
    pub fn new(status: StatusCode, message: &'static str) -> Self {
        Self { status, message }
    }

    pub fn not_found() -> Self {
        Self::new(StatusCode::NOT_FOUND, messages::NEWS_NOT_FOUND)
    }

    /// Map a service error raised while performing `op`.
    pub fn from_service(err: ServiceError, op: Op) -> Self {
        match err {
            ServiceError::Validation(detail) => {
                warn!(?op, %detail, "rejected request");
                Self::new(StatusCode::BAD_REQUEST, op.validation_message())
            }
            ServiceError::NotFound(_) => Self::not_found(),
            ServiceError::Storage { ref path, ref message } => {
                error!(?op, %path, error = %message, "storage failure");
                Self::new(StatusCode::INTERNAL_SERVER_ERROR, op.storage_message())
            }
        }
    }

    pub fn bad_body(rejection: JsonRejection) -> Self {
        warn!(error = %rejection.body_text(), "invalid request body");
        Self::new(StatusCode::BAD_REQUEST, messages::INVALID_BODY)
    }

    /// Non-numeric ids can never match an item.
    pub fn bad_path(rejection: PathRejection) -> Self {
        warn!(error = %rejection.body_text(), "invalid path parameter");
        Self::not_found()
    }
}

impl IntoResponse for JsonApiError {
    fn into_response(self) -> Response {
        (self.status, Json(ErrorBody { success: false, error: self.message })).into_response()
    }
}

#[derive(Debug, Error)]
pub enum StartupError {
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),
    #[error("storage initialisation failed: {0}")]
    Storage(#[from] ServiceError),
    #[error(transparent)]
    Io(#[from] std::io::Error),
}
