//! Mapping submission outcomes to HTTP responses.
//!
//! Error bodies are `{"detail": ...}`: a list of field errors for schema
//! validation failures, a message string for everything else.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use serde_json::Value;

use crate::relay::{SubmitError, Submission};

#[derive(Debug, Serialize)]
struct ErrorBody {
    detail: Value,
}

/// Caller-facing status for each failure kind.
pub fn status_for(error: &SubmitError) -> StatusCode {
    match error {
        SubmitError::Validation(_) | SubmitError::RequiredField(_) => {
            StatusCode::UNPROCESSABLE_ENTITY
        }
        SubmitError::Upstream { .. } => StatusCode::BAD_REQUEST,
        SubmitError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
    }
}

impl IntoResponse for SubmitError {
    fn into_response(self) -> Response {
        let status = status_for(&self);
        let detail = match &self {
            SubmitError::Validation(e) => serde_json::to_value(&e.errors)
                .unwrap_or_else(|_| Value::String(e.to_string())),
            other => Value::String(other.to_string()),
        };
        (status, Json(ErrorBody { detail })).into_response()
    }
}

impl IntoResponse for Submission {
    fn into_response(self) -> Response {
        (StatusCode::OK, Json(self)).into_response()
    }
}
