//! Route handlers.

use axum::{
    body::Bytes,
    extract::{rejection::BytesRejection, State},
    http::{header, HeaderMap, StatusCode},
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use serde_json::Value;
use tracing::Instrument;

use crate::http::request::request_id;
use crate::http::server::AppState;
use crate::lead::LeadValidationError;
use crate::observability::metrics;
use crate::relay::SubmitError;

#[derive(Debug, Serialize)]
pub struct WelcomeResponse {
    pub message: &'static str,
}

#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    pub message: &'static str,
}

/// `GET /`
pub async fn root() -> Json<WelcomeResponse> {
    Json(WelcomeResponse {
        message: "Welcome to the Lead Submission API",
    })
}

/// `GET /health`
///
/// Liveness only; never contacts the webhook.
pub async fn health() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok",
        message: "Service is healthy",
    })
}

/// `POST /submit`
///
/// The body is read as JSON when `Content-Type` is absent or names a JSON
/// media type; any other content type is rejected as malformed.
pub async fn submit(
    State(state): State<AppState>,
    headers: HeaderMap,
    payload: Result<Bytes, BytesRejection>,
) -> Response {
    let span = tracing::info_span!("submit", request_id = %request_id(&headers));

    async move {
        let body = match payload {
            Ok(body) => body,
            Err(rejection) if rejection.status() == StatusCode::PAYLOAD_TOO_LARGE => {
                tracing::warn!(error = %rejection.body_text(), "Submission body too large");
                metrics::record_submission("payload_too_large");
                return rejection.into_response();
            }
            Err(rejection) => {
                tracing::warn!(error = %rejection.body_text(), "Failed to read submission body");
                metrics::record_submission("internal_error");
                return rejection.into_response();
            }
        };

        let record = match decode_record(&headers, &body) {
            Ok(record) => record,
            Err(e) => {
                let err = SubmitError::from(e);
                tracing::warn!(kind = err.kind(), error = %err, "Malformed submission body");
                metrics::record_submission(err.kind());
                return err.into_response();
            }
        };

        match state.relay.submit(&record).await {
            Ok(submission) => submission.into_response(),
            Err(e) => e.into_response(),
        }
    }
    .instrument(span)
    .await
}

fn decode_record(headers: &HeaderMap, body: &[u8]) -> Result<Value, LeadValidationError> {
    if let Some(content_type) = headers.get(header::CONTENT_TYPE) {
        if !is_json_content_type(content_type.to_str().unwrap_or_default()) {
            return Err(LeadValidationError::malformed_body(
                "Expected request with `Content-Type: application/json`",
            ));
        }
    }
    serde_json::from_slice(body)
        .map_err(|e| LeadValidationError::malformed_body(format!("JSON decode error: {}", e)))
}

/// `application/json` and any `+json` suffix type, parameters ignored.
fn is_json_content_type(value: &str) -> bool {
    let essence = value.split(';').next().unwrap_or_default().trim();
    match essence.split_once('/') {
        Some((kind, subtype)) => {
            kind.eq_ignore_ascii_case("application")
                && (subtype.eq_ignore_ascii_case("json")
                    || subtype.to_ascii_lowercase().ends_with("+json"))
        }
        None => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_json_content_types() {
        assert!(is_json_content_type("application/json"));
        assert!(is_json_content_type("application/json; charset=utf-8"));
        assert!(is_json_content_type("Application/JSON"));
        assert!(is_json_content_type("application/vnd.api+json"));
        assert!(!is_json_content_type("text/plain"));
        assert!(!is_json_content_type("application/x-www-form-urlencoded"));
        assert!(!is_json_content_type(""));
    }

    #[test]
    fn test_decode_without_content_type() {
        let record = decode_record(&HeaderMap::new(), br#"{"name":"Jo"}"#).unwrap();
        assert_eq!(record["name"], "Jo");

        let err = decode_record(&HeaderMap::new(), b"{").unwrap_err();
        assert_eq!(err.errors[0].loc, vec!["body"]);
        assert_eq!(err.errors[0].kind, "value_error.jsondecode");
    }

    #[test]
    fn test_decode_rejects_non_json_content_type() {
        let mut headers = HeaderMap::new();
        headers.insert(header::CONTENT_TYPE, "text/plain".parse().unwrap());
        let err = decode_record(&headers, br#"{"name":"Jo"}"#).unwrap_err();
        assert_eq!(err.errors[0].loc, vec!["body"]);
    }
}
