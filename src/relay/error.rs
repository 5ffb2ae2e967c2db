//! Tagged outcome of a failed submission.

use thiserror::Error;

use crate::lead::{LeadValidationError, RequiredFieldError};

/// Why a submission failed.
///
/// Each variant maps to exactly one caller-facing status: the two client
/// errors to 422, `Upstream` to 400 and `Internal` to 500.
#[derive(Debug, Error)]
pub enum SubmitError {
    /// The record did not pass schema validation.
    #[error(transparent)]
    Validation(#[from] LeadValidationError),

    /// A required field was empty after construction.
    #[error(transparent)]
    RequiredField(#[from] RequiredFieldError),

    /// The webhook answered with a non-success status.
    #[error("Webhook error: {body}")]
    Upstream { status: u16, body: String },

    /// Network failure, timeout, or anything else unexpected.
    #[error("Internal server error: {0}")]
    Internal(String),
}

impl SubmitError {
    /// Label used for logs and the submissions counter.
    pub fn kind(&self) -> &'static str {
        match self {
            SubmitError::Validation(_) => "validation_error",
            SubmitError::RequiredField(_) => "required_field_error",
            SubmitError::Upstream { .. } => "upstream_error",
            SubmitError::Internal(_) => "internal_error",
        }
    }

    /// Whether the caller, rather than the webhook or the relay, is at fault.
    pub fn is_client_error(&self) -> bool {
        matches!(self, SubmitError::Validation(_) | SubmitError::RequiredField(_))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = SubmitError::Upstream {
            status: 404,
            body: "Webhook not registered".into(),
        };
        assert_eq!(err.to_string(), "Webhook error: Webhook not registered");

        let err = SubmitError::Internal("operation timed out".into());
        assert_eq!(err.to_string(), "Internal server error: operation timed out");

        let err = SubmitError::from(RequiredFieldError);
        assert_eq!(err.to_string(), "Name and email are required");
    }

    #[test]
    fn test_kinds() {
        assert!(SubmitError::from(RequiredFieldError).is_client_error());
        assert!(!SubmitError::Internal(String::new()).is_client_error());
        assert_eq!(SubmitError::Internal(String::new()).kind(), "internal_error");
    }
}
