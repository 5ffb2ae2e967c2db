//! The lead value object.

use serde::Serialize;
use thiserror::Error;

/// A validated, normalized lead.
///
/// Only obtainable through [`Lead::from_record`], so every instance has a
/// title-cased non-empty name and a syntactically valid email. Fields are
/// private and the value is never mutated after construction.
///
/// Serializes to exactly the payload forwarded to the webhook:
/// `{name, email, company, message}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Lead {
    pub(super) name: String,
    pub(super) email: String,
    pub(super) company: String,
    pub(super) message: String,
}

/// Raised when a constructed lead is still missing a required field.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Name and email are required")]
pub struct RequiredFieldError;

impl Lead {
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn email(&self) -> &str {
        &self.email
    }

    pub fn company(&self) -> &str {
        &self.company
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    /// Re-check the required fields after construction.
    ///
    /// Schema validation already rejects empty names and emails; this check
    /// runs regardless and is reported as its own error kind.
    pub fn ensure_required(&self) -> Result<(), RequiredFieldError> {
        if self.name.is_empty() || self.email.is_empty() {
            return Err(RequiredFieldError);
        }
        Ok(())
    }
}
