//! Lead domain model.
//!
//! # Data Flow
//! ```text
//! untyped JSON record
//!     → validation.rs (shape checks, trim + title case, email normalization)
//!     → Lead (immutable, request-scoped)
//!     → model.rs ensure_required (re-check)
//!     → serialized as the webhook payload
//! ```

pub mod model;
pub mod validation;

pub use model::{Lead, RequiredFieldError};
pub use validation::{is_valid_email, normalize_email, title_case, FieldError, LeadValidationError};
