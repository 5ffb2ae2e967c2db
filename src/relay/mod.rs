//! Request handling core, independent of the HTTP transport.
//!
//! # Data Flow
//! ```text
//! untyped JSON record
//!     → Lead::from_record      (ValidationError on failure)
//!     → Lead::ensure_required  (RequiredFieldError on failure)
//!     → log serialized lead
//!     → WebhookClient::forward (UpstreamError / InternalError on failure)
//!     → Submission
//! ```

pub mod error;
pub mod service;

pub use error::SubmitError;
pub use service::{LeadRelay, Submission};
