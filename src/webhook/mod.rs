//! Outbound webhook delivery.
//!
//! A single attempt per lead. Retries, queueing and delivery guarantees are
//! the webhook's concern, not ours.

pub mod client;

pub use client::{WebhookClient, WebhookError};
