//! Lead submission relay.
//!
//! Accepts lead-capture submissions over HTTP, validates and normalizes
//! them, and forwards each one as JSON to a fixed downstream webhook.
//!
//! # Architecture Overview
//!
//! ```text
//!   Client                ┌──────────────────────────────────────────────┐
//!   ──────────────────────┼─▶ http (axum router + middleware)           │
//!                         │        │                                     │
//!                         │        ▼                                     │
//!                         │   relay::LeadRelay::submit                   │
//!                         │        │  lead::Lead::from_record            │
//!                         │        ▼                                     │
//!                         │   webhook::WebhookClient::forward ───────────┼──▶ Webhook
//!                         │                                              │
//!                         │   config · observability · lifecycle         │
//!                         └──────────────────────────────────────────────┘
//! ```

pub mod config;
pub mod http;
pub mod lead;
pub mod lifecycle;
pub mod observability;
pub mod relay;
pub mod webhook;

pub use config::RelayConfig;
pub use http::HttpServer;
pub use lead::Lead;
pub use lifecycle::Shutdown;
pub use relay::{LeadRelay, SubmitError, Submission};
