//! Tower middleware specific to the relay.

pub mod cors;

pub use cors::cors_layer;
