//! Observability for the Lamague engines.
//! `tracing` with `EnvFilter`, and structured event helpers.

pub mod events;
pub mod setup;

pub use setup::{init_tracing, init_tracing_with_config, init_tracing_with_filter};
