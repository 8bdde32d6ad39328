//! Observability subsystem.
//!
//! # Design Decisions
//! - Structured log events via the tracing crate
//! - Per-request events come from tower-http's TraceLayer, not the handlers
//! - RUST_LOG always wins over the configured log level

pub mod logging;
