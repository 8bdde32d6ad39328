//! Request handlers.
//!
//! # Design Decisions
//! - The greeting body is a fixed string; headers and query strings are
//!   ignored entirely
//! - Unmatched requests answer 404 with an empty body, including non-GET
//!   methods on `/` (the route table matches method+path pairs, not paths)

use axum::http::StatusCode;

/// Greeting body served on `GET /`.
pub const GREETING: &str = "Hello World from Kubernetes!";

/// `GET /` handler.
pub async fn greeting() -> &'static str {
    GREETING
}

/// Fallback for every unregistered method+path pair.
pub async fn not_found() -> StatusCode {
    StatusCode::NOT_FOUND
}
