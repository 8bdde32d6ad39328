//! HTTP protocol handling subsystem.
//!
//! # Data Flow
//! ```text
//! TCP connection
//!     → server.rs (Axum setup, trace layer)
//!     → handlers.rs (greeting on GET /, 404 for everything else)
//!     → Send to client
//! ```

pub mod handlers;
pub mod server;

pub use server::HttpServer;
