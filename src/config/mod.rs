//! Configuration management subsystem.
//!
//! # Data Flow
//! ```text
//! config file (TOML, optional)
//!     → loader.rs (parse & deserialize, defaults fill gaps)
//!     → PORT environment override applied
//!     → ServerConfig (resolved, immutable)
//! ```
//!
//! # Design Decisions
//! - Config is immutable once resolved; the port never changes after startup
//! - All fields have defaults so the service runs with no config file at all
//! - Precedence: CLI flag > PORT env var > config file > built-in default

pub mod loader;
pub mod schema;

pub use loader::{load_config, ConfigError};
pub use schema::ServerConfig;
