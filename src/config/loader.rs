//! Configuration loading and environment resolution.
//!
//! # Responsibilities
//! - Parse the optional TOML config file
//! - Apply the `PORT` environment override
//! - Reject malformed port values before anything binds

use std::fs;
use std::path::Path;
use thiserror::Error;

use crate::config::schema::ServerConfig;

/// Environment variable consulted for the listening port.
pub const PORT_VAR: &str = "PORT";

/// Error type for configuration loading.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config file: {0}")]
    Io(#[from] std::io::Error),

    #[error("failed to parse config file: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("invalid {PORT_VAR} value {0:?}: expected an integer in 1..=65535")]
    InvalidPort(String),
}

/// Load configuration, falling back to defaults when no file is given,
/// then apply the port overrides.
pub fn load_config(path: Option<&Path>, cli_port: Option<u16>) -> Result<ServerConfig, ConfigError> {
    let config: ServerConfig = match path {
        Some(path) => toml::from_str(&fs::read_to_string(path)?)?,
        None => ServerConfig::default(),
    };

    apply_overrides(config, std::env::var(PORT_VAR).ok(), cli_port)
}

/// Apply port overrides in precedence order:
/// CLI flag > `PORT` env > config file > built-in default.
///
/// A malformed `PORT` is rejected even when a CLI flag would win.
pub fn apply_overrides(
    mut config: ServerConfig,
    env_port: Option<String>,
    cli_port: Option<u16>,
) -> Result<ServerConfig, ConfigError> {
    if let Some(port) = port_from_env(env_port)? {
        config.listener.port = port;
    }

    if let Some(port) = cli_port {
        config.listener.port = port;
    }

    Ok(config)
}

/// Resolve an environment-supplied port value.
///
/// Absent or empty values mean "not set" and leave the configured port in
/// place. Anything else must parse to a non-zero `u16`.
pub fn port_from_env(value: Option<String>) -> Result<Option<u16>, ConfigError> {
    let value = match value {
        Some(v) if !v.trim().is_empty() => v,
        _ => return Ok(None),
    };

    match value.trim().parse::<u16>() {
        Ok(port) if port > 0 => Ok(Some(port)),
        _ => Err(ConfigError::InvalidPort(value)),
    }
}
