//! Configuration loading and validation.
//!
//! Configuration is explicit: the root [`Config`] aggregates the per-module
//! sections and is loaded once at startup, then handed to the façades at
//! construction. There are no ambient lookups at operation time.

mod loader;
mod types;
mod validate;

use thiserror::Error;

pub use loader::{load_config, load_config_from_str};
pub use types::{Config, StorageConfig};
pub use validate::validate_config;

/// Errors that can occur while loading or validating configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Configuration file not found.
    #[error("Configuration file not found: {0}")]
    FileNotFound(String),

    /// Configuration could not be parsed.
    #[error("Failed to parse configuration: {0}")]
    ParseError(String),

    /// Configuration parsed but failed validation.
    #[error("Invalid configuration: {0}")]
    Invalid(String),
}
