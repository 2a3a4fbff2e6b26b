//! Configuration management for coolover.
//!
//! The configuration names the JIRA service to talk to and, optionally, the
//! credentials to authenticate with. It is read once at startup and passed
//! down explicitly from there.

mod settings;

use std::path::PathBuf;

use thiserror::Error;

pub use settings::{config_path, Configuration, Credentials, ServiceConfig, CONFIG_ENV_VAR};

/// Errors raised while locating, reading or validating the configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// No platform configuration directory could be determined.
    #[error("could not determine the configuration directory")]
    NoConfigDir,

    /// The configuration file could not be read.
    #[error("failed to read configuration file {path}: {source}")]
    ReadError {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The configuration file is not valid TOML or has the wrong shape.
    #[error("failed to parse configuration: {0}")]
    ParseError(#[from] toml::de::Error),

    /// A value is present but unusable.
    #[error("invalid configuration: {0}")]
    ValidationError(String),

    /// Credentials name a user but no password was configured or stored.
    #[error("no password configured for user '{0}' and none found in the keyring")]
    MissingPassword(String),
}

/// Result type for configuration operations.
pub type Result<T> = std::result::Result<T, ConfigError>;
