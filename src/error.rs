//! Centralized error types for coolover.
//!
//! Every layer has its own `thiserror` enum; `AppError` aggregates them and
//! knows how to describe each one to the person at the terminal.

use thiserror::Error;

use crate::api::ApiError;
use crate::config::ConfigError;
use crate::ui::FormatError;

/// The main application error type.
#[derive(Debug, Error)]
pub enum AppError {
    /// Configuration-related errors.
    #[error("{0}")]
    Config(#[from] ConfigError),

    /// API-related errors.
    #[error("{0}")]
    Api(#[from] ApiError),

    /// An issue could not be prepared for display.
    #[error("{0}")]
    Format(#[from] FormatError),

    /// IO errors (writing attachments or output).
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl AppError {
    /// Get a user-friendly message for display.
    pub fn user_message(&self) -> String {
        match self {
            AppError::Config(e) => match e {
                ConfigError::NoConfigDir => {
                    "Could not find the configuration directory.".to_string()
                }
                ConfigError::ReadError { path, .. } => {
                    format!("Could not read configuration file {}.", path.display())
                }
                ConfigError::ParseError(e) => format!("Configuration file is invalid: {}", e),
                ConfigError::ValidationError(msg) => format!("Configuration error: {}", msg),
                ConfigError::MissingPassword(user) => {
                    format!("No password configured for user '{}'.", user)
                }
            },
            AppError::Api(e) => match e {
                ApiError::Unauthorized => {
                    "Authentication failed. Please check the configured user and password."
                        .to_string()
                }
                ApiError::Forbidden => {
                    "Access denied. You don't have permission to access this resource.".to_string()
                }
                ApiError::NotFound(resource) => format!("'{}' was not found.", resource),
                ApiError::RateLimited => {
                    "Too many requests. Please wait a moment and try again.".to_string()
                }
                ApiError::ServerError(msg) => format!("JIRA server error: {}", msg),
                ApiError::Network(e) => format!("Connection failed: {}", e),
                ApiError::InvalidResponse(msg) => format!("Unexpected response from JIRA: {}", msg),
            },
            AppError::Format(e) => e.to_string(),
            AppError::Io(e) => format!("A file operation failed: {}", e),
        }
    }

    /// Get a suggested action for the user.
    pub fn suggested_action(&self) -> Option<&'static str> {
        match self {
            AppError::Config(ConfigError::NoConfigDir)
            | AppError::Config(ConfigError::ReadError { .. }) => Some(
                "Create a config.toml with a [service] url, or point --config / COOLOVER_CONFIG at one.",
            ),
            AppError::Config(ConfigError::MissingPassword(_)) => Some(
                "Set credentials.password or store the password in the OS keyring under service 'coolover'.",
            ),
            AppError::Api(ApiError::Unauthorized) => {
                Some("Check the [credentials] section of your configuration.")
            }
            AppError::Api(ApiError::Network(_)) => {
                Some("Check your network connection and the configured service.url.")
            }
            _ => None,
        }
    }
}

/// Result type for application operations.
pub type Result<T> = std::result::Result<T, AppError>;
