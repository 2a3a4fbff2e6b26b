//! API error types for the JIRA client.

use thiserror::Error;

/// Errors that can occur when talking to the JIRA REST API.
#[derive(Debug, Error)]
pub enum ApiError {
    /// Authentication failed - invalid user or password.
    #[error("Authentication failed: check the configured user and password")]
    Unauthorized,

    /// Permission denied - user lacks access to the resource.
    #[error("Permission denied: you don't have access to this resource")]
    Forbidden,

    /// Resource not found.
    #[error("Resource not found: {0}")]
    NotFound(String),

    /// Rate limited by the JIRA API.
    #[error("Rate limited: please wait before retrying")]
    RateLimited,

    /// JIRA server error or any other unexpected status.
    #[error("JIRA server error: {0}")]
    ServerError(String),

    /// Transport failure (connection refused, DNS, timeout, ...).
    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    /// The response body was not the JSON we expected.
    #[error("Invalid API response: {0}")]
    InvalidResponse(String),
}

/// Result type for API operations.
pub type Result<T> = std::result::Result<T, ApiError>;

impl ApiError {
    /// Create an error from an HTTP status code.
    pub fn from_status(status: reqwest::StatusCode, context: &str) -> Self {
        match status.as_u16() {
            401 => ApiError::Unauthorized,
            403 => ApiError::Forbidden,
            404 => ApiError::NotFound(context.to_string()),
            429 => ApiError::RateLimited,
            500..=599 => ApiError::ServerError(format!("HTTP {}: {}", status, context)),
            _ => ApiError::ServerError(format!("Unexpected HTTP {}: {}", status, context)),
        }
    }

    /// Build an error from a non-success response, preferring the messages
    /// JIRA puts in `errorMessages` or `errors` over the bare URL.
    pub fn from_response(status: reqwest::StatusCode, url: &str, body: &[u8]) -> Self {
        if let Ok(json) = serde_json::from_slice::<serde_json::Value>(body) {
            if let Some(arr) = json.get("errorMessages").and_then(|m| m.as_array()) {
                let messages: Vec<&str> = arr.iter().filter_map(|v| v.as_str()).collect();
                if !messages.is_empty() {
                    return ApiError::from_status(status, &messages.join(", "));
                }
            }
            if let Some(obj) = json.get("errors").and_then(|e| e.as_object()) {
                let errors: Vec<String> = obj.iter().map(|(k, v)| format!("{}: {}", k, v)).collect();
                if !errors.is_empty() {
                    return ApiError::from_status(status, &errors.join(", "));
                }
            }
        }

        ApiError::from_status(status, url)
    }
}
