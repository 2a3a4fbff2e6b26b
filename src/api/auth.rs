//! HTTP Basic authentication for the JIRA API.

use base64::{engine::general_purpose::STANDARD as BASE64, Engine};

use crate::config::Credentials;

/// Basic auth credentials, kept only in their encoded header form.
#[derive(Debug, Clone)]
pub struct Auth {
    /// The user name.
    user: String,
    /// The complete "Basic ..." header value.
    auth_header: String,
}

impl Auth {
    /// Create basic auth from a user name and password.
    ///
    /// The password is encoded right away and never stored in clear.
    pub fn new(user: &str, password: &str) -> Self {
        Self {
            user: user.to_string(),
            auth_header: build_auth_header(user, password),
        }
    }

    /// Create basic auth from configured credentials.
    pub fn from_credentials(credentials: &Credentials) -> Self {
        Self::new(&credentials.user, &credentials.password)
    }

    /// Get the authorization header value for HTTP requests.
    pub fn header_value(&self) -> &str {
        &self.auth_header
    }

    /// Get the user name.
    pub fn user(&self) -> &str {
        &self.user
    }
}

/// Encode "user:password" in Base64 and prepend "Basic ".
fn build_auth_header(user: &str, password: &str) -> String {
    let credentials = format!("{}:{}", user, password);
    format!("Basic {}", BASE64.encode(credentials.as_bytes()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_build_auth_header() {
        let header = build_auth_header("alice", "s3cret");
        assert!(header.starts_with("Basic "));

        let encoded = header.strip_prefix("Basic ").unwrap();
        let decoded = String::from_utf8(BASE64.decode(encoded).unwrap()).unwrap();
        assert_eq!(decoded, "alice:s3cret");
    }

    #[test]
    fn test_auth_from_credentials() {
        let credentials = Credentials {
            user: "bob".to_string(),
            password: "pw".to_string(),
        };
        let auth = Auth::from_credentials(&credentials);
        assert_eq!(auth.user(), "bob");
        assert_eq!(auth.header_value(), "Basic Ym9iOnB3");
    }

    #[test]
    fn test_auth_does_not_expose_password() {
        let auth = Auth::new("alice", "secret_password");
        let debug_output = format!("{:?}", auth);
        assert!(!debug_output.contains("secret_password"));
    }
}
