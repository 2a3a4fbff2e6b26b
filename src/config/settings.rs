//! Loading and validating the configuration file.

use std::fmt;
use std::path::{Path, PathBuf};

use serde::Deserialize;
use tracing::{debug, info, instrument};

use super::{ConfigError, Result};

/// Environment variable that overrides the configuration file location.
pub const CONFIG_ENV_VAR: &str = "COOLOVER_CONFIG";

/// The keyring service name under which passwords may be stored.
const KEYRING_SERVICE: &str = "coolover";

/// Connection details of the JIRA service.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct ServiceConfig {
    /// The JIRA instance URL (e.g. "https://jira.example.com").
    pub url: String,
}

/// Resolved basic-auth credentials.
#[derive(Clone, PartialEq, Eq)]
pub struct Credentials {
    /// The user name.
    pub user: String,
    /// The password or API token.
    pub password: String,
}

impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credentials")
            .field("user", &self.user)
            .field("password", &"<redacted>")
            .finish()
    }
}

/// The process configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Configuration {
    /// The service to talk to.
    pub service: ServiceConfig,
    /// Credentials, if requests should be authenticated.
    pub credentials: Option<Credentials>,
}

/// On-disk shape of the configuration file.
#[derive(Debug, Deserialize)]
struct ConfigFile {
    service: ServiceConfig,
    #[serde(default)]
    credentials: Option<CredentialsFile>,
}

#[derive(Debug, Deserialize)]
struct CredentialsFile {
    user: String,
    #[serde(default)]
    password: Option<String>,
}

impl Configuration {
    /// Load the configuration from `path`, or from the default location.
    ///
    /// See [`config_path`] for how the location is chosen.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be found or read, is not valid
    /// TOML, or fails validation.
    #[instrument]
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let path = config_path(path)?;
        debug!(path = %path.display(), "Reading configuration");

        let content = std::fs::read_to_string(&path).map_err(|source| ConfigError::ReadError {
            path: path.clone(),
            source,
        })?;

        let config = Self::parse(&content)?;
        info!(url = %config.service.url, authenticated = config.credentials.is_some(), "Configuration loaded");
        Ok(config)
    }

    /// Parse configuration text, looking up missing passwords in the OS keyring.
    pub fn parse(content: &str) -> Result<Self> {
        Self::parse_with(content, password_from_keyring)
    }

    /// Parse configuration text with a custom password lookup.
    ///
    /// `lookup` is consulted only when credentials name a user without a password.
    pub fn parse_with<F>(content: &str, lookup: F) -> Result<Self>
    where
        F: FnOnce(&str) -> Option<String>,
    {
        let file: ConfigFile = toml::from_str(content)?;

        let credentials = match file.credentials {
            Some(CredentialsFile { user, password }) => {
                if user.is_empty() {
                    return Err(ConfigError::ValidationError(
                        "credentials.user cannot be empty".to_string(),
                    ));
                }
                let password = match password {
                    Some(password) => password,
                    None => lookup(&user).ok_or_else(|| ConfigError::MissingPassword(user.clone()))?,
                };
                Some(Credentials { user, password })
            }
            None => None,
        };

        let config = Self {
            service: file.service,
            credentials,
        };
        config.validate()?;
        Ok(config)
    }

    /// Check the presence and basic shape of required values.
    pub fn validate(&self) -> Result<()> {
        let url = self.service.url.trim();
        if url.is_empty() {
            return Err(ConfigError::ValidationError(
                "service.url cannot be empty".to_string(),
            ));
        }

        if !url.starts_with("https://") && !url.starts_with("http://") {
            return Err(ConfigError::ValidationError(format!(
                "service.url '{}' must start with http:// or https://",
                url
            )));
        }

        if let Some(credentials) = &self.credentials {
            if credentials.user.is_empty() {
                return Err(ConfigError::ValidationError(
                    "credentials.user cannot be empty".to_string(),
                ));
            }
        }

        Ok(())
    }
}

/// Resolve the configuration file location.
///
/// In order of precedence: the explicit path, the `COOLOVER_CONFIG`
/// environment variable, then `<config dir>/coolover/config.toml`.
pub fn config_path(explicit: Option<&Path>) -> Result<PathBuf> {
    if let Some(path) = explicit {
        return Ok(path.to_path_buf());
    }

    if let Some(path) = std::env::var_os(CONFIG_ENV_VAR).filter(|p| !p.is_empty()) {
        return Ok(PathBuf::from(path));
    }

    let base_dir = dirs::config_dir().ok_or(ConfigError::NoConfigDir)?;
    Ok(base_dir.join("coolover").join("config.toml"))
}

/// Retrieve a stored password for `user` from the OS keyring.
fn password_from_keyring(user: &str) -> Option<String> {
    let entry = match keyring::Entry::new(KEYRING_SERVICE, user) {
        Ok(entry) => entry,
        Err(e) => {
            debug!("failed to access keyring: {}", e);
            return None;
        }
    };

    match entry.get_password() {
        Ok(password) => Some(password),
        Err(e) => {
            debug!("no keyring password for '{}': {}", user, e);
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;

    fn no_keyring(_: &str) -> Option<String> {
        None
    }

    #[test]
    fn test_parse_with_credentials() {
        let config = Configuration::parse_with(
            r#"
            [service]
            url = "https://jira.example.com"

            [credentials]
            user = "alice"
            password = "secret"
            "#,
            no_keyring,
        )
        .unwrap();

        assert_eq!(config.service.url, "https://jira.example.com");
        let credentials = config.credentials.unwrap();
        assert_eq!(credentials.user, "alice");
        assert_eq!(credentials.password, "secret");
    }

    #[test]
    fn test_parse_without_credentials() {
        let config = Configuration::parse_with(
            "[service]\nurl = \"http://localhost:8080\"\n",
            no_keyring,
        )
        .unwrap();

        assert!(config.credentials.is_none());
    }

    #[test]
    fn test_missing_service_rejected() {
        let result = Configuration::parse_with("[credentials]\nuser = \"a\"\n", no_keyring);
        assert!(matches!(result, Err(ConfigError::ParseError(_))));
    }

    #[test]
    fn test_malformed_toml_rejected() {
        let result = Configuration::parse_with("[service\nurl = ", no_keyring);
        assert!(matches!(result, Err(ConfigError::ParseError(_))));
    }

    #[test]
    fn test_empty_url_rejected() {
        let result = Configuration::parse_with("[service]\nurl = \"\"\n", no_keyring);
        let err = result.unwrap_err();
        assert!(err.to_string().contains("service.url cannot be empty"));
    }

    #[test]
    fn test_invalid_url_scheme_rejected() {
        let result = Configuration::parse_with("[service]\nurl = \"jira.example.com\"\n", no_keyring);
        let err = result.unwrap_err();
        assert!(err.to_string().contains("must start with http"));
    }

    #[test]
    fn test_empty_user_rejected() {
        let result = Configuration::parse_with(
            "[service]\nurl = \"https://j\"\n[credentials]\nuser = \"\"\npassword = \"x\"\n",
            no_keyring,
        );
        assert!(matches!(result, Err(ConfigError::ValidationError(_))));
    }

    #[test]
    fn test_empty_user_without_password_skips_keyring() {
        let result = Configuration::parse_with(
            "[service]\nurl = \"https://j\"\n[credentials]\nuser = \"\"\n",
            |_| panic!("keyring must not be consulted for an empty user"),
        );
        match result {
            Err(ConfigError::ValidationError(msg)) => {
                assert!(msg.contains("credentials.user cannot be empty"))
            }
            other => panic!("Expected ValidationError, got {:?}", other),
        }
    }

    #[test]
    fn test_missing_password_uses_lookup() {
        let config = Configuration::parse_with(
            "[service]\nurl = \"https://j\"\n[credentials]\nuser = \"alice\"\n",
            |user| Some(format!("{}-from-keyring", user)),
        )
        .unwrap();

        assert_eq!(config.credentials.unwrap().password, "alice-from-keyring");
    }

    #[test]
    fn test_missing_password_without_keyring_entry() {
        let result = Configuration::parse_with(
            "[service]\nurl = \"https://j\"\n[credentials]\nuser = \"alice\"\n",
            no_keyring,
        );
        match result {
            Err(ConfigError::MissingPassword(user)) => assert_eq!(user, "alice"),
            other => panic!("Expected MissingPassword, got {:?}", other),
        }
    }

    #[test]
    fn test_credentials_debug_redacts_password() {
        let credentials = Credentials {
            user: "alice".to_string(),
            password: "hunter2".to_string(),
        };
        let debug_output = format!("{:?}", credentials);
        assert!(debug_output.contains("alice"));
        assert!(!debug_output.contains("hunter2"));
    }

    #[test]
    fn test_load_from_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(
            &path,
            "[service]\nurl = \"https://jira.example.com\"\n[credentials]\nuser = \"u\"\npassword = \"p\"\n",
        )
        .unwrap();

        let config = Configuration::load(Some(&path)).unwrap();
        assert_eq!(config.service.url, "https://jira.example.com");
        assert!(config.credentials.is_some());
    }

    #[test]
    fn test_load_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("absent.toml");

        let result = Configuration::load(Some(&path));
        assert!(matches!(result, Err(ConfigError::ReadError { .. })));
    }

    #[test]
    #[serial]
    fn test_config_path_prefers_explicit() {
        std::env::set_var(CONFIG_ENV_VAR, "/tmp/from-env.toml");
        let path = config_path(Some(Path::new("/tmp/explicit.toml"))).unwrap();
        std::env::remove_var(CONFIG_ENV_VAR);

        assert_eq!(path, PathBuf::from("/tmp/explicit.toml"));
    }

    #[test]
    #[serial]
    fn test_config_path_from_env() {
        std::env::set_var(CONFIG_ENV_VAR, "/tmp/from-env.toml");
        let path = config_path(None).unwrap();
        std::env::remove_var(CONFIG_ENV_VAR);

        assert_eq!(path, PathBuf::from("/tmp/from-env.toml"));
    }

    #[test]
    #[serial]
    fn test_config_path_default_location() {
        std::env::remove_var(CONFIG_ENV_VAR);
        if let Ok(path) = config_path(None) {
            assert!(path.ends_with("coolover/config.toml"));
        }
    }
}
