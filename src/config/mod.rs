//! Configuration management for ghsec

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::error::{ConfigError, Result};

/// Default API host, used when neither the config file nor the
/// environment overrides it.
pub const DEFAULT_HOST: &str = "github.com";

/// Application configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    /// API token used for the Authorization header
    #[serde(skip_serializing_if = "Option::is_none")]
    pub token: Option<String>,

    /// Default API host (e.g. a GitHub Enterprise instance)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub host: Option<String>,

    /// Full REST base URL override, applied to every host.
    /// Mainly useful for development and testing.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub api_url: Option<String>,
}

impl Config {
    /// Get the default config file path
    pub fn default_path() -> Result<PathBuf> {
        let home = dirs::home_dir().ok_or(ConfigError::Invalid(
            "Could not determine home directory".to_string(),
        ))?;

        Ok(home.join(".ghsec").join("config.yaml"))
    }

    /// Load configuration, preferring an explicit path over the default
    /// location, then apply environment overrides.
    ///
    /// A missing file at the default location yields an empty config (the
    /// token may still come from the environment); a missing file at an
    /// explicitly requested path is an error.
    pub fn load_at(path: Option<&str>) -> Result<Self> {
        let mut config = match path {
            Some(p) => {
                let p = PathBuf::from(p);
                if !p.exists() {
                    return Err(ConfigError::NotFound(p.display().to_string()).into());
                }
                Self::load_from(p)?
            }
            None => {
                let p = Self::default_path()?;
                if p.exists() {
                    Self::load_from(p)?
                } else {
                    Self::default()
                }
            }
        };

        // Environment wins over the config file
        if let Some(token) = first_env(&["GHSEC_TOKEN", "GITHUB_TOKEN", "GH_TOKEN"]) {
            config.token = Some(token);
        }
        if let Some(host) = first_env(&["GHSEC_HOST", "GH_HOST"]) {
            config.host = Some(host);
        }
        if let Some(api_url) = first_env(&["GHSEC_API_HOST"]) {
            config.api_url = Some(api_url);
        }

        Ok(config)
    }

    /// Load configuration from a specific path
    pub fn load_from(path: PathBuf) -> Result<Self> {
        let contents = std::fs::read_to_string(&path)
            .map_err(|e| ConfigError::ReadError(format!("{}: {}", path.display(), e)))?;
        let config: Config = serde_yaml::from_str(&contents).map_err(ConfigError::from)?;

        Ok(config)
    }

    /// The effective default host
    pub fn host(&self) -> &str {
        self.host.as_deref().unwrap_or(DEFAULT_HOST)
    }

    /// Get the API token, returning an error if not set
    pub fn require_token(&self) -> Result<&str> {
        self.token
            .as_deref()
            .filter(|t| !t.is_empty())
            .ok_or_else(|| ConfigError::MissingToken.into())
    }
}

/// First non-empty value among the given environment variables
fn first_env(names: &[&str]) -> Option<String> {
    names
        .iter()
        .filter_map(|name| std::env::var(name).ok())
        .find(|v| !v.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;
    use std::io::Write;

    fn write_temp_config(contents: &str) -> (tempfile::TempDir, PathBuf) {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join("config.yaml");
        let mut file = std::fs::File::create(&path).expect("create config");
        file.write_all(contents.as_bytes()).expect("write config");
        (dir, path)
    }

    #[test]
    fn test_load_from_full_config() {
        let (_dir, path) = write_temp_config(
            "token: abc123\nhost: ghe.example.com\napi_url: http://127.0.0.1:9999\n",
        );

        let config = Config::load_from(path).unwrap();

        assert_eq!(config.token.as_deref(), Some("abc123"));
        assert_eq!(config.host(), "ghe.example.com");
        assert_eq!(config.api_url.as_deref(), Some("http://127.0.0.1:9999"));
    }

    #[test]
    fn test_load_from_minimal_config() {
        let (_dir, path) = write_temp_config("token: abc123\n");

        let config = Config::load_from(path).unwrap();

        assert_eq!(config.token.as_deref(), Some("abc123"));
        assert_eq!(config.host(), DEFAULT_HOST);
        assert!(config.api_url.is_none());
    }

    #[test]
    fn test_load_from_invalid_yaml() {
        let (_dir, path) = write_temp_config("token: [unterminated\n");

        let err = Config::load_from(path).unwrap_err();
        match err {
            Error::Config(ConfigError::ParseError(_)) => (),
            other => panic!("Expected ParseError, got {other:?}"),
        }
    }

    #[test]
    fn test_load_at_missing_explicit_path() {
        let dir = tempfile::tempdir().expect("tempdir");
        let missing = dir.path().join("nope.yaml");

        let err = Config::load_at(Some(missing.to_str().unwrap())).unwrap_err();
        match err {
            Error::Config(ConfigError::NotFound(_)) => (),
            other => panic!("Expected NotFound, got {other:?}"),
        }
    }

    #[test]
    fn test_require_token_missing() {
        let config = Config::default();
        assert!(config.require_token().is_err());
    }

    #[test]
    fn test_require_token_empty_string() {
        let config = Config {
            token: Some(String::new()),
            ..Default::default()
        };
        assert!(config.require_token().is_err());
    }

    #[test]
    fn test_require_token_present() {
        let config = Config {
            token: Some("abc123".to_string()),
            ..Default::default()
        };
        assert_eq!(config.require_token().unwrap(), "abc123");
    }
}
