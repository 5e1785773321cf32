//! Error types for the ghsec CLI

use thiserror::Error;

/// Result type alias for ghsec operations
pub type Result<T> = std::result::Result<T, Error>;

/// Top-level error type for the application
#[derive(Debug, Error)]
pub enum Error {
    #[error("could not create http client: {0}")]
    ClientCreation(String),

    #[error(transparent)]
    Api(#[from] ApiError),

    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error("could not determine base repository: {0}")]
    Resolution(#[from] RepoError),

    #[error("failed to write output: {0}")]
    Render(#[source] std::io::Error),
}

/// API-related errors
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("Authentication failed. Check your token (GITHUB_TOKEN or the config file).")]
    Unauthorized,

    #[error("Access denied. You don't have permission to access this resource.")]
    Forbidden,

    #[error("Resource not found: {0}")]
    NotFound(String),

    #[error("Bad request: {0}")]
    BadRequest(String),

    #[error("Server error: {0}")]
    ServerError(String),

    #[error("Network error: {0}")]
    Network(String),

    #[error("Invalid API response: {0}")]
    InvalidResponse(String),
}

impl From<reqwest::Error> for ApiError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_timeout() {
            ApiError::Network("Request timed out".to_string())
        } else if err.is_connect() {
            ApiError::Network("Failed to connect to API".to_string())
        } else {
            ApiError::Network(err.to_string())
        }
    }
}

/// Configuration-related errors
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Configuration file not found: {0}")]
    NotFound(String),

    #[error("Failed to parse configuration: {0}")]
    ParseError(String),

    #[error("Invalid configuration: {0}")]
    Invalid(String),

    #[error("Failed to read configuration: {0}")]
    ReadError(String),

    #[error("No token configured. Set GITHUB_TOKEN or add `token:` to ~/.ghsec/config.yaml.")]
    MissingToken,
}

impl From<serde_yaml::Error> for ConfigError {
    fn from(err: serde_yaml::Error) -> Self {
        ConfigError::ParseError(err.to_string())
    }
}

/// Repository-context errors
#[derive(Debug, Error)]
pub enum RepoError {
    #[error("not a git repository (or no \"origin\" remote configured)")]
    NoRemote,

    #[error("unsupported remote URL: {0:?}")]
    UnsupportedRemote(String),

    #[error("expected the \"[HOST/]OWNER/REPO\" format, got {0:?}")]
    InvalidFormat(String),

    #[error("failed to run git: {0}")]
    Git(String),
}
