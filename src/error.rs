//! Error types for the GoChat CLI

use thiserror::Error;

/// Result type alias for GoChat operations
pub type Result<T> = std::result::Result<T, Error>;

/// Top-level error type for the application
#[derive(Debug, Error)]
pub enum Error {
    #[error(transparent)]
    Api(#[from] ApiError),

    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Navigation(#[from] NavigationError),

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error("Interactive prompt error: {0}")]
    Dialoguer(String),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Operation failed: {0}")]
    Other(String),
}

impl From<dialoguer::Error> for Error {
    fn from(err: dialoguer::Error) -> Self {
        Error::Dialoguer(err.to_string())
    }
}

/// API-related errors
#[derive(Debug, Error)]
pub enum ApiError {
    /// Non-2xx response. Displays the backend's `message` when it sent one,
    /// otherwise `HTTP <status>`.
    #[error("{}", http_message(.status, .message))]
    Http { status: u16, message: Option<String> },

    #[error("Network error: {0}")]
    Network(String),

    #[error("Invalid API response: {0}")]
    InvalidResponse(String),

    #[error("Invalid numeric identifier: {0:?}")]
    InvalidId(String),
}

fn http_message(status: &u16, message: &Option<String>) -> String {
    match message {
        Some(msg) => msg.clone(),
        None => format!("HTTP {}", status),
    }
}

impl ApiError {
    /// HTTP status code, if this error came from a response
    pub fn status(&self) -> Option<u16> {
        match self {
            ApiError::Http { status, .. } => Some(*status),
            _ => None,
        }
    }
}

impl From<reqwest::Error> for ApiError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_timeout() {
            ApiError::Network("Request timed out".to_string())
        } else if err.is_connect() {
            ApiError::Network(format!("Failed to connect to API: {}", err))
        } else {
            ApiError::Network(err.to_string())
        }
    }
}

/// Configuration-related errors
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Configuration file not found.")]
    NotFound,

    #[error("Failed to parse configuration: {0}")]
    ParseError(String),

    #[error("Invalid configuration: {0}")]
    Invalid(String),

    #[error("Failed to save configuration: {0}")]
    SaveError(String),

    #[error("Failed to parse credentials file {path}: {message}")]
    Credentials { path: String, message: String },
}

impl From<serde_yaml::Error> for ConfigError {
    fn from(err: serde_yaml::Error) -> Self {
        ConfigError::ParseError(err.to_string())
    }
}

/// Route guard outcomes that stop a command from running
#[derive(Debug, Error)]
pub enum NavigationError {
    #[error("Not logged in. Run `gochat login` first.")]
    LoginRequired,

    #[error("Already logged in as user {0}. Run `gochat logout` to switch accounts.")]
    AlreadyLoggedIn(String),

    #[error("Navigation to {0} did not settle after {1} redirects")]
    RedirectLoop(String, usize),
}
