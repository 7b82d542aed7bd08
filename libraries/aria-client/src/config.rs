//! Client configuration.

/// Configuration for connecting to an Aria backend.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Base URL of the backend (e.g. "http://127.0.0.1:9876")
    pub url: String,

    /// Bearer token for authenticated requests
    pub token: Option<String>,
}

impl ServerConfig {
    /// Create a new config with just the URL.
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            token: None,
        }
    }

    /// Create a config with an existing token.
    pub fn with_token(url: impl Into<String>, token: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            token: Some(token.into()),
        }
    }
}
