//! Error types for the Aria backend client.

use thiserror::Error;

/// Errors that can occur when talking to the Aria backend.
#[derive(Error, Debug)]
pub enum ClientError {
    /// HTTP request failed
    #[error("HTTP request failed: {0}")]
    Request(#[from] reqwest::Error),

    /// Server returned an error response
    #[error("server error ({status}): {message}")]
    Server {
        /// HTTP status code
        status: u16,
        /// Response body, if any
        message: String,
    },

    /// Authentication required but no token available or token rejected
    #[error("authentication required")]
    AuthRequired,

    /// The requested entity does not exist
    #[error("not found: {0}")]
    NotFound(String),

    /// The server returned a media type the player cannot use
    #[error("unsupported media: {0}")]
    UnsupportedMedia(String),

    /// Invalid server URL
    #[error("invalid server URL: {0}")]
    InvalidUrl(String),

    /// Failed to parse server response
    #[error("failed to parse response: {0}")]
    Parse(String),
}

/// Result type for client operations.
pub type Result<T> = std::result::Result<T, ClientError>;
