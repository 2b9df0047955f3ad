//! Error types for the YouTube Data API client.

/// Errors returned by the YouTube Data API client.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// HTTP transport error.
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// A required parameter was not supplied.
    #[error("missing parameters: {0}")]
    MissingParams(String),

    /// A supplied parameter has an invalid value.
    #[error("invalid parameters: {0}")]
    InvalidParams(String),

    /// The request needs an OAuth access token but the client holds an API key.
    #[error("this request requires an OAuth access token")]
    NeedAuthorization,

    /// Credentials were rejected (401).
    #[error("unauthorized")]
    Unauthorized,

    /// Forbidden (403), e.g. quota exceeded or disabled comments.
    #[error("forbidden ({reason}): {message}")]
    Forbidden { reason: String, message: String },

    /// Resource not found (404).
    #[error("not found: {0}")]
    NotFound(String),

    /// Server returned an error status.
    #[error("API error ({status}, {reason}): {message}")]
    Api {
        status: u16,
        reason: String,
        message: String,
    },

    /// JSON (de)serialization error.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}
