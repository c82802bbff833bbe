//! Error types for the API client.

/// Errors that can occur when configuring the client or making API requests.
#[derive(thiserror::Error, Debug)]
pub enum Error {
    /// The API key is missing, empty, or not usable as a header value.
    #[error("Configuration error: {0}")]
    Configuration(String),
    /// A network-level failure (connect, timeout, reset, body read).
    #[error("Transport error: {0}")]
    Transport(#[from] reqwest::Error),
    /// The API returned a non-success status. `body` is the raw response text.
    #[error("API request failed with status {status}")]
    ApiRequest { status: u16, body: String },
    /// The response was not a JSON object or lacked an expected field.
    #[error("Unexpected response shape: {0}")]
    Schema(String),
    /// The request succeeded but nothing matched.
    #[error("{0}")]
    NotFound(String),
    /// A caller-supplied argument was rejected before any request was sent.
    #[error("Invalid input: {0}")]
    InvalidInput(String),
}

impl Error {
    /// HTTP status code of an [`Error::ApiRequest`], `None` for every other kind.
    pub fn status(&self) -> Option<u16> {
        match self {
            Error::ApiRequest { status, .. } => Some(*status),
            _ => None,
        }
    }
}
