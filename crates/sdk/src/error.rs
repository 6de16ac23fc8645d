//! Error types for the pkgdocs SDK.

/// Result type for SDK operations.
pub type SdkResult<T> = Result<T, SdkError>;

/// Error types that can occur when calling the pkgdocs backend.
#[derive(Debug, thiserror::Error)]
pub enum SdkError {
    /// The backend answered with a non-2xx status. `body` is the response
    /// text, verbatim.
    #[error("API request failed: {status} {body}")]
    Api { status: u16, body: String },

    /// The request never produced a response (DNS, refused connection,
    /// timeout, broken body stream).
    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    /// A 2xx response whose body was not JSON.
    #[error("Invalid JSON response: {0}")]
    Json(#[from] serde_json::Error),

    /// Invalid configuration.
    #[error("Configuration error: {0}")]
    Config(String),

    /// URL parsing error.
    #[error("Invalid URL: {0}")]
    InvalidUrl(#[from] url::ParseError),
}

impl SdkError {
    /// HTTP status of an [`SdkError::Api`] error.
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::Api { status, .. } => Some(*status),
            _ => None,
        }
    }

    /// Whether the error came from the transport rather than the backend.
    pub fn is_network(&self) -> bool {
        matches!(self, Self::Network(_))
    }
}
