/// Client-specific result type
pub type Result<T> = std::result::Result<T, ClientError>;

/// Errors from the Songforge client
#[derive(Debug, thiserror::Error)]
pub enum ClientError {
    /// HTTP transport error
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// Gateway returned a failure response
    #[error("{status}: {message}")]
    Api {
        /// HTTP status code
        status: u16,
        /// The gateway envelope's error message, or a generic fallback
        message: String,
    },

    /// Failed to parse the response body
    #[error("failed to parse response: {0}")]
    Parse(String),

    /// Invalid configuration
    #[error("invalid configuration: {0}")]
    Config(String),
}
