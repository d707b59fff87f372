//! Evalboard error types

/// Evalboard error types
#[derive(Debug, thiserror::Error)]
pub enum EvalboardError {
    // Endpoint/network errors
    /// The endpoint answered with a non-2xx status.
    #[error("HTTP error! status: {status}")]
    Http { status: u16 },

    /// The request could not be sent or the response could not be received.
    #[error("network error: {0}")]
    Network(String),

    // Data errors
    /// The body is not valid JSON or does not have the expected shape.
    #[error("invalid response body: {0}")]
    Parse(String),

    // Configuration errors
    #[error("configuration error: {0}")]
    Configuration(String),

    // Output errors
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl EvalboardError {
    /// Whether the failure came from talking to the endpoint (as opposed to
    /// local configuration or output problems).
    pub fn is_fetch_failure(&self) -> bool {
        matches!(
            self,
            EvalboardError::Http { .. } | EvalboardError::Network(_) | EvalboardError::Parse(_)
        )
    }

    /// Short label used for the `status` metric dimension.
    pub(crate) fn kind(&self) -> &'static str {
        match self {
            EvalboardError::Http { .. } => "http_error",
            EvalboardError::Network(_) => "network_error",
            EvalboardError::Parse(_) => "parse_error",
            EvalboardError::Configuration(_) => "configuration_error",
            EvalboardError::Io(_) => "io_error",
        }
    }
}

impl From<reqwest::Error> for EvalboardError {
    fn from(err: reqwest::Error) -> Self {
        if let Some(status) = err.status() {
            EvalboardError::Http {
                status: status.as_u16(),
            }
        } else if err.is_decode() {
            EvalboardError::Parse(err.to_string())
        } else {
            EvalboardError::Network(err.to_string())
        }
    }
}

impl From<serde_json::Error> for EvalboardError {
    fn from(err: serde_json::Error) -> Self {
        EvalboardError::Parse(err.to_string())
    }
}

/// Result type alias for Evalboard operations
pub type Result<T> = std::result::Result<T, EvalboardError>;
