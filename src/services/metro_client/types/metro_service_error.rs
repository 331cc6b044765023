use reqwest::StatusCode;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum MetroServiceError {
    /// Connection failure, deadline expiry or a broken response body.
    #[error("Transport error: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("Upstream responded with {status} for {url}")]
    Upstream { status: StatusCode, url: String },

    /// Body is not JSON, or not an array of the expected shape.
    #[error("Failed to decode response body: {0}")]
    Decode(#[from] serde_json::Error),

    #[error("Malformed timestamp: {0}")]
    MalformedTimestamp(String),

    #[error("Invalid record: {0}")]
    InvalidRecord(String),
}

impl MetroServiceError {
    pub fn is_timeout(&self) -> bool {
        matches!(self, MetroServiceError::Transport(e) if e.is_timeout())
    }
}
