use std::time::Duration;

#[derive(Debug, thiserror::Error)]
pub enum GlossaError {
    /// Remote collection API rejected or failed a call (non-throttle).
    #[error("Remote error: {0}")]
    Remote(String),

    /// Remote collection API signalled that the caller must slow down.
    #[error("Remote throttled (retry after {retry_after:?})")]
    Throttled { retry_after: Option<Duration> },

    /// A record's payload is not usable (e.g. malformed JSON). Never retried.
    #[error("Content error: {0}")]
    Content(String),

    /// A single translation backend failed.
    #[error("Provider error: {0}")]
    Provider(String),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serde(#[from] serde_json::Error),
}

impl GlossaError {
    /// Whether the error represents a throttling signal (HTTP 429 equivalent).
    pub fn is_throttle(&self) -> bool {
        matches!(self, GlossaError::Throttled { .. })
    }
}

pub type Result<T> = std::result::Result<T, GlossaError>;
