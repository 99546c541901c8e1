/// Custom error type for hook normalization operations
#[derive(Debug, thiserror::Error)]
pub enum EventError {
    #[error("Hook payload decoding failed: {0}")]
    Decode(#[from] serde_json::Error),
}

/// Helper type for Results that use EventError
pub type Result<T> = std::result::Result<T, EventError>;
