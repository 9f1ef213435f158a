//! Encoder error type.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum EncodeError {
    /// The baseline encoder could not represent a leaf value.
    #[error("baseline encoder failed: {0}")]
    Baseline(#[from] serde_json::Error),
    /// A custom baseline encoder rejected a leaf value.
    #[error("unencodable value: {0}")]
    Unencodable(String),
    /// Nesting went past the configured `max_depth`.
    #[error("value nesting exceeds max depth {max_depth}")]
    DepthExceeded { max_depth: usize },
}
