#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]
#![deny(clippy::panic)]

//! Error types for measurement failures

use thiserror::Error;

/// Errors raised while sampling process statistics
#[derive(Debug, Error)]
pub enum ProfileError {
    /// Process memory statistics could not be read
    #[error("failed to read process memory statistics: {0}")]
    MemoryReadFailed(String),

    /// Process memory statistics were present but malformed
    #[error("failed to parse process memory statistics: {0}")]
    MemoryParseFailed(String),
}

/// Result type for measurement operations
pub type Result<T> = std::result::Result<T, ProfileError>;
