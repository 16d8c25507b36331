//! Ranked cache error types.

use derive_more::{Display, Error};

/// Ranked cache error with location tracking.
#[derive(Debug, Clone, Display, Error)]
#[display("Cache error: {} at {}:{}", message, file, line)]
pub struct CacheError {
    /// Error message.
    pub message: String,
    /// Line number where the error occurred.
    pub line: u32,
    /// Source file where the error occurred.
    pub file: &'static str,
}

impl CacheError {
    /// Creates a new cache error with caller location tracking.
    #[track_caller]
    pub fn new(message: impl Into<String>) -> Self {
        let loc = std::panic::Location::caller();
        Self {
            message: message.into(),
            line: loc.line(),
            file: loc.file(),
        }
    }
}
