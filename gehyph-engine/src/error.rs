//! Layered error types
//!
//! Word and text hyphenation never fail. Errors only surface from
//! configuration updates and from explicit dictionary loading.

use gehyph_core::CoreError;
use std::time::Duration;
use thiserror::Error;

/// Engine-level errors (Application Layer)
#[derive(Error, Debug)]
pub enum EngineError {
    /// Rejected bounds, marker or cluster
    #[error("invalid configuration: {0}")]
    Core(#[from] CoreError),

    /// Engine-level setting out of range
    #[error("invalid configuration: {reason}")]
    InvalidConfig {
        /// Which setting was rejected and why
        reason: String,
    },

    /// Exception dictionary could not be loaded
    #[error("dictionary error: {0}")]
    Dictionary(#[from] DictionaryError),
}

/// Failures while obtaining exception dictionary data
#[derive(Error, Debug)]
pub enum DictionaryError {
    /// I/O error while reading a source
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Data is not a flat object of string to string
    #[error("malformed dictionary data: {0}")]
    Parse(#[from] serde_json::Error),

    /// Host-provided fetcher reported a failure
    #[error("fetch failed: {0}")]
    Fetch(String),

    /// Source did not answer in time
    #[error("timed out after {0:?}")]
    Timeout(Duration),
}

/// Result type for engine operations
pub type Result<T> = std::result::Result<T, EngineError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = EngineError::from(CoreError::EmptyMarker);
        assert_eq!(
            err.to_string(),
            "invalid configuration: break marker must not be empty"
        );

        let err = EngineError::from(DictionaryError::Timeout(Duration::from_millis(3000)));
        assert_eq!(err.to_string(), "dictionary error: timed out after 3s");

        let err = DictionaryError::Fetch("HTTP 404".to_string());
        assert_eq!(err.to_string(), "fetch failed: HTTP 404");
    }

    #[test]
    fn test_parse_error_conversion() {
        let json_err = serde_json::from_str::<u32>("nope").unwrap_err();
        let err: DictionaryError = json_err.into();
        assert!(matches!(err, DictionaryError::Parse(_)));
        assert!(err.to_string().starts_with("malformed dictionary data:"));
    }
}
