//! Core error types (deterministic only)

use core::fmt;

/// Core errors (no I/O, no external failures)
///
/// Hyphenation itself never fails; these only come from updates to the
/// cluster set or the word bounds.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CoreError {
    /// A harmonic cluster must be exactly two Georgian letters
    InvalidCluster(String),
    /// `left_min` / `right_min` must be at least one
    InvalidMinimum {
        /// Which bound was rejected
        name: &'static str,
        /// The rejected value
        value: usize,
    },
    /// The break marker must not be empty
    EmptyMarker,
}

impl fmt::Display for CoreError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CoreError::InvalidCluster(cluster) => {
                write!(f, "invalid harmonic cluster '{cluster}': expected two Georgian letters")
            }
            CoreError::InvalidMinimum { name, value } => {
                write!(f, "{name} must be at least 1, got {value}")
            }
            CoreError::EmptyMarker => write!(f, "break marker must not be empty"),
        }
    }
}

impl std::error::Error for CoreError {}

/// Result type for core operations
pub type Result<T> = core::result::Result<T, CoreError>;
