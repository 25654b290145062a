//! Error types for the shortlist library.
//!
//! All fallible operations return [`Result`], which wraps [`ShortlistError`].
//! Lookup misses are deliberately *not* errors: `locate` returns `Ok(None)`
//! when no posting matches, and callers render that as an empty-result state.
//!
//! # Examples
//!
//! ```
//! use shortlist::error::{ShortlistError, Result};
//!
//! fn example_operation() -> Result<()> {
//!     Err(ShortlistError::invalid_selection("selection is empty"))
//! }
//!
//! assert!(example_operation().is_err());
//! ```

use std::io;

use thiserror::Error;

/// The main error type for shortlist operations.
#[derive(Error, Debug)]
pub enum ShortlistError {
    /// Skill selection is empty or contains an out-of-range index.
    #[error("Invalid selection: {0}")]
    InvalidSelection(String),

    /// The same skill index was selected more than once.
    #[error("Duplicate selection: {0}")]
    DuplicateSelection(String),

    /// A weight falls outside the configured range, or the weight count
    /// does not match the selection count.
    #[error("Invalid weight: {0}")]
    InvalidWeight(String),

    /// Two catalog records normalize to the same lower-cased key.
    #[error("Duplicate title: {0}")]
    DuplicateTitle(String),

    /// An array-backed store refused an insert past its fixed bound.
    /// Fatal to the insert, not to the session.
    #[error("Capacity exceeded: {0}")]
    CapacityExceeded(String),

    /// A record cannot participate in matching (empty key, empty skill set).
    #[error("Invalid record: {0}")]
    InvalidRecord(String),

    /// An operation was invoked against a store that violates its
    /// precondition, e.g. binary search over an unsorted store.
    #[error("Invalid operation: {0}")]
    InvalidOperation(String),

    /// Configuration errors (bad weight range, zero capacity).
    #[error("Invalid configuration: {0}")]
    Config(String),

    /// CSV parsing errors from the loader.
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    /// JSON serialization/deserialization errors.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// I/O errors from the loader.
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),
}

/// Result type alias for operations that may fail with ShortlistError.
pub type Result<T> = std::result::Result<T, ShortlistError>;

impl ShortlistError {
    /// Create a new invalid selection error.
    pub fn invalid_selection<S: Into<String>>(msg: S) -> Self {
        ShortlistError::InvalidSelection(msg.into())
    }

    /// Create a new duplicate selection error.
    pub fn duplicate_selection<S: Into<String>>(msg: S) -> Self {
        ShortlistError::DuplicateSelection(msg.into())
    }

    /// Create a new invalid weight error.
    pub fn invalid_weight<S: Into<String>>(msg: S) -> Self {
        ShortlistError::InvalidWeight(msg.into())
    }

    /// Create a new duplicate title error.
    pub fn duplicate_title<S: Into<String>>(msg: S) -> Self {
        ShortlistError::DuplicateTitle(msg.into())
    }

    /// Create a new capacity exceeded error.
    pub fn capacity<S: Into<String>>(msg: S) -> Self {
        ShortlistError::CapacityExceeded(msg.into())
    }

    /// Create a new invalid record error.
    pub fn invalid_record<S: Into<String>>(msg: S) -> Self {
        ShortlistError::InvalidRecord(msg.into())
    }

    /// Create a new invalid operation error.
    pub fn invalid_operation<S: Into<String>>(msg: S) -> Self {
        ShortlistError::InvalidOperation(msg.into())
    }

    /// Create a new configuration error.
    pub fn config<S: Into<String>>(msg: S) -> Self {
        ShortlistError::Config(msg.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = ShortlistError::invalid_selection("selection is empty");
        assert_eq!(err.to_string(), "Invalid selection: selection is empty");

        let err = ShortlistError::capacity("posting store is full (50)");
        assert_eq!(
            err.to_string(),
            "Capacity exceeded: posting store is full (50)"
        );
    }

    #[test]
    fn test_io_error_conversion() {
        let io_err = io::Error::new(io::ErrorKind::NotFound, "missing file");
        let err: ShortlistError = io_err.into();
        assert!(matches!(err, ShortlistError::Io(_)));
    }
}
