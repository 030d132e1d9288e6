//! Error types for linediff.
//!
//! Diff creation, rendering and clamped apply are total and never fail.
//! These errors come from the strict/checked apply paths, round-trip
//! verification and wire decoding.

use thiserror::Error;

use crate::algo::Algorithm;
use crate::op::OpKind;

/// Errors that can occur while applying, verifying or decoding edit scripts.
#[derive(Debug, Error)]
pub enum DiffError {
    /// A retain/delete asked for more source than was left
    #[error("operation {index} ({kind}) needs {requested} chars but only {remaining} remain")]
    Overrun {
        /// Position of the offending operation in the script
        index: usize,
        /// Kind of the offending operation
        kind: OpKind,
        /// Length the operation asked for
        requested: usize,
        /// Source chars left at that point
        remaining: usize,
    },

    /// The script ended before consuming the whole source
    #[error("script consumed {consumed} of {source_len} source chars")]
    Incomplete {
        /// Source chars covered by retain/delete operations
        consumed: usize,
        /// Total source length in chars
        source_len: usize,
    },

    /// The script was computed against a different source
    #[error("source digest mismatch: script expects {expected:x}, found {found:x}")]
    SourceMismatch {
        /// Digest recorded in the script
        expected: u64,
        /// Digest of the source passed in
        found: u64,
    },

    /// Applying the script did not reproduce the destination
    #[error("{algorithm} produced a script that does not reproduce the destination")]
    RoundTrip {
        /// Algorithm that produced the script
        algorithm: Algorithm,
    },

    /// JSON encoding/decoding failed
    #[error("json error: {0}")]
    Json(String),

    /// Base64 decoding failed
    #[error("base64 error: {0}")]
    Base64(String),

    /// Decoded base64 payload was not UTF-8
    #[error("payload is not utf-8: {0}")]
    Utf8(#[from] std::string::FromUtf8Error),
}

/// Result type alias for linediff operations.
pub type DiffResult<T> = Result<T, DiffError>;

#[cfg(feature = "codec")]
impl From<serde_json::Error> for DiffError {
    fn from(err: serde_json::Error) -> Self {
        Self::Json(err.to_string())
    }
}

#[cfg(feature = "codec")]
impl From<base64::DecodeError> for DiffError {
    fn from(err: base64::DecodeError) -> Self {
        Self::Base64(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = DiffError::Overrun {
            index: 2,
            kind: OpKind::Delete,
            requested: 10,
            remaining: 3,
        };
        assert_eq!(
            err.to_string(),
            "operation 2 (delete) needs 10 chars but only 3 remain"
        );

        let err = DiffError::Incomplete { consumed: 4, source_len: 6 };
        assert_eq!(err.to_string(), "script consumed 4 of 6 source chars");

        let err = DiffError::RoundTrip { algorithm: Algorithm::GreedyLine };
        assert_eq!(
            err.to_string(),
            "greedy-line produced a script that does not reproduce the destination"
        );
    }

    #[test]
    fn test_error_is_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<DiffError>();
    }
}
