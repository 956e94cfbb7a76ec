//! Common error types for primitives

use thiserror::Error;

/// Primitive parsing error
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PrimitiveError {
    /// Invalid hex string
    #[error("invalid hex string: {0}")]
    InvalidHex(String),

    /// Input has the wrong number of bytes for the target type
    #[error("invalid {kind} length: expected {expected} bytes, got {got}")]
    InvalidLength {
        /// Name of the target type
        kind: &'static str,
        /// Required byte length
        expected: usize,
        /// Supplied byte length
        got: usize,
    },
}
