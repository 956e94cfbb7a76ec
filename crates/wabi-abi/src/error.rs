//! ABI error types

use thiserror::Error;
use wabi_primitives::PrimitiveError;

use crate::function::Selector;

/// Result alias used throughout the codec
pub type Result<T> = std::result::Result<T, AbiError>;

/// ABI codec error type
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AbiError {
    /// Type name not known to the parser
    #[error("unknown type: {0}")]
    UnknownType(String),

    /// Integer width outside 8..=256 or not a multiple of 8
    #[error("invalid integer size in type: {0}")]
    InvalidSize(String),

    /// Bad array suffix (unbalanced brackets, zero or non-numeric length)
    #[error("malformed array type: {0}")]
    MalformedArray(String),

    /// Wrong number of values for a fixed array or a function
    #[error("arity mismatch: expected {expected} values, got {got}")]
    ArityMismatch {
        /// Number of values the type requires
        expected: usize,
        /// Number of values supplied
        got: usize,
    },

    /// Negative value supplied for an unsigned integer
    #[error("negative value for unsigned integer type")]
    NegativeValueForUnsigned,

    /// Value does not fit in the declared integer width
    #[error("value {value} out of range for {ty}")]
    ValueOutOfRange {
        /// Canonical type name
        ty: String,
        /// Offending value
        value: String,
    },

    /// Buffer shorter than required
    #[error("insufficient bytes: need {needed}, have {available}")]
    InsufficientBytes {
        /// Bytes required from the start of the buffer
        needed: usize,
        /// Bytes available
        available: usize,
    },

    /// Payload of the wrong length for its type
    #[error("invalid encoding length: {0}")]
    InvalidEncodingLength(String),

    /// Offsets reuse the same data until the output outgrows the input
    #[error("decoded output exceeds {limit} words for this input")]
    DecodeLimitExceeded {
        /// Words the input allowed
        limit: usize,
    },

    /// Value of the wrong shape for the target type
    #[error("invalid value for {ty}: {reason}")]
    InvalidValue {
        /// Canonical type name
        ty: String,
        /// What was wrong with it
        reason: String,
    },

    /// Decoded string payload is not UTF-8
    #[error("invalid UTF-8: {0}")]
    InvalidUtf8(#[from] std::string::FromUtf8Error),

    /// Operation not supported for this type
    #[error("unsupported operation: {0}")]
    Unsupported(&'static str),

    /// No function with this name
    #[error("unknown function: {0}")]
    UnknownFunction(String),

    /// No function with this selector
    #[error("no function matches selector 0x{}", hex::encode(.0))]
    NoMatchingSignature(Selector),

    /// Call payload addressed to a different function
    #[error("selector mismatch: expected 0x{}, got 0x{}", hex::encode(.expected), hex::encode(.got))]
    SelectorMismatch {
        /// Selector of the function doing the decoding
        expected: Selector,
        /// Selector found in the payload
        got: Selector,
    },

    /// ABI description is not valid JSON of the expected shape
    #[error("malformed ABI JSON: {0}")]
    MalformedJson(String),

    /// Required field absent from an ABI entry
    #[error("missing field `{0}` in ABI entry")]
    MissingField(&'static str),

    /// ABI entry kind other than `function`
    #[error("unsupported ABI entry type: {0}")]
    UnsupportedEntryType(String),
}

impl AbiError {
    pub(crate) fn invalid_value(ty: impl ToString, reason: impl ToString) -> Self {
        AbiError::InvalidValue {
            ty: ty.to_string(),
            reason: reason.to_string(),
        }
    }
}

impl From<PrimitiveError> for AbiError {
    fn from(e: PrimitiveError) -> Self {
        match e {
            PrimitiveError::InvalidLength { .. } => AbiError::InvalidEncodingLength(e.to_string()),
            PrimitiveError::InvalidHex(reason) => AbiError::InvalidValue {
                ty: "hex".to_string(),
                reason,
            },
        }
    }
}

impl From<serde_json::Error> for AbiError {
    fn from(e: serde_json::Error) -> Self {
        AbiError::MalformedJson(e.to_string())
    }
}
