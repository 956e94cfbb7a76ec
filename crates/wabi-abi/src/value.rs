//! Typed values passed to and returned from the codec

use std::fmt;

use wabi_primitives::{Address, TokenId, H256, U256};

/// Signed 256-bit integer in sign-and-magnitude form.
///
/// Zero is never negative, so two values compare equal exactly when they
/// denote the same integer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct I256 {
    abs: U256,
    negative: bool,
}

impl I256 {
    /// Zero
    pub const ZERO: I256 = I256 {
        abs: U256([0; 4]),
        negative: false,
    };

    /// Create from magnitude and sign
    pub fn new(abs: U256, negative: bool) -> Self {
        Self {
            abs,
            negative: negative && !abs.is_zero(),
        }
    }

    /// Create from i128
    pub fn from_i128(value: i128) -> Self {
        Self::new(U256::from(value.unsigned_abs()), value < 0)
    }

    /// Smallest 256-bit two's-complement value, -2^255
    pub fn min_value() -> Self {
        Self::new(U256::one() << 255, true)
    }

    /// Largest 256-bit two's-complement value, 2^255 - 1
    pub fn max_value() -> Self {
        Self::new((U256::one() << 255) - U256::one(), false)
    }

    /// Absolute value
    pub fn abs(&self) -> U256 {
        self.abs
    }

    /// Check if negative
    pub fn is_negative(&self) -> bool {
        self.negative
    }

    /// Check if zero
    pub fn is_zero(&self) -> bool {
        self.abs.is_zero()
    }

    /// Reinterpret a 256-bit word as two's complement
    pub fn from_twos_complement(word: U256) -> Self {
        if word.bit(255) {
            Self::new((!word).overflowing_add(U256::one()).0, true)
        } else {
            Self::new(word, false)
        }
    }

    /// Two's-complement 256-bit representation.
    ///
    /// Magnitudes beyond the 256-bit signed range wrap; callers range-check first.
    pub fn to_twos_complement(&self) -> U256 {
        if self.negative {
            (!self.abs).overflowing_add(U256::one()).0
        } else {
            self.abs
        }
    }

    /// Check whether the value fits a signed integer of `bits` width.
    ///
    /// Widths above 256 are treated as 256; a zero width fits nothing.
    pub fn fits_signed(&self, bits: usize) -> bool {
        let Some(shift) = bits.checked_sub(1) else {
            return false;
        };
        let limit = U256::one() << shift.min(255);
        if self.negative {
            self.abs <= limit
        } else {
            self.abs < limit
        }
    }
}

impl From<i64> for I256 {
    fn from(value: i64) -> Self {
        Self::from_i128(value.into())
    }
}

impl From<i128> for I256 {
    fn from(value: i128) -> Self {
        Self::from_i128(value)
    }
}

impl fmt::Display for I256 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.negative {
            write!(f, "-{}", self.abs)
        } else {
            write!(f, "{}", self.abs)
        }
    }
}

/// A typed argument or decoded result
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Value {
    /// Signed integer
    Int(I256),
    /// Unsigned integer
    Uint(U256),
    /// Boolean
    Bool(bool),
    /// Address (20 bytes)
    Address(Address),
    /// Hash (32 bytes)
    Hash(H256),
    /// Token standard identifier (10 bytes)
    TokenId(TokenId),
    /// Raw bytes, also used for `bytes32` and `function` payloads
    Bytes(Vec<u8>),
    /// UTF-8 string, also accepted as a numeric or hex literal by scalar types
    String(String),
    /// Elements of a fixed or dynamic array
    Array(Vec<Value>),
}

impl Value {
    /// Create a signed integer value
    pub fn int(value: impl Into<I256>) -> Self {
        Value::Int(value.into())
    }

    /// Create an unsigned integer value
    pub fn uint(value: impl Into<U256>) -> Self {
        Value::Uint(value.into())
    }

    /// Create a string value
    pub fn string(s: impl Into<String>) -> Self {
        Value::String(s.into())
    }

    /// Create a bytes value
    pub fn bytes(data: impl Into<Vec<u8>>) -> Self {
        Value::Bytes(data.into())
    }

    /// Short name of the variant, used in error messages
    pub fn kind(&self) -> &'static str {
        match self {
            Value::Int(_) => "int",
            Value::Uint(_) => "uint",
            Value::Bool(_) => "bool",
            Value::Address(_) => "address",
            Value::Hash(_) => "hash",
            Value::TokenId(_) => "token id",
            Value::Bytes(_) => "bytes",
            Value::String(_) => "string",
            Value::Array(_) => "array",
        }
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Int(v) => write!(f, "{}", v),
            Value::Uint(v) => write!(f, "{}", v),
            Value::Bool(v) => write!(f, "{}", v),
            Value::Address(v) => write!(f, "{}", v),
            Value::Hash(v) => write!(f, "{}", v),
            Value::TokenId(v) => write!(f, "{}", v),
            Value::Bytes(v) => write!(f, "0x{}", hex::encode(v)),
            Value::String(v) => write!(f, "{:?}", v),
            Value::Array(items) => {
                f.write_str("[")?;
                for (i, item) in items.iter().enumerate() {
                    if i > 0 {
                        f.write_str(", ")?;
                    }
                    write!(f, "{}", item)?;
                }
                f.write_str("]")
            }
        }
    }
}
