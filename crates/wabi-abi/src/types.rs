//! ABI type descriptors and the type-name parser

use std::fmt;
use std::str::FromStr;

use crate::error::{AbiError, Result};

/// Size of one ABI word in bytes
pub const WORD_SIZE: usize = 32;

/// Contract parameter types
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum AbiType {
    /// Signed integer with bit size (8, 16, ..., 256)
    Int(usize),
    /// Unsigned integer with bit size (8, 16, ..., 256)
    Uint(usize),
    /// Boolean
    Bool,
    /// 20-byte address
    Address,
    /// 32-byte hash
    Hash,
    /// Raw 32-byte blob
    Bytes32,
    /// 10-byte token standard identifier
    TokenId,
    /// Dynamic bytes
    Bytes,
    /// UTF-8 string
    String,
    /// 24-byte function reference
    Function,
    /// Fixed-size array
    FixedArray(Box<AbiType>, usize),
    /// Dynamic array
    Array(Box<AbiType>),
}

impl AbiType {
    /// Parse a type name such as `uint256`, `address[3]` or `uint8[][2]`
    pub fn parse(name: &str) -> Result<Self> {
        let name = name.trim();

        if let Some(open) = name.rfind('[') {
            return parse_array(name, open);
        }
        if name.contains(']') {
            return Err(AbiError::MalformedArray(name.to_string()));
        }

        match name {
            "bool" => return Ok(AbiType::Bool),
            "address" => return Ok(AbiType::Address),
            "hash" => return Ok(AbiType::Hash),
            "bytes32" => return Ok(AbiType::Bytes32),
            "tokenStandard" => return Ok(AbiType::TokenId),
            "bytes" => return Ok(AbiType::Bytes),
            "string" => return Ok(AbiType::String),
            "function" => return Ok(AbiType::Function),
            _ => {}
        }

        if let Some(rest) = name.strip_prefix("uint") {
            return parse_bits(name, rest).map(AbiType::Uint);
        }
        if let Some(rest) = name.strip_prefix("int") {
            return parse_bits(name, rest).map(AbiType::Int);
        }

        Err(AbiError::UnknownType(name.to_string()))
    }

    /// Canonical type name, as used in function signatures
    pub fn canonical_name(&self) -> String {
        self.to_string()
    }

    /// Check if this type is dynamic (variable length)
    pub fn is_dynamic(&self) -> bool {
        match self {
            AbiType::Bytes | AbiType::String | AbiType::Array(_) => true,
            AbiType::FixedArray(elem, _) => elem.is_dynamic(),
            _ => false,
        }
    }

    /// Encoded size in bytes when static, 0 when dynamic
    pub fn fixed_size(&self) -> usize {
        match self {
            AbiType::Bytes | AbiType::String | AbiType::Array(_) => 0,
            AbiType::FixedArray(elem, len) => elem.fixed_size().saturating_mul(*len),
            _ => WORD_SIZE,
        }
    }

    /// Bytes this type occupies in the head of an enclosing tuple
    pub fn head_size(&self) -> usize {
        if self.is_dynamic() {
            WORD_SIZE
        } else {
            self.fixed_size()
        }
    }
}

fn parse_array(name: &str, open: usize) -> Result<AbiType> {
    let malformed = || AbiError::MalformedArray(name.to_string());

    let inner = name[open + 1..].strip_suffix(']').ok_or_else(malformed)?;
    let elem = &name[..open];
    if elem.is_empty() {
        return Err(malformed());
    }
    let elem = Box::new(AbiType::parse(elem)?);

    if inner.is_empty() {
        return Ok(AbiType::Array(elem));
    }
    if !inner.bytes().all(|b| b.is_ascii_digit()) {
        return Err(malformed());
    }
    match inner.parse::<usize>() {
        Ok(len) if len > 0 => Ok(AbiType::FixedArray(elem, len)),
        _ => Err(malformed()),
    }
}

fn parse_bits(name: &str, rest: &str) -> Result<usize> {
    if rest.is_empty() {
        return Ok(256);
    }
    if !rest.bytes().all(|b| b.is_ascii_digit()) {
        return Err(AbiError::UnknownType(name.to_string()));
    }
    match rest.parse::<usize>() {
        Ok(bits) if (8..=256).contains(&bits) && bits % 8 == 0 => Ok(bits),
        _ => Err(AbiError::InvalidSize(name.to_string())),
    }
}

impl fmt::Display for AbiType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AbiType::Int(bits) => write!(f, "int{}", bits),
            AbiType::Uint(bits) => write!(f, "uint{}", bits),
            AbiType::Bool => f.write_str("bool"),
            AbiType::Address => f.write_str("address"),
            AbiType::Hash => f.write_str("hash"),
            AbiType::Bytes32 => f.write_str("bytes32"),
            AbiType::TokenId => f.write_str("tokenStandard"),
            AbiType::Bytes => f.write_str("bytes"),
            AbiType::String => f.write_str("string"),
            AbiType::Function => f.write_str("function"),
            AbiType::FixedArray(elem, len) => write!(f, "{}[{}]", elem, len),
            AbiType::Array(elem) => write!(f, "{}[]", elem),
        }
    }
}

impl FromStr for AbiType {
    type Err = AbiError;

    fn from_str(s: &str) -> Result<Self> {
        AbiType::parse(s)
    }
}
