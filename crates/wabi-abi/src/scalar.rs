//! Scalar encoding on 32-byte words

use wabi_primitives::{Address, TokenId, H256, U256};

use crate::error::{AbiError, Result};
use crate::types::WORD_SIZE;
use crate::value::{Value, I256};

/// Payload width of a `function` value before padding
pub const FUNCTION_LEN: usize = 24;

/// One encoded word
pub type Word = [u8; WORD_SIZE];

/// Borrow `len` bytes at `offset`, failing if the buffer is too short
pub(crate) fn slice_at(data: &[u8], offset: usize, len: usize) -> Result<&[u8]> {
    let end = offset.checked_add(len).ok_or(AbiError::InsufficientBytes {
        needed: usize::MAX,
        available: data.len(),
    })?;
    if data.len() < end {
        return Err(AbiError::InsufficientBytes {
            needed: end,
            available: data.len(),
        });
    }
    Ok(&data[offset..end])
}

/// Read the 32-byte word at `offset`
pub fn read_word(data: &[u8], offset: usize) -> Result<Word> {
    let mut word = [0u8; WORD_SIZE];
    word.copy_from_slice(slice_at(data, offset, WORD_SIZE)?);
    Ok(word)
}

/// Read a word holding a length or offset
pub(crate) fn read_usize(data: &[u8], offset: usize) -> Result<usize> {
    let value = U256::from_big_endian(&read_word(data, offset)?);
    if value > U256::from(usize::MAX) {
        return Err(AbiError::InvalidEncodingLength(format!(
            "length word {} at offset {} exceeds addressable range",
            value, offset
        )));
    }
    Ok(value.as_usize())
}

/// Encode a U256 as one big-endian word
pub fn encode_u256(value: U256) -> Word {
    let mut word = [0u8; WORD_SIZE];
    value.to_big_endian(&mut word);
    word
}

pub(crate) fn encode_usize(value: usize) -> Word {
    encode_u256(U256::from(value))
}

// ==================== Integers ====================

/// Parse a decimal or hex literal, with an optional leading `-`.
///
/// A `0x` prefix or any lowercase hex letter selects base 16.
pub fn parse_integer(literal: &str) -> Result<I256> {
    let invalid = |reason: String| AbiError::invalid_value("integer", reason);

    let trimmed = literal.trim();
    let (negative, digits) = match trimmed.strip_prefix('-') {
        Some(rest) => (true, rest),
        None => (false, trimmed),
    };

    let magnitude = if let Some(hex) = digits
        .strip_prefix("0x")
        .or_else(|| digits.strip_prefix("0X"))
    {
        if hex.is_empty() {
            return Err(invalid(format!("empty hex literal {:?}", literal)));
        }
        U256::from_str_radix(hex, 16).map_err(|e| invalid(format!("{:?}: {}", literal, e)))?
    } else if digits.bytes().any(|b| matches!(b, b'a'..=b'f')) {
        U256::from_str_radix(digits, 16).map_err(|e| invalid(format!("{:?}: {}", literal, e)))?
    } else {
        if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
            return Err(invalid(format!("not a number: {:?}", literal)));
        }
        U256::from_dec_str(digits).map_err(|e| invalid(format!("{:?}: {:?}", literal, e)))?
    };

    Ok(I256::new(magnitude, negative))
}

fn integer_of(ty: &str, value: &Value) -> Result<I256> {
    match value {
        Value::Int(v) => Ok(*v),
        Value::Uint(v) => Ok(I256::new(*v, false)),
        Value::String(s) => parse_integer(s),
        other => Err(AbiError::invalid_value(
            ty,
            format!("expected integer, got {}", other.kind()),
        )),
    }
}

fn check_bits(ty: &str, bits: usize) -> Result<()> {
    if (8..=256).contains(&bits) && bits % 8 == 0 {
        Ok(())
    } else {
        Err(AbiError::InvalidSize(ty.to_string()))
    }
}

/// Encode a signed integer of `bits` width
pub fn encode_int(bits: usize, value: &Value) -> Result<Word> {
    let ty = format!("int{}", bits);
    check_bits(&ty, bits)?;
    let v = integer_of(&ty, value)?;
    if !v.fits_signed(bits) {
        return Err(AbiError::ValueOutOfRange {
            ty,
            value: v.to_string(),
        });
    }
    Ok(encode_u256(v.to_twos_complement()))
}

/// Encode an unsigned integer of `bits` width
pub fn encode_uint(bits: usize, value: &Value) -> Result<Word> {
    let ty = format!("uint{}", bits);
    check_bits(&ty, bits)?;
    let v = integer_of(&ty, value)?;
    if v.is_negative() {
        return Err(AbiError::NegativeValueForUnsigned);
    }
    if v.abs().bits() > bits {
        return Err(AbiError::ValueOutOfRange {
            ty,
            value: v.to_string(),
        });
    }
    Ok(encode_u256(v.abs()))
}

/// Decode a two's-complement signed integer
pub fn decode_int(data: &[u8], offset: usize) -> Result<I256> {
    let word = read_word(data, offset)?;
    Ok(I256::from_twos_complement(U256::from_big_endian(&word)))
}

/// Decode an unsigned integer
pub fn decode_uint(data: &[u8], offset: usize) -> Result<U256> {
    let word = read_word(data, offset)?;
    Ok(U256::from_big_endian(&word))
}

// ==================== Boolean ====================

/// Encode a boolean as the integer 0 or 1
pub fn encode_bool(value: &Value) -> Result<Word> {
    let truth = match value {
        Value::Bool(b) => *b,
        Value::Uint(v) => !v.is_zero(),
        Value::Int(v) => !v.is_zero(),
        Value::String(s) => s.eq_ignore_ascii_case("true") || s == "1",
        other => {
            return Err(AbiError::invalid_value(
                "bool",
                format!("expected boolean, got {}", other.kind()),
            ))
        }
    };
    Ok(encode_u256(if truth { U256::one() } else { U256::zero() }))
}

/// Decode a boolean, any non-zero word is true
pub fn decode_bool(data: &[u8], offset: usize) -> Result<bool> {
    Ok(read_word(data, offset)?.iter().any(|b| *b != 0))
}

// ==================== Left-padded identifiers ====================

fn left_pad(payload: &[u8]) -> Word {
    let mut word = [0u8; WORD_SIZE];
    word[WORD_SIZE - payload.len()..].copy_from_slice(payload);
    word
}

/// Encode a 20-byte address
pub fn encode_address(value: &Value) -> Result<Word> {
    let addr = match value {
        Value::Address(a) => *a,
        Value::String(s) => Address::from_hex(s)?,
        other => {
            return Err(AbiError::invalid_value(
                "address",
                format!("expected address, got {}", other.kind()),
            ))
        }
    };
    Ok(left_pad(addr.as_bytes()))
}

/// Decode a 20-byte address
pub fn decode_address(data: &[u8], offset: usize) -> Result<Address> {
    let word = read_word(data, offset)?;
    Ok(Address::from_slice(&word[WORD_SIZE - Address::LEN..])?)
}

/// Encode a 32-byte hash
pub fn encode_hash(value: &Value) -> Result<Word> {
    let hash = match value {
        Value::Hash(h) => *h,
        Value::String(s) => H256::from_hex(s)?,
        other => {
            return Err(AbiError::invalid_value(
                "hash",
                format!("expected hash, got {}", other.kind()),
            ))
        }
    };
    Ok(*hash.as_bytes())
}

/// Decode a 32-byte hash
pub fn decode_hash(data: &[u8], offset: usize) -> Result<H256> {
    Ok(H256::from_bytes(read_word(data, offset)?))
}

/// Encode a 10-byte token identifier
pub fn encode_token_id(value: &Value) -> Result<Word> {
    let id = match value {
        Value::TokenId(t) => *t,
        Value::String(s) => TokenId::from_hex(s)?,
        other => {
            return Err(AbiError::invalid_value(
                "tokenStandard",
                format!("expected token id, got {}", other.kind()),
            ))
        }
    };
    Ok(left_pad(id.as_bytes()))
}

/// Decode a 10-byte token identifier
pub fn decode_token_id(data: &[u8], offset: usize) -> Result<TokenId> {
    let word = read_word(data, offset)?;
    Ok(TokenId::from_slice(&word[WORD_SIZE - TokenId::LEN..])?)
}

// ==================== Right-padded raw payloads ====================

fn raw_bytes(ty: &str, value: &Value) -> Result<Vec<u8>> {
    match value {
        Value::Bytes(b) => Ok(b.clone()),
        Value::Hash(h) => Ok(h.as_bytes().to_vec()),
        Value::String(s) => hex::decode(s.strip_prefix("0x").unwrap_or(s))
            .map_err(|e| AbiError::invalid_value(ty, e)),
        other => Err(AbiError::invalid_value(
            ty,
            format!("expected bytes, got {}", other.kind()),
        )),
    }
}

/// Encode a `bytes32` blob, shorter byte payloads are right-padded
pub fn encode_bytes32(value: &Value) -> Result<Word> {
    let payload = raw_bytes("bytes32", value)?;
    let exact = matches!(value, Value::String(_));
    if payload.len() > WORD_SIZE || (exact && payload.len() != WORD_SIZE) {
        return Err(AbiError::InvalidEncodingLength(format!(
            "bytes32 expects {} bytes, got {}",
            WORD_SIZE,
            payload.len()
        )));
    }
    let mut word = [0u8; WORD_SIZE];
    word[..payload.len()].copy_from_slice(&payload);
    Ok(word)
}

/// Decode a `bytes32` blob
pub fn decode_bytes32(data: &[u8], offset: usize) -> Result<Vec<u8>> {
    Ok(read_word(data, offset)?.to_vec())
}

/// Encode a 24-byte function reference followed by 8 zero bytes
pub fn encode_function(value: &Value) -> Result<Word> {
    let payload = raw_bytes("function", value)?;
    if payload.len() != FUNCTION_LEN {
        return Err(AbiError::InvalidEncodingLength(format!(
            "function expects {} bytes, got {}",
            FUNCTION_LEN,
            payload.len()
        )));
    }
    let mut word = [0u8; WORD_SIZE];
    word[..FUNCTION_LEN].copy_from_slice(&payload);
    Ok(word)
}

/// Function references cannot be decoded
pub fn decode_function(_data: &[u8], _offset: usize) -> Result<Vec<u8>> {
    Err(AbiError::Unsupported("decoding function type"))
}
