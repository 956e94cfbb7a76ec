//! Type-directed dispatch to the scalar, dynamic and array codecs

use crate::array;
use crate::dynamic;
use crate::error::{AbiError, Result};
use crate::scalar;
use crate::types::{AbiType, WORD_SIZE};
use crate::value::Value;

/// Decoded words allowed per word of input
const DECODE_AMPLIFICATION: usize = 2;

/// Bounds how much a single decode may produce.
///
/// Each decoded scalar, length word and count word is charged one word, and
/// byte payloads their padded length. A payload without aliased offsets never
/// charges more words than it holds.
#[derive(Debug)]
pub(crate) struct DecodeBudget {
    limit: usize,
    remaining: usize,
}

impl DecodeBudget {
    pub(crate) fn for_input(data: &[u8]) -> Self {
        let limit = data
            .len()
            .div_ceil(WORD_SIZE)
            .saturating_mul(DECODE_AMPLIFICATION);
        Self {
            limit,
            remaining: limit,
        }
    }

    pub(crate) fn charge(&mut self, words: usize) -> Result<()> {
        self.remaining = self
            .remaining
            .checked_sub(words)
            .ok_or(AbiError::DecodeLimitExceeded { limit: self.limit })?;
        Ok(())
    }
}

fn payload_words(len: usize) -> usize {
    1 + len.div_ceil(WORD_SIZE)
}

/// Encode a single value of type `ty`.
///
/// Static types produce exactly `ty.fixed_size()` bytes; dynamic types
/// produce their full payload, which the enclosing tuple places in its tail.
pub fn encode_value(ty: &AbiType, value: &Value) -> Result<Vec<u8>> {
    let encoded = match ty {
        AbiType::Int(bits) => scalar::encode_int(*bits, value)?.to_vec(),
        AbiType::Uint(bits) => scalar::encode_uint(*bits, value)?.to_vec(),
        AbiType::Bool => scalar::encode_bool(value)?.to_vec(),
        AbiType::Address => scalar::encode_address(value)?.to_vec(),
        AbiType::Hash => scalar::encode_hash(value)?.to_vec(),
        AbiType::Bytes32 => scalar::encode_bytes32(value)?.to_vec(),
        AbiType::TokenId => scalar::encode_token_id(value)?.to_vec(),
        AbiType::Function => scalar::encode_function(value)?.to_vec(),
        AbiType::Bytes => match value {
            Value::Bytes(data) => dynamic::encode_bytes(data),
            Value::String(s) => {
                let data = hex::decode(s.strip_prefix("0x").unwrap_or(s))
                    .map_err(|e| AbiError::invalid_value(ty, e))?;
                dynamic::encode_bytes(&data)
            }
            other => {
                return Err(AbiError::invalid_value(
                    ty,
                    format!("expected bytes, got {}", other.kind()),
                ))
            }
        },
        AbiType::String => match value {
            Value::String(s) => dynamic::encode_string(s),
            other => {
                return Err(AbiError::invalid_value(
                    ty,
                    format!("expected string, got {}", other.kind()),
                ))
            }
        },
        AbiType::FixedArray(elem, len) => array::encode_fixed_array(elem, *len, value)?,
        AbiType::Array(elem) => array::encode_array(elem, value)?,
    };
    Ok(encoded)
}

/// Decode a single value of type `ty` located at `offset`.
///
/// For dynamic types `offset` is where the payload starts, not the head slot
/// pointing at it.
pub fn decode_value(ty: &AbiType, data: &[u8], offset: usize) -> Result<Value> {
    decode_value_within(ty, data, offset, &mut DecodeBudget::for_input(data))
}

pub(crate) fn decode_value_within(
    ty: &AbiType,
    data: &[u8],
    offset: usize,
    budget: &mut DecodeBudget,
) -> Result<Value> {
    let value = match ty {
        AbiType::Int(_) => Value::Int(scalar::decode_int(data, offset)?),
        AbiType::Uint(_) => Value::Uint(scalar::decode_uint(data, offset)?),
        AbiType::Bool => Value::Bool(scalar::decode_bool(data, offset)?),
        AbiType::Address => Value::Address(scalar::decode_address(data, offset)?),
        AbiType::Hash => Value::Hash(scalar::decode_hash(data, offset)?),
        AbiType::Bytes32 => Value::Bytes(scalar::decode_bytes32(data, offset)?),
        AbiType::TokenId => Value::TokenId(scalar::decode_token_id(data, offset)?),
        AbiType::Function => Value::Bytes(scalar::decode_function(data, offset)?),
        AbiType::Bytes => {
            let bytes = dynamic::decode_bytes(data, offset)?;
            budget.charge(payload_words(bytes.len()))?;
            return Ok(Value::Bytes(bytes));
        }
        AbiType::String => {
            let s = dynamic::decode_string(data, offset)?;
            budget.charge(payload_words(s.len()))?;
            return Ok(Value::String(s));
        }
        AbiType::FixedArray(elem, len) => {
            return array::decode_fixed_array_within(elem, *len, data, offset, budget)
        }
        AbiType::Array(elem) => return array::decode_array_within(elem, data, offset, budget),
    };
    budget.charge(1)?;
    Ok(value)
}

/// Encode values as a head/tail tuple
pub fn encode(types: &[AbiType], values: &[Value]) -> Result<Vec<u8>> {
    let types: Vec<&AbiType> = types.iter().collect();
    array::encode_tuple(&types, values)
}

/// Decode a head/tail tuple of the given types
pub fn decode(types: &[AbiType], data: &[u8]) -> Result<Vec<Value>> {
    let types: Vec<&AbiType> = types.iter().collect();
    array::decode_tuple(&types, data, 0, &mut DecodeBudget::for_input(data))
}

#[cfg(test)]
mod tests {
    use super::*;
    use wabi_primitives::{Address, U256};

    #[test]
    fn test_encode_static_sizes_match_fixed_size() {
        let cases = vec![
            (AbiType::Uint(256), Value::uint(1u64)),
            (AbiType::Int(16), Value::int(-2i64)),
            (AbiType::Bool, Value::Bool(true)),
            (AbiType::Address, Value::Address(Address::ZERO)),
            (
                AbiType::parse("uint8[3][2]").unwrap(),
                Value::Array(vec![
                    Value::Array(vec![Value::uint(1u64), Value::uint(2u64), Value::uint(3u64)]),
                    Value::Array(vec![Value::uint(4u64), Value::uint(5u64), Value::uint(6u64)]),
                ]),
            ),
        ];
        for (ty, value) in cases {
            assert_eq!(encode_value(&ty, &value).unwrap().len(), ty.fixed_size(), "{}", ty);
        }
    }

    #[test]
    fn test_encode_bytes_from_hex_string() {
        let from_hex = encode_value(&AbiType::Bytes, &Value::string("0xdeadbeef")).unwrap();
        let from_raw = encode_value(&AbiType::Bytes, &Value::bytes(vec![0xde, 0xad, 0xbe, 0xef])).unwrap();
        assert_eq!(from_hex, from_raw);
    }

    #[test]
    fn test_encode_wrong_shape() {
        assert!(matches!(
            encode_value(&AbiType::String, &Value::uint(1u64)),
            Err(AbiError::InvalidValue { .. })
        ));
        assert!(matches!(
            encode_value(&AbiType::Address, &Value::Bool(true)),
            Err(AbiError::InvalidValue { .. })
        ));
    }

    #[test]
    fn test_encode_decode_tuple() {
        let types = vec![AbiType::Uint(256), AbiType::String, AbiType::Bool];
        let values = vec![Value::uint(5u64), Value::string("abc"), Value::Bool(true)];
        let encoded = encode(&types, &values).unwrap();
        // head: 3 words, tail: length + data
        assert_eq!(encoded.len(), 5 * 32);
        assert_eq!(U256::from_big_endian(&encoded[32..64]), U256::from(96));
        assert_eq!(decode(&types, &encoded).unwrap(), values);
    }

    #[test]
    fn test_decode_function_is_unsupported() {
        let data = [0u8; 32];
        assert!(matches!(
            decode_value(&AbiType::Function, &data, 0),
            Err(AbiError::Unsupported(_))
        ));
    }
}
