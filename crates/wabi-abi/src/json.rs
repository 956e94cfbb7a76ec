//! Conversion between JSON arguments and typed values

use serde_json::Value as Json;

use crate::error::{AbiError, Result};
use crate::types::AbiType;
use crate::value::{Value, I256};

impl Value {
    /// Build a value of type `ty` from a JSON argument.
    ///
    /// Numbers map to integers, strings are kept as literals for the scalar
    /// codecs to interpret (decimal/hex integers, hex identifiers), byte
    /// types take `0x` hex strings and arrays map element by element.
    pub fn from_json(ty: &AbiType, json: &Json) -> Result<Self> {
        let mismatch = || AbiError::invalid_value(ty, format!("unexpected JSON value {}", json));

        match (ty, json) {
            (AbiType::FixedArray(elem, _), Json::Array(items))
            | (AbiType::Array(elem), Json::Array(items)) => items
                .iter()
                .map(|item| Value::from_json(elem, item))
                .collect::<Result<Vec<_>>>()
                .map(Value::Array),
            (AbiType::FixedArray(..), _) | (AbiType::Array(_), _) => Err(mismatch()),

            // Left as a literal so the scalar codec enforces the exact 32-byte width
            (AbiType::Bytes32, Json::String(s)) => Ok(Value::String(s.clone())),
            (AbiType::Bytes | AbiType::Function, Json::String(s)) => {
                hex::decode(s.strip_prefix("0x").unwrap_or(s))
                    .map(Value::Bytes)
                    .map_err(|e| AbiError::invalid_value(ty, e))
            }

            (_, Json::String(s)) => Ok(Value::String(s.clone())),
            (_, Json::Bool(b)) => Ok(Value::Bool(*b)),
            (_, Json::Number(n)) => {
                if let Some(v) = n.as_u64() {
                    Ok(Value::uint(v))
                } else if let Some(v) = n.as_i64() {
                    Ok(Value::Int(I256::from(v)))
                } else {
                    Err(AbiError::invalid_value(ty, format!("not an integer: {}", n)))
                }
            }
            _ => Err(mismatch()),
        }
    }

    /// Build one value per type from a JSON array of arguments
    pub fn from_json_args(types: &[&AbiType], json: &Json) -> Result<Vec<Self>> {
        let items = json
            .as_array()
            .ok_or_else(|| AbiError::invalid_value("arguments", "expected a JSON array"))?;
        if items.len() != types.len() {
            return Err(AbiError::ArityMismatch {
                expected: types.len(),
                got: items.len(),
            });
        }
        types
            .iter()
            .zip(items)
            .map(|(ty, item)| Value::from_json(ty, item))
            .collect()
    }

    /// Render as JSON; integers become decimal strings, byte-like values `0x` hex
    pub fn to_json(&self) -> Json {
        match self {
            Value::Int(v) => Json::String(v.to_string()),
            Value::Uint(v) => Json::String(v.to_string()),
            Value::Bool(b) => Json::Bool(*b),
            Value::Address(a) => Json::String(a.to_hex()),
            Value::Hash(h) => Json::String(h.to_hex()),
            Value::TokenId(t) => Json::String(t.to_hex()),
            Value::Bytes(b) => Json::String(format!("0x{}", hex::encode(b))),
            Value::String(s) => Json::String(s.clone()),
            Value::Array(items) => Json::Array(items.iter().map(Value::to_json).collect()),
        }
    }
}
