//! Head/tail tuple layout and the array codecs built on it
//!
//! A tuple is encoded as a head holding one slot per element (the value
//! itself for static types, an offset for dynamic ones) followed by a tail
//! holding the dynamic payloads in element order. Offsets are measured from
//! the start of the tuple. Function arguments, fixed arrays and the elements
//! of dynamic arrays all share this layout.

use crate::codec::{decode_value_within, encode_value, DecodeBudget};
use crate::error::{AbiError, Result};
use crate::scalar::{encode_usize, read_usize};
use crate::types::{AbiType, WORD_SIZE};
use crate::value::Value;

/// Encode values against their types as one tuple
pub(crate) fn encode_tuple(types: &[&AbiType], values: &[Value]) -> Result<Vec<u8>> {
    if types.len() != values.len() {
        return Err(AbiError::ArityMismatch {
            expected: types.len(),
            got: values.len(),
        });
    }

    let head_size = types
        .iter()
        .try_fold(0usize, |acc, ty| acc.checked_add(ty.head_size()))
        .ok_or_else(|| AbiError::InvalidEncodingLength("tuple head exceeds addressable range".into()))?;
    let mut head = Vec::new();
    let mut tail = Vec::new();

    for (ty, value) in types.iter().zip(values) {
        let encoded = encode_value(ty, value)?;
        if ty.is_dynamic() {
            head.extend_from_slice(&encode_usize(head_size + tail.len()));
            tail.extend(encoded);
        } else {
            head.extend(encoded);
        }
    }

    head.extend(tail);
    Ok(head)
}

/// Decode a tuple starting at `base`
pub(crate) fn decode_tuple(
    types: &[&AbiType],
    data: &[u8],
    base: usize,
    budget: &mut DecodeBudget,
) -> Result<Vec<Value>> {
    let mut values = Vec::with_capacity(types.len());
    let mut cursor = base;

    for ty in types {
        let value = if ty.is_dynamic() {
            let relative = read_usize(data, cursor)?;
            let position = base.checked_add(relative).ok_or(AbiError::InsufficientBytes {
                needed: usize::MAX,
                available: data.len(),
            })?;
            decode_value_within(ty, data, position, budget)?
        } else {
            decode_value_within(ty, data, cursor, budget)?
        };
        values.push(value);
        cursor += ty.head_size();
    }

    Ok(values)
}

fn elements<'a>(value: &'a Value, elem: &AbiType) -> Result<&'a [Value]> {
    match value {
        Value::Array(items) => Ok(items),
        other => Err(AbiError::invalid_value(
            format!("{}[]", elem),
            format!("expected array elements, got {}", other.kind()),
        )),
    }
}

/// Encode a fixed-size array `elem[len]`
pub fn encode_fixed_array(elem: &AbiType, len: usize, value: &Value) -> Result<Vec<u8>> {
    let items = elements(value, elem)?;
    if items.len() != len {
        return Err(AbiError::ArityMismatch {
            expected: len,
            got: items.len(),
        });
    }
    encode_tuple(&vec![elem; len], items)
}

/// Encode a dynamic array `elem[]`: element count, then the elements as a tuple
pub fn encode_array(elem: &AbiType, value: &Value) -> Result<Vec<u8>> {
    let items = elements(value, elem)?;
    let mut result = encode_usize(items.len()).to_vec();
    result.extend(encode_tuple(&vec![elem; items.len()], items)?);
    Ok(result)
}

/// Decode a fixed-size array starting at `offset`
pub fn decode_fixed_array(elem: &AbiType, len: usize, data: &[u8], offset: usize) -> Result<Value> {
    decode_fixed_array_within(elem, len, data, offset, &mut DecodeBudget::for_input(data))
}

/// Decode a dynamic array whose count word sits at `offset`
pub fn decode_array(elem: &AbiType, data: &[u8], offset: usize) -> Result<Value> {
    decode_array_within(elem, data, offset, &mut DecodeBudget::for_input(data))
}

pub(crate) fn decode_fixed_array_within(
    elem: &AbiType,
    len: usize,
    data: &[u8],
    offset: usize,
    budget: &mut DecodeBudget,
) -> Result<Value> {
    check_room(elem, len, data, offset)?;
    decode_tuple(&vec![elem; len], data, offset, budget).map(Value::Array)
}

pub(crate) fn decode_array_within(
    elem: &AbiType,
    data: &[u8],
    offset: usize,
    budget: &mut DecodeBudget,
) -> Result<Value> {
    let len = read_usize(data, offset)?;
    budget.charge(1)?;
    let start = offset + WORD_SIZE;
    check_room(elem, len, data, start)?;
    decode_tuple(&vec![elem; len], data, start, budget).map(Value::Array)
}

// Rejects counts whose heads alone overrun the buffer, before allocating for them.
fn check_room(elem: &AbiType, len: usize, data: &[u8], start: usize) -> Result<()> {
    let needed = elem
        .head_size()
        .checked_mul(len)
        .and_then(|size| size.checked_add(start))
        .unwrap_or(usize::MAX);
    if needed > data.len() {
        return Err(AbiError::InsufficientBytes {
            needed,
            available: data.len(),
        });
    }
    Ok(())
}
