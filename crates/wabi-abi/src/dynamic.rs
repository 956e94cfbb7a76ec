//! Length-prefixed encoding for `bytes` and `string`

use crate::error::Result;
use crate::scalar::{encode_usize, read_usize, slice_at};
use crate::types::WORD_SIZE;

/// Round a byte length up to the next word boundary
pub(crate) fn padded_len(len: usize) -> usize {
    len.div_ceil(WORD_SIZE) * WORD_SIZE
}

/// Encode dynamic bytes: length word, then data right-padded to 32 bytes
pub fn encode_bytes(data: &[u8]) -> Vec<u8> {
    let mut result = Vec::with_capacity(WORD_SIZE + padded_len(data.len()));
    result.extend_from_slice(&encode_usize(data.len()));
    result.extend_from_slice(data);
    result.resize(WORD_SIZE + padded_len(data.len()), 0);
    result
}

/// Decode dynamic bytes whose length word sits at `offset`
pub fn decode_bytes(data: &[u8], offset: usize) -> Result<Vec<u8>> {
    let len = read_usize(data, offset)?;
    let payload = slice_at(data, offset + WORD_SIZE, len)?;
    Ok(payload.to_vec())
}

/// Encode a UTF-8 string
pub fn encode_string(s: &str) -> Vec<u8> {
    encode_bytes(s.as_bytes())
}

/// Decode a UTF-8 string whose length word sits at `offset`
pub fn decode_string(data: &[u8], offset: usize) -> Result<String> {
    Ok(String::from_utf8(decode_bytes(data, offset)?)?)
}
