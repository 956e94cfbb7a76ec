//! Token identifier type (10 bytes)

use crate::fixed::fixed_bytes;

fixed_bytes!(
    /// 10-byte token standard identifier
    TokenId,
    10,
    "token id"
);
