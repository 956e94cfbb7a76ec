//! 256-bit hash type

use crate::fixed::fixed_bytes;

fixed_bytes!(
    /// 256-bit hash (32 bytes)
    H256,
    32,
    "hash"
);

/// Alias for H256
pub type Hash = H256;
