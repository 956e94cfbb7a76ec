//! Account address type (20 bytes)

use crate::fixed::fixed_bytes;

fixed_bytes!(
    /// 20-byte account or contract address
    Address,
    20,
    "address"
);
