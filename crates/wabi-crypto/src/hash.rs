//! SHA3-256 hashing

use sha3::{Digest, Sha3_256};
use wabi_primitives::H256;

/// Compute the SHA3-256 (FIPS 202) digest of the input data
pub fn sha3_256(data: &[u8]) -> H256 {
    let mut hasher = Sha3_256::new();
    hasher.update(data);
    H256::from_bytes(hasher.finalize().into())
}
