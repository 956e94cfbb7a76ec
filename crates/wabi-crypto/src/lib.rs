//! # wabi-crypto
//!
//! Hashing used to derive function selectors.

#![warn(missing_docs)]
#![warn(clippy::all)]

mod hash;

pub use hash::sha3_256;
