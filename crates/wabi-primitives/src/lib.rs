//! # wabi-primitives
//!
//! Fixed-width identifier types shared by the wabi codec crates.
//!
//! - [`Address`]: 20-byte account address
//! - [`H256`]: 32-byte hash
//! - [`TokenId`]: 10-byte token standard identifier
//! - [`U256`]: re-exported from `primitive-types`

#![warn(missing_docs)]
#![warn(clippy::all)]

mod fixed;

mod address;
mod error;
mod hash;
mod token;

pub use address::Address;
pub use error::PrimitiveError;
pub use hash::{Hash, H256};
pub use token::TokenId;

// Re-export primitive-types for U256
pub use primitive_types::U256;
