//! # wabi-abi
//!
//! Word-aligned contract ABI encoding and decoding.
//!
//! Arguments are packed into 32-byte big-endian words. Static values sit
//! directly in a head region, dynamic values (`bytes`, `string`, `T[]`) are
//! referenced from the head by offset and stored in a trailing tail region.
//! A call payload is the 4-byte selector of the function signature followed
//! by the packed arguments.
//!
//! # Example
//!
//! ```rust
//! use wabi_abi::{Abi, Value};
//!
//! let abi = Abi::from_json(
//!     r#"[{"name":"setValue","type":"function","inputs":[{"name":"value","type":"uint256"}]}]"#,
//! )?;
//!
//! let call = abi.encode_function("setValue", &[Value::uint(100u64)])?;
//! assert_eq!(call.len(), 36);
//!
//! let args = abi.decode_function(&call)?;
//! assert_eq!(args, vec![Value::uint(100u64)]);
//! # Ok::<(), wabi_abi::AbiError>(())
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]

mod abi;
pub mod array;
pub mod codec;
pub mod dynamic;
mod error;
mod function;
mod json;
pub mod scalar;
mod types;
mod value;

pub use abi::Abi;
pub use codec::{decode, decode_value, encode, encode_value};
pub use error::{AbiError, Result};
pub use function::{function_selector, EntryKind, FunctionEntry, Param, Selector, SELECTOR_LEN};
pub use types::{AbiType, WORD_SIZE};
pub use value::{Value, I256};

// Re-export identifier types used by `Value`
pub use wabi_primitives::{Address, TokenId, H256, U256};
