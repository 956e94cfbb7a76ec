//! Function entries: signatures, selectors and argument packing

use std::fmt;

use crate::array::{decode_tuple, encode_tuple};
use crate::codec::DecodeBudget;
use crate::error::{AbiError, Result};
use crate::types::AbiType;
use crate::value::Value;

/// Size of a function selector in bytes
pub const SELECTOR_LEN: usize = 4;

/// First 4 bytes of SHA3-256 over a function signature
pub type Selector = [u8; SELECTOR_LEN];

/// Compute function selector (first 4 bytes of sha3_256(signature))
pub fn function_selector(signature: &str) -> Selector {
    let hash = wabi_crypto::sha3_256(signature.as_bytes());
    let mut selector = [0u8; SELECTOR_LEN];
    selector.copy_from_slice(&hash.as_bytes()[..SELECTOR_LEN]);
    selector
}

/// A named, typed function parameter
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Param {
    name: String,
    ty: AbiType,
    indexed: bool,
}

impl Param {
    /// Create a new parameter
    pub fn new(name: impl Into<String>, ty: AbiType) -> Self {
        Self {
            name: name.into(),
            ty,
            indexed: false,
        }
    }

    /// Mark the parameter as indexed; metadata only, the codec ignores it
    pub fn indexed(mut self, indexed: bool) -> Self {
        self.indexed = indexed;
        self
    }

    /// Parameter name, empty when the ABI leaves it out
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Parameter type
    pub fn ty(&self) -> &AbiType {
        &self.ty
    }

    /// Whether the parameter was declared indexed
    pub fn is_indexed(&self) -> bool {
        self.indexed
    }
}

/// Kind of an ABI entry
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntryKind {
    /// Callable function
    Function,
}

/// A callable function: name plus ordered input parameters
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FunctionEntry {
    name: String,
    inputs: Vec<Param>,
}

impl FunctionEntry {
    /// Create a new function entry
    pub fn new(name: impl Into<String>, inputs: Vec<Param>) -> Self {
        Self {
            name: name.into(),
            inputs,
        }
    }

    /// Function name
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Input parameters in declaration order
    pub fn inputs(&self) -> &[Param] {
        &self.inputs
    }

    /// Entry kind, always [`EntryKind::Function`]
    pub fn kind(&self) -> EntryKind {
        EntryKind::Function
    }

    /// Canonical signature, e.g. `transfer(address,uint256)`
    pub fn signature(&self) -> String {
        let types: Vec<String> = self.inputs.iter().map(|p| p.ty.canonical_name()).collect();
        format!("{}({})", self.name, types.join(","))
    }

    /// Selector derived from the canonical signature
    pub fn selector(&self) -> Selector {
        function_selector(&self.signature())
    }

    fn input_types(&self) -> Vec<&AbiType> {
        self.inputs.iter().map(|p| &p.ty).collect()
    }

    /// Pack arguments with head/tail layout, without the selector.
    ///
    /// Exactly one value per input is required.
    pub fn encode_arguments(&self, args: &[Value]) -> Result<Vec<u8>> {
        if args.len() != self.inputs.len() {
            return Err(AbiError::ArityMismatch {
                expected: self.inputs.len(),
                got: args.len(),
            });
        }
        encode_tuple(&self.input_types(), args)
    }

    /// Unpack an argument block produced by [`encode_arguments`](Self::encode_arguments)
    pub fn decode_arguments(&self, data: &[u8]) -> Result<Vec<Value>> {
        decode_tuple(&self.input_types(), data, 0, &mut DecodeBudget::for_input(data))
    }

    /// Encode a full call: selector followed by the packed arguments
    pub fn encode_call(&self, args: &[Value]) -> Result<Vec<u8>> {
        let mut result = self.selector().to_vec();
        result.extend(self.encode_arguments(args)?);
        tracing::trace!(function = %self.name, len = result.len(), "encoded call");
        Ok(result)
    }

    /// Decode a full call, checking that the selector addresses this function
    pub fn decode_call(&self, data: &[u8]) -> Result<Vec<Value>> {
        let got = split_selector(data)?;
        let expected = self.selector();
        if got != expected {
            return Err(AbiError::SelectorMismatch { expected, got });
        }
        self.decode_arguments(&data[SELECTOR_LEN..])
    }
}

impl fmt::Display for FunctionEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.signature())
    }
}

/// Extract the leading selector from a call payload
pub(crate) fn split_selector(data: &[u8]) -> Result<Selector> {
    if data.len() < SELECTOR_LEN {
        return Err(AbiError::InsufficientBytes {
            needed: SELECTOR_LEN,
            available: data.len(),
        });
    }
    let mut selector = [0u8; SELECTOR_LEN];
    selector.copy_from_slice(&data[..SELECTOR_LEN]);
    Ok(selector)
}
