//! ABI container built from a JSON description

use std::str::FromStr;

use serde::Deserialize;

use crate::error::{AbiError, Result};
use crate::function::{split_selector, FunctionEntry, Param, Selector, SELECTOR_LEN};
use crate::types::AbiType;
use crate::value::Value;

#[derive(Debug, Deserialize)]
struct RawEntry {
    name: Option<String>,
    #[serde(rename = "type")]
    kind: Option<String>,
    inputs: Option<Vec<RawParam>>,
}

#[derive(Debug, Deserialize)]
struct RawParam {
    #[serde(default)]
    name: String,
    #[serde(rename = "type")]
    ty: Option<String>,
    #[serde(default)]
    indexed: bool,
}

/// Ordered collection of function entries
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Abi {
    functions: Vec<FunctionEntry>,
}

impl Abi {
    /// Create from already-built entries
    pub fn new(functions: Vec<FunctionEntry>) -> Self {
        Self { functions }
    }

    /// Parse a JSON ABI description.
    ///
    /// The input is an array of objects with `name`, `type` (which must be
    /// `"function"`) and an optional `inputs` list of `{name, type}` objects.
    pub fn from_json(text: &str) -> Result<Self> {
        let raw: Vec<RawEntry> = serde_json::from_str(text)?;

        let mut functions = Vec::with_capacity(raw.len());
        for entry in raw {
            let kind = entry.kind.ok_or(AbiError::MissingField("type"))?;
            if kind != "function" {
                return Err(AbiError::UnsupportedEntryType(kind));
            }
            let name = entry.name.ok_or(AbiError::MissingField("name"))?;

            let inputs = entry
                .inputs
                .unwrap_or_default()
                .into_iter()
                .map(|input| {
                    let ty = input.ty.ok_or(AbiError::MissingField("inputs.type"))?;
                    Ok(Param::new(input.name, AbiType::parse(&ty)?).indexed(input.indexed))
                })
                .collect::<Result<Vec<_>>>()?;

            functions.push(FunctionEntry::new(name, inputs));
        }

        tracing::debug!(functions = functions.len(), "loaded ABI");
        Ok(Self { functions })
    }

    /// All entries in declaration order
    pub fn functions(&self) -> &[FunctionEntry] {
        &self.functions
    }

    /// Number of entries
    pub fn len(&self) -> usize {
        self.functions.len()
    }

    /// Whether the ABI has no entries
    pub fn is_empty(&self) -> bool {
        self.functions.is_empty()
    }

    /// First entry with this name
    pub fn function(&self, name: &str) -> Option<&FunctionEntry> {
        self.functions.iter().find(|f| f.name() == name)
    }

    /// First entry whose selector matches
    pub fn function_by_selector(&self, selector: &Selector) -> Option<&FunctionEntry> {
        self.functions.iter().find(|f| &f.selector() == selector)
    }

    /// Encode a call to the named function, selector included
    pub fn encode_function(&self, name: &str, args: &[Value]) -> Result<Vec<u8>> {
        let function = self
            .function(name)
            .ok_or_else(|| AbiError::UnknownFunction(name.to_string()))?;
        function.encode_call(args)
    }

    /// Decode a call payload back into its arguments
    pub fn decode_function(&self, data: &[u8]) -> Result<Vec<Value>> {
        self.decode_function_call(data).map(|(_, values)| values)
    }

    /// Decode a call payload, also returning the entry it addresses
    pub fn decode_function_call(&self, data: &[u8]) -> Result<(&FunctionEntry, Vec<Value>)> {
        let selector = split_selector(data)?;
        let function = self
            .function_by_selector(&selector)
            .ok_or(AbiError::NoMatchingSignature(selector))?;
        tracing::trace!(function = function.name(), "matched selector");
        let values = function.decode_arguments(&data[SELECTOR_LEN..])?;
        Ok((function, values))
    }
}

impl FromStr for Abi {
    type Err = AbiError;

    fn from_str(s: &str) -> Result<Self> {
        Abi::from_json(s)
    }
}
