//! Commands that encode and decode calls against an ABI file

use std::path::Path;

use serde_json::json;
use wabi_abi::{AbiType, FunctionEntry, Value};

use super::{load_abi, parse_hex};
use crate::{output::Output, CliError};

fn selector_hex(function: &FunctionEntry) -> String {
    format!("0x{}", hex::encode(function.selector()))
}

/// List every function in the ABI with its selector
pub fn functions(abi_path: Option<&Path>, json: bool) -> Result<(), CliError> {
    let abi = load_abi(abi_path)?;

    let mut entries = Vec::with_capacity(abi.len());
    let mut lines = Vec::with_capacity(abi.len());
    for f in abi.functions() {
        entries.push(json!({ "signature": f.signature(), "selector": selector_hex(f) }));
        lines.push(format!("{}  {}", selector_hex(f), f));
    }

    Output::new(json)
        .field("functions", entries)
        .lines(lines)
        .print();

    Ok(())
}

/// Encode a call to `name` from a JSON array of arguments
pub fn encode(abi_path: Option<&Path>, name: &str, args: &str, json: bool) -> Result<(), CliError> {
    let abi = load_abi(abi_path)?;
    let function = abi
        .function(name)
        .ok_or_else(|| wabi_abi::AbiError::UnknownFunction(name.to_string()))?;

    let args: serde_json::Value = serde_json::from_str(args)?;
    let types: Vec<&AbiType> = function.inputs().iter().map(|p| p.ty()).collect();
    let values = Value::from_json_args(&types, &args)?;

    let data = format!("0x{}", hex::encode(function.encode_call(&values)?));

    Output::new(json)
        .field("function", function.signature())
        .field("selector", selector_hex(function))
        .line(data.clone())
        .field("data", data)
        .print();

    Ok(())
}

/// Decode a hex call payload into named arguments
pub fn decode(abi_path: Option<&Path>, data: &str, json: bool) -> Result<(), CliError> {
    let abi = load_abi(abi_path)?;
    let data = parse_hex(data)?;
    let (function, values) = abi.decode_function_call(&data)?;

    let mut lines = vec![function.signature()];
    let mut args = Vec::with_capacity(values.len());
    for (param, value) in function.inputs().iter().zip(&values) {
        lines.push(format!("  {} {} = {}", param.ty(), param.name(), value));
        args.push(json!({
            "name": param.name(),
            "type": param.ty().canonical_name(),
            "value": value.to_json(),
        }));
    }

    Output::new(json)
        .field("function", function.signature())
        .field("selector", selector_hex(function))
        .field("arguments", args)
        .lines(lines)
        .print();

    Ok(())
}
