//! Subcommand implementations

pub mod call;
pub mod inspect;

use std::path::Path;

use wabi_abi::Abi;

use crate::CliError;

/// Read and parse a JSON ABI file
pub fn load_abi(path: Option<&Path>) -> Result<Abi, CliError> {
    let path = path.ok_or(CliError::NoAbi)?;
    let text = std::fs::read_to_string(path)?;
    let abi = Abi::from_json(&text)?;
    tracing::debug!(path = %path.display(), functions = abi.len(), "read ABI file");
    Ok(abi)
}

/// Decode a hex string with an optional `0x` prefix
pub fn parse_hex(input: &str) -> Result<Vec<u8>, CliError> {
    let input = input.trim();
    let stripped = input
        .strip_prefix("0x")
        .or_else(|| input.strip_prefix("0X"))
        .unwrap_or(input);
    Ok(hex::decode(stripped)?)
}
