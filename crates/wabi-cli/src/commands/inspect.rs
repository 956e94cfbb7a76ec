//! Commands that work on signatures and type names alone

use wabi_abi::{function_selector, AbiType};

use crate::{output::Output, CliError};

/// Split `name(t1,t2,...)` and rebuild it with canonical type names
pub fn canonical_signature(signature: &str) -> Result<String, CliError> {
    let signature = signature.trim();
    let (name, rest) = signature
        .split_once('(')
        .ok_or_else(|| CliError::InvalidInput(format!("missing '(' in {}", signature)))?;
    let inner = rest
        .strip_suffix(')')
        .ok_or_else(|| CliError::InvalidInput(format!("missing ')' in {}", signature)))?;

    let name = name.trim();
    if name.is_empty() {
        return Err(CliError::InvalidInput("empty function name".to_string()));
    }

    let types = if inner.trim().is_empty() {
        Vec::new()
    } else {
        inner
            .split(',')
            .map(|t| AbiType::parse(t).map(|ty| ty.canonical_name()))
            .collect::<Result<Vec<_>, _>>()?
    };

    Ok(format!("{}({})", name, types.join(",")))
}

/// Print the canonical form, hash and selector of a signature
pub fn selector(signature: &str, json: bool) -> Result<(), CliError> {
    let canonical = canonical_signature(signature)?;
    let hash = wabi_crypto::sha3_256(canonical.as_bytes());
    let selector = format!("0x{}", hex::encode(function_selector(&canonical)));

    Output::new(json)
        .line(format!("{}  {}", selector, canonical))
        .field("signature", canonical)
        .field("hash", hash.to_hex())
        .field("selector", selector)
        .print();

    Ok(())
}

/// Print the canonical name and layout properties of a type
pub fn type_info(name: &str, json: bool) -> Result<(), CliError> {
    let ty = AbiType::parse(name)?;
    let canonical = ty.canonical_name();

    let output = if ty.is_dynamic() {
        Output::new(json)
            .line(format!("{}: dynamic, head slot {} bytes", canonical, ty.head_size()))
            .field("dynamic", true)
    } else {
        Output::new(json)
            .line(format!("{}: static, {} bytes", canonical, ty.fixed_size()))
            .field("dynamic", false)
            .field("size", ty.fixed_size())
    };

    output.field("type", canonical).print();
    Ok(())
}
