//! End-to-end tests for the ABI container
//!
//! Covers JSON loading, call encoding with selectors and decoding back.

use wabi_abi::{function_selector, Abi, AbiError, AbiType, Address, TokenId, Value, U256};

const TOKEN_ABI: &str = r#"[
    {"name": "setValue", "type": "function", "inputs": [{"name": "value", "type": "uint256"}]},
    {"name": "transfer", "type": "function", "inputs": [
        {"name": "to", "type": "address"},
        {"name": "amount", "type": "uint256"}
    ]},
    {"name": "setMessage", "type": "function", "inputs": [{"name": "message", "type": "string"}]},
    {"name": "mint", "type": "function", "inputs": [
        {"name": "token", "type": "tokenStandard"},
        {"name": "amounts", "type": "uint256[]"}
    ]},
    {"name": "batch", "type": "function", "inputs": [
        {"name": "flags", "type": "bool[3]"},
        {"name": "labels", "type": "string[]"},
        {"name": "delta", "type": "int64"},
        {"name": "data", "type": "bytes"}
    ]},
    {"name": "ping", "type": "function"}
]"#;

fn abi() -> Abi {
    Abi::from_json(TOKEN_ABI).unwrap()
}

fn word(n: u64) -> [u8; 32] {
    let mut word = [0u8; 32];
    U256::from(n).to_big_endian(&mut word);
    word
}

// ==================== End-to-end scenario ====================

#[test]
fn test_set_value_call() {
    let abi = Abi::from_json(
        r#"[{"name":"setValue","type":"function","inputs":[{"name":"value","type":"uint256"}]}]"#,
    )
    .unwrap();

    let call = abi.encode_function("setValue", &[Value::uint(100u64)]).unwrap();
    assert_eq!(call.len(), 36);
    // sha3_256("setValue(uint256)") = 0x48448340...
    assert_eq!(&call[..4], &[0x48, 0x44, 0x83, 0x40]);
    assert_eq!(&call[4..], &word(100));

    assert_eq!(abi.decode_function(&call).unwrap(), vec![Value::uint(100u64)]);
}

#[test]
fn test_transfer_call() {
    let to = Address::from_hex("0x742d35Cc6634C0532925a3b844Bc9e7595f0aB3d").unwrap();
    let call = abi()
        .encode_function("transfer", &[Value::Address(to), Value::uint(1000u64)])
        .unwrap();

    assert_eq!(call.len(), 68);
    assert_eq!(&call[..4], &function_selector("transfer(address,uint256)"));
    assert_eq!(&call[4 + 12..36], to.as_bytes());

    let abi = abi();
    let (entry, values) = abi.decode_function_call(&call).unwrap();
    assert_eq!(entry.name(), "transfer");
    assert_eq!(values, vec![Value::Address(to), Value::uint(1000u64)]);
}

#[test]
fn test_no_argument_call() {
    let call = abi().encode_function("ping", &[]).unwrap();
    assert_eq!(call, function_selector("ping()").to_vec());
    assert_eq!(abi().decode_function(&call).unwrap(), Vec::<Value>::new());
}

// ==================== Head/tail layout ====================

#[test]
fn test_string_argument_layout() {
    let call = abi()
        .encode_function("setMessage", &[Value::string("hello")])
        .unwrap();
    let args = &call[4..];

    assert_eq!(args.len(), 96);
    assert_eq!(&args[..32], &word(32));
    assert_eq!(&args[32..64], &word(5));
    assert_eq!(&args[64..69], b"hello");
}

#[test]
fn test_mixed_static_and_dynamic_arguments() {
    let token = TokenId::from_bytes(*b"VITE TOKEN");
    let args = vec![
        Value::Array(vec![Value::Bool(true), Value::Bool(false), Value::Bool(true)]),
        Value::Array(vec![Value::string("alpha"), Value::string(""), Value::string("c".repeat(40))]),
        Value::int(-42i64),
        Value::bytes(vec![0xca, 0xfe]),
    ];
    let call = abi().encode_function("batch", &args).unwrap();
    let block = &call[4..];

    // Head: bool[3] (3 words) + offset + int64 + offset
    assert_eq!(&block[96..128], &word(6 * 32));
    let mut minus_42 = [0xffu8; 32];
    minus_42[31] = 0xd6;
    assert_eq!(&block[128..160], &minus_42);
    assert_eq!(abi().decode_function(&call).unwrap(), args);

    let mint_args = vec![
        Value::TokenId(token),
        Value::Array(vec![Value::uint(1u64), Value::Uint(U256::MAX)]),
    ];
    let call = abi().encode_function("mint", &mint_args).unwrap();
    assert_eq!(abi().decode_function(&call).unwrap(), mint_args);
}

// ==================== Failures ====================

#[test]
fn test_unknown_function() {
    assert!(matches!(
        abi().encode_function("burn", &[]),
        Err(AbiError::UnknownFunction(_))
    ));
}

#[test]
fn test_argument_count_must_match() {
    assert!(matches!(
        abi().encode_function("transfer", &[Value::Address(Address::ZERO)]),
        Err(AbiError::ArityMismatch { expected: 2, got: 1 })
    ));
}

#[test]
fn test_encode_stops_at_first_bad_argument() {
    let result = abi().encode_function(
        "transfer",
        &[Value::string("not an address"), Value::int(-1i64)],
    );
    assert!(matches!(result, Err(AbiError::InvalidValue { .. })));
}

#[test]
fn test_decode_short_payload() {
    assert!(matches!(
        abi().decode_function(&[0x48, 0x44, 0x83]),
        Err(AbiError::InsufficientBytes { needed: 4, available: 3 })
    ));
}

#[test]
fn test_decode_truncated_arguments() {
    let mut call = abi()
        .encode_function("setMessage", &[Value::string("hello")])
        .unwrap();
    call.truncate(4 + 64);
    assert!(matches!(
        abi().decode_function(&call),
        Err(AbiError::InsufficientBytes { .. })
    ));
}

#[test]
fn test_decode_unknown_selector() {
    let mut call = vec![0u8; 36];
    call[..4].copy_from_slice(&[0xff, 0xff, 0xff, 0xff]);
    assert!(matches!(
        abi().decode_function(&call),
        Err(AbiError::NoMatchingSignature(_))
    ));
}

#[test]
fn test_function_typed_parameter_cannot_be_decoded() {
    let abi = Abi::from_json(
        r#"[{"name":"callback","type":"function","inputs":[{"name":"f","type":"function"}]}]"#,
    )
    .unwrap();
    let call = abi
        .encode_function("callback", &[Value::bytes(vec![7u8; 24])])
        .unwrap();
    assert_eq!(call.len(), 36);
    assert!(matches!(abi.decode_function(&call), Err(AbiError::Unsupported(_))));
}

// ==================== Selectors ====================

#[test]
fn test_selectors_are_stable_and_distinct() {
    let abi = abi();
    let selectors: Vec<_> = abi.functions().iter().map(|f| f.selector()).collect();
    for (i, a) in selectors.iter().enumerate() {
        assert_eq!(*a, abi.functions()[i].selector());
        for b in &selectors[i + 1..] {
            assert_ne!(a, b);
        }
    }
    assert_eq!(
        abi.function("mint").unwrap().signature(),
        "mint(tokenStandard,uint256[])"
    );
    assert_eq!(abi.function("mint").unwrap().selector(), [0x36, 0x84, 0xe3, 0x8d]);
}

#[test]
fn test_signature_differs_by_param_type() {
    assert_ne!(function_selector("f(uint256)"), function_selector("f(int256)"));
    assert_ne!(function_selector("f(uint256)"), function_selector("g(uint256)"));
}

#[test]
fn test_type_parse_matches_canonical_names() {
    for name in ["uint256", "int8", "bool", "address[2]", "string[]", "uint256[3][2]"] {
        assert_eq!(AbiType::parse(name).unwrap().to_string(), name);
    }
}
