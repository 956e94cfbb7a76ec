//! Round-trip tests: decode(encode(v)) == v for every supported type

use proptest::prelude::*;
use wabi_abi::{decode, encode, AbiType, Address, TokenId, Value, H256, I256, U256};

fn roundtrip(ty: &AbiType, value: Value) {
    let types = vec![ty.clone()];
    let values = vec![value];
    let encoded = encode(&types, &values).unwrap();
    assert_eq!(encoded.len() % 32, 0, "{} is not word aligned", ty);
    assert_eq!(decode(&types, &encoded).unwrap(), values, "{}", ty);
}

fn ty(name: &str) -> AbiType {
    AbiType::parse(name).unwrap()
}

// ==================== Integer boundaries ====================

#[test]
fn test_int256_boundaries() {
    for v in [I256::ZERO, I256::from_i128(-1), I256::max_value(), I256::min_value()] {
        roundtrip(&ty("int256"), Value::Int(v));
    }
}

#[test]
fn test_uint256_boundaries() {
    for v in [U256::zero(), U256::one(), U256::MAX, (U256::one() << 255) - U256::one()] {
        roundtrip(&ty("uint256"), Value::Uint(v));
    }
}

#[test]
fn test_every_integer_width_boundaries() {
    for bits in (8..=256).step_by(8) {
        let max_unsigned = if bits == 256 {
            U256::MAX
        } else {
            (U256::one() << bits) - U256::one()
        };
        roundtrip(&AbiType::Uint(bits), Value::Uint(max_unsigned));
        roundtrip(&AbiType::Uint(bits), Value::Uint(U256::zero()));

        let half = U256::one() << (bits - 1);
        roundtrip(&AbiType::Int(bits), Value::Int(I256::new(half - U256::one(), false)));
        roundtrip(&AbiType::Int(bits), Value::Int(I256::new(half, true)));
        roundtrip(&AbiType::Int(bits), Value::Int(I256::from_i128(-1)));
    }
}

// ==================== Scalars ====================

#[test]
fn test_bool_roundtrip() {
    roundtrip(&AbiType::Bool, Value::Bool(true));
    roundtrip(&AbiType::Bool, Value::Bool(false));
}

#[test]
fn test_identifier_roundtrip() {
    roundtrip(
        &AbiType::Address,
        Value::Address(Address::from_hex("0x742d35Cc6634C0532925a3b844Bc9e7595f0aB3d").unwrap()),
    );
    roundtrip(&AbiType::Hash, Value::Hash(H256::from_bytes([0x5c; 32])));
    roundtrip(&AbiType::TokenId, Value::TokenId(TokenId::from_bytes([0xee; 10])));
    roundtrip(&AbiType::Bytes32, Value::bytes(vec![0x77u8; 32]));
}

// ==================== Dynamic values ====================

#[test]
fn test_bytes_and_strings_around_word_boundary() {
    for len in [0usize, 1, 31, 32, 33, 63, 64] {
        roundtrip(&AbiType::Bytes, Value::bytes(vec![0xa5u8; len]));
        roundtrip(&AbiType::String, Value::string("s".repeat(len)));
    }
}

// ==================== Arrays ====================

#[test]
fn test_static_arrays() {
    roundtrip(
        &ty("uint256[3]"),
        Value::Array(vec![Value::uint(1u64), Value::uint(2u64), Value::uint(3u64)]),
    );
    roundtrip(
        &ty("string[2]"),
        Value::Array(vec![Value::string("left"), Value::string("x".repeat(70))]),
    );
    roundtrip(
        &ty("int8[2][2]"),
        Value::Array(vec![
            Value::Array(vec![Value::int(-128i64), Value::int(127i64)]),
            Value::Array(vec![Value::int(0i64), Value::int(-1i64)]),
        ]),
    );
}

#[test]
fn test_dynamic_arrays() {
    roundtrip(&ty("uint8[]"), Value::Array(vec![]));
    roundtrip(&ty("address[]"), Value::Array(vec![Value::Address(Address::ZERO); 3]));
    roundtrip(
        &ty("bytes[]"),
        Value::Array(vec![Value::bytes(vec![]), Value::bytes(vec![1u8; 33])]),
    );
    roundtrip(
        &ty("uint256[][]"),
        Value::Array(vec![
            Value::Array(vec![Value::uint(1u64)]),
            Value::Array(vec![]),
            Value::Array(vec![Value::uint(2u64), Value::uint(3u64)]),
        ]),
    );
    roundtrip(
        &ty("string[][2]"),
        Value::Array(vec![
            Value::Array(vec![Value::string("a"), Value::string("b")]),
            Value::Array(vec![]),
        ]),
    );
}

// ==================== Property tests ====================

fn arb_i256() -> impl Strategy<Value = I256> {
    (any::<[u8; 32]>()).prop_map(|bytes| I256::from_twos_complement(U256::from_big_endian(&bytes)))
}

proptest! {
    #[test]
    fn prop_int256_roundtrip(v in arb_i256()) {
        let types = vec![AbiType::Int(256)];
        let encoded = encode(&types, &[Value::Int(v)]).unwrap();
        prop_assert_eq!(decode(&types, &encoded).unwrap(), vec![Value::Int(v)]);
    }

    #[test]
    fn prop_int64_roundtrip(v in any::<i64>()) {
        let types = vec![AbiType::Int(64)];
        let encoded = encode(&types, &[Value::int(v)]).unwrap();
        prop_assert_eq!(decode(&types, &encoded).unwrap(), vec![Value::int(v)]);
    }

    #[test]
    fn prop_uint256_roundtrip(bytes in any::<[u8; 32]>()) {
        let v = U256::from_big_endian(&bytes);
        let types = vec![AbiType::Uint(256)];
        let encoded = encode(&types, &[Value::Uint(v)]).unwrap();
        prop_assert_eq!(decode(&types, &encoded).unwrap(), vec![Value::Uint(v)]);
    }

    #[test]
    fn prop_bytes_roundtrip(data in proptest::collection::vec(any::<u8>(), 0..200)) {
        let types = vec![AbiType::Bytes];
        let encoded = encode(&types, &[Value::bytes(data.clone())]).unwrap();
        prop_assert_eq!(encoded.len(), 64 + data.len().div_ceil(32) * 32);
        prop_assert_eq!(decode(&types, &encoded).unwrap(), vec![Value::bytes(data)]);
    }

    #[test]
    fn prop_string_array_roundtrip(items in proptest::collection::vec(".{0,40}", 0..6)) {
        let types = vec![AbiType::Uint(8), AbiType::parse("string[]").unwrap()];
        let values = vec![
            Value::uint(7u64),
            Value::Array(items.into_iter().map(Value::String).collect()),
        ];
        let encoded = encode(&types, &values).unwrap();
        prop_assert_eq!(decode(&types, &encoded).unwrap(), values);
    }

    #[test]
    fn prop_decode_never_panics(data in proptest::collection::vec(any::<u8>(), 0..256)) {
        let types = vec![AbiType::String, AbiType::parse("uint256[][2]").unwrap(), AbiType::Bytes];
        let _ = decode(&types, &data);
    }
}
