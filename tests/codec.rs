use mpint::bigint::{BigInt, ParseBigIntError};

#[test]
fn parse_then_format_round_trips() {
    let cases = [
        "4590",
        "1",
        "42",
        "4294967296",
        "18446744073709551615",
        "340282366920938463463374607431768211455",
        "123456789012345678901234567890123456789012345678901234567890",
    ];

    for text in cases {
        let value = BigInt::from_decimal(text).unwrap();
        assert_eq!(value.to_string(), text);
    }
}

#[test]
fn zero_encodes_as_a_single_digit() {
    assert_eq!(BigInt::ZERO.to_string(), "0");
    assert_eq!(BigInt::from_decimal("0").unwrap(), BigInt::ZERO);
    assert_eq!(BigInt::from_decimal("000").unwrap(), BigInt::ZERO);
}

#[test]
fn leading_zeros_are_accepted_but_never_emitted() {
    let value = BigInt::from_decimal("007").unwrap();
    assert_eq!(value, BigInt::from(7u64));
    assert_eq!(value.to_string(), "7");
}

#[test]
fn parsing_agrees_with_native_integers() {
    for k in [0u64, 9, 10, 255, 4294967295, u64::MAX] {
        assert_eq!(BigInt::from_decimal(&k.to_string()).unwrap(), BigInt::from(k));
    }
}

#[test]
fn malformed_input_is_rejected() {
    assert_eq!(BigInt::from_decimal(""), Err(ParseBigIntError::Empty));
    assert_eq!(BigInt::from_decimal("12a3"), Err(ParseBigIntError::InvalidDigit));
    assert_eq!(BigInt::from_decimal("-5"), Err(ParseBigIntError::InvalidDigit));
    assert_eq!(BigInt::from_decimal(" 12"), Err(ParseBigIntError::InvalidDigit));
    assert_eq!(BigInt::from_decimal("1 2"), Err(ParseBigIntError::InvalidDigit));
    assert_eq!("12_000".parse::<BigInt>(), Err(ParseBigIntError::InvalidDigit));
}

#[test]
fn from_str_matches_from_decimal() {
    let parsed: BigInt = "98765432109876543210".parse().unwrap();
    assert_eq!(parsed, BigInt::from_decimal("98765432109876543210").unwrap());
}
