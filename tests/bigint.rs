use mpint::bigint::{ArithmeticError, BigInt};
use mpint::prime::random_bits;
use mpint::rng::ChaChaSource;

fn n(text: &str) -> BigInt {
    text.parse().expect("test literal must parse")
}

#[test]
fn zero_is_canonical() {
    assert!(BigInt::ZERO.is_zero());
    assert_eq!(BigInt::from(0u64), BigInt::ZERO);
    assert_eq!(BigInt::ZERO.bit_len(), 0);

    // Operations that cancel out must land back on the canonical zero.
    let a = n("123456789123456789123456789");
    assert_eq!(a.checked_sub(&a).unwrap(), BigInt::ZERO);
}

#[test]
fn from_u64_limb_layout() {
    assert_eq!(BigInt::from(1u64).bit_len(), 1);
    assert_eq!(BigInt::from(u32::MAX as u64).bit_len(), 32);
    assert_eq!(BigInt::from(1u64 << 32).bit_len(), 33);
    assert_eq!(BigInt::from(u64::MAX).bit_len(), 64);

    assert_eq!(BigInt::from(u64::MAX).to_string(), u64::MAX.to_string());
}

#[test]
fn ordering_by_width_then_limbs() {
    let small = BigInt::from(u64::MAX);
    let big = n("18446744073709551616"); // 2^64, three limbs vs two

    assert!(small < big);
    assert!(big > small);
    assert!(small >= small.clone());

    let a = BigInt::from((5u64 << 32) | 7);
    let b = BigInt::from((5u64 << 32) | 9);
    assert!(a < b);
    assert_eq!(a, a.clone());
}

#[test]
fn addition_basic_and_carry() {
    assert_eq!(&BigInt::from(78u64) + &BigInt::from(345u64), BigInt::from(423u64));

    // Carry must ripple across the full limb boundary.
    let sum = &BigInt::from(u64::MAX) + &BigInt::from(1u64);
    assert_eq!(sum.to_string(), "18446744073709551616");

    assert_eq!(&BigInt::ZERO + &BigInt::from(42u64), BigInt::from(42u64));
}

#[test]
fn add_u64_matches_general_addition() {
    let values = [
        BigInt::ZERO,
        BigInt::from(1u64),
        BigInt::from(u32::MAX as u64),
        BigInt::from(u64::MAX),
        n("340282366920938463463374607431768211455"), // 2^128 - 1
    ];
    let scalars = [0u64, 1, 2, u32::MAX as u64, u64::MAX];

    for value in &values {
        for &scalar in &scalars {
            assert_eq!(value.add_u64(scalar), value + &BigInt::from(scalar));
        }
    }
}

#[test]
fn subtraction_basic_and_borrow() {
    assert_eq!(
        BigInt::from(523u64).checked_sub(&BigInt::from(178u64)).unwrap(),
        BigInt::from(345u64)
    );

    // Borrow must ripple across the full limb boundary.
    let diff = n("18446744073709551616").checked_sub(&BigInt::from(1u64)).unwrap();
    assert_eq!(diff, BigInt::from(u64::MAX));
}

#[test]
fn subtraction_below_zero_is_an_error() {
    let result = BigInt::from(178u64).checked_sub(&BigInt::from(523u64));
    assert_eq!(result, Err(ArithmeticError::InvalidOperation));
}

#[test]
fn multiplication_small_values() {
    assert_eq!(&BigInt::from(6u64) * &BigInt::from(7u64), BigInt::from(42u64));
    assert_eq!(&BigInt::ZERO * &BigInt::from(12345u64), BigInt::ZERO);

    // (2^64 - 1)^2 = 2^128 - 2^65 + 1
    let square = &BigInt::from(u64::MAX) * &BigInt::from(u64::MAX);
    assert_eq!(square, n("340282366920938463426481119284349108225"));
}

#[test]
fn mul_u64_matches_general_multiplication() {
    let values = [
        BigInt::ZERO,
        BigInt::from(1u64),
        BigInt::from(u64::MAX),
        n("340282366920938463463374607431768211455"),
        n("99999999999999999999999999999999999999999999999999"),
    ];
    let scalars = [0u64, 1, 10, 1u64 << 32, u64::MAX];

    for value in &values {
        for &scalar in &scalars {
            assert_eq!(value.mul_u64(scalar), value * &BigInt::from(scalar));
        }
    }
}

#[test]
fn karatsuba_matches_analytic_identities() {
    // 700 nines is ~2325 bits (~73 limbs), above the Karatsuba threshold,
    // and its square has the closed form 10^1400 - 2*10^700 + 1, which is
    // reachable through addition and subtraction alone.
    let nines = n(&"9".repeat(700));

    let ten_700 = n(&format!("1{}", "0".repeat(700)));
    let ten_1400 = n(&format!("1{}", "0".repeat(1400)));

    let square = &nines * &nines;
    let expected = ten_1400
        .checked_sub(&ten_700.mul_u64(2))
        .unwrap()
        .add_u64(1);
    assert_eq!(square, expected);

    // (10^700 - 1)(10^700 + 1) = 10^1400 - 1.
    let plus_one = ten_700.add_u64(1);
    let product = &nines * &plus_one;
    assert_eq!(product, n(&"9".repeat(1400)));
}

#[test]
fn karatsuba_product_survives_division() {
    // Long division is an independent code path; recovering both factors
    // from the product cross-checks the recursive multiplication.
    let mut rng = ChaChaSource::from_seed([7u8; 32]);
    let a = random_bits(2100, &mut rng);
    let b = random_bits(2345, &mut rng);

    let product = &a * &b;

    let (q, r) = product.div_rem(&a).unwrap();
    assert_eq!(q, b);
    assert!(r.is_zero());

    let (q, r) = product.div_rem(&b).unwrap();
    assert_eq!(q, a);
    assert!(r.is_zero());
}

#[test]
fn division_law_holds() {
    let mut rng = ChaChaSource::from_seed([21u8; 32]);
    let cases = [
        (n("1000"), n("10")),
        (n("999"), n("1000")),
        (BigInt::from(u64::MAX), BigInt::from(3u64)),
        (random_bits(900, &mut rng), random_bits(200, &mut rng)),
        (random_bits(512, &mut rng), random_bits(512, &mut rng)),
    ];

    for (a, b) in &cases {
        let (q, r) = a.div_rem(b).unwrap();
        assert!(&r < b);
        assert_eq!(&(b * &q) + &r, *a);
    }
}

#[test]
fn division_by_zero_is_an_error() {
    let result = BigInt::from(1u64).div_rem(&BigInt::ZERO);
    assert_eq!(result.map(|_| ()), Err(ArithmeticError::DivisionByZero));
}

#[test]
fn right_shift() {
    let two_100 = &BigInt::from(1u64 << 50) * &BigInt::from(1u64 << 50);

    assert_eq!(&two_100 >> 0, two_100);
    assert_eq!(&two_100 >> 100, BigInt::one());
    assert_eq!(&two_100 >> 101, BigInt::ZERO);
    assert_eq!(&two_100 >> 1000, BigInt::ZERO);

    // Sub-limb shift across limb boundaries.
    let shifted = &two_100 >> 37;
    assert_eq!(&shifted >> 63, BigInt::one());
    assert_eq!(shifted.bit_len(), 64);
}
