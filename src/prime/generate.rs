//! Randomized generation of primes and private keys

use crate::bigint::{ArithmeticError, BigInt};
use crate::modular::BarrettReducer;
use crate::prime::{MILLER_RABIN_ROUNDS, is_probable_prime};
use crate::rng::LimbSource;

/// Draws a random odd value with exactly `bits` significant bits.
///
/// Fills `ceil(bits / 32)` limbs from the source, masks away the bits above
/// the requested width, then forces the top requested bit to one (exact bit
/// length) and bit zero to one (oddness). `bits` must be at least 1.
pub fn random_bits<R: LimbSource + ?Sized>(bits: usize, rng: &mut R) -> BigInt {
    assert!(bits >= 1, "bit length must be at least 1");

    let blocks = bits.div_ceil(32);
    let mut limbs: Vec<u32> = (0..blocks).map(|_| rng.next_limb()).collect();

    let extra_bits = blocks * 32 - bits;
    let top = blocks - 1;

    limbs[top] &= u32::MAX >> extra_bits;
    limbs[top] |= 1 << (31 - extra_bits);
    limbs[0] |= 1;

    BigInt::from_limbs(limbs)
}

/// Generates a probable prime with exactly `bits` significant bits.
///
/// Rejection sampling: candidates from [`random_bits`] are tested with
/// [`is_probable_prime`] until one passes. The loop is unbounded by design;
/// by the prime density theorem it terminates quickly with overwhelming
/// probability.
pub fn generate_prime<R: LimbSource + ?Sized>(bits: usize, rng: &mut R) -> BigInt {
    loop {
        let candidate = random_bits(bits, rng);
        if is_probable_prime(&candidate, MILLER_RABIN_ROUNDS, rng) {
            return candidate;
        }
    }
}

/// Generates a safe prime `p` (both `p` and `(p-1)/2` probable primes)
/// with exactly `bits` significant bits.
///
/// Draws a prime `q` of `bits − 1` bits, forms `p = 2q + 1`, and accepts
/// `p` if it passes the primality test, otherwise retries with a fresh
/// `q`. `bits` must be at least 2.
pub fn generate_safe_prime<R: LimbSource + ?Sized>(bits: usize, rng: &mut R) -> BigInt {
    assert!(bits >= 2, "bit length must be at least 2");

    loop {
        let q = generate_prime(bits - 1, rng);
        let p = q.mul_u64(2).add_u64(1);

        if is_probable_prime(&p, MILLER_RABIN_ROUNDS, rng) {
            return p;
        }
    }
}

/// Generates a Diffie–Hellman private key in `[2, p − 2]`.
///
/// Fills as many random limbs as `p` occupies, reduces the draw modulo
/// `p − 3`, and offsets by 2. The modular reduction introduces a slight
/// bias for moduli that are not a power of two; acceptable for
/// demonstration use, not for production key material.
///
/// # Errors
///
/// Returns [`ArithmeticError::InvalidArgument`] when `p < 5`, since the
/// target range would be empty or degenerate.
pub fn generate_private_key<R: LimbSource + ?Sized>(
    p: &BigInt,
    rng: &mut R,
) -> Result<BigInt, ArithmeticError> {
    if *p < BigInt::from(5u64) {
        return Err(ArithmeticError::InvalidArgument);
    }

    let limbs: Vec<u32> = (0..p.limb_len()).map(|_| rng.next_limb()).collect();
    let draw = BigInt::from_limbs(limbs);

    let p_minus_3 = p.sub(&BigInt::from(3u64));
    let reducer = BarrettReducer::new(&p_minus_3)?;

    Ok(reducer.reduce(&draw).add_u64(2))
}
