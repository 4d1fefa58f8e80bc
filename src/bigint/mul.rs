//! Schoolbook and Karatsuba multiplication
//!
//! The `Mul` operator always goes through [`karatsuba`], which recurses
//! while both operands are at least [`KARATSUBA_THRESHOLD`] limbs wide and
//! otherwise falls back to the schoolbook double loop. The two paths are
//! bit-identical for all inputs; Karatsuba is purely an asymptotic
//! optimization (three half-size products per level instead of four).
//!
//! A scalar fast path multiplies by a native `u64` without promoting it to
//! a full `BigInt`.

use crate::bigint::BigInt;
use std::ops::Mul;

/// Minimum limb count (per operand) at which Karatsuba splits instead of
/// multiplying directly. 64 limbs is 2048 bits.
pub(crate) const KARATSUBA_THRESHOLD: usize = 64;

impl Mul<&BigInt> for &BigInt {
    type Output = BigInt;

    fn mul(self, rhs: &BigInt) -> BigInt {
        karatsuba(self, rhs)
    }
}

impl Mul for BigInt {
    type Output = BigInt;

    fn mul(self, rhs: BigInt) -> BigInt {
        &self * &rhs
    }
}

/// Schoolbook multiplication.
///
/// Accumulates `a[i] * b[j]` into limb `i + j` with 64-bit intermediates,
/// carrying along `j` and flushing the final carry into the limbs above.
fn schoolbook(a: &BigInt, b: &BigInt) -> BigInt {
    let mut limbs = vec![0u32; a.limb_len() + b.limb_len()];

    for (i, &ai) in a.limbs().iter().enumerate() {
        let mut carry = 0u64;

        for (j, &bj) in b.limbs().iter().enumerate() {
            let cur = limbs[i + j] as u64 + ai as u64 * bj as u64 + carry;
            limbs[i + j] = cur as u32;
            carry = cur >> 32;
        }

        let mut k = i + b.limb_len();
        while carry != 0 {
            if k >= limbs.len() {
                limbs.push(0);
            }
            let cur = limbs[k] as u64 + carry;
            limbs[k] = cur as u32;
            carry = cur >> 32;
            k += 1;
        }
    }

    BigInt::from_limbs(limbs)
}

/// Splits `value` at limb index `at` into `(low, high)`.
fn split(value: &BigInt, at: usize) -> (BigInt, BigInt) {
    if value.limb_len() <= at {
        return (value.clone(), BigInt::ZERO);
    }

    let low = BigInt::from_limbs(value.limbs()[..at].to_vec());
    let high = BigInt::from_limbs(value.limbs()[at..].to_vec());

    (low, high)
}

/// Karatsuba multiplication with schoolbook base case.
///
/// Splits both operands at half the wider limb count into `(high, low)`,
/// recursively computes `z0 = low1·low2`, `z1 = (low1+high1)·(low2+high2)`,
/// and `z2 = high1·high2`, then recombines
/// `z0 + (z1 − z2 − z0)·base^m + z2·base^(2m)` through a 64-bit accumulator
/// with one carry-normalization pass at the end.
fn karatsuba(a: &BigInt, b: &BigInt) -> BigInt {
    if a.limb_len() < KARATSUBA_THRESHOLD || b.limb_len() < KARATSUBA_THRESHOLD {
        return schoolbook(a, b);
    }

    let n = a.limb_len().max(b.limb_len());
    let m = n / 2;

    let (low1, high1) = split(a, m);
    let (low2, high2) = split(b, m);

    let z0 = karatsuba(&low1, &low2);
    let z1 = karatsuba(&(&low1 + &high1), &(&low2 + &high2));
    let z2 = karatsuba(&high1, &high2);

    // z1 >= z2 + z0 always holds for the three Karatsuba products.
    let middle = z1.sub(&z2).sub(&z0);

    let mut acc = vec![0u64; 2 * (n + 1)];
    for (i, &limb) in z0.limbs().iter().enumerate() {
        acc[i] += limb as u64;
    }
    for (i, &limb) in middle.limbs().iter().enumerate() {
        acc[i + m] += limb as u64;
    }
    for (i, &limb) in z2.limbs().iter().enumerate() {
        acc[i + 2 * m] += limb as u64;
    }

    let mut limbs = Vec::with_capacity(acc.len() + 1);
    let mut carry = 0u64;
    for slot in acc {
        let cur = slot + carry;
        limbs.push(cur as u32);
        carry = cur >> 32;
    }
    while carry != 0 {
        limbs.push(carry as u32);
        carry >>= 32;
    }

    BigInt::from_limbs(limbs)
}

impl BigInt {
    /// Multiplies by a native 64-bit scalar without promoting it to a
    /// `BigInt`.
    ///
    /// Each limb is multiplied against the full scalar through a 96-bit
    /// window (`u128` intermediate) and the window's upper part is carried
    /// into the following limbs, growing the result by up to two limbs.
    /// Produces exactly the same value as `self * &BigInt::from(small)`.
    pub fn mul_u64(&self, small: u64) -> BigInt {
        if small == 0 || self.is_zero() {
            return BigInt::ZERO;
        }

        let mut limbs = Vec::with_capacity(self.limb_len() + 2);
        let mut carry = 0u128;

        for &limb in self.limbs() {
            let cur = limb as u128 * small as u128 + carry;
            limbs.push(cur as u32);
            carry = cur >> 32;
        }
        while carry != 0 {
            limbs.push(carry as u32);
            carry >>= 32;
        }

        BigInt::from_limbs(limbs)
    }
}
