//! Addition, subtraction, shifting, and halving
//!
//! The additive core of the engine: limb-wise carry/borrow loops in base
//! 2³². Addition is total and exposed through the `Add` operator;
//! subtraction is fallible (the domain is unsigned) and exposed as
//! [`BigInt::checked_sub`]. Right shifts and the one-bit halve used by the
//! modular layer also live here.

use crate::bigint::{ArithmeticError, BigInt};
use std::ops::{Add, Shr};

/// Addition of two big integers.
///
/// Walks `max(len(a), len(b))` limb positions summing `carry + a[i] + b[i]`
/// (missing limbs count as zero), stores the low 32 bits, and carries the
/// high bits into the next position. A final carry appends one more limb.
impl Add<&BigInt> for &BigInt {
    type Output = BigInt;

    fn add(self, rhs: &BigInt) -> BigInt {
        let width = self.limb_len().max(rhs.limb_len());
        let mut limbs = Vec::with_capacity(width + 1);
        let mut carry = 0u64;

        for i in 0..width {
            let mut sum = carry;
            if let Some(&limb) = self.limbs().get(i) {
                sum += limb as u64;
            }
            if let Some(&limb) = rhs.limbs().get(i) {
                sum += limb as u64;
            }

            limbs.push(sum as u32);
            carry = sum >> 32;
        }

        if carry != 0 {
            limbs.push(carry as u32);
        }

        BigInt::from_limbs(limbs)
    }
}

impl Add for BigInt {
    type Output = BigInt;

    fn add(self, rhs: BigInt) -> BigInt {
        &self + &rhs
    }
}

impl BigInt {
    /// Adds a native 64-bit scalar without promoting it to a `BigInt`.
    ///
    /// The scalar's low and high 32-bit halves are added into limbs 0 and 1
    /// and the carry is propagated upward, growing the result as needed.
    /// Produces exactly the same value as `self + BigInt::from(small)`.
    pub fn add_u64(&self, small: u64) -> BigInt {
        let mut limbs = self.limbs().to_vec();
        let low = small as u32;
        let high = (small >> 32) as u32;

        if limbs.is_empty() {
            limbs.push(0);
        }

        let sum = limbs[0] as u64 + low as u64;
        limbs[0] = sum as u32;
        let mut carry = sum >> 32;

        let mut i = 1;
        if high != 0 || carry != 0 {
            if limbs.len() < 2 {
                limbs.push(0);
            }
            let sum = limbs[1] as u64 + high as u64 + carry;
            limbs[1] = sum as u32;
            carry = sum >> 32;
            i = 2;
        }

        while carry != 0 {
            if i >= limbs.len() {
                limbs.push(0);
            }
            let sum = limbs[i] as u64 + carry;
            limbs[i] = sum as u32;
            carry = sum >> 32;
            i += 1;
        }

        BigInt::from_limbs(limbs)
    }

    /// Subtraction, requiring `self >= rhs`.
    ///
    /// Walks the limbs of `self` computing
    /// `diff = self[i] - rhs[i] + borrow`; a negative difference wraps by
    /// 2³² and sets the borrow for the next position.
    ///
    /// # Errors
    ///
    /// Returns [`ArithmeticError::InvalidOperation`] when `self < rhs`,
    /// since the result would be negative.
    pub fn checked_sub(&self, rhs: &BigInt) -> Result<BigInt, ArithmeticError> {
        if self < rhs {
            return Err(ArithmeticError::InvalidOperation);
        }

        Ok(self.sub(rhs))
    }

    /// Subtraction for call sites whose invariants guarantee `self >= rhs`
    /// (Karatsuba recombination, Barrett correction, division remainders).
    pub(crate) fn sub(&self, rhs: &BigInt) -> BigInt {
        assert!(self >= rhs, "subtraction underflow");

        let mut limbs = Vec::with_capacity(self.limb_len());
        let mut borrow = 0i64;

        for i in 0..self.limb_len() {
            let subtrahend = rhs.limbs().get(i).copied().unwrap_or(0);
            let mut diff = self.limbs()[i] as i64 - subtrahend as i64 + borrow;

            if diff < 0 {
                diff += 1i64 << 32;
                borrow = -1;
            } else {
                borrow = 0;
            }

            limbs.push(diff as u32);
        }

        BigInt::from_limbs(limbs)
    }

    /// Halves the value (integer division by two).
    ///
    /// Implemented as a limb-wise right shift by one bit with the carry
    /// propagated from the most-significant limb down. Shared by modular
    /// exponentiation (exponent consumption) and Miller–Rabin
    /// (factoring out powers of two).
    pub(crate) fn half(&self) -> BigInt {
        let mut limbs = self.limbs().to_vec();
        let mut carry = 0u64;

        for limb in limbs.iter_mut().rev() {
            let cur = (carry << 32) | *limb as u64;
            *limb = (cur >> 1) as u32;
            carry = cur & 1;
        }

        BigInt::from_limbs(limbs)
    }
}

/// Logical right shift by a bit count.
///
/// A zero shift returns the value unchanged; shifting by the full bit width
/// or more yields zero. Otherwise the shift splits into whole-limb steps and
/// a sub-limb bit count, and each output limb is extracted from a 64-bit
/// window over two adjacent input limbs.
impl Shr<usize> for &BigInt {
    type Output = BigInt;

    fn shr(self, shift: usize) -> BigInt {
        if shift == 0 {
            return self.clone();
        }
        if shift >= self.limb_len() * 32 {
            return BigInt::ZERO;
        }

        let full_limbs = shift / 32;
        let bit_shift = shift % 32;
        let out_len = self.limb_len() - full_limbs;
        let mut limbs = Vec::with_capacity(out_len);

        for i in 0..out_len {
            let low = self.limbs()[i + full_limbs] as u64;
            let high = match self.limbs().get(i + full_limbs + 1) {
                Some(&limb) => limb as u64,
                None => 0,
            };

            let window = (high << 32) | low;
            limbs.push((window >> bit_shift) as u32);
        }

        BigInt::from_limbs(limbs)
    }
}
