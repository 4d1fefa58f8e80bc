//! Long division
//!
//! Digit-by-digit division in base 2³²: the dividend's limbs are consumed
//! from the most-significant end while a running remainder is maintained,
//! and each quotient digit is found by binary search over the full 32-bit
//! range with trial multiplication. The same routine backs the public
//! quotient/remainder API and the precomputation of the Barrett parameter.
//!
//! A one-pass small-divisor variant serves the decimal encoder.

use crate::bigint::{ArithmeticError, BigInt};

impl BigInt {
    /// Computes the quotient and remainder of `self / rhs`.
    ///
    /// For each dividend limb, from the most-significant down, the running
    /// remainder becomes `remainder·2³² + limb` and the largest 32-bit
    /// digit `q` with `rhs·q <= remainder` is located by binary search;
    /// `rhs·q` is then subtracted and `q` appended to the quotient.
    ///
    /// The results satisfy `self == rhs·quotient + remainder` with
    /// `remainder < rhs`.
    ///
    /// # Errors
    ///
    /// Returns [`ArithmeticError::DivisionByZero`] when `rhs` is zero.
    pub fn div_rem(&self, rhs: &BigInt) -> Result<(BigInt, BigInt), ArithmeticError> {
        if rhs.is_zero() {
            return Err(ArithmeticError::DivisionByZero);
        }

        let mut quotient_digits = Vec::with_capacity(self.limb_len());
        let mut remainder = BigInt::ZERO;

        for &limb in self.limbs().iter().rev() {
            let mut limbs = vec![limb];
            limbs.extend_from_slice(remainder.limbs());
            remainder = BigInt::from_limbs(limbs);

            let mut digit = 0u32;
            let mut low = 0u64;
            let mut high = u32::MAX as u64;

            while low <= high {
                let mid = low + ((high - low) >> 1);
                let trial = rhs.mul_u64(mid);

                if trial <= remainder {
                    digit = mid as u32;
                    low = mid + 1;
                } else {
                    // mid >= 1 here: a zero digit always passes the trial.
                    high = mid - 1;
                }
            }

            remainder = remainder.sub(&rhs.mul_u64(digit as u64));
            quotient_digits.push(digit);
        }

        quotient_digits.reverse();

        Ok((BigInt::from_limbs(quotient_digits), remainder))
    }

    /// Divides by a small divisor in a single limb sweep.
    ///
    /// Walks the limbs from the most-significant end keeping a sub-divisor
    /// remainder in a 64-bit window. This is the base-10 special case used
    /// by the decimal encoder; `divisor` must be non-zero.
    pub(crate) fn div_rem_u32(&self, divisor: u32) -> (BigInt, u32) {
        assert!(divisor != 0, "division by zero");

        let mut limbs = self.limbs().to_vec();
        let mut rem = 0u64;

        for limb in limbs.iter_mut().rev() {
            let cur = (rem << 32) | *limb as u64;
            *limb = (cur / divisor as u64) as u32;
            rem = cur % divisor as u64;
        }

        (BigInt::from_limbs(limbs), rem as u32)
    }
}
