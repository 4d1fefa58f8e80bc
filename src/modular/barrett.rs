//! Barrett reduction
//!
//! Estimate-and-correct modular reduction against a fixed modulus. With
//! `base = 2³²` and `k` the modulus limb count, the precomputed parameter
//! `mu = floor(base^(2k) / m)` turns each reduction into
//! `q3 = ((a >> 32(k−1)) · mu) >> 32(k+1)`, an underestimate of `a / m`
//! that is off by at most a small constant when `a < base^(2k)`, so a short
//! corrective-subtraction loop finishes the job.
//!
//! The output is identical to the exact division remainder for all inputs.

use crate::bigint::{ArithmeticError, BigInt};

/// Reduction context for a fixed modulus.
///
/// Bundles the modulus with its limb count `k` and the Barrett parameter
/// `mu`. Build one per modulus and reuse it whenever several reductions
/// share the same modulus (modular exponentiation, witness sampling);
/// for a one-shot reduction see [`reduce_once`].
pub struct BarrettReducer {
    modulus: BigInt,
    mu: BigInt,
    k: usize,
}

impl BarrettReducer {
    /// Precomputes the reduction parameter for `modulus`.
    ///
    /// `mu = floor(base^(2k) / modulus)` is obtained with the engine's long
    /// division, where `base^(2k)` is the limb sequence with a single one
    /// at index `2k`.
    ///
    /// # Errors
    ///
    /// Returns [`ArithmeticError::DivisionByZero`] when `modulus` is zero.
    pub fn new(modulus: &BigInt) -> Result<Self, ArithmeticError> {
        if modulus.is_zero() {
            return Err(ArithmeticError::DivisionByZero);
        }

        let k = modulus.limb_len();

        let mut power_limbs = vec![0u32; 2 * k + 1];
        power_limbs[2 * k] = 1;
        let base_power = BigInt::from_limbs(power_limbs);

        let (mu, _) = base_power.div_rem(modulus)?;

        Ok(BarrettReducer {
            modulus: modulus.clone(),
            mu,
            k,
        })
    }

    /// The modulus this reducer was built for.
    pub fn modulus(&self) -> &BigInt {
        &self.modulus
    }

    /// Reduces `value` modulo the fixed modulus.
    ///
    /// Values already below the modulus are returned unchanged. Otherwise
    /// the quotient estimate `q3` is computed from `mu`, `q3·m` is
    /// subtracted, and the candidate is corrected downward until it falls
    /// below the modulus. The estimate never exceeds the true quotient, so
    /// the candidate is never negative.
    ///
    /// The corrective loop runs a small constant number of times when
    /// `value < base^(2k)`. All callers in this crate stay within that
    /// bound (products of two already-reduced values at most).
    pub fn reduce(&self, value: &BigInt) -> BigInt {
        if value < &self.modulus {
            return value.clone();
        }

        let q1 = value >> (32 * (self.k - 1));
        let q2 = &q1 * &self.mu;
        let q3 = &q2 >> (32 * (self.k + 1));

        let mut r = value.sub(&(&q3 * &self.modulus));
        while r >= self.modulus {
            r = r.sub(&self.modulus);
        }

        r
    }
}

/// One-shot Barrett reduction: `value mod modulus`.
///
/// Precomputes the parameter, reduces, and discards the context. Callers
/// reducing repeatedly against the same modulus should hold a
/// [`BarrettReducer`] instead.
pub fn reduce_once(value: &BigInt, modulus: &BigInt) -> Result<BigInt, ArithmeticError> {
    Ok(BarrettReducer::new(modulus)?.reduce(value))
}
