//! Square-and-multiply modular exponentiation

use crate::bigint::{ArithmeticError, BigInt};
use crate::modular::BarrettReducer;

/// Computes `base^exponent mod modulus`.
///
/// Binary exponentiation: the base is pre-reduced, then for every low bit
/// of the exponent the accumulator is multiplied in when the bit is set,
/// the base is squared, and the exponent is halved (a limb-wise one-bit
/// right shift with carry from the most-significant limb down). Every
/// product is reduced through one shared [`BarrettReducer`].
///
/// An exponent of zero yields one for any modulus greater than one; a
/// modulus of one always yields zero.
///
/// # Errors
///
/// Returns [`ArithmeticError::DivisionByZero`] when `modulus` is zero.
pub fn mod_pow(
    base: &BigInt,
    exponent: &BigInt,
    modulus: &BigInt,
) -> Result<BigInt, ArithmeticError> {
    let reducer = BarrettReducer::new(modulus)?;

    Ok(mod_pow_reduced(base, exponent, &reducer))
}

/// Exponentiation against a caller-supplied reduction context, so that
/// repeated exponentiations with one modulus amortize the Barrett
/// parameter (the primality tester's hot path).
pub(crate) fn mod_pow_reduced(
    base: &BigInt,
    exponent: &BigInt,
    reducer: &BarrettReducer,
) -> BigInt {
    // Starting from reduce(1) makes a modulus of one collapse to zero.
    let mut result = reducer.reduce(&BigInt::one());
    let mut base = reducer.reduce(base);
    let mut exponent = exponent.clone();

    while !exponent.is_zero() {
        if !exponent.is_even() {
            result = reducer.reduce(&(&result * &base));
        }

        base = reducer.reduce(&(&base * &base));
        exponent = exponent.half();
    }

    result
}
