//! Arbitrary-precision unsigned integers
//!
//! This module defines the crate's sole numeric entity: [`BigInt`], an
//! unsigned big integer stored as 32-bit limbs in little-endian limb order
//! (limb 0 holds bits 0–31).
//!
//! The representation keeps one invariant at all times: **no trailing
//! most-significant zero limb**, with the empty limb sequence as the
//! canonical encoding of zero. Every operation that could produce spurious
//! high zero limbs normalizes its result before returning it.
//!
//! Values are immutable: arithmetic takes operands by reference and builds
//! a new value. Operations that can fail (subtraction below zero, division
//! by zero) return `Result` instead of substituting a silently wrong value.

mod codec;
mod core;
mod div;
mod mul;
mod ops;

pub use self::core::BigInt;
pub use codec::ParseBigIntError;

/// Errors reported by fallible arithmetic operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ArithmeticError {
    /// Division or modular reduction with a zero divisor.
    DivisionByZero,

    /// An operation whose result would fall outside the unsigned domain,
    /// currently only subtraction with a larger subtrahend.
    InvalidOperation,

    /// A caller-supplied argument violates an operation's contract,
    /// currently only private-key generation with a modulus below 5.
    InvalidArgument,
}
