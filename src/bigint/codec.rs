//! Decimal codec
//!
//! The engine's external representation: unsigned ASCII decimal strings
//! with no sign and no leading zeros. Encoding divides repeatedly by ten
//! and collects the remainders; decoding folds digits through the engine's
//! own scalar multiply and add.
//!
//! Parsing is strict: any character outside `0-9`, or an empty input,
//! is rejected instead of being silently skipped.

use crate::bigint::BigInt;
use std::fmt::{Display, Formatter};
use std::str::FromStr;

/// Errors reported when parsing a decimal string.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParseBigIntError {
    /// The input string was empty.
    Empty,

    /// The input contained a character that is not an ASCII decimal digit.
    InvalidDigit,
}

impl BigInt {
    /// Parses an unsigned decimal string.
    ///
    /// Each digit `d` folds into the accumulator as `result·10 + d`, using
    /// the scalar multiply and add fast paths. Leading zeros are accepted
    /// on input ("007" parses as 7) but never produced on output.
    ///
    /// # Errors
    ///
    /// - [`ParseBigIntError::Empty`] for an empty string.
    /// - [`ParseBigIntError::InvalidDigit`] for any non-digit character.
    pub fn from_decimal(text: &str) -> Result<BigInt, ParseBigIntError> {
        if text.is_empty() {
            return Err(ParseBigIntError::Empty);
        }

        let mut result = BigInt::ZERO;

        for c in text.chars() {
            let digit = c.to_digit(10).ok_or(ParseBigIntError::InvalidDigit)?;
            result = result.mul_u64(10).add_u64(digit as u64);
        }

        Ok(result)
    }
}

impl FromStr for BigInt {
    type Err = ParseBigIntError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        BigInt::from_decimal(s)
    }
}

/// Formats the value as an unsigned decimal string.
///
/// Divides by ten until the value is exhausted, collecting the remainders
/// least-significant digit first, then emits them in reverse. Zero is the
/// single character `0`.
impl Display for BigInt {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        if self.is_zero() {
            return f.write_str("0");
        }

        let mut digits = Vec::new();
        let mut current = self.clone();

        while !current.is_zero() {
            let (quotient, rem) = current.div_rem_u32(10);
            digits.push(char::from(b'0' + rem as u8));
            current = quotient;
        }

        digits.iter().rev().collect::<String>().fmt(f)
    }
}
