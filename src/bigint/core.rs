//! Representation, normalization, and ordering for `BigInt`
//!
//! The value is a `Vec<u32>` of limbs, least-significant limb first.
//! Normalization (`trim`) strips high-order zero limbs so that equality is
//! plain element-wise limb comparison and zero is the empty vector.

use std::cmp::Ordering;

/// Arbitrary-precision unsigned integer.
///
/// Stored as 32-bit limbs in little-endian limb order: limb at index 0
/// covers bits 0–31, index 1 covers bits 32–63, and so on.
///
/// Invariant: the limb vector never ends in a zero limb. The empty vector
/// is the canonical representation of zero, so two equal values always have
/// identical limb vectors.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct BigInt {
    limbs: Vec<u32>,
}

impl BigInt {
    /// The value zero (the empty limb sequence).
    pub const ZERO: Self = BigInt { limbs: Vec::new() };

    /// Returns the value one.
    pub fn one() -> Self {
        BigInt { limbs: vec![1] }
    }

    /// Builds a value from raw limbs and normalizes it.
    pub(crate) fn from_limbs(limbs: Vec<u32>) -> Self {
        let mut value = BigInt { limbs };
        value.trim();
        value
    }

    /// Removes trailing (most-significant) zero limbs.
    ///
    /// Restores the normalization invariant after any operation that can
    /// leave spurious high zero limbs. Idempotent: trimming an already
    /// normalized value changes nothing.
    pub(crate) fn trim(&mut self) {
        while let Some(&0) = self.limbs.last() {
            self.limbs.pop();
        }
    }

    /// Returns `true` if the value is zero.
    pub fn is_zero(&self) -> bool {
        self.limbs.is_empty()
    }

    /// Returns `true` if the value is even (zero counts as even).
    pub fn is_even(&self) -> bool {
        match self.limbs.first() {
            Some(limb) => limb & 1 == 0,
            None => true,
        }
    }

    /// Number of limbs in the normalized representation.
    pub(crate) fn limb_len(&self) -> usize {
        self.limbs.len()
    }

    /// Read access to the raw limbs (least-significant first).
    pub(crate) fn limbs(&self) -> &[u32] {
        &self.limbs
    }

    /// Number of significant bits (zero has bit length zero).
    pub fn bit_len(&self) -> usize {
        match self.limbs.last() {
            Some(top) => self.limbs.len() * 32 - top.leading_zeros() as usize,
            None => 0,
        }
    }
}

/// Converts a native unsigned integer.
///
/// Zero maps to the empty limb sequence; otherwise the low 32 bits become
/// limb 0 and, only when non-zero, the high 32 bits become limb 1.
impl From<u64> for BigInt {
    fn from(value: u64) -> Self {
        if value == 0 {
            return BigInt::ZERO;
        }

        let mut limbs = vec![value as u32];
        if value >> 32 != 0 {
            limbs.push((value >> 32) as u32);
        }

        BigInt { limbs }
    }
}

impl From<u32> for BigInt {
    fn from(value: u32) -> Self {
        BigInt::from(value as u64)
    }
}

/// Total ordering over normalized values.
///
/// A value with fewer limbs is smaller. At equal limb counts the limbs are
/// compared from the most-significant end down; the first difference
/// decides.
impl Ord for BigInt {
    fn cmp(&self, other: &Self) -> Ordering {
        if self.limbs.len() != other.limbs.len() {
            return self.limbs.len().cmp(&other.limbs.len());
        }

        for (a, b) in self.limbs.iter().rev().zip(other.limbs.iter().rev()) {
            if a != b {
                return a.cmp(b);
            }
        }

        Ordering::Equal
    }
}

impl PartialOrd for BigInt {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}
