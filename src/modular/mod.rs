//! Modular arithmetic
//!
//! Modular reduction and exponentiation built on the `bigint` engine.
//!
//! Reduction uses the Barrett scheme: a per-modulus parameter
//! `mu = floor(base^(2k) / m)` is precomputed with one long division, after
//! which every reduction costs two multiplications, two shifts, and a small
//! number of corrective subtractions instead of a full division. Barrett is
//! the single canonical reduction algorithm in this crate; there is no
//! competing repeated-subtraction path.
//!
//! Exponentiation is binary square-and-multiply, consuming the exponent one
//! low bit at a time and reducing every intermediate product through the
//! same reducer.

mod barrett;
mod modexp;

pub use barrett::{BarrettReducer, reduce_once};
pub use modexp::mod_pow;

pub(crate) use modexp::mod_pow_reduced;
