//! Multi-precision integer arithmetic and Diffie–Hellman key exchange
//!
//! This crate provides a hand-built arbitrary-precision unsigned integer
//! engine and the number-theoretic operations needed to run a classic
//! Diffie–Hellman key agreement on top of it.
//!
//! The focus is on **clarity, predictability, and auditability**, rather
//! than on providing a large or general-purpose numeric API. All components
//! are dependency-free, explicit in their semantics, and written so that
//! every carry, borrow, and reduction step can be audited directly.
//!
//! # Module overview
//!
//! - `bigint`
//!   The core value type: a limb-based unsigned big integer with addition,
//!   subtraction, schoolbook and Karatsuba multiplication, long division,
//!   bit shifts, and a strict decimal codec. All operations are pure: they
//!   take values by reference and return newly built results.
//!
//! - `modular`
//!   Modular arithmetic built on the core engine: Barrett reduction against
//!   a fixed modulus (with its precomputed parameter) and square-and-multiply
//!   modular exponentiation.
//!
//! - `prime`
//!   Probabilistic primality testing (Miller–Rabin) and randomized
//!   generation of primes, safe primes, and Diffie–Hellman private keys.
//!   Every generator consumes an injected random limb source rather than
//!   process-wide state.
//!
//! - `rng`
//!   The random limb capability consumed by the generators: a small trait
//!   plus a deterministic ChaCha20-based expander for callers that supply
//!   their own seed. Operating-system entropy collection is deliberately
//!   left to the caller.
//!
//! - `dh`
//!   The key-exchange boundary: parameter generation (safe prime plus
//!   conventional generator), keypair derivation, and shared-secret
//!   computation.
//!
//! # Design goals
//!
//! - Explicit carry/borrow propagation, no hidden numeric magic
//! - Minimal and explicit APIs returning `Result` for every fallible step
//! - Stable, well-defined semantics (normalization invariants, exact
//!   equivalence between the fast and the reference algorithm paths)
//! - Randomness as an injected capability, never ambient state
//!
//! The algorithms here are **not constant-time**. The crate is suitable for
//! demonstrations, protocol prototyping, and study; production systems
//! should use an audited constant-time library.

pub mod bigint;
pub mod dh;
pub mod modular;
pub mod prime;
pub mod rng;
