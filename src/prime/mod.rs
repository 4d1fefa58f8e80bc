//! Primality testing and randomized generation
//!
//! Miller–Rabin probabilistic primality testing plus the generators built
//! on top of it: random odd values of an exact bit length, primes, safe
//! primes (`p` with `(p-1)/2` also prime), and Diffie–Hellman private
//! keys.
//!
//! Every randomized operation takes a `&mut impl LimbSource`; there is no
//! implicit global generator. The prime searches are rejection-sampling
//! loops: a rejected candidate is the expected steady state, not an error.

mod generate;
mod miller_rabin;

pub use generate::{generate_prime, generate_private_key, generate_safe_prime, random_bits};
pub use miller_rabin::{MILLER_RABIN_ROUNDS, is_probable_prime};
