//! Diffie–Hellman parameters, keypairs, and shared secrets

use crate::bigint::{ArithmeticError, BigInt};
use crate::modular::mod_pow;
use crate::prime::{generate_private_key, generate_safe_prime};
use crate::rng::LimbSource;

/// Conventional generator for safe-prime groups.
const DEFAULT_GENERATOR: u64 = 5;

/// Public group parameters shared by both parties.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DhParams {
    /// Safe-prime modulus of the group.
    pub prime: BigInt,

    /// Group generator.
    pub generator: BigInt,
}

impl DhParams {
    /// Generates fresh group parameters with a safe prime of exactly
    /// `bits` significant bits and the conventional generator 5.
    pub fn generate<R: LimbSource + ?Sized>(bits: usize, rng: &mut R) -> Self {
        DhParams {
            prime: generate_safe_prime(bits, rng),
            generator: BigInt::from(DEFAULT_GENERATOR),
        }
    }

    /// Wraps caller-supplied parameters (a known group, for example).
    pub fn new(prime: BigInt, generator: BigInt) -> Self {
        DhParams { prime, generator }
    }
}

/// One party's key material.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DhKeyPair {
    /// Secret exponent in `[2, p − 2]`.
    pub private: BigInt,

    /// Public value `generator^private mod prime`.
    pub public: BigInt,
}

impl DhKeyPair {
    /// Derives a keypair under the given parameters.
    ///
    /// # Errors
    ///
    /// Returns [`ArithmeticError::InvalidArgument`] when the group prime
    /// is below 5.
    pub fn generate<R: LimbSource + ?Sized>(
        params: &DhParams,
        rng: &mut R,
    ) -> Result<Self, ArithmeticError> {
        let private = generate_private_key(&params.prime, rng)?;
        let public = mod_pow(&params.generator, &private, &params.prime)?;

        Ok(DhKeyPair { private, public })
    }
}

/// Computes the shared secret `peer_public^private mod prime`.
///
/// Both parties call this with their own private key and the other
/// party's public value; the results are equal.
///
/// # Errors
///
/// Returns [`ArithmeticError::DivisionByZero`] when the group prime is
/// zero.
pub fn shared_secret(
    params: &DhParams,
    private: &BigInt,
    peer_public: &BigInt,
) -> Result<BigInt, ArithmeticError> {
    mod_pow(peer_public, private, &params.prime)
}
