//! Diffie–Hellman key exchange
//!
//! The key-agreement boundary on top of the engine: safe-prime group
//! parameters, keypair derivation, and shared-secret computation. Two
//! parties agree on [`DhParams`], each derives a [`DhKeyPair`], they swap
//! public keys, and both arrive at the same shared secret.
//!
//! This module performs no I/O and prints nothing; wiring the exchange
//! into a transport or a demo is the caller's concern.

mod core;

pub use self::core::{DhKeyPair, DhParams, shared_secret};
