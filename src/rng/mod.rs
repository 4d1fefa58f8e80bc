//! Random limb source
//!
//! The randomized generators in this crate never reach for process-wide
//! randomness. They consume an injected [`LimbSource`], an abstract
//! capability producing uniformly random 32-bit limbs, so callers decide
//! where entropy comes from and how it is shared.
//!
//! The crate ships one implementation, [`ChaChaSource`]: a deterministic
//! ChaCha20-based expander over a caller-supplied 256-bit seed. Gathering
//! that seed (from the operating system or elsewhere) is the caller's
//! responsibility; seeding quality is outside the engine's correctness
//! contract but decides the security of generated keys.

pub(crate) mod chacha20;
mod drbg;

pub use drbg::ChaChaSource;

/// Abstract source of uniformly random 32-bit limbs.
///
/// Implementations must return each limb uniformly at random and
/// independently of previous outputs (up to the quality of their seed).
pub trait LimbSource {
    /// Returns the next random limb.
    fn next_limb(&mut self) -> u32;

    /// Returns the next random 64-bit value, composed of two limbs.
    fn next_u64(&mut self) -> u64 {
        let low = self.next_limb() as u64;
        let high = self.next_limb() as u64;

        (high << 32) | low
    }
}
