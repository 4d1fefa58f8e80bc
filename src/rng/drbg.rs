//! ChaCha20-based deterministic limb source
//!
//! Expands a caller-supplied 256-bit seed into an unbounded stream of
//! 32-bit limbs using the ChaCha20 block function in counter mode. The
//! expansion is fully deterministic: two sources built from the same seed
//! produce the same limb stream, which is what makes randomized tests
//! reproducible.

use crate::rng::LimbSource;
use crate::rng::chacha20::block_words;

/// Deterministic random limb source over a 256-bit seed.
///
/// Internally keeps the ChaCha20 key, a block counter, and the most
/// recently generated block of 16 output words, handing them out one at a
/// time. When a block is exhausted the counter advances and a fresh block
/// is generated.
pub struct ChaChaSource {
    key: [u32; 8],
    counter: u32,
    block: [u32; 16],
    used: usize,
}

impl ChaChaSource {
    /// Creates a source from a 256-bit seed.
    ///
    /// The seed must be uniformly random and unpredictable for any
    /// security-relevant use; the seed buffer itself is consumed by value.
    pub fn from_seed(seed: [u8; 32]) -> Self {
        let mut key = [0u32; 8];
        for (word, chunk) in key.iter_mut().zip(seed.chunks_exact(4)) {
            *word = u32::from_le_bytes([chunk[0], chunk[1], chunk[2], chunk[3]]);
        }

        ChaChaSource {
            key,
            counter: 0,
            block: [0u32; 16],
            used: 16, // forces a refill on first use
        }
    }

    fn refill(&mut self) {
        self.block = block_words(&self.key, self.counter);
        self.counter = self.counter.wrapping_add(1);
        self.used = 0;
    }
}

impl LimbSource for ChaChaSource {
    fn next_limb(&mut self) -> u32 {
        if self.used == 16 {
            self.refill();
        }

        let limb = self.block[self.used];
        self.used += 1;

        limb
    }
}
