//! ChaCha20 block function, word-oriented
//!
//! The raw ChaCha20 permutation used by the deterministic limb source.
//! Output stays in 32-bit words (the engine's limb width) rather than
//! being serialized to bytes.

const SIGMA: [u32; 4] = [
    0x6170_7865, // "expa"
    0x3320_646e, // "nd 3"
    0x7962_2d32, // "2-by"
    0x6b20_6574, // "te k"
];

#[inline(always)]
fn quarter_round(state: &mut [u32; 16], a: usize, b: usize, c: usize, d: usize) {
    state[a] = state[a].wrapping_add(state[b]);
    state[d] = (state[d] ^ state[a]).rotate_left(16);

    state[c] = state[c].wrapping_add(state[d]);
    state[b] = (state[b] ^ state[c]).rotate_left(12);

    state[a] = state[a].wrapping_add(state[b]);
    state[d] = (state[d] ^ state[a]).rotate_left(8);

    state[c] = state[c].wrapping_add(state[d]);
    state[b] = (state[b] ^ state[c]).rotate_left(7);
}

/// Runs the ChaCha20 block function and returns the 16 output words.
///
/// The state is the standard layout: four constant words, eight key words,
/// the block counter, and three nonce words (fixed to zero for DRBG usage).
pub(crate) fn block_words(key: &[u32; 8], counter: u32) -> [u32; 16] {
    let mut state = [0u32; 16];

    state[..4].copy_from_slice(&SIGMA);
    state[4..12].copy_from_slice(key);
    state[12] = counter;
    // state[13..16] stays zero: the nonce is unused in counter-only mode.

    let initial = state;

    for _ in 0..10 {
        quarter_round(&mut state, 0, 4, 8, 12);
        quarter_round(&mut state, 1, 5, 9, 13);
        quarter_round(&mut state, 2, 6, 10, 14);
        quarter_round(&mut state, 3, 7, 11, 15);

        quarter_round(&mut state, 0, 5, 10, 15);
        quarter_round(&mut state, 1, 6, 11, 12);
        quarter_round(&mut state, 2, 7, 8, 13);
        quarter_round(&mut state, 3, 4, 9, 14);
    }

    for (word, &start) in state.iter_mut().zip(&initial) {
        *word = word.wrapping_add(start);
    }

    state
}
