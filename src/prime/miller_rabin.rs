//! Miller–Rabin probabilistic primality test
//!
//! Writes `n − 1 = d·2^s`, then challenges `n` with random witnesses: for
//! each witness `a`, `n` survives if `a^d ≡ 1`, or if some member of the
//! squaring chain `a^d, a^(2d), …, a^(2^(s-1)·d)` is `n − 1`. A witness
//! for which neither holds proves `n` composite. A composite survives one
//! random witness with probability at most 1/4, so `iterations` rounds
//! bound the false-positive probability by `4^-iterations`.

use crate::bigint::BigInt;
use crate::modular::{BarrettReducer, mod_pow_reduced};
use crate::rng::LimbSource;

/// Default number of witness rounds (false-positive bound `4^-7`).
pub const MILLER_RABIN_ROUNDS: u32 = 7;

/// Tests whether `n` is probably prime using `iterations` random witnesses.
///
/// 2 and 3 are prime; values below 2 and even values are composite. Each
/// witness is drawn uniformly from `[2, n − 2]` (a random 64-bit value
/// reduced modulo `n − 4`, offset by 2) using the supplied limb source.
///
/// Returns `false` as soon as any witness proves `n` composite; returns
/// `true` only when every round passes.
pub fn is_probable_prime<R: LimbSource + ?Sized>(n: &BigInt, iterations: u32, rng: &mut R) -> bool {
    let two = BigInt::from(2u64);
    let three = BigInt::from(3u64);

    if *n == two || *n == three {
        return true;
    }
    if *n < two || n.is_even() {
        return false;
    }

    // n >= 5 and odd from here on.
    let n_minus_1 = n.sub(&BigInt::one());
    let n_minus_4 = n.sub(&BigInt::from(4u64));

    // n - 1 = d * 2^s with d odd.
    let mut d = n_minus_1.clone();
    let mut s = 0u32;
    while d.is_even() {
        d = d.half();
        s += 1;
    }

    // Both moduli are non-zero, so neither reducer can fail.
    let Ok(n_reducer) = BarrettReducer::new(n) else {
        return false;
    };
    let Ok(witness_reducer) = BarrettReducer::new(&n_minus_4) else {
        return false;
    };

    'rounds: for _ in 0..iterations {
        let draw = BigInt::from(rng.next_u64());
        let witness = witness_reducer.reduce(&draw).add_u64(2);

        let mut x = mod_pow_reduced(&witness, &d, &n_reducer);
        if x == BigInt::one() || x == n_minus_1 {
            continue;
        }

        for _ in 1..s {
            x = n_reducer.reduce(&(&x * &x));
            if x == n_minus_1 {
                continue 'rounds;
            }
        }

        return false;
    }

    true
}
