use mpint::bigint::BigInt;
use mpint::modular::mod_pow;
use mpint::prime::random_bits;
use mpint::rng::ChaChaSource;

use criterion::{Criterion, criterion_group, criterion_main};
use std::hint::black_box;

pub fn bench_multiplication(c: &mut Criterion) {
    let mut rng = ChaChaSource::from_seed([1u8; 32]);

    let a_small = random_bits(512, &mut rng);
    let b_small = random_bits(512, &mut rng);
    c.bench_function("mul 512 bits", |b| {
        b.iter(|| black_box(&a_small) * black_box(&b_small))
    });

    let a_wide = random_bits(4096, &mut rng);
    let b_wide = random_bits(4096, &mut rng);
    c.bench_function("mul 4096 bits (karatsuba)", |b| {
        b.iter(|| black_box(&a_wide) * black_box(&b_wide))
    });
}

pub fn bench_mod_pow(c: &mut Criterion) {
    let mut rng = ChaChaSource::from_seed([1u8; 32]);

    let base = random_bits(512, &mut rng);
    let exponent = random_bits(512, &mut rng);
    let modulus = random_bits(512, &mut rng);

    c.bench_function("mod_pow 512 bits", |b| {
        b.iter(|| {
            mod_pow(
                black_box(&base),
                black_box(&exponent),
                black_box(&modulus),
            )
            .unwrap()
        })
    });
}

criterion_group!(benches, bench_multiplication, bench_mod_pow);
criterion_main!(benches);
