use criterion::{black_box, criterion_group, criterion_main, Criterion};
use crypto_classroom::{arith::pow_mod, bsgs::solve_discrete_log, rsa::RsaKey};

fn criterion_benchmark(c: &mut Criterion) {
    c.bench_function("pow_mod", |b| {
        b.iter(|| pow_mod(black_box(5), black_box(1_234_567), black_box(1_000_003)))
    });

    c.bench_function("solve discrete log", |b| {
        b.iter(|| solve_discrete_log(black_box(5), black_box(777_777), black_box(1_000_003)))
    });

    c.bench_function("rsa round trip", |b| {
        b.iter(|| {
            let key = RsaKey::derive(black_box(61), black_box(53), black_box(17)).unwrap();
            let cipher = key.encrypt(black_box(42)).unwrap();
            key.decrypt(cipher).unwrap()
        })
    });
}

criterion_group!(benches, criterion_benchmark);
criterion_main!(benches);
