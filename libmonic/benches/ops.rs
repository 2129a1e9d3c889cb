#[macro_use]
extern crate criterion;
extern crate libmonic;

use criterion::{black_box, Criterion};
use libmonic::{multiply, pow, Polynomial};

fn inputs() -> (Polynomial, Polynomial) {
    let lhs = "3*X^2*Y^3 + 6*X*Y^4 + X^3*Y^2 + 4*X^5 - 6*X^2*Y + 3*X*Y*Z - 5*X^2 + 3*Y^3 + 24*X*Y - 4"
        .parse()
        .unwrap();
    let rhs = "36*X*Y + 6*X + 6*Y + 1".parse().unwrap();
    (lhs, rhs)
}

fn bench_multiply(c: &mut Criterion) {
    let (lhs, rhs) = inputs();
    c.bench_function("multiply", |b| {
        b.iter(|| multiply(black_box(&lhs), black_box(&rhs)))
    });
}

fn bench_pow(c: &mut Criterion) {
    let (_, rhs) = inputs();
    c.bench_function("pow", |b| b.iter(|| pow(black_box(&rhs), black_box(4))));
}

criterion_group!(op_benches, bench_multiply, bench_pow);
criterion_main!(op_benches);
