use artkit::prelude::*;
use criterion::{black_box, criterion_group, criterion_main, Criterion};

fn node_benchmark(c: &mut Criterion) {
    c.bench_function("build and resolve combinator chain", |b| {
        b.iter(|| {
            let a = uniform_float(0.0, 1.0);
            let mut expr = &a * 2.0;
            for _ in 0..1000 {
                expr = expr + &a;
            }
            black_box(expr.resolve().unwrap());
        })
    });

    let a = normal_float(0.0, 1.0);
    let mut chain = &a * 2.0;
    for _ in 0..1000 {
        chain = chain * 1.0001 + &a;
    }
    c.bench_function("re-resolve combinator chain", |b| {
        b.iter(|| black_box(chain.resolve().unwrap()))
    });

    c.bench_function("distribution leaf construction", |b| {
        b.iter(|| black_box(normal_int(0.0, 10.0)))
    });
}

criterion_group!(benches, node_benchmark);
criterion_main!(benches);
