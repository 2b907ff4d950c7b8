//! Criterion benchmarks for the generators.

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use num_bigint::BigUint;

use prnglab_core::{
    AdditiveCongruential, ConstantMultiplier, GeneratorParams, LinearCongruential, MiddleProduct,
    MiddleSquare, MultiplicativeCongruential, Options, WindowPolicy,
};

fn run(params: &GeneratorParams, opts: &Options) -> usize {
    params.generate(opts).map(|seq| seq.len()).unwrap_or(0)
}

fn bench_digit_window(c: &mut Criterion) {
    let opts = Options {
        window_policy: WindowPolicy::ZeroPad,
        ..Default::default()
    };
    let counts: Vec<u64> = vec![100, 1_000, 10_000];

    let mut group = c.benchmark_group("DigitWindow");
    for &n in &counts {
        let square: GeneratorParams = MiddleSquare::new(675_248u32, n).into();
        let product: GeneratorParams = MiddleProduct::new(5015u32, 5734u32, n).into();
        let constant: GeneratorParams = ConstantMultiplier::new(9803u32, 6965u32, n).into();
        group.bench_with_input(BenchmarkId::new("middle-square", n), &square, |b, p| {
            b.iter(|| run(p, &opts));
        });
        group.bench_with_input(BenchmarkId::new("middle-product", n), &product, |b, p| {
            b.iter(|| run(p, &opts));
        });
        group.bench_with_input(BenchmarkId::new("constant-multiplier", n), &constant, |b, p| {
            b.iter(|| run(p, &opts));
        });
    }
    group.finish();
}

fn bench_congruential(c: &mut Criterion) {
    let opts = Options::default();
    let exponents: Vec<i64> = vec![8, 12, 16];

    let mut group = c.benchmark_group("Congruential");
    for &g in &exponents {
        let linear: GeneratorParams = LinearCongruential::new(1, g, 3, 7).into();
        let multiplicative: GeneratorParams = MultiplicativeCongruential::new(17, g, 3).into();
        group.bench_with_input(BenchmarkId::new("linear", g), &linear, |b, p| {
            b.iter(|| run(p, &opts));
        });
        group.bench_with_input(BenchmarkId::new("multiplicative", g), &multiplicative, |b, p| {
            b.iter(|| run(p, &opts));
        });
    }

    let values: Vec<BigUint> = [65u32, 89, 98, 3, 69].into_iter().map(BigUint::from).collect();
    let additive: GeneratorParams = AdditiveCongruential::new(values, 1_000_003u32, 10_000).into();
    group.bench_function("additive/10000", |b| b.iter(|| run(&additive, &opts)));
    group.finish();
}

criterion_group!(benches, bench_digit_window, bench_congruential);
criterion_main!(benches);
