use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use sax_rs::{paa, znormalize, Sax};

fn bench_znormalize(c: &mut Criterion) {
    let mut group = c.benchmark_group("znormalize");
    for n in [1_000, 10_000, 100_000] {
        let ts: Vec<f64> = (0..n).map(|i| (i as f64 * 0.1).sin()).collect();
        group.bench_with_input(BenchmarkId::from_parameter(n), &n, |b, _| {
            b.iter(|| znormalize(black_box(&ts), 1e-6))
        });
    }
    group.finish();
}

fn bench_paa(c: &mut Criterion) {
    let mut group = c.benchmark_group("paa");
    let ts: Vec<f64> = (0..10_000).map(|i| (i as f64 * 0.1).sin()).collect();
    for w in [8, 64, 512] {
        group.bench_with_input(BenchmarkId::from_parameter(w), &w, |b, &w| {
            b.iter(|| paa(black_box(&ts), w))
        });
    }
    group.finish();
}

fn bench_to_letter_representation(c: &mut Criterion) {
    let mut group = c.benchmark_group("to_letter_representation");
    let sax = Sax::with_params(16, 8, 1e-6).unwrap();
    for n in [1_000, 10_000, 100_000] {
        let ts: Vec<f64> = (0..n).map(|i| (i as f64 * 0.1).sin()).collect();
        group.bench_with_input(BenchmarkId::from_parameter(n), &n, |b, _| {
            b.iter(|| sax.to_letter_representation(black_box(&ts)))
        });
    }
    group.finish();
}

fn bench_sliding_window(c: &mut Criterion) {
    let mut group = c.benchmark_group("sliding_window");
    group.sample_size(20);
    let sax = Sax::with_params(8, 6, 1e-6).unwrap();
    for n in [1_000, 10_000] {
        let ts: Vec<f64> = (0..n).map(|i| (i as f64 * 0.05).sin()).collect();
        group.bench_with_input(BenchmarkId::from_parameter(n), &n, |b, _| {
            b.iter(|| sax.sliding_window(black_box(&ts), Some(20), Some(0.9)))
        });
    }
    group.finish();
}

fn bench_batch_compare(c: &mut Criterion) {
    let mut group = c.benchmark_group("batch_compare");
    let mut sax = Sax::with_params(16, 10, 1e-6).unwrap();
    sax.set_scaling_factor(4.0);
    let ts: Vec<f64> = (0..256).map(|i| (i as f64 * 0.2).sin()).collect();
    let reference = sax.to_letter_representation(&ts).symbols;

    for count in [1_000, 10_000, 100_000] {
        let candidates: Vec<String> = (0..count)
            .map(|k| {
                let shifted: Vec<f64> = ts.iter().map(|&x| x + (k as f64 * 0.01).cos()).collect();
                let noisy: Vec<f64> = shifted
                    .iter()
                    .enumerate()
                    .map(|(i, &x)| x * (1.0 + ((i + k) as f64 * 0.37).sin() * 0.3))
                    .collect();
                sax.to_letter_representation(&noisy).symbols
            })
            .collect();
        group.bench_with_input(BenchmarkId::from_parameter(count), &count, |b, _| {
            b.iter(|| sax.batch_compare(black_box(&candidates), black_box(&reference)))
        });
    }
    group.finish();
}

criterion_group!(
    benches,
    bench_znormalize,
    bench_paa,
    bench_to_letter_representation,
    bench_sliding_window,
    bench_batch_compare,
);
criterion_main!(benches);
