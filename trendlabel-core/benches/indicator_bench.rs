//! Criterion benchmarks for TrendLabel hot paths.
//!
//! Benchmarks:
//! 1. Indicator battery (full table build)
//! 2. Position key sampling (sparse and dense paths)
//! 3. Position building over a sampled key set

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use rand::rngs::StdRng;
use rand::SeedableRng;

use trendlabel_core::domain::{Bar, BarSeries};
use trendlabel_core::indicators::{Indicator, Sma};
use trendlabel_core::{IndicatorEngine, PositionBuilder, PositionKeySampler};

// ── Helpers ──────────────────────────────────────────────────────────

fn make_series(n: usize) -> BarSeries {
    let bars = (0..n)
        .map(|i| {
            let close = 100.0 + (i as f64 * 0.1).sin() * 10.0;
            Bar {
                timestamp: 1_577_923_200_000 + i as i64 * 86_400_000,
                open: close - 0.3,
                high: close + 1.5,
                low: close - 1.5,
                close,
                volume: 1_000_000.0 + (i % 500) as f64,
            }
        })
        .collect();
    BarSeries::new(bars).expect("synthetic bars are valid")
}

// ── Benchmarks ───────────────────────────────────────────────────────

fn bench_indicators(c: &mut Criterion) {
    let mut group = c.benchmark_group("indicator_table");

    for &bar_count in &[252, 1260, 2520] {
        let series = make_series(bar_count);
        let closes = series.closes();

        group.bench_with_input(BenchmarkId::new("sma_200", bar_count), &bar_count, |b, _| {
            let sma = Sma::new(200);
            b.iter(|| sma.compute(black_box(&closes)));
        });

        group.bench_with_input(
            BenchmarkId::new("full_battery", bar_count),
            &bar_count,
            |b, _| {
                b.iter(|| IndicatorEngine::new().compute(black_box(series.clone())));
            },
        );
    }

    group.finish();
}

fn bench_sampler(c: &mut Criterion) {
    let mut group = c.benchmark_group("position_keys");
    let sampler = PositionKeySampler::new(2520, 30).expect("valid sampler");
    let space = sampler.key_space_size();

    for &quantity in &[1_000, space / 2, space] {
        group.bench_with_input(BenchmarkId::new("sample", quantity), &quantity, |b, &q| {
            b.iter(|| {
                let mut rng = StdRng::seed_from_u64(42);
                sampler.sample(black_box(q), &mut rng)
            });
        });
    }

    group.finish();
}

fn bench_builder(c: &mut Criterion) {
    let table = IndicatorEngine::new().compute(make_series(2520));
    let sampler = PositionKeySampler::new(table.len(), 30).expect("valid sampler");
    let keys = sampler
        .sample(5_000, &mut StdRng::seed_from_u64(42))
        .expect("key space is large enough");

    c.bench_function("build_5000_positions", |b| {
        b.iter(|| PositionBuilder::new().build_all(black_box(&keys), &table));
    });
}

criterion_group!(benches, bench_indicators, bench_sampler, bench_builder);
criterion_main!(benches);
