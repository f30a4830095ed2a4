//! Simulation benchmarks.
//!
//! One recompute must stay far below a frame budget so key presses never
//! queue behind the model.
//!
//! Run with: cargo bench

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use runoff_lab::model::{find_peak, generate_rainfall, integrate_runoff, simulate};
use runoff_lab::model::SimulationParameters;
use runoff_lab::tui::ChartData;

fn bench_rainfall(c: &mut Criterion) {
    c.bench_function("rainfall_generate", |b| {
        b.iter(|| generate_rainfall(black_box(15.0), 5.0, 2.0, 10.0));
    });
}

fn bench_runoff(c: &mut Criterion) {
    let mut group = c.benchmark_group("runoff_integrate");
    group.sample_size(100);

    let rain = generate_rainfall(15.0, 5.0, 2.0, 10.0);
    for n in [1.0, 1.5, 3.0] {
        group.bench_with_input(BenchmarkId::new("exponent", n), &n, |b, &n| {
            b.iter(|| integrate_runoff(black_box(&rain), 2.0, n));
        });
    }

    group.finish();
}

fn bench_peak(c: &mut Criterion) {
    let rain = generate_rainfall(15.0, 5.0, 2.0, 10.0);
    c.bench_function("find_peak", |b| b.iter(|| find_peak(black_box(&rain))));
}

fn bench_recompute(c: &mut Criterion) {
    let params = SimulationParameters::default();
    c.bench_function("simulate_and_chart", |b| {
        b.iter(|| ChartData::new(simulate(black_box(&params))));
    });
}

criterion_group!(benches, bench_rainfall, bench_runoff, bench_peak, bench_recompute);
criterion_main!(benches);
