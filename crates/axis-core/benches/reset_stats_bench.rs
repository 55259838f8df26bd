use axis_core::{ExtentAggregator, Range, SeriesHandle, SeriesModel};
use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};

fn gen_series(n: usize) -> Vec<SeriesHandle> {
    (0..n)
        .map(|i| {
            let lo = (i as f64 * 0.37).sin() * 50.0;
            SeriesModel::with_stats(format!("s{i}"), Range::new(lo, lo + 10.0 + i as f64))
        })
        .collect()
}

fn bench_reset_stats(c: &mut Criterion) {
    let mut group = c.benchmark_group("reset_stats");
    // dozens of series is the realistic regime; larger sizes chart the O(n) rescan
    for &n in &[16usize, 64usize, 256usize] {
        let series = gen_series(n);
        let mut agg = ExtentAggregator::new();
        for s in &series {
            agg.track(s, None);
        }
        group.bench_with_input(BenchmarkId::from_parameter(n), &n, |b, _| {
            b.iter(|| black_box(agg.reset_stats()));
        });
    }
    group.finish();
}

criterion_group!(benches, bench_reset_stats);
criterion_main!(benches);
