use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use robust_core::Series;
use robust_equilibration::test_data::RandomWalk;
use robust_equilibration::EquilibrationDetector;
use robust_trend::{MannKendall, SlopeEstimator, TheilSen, TrendTest};

fn random_walk(num_points: usize) -> Series {
    RandomWalk::default()
        .with_num_points(num_points)
        .generate()
        .unwrap()
}

fn bench_window_statistics(c: &mut Criterion) {
    let mut group = c.benchmark_group("WindowStatistics");
    let series = random_walk(200);

    for &w in &[10, 20, 50, 100] {
        let window = &series.values()[..w];
        group.bench_with_input(BenchmarkId::new("mann_kendall", w), window, |b, window| {
            b.iter(|| MannKendall.test(black_box(window)))
        });
        group.bench_with_input(BenchmarkId::new("theil_sen", w), window, |b, window| {
            b.iter(|| TheilSen.estimate(black_box(window)))
        });
    }

    group.finish();
}

fn bench_detection(c: &mut Criterion) {
    let mut group = c.benchmark_group("Detection");
    let series = random_walk(1000);

    for &w in &[10, 20, 50] {
        let detector = EquilibrationDetector::with_window_size(w).unwrap();
        group.bench_with_input(BenchmarkId::new("sequential", w), &series, |b, series| {
            b.iter(|| detector.detect(black_box(series)))
        });

        #[cfg(feature = "parallel")]
        {
            let parallel = detector.clone().with_engine(robust_core::ParallelEngine::new());
            group.bench_with_input(BenchmarkId::new("parallel", w), &series, |b, series| {
                b.iter(|| parallel.detect(black_box(series)))
            });
        }
    }

    group.finish();
}

criterion_group!(benches, bench_window_statistics, bench_detection);
criterion_main!(benches);
