use criterion::{Criterion, criterion_group, criterion_main};
use linechart_rs::core::{
    ChartRecord, LinearScale, Sample, build_geometry, fit_scales, normalize,
};
use std::hint::black_box;

fn bench_linear_scale_position(c: &mut Criterion) {
    let scale = LinearScale::new((0.0, 10_000.0), (0.0, 1020.0)).expect("valid scale");

    c.bench_function("linear_scale_position", |b| {
        b.iter(|| black_box(scale.position(black_box(4_321.123))))
    });
}

fn bench_nice_and_ticks(c: &mut Criterion) {
    let scale = LinearScale::new((0.137, 9_873.4), (420.0, 0.0)).expect("valid scale");

    c.bench_function("nice_and_ticks_10", |b| {
        b.iter(|| {
            let niced = black_box(scale).nice(10);
            black_box(niced.ticks(10))
        })
    });
}

fn bench_single_series_pipeline_10k(c: &mut Criterion) {
    let samples: Vec<Sample> = (0..10_000)
        .map(|i| {
            let x = f64::from(i);
            let value = if i % 97 == 0 {
                None
            } else {
                Some((x * 0.01).sin() * 100.0)
            };
            Sample::single(x, value)
        })
        .collect();
    let record = ChartRecord::from_samples("bench", samples).expect("valid record");

    c.bench_function("single_series_pipeline_10k", |b| {
        b.iter(|| {
            let normalized = normalize(black_box(&record));
            let scales = fit_scales(&normalized, 1020.0, 420.0, 10).expect("fit");
            black_box(build_geometry(&normalized, &scales))
        })
    });
}

fn bench_multi_series_pipeline_3x5k(c: &mut Criterion) {
    let samples: Vec<Sample> = (0..5_000)
        .map(|i| {
            let x = f64::from(i);
            Sample::multi(
                x,
                [
                    Some((x * 0.01).sin()),
                    Some((x * 0.02).cos()),
                    if i % 13 == 0 { None } else { Some(x * 0.001) },
                ],
            )
        })
        .collect();
    let record = ChartRecord::from_samples("bench", samples).expect("valid record");

    c.bench_function("multi_series_pipeline_3x5k", |b| {
        b.iter(|| {
            let normalized = normalize(black_box(&record));
            let scales = fit_scales(&normalized, 1020.0, 370.0, 10).expect("fit");
            black_box(build_geometry(&normalized, &scales))
        })
    });
}

criterion_group!(
    benches,
    bench_linear_scale_position,
    bench_nice_and_ticks,
    bench_single_series_pipeline_10k,
    bench_multi_series_pipeline_3x5k
);
criterion_main!(benches);
