use criterion::{Criterion, criterion_group, criterion_main};
use mingas::series::{DepthRange, build_series};
use mingas::{DEFAULT_CYLINDERS, MingasParameters, gas::required_gas};

fn benchmark_gas_model(c: &mut Criterion) {
    let mut group = c.benchmark_group("gas_model");

    // Benchmark a single shallow evaluation
    group.bench_function("required_gas_10m", |b| b.iter(|| required_gas(10.0, 30.0)));

    // Benchmark the deep end of the default sweep
    group.bench_function("required_gas_60m", |b| b.iter(|| required_gas(60.0, 30.0)));

    // Benchmark a full depth sweep at the default step
    group.bench_function("required_gas_sweep", |b| {
        b.iter(|| {
            let mut total = 0.0;
            let mut depth = 60.0;
            while depth > 0.0 {
                total += required_gas(depth, 30.0);
                depth -= 5.0;
            }
            total
        })
    });

    group.finish();
}

fn benchmark_series_builder(c: &mut Criterion) {
    let mut group = c.benchmark_group("series_builder");
    let params = MingasParameters::default();

    // Benchmark the full default catalog
    group.bench_function("build_series_default", |b| {
        b.iter(|| build_series(params.depth_range(), params.amv, &DEFAULT_CYLINDERS))
    });

    // Benchmark a single cylinder over a fine-grained range
    group.bench_function("build_series_fine_step", |b| {
        b.iter(|| build_series(DepthRange::new(60.0, 0.0, 0.5), params.amv, &[12]))
    });

    group.finish();
}

criterion_group!(benches, benchmark_gas_model, benchmark_series_builder);
criterion_main!(benches);
