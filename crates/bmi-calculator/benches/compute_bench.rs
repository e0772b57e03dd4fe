use bmi_calculator::{BmiEngine, classify};
use criterion::{Criterion, black_box, criterion_group, criterion_main};

fn bench_compute(c: &mut Criterion) {
    let engine = BmiEngine::new();

    c.bench_function("compute_numeric", |b| {
        b.iter(|| engine.compute(black_box(180.0), black_box(75.0)))
    });

    c.bench_function("compute_text", |b| {
        b.iter(|| engine.compute(black_box("180"), black_box("75")))
    });

    c.bench_function("classify", |b| b.iter(|| classify(black_box(27.3))));
}

criterion_group!(benches, bench_compute);
criterion_main!(benches);
