use std::hint::black_box;

use criterion::{Criterion, criterion_group, criterion_main};
use csv_fdw::infer::{InferenceOptions, TypeInference};

fn all_heuristics() -> InferenceOptions {
    InferenceOptions {
        timestamps: true,
        integers: true,
        numerics: true,
        big_integers: false,
    }
}

fn bench_classify(c: &mut Criterion) {
    let inference = TypeInference::new(all_heuristics());
    let cases = [
        ("iso_datetime", "2023-01-01 10:00:00"),
        ("compact_date", "20230101"),
        ("integer", "42"),
        ("numeric", "3.14159"),
        ("text_fallthrough", "sample text value"),
    ];

    let mut group = c.benchmark_group("classify");
    for (label, value) in cases {
        group.bench_function(label, |b| {
            b.iter(|| inference.classify(black_box(value)));
        });
    }
    group.finish();
}

fn bench_pattern_build(c: &mut Criterion) {
    c.bench_function("type_inference_new", |b| {
        b.iter(|| TypeInference::new(black_box(all_heuristics())));
    });
}

criterion_group!(benches, bench_classify, bench_pattern_build);
criterion_main!(benches);
