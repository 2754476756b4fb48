//! Benchmarks for the tag derivation hot path.
//!
//! Run with: cargo bench -p drape-core

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use drape_core::{ColorClassifier, ColorSample, DetectorResponse, LabelAnnotation, Rgb, Tagger};

fn sample_response() -> DetectorResponse {
    let labels = [
        ("T-Shirt", 0.95),
        ("Sleeve", 0.91),
        ("Person", 0.90),
        ("Beard", 0.88),
        ("Striped Jacket", 0.81),
        ("Outerwear", 0.78),
        ("Sky", 0.74),
        ("Smile", 0.72),
        ("Denim", 0.69),
        ("Pocket", 0.65),
    ]
    .into_iter()
    .map(|(text, score)| LabelAnnotation::new(text, score))
    .collect();

    let colors = vec![
        ColorSample::new(250.0, 250.0, 250.0, 0.41),
        ColorSample::new(30.0, 40.0, 200.0, 0.22),
        ColorSample::new(200.0, 190.0, 30.0, 0.12),
        ColorSample::new(12.0, 8.0, 9.0, 0.08),
    ];

    DetectorResponse::new(labels, colors)
}

fn benchmark_tag_response(c: &mut Criterion) {
    let tagger = Tagger::with_defaults();
    let response = sample_response();

    c.bench_function("tag_response", |b| {
        b.iter(|| {
            let _ = tagger.tag(black_box(&response));
        })
    });
}

fn benchmark_classify_color(c: &mut Criterion) {
    let rgb = Rgb::new(30.0, 40.0, 200.0);

    c.bench_function("classify_color", |b| {
        b.iter(|| {
            let _ = ColorClassifier::classify(black_box(rgb));
        })
    });
}

fn benchmark_parse_and_tag(c: &mut Criterion) {
    let tagger = Tagger::with_defaults();
    let json = serde_json::to_string(&sample_response()).unwrap();

    c.bench_function("parse_and_tag_json", |b| {
        b.iter(|| {
            let _ = tagger.tag_json(black_box(&json));
        })
    });
}

criterion_group!(
    benches,
    benchmark_tag_response,
    benchmark_classify_color,
    benchmark_parse_and_tag,
);
criterion_main!(benches);
