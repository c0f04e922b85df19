use criterion::{black_box, criterion_group, criterion_main, Criterion};
use ld_core::config::DigestConfig;
use ld_core::types::{parse_timestamp, Severity};

fn bench_parse_timestamp(c: &mut Criterion) {
    let stamps: Vec<String> = (0..1000)
        .map(|i| format!("2025-01-01 {:02}:{:02}:{:02}.{:06}", i % 24, i % 60, (i * 7) % 60, i * 31))
        .collect();
    c.bench_function("parse_timestamp_1000", |b| {
        b.iter(|| {
            for s in &stamps {
                black_box(parse_timestamp(black_box(s)));
            }
        })
    });
}

fn bench_severity_from_str(c: &mut Criterion) {
    let words = ["DEBUG", "INFO", "WARNING", "ERROR", "CRITICAL", "FATAL", "NOTICE"];
    c.bench_function("severity_from_str", |b| {
        b.iter(|| {
            for w in &words {
                black_box(w.parse::<Severity>().ok());
            }
        })
    });
}

fn bench_config_parse(c: &mut Criterion) {
    let json = serde_json::to_string(&DigestConfig::default()).unwrap();
    c.bench_function("config_from_json", |b| {
        b.iter(|| black_box(DigestConfig::from_json_str(black_box(&json)).unwrap()))
    });
}

criterion_group!(benches, bench_parse_timestamp, bench_severity_from_str, bench_config_parse);
criterion_main!(benches);
