//! LIKE translation and cache benchmarks.
#![allow(missing_docs)]

use std::hint::black_box;

use criterion::{BenchmarkId, Criterion, criterion_group, criterion_main};
use regexp_like::LikeCache;
use regexp_like::translate::{expression, segments, translate};

const PATTERNS: &[(&str, &str)] = &[
    ("literal", "testing($1.25)"),
    ("wildcards", "%test%ing_%"),
    ("set_and_range", "te[xs]ting($[^1-5].25)"),
    ("malformed", "abc[def]ghi[jk-"),
];

fn bench_expression(c: &mut Criterion) {
    let mut group = c.benchmark_group("expression");

    for (name, pattern) in PATTERNS {
        group.bench_with_input(BenchmarkId::from_parameter(name), pattern, |b, pattern| {
            b.iter(|| expression(black_box(pattern)));
        });
    }

    group.finish();
}

fn bench_segments(c: &mut Criterion) {
    let pattern = "%a[bc]d_e[^f-h]i%";

    c.bench_function("segments", |b| {
        b.iter(|| segments(black_box(pattern)));
    });
}

fn bench_translate(c: &mut Criterion) {
    let mut group = c.benchmark_group("translate");

    for (name, pattern) in PATTERNS {
        group.bench_with_input(BenchmarkId::from_parameter(name), pattern, |b, pattern| {
            b.iter(|| translate(black_box(pattern), false));
        });
    }

    group.finish();
}

fn bench_cache(c: &mut Criterion) {
    let mut group = c.benchmark_group("cache");

    // Hits on a warm cache
    let cache = LikeCache::bounded(1000);
    for i in 0..100 {
        let _ = cache.lookup(&format!("pattern{i}%"), false, None);
    }
    group.bench_function("hit", |b| {
        b.iter(|| cache.lookup(black_box("pattern50%"), false, None));
    });

    // Misses that keep a small cache sweeping
    let patterns: Vec<String> = (0..1000).map(|i| format!("miss{i}_%")).collect();
    let churn = LikeCache::bounded(64);
    let mut next = 0;
    group.bench_function("miss_with_sweep", |b| {
        b.iter(|| {
            next = (next + 1) % patterns.len();
            churn.lookup(black_box(&patterns[next]), false, None)
        });
    });

    group.finish();
}

criterion_group!(
    benches,
    bench_expression,
    bench_segments,
    bench_translate,
    bench_cache,
);
criterion_main!(benches);
