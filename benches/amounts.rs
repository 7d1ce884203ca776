//! Benchmarks for intake amount parsing.
//!
//! These benchmarks measure regex performance for the amount formats the
//! log-intake input accepts.
//! Note: Full benchmarks require the crate to expose library functions.
//! These are placeholder benchmarks for future development.

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use regex::Regex;

const AMOUNT_PATTERN: &str = r"^(\d+(?:\.\d+)?)\s*(ml|l)?$";

fn bench_regex_compile(c: &mut Criterion) {
    c.bench_function("regex_compile_amount_pattern", |b| {
        b.iter(|| Regex::new(black_box(AMOUNT_PATTERN)))
    });
}

fn bench_amount_capture(c: &mut Criterion) {
    let re = Regex::new(AMOUNT_PATTERN).unwrap();
    let inputs = ["250", "250ml", "0.5l", "1.5 l", "a glass", "12.5"];

    c.bench_function("regex_capture_amounts", |b| {
        b.iter(|| {
            inputs
                .iter()
                .filter_map(|input| re.captures(black_box(input)))
                .count()
        })
    });
}

fn bench_digits_fast_path(c: &mut Criterion) {
    let inputs = ["250", "750", "99999999999", "0.5l"];

    c.bench_function("digits_only_check", |b| {
        b.iter(|| {
            inputs
                .iter()
                .filter(|input| black_box(input).bytes().all(|b| b.is_ascii_digit()))
                .count()
        })
    });
}

criterion_group!(
    benches,
    bench_regex_compile,
    bench_amount_capture,
    bench_digits_fast_path
);
criterion_main!(benches);
