//! Benchmarks for progress computation.
//!
//! These benchmarks measure the arithmetic behind the progress gauge and
//! the reaction tier banding.
//! Note: Full benchmarks require the crate to expose library functions.
//! These are placeholder benchmarks for future development.

use criterion::{black_box, criterion_group, criterion_main, Criterion};

fn bench_percent_computation(c: &mut Criterion) {
    c.bench_function("percent_for_goal_grid", |b| {
        b.iter(|| {
            let mut acc = 0.0f64;
            for goal in (500..=5000u32).step_by(250) {
                for total in (0..=6000u32).step_by(500) {
                    let percent = (f64::from(black_box(total)) / f64::from(black_box(goal))
                        * 100.0)
                        .min(100.0);
                    acc += percent;
                }
            }
            acc
        })
    });
}

fn bench_tier_banding(c: &mut Criterion) {
    c.bench_function("tier_banding_sweep", |b| {
        b.iter(|| {
            let mut celebrating = 0u32;
            for tenth in 0..=1000u32 {
                let percent = f64::from(tenth) / 10.0;
                let tier = if percent >= 100.0 {
                    3
                } else if percent >= 50.0 {
                    2
                } else if percent > 0.0 {
                    1
                } else {
                    0
                };
                if black_box(tier) == 3 {
                    celebrating += 1;
                }
            }
            celebrating
        })
    });
}

fn bench_summary_formatting(c: &mut Criterion) {
    c.bench_function("summary_line_format", |b| {
        b.iter(|| {
            format!(
                "Water intake: {} of {} ml ({:.0}%), {} ml to go.",
                black_box(1250),
                black_box(2500),
                black_box(50.0),
                black_box(1250)
            )
        })
    });
}

criterion_group!(
    benches,
    bench_percent_computation,
    bench_tier_banding,
    bench_summary_formatting
);
criterion_main!(benches);
