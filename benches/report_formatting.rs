//! Benchmarks for the report/summary hot path
//!
//! The fold itself is trivially cheap next to encoding; these exist to keep
//! formatting and accumulation from regressing into per-file allocations.

use criterion::{criterion_group, criterion_main, Criterion};
use std::hint::black_box;
use std::path::Path;

use img_slim::fmt::format_bytes;
use img_slim::optimizer::{FileOutcome, FileReport, RunSummary};

fn bench_format_bytes(c: &mut Criterion) {
    c.bench_function("format_bytes_mixed_magnitudes", |b| {
        b.iter(|| {
            for bytes in [512u64, 1536, 524_288, 1_048_576, 5_000_000_000] {
                black_box(format_bytes(black_box(bytes)));
            }
        })
    });
}

fn bench_summary_fold(c: &mut Criterion) {
    let reports: Vec<FileReport> = (0..1000u64)
        .map(|i| {
            FileReport::new(
                Path::new("assets/img.png"),
                100_000 + i,
                60_000 + i,
                if i % 2 == 0 { Some(40_000 + i) } else { None },
                if i % 7 == 0 {
                    FileOutcome::KeptOriginal
                } else {
                    FileOutcome::Optimized
                },
            )
        })
        .collect();

    c.bench_function("summary_fold_1000_reports", |b| {
        b.iter(|| {
            let summary = reports
                .iter()
                .cloned()
                .fold(RunSummary::default(), |acc, report| acc.record(report));
            black_box(summary.saved_bytes())
        })
    });
}

criterion_group!(benches, bench_format_bytes, bench_summary_fold);
criterion_main!(benches);
