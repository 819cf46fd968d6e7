// ============================================================================
// Temporal Values Benchmarks
// ============================================================================
//
// Benchmark Categories:
// 1. Canonical Codec - format/parse round trips for instants and spans
// 2. Calendar Alignment - sub-day vs. calendar-field granularities
// 3. Decimal Codec - chunking and reassembly at various magnitudes
// ============================================================================

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use num_bigint::BigInt;
use std::str::FromStr;
use temporal_values::decimal::DecimalValue;
use temporal_values::prelude::*;

fn benchmark_canonical_codec(c: &mut Criterion) {
    let mut group = c.benchmark_group("canonical_codec");

    let instant = Instant::new(1_654_127_993, 983_651_350);
    group.bench_function("format_instant", |b| {
        b.iter(|| black_box(format_instant(Some(black_box(&instant)))))
    });

    let encoded = format_instant(Some(&instant));
    group.bench_function("parse_instant", |b| {
        b.iter(|| black_box(parse_instant(black_box(&encoded))))
    });

    let span = Span::new(-315_575_999_999, -999_999_999);
    let span_encoded = format_span(Some(&span));
    group.bench_function("parse_span", |b| {
        b.iter(|| black_box(parse_span(black_box(&span_encoded))))
    });

    group.finish();
}

fn benchmark_alignment(c: &mut Criterion) {
    let mut group = c.benchmark_group("calendar_alignment");
    let instant = Instant::new(1_654_097_445, 500_000_000);

    for granularity in Granularity::ALL {
        group.bench_with_input(
            BenchmarkId::new("align_down", format!("{:?}", granularity)),
            &granularity,
            |b, &granularity| {
                b.iter(|| black_box(align_down(black_box(instant), granularity)))
            },
        );
    }

    group.finish();
}

fn benchmark_decimal_codec(c: &mut Criterion) {
    let mut group = c.benchmark_group("decimal_codec");

    for digits in [18, 54, 180] {
        let coefficient = BigInt::from_str(&"9".repeat(digits)).unwrap();
        group.bench_with_input(
            BenchmarkId::new("decode", digits),
            &coefficient,
            |b, coefficient| b.iter(|| black_box(DecimalValue::decode(black_box(coefficient), -9))),
        );

        let value = DecimalValue::decode(&coefficient, -9);
        group.bench_with_input(BenchmarkId::new("encode", digits), &value, |b, value| {
            b.iter(|| black_box(value.encode()))
        });
    }

    group.finish();
}

criterion_group!(
    benches,
    benchmark_canonical_codec,
    benchmark_alignment,
    benchmark_decimal_codec
);
criterion_main!(benches);
