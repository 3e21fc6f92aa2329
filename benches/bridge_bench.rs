//! Benchmark for the failure-bridging combinators.
//!
//! Measures the overhead each bridge form adds on the success path and the
//! cost of the failure transitions.

use criterion::{Criterion, criterion_group, criterion_main};
use fnwrap::bridge::{ThrowingFn1, ThrowingFn2};
use std::hint::black_box;

#[derive(Debug)]
struct Failure;

impl std::fmt::Display for Failure {
    fn fmt(&self, formatter: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        formatter.write_str("failure")
    }
}

impl std::error::Error for Failure {}

fn checked(value: i64) -> Result<i64, Failure> {
    if value < 0 { Err(Failure) } else { Ok(value * 3) }
}

// =============================================================================
// Success Path Overhead
// =============================================================================

fn benchmark_success_path(criterion: &mut Criterion) {
    let mut group = criterion.benchmark_group("bridge_success_path");

    group.bench_function("direct_baseline", |bencher| {
        bencher.iter(|| black_box(checked(black_box(21))));
    });

    let erased = checked.transparent();
    group.bench_function("transparent", |bencher| {
        bencher.iter(|| black_box(erased(black_box(21)).is_ok()));
    });

    let nested = checked.nest();
    group.bench_function("nest", |bencher| {
        bencher.iter(|| black_box(nested(black_box(21)).is_ok()));
    });

    let lenient = checked.or_return(0);
    group.bench_function("or_return", |bencher| {
        bencher.iter(|| black_box(lenient(black_box(21))));
    });

    let recovered = checked.recover(|_failure| |value: i64| Ok::<i64, Failure>(value));
    group.bench_function("recover", |bencher| {
        bencher.iter(|| black_box(recovered(black_box(21)).is_ok()));
    });

    group.finish();
}

// =============================================================================
// Failure Transitions
// =============================================================================

fn benchmark_failure_path(criterion: &mut Criterion) {
    let mut group = criterion.benchmark_group("bridge_failure_path");

    let erased = checked.transparent();
    group.bench_function("transparent_erase", |bencher| {
        bencher.iter(|| black_box(erased(black_box(-1)).is_err()));
    });

    let nested = checked.nest();
    group.bench_function("nest_wrap", |bencher| {
        bencher.iter(|| black_box(nested(black_box(-1)).is_err()));
    });

    let lenient = checked.or_return(0);
    group.bench_function("or_return_substitute", |bencher| {
        bencher.iter(|| black_box(lenient(black_box(-1))));
    });

    let recovered = checked.recover(|_failure| |value: i64| Ok::<i64, Failure>(-value));
    group.bench_function("recover_fallback", |bencher| {
        bencher.iter(|| black_box(recovered(black_box(-1)).is_ok()));
    });

    group.finish();
}

// =============================================================================
// Arity 2
// =============================================================================

fn benchmark_binary_shapes(criterion: &mut Criterion) {
    let mut group = criterion.benchmark_group("bridge_binary_shapes");

    let checked_add =
        |first: i64, second: i64| first.checked_add(second).ok_or(Failure);

    let lenient = checked_add.or_return(0);
    group.bench_function("or_return_success", |bencher| {
        bencher.iter(|| black_box(lenient(black_box(20), black_box(22))));
    });

    group.finish();
}

criterion_group!(
    benches,
    benchmark_success_path,
    benchmark_failure_path,
    benchmark_binary_shapes
);

criterion_main!(benches);
