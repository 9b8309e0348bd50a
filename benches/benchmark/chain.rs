use crate::common::{configure_criterion, divide_4_by, safe_sqrt};
use criterion::{criterion_group, Criterion};
use status_rail::{bind, chain, compose, of, try_to_result};
use std::hint::black_box;

pub fn bench_chain_vs_question_mark(c: &mut Criterion) {
    let mut group = c.benchmark_group("chain/success");

    group.bench_function("pipe", |b| {
        b.iter(|| {
            let result = chain(of(black_box(1.0))) | divide_4_by | safe_sqrt | divide_4_by;
            black_box(result.into_inner())
        })
    });

    group.bench_function("nested_bind", |b| {
        b.iter(|| {
            let result = bind(bind(bind(of(black_box(1.0)), divide_4_by), safe_sqrt), divide_4_by);
            black_box(result)
        })
    });

    group.bench_function("baseline_question_mark", |b| {
        b.iter(|| {
            let run = |x: f64| -> status_rail::Result<f64> {
                divide_4_by(safe_sqrt(divide_4_by(x)?)?)
            };
            black_box(run(black_box(1.0)))
        })
    });

    group.finish();
}

pub fn bench_chain_short_circuit(c: &mut Criterion) {
    let mut group = c.benchmark_group("chain/failure");

    group.bench_function("fail_first_step", |b| {
        b.iter(|| {
            let result = chain(of(black_box(0.0))) | divide_4_by | safe_sqrt | divide_4_by;
            black_box(result.into_inner())
        })
    });

    group.bench_function("fail_display", |b| {
        b.iter(|| {
            let result = chain(of(black_box(-1.0))) | safe_sqrt;
            black_box(result.to_string())
        })
    });

    group.finish();
}

pub fn bench_compose(c: &mut Criterion) {
    let mut group = c.benchmark_group("chain/compose");
    let composed = compose!(divide_4_by, safe_sqrt, divide_4_by);

    group.bench_function("prebuilt", |b| b.iter(|| black_box(composed(black_box(1.0)))));

    group.bench_function("try_to_result_ok", |b| {
        b.iter(|| black_box(try_to_result(|| black_box(21) * 2)))
    });

    group.finish();
}

criterion_group! {
    name = chain_benches;
    config = configure_criterion();
    targets = bench_chain_vs_question_mark, bench_chain_short_circuit, bench_compose,
}
