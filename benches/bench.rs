//! Criterion benchmarks for Virtuoso.
//!
//! Covers dictionary construction, single-word mutation generation and full
//! solver runs, sequential and parallel.

use criterion::{Criterion, Throughput, criterion_group, criterion_main};
use std::hint::black_box;
use virtuoso::mutation::{Dictionary, MutationEngine, SolverConfig, solve};

/// Generate a synthetic lexicon of short lowercase words.
fn generate_lexicon(count: usize) -> Vec<String> {
    let stems = [
        "cat", "cart", "at", "bat", "boat", "beat", "bet", "and", "band", "brand", "read",
        "bread", "pint", "print", "spin", "pin", "tin", "tint", "stint", "sting",
    ];

    let mut words = Vec::with_capacity(count);
    for i in 0..count {
        let stem = stems[i % stems.len()];
        if i < stems.len() {
            words.push(stem.to_string());
        } else {
            let suffix = (b'a' + (i / stems.len() % 26) as u8) as char;
            let repeat = 1 + i / (stems.len() * 26);
            words.push(format!("{stem}{}", suffix.to_string().repeat(repeat)));
        }
    }
    words
}

fn bench_dictionary(c: &mut Criterion) {
    let mut group = c.benchmark_group("dictionary");
    let lexicon = generate_lexicon(10_000);

    group.throughput(Throughput::Elements(lexicon.len() as u64));
    group.bench_function("build_10k", |b| {
        b.iter(|| Dictionary::build(black_box(&lexicon)))
    });

    group.finish();
}

fn bench_generate(c: &mut Criterion) {
    let mut group = c.benchmark_group("generate");
    let dictionary = Dictionary::build(generate_lexicon(10_000));
    let engine = MutationEngine::new(&dictionary);

    group.bench_function("short_word", |b| {
        b.iter(|| engine.generate(black_box("cat")))
    });

    group.bench_function("long_word", |b| {
        b.iter(|| engine.generate(black_box("internationalization")))
    });

    group.finish();
}

fn bench_solve(c: &mut Criterion) {
    let mut group = c.benchmark_group("solve");
    group.sample_size(20);

    let lexicon = generate_lexicon(10_000);
    let dictionary = Dictionary::build(&lexicon);
    let candidates = &lexicon[..1_000];

    group.throughput(Throughput::Elements(candidates.len() as u64));
    group.bench_function("sequential_1k", |b| {
        b.iter(|| solve(&dictionary, black_box(candidates), SolverConfig::default()))
    });

    group.bench_function("parallel_1k", |b| {
        let config = SolverConfig {
            parallel: true,
            ..Default::default()
        };
        b.iter(|| solve(&dictionary, black_box(candidates), config.clone()))
    });

    group.finish();
}

criterion_group!(benches, bench_dictionary, bench_generate, bench_solve);
criterion_main!(benches);
