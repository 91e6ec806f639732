//! Segmenter throughput benchmarks.
//!
//! Measures raw scanning plus sink dispatch: tokens are consumed with
//! `black_box` and never collected.

use std::hint::black_box;

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use sift_core::{CategoryScanner, Segmenter, Status, Strategy, Token};

/// Generate roughly `n` words of mixed-case English-like text.
fn generate_latin(n: usize) -> String {
    (0..n)
        .map(|i| format!("Word{i}, lorem IPSUM dolor!"))
        .collect::<Vec<_>>()
        .join(" ")
}

/// Generate `n` three-byte characters with no separators.
fn generate_cjk(n: usize) -> String {
    "\u{6771}\u{4eac}\u{90fd}\u{5e02}".chars().cycle().take(n).collect()
}

fn bench_strategy(c: &mut Criterion, group_name: &str, strategy: Strategy, inputs: &[String]) {
    let mut group = c.benchmark_group(group_name);
    let segmenter = strategy.segmenter();

    for input in inputs {
        group.throughput(Throughput::Bytes(input.len() as u64));
        group.bench_with_input(BenchmarkId::from_parameter(input.len()), input, |b, text| {
            b.iter(|| {
                let mut sink = |token: Token<'_>| {
                    black_box(token);
                    Status::OK
                };
                black_box(segmenter.tokenize(text.as_bytes(), &mut sink))
            });
        });
    }

    group.finish();
}

fn bench_category(c: &mut Criterion) {
    let inputs: Vec<String> = [10, 100, 1000, 10_000].map(generate_latin).to_vec();
    bench_strategy(c, "segment/category", Strategy::Category, &inputs);
}

fn bench_codepoint(c: &mut Criterion) {
    let inputs: Vec<String> = [10, 100, 1000, 10_000].map(generate_cjk).to_vec();
    bench_strategy(c, "segment/codepoint", Strategy::Codepoint, &inputs);
}

/// Scanner alone, without case folding or sink calls.
fn bench_category_scanner(c: &mut Criterion) {
    let mut group = c.benchmark_group("segment/category_scanner");
    let text = generate_latin(10_000);
    group.throughput(Throughput::Bytes(text.len() as u64));
    group.bench_function("runs", |b| {
        b.iter(|| {
            for run in CategoryScanner::new(text.as_bytes()) {
                black_box(run);
            }
        });
    });
    group.finish();
}

criterion_group!(benches, bench_category, bench_codepoint, bench_category_scanner);
criterion_main!(benches);
