//! Benchmarks for the extraction pipeline.
//!
//! Run with: cargo bench

use criterion::{Criterion, criterion_group, criterion_main};

use roadsigns::dom::{build_tree, tokenize};
use roadsigns::{Config, extract_entries, parse_html};

const REGISTER_HTML: &str = include_str!("../tests/fixtures/register.html");

fn bench_tokenize(c: &mut Criterion) {
    c.bench_function("tokenize", |b| {
        b.iter(|| tokenize(REGISTER_HTML));
    });
}

fn bench_build_tree(c: &mut Criterion) {
    let events = tokenize(REGISTER_HTML);
    c.bench_function("build_tree", |b| {
        b.iter(|| build_tree(events.clone()).unwrap());
    });
}

fn bench_extract(c: &mut Criterion) {
    let doc = parse_html(REGISTER_HTML).unwrap();
    let config = Config::default();
    c.bench_function("extract_entries", |b| {
        b.iter(|| extract_entries(&doc, &config).unwrap());
    });
}

criterion_group!(benches, bench_tokenize, bench_build_tree, bench_extract);
criterion_main!(benches);
