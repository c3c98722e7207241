//! Benchmarks for heading indexing.

#![allow(clippy::format_push_string)] // Benchmark setup code, performance not critical

use criterion::{BenchmarkId, Criterion, Throughput, criterion_group, criterion_main};
use indexer::Indexer;

/// Generate a rendered page with nested sections.
fn generate_page(sections: usize, subsections: usize) -> String {
    let mut html = String::with_capacity(sections * (subsections + 1) * 120);
    html.push_str("<p>Page introduction.</p>\n");

    for i in 0..sections {
        html.push_str(&format!("<h2>Section {i}</h2>\n"));
        html.push_str("<p>This paragraph has <strong>bold</strong> text.</p>\n");
        for j in 0..subsections {
            html.push_str(&format!("<h3>Section {i}.{j}</h3>\n"));
            html.push_str("<p>Details.</p>\n");
        }
    }
    html
}

fn bench_index_simple(c: &mut Criterion) {
    let indexer = Indexer::new();
    let page = "<h2>A</h2>\n<h3>A.1</h3>\n<h2>B</h2>\n";

    c.bench_function("index_simple_page", |b| {
        b.iter(|| indexer.index(page));
    });
}

fn bench_index_varying_sizes(c: &mut Criterion) {
    let indexer = Indexer::new();
    let mut group = c.benchmark_group("index_by_size");

    for (sections, subsections) in [(5, 2), (20, 3), (50, 5)] {
        let page = generate_page(sections, subsections);
        group.throughput(Throughput::Bytes(page.len() as u64));
        group.bench_with_input(
            BenchmarkId::new("page", format!("{sections}s_{subsections}sub")),
            &page,
            |b, page| b.iter(|| indexer.index(page)),
        );
    }

    group.finish();
}

criterion_group!(benches, bench_index_simple, bench_index_varying_sizes);
criterion_main!(benches);
