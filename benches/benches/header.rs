//! Benchmark volume header rendering time.

use std::io;

use criterion::{criterion_group, criterion_main, Criterion};

use benches::context;
use volume_header::{HeaderContext, Renderer};

criterion_main! { benches }
criterion_group! { benches, bench_init, bench_render, bench_render_json }

/// Benchmarks the time taken to create a new instance of the renderer.
fn bench_init(c: &mut Criterion) {
    c.bench_function("init", |b| b.iter(Renderer::new));
}

/// Benchmarks the time taken to render a header.
fn bench_render(c: &mut Criterion) {
    let mut g = c.benchmark_group("render");
    let renderer = Renderer::new();

    for (name, page) in [("landing", false), ("page", true)] {
        let ctx = context::random(3, page);
        g.bench_function(name, |b| b.iter(|| renderer.render(&ctx).unwrap()));
    }

    let ctx = context::random(3, false);
    g.bench_function("writer", |b| {
        b.iter(|| renderer.render_to_writer(io::sink(), &ctx).unwrap())
    });
}

/// Benchmarks deserializing the context and then rendering it.
fn bench_render_json(c: &mut Criterion) {
    let renderer = Renderer::new();
    let json = context::random_json(3, true);
    c.bench_function("render_json", |b| {
        b.iter(|| {
            let ctx: HeaderContext = serde_json::from_str(&json).unwrap();
            renderer.render(&ctx).unwrap()
        })
    });
}
