//! Restricted SCC queries, with petgraph's Tarjan as a baseline.
#![allow(clippy::expect_used)]

use circuits_bench::{SizeTier, generate_graph, to_petgraph};
use circuits_core::RestrictedSccFinder;
use criterion::{BenchmarkId, Criterion, criterion_group, criterion_main};

fn bench_first_component(c: &mut Criterion) {
    let mut group = c.benchmark_group("scc_first_component");

    for (name, tier) in [
        ("S", SizeTier::Small),
        ("M", SizeTier::Medium),
        ("L", SizeTier::Large),
        ("XL", SizeTier::XLarge),
    ] {
        let generated = generate_graph(&tier.config(42)).expect("generated graph");
        let baseline = to_petgraph(&generated.graph);

        group.bench_function(BenchmarkId::new("restricted_find", name), |b| {
            b.iter(|| RestrictedSccFinder::new(&generated.graph).find(0));
        });

        group.bench_function(BenchmarkId::new("petgraph_tarjan_scc", name), |b| {
            b.iter(|| petgraph::algo::tarjan_scc(&baseline));
        });
    }

    group.finish();
}

/// Walks the cursor the way the cycle driver does, without searching paths.
fn bench_cursor_sweep(c: &mut Criterion) {
    let mut group = c.benchmark_group("scc_cursor_sweep");
    group.sample_size(10);

    for (name, tier) in [("S", SizeTier::Small), ("M", SizeTier::Medium)] {
        let generated = generate_graph(&tier.config(42)).expect("generated graph");

        group.bench_function(BenchmarkId::new("sweep", name), |b| {
            b.iter(|| {
                let mut finder = RestrictedSccFinder::new(&generated.graph);
                let mut cursor = 0;
                let mut components = 0usize;
                while let Some(result) = finder.find(cursor) {
                    components += 1;
                    cursor = result.anchor() + 1;
                }
                components
            });
        });
    }

    group.finish();
}

criterion_group!(benches, bench_first_component, bench_cursor_sweep);
criterion_main!(benches);
