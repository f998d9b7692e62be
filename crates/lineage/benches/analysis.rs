//! Benchmarks for graph construction and analysis.
//!
//! These benchmarks measure:
//! - `build_graph` over layered lineage of increasing size
//! - `analyze` (metrics, cycles and critical paths) on the built graph
//! - `analyze_impact` from the root

// Benchmark code - performance of the benchmark setup is not critical
#![allow(missing_docs)]

use chrono::Utc;
use criterion::{BenchmarkId, Criterion, Throughput, black_box, criterion_group, criterion_main};
use lineage::{
    AssetCatalog, AssetRef, BuildOptions, ChangeType, EdgeKind, LineageEdge, analyze,
    analyze_impact, build_graph,
};

/// Generate `layers` levels of `width` assets, each feeding the next level's
/// two nearest assets.
///
/// ```text
/// l0_0  l0_1  l0_2
///   |  \  |  \  |
/// l1_0  l1_1  l1_2
/// ```
fn layered_lineage(layers: usize, width: usize) -> (AssetCatalog, Vec<LineageEdge>) {
    let id = |layer: usize, slot: usize| format!("l{layer}_{slot}");

    let assets: AssetCatalog = (0..layers)
        .flat_map(|layer| (0..width).map(move |slot| (layer, slot)))
        .map(|(layer, slot)| {
            AssetRef::new(id(layer, slot), format!("Asset {layer}.{slot}"), "table")
                .with_quality_score(((layer * 13 + slot * 7) % 100) as f64)
        })
        .collect();

    let mut edges = Vec::new();
    for layer in 1..layers {
        for slot in 0..width {
            edges.push(LineageEdge::new(
                id(layer - 1, slot),
                id(layer, slot),
                EdgeKind::Transformation,
            ));
            if slot + 1 < width {
                edges.push(LineageEdge::new(
                    id(layer - 1, slot),
                    id(layer, slot + 1),
                    EdgeKind::Join,
                ));
            }
        }
    }

    (assets, edges)
}

fn bench_build(c: &mut Criterion) {
    let mut group = c.benchmark_group("build_graph");

    for width in [4, 16, 64] {
        let (assets, edges) = layered_lineage(8, width);
        let options = BuildOptions::default();
        group.throughput(Throughput::Elements(edges.len() as u64));
        group.bench_with_input(BenchmarkId::from_parameter(width), &width, |b, _| {
            b.iter(|| {
                build_graph(
                    black_box("l0_0"),
                    &assets,
                    black_box(&edges),
                    &options,
                    Utc::now(),
                )
            });
        });
    }

    group.finish();
}

fn bench_analyze(c: &mut Criterion) {
    let mut group = c.benchmark_group("analyze");

    for width in [4, 16, 64] {
        let (assets, edges) = layered_lineage(8, width);
        let Ok(graph) = build_graph("l0_0", &assets, &edges, &BuildOptions::default(), Utc::now())
        else {
            continue;
        };
        let now = Utc::now();

        group.bench_with_input(BenchmarkId::new("analyze", width), &graph, |b, graph| {
            b.iter(|| analyze(black_box(graph), now));
        });
        group.bench_with_input(BenchmarkId::new("impact", width), &graph, |b, graph| {
            b.iter(|| analyze_impact("l0_0", black_box(graph), ChangeType::Schema));
        });
    }

    group.finish();
}

criterion_group!(benches, bench_build, bench_analyze);
criterion_main!(benches);
