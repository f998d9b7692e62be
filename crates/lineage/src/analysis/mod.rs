//! Structural and quality analysis of built lineage graphs.
//!
//! - [`analyze`]: aggregate metrics, buckets and issues
//! - [`find_cycles`]: circular dependency chains
//! - [`find_critical_paths`]: long chains from root nodes
//!
//! All functions only read the graph. [`analyze`] runs cycle detection and
//! critical path search on the rayon pool while it computes metrics.

mod critical_path;
mod cycles;
mod metrics;
mod quality;

pub use critical_path::{find_critical_paths, min_critical_length};
pub use cycles::find_cycles;
pub use metrics::{
    DEFAULT_RELIABILITY, FRESHNESS_WINDOW_DAYS, complexity_level, complexity_score,
};
pub use quality::LOW_CONFIDENCE_THRESHOLD;

use chrono::{DateTime, Utc};
use tracing::debug;

use crate::domain::{AnalysisResult, LineageGraph};
use crate::graph::GraphIndex;

/// Analyze a built graph.
///
/// `now` anchors freshness scoring and stale-data detection.
#[must_use]
#[allow(clippy::cast_precision_loss)]
pub fn analyze(graph: &LineageGraph, now: DateTime<Utc>) -> AnalysisResult {
    let ((circular_dependencies, critical_paths), (metrics, orphaned_nodes, max_depth)) =
        rayon::join(
            || rayon::join(|| find_cycles(graph), || find_critical_paths(graph)),
            || {
                let index = GraphIndex::new(graph);
                let max_depth = graph.nodes.iter().map(|n| n.depth).max().unwrap_or(0);
                let orphaned = index
                    .indices()
                    .filter(|&idx| index.in_degree(idx) + index.out_degree(idx) == 0)
                    .map(|idx| index.node(idx).id.clone())
                    .collect::<Vec<_>>();
                let metrics = metrics::compute(graph, &index, max_depth, now);
                (metrics, orphaned, max_depth)
            },
        );

    let total_nodes = graph.node_count();
    let avg_depth = if total_nodes == 0 {
        0.0
    } else {
        graph.nodes.iter().map(|n| n.depth).sum::<usize>() as f64 / total_nodes as f64
    };

    let quality_issues = quality::detect(graph, now);

    debug!(
        nodes = total_nodes,
        edges = graph.edge_count(),
        cycles = circular_dependencies.len(),
        critical_paths = critical_paths.len(),
        orphaned = orphaned_nodes.len(),
        "Analyzed lineage graph"
    );

    AnalysisResult {
        total_nodes,
        total_edges: graph.edge_count(),
        max_depth,
        avg_depth,
        complexity: complexity_level(total_nodes, max_depth),
        critical_paths,
        orphaned_nodes,
        circular_dependencies,
        quality_issues,
        metrics,
    }
}
