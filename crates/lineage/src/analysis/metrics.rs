//! Numeric graph metrics.
//!
//! Every ratio is clamped to [0, 1] and every mean has a documented value for
//! an empty graph, so callers always get a well-formed result.

use chrono::{DateTime, Utc};

use crate::domain::{ComplexityLevel, GraphMetrics, LineageGraph, LineageNode};
use crate::graph::GraphIndex;

/// Days over which freshness decays from 1.0 to 0.0
pub const FRESHNESS_WINDOW_DAYS: f64 = 30.0;

/// Reliability reported when no node carries a quality score
pub const DEFAULT_RELIABILITY: f64 = 0.5;

const MILLIS_PER_DAY: f64 = 86_400_000.0;

/// Bucket a graph by size and depth. The first matching rule wins.
#[must_use]
pub fn complexity_level(total_nodes: usize, max_depth: usize) -> ComplexityLevel {
    if total_nodes > 100 || max_depth > 8 {
        ComplexityLevel::VeryHigh
    } else if total_nodes > 50 || max_depth > 6 {
        ComplexityLevel::High
    } else if total_nodes > 20 || max_depth > 4 {
        ComplexityLevel::Medium
    } else {
        ComplexityLevel::Low
    }
}

/// Age of a node's last modification in days, if it has a timestamp.
#[allow(clippy::cast_precision_loss)]
pub(crate) fn age_days(node: &LineageNode, now: DateTime<Utc>) -> Option<f64> {
    node.last_modified()
        .map(|at| (now - at).num_milliseconds() as f64 / MILLIS_PER_DAY)
}

/// Per-node freshness: linear decay over [`FRESHNESS_WINDOW_DAYS`], 0 without a timestamp.
pub(crate) fn node_freshness(node: &LineageNode, now: DateTime<Utc>) -> f64 {
    age_days(node, now).map_or(0.0, |days| {
        (1.0 - days / FRESHNESS_WINDOW_DAYS).clamp(0.0, 1.0)
    })
}

/// Normalized complexity score: mean of density, depth and size sub-scores.
#[allow(clippy::cast_precision_loss)]
#[must_use]
pub fn complexity_score(nodes: usize, edges: usize, max_depth: usize) -> f64 {
    let density = if nodes == 0 {
        0.0
    } else {
        edges as f64 / (nodes as f64 * nodes as f64)
    };
    let depth = max_depth as f64 / 10.0;
    let size = nodes as f64 / 100.0;

    (density.clamp(0.0, 1.0) + depth.clamp(0.0, 1.0) + size.clamp(0.0, 1.0)) / 3.0
}

/// Compute [`GraphMetrics`] for a graph.
#[allow(clippy::cast_precision_loss)]
pub(crate) fn compute(
    graph: &LineageGraph,
    index: &GraphIndex<'_>,
    max_depth: usize,
    now: DateTime<Utc>,
) -> GraphMetrics {
    let nodes = graph.node_count();
    if nodes == 0 {
        return GraphMetrics {
            fan_in: 0.0,
            fan_out: 0.0,
            complexity: 0.0,
            coverage: 0.0,
            freshness: 0.0,
            reliability: DEFAULT_RELIABILITY,
        };
    }

    let count = nodes as f64;
    let mut total_in = 0usize;
    let mut total_out = 0usize;
    let mut connected = 0usize;
    for idx in index.indices() {
        let (fan_in, fan_out) = (index.in_degree(idx), index.out_degree(idx));
        total_in += fan_in;
        total_out += fan_out;
        if fan_in + fan_out > 0 {
            connected += 1;
        }
    }

    let freshness = graph
        .nodes
        .iter()
        .map(|n| node_freshness(n, now))
        .sum::<f64>()
        / count;

    let scores: Vec<f64> = graph
        .nodes
        .iter()
        .filter_map(LineageNode::quality_score)
        .filter(|score| score.is_finite())
        .map(|score| (score / 100.0).clamp(0.0, 1.0))
        .collect();
    let reliability = if scores.is_empty() {
        DEFAULT_RELIABILITY
    } else {
        scores.iter().sum::<f64>() / scores.len() as f64
    };

    GraphMetrics {
        fan_in: total_in as f64 / count,
        fan_out: total_out as f64 / count,
        complexity: complexity_score(nodes, graph.edge_count(), max_depth),
        coverage: connected as f64 / count,
        freshness,
        reliability,
    }
}
