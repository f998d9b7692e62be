//! Critical path search.

use petgraph::Direction;
use petgraph::graph::NodeIndex;
use std::cmp::Reverse;

use crate::domain::{LineageGraph, LineagePath, PathDirection};
use crate::graph::GraphIndex;

/// Shortest chain (in nodes) reported as critical for a graph of `node_count` nodes.
///
/// `max(3, floor(0.1 × node_count))`
#[must_use]
pub fn min_critical_length(node_count: usize) -> usize {
    (node_count / 10).max(3)
}

/// Find the longest downstream chain from each root node.
///
/// Only edges from a node to a strictly deeper node are followed, so the walk
/// stays inside the depth structure the builder produced and cannot loop.
/// Chains shorter than [`min_critical_length`] are discarded. When two chains
/// tie, the one starting with the earlier edge wins.
///
/// Depths come from the first visit during the build. A graph built with
/// [`Directionality::Both`](crate::Directionality::Both) runs the upstream
/// pass first, so on cyclic lineage the nodes a downstream chain would use
/// may already sit at a shallower depth and no critical path is reported.
#[must_use]
pub fn find_critical_paths(graph: &LineageGraph) -> Vec<LineagePath> {
    let index = GraphIndex::new(graph);
    let threshold = min_critical_length(graph.node_count());

    // Deepest first, so every successor is final before its predecessors
    let mut order: Vec<NodeIndex> = index.indices().collect();
    order.sort_by_key(|&n| Reverse(index.node(n).depth));

    // (chain length in nodes, next hop)
    let mut best: Vec<(usize, Option<(NodeIndex, usize)>)> =
        vec![(1, None); graph.node_count()];
    for &node in &order {
        let depth = index.node(node).depth;
        for (next, edge_pos) in index.neighbors(node, Direction::Outgoing) {
            if index.node(next).depth <= depth {
                continue;
            }
            let candidate = best[next.index()].0 + 1;
            if candidate > best[node.index()].0 {
                best[node.index()] = (candidate, Some((next, edge_pos)));
            }
        }
    }

    let mut paths = Vec::new();
    for root in index.indices().filter(|&n| index.node(n).is_root) {
        if best[root.index()].0 < threshold {
            continue;
        }

        let mut nodes = vec![index.node(root).id.clone()];
        let mut edges = Vec::new();
        let mut cursor = best[root.index()].1;
        while let Some((next, edge_pos)) = cursor {
            nodes.push(index.node(next).id.clone());
            edges.push(index.edge(edge_pos).effective_id());
            cursor = best[next.index()].1;
        }

        paths.push(LineagePath::new(nodes, edges, PathDirection::Downstream, true));
    }

    paths
}
