//! Circular dependency detection.

use petgraph::Direction;
use petgraph::algo;
use petgraph::graph::NodeIndex;
use std::collections::HashSet;
use tracing::{debug, info};

use crate::domain::{LineageGraph, LineagePath, PathDirection};
use crate::graph::GraphIndex;

/// One level of the explicit DFS stack.
struct Frame {
    node: NodeIndex,
    neighbors: Vec<(NodeIndex, usize)>,
    cursor: usize,
}

impl Frame {
    fn enter(index: &GraphIndex<'_>, node: NodeIndex) -> Self {
        Self {
            node,
            neighbors: index.neighbors(node, Direction::Outgoing),
            cursor: 0,
        }
    }
}

/// Find circular dependency chains.
///
/// Depth-first search over outgoing edges with an explicit stack. Every node
/// is expanded once; an edge to a node still on the stack closes a cycle made
/// of the stack from that node to the current one. Cycles are tagged
/// [`PathDirection::Circular`] and critical, and carry the closing edge last.
///
/// Only cycles closed by a back edge of this search are reported, so a graph
/// with overlapping cycles may yield fewer paths than it has elementary
/// cycles; every strongly connected component with a cycle yields at least one.
#[must_use]
pub fn find_cycles(graph: &LineageGraph) -> Vec<LineagePath> {
    let index = GraphIndex::new(graph);
    // Iterative fast path; also catches self-loops
    if algo::toposort(index.graph(), None).is_ok() {
        return Vec::new();
    }

    let node_count = graph.node_count();
    let mut visited = vec![false; node_count];
    let mut on_stack = vec![false; node_count];
    let mut seen = HashSet::new();
    let mut cycles = Vec::new();

    for start in index.indices() {
        if visited[start.index()] {
            continue;
        }

        // path[i + 1] is reached from path[i] over path_edges[i]
        let mut path: Vec<NodeIndex> = vec![start];
        let mut path_edges: Vec<usize> = Vec::new();
        let mut frames = vec![Frame::enter(&index, start)];
        visited[start.index()] = true;
        on_stack[start.index()] = true;

        while let Some(frame) = frames.last_mut() {
            let step = frame.neighbors.get(frame.cursor).copied();
            frame.cursor += 1;

            let Some((next, edge_pos)) = step else {
                if let Some(done) = frames.pop() {
                    on_stack[done.node.index()] = false;
                    path.pop();
                    path_edges.pop();
                }
                continue;
            };

            if on_stack[next.index()] {
                let Some(begin) = path.iter().position(|&n| n == next) else {
                    continue;
                };

                let nodes = path[begin..]
                    .iter()
                    .map(|&n| index.node(n).id.clone())
                    .collect();
                let edges = path_edges[begin..]
                    .iter()
                    .chain(std::iter::once(&edge_pos))
                    .map(|&pos| index.edge(pos).effective_id())
                    .collect();

                let cycle = LineagePath::new(nodes, edges, PathDirection::Circular, true);
                if seen.insert(cycle.id.clone()) {
                    debug!(cycle = %cycle.id, length = cycle.length, "Detected circular lineage");
                    cycles.push(cycle);
                }
            } else if !visited[next.index()] {
                visited[next.index()] = true;
                on_stack[next.index()] = true;
                path.push(next);
                path_edges.push(edge_pos);
                frames.push(Frame::enter(&index, next));
            }
        }
    }

    if !cycles.is_empty() {
        info!(count = cycles.len(), "Circular dependencies found");
    }

    cycles
}
