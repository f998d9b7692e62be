//! Petgraph arena over a built lineage graph.
//!
//! Node weights are positions in [`LineageGraph::nodes`] and edge weights are
//! positions in [`LineageGraph::edges`], so analyses can walk the arena and
//! map back to the owned records without cloning them.
//!
//! Petgraph iterates a node's edges newest-first. Every neighbor query here
//! re-sorts by edge position so traversals follow the graph's edge order.

use petgraph::Direction;
use petgraph::graph::{DiGraph, NodeIndex};
use petgraph::visit::EdgeRef;
use std::collections::HashMap;

use crate::domain::{LineageEdge, LineageGraph, LineageNode};

/// Index over a [`LineageGraph`] for traversal.
pub(crate) struct GraphIndex<'g> {
    lineage: &'g LineageGraph,
    graph: DiGraph<usize, usize>,
    node_map: HashMap<&'g str, NodeIndex>,
}

impl<'g> GraphIndex<'g> {
    /// Build the arena. Edges whose endpoints are not nodes are ignored.
    pub(crate) fn new(lineage: &'g LineageGraph) -> Self {
        let mut graph = DiGraph::with_capacity(lineage.nodes.len(), lineage.edges.len());
        let mut node_map = HashMap::with_capacity(lineage.nodes.len());

        for (pos, node) in lineage.nodes.iter().enumerate() {
            let idx = graph.add_node(pos);
            node_map.insert(node.id.as_str(), idx);
        }

        for (pos, edge) in lineage.edges.iter().enumerate() {
            let (Some(&from), Some(&to)) = (
                node_map.get(edge.source.as_str()),
                node_map.get(edge.target.as_str()),
            ) else {
                continue;
            };
            graph.add_edge(from, to, pos);
        }

        Self {
            lineage,
            graph,
            node_map,
        }
    }

    /// The underlying petgraph graph
    pub(crate) fn graph(&self) -> &DiGraph<usize, usize> {
        &self.graph
    }

    /// Arena index for an asset ID
    pub(crate) fn index_of(&self, id: &str) -> Option<NodeIndex> {
        self.node_map.get(id).copied()
    }

    /// All arena indices, in node-list order
    pub(crate) fn indices(&self) -> impl Iterator<Item = NodeIndex> + '_ {
        self.graph.node_indices()
    }

    /// The lineage node at an arena index
    pub(crate) fn node(&self, idx: NodeIndex) -> &'g LineageNode {
        &self.lineage.nodes[self.graph[idx]]
    }

    /// The lineage edge at an edge position
    pub(crate) fn edge(&self, pos: usize) -> &'g LineageEdge {
        &self.lineage.edges[pos]
    }

    /// Neighbors in one direction with the connecting edge position, in edge order.
    pub(crate) fn neighbors(
        &self,
        idx: NodeIndex,
        direction: Direction,
    ) -> Vec<(NodeIndex, usize)> {
        let mut found: Vec<(NodeIndex, usize)> = self
            .graph
            .edges_directed(idx, direction)
            .map(|e| {
                let other = match direction {
                    Direction::Outgoing => e.target(),
                    Direction::Incoming => e.source(),
                };
                (other, *e.weight())
            })
            .collect();
        found.sort_by_key(|&(_, pos)| pos);
        found
    }

    /// Neighbors over edges in either direction, in edge order, without repeats.
    pub(crate) fn undirected_neighbors(&self, idx: NodeIndex) -> Vec<NodeIndex> {
        let mut found = self.neighbors(idx, Direction::Outgoing);
        found.extend(self.neighbors(idx, Direction::Incoming));
        found.sort_by_key(|&(_, pos)| pos);

        let mut unique = Vec::with_capacity(found.len());
        for (other, _) in found {
            if other != idx && !unique.contains(&other) {
                unique.push(other);
            }
        }
        unique
    }

    /// Number of edges into a node
    pub(crate) fn in_degree(&self, idx: NodeIndex) -> usize {
        self.graph.edges_directed(idx, Direction::Incoming).count()
    }

    /// Number of edges out of a node
    pub(crate) fn out_degree(&self, idx: NodeIndex) -> usize {
        self.graph.edges_directed(idx, Direction::Outgoing).count()
    }
}
