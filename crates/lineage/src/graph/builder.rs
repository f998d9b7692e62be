//! Graph construction by crawling lineage edges from a root asset.
//!
//! # Traversal
//!
//! The crawl is a depth-first worklist. Each node is visited at most once per
//! direction and keeps the depth at which it was *first* reached. Because the
//! walk is depth-first, that depth can be larger than the node's shortest
//! distance from the root when several paths lead to it.
//!
//! For [`Directionality::Both`] the root is crawled upstream first, then
//! downstream, with separate visited sets. A node reachable both ways keeps
//! the depth from the upstream pass.
//!
//! # Partial data
//!
//! Edges may reference assets the caller has not loaded. Such neighbors are
//! skipped (logged at `debug`). Recorded edges are de-duplicated by
//! [`LineageEdge::effective_id`] and dropped when either endpoint did not
//! become a node, so the result never contains dangling edges.

use chrono::{DateTime, Utc};
use petgraph::Direction;
use std::collections::{HashMap, HashSet};
use tracing::{debug, info};

use super::layout::assign_positions;
use crate::catalog::AssetProvider;
use crate::domain::{AssetId, GraphMetadata, LineageEdge, LineageGraph, LineageNode};
use crate::error::{Error, Result};
use crate::options::{BuildOptions, Directionality};

/// Build a lineage graph rooted at `root_id`.
///
/// Nodes are positioned with [`assign_positions`] before the graph is
/// returned.
///
/// # Errors
///
/// - [`Error::InvalidOptions`] if `options` fail validation
/// - [`Error::AssetNotFound`] if `root_id` is not in `assets`
pub fn build_graph<P>(
    root_id: &str,
    assets: &P,
    edges: &[LineageEdge],
    options: &BuildOptions,
    now: DateTime<Utc>,
) -> Result<LineageGraph>
where
    P: AssetProvider + ?Sized,
{
    options.validate()?;

    let root = assets
        .asset(root_id)
        .ok_or_else(|| Error::AssetNotFound(AssetId::from(root_id)))?;

    let adjacency = Adjacency::new(edges);
    let mut crawl = Crawl::new(assets, options, &adjacency);

    match options.directionality {
        Directionality::Upstream => crawl.run(root.id.as_str(), Direction::Incoming),
        Directionality::Downstream => crawl.run(root.id.as_str(), Direction::Outgoing),
        Directionality::Both => {
            crawl.run(root.id.as_str(), Direction::Incoming);
            crawl.run(root.id.as_str(), Direction::Outgoing);
        }
    }

    let (nodes, edges) = crawl.finish();
    let nodes = assign_positions(&nodes);
    let max_depth = nodes.iter().map(|n| n.depth).max().unwrap_or(0);

    info!(
        root = %root.id,
        nodes = nodes.len(),
        edges = edges.len(),
        max_depth,
        "Built lineage graph"
    );

    Ok(LineageGraph {
        root_id: root.id.clone(),
        metadata: GraphMetadata {
            built_at: now,
            options: options.clone(),
            max_depth,
            node_count: nodes.len(),
            edge_count: edges.len(),
        },
        nodes,
        edges,
    })
}

/// Edges indexed by endpoint, in input order.
struct Adjacency<'a> {
    outgoing: HashMap<&'a str, Vec<&'a LineageEdge>>,
    incoming: HashMap<&'a str, Vec<&'a LineageEdge>>,
}

impl<'a> Adjacency<'a> {
    fn new(edges: &'a [LineageEdge]) -> Self {
        let mut outgoing: HashMap<&str, Vec<&LineageEdge>> = HashMap::new();
        let mut incoming: HashMap<&str, Vec<&LineageEdge>> = HashMap::new();
        for edge in edges {
            outgoing.entry(edge.source.as_str()).or_default().push(edge);
            incoming.entry(edge.target.as_str()).or_default().push(edge);
        }
        Self { outgoing, incoming }
    }

    fn edges(&self, id: &str, direction: Direction) -> &[&'a LineageEdge] {
        let map = match direction {
            Direction::Outgoing => &self.outgoing,
            Direction::Incoming => &self.incoming,
        };
        map.get(id).map(Vec::as_slice).unwrap_or(&[])
    }
}

/// Crawl state shared across directions.
struct Crawl<'a, P: ?Sized> {
    assets: &'a P,
    options: &'a BuildOptions,
    adjacency: &'a Adjacency<'a>,
    nodes: Vec<LineageNode>,
    node_ids: HashSet<AssetId>,
    recorded: Vec<&'a LineageEdge>,
}

impl<'a, P> Crawl<'a, P>
where
    P: AssetProvider + ?Sized,
{
    fn new(assets: &'a P, options: &'a BuildOptions, adjacency: &'a Adjacency<'a>) -> Self {
        Self {
            assets,
            options,
            adjacency,
            nodes: Vec::new(),
            node_ids: HashSet::new(),
            recorded: Vec::new(),
        }
    }

    /// Crawl from `root_id` following edges in `direction`.
    fn run(&mut self, root_id: &'a str, direction: Direction) {
        let assets = self.assets;
        let adjacency = self.adjacency;
        let mut visited: HashSet<&str> = HashSet::new();
        let mut stack: Vec<(&str, usize)> = vec![(root_id, 0)];

        while let Some((id, depth)) = stack.pop() {
            if depth > self.options.max_depth || !visited.insert(id) {
                continue;
            }

            let Some(asset) = assets.asset(id) else {
                debug!(asset = id, "Skipping lineage reference to unloaded asset");
                continue;
            };

            if self.node_ids.insert(asset.id.clone()) {
                self.nodes
                    .push(LineageNode::from_asset(asset, depth, depth == 0));
            }

            let mut children = Vec::new();
            for &edge in adjacency.edges(id, direction) {
                let neighbor_id = match direction {
                    Direction::Outgoing => edge.target.as_str(),
                    Direction::Incoming => edge.source.as_str(),
                };

                let Some(neighbor) = assets.asset(neighbor_id) else {
                    debug!(
                        asset = neighbor_id,
                        from = id,
                        "Skipping lineage reference to unloaded asset"
                    );
                    continue;
                };

                if !self.options.allows_type(&neighbor.asset_type) {
                    continue;
                }

                self.recorded.push(edge);
                if self.options.include_indirect || depth == 0 {
                    children.push((neighbor_id, depth + 1));
                }
            }

            // Reverse so the first discovered edge is explored first
            stack.extend(children.into_iter().rev());
        }
    }

    /// De-duplicate recorded edges and drop any whose endpoints are not nodes.
    fn finish(self) -> (Vec<LineageNode>, Vec<LineageEdge>) {
        let mut seen = HashSet::new();
        let mut dropped = 0usize;
        let mut edges = Vec::new();

        for edge in self.recorded {
            if !seen.insert(edge.effective_id()) {
                continue;
            }
            if self.node_ids.contains(&edge.source) && self.node_ids.contains(&edge.target) {
                edges.push(edge.clone());
            } else {
                dropped += 1;
            }
        }

        if dropped > 0 {
            debug!(dropped, "Dropped edges with endpoints outside the graph");
        }

        (self.nodes, edges)
    }
}
