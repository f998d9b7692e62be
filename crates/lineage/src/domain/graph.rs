//! Derived graph types produced by the builder.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::{AssetId, AssetRef, LineageEdge};
use crate::options::BuildOptions;

/// 2-D layout coordinate
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Position {
    /// Horizontal offset, levels are centered on 0
    pub x: f64,
    /// Vertical offset, grows with depth
    pub y: f64,
}

/// Snapshot of catalog metadata carried on a node for display.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NodeMetadata {
    /// Free-text description
    pub description: Option<String>,
    /// Catalog tags
    pub tags: Vec<String>,
    /// Quality score in 0-100
    pub quality_score: Option<f64>,
    /// Last modification time
    pub last_modified: Option<DateTime<Utc>>,
    /// Owner (person or team)
    pub owner: Option<String>,
}

/// A node in a built lineage graph.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LineageNode {
    /// Asset this node represents
    pub id: AssetId,
    /// Display name
    pub name: String,
    /// Asset type tag
    #[serde(rename = "type")]
    pub asset_type: String,
    /// Distance from the traversal root at first visit (root = 0)
    pub depth: usize,
    /// Layout coordinate
    pub position: Position,
    /// Whether this node is the traversal root
    pub is_root: bool,
    /// Copied from [`AssetRef::critical`]
    pub is_critical: bool,
    /// Quality score below the issue threshold
    pub has_quality_issues: bool,
    /// Catalog metadata snapshot
    pub metadata: Option<NodeMetadata>,
}

impl LineageNode {
    /// Build a node from its asset record.
    pub(crate) fn from_asset(asset: &AssetRef, depth: usize, is_root: bool) -> Self {
        Self {
            id: asset.id.clone(),
            name: asset.name.clone(),
            asset_type: asset.asset_type.clone(),
            depth,
            position: Position::default(),
            is_root,
            is_critical: asset.critical,
            has_quality_issues: asset.has_quality_issues(),
            metadata: Some(NodeMetadata {
                description: asset.description.clone(),
                tags: asset.tags.clone(),
                quality_score: asset.quality_score,
                last_modified: asset.last_modified,
                owner: asset.owner.clone(),
            }),
        }
    }

    /// Quality score from the metadata snapshot
    #[must_use]
    pub fn quality_score(&self) -> Option<f64> {
        self.metadata.as_ref().and_then(|m| m.quality_score)
    }

    /// Last modification time from the metadata snapshot
    #[must_use]
    pub fn last_modified(&self) -> Option<DateTime<Utc>> {
        self.metadata.as_ref().and_then(|m| m.last_modified)
    }
}

/// Facts recorded about a build.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GraphMetadata {
    /// When the graph was built
    pub built_at: DateTime<Utc>,
    /// Options the graph was built with
    pub options: BuildOptions,
    /// Deepest node depth in the graph
    pub max_depth: usize,
    /// Number of nodes
    pub node_count: usize,
    /// Number of edges
    pub edge_count: usize,
}

/// A lineage graph crawled from a root asset.
///
/// Every edge's endpoints are nodes of the same graph and edge IDs are unique.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LineageGraph {
    /// The traversal root
    pub root_id: AssetId,
    /// Nodes in the order they were first visited
    pub nodes: Vec<LineageNode>,
    /// De-duplicated edges
    pub edges: Vec<LineageEdge>,
    /// Build facts
    pub metadata: GraphMetadata,
}

impl LineageGraph {
    /// Look up a node by asset ID
    #[must_use]
    pub fn node(&self, id: &str) -> Option<&LineageNode> {
        self.nodes.iter().find(|n| n.id.as_str() == id)
    }

    /// Whether the graph contains a node for `id`
    #[must_use]
    pub fn contains(&self, id: &str) -> bool {
        self.node(id).is_some()
    }

    /// Number of nodes
    #[must_use]
    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    /// Number of edges
    #[must_use]
    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }

    /// Whether the graph has no nodes
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }
}

/// Direction tag for a [`LineagePath`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PathDirection {
    /// Toward data sources
    Upstream,
    /// Toward data consumers
    Downstream,
    /// Returns to its first node
    Circular,
}

/// An ordered walk through the graph.
///
/// For circular paths the first node is not repeated at the end; the closing
/// edge is the last entry of `edges`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LineagePath {
    /// Content-derived ID, stable across runs
    pub id: String,
    /// Node IDs in walk order
    pub nodes: Vec<AssetId>,
    /// Edge IDs in walk order
    pub edges: Vec<String>,
    /// Number of nodes
    pub length: usize,
    /// Direction tag
    pub direction: PathDirection,
    /// Whether the path is flagged critical
    pub is_critical: bool,
}

impl LineagePath {
    /// Create a path, deriving its ID and length from the node sequence.
    pub(crate) fn new(
        nodes: Vec<AssetId>,
        edges: Vec<String>,
        direction: PathDirection,
        is_critical: bool,
    ) -> Self {
        let id = crate::path_id::path_id(direction, &nodes);
        Self {
            id,
            length: nodes.len(),
            nodes,
            edges,
            direction,
            is_critical,
        }
    }

    /// Whether the path visits `id`
    #[must_use]
    pub fn contains(&self, id: &str) -> bool {
        self.nodes.iter().any(|n| n.as_str() == id)
    }
}
