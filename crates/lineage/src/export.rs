//! Text renderings of a lineage graph.
//!
//! - [`to_dot`]: Graphviz DOT, via `petgraph::dot`
//! - [`to_mermaid`]: Mermaid flowchart
//!
//! Both draw nodes in node-list order and edges in edge-list order.

use petgraph::dot::{Config, Dot};
use petgraph::graph::DiGraph;
use std::fmt::Write;
use std::str::FromStr;

use crate::domain::LineageGraph;
use crate::error::Error;
use crate::graph::GraphIndex;

/// Output format for [`render`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ExportFormat {
    /// Graphviz DOT
    #[default]
    Dot,
    /// Mermaid flowchart
    Mermaid,
}

impl FromStr for ExportFormat {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "dot" | "graphviz" => Ok(Self::Dot),
            "mermaid" => Ok(Self::Mermaid),
            other => Err(Error::InvalidOptions(format!(
                "unknown export format '{other}' (expected dot or mermaid)"
            ))),
        }
    }
}

/// Render `graph` in the given format.
#[must_use]
pub fn render(graph: &LineageGraph, format: ExportFormat) -> String {
    match format {
        ExportFormat::Dot => to_dot(graph),
        ExportFormat::Mermaid => to_mermaid(graph),
    }
}

/// Render as Graphviz DOT. Nodes are labeled with their display name and
/// edges with their kind.
#[must_use]
pub fn to_dot(graph: &LineageGraph) -> String {
    let index = GraphIndex::new(graph);
    let labeled: DiGraph<String, String> = index.graph().map(
        |idx, _| {
            let node = index.node(idx);
            format!("{} ({})", node.name, node.asset_type)
        },
        |_, &pos| index.edge(pos).kind.to_string(),
    );

    let mut out = String::from("digraph lineage {\n");
    let _ = write!(
        out,
        "{}",
        Dot::with_config(&labeled, &[Config::GraphContentOnly])
    );
    out.push_str("}\n");
    out
}

/// Render as a Mermaid `flowchart LR`.
///
/// Node IDs are replaced by positional aliases (`n0`, `n1`, ...) since asset
/// IDs may contain characters Mermaid does not accept.
#[must_use]
pub fn to_mermaid(graph: &LineageGraph) -> String {
    let index = GraphIndex::new(graph);
    let mut out = String::from("flowchart LR\n");

    for idx in index.indices() {
        let node = index.node(idx);
        let label = node.name.replace('"', "'");
        // Writing to a String cannot fail
        let _ = writeln!(out, "    n{}[\"{label}\"]", idx.index());
        if node.is_root {
            let _ = writeln!(out, "    style n{} stroke-width:3px", idx.index());
        }
    }

    for edge in index.graph().edge_indices() {
        let Some((from, to)) = index.graph().edge_endpoints(edge) else {
            continue;
        };
        let kind = &index.edge(index.graph()[edge]).kind;
        let _ = writeln!(out, "    n{} -->|{kind}| n{}", from.index(), to.index());
    }

    out
}
