//! `lineage graph` command implementation.

use std::collections::BTreeMap;

use anyhow::Result;
use colored::Colorize;
use lineage::LineageNode;

use super::{Context, print_json};

/// Run the graph command.
pub fn run(ctx: &Context, root: &str) -> Result<()> {
    let graph = ctx.build(root)?;

    if ctx.json {
        return print_json(&graph);
    }

    println!(
        "Lineage graph for {} ({} nodes, {} edges, {} traversal):",
        root.cyan().bold(),
        graph.node_count().to_string().green(),
        graph.edge_count().to_string().green(),
        graph.metadata.options.directionality
    );

    let mut levels: BTreeMap<usize, Vec<&LineageNode>> = BTreeMap::new();
    for node in &graph.nodes {
        levels.entry(node.depth).or_default().push(node);
    }

    for (depth, nodes) in levels {
        println!();
        println!("  {} {depth}:", "Depth".white().bold());
        for node in nodes {
            let mut flags = Vec::new();
            if node.is_critical {
                flags.push("critical".red().to_string());
            }
            if node.has_quality_issues {
                flags.push("quality".yellow().to_string());
            }
            let flags = if flags.is_empty() {
                String::new()
            } else {
                format!(" [{}]", flags.join(", "))
            };

            println!(
                "    {} {} {}{flags}",
                "•".dimmed(),
                node.name,
                format!("({}, {})", node.id, node.asset_type).dimmed()
            );
        }
    }

    Ok(())
}
