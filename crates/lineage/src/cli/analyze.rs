//! `lineage analyze` command implementation.

use anyhow::Result;
use colored::Colorize;

use super::display::{print_ids, print_path, priority_label};
use super::{Context, print_json};

/// Run the analyze command.
pub fn run(ctx: &Context, root: &str) -> Result<()> {
    let graph = ctx.build(root)?;
    let analysis = ctx.engine.analyze(&graph);

    if ctx.json {
        return print_json(&analysis);
    }

    println!("Analysis for {}:", root.cyan().bold());
    println!();
    println!("  {:<14} {}", "Nodes:", analysis.total_nodes);
    println!("  {:<14} {}", "Edges:", analysis.total_edges);
    println!(
        "  {:<14} {} (avg {:.2})",
        "Max depth:", analysis.max_depth, analysis.avg_depth
    );
    println!("  {:<14} {}", "Complexity:", analysis.complexity);

    let m = &analysis.metrics;
    println!();
    println!("  {}", "Metrics".white().bold());
    println!("    fan-in {:.2}, fan-out {:.2}", m.fan_in, m.fan_out);
    println!(
        "    complexity {:.2}, coverage {:.2}, freshness {:.2}, reliability {:.2}",
        m.complexity, m.coverage, m.freshness, m.reliability
    );

    println!();
    println!(
        "  {} ({}):",
        "Critical paths".white().bold(),
        analysis.critical_paths.len()
    );
    if analysis.critical_paths.is_empty() {
        println!("    {}", "(none)".dimmed());
    }
    for path in &analysis.critical_paths {
        print_path(path);
    }

    println!();
    println!(
        "  {} ({}):",
        "Circular dependencies".white().bold(),
        analysis.circular_dependencies.len().to_string().red()
    );
    for cycle in &analysis.circular_dependencies {
        print_path(cycle);
    }

    println!();
    println!(
        "  {} ({}):",
        "Orphaned assets".white().bold(),
        analysis.orphaned_nodes.len()
    );
    print_ids(&analysis.orphaned_nodes, "(none)");

    if !analysis.quality_issues.is_empty() {
        println!();
        println!("  {}", "Quality issues".white().bold());
        for issue in &analysis.quality_issues {
            println!(
                "    {} {}",
                priority_label(issue.severity),
                issue.description
            );
        }
    }

    Ok(())
}
