//! `lineage suggest` command implementation.

use anyhow::Result;
use colored::Colorize;

use super::display::{print_ids, priority_label};
use super::{Context, print_json};

/// Run the suggest command.
pub fn run(ctx: &Context, root: &str) -> Result<()> {
    let graph = ctx.build(root)?;
    let (_, suggestions) = ctx.engine.suggest(&graph);

    if ctx.json {
        return print_json(&suggestions);
    }

    if suggestions.is_empty() {
        println!("{}", "No optimizations suggested.".green());
        return Ok(());
    }

    println!(
        "{} suggestion(s) for {}:",
        suggestions.len().to_string().bold(),
        root.cyan().bold()
    );

    for suggestion in &suggestions {
        println!();
        println!(
            "  {} {} {}",
            priority_label(suggestion.priority),
            suggestion.title.white().bold(),
            format!("({})", suggestion.suggestion_type).dimmed()
        );
        println!("    {}", suggestion.description);
        println!(
            "    {} {}",
            "Impact:".dimmed(),
            suggestion.estimated_impact
        );
        print_ids(&suggestion.affected_assets, "(no specific assets)");
    }

    Ok(())
}
