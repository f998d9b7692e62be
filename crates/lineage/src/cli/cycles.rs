//! `lineage cycles` command implementation.

use anyhow::Result;
use colored::Colorize;
use lineage::find_cycles;

use super::display::print_path;
use super::{Context, print_json};

/// Run the cycles command.
pub fn run(ctx: &Context, root: &str) -> Result<()> {
    let graph = ctx.build(root)?;
    let cycles = find_cycles(&graph);

    if ctx.json {
        return print_json(&cycles);
    }

    if cycles.is_empty() {
        println!("{}", "No circular dependencies detected.".green());
        return Ok(());
    }

    println!(
        "Found {} circular dependencies:",
        cycles.len().to_string().red().bold()
    );
    println!();

    for (i, cycle) in cycles.iter().enumerate() {
        println!("  {} {} {}:", "Cycle".yellow().bold(), i + 1, cycle.id.dimmed());
        print_path(cycle);
    }

    Ok(())
}
