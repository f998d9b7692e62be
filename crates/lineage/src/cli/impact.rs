//! `lineage impact` command implementation.

use anyhow::{Context as _, Result};
use colored::Colorize;
use lineage::{ChangeType, ImpactResult};

use super::display::{print_ids, risk_score};
use super::{Context, print_json};

/// Run the impact command.
///
/// The graph is built from `root` when given, otherwise from the target
/// itself. A change type on the command line overrides the configured one.
pub fn run(
    ctx: &Context,
    target: &str,
    root: Option<&str>,
    change_type: Option<ChangeType>,
) -> Result<()> {
    let graph = ctx.build(root.unwrap_or(target))?;
    let change_type = change_type.unwrap_or(ctx.config.change_type);

    let impact = ctx
        .engine
        .impact(target, &graph, change_type)
        .with_context(|| format!("failed to analyze impact of '{target}'"))?;

    if ctx.json {
        return print_json(&impact);
    }

    println!(
        "Impact of a {} change to {}:",
        change_type.to_string().yellow(),
        target.cyan().bold()
    );
    print_impact(&impact);

    Ok(())
}

fn print_impact(impact: &ImpactResult) {
    println!();
    println!(
        "  {} ({} assets):",
        "Direct impacts".white().bold(),
        impact.direct_impacts.len().to_string().green()
    );
    print_ids(&impact.direct_impacts, "(none)");

    println!();
    println!(
        "  {} ({} assets):",
        "Indirect impacts".white().bold(),
        impact.indirect_impacts.len().to_string().yellow()
    );
    print_ids(&impact.indirect_impacts, "(none beyond direct)");

    println!();
    println!("  {:<14} {}", "Radius:", impact.impact_radius);
    println!(
        "  {:<14} {}",
        "Criticality:",
        risk_score(impact.criticality_score)
    );
    println!(
        "  {:<14} overall {} (quality {}, business {}, compliance {})",
        "Risk:",
        risk_score(impact.risk.overall),
        risk_score(impact.risk.data_quality),
        risk_score(impact.risk.business_impact),
        risk_score(impact.risk.compliance)
    );

    if !impact.recommendations.is_empty() {
        println!();
        println!("  {}", "Recommendations".white().bold());
        for recommendation in &impact.recommendations {
            println!("    {} {recommendation}", "•".dimmed());
        }
    }
}
