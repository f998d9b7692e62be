//! Common display utilities for CLI commands.

use std::path::Path;

use colored::{ColoredString, Colorize};
use lineage::{AssetId, LineagePath, LoadWarning, Priority};

const MAX_DISPLAY_ITEMS: usize = 10;

/// Report skipped records on stderr.
pub fn print_load_warnings(path: &Path, warnings: &[LoadWarning]) {
    if warnings.is_empty() {
        return;
    }

    eprintln!(
        "{}: skipped {} record(s) in {}",
        "warning".yellow().bold(),
        warnings.len(),
        path.display()
    );
    for warning in warnings.iter().take(MAX_DISPLAY_ITEMS) {
        eprintln!("    {} {warning}", "•".dimmed());
    }
    if warnings.len() > MAX_DISPLAY_ITEMS {
        eprintln!(
            "    {} ... and {} more",
            "•".dimmed(),
            warnings.len() - MAX_DISPLAY_ITEMS
        );
    }
}

/// Display a list of asset IDs with optional truncation.
///
/// Shows up to `MAX_DISPLAY_ITEMS` IDs with bullet points. If there are more,
/// shows "... and N more". If empty, shows the provided `empty_message`.
pub fn print_ids(ids: &[AssetId], empty_message: &str) {
    if ids.is_empty() {
        println!("    {}", empty_message.dimmed());
        return;
    }

    for id in ids.iter().take(MAX_DISPLAY_ITEMS) {
        println!("    {} {id}", "•".dimmed());
    }

    if ids.len() > MAX_DISPLAY_ITEMS {
        println!(
            "    {} ... and {} more",
            "•".dimmed(),
            ids.len() - MAX_DISPLAY_ITEMS
        );
    }
}

/// Display a path as `a → b → c`, repeating the first node for cycles.
pub fn print_path(path: &LineagePath) {
    let mut line = path
        .nodes
        .iter()
        .map(AssetId::as_str)
        .collect::<Vec<_>>()
        .join(" → ");

    if path.direction == lineage::PathDirection::Circular
        && let Some(first) = path.nodes.first()
    {
        line.push_str(" → ");
        line.push_str(first.as_str());
    }

    println!("    {}", line.dimmed());
}

/// Priority label colored by urgency.
pub fn priority_label(priority: Priority) -> ColoredString {
    let label = priority.to_string().to_uppercase();
    match priority {
        Priority::Critical => label.red().bold(),
        Priority::High => label.yellow().bold(),
        Priority::Medium => label.cyan(),
        Priority::Low => label.dimmed(),
    }
}

/// Score in [0, 1] colored green/yellow/red, higher meaning worse.
pub fn risk_score(score: f64) -> ColoredString {
    let text = format!("{score:.2}");
    if score > 0.7 {
        text.red().bold()
    } else if score > 0.3 {
        text.yellow()
    } else {
        text.green()
    }
}
