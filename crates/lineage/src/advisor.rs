//! Optimization suggestions derived from an analysis.

use std::collections::HashSet;

use crate::domain::{
    AnalysisResult, AssetId, ComplexityLevel, ImplementationComplexity, LineageGraph, Priority,
    Suggestion, SuggestionType,
};
use crate::graph::GraphIndex;

/// Number of high-degree nodes named in a performance suggestion
pub const HOTSPOT_COUNT: usize = 5;

/// Complexity score above which a cost suggestion is made
pub const COST_COMPLEXITY_THRESHOLD: f64 = 0.8;

/// Suggest improvements for a graph, most urgent first.
///
/// Suggestions with equal priority keep the order their rules are checked:
/// performance, quality, governance, cost.
#[must_use]
pub fn suggest_optimizations(graph: &LineageGraph, analysis: &AnalysisResult) -> Vec<Suggestion> {
    let mut suggestions = Vec::new();

    if analysis.complexity == ComplexityLevel::VeryHigh {
        let hotspots = hotspots(graph, HOTSPOT_COUNT);
        suggestions.push(Suggestion {
            suggestion_type: SuggestionType::Performance,
            priority: Priority::High,
            title: "Simplify high-complexity lineage".to_string(),
            description: format!(
                "The graph has {} nodes and reaches depth {}. Consolidate the most connected \
                 assets or materialize intermediate results.",
                analysis.total_nodes, analysis.max_depth
            ),
            estimated_impact: "Shorter processing chains and faster refreshes".to_string(),
            implementation_complexity: ImplementationComplexity::High,
            affected_assets: hotspots,
        });
    }

    if !analysis.quality_issues.is_empty() {
        let priority = if analysis
            .quality_issues
            .iter()
            .any(|issue| issue.severity == Priority::Critical)
        {
            Priority::Critical
        } else {
            Priority::High
        };

        let mut seen = HashSet::new();
        let affected: Vec<AssetId> = analysis
            .quality_issues
            .iter()
            .flat_map(|issue| issue.affected_nodes.iter())
            .filter(|&id| seen.insert(id.as_str()))
            .cloned()
            .collect();

        suggestions.push(Suggestion {
            suggestion_type: SuggestionType::Quality,
            priority,
            title: "Address data quality issues".to_string(),
            description: format!(
                "{} quality issue(s) affect {} asset(s). Add validation checks and refresh \
                 stale sources.",
                analysis.quality_issues.len(),
                affected.len()
            ),
            estimated_impact: "More reliable downstream data".to_string(),
            implementation_complexity: ImplementationComplexity::Medium,
            affected_assets: affected,
        });
    }

    if !analysis.orphaned_nodes.is_empty() {
        suggestions.push(Suggestion {
            suggestion_type: SuggestionType::Governance,
            priority: Priority::Medium,
            title: "Review orphaned assets".to_string(),
            description: format!(
                "{} asset(s) have no recorded lineage. Document their sources or retire them.",
                analysis.orphaned_nodes.len()
            ),
            estimated_impact: "Clearer ownership and a smaller catalog".to_string(),
            implementation_complexity: ImplementationComplexity::Low,
            affected_assets: analysis.orphaned_nodes.clone(),
        });
    }

    if analysis.metrics.complexity > COST_COMPLEXITY_THRESHOLD {
        let mut seen = HashSet::new();
        let on_paths: Vec<AssetId> = analysis
            .critical_paths
            .iter()
            .flat_map(|path| path.nodes.iter())
            .filter(|&id| seen.insert(id.as_str()))
            .cloned()
            .collect();

        suggestions.push(Suggestion {
            suggestion_type: SuggestionType::Cost,
            priority: Priority::Low,
            title: "Reduce processing cost on critical paths".to_string(),
            description: format!(
                "Complexity score {:.2} is high. Cache or incrementally process the assets on \
                 critical paths.",
                analysis.metrics.complexity
            ),
            estimated_impact: "Lower compute and storage spend".to_string(),
            implementation_complexity: ImplementationComplexity::Medium,
            affected_assets: on_paths,
        });
    }

    suggestions.sort_by(|a, b| b.priority.rank().cmp(&a.priority.rank()));
    suggestions
}

/// The `count` nodes with the highest total degree, ties in node order.
fn hotspots(graph: &LineageGraph, count: usize) -> Vec<AssetId> {
    let index = GraphIndex::new(graph);
    let mut ranked: Vec<_> = index
        .indices()
        .map(|idx| (index.in_degree(idx) + index.out_degree(idx), idx))
        .collect();
    ranked.sort_by(|a, b| b.0.cmp(&a.0));

    ranked
        .into_iter()
        .take(count)
        .map(|(_, idx)| index.node(idx).id.clone())
        .collect()
}
