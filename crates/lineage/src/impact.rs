//! Change impact analysis.
//!
//! Impact spreads over lineage edges in both directions: a change to an asset
//! can break its consumers, and a schema or access change can invalidate the
//! jobs that write into it.

use petgraph::graph::NodeIndex;
use std::collections::{HashSet, VecDeque};
use tracing::debug;

use crate::domain::{
    AssetId, ChangeType, ImpactResult, LineageGraph, LineageNode, RiskBreakdown,
};
use crate::error::{Error, Result};
use crate::graph::GraphIndex;

/// Type-tag fragments that mark regulated data
pub const REGULATED_TYPE_KEYWORDS: [&str; 3] = ["personal_data", "financial_data", "health_data"];

/// Direct impacts above this count call for a phased rollout
const PHASED_ROLLOUT_THRESHOLD: usize = 5;

/// Overall risk above this calls for testing and monitoring
const HIGH_RISK_THRESHOLD: f64 = 0.7;

/// Compliance risk above this calls for a compliance review
const COMPLIANCE_REVIEW_THRESHOLD: f64 = 0.5;

/// Analyze the impact of changing `target`.
///
/// 1. Direct impacts: nodes sharing an edge with the target.
/// 2. Indirect impacts: everything reached by breadth-first search from the
///    direct set, over edges in either direction. The target is in neither set.
/// 3. Radius: deepest node depth among indirect impacts.
/// 4. Criticality: `min((direct + 0.5 × indirect) / 10, 1)`.
/// 5. Risk: fractions of impacted nodes with quality issues, flagged
///    critical, or holding regulated data; overall is their mean.
/// 6. Recommendations from independent threshold rules.
///
/// # Errors
///
/// Returns [`Error::AssetNotFound`] if `target` is not a node of `graph`.
#[allow(clippy::cast_precision_loss)]
pub fn analyze_impact(
    target: &str,
    graph: &LineageGraph,
    change_type: ChangeType,
) -> Result<ImpactResult> {
    let index = GraphIndex::new(graph);
    let target_idx = index
        .index_of(target)
        .ok_or_else(|| Error::AssetNotFound(AssetId::from(target)))?;

    let direct = index.undirected_neighbors(target_idx);

    let mut visited: HashSet<NodeIndex> = direct.iter().copied().collect();
    visited.insert(target_idx);

    let mut indirect = Vec::new();
    let mut queue: VecDeque<NodeIndex> = direct.iter().copied().collect();
    while let Some(current) = queue.pop_front() {
        for next in index.undirected_neighbors(current) {
            if visited.insert(next) {
                indirect.push(next);
                queue.push_back(next);
            }
        }
    }

    let direct_nodes: Vec<&LineageNode> = direct.iter().map(|&n| index.node(n)).collect();
    let indirect_nodes: Vec<&LineageNode> = indirect.iter().map(|&n| index.node(n)).collect();

    let impact_radius = indirect_nodes.iter().map(|n| n.depth).max().unwrap_or(0);
    let weighted = direct_nodes.len() as f64 + indirect_nodes.len() as f64 * 0.5;
    let criticality_score = (weighted / 10.0).min(1.0);

    let impacted: Vec<&LineageNode> = direct_nodes
        .iter()
        .chain(indirect_nodes.iter())
        .copied()
        .collect();
    let risk = assess_risk(&impacted);
    let recommendations = recommend(direct_nodes.len(), &risk, change_type);

    debug!(
        target,
        direct = direct_nodes.len(),
        indirect = indirect_nodes.len(),
        radius = impact_radius,
        overall_risk = risk.overall,
        "Analyzed change impact"
    );

    Ok(ImpactResult {
        target: index.node(target_idx).id.clone(),
        change_type,
        direct_impacts: direct_nodes.iter().map(|n| n.id.clone()).collect(),
        indirect_impacts: indirect_nodes.iter().map(|n| n.id.clone()).collect(),
        impact_radius,
        criticality_score,
        risk,
        recommendations,
    })
}

/// Whether an asset type tag marks regulated data.
#[must_use]
pub fn is_regulated_type(asset_type: &str) -> bool {
    let lowered = asset_type.to_ascii_lowercase();
    REGULATED_TYPE_KEYWORDS
        .iter()
        .any(|keyword| lowered.contains(keyword))
}

fn assess_risk(impacted: &[&LineageNode]) -> RiskBreakdown {
    if impacted.is_empty() {
        return RiskBreakdown::default();
    }

    let data_quality = fraction(impacted, |n| n.has_quality_issues);
    let business_impact = fraction(impacted, |n| n.is_critical);
    let compliance = fraction(impacted, |n| is_regulated_type(&n.asset_type));

    RiskBreakdown {
        data_quality,
        business_impact,
        compliance,
        overall: (data_quality + business_impact + compliance) / 3.0,
    }
}

#[allow(clippy::cast_precision_loss)]
fn fraction(nodes: &[&LineageNode], pred: impl Fn(&LineageNode) -> bool) -> f64 {
    nodes.iter().filter(|&&n| pred(n)).count() as f64 / nodes.len() as f64
}

fn recommend(direct_count: usize, risk: &RiskBreakdown, change_type: ChangeType) -> Vec<String> {
    let mut recommendations = Vec::new();

    if direct_count > PHASED_ROLLOUT_THRESHOLD {
        recommendations.push(format!(
            "Roll the change out in phases: {direct_count} assets depend on it directly"
        ));
    }

    if risk.overall > HIGH_RISK_THRESHOLD {
        recommendations
            .push("Run comprehensive testing before deploying the change".to_string());
        recommendations
            .push("Monitor downstream assets closely after the change is deployed".to_string());
    }

    if risk.compliance > COMPLIANCE_REVIEW_THRESHOLD {
        recommendations.push(
            "Request a compliance review: the change reaches regulated personal, financial or health data"
                .to_string(),
        );
    }

    if change_type == ChangeType::Schema {
        recommendations
            .push("Validate schema compatibility with every downstream consumer".to_string());
        recommendations.push(
            "Plan a backward-compatibility strategy (versioned columns or a deprecation window)"
                .to_string(),
        );
    }

    recommendations
}
