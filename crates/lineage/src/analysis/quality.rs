//! Quality issue detection over a built graph.

use chrono::{DateTime, Utc};

use super::metrics::{FRESHNESS_WINDOW_DAYS, age_days};
use crate::domain::{AssetId, LineageGraph, Priority, QualityIssue, QualityIssueKind};

/// Quality score below which a low-quality issue is critical
const CRITICAL_QUALITY_SCORE: f64 = 50.0;

/// Edge confidence below which lineage is considered unreliable
pub const LOW_CONFIDENCE_THRESHOLD: f64 = 0.5;

/// Detect quality issues. At most one issue is reported per kind.
pub(crate) fn detect(graph: &LineageGraph, now: DateTime<Utc>) -> Vec<QualityIssue> {
    let mut issues = Vec::new();

    let low_quality: Vec<_> = graph.nodes.iter().filter(|n| n.has_quality_issues).collect();
    if !low_quality.is_empty() {
        let severity = if low_quality
            .iter()
            .any(|n| n.quality_score().is_some_and(|s| s < CRITICAL_QUALITY_SCORE))
        {
            Priority::Critical
        } else {
            Priority::High
        };
        issues.push(QualityIssue {
            kind: QualityIssueKind::LowQualityScore,
            severity,
            description: format!(
                "{} asset(s) have a quality score below the acceptable threshold",
                low_quality.len()
            ),
            affected_nodes: low_quality.iter().map(|n| n.id.clone()).collect(),
        });
    }

    let stale: Vec<AssetId> = graph
        .nodes
        .iter()
        .filter(|n| age_days(n, now).is_some_and(|days| days > FRESHNESS_WINDOW_DAYS))
        .map(|n| n.id.clone())
        .collect();
    if !stale.is_empty() {
        issues.push(QualityIssue {
            kind: QualityIssueKind::StaleData,
            severity: Priority::Medium,
            description: format!(
                "{} asset(s) have not been modified in over {FRESHNESS_WINDOW_DAYS} days",
                stale.len()
            ),
            affected_nodes: stale,
        });
    }

    let mut weak: Vec<AssetId> = Vec::new();
    let mut weak_edges = 0usize;
    for edge in graph
        .edges
        .iter()
        .filter(|e| e.confidence < LOW_CONFIDENCE_THRESHOLD)
    {
        weak_edges += 1;
        for id in [&edge.source, &edge.target] {
            if !weak.contains(id) {
                weak.push(id.clone());
            }
        }
    }
    if weak_edges > 0 {
        issues.push(QualityIssue {
            kind: QualityIssueKind::LowConfidenceLineage,
            severity: Priority::Low,
            description: format!(
                "{weak_edges} lineage edge(s) have confidence below {LOW_CONFIDENCE_THRESHOLD}"
            ),
            affected_nodes: weak,
        });
    }

    issues
}
