//! Analysis, impact and advisory result types.
//!
//! These are plain data for the visualization layer; every type serializes
//! to JSON without further conversion.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use super::{AssetId, LineagePath};
use crate::error::Error;

/// Qualitative size/depth bucket
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ComplexityLevel {
    /// Small and shallow
    Low,
    /// More than 20 nodes or deeper than 4
    Medium,
    /// More than 50 nodes or deeper than 6
    High,
    /// More than 100 nodes or deeper than 8
    VeryHigh,
}

impl fmt::Display for ComplexityLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Low => "low",
            Self::Medium => "medium",
            Self::High => "high",
            Self::VeryHigh => "very_high",
        };
        f.write_str(name)
    }
}

/// Numeric graph metrics. All ratios are in [0, 1].
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GraphMetrics {
    /// Mean in-degree
    pub fan_in: f64,
    /// Mean out-degree
    pub fan_out: f64,
    /// Mean of normalized density, depth and size
    pub complexity: f64,
    /// Fraction of nodes touched by at least one edge
    pub coverage: f64,
    /// Mean recency over a 30-day window
    pub freshness: f64,
    /// Mean normalized quality score, 0.5 when nothing is scored
    pub reliability: f64,
}

/// Category of a detected quality issue
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum QualityIssueKind {
    /// Quality score below threshold
    LowQualityScore,
    /// Not modified within the freshness window
    StaleData,
    /// Lineage edges with low confidence
    LowConfidenceLineage,
}

/// A quality problem found while analyzing a graph.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct QualityIssue {
    /// Issue category
    pub kind: QualityIssueKind,
    /// How urgent the issue is
    pub severity: Priority,
    /// Human-readable summary
    pub description: String,
    /// Nodes exhibiting the issue
    pub affected_nodes: Vec<AssetId>,
}

/// Structural and quality analysis of a lineage graph.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnalysisResult {
    /// Number of nodes
    pub total_nodes: usize,
    /// Number of edges
    pub total_edges: usize,
    /// Deepest node depth
    pub max_depth: usize,
    /// Mean node depth, 0 for an empty graph
    pub avg_depth: f64,
    /// Qualitative bucket
    pub complexity: ComplexityLevel,
    /// Long chains from root nodes
    pub critical_paths: Vec<LineagePath>,
    /// Nodes touched by no edge
    pub orphaned_nodes: Vec<AssetId>,
    /// Detected cycles
    pub circular_dependencies: Vec<LineagePath>,
    /// Detected quality issues
    pub quality_issues: Vec<QualityIssue>,
    /// Numeric metrics
    pub metrics: GraphMetrics,
}

/// Kind of change being assessed
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ChangeType {
    /// Column or structure changes
    Schema,
    /// Content changes
    #[default]
    Data,
    /// Physical relocation
    Location,
    /// Permission changes
    Access,
}

impl fmt::Display for ChangeType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Schema => "schema",
            Self::Data => "data",
            Self::Location => "location",
            Self::Access => "access",
        };
        f.write_str(name)
    }
}

impl FromStr for ChangeType {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "schema" => Ok(Self::Schema),
            "data" => Ok(Self::Data),
            "location" => Ok(Self::Location),
            "access" => Ok(Self::Access),
            other => Err(Error::InvalidOptions(format!(
                "unknown change type '{other}' (expected schema, data, location or access)"
            ))),
        }
    }
}

/// Per-category risk scores, each in [0, 1]
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct RiskBreakdown {
    /// Fraction of impacted nodes with quality issues
    pub data_quality: f64,
    /// Fraction of impacted nodes flagged critical
    pub business_impact: f64,
    /// Fraction of impacted nodes holding regulated data
    pub compliance: f64,
    /// Mean of the three
    pub overall: f64,
}

/// Result of propagating a change from a target asset.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ImpactResult {
    /// Asset being changed
    pub target: AssetId,
    /// Kind of change
    pub change_type: ChangeType,
    /// Nodes sharing an edge with the target
    pub direct_impacts: Vec<AssetId>,
    /// Nodes reached beyond the direct set
    pub indirect_impacts: Vec<AssetId>,
    /// Deepest node depth among indirect impacts
    pub impact_radius: usize,
    /// Weighted impacted-node count normalized to [0, 1]
    pub criticality_score: f64,
    /// Risk scores
    pub risk: RiskBreakdown,
    /// Free-text recommendations
    pub recommendations: Vec<String>,
}

impl ImpactResult {
    /// Total number of impacted nodes (direct + indirect).
    #[must_use]
    pub fn total_impacted(&self) -> usize {
        self.direct_impacts.len() + self.indirect_impacts.len()
    }
}

/// Category of an optimization suggestion
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SuggestionType {
    /// Processing cost or latency
    Performance,
    /// Data quality
    Quality,
    /// Ownership and documentation
    Governance,
    /// Compute and storage spend
    Cost,
}

impl fmt::Display for SuggestionType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Performance => "performance",
            Self::Quality => "quality",
            Self::Governance => "governance",
            Self::Cost => "cost",
        };
        f.write_str(name)
    }
}

/// Priority of a suggestion or severity of an issue
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Priority {
    /// Act now
    Critical,
    /// Act soon
    High,
    /// Plan for it
    Medium,
    /// Nice to have
    Low,
}

impl Priority {
    /// Sort rank: critical 4, high 3, medium 2, low 1.
    #[must_use]
    pub fn rank(self) -> u8 {
        match self {
            Self::Critical => 4,
            Self::High => 3,
            Self::Medium => 2,
            Self::Low => 1,
        }
    }
}

impl fmt::Display for Priority {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Critical => "critical",
            Self::High => "high",
            Self::Medium => "medium",
            Self::Low => "low",
        };
        f.write_str(name)
    }
}

/// Effort needed to act on a suggestion
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ImplementationComplexity {
    /// Configuration-level change
    Low,
    /// Some engineering work
    Medium,
    /// Significant redesign
    High,
}

/// A prioritized improvement suggestion.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Suggestion {
    /// Category
    #[serde(rename = "type")]
    pub suggestion_type: SuggestionType,
    /// Priority
    pub priority: Priority,
    /// Short title
    pub title: String,
    /// What to do
    pub description: String,
    /// Expected benefit
    pub estimated_impact: String,
    /// Effort
    pub implementation_complexity: ImplementationComplexity,
    /// Assets the suggestion applies to
    pub affected_assets: Vec<AssetId>,
}
