//! Domain types for lineage analysis.
//!
//! Input records ([`AssetRef`], [`LineageEdge`]) are owned by the caller and
//! referenced by [`AssetId`] only. Everything derived from them lives in the
//! [`graph`] and [`report`] submodules.

mod graph;
mod report;

pub use graph::{
    GraphMetadata, LineageGraph, LineageNode, LineagePath, NodeMetadata, PathDirection, Position,
};
pub use report::{
    AnalysisResult, ChangeType, ComplexityLevel, GraphMetrics, ImpactResult,
    ImplementationComplexity, Priority, QualityIssue, QualityIssueKind, RiskBreakdown, Suggestion,
    SuggestionType,
};

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::borrow::Borrow;
use std::fmt;

/// Quality score below which an asset is flagged as having quality issues.
pub const QUALITY_ISSUE_THRESHOLD: f64 = 80.0;

/// Unique identifier for an asset
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct AssetId(pub String);

impl AssetId {
    /// Create a new asset ID
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Borrow the ID as a string slice
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for AssetId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<String> for AssetId {
    fn from(s: String) -> Self {
        Self(s)
    }
}

impl From<&str> for AssetId {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

impl Borrow<str> for AssetId {
    fn borrow(&self) -> &str {
        &self.0
    }
}

/// An asset record as supplied by the catalog.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AssetRef {
    /// Unique identifier for the asset
    pub id: AssetId,

    /// Display name
    pub name: String,

    /// Type tag (e.g., "table", "view", "`personal_data_table`")
    #[serde(rename = "type")]
    pub asset_type: String,

    /// Quality score in 0-100, when the quality subsystem has scored the asset
    #[serde(default)]
    pub quality_score: Option<f64>,

    /// Last modification time
    #[serde(default)]
    pub last_modified: Option<DateTime<Utc>>,

    /// Whether the asset is business critical
    #[serde(default)]
    pub critical: bool,

    /// Owning department
    #[serde(default)]
    pub department: Option<String>,

    /// Free-text description
    #[serde(default)]
    pub description: Option<String>,

    /// Catalog tags
    #[serde(default)]
    pub tags: Vec<String>,

    /// Owner (person or team)
    #[serde(default)]
    pub owner: Option<String>,
}

impl AssetRef {
    /// Create an asset with only the required fields set.
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        asset_type: impl Into<String>,
    ) -> Self {
        Self {
            id: AssetId::new(id),
            name: name.into(),
            asset_type: asset_type.into(),
            quality_score: None,
            last_modified: None,
            critical: false,
            department: None,
            description: None,
            tags: Vec::new(),
            owner: None,
        }
    }

    /// Set the quality score
    #[must_use]
    pub fn with_quality_score(mut self, score: f64) -> Self {
        self.quality_score = Some(score);
        self
    }

    /// Set the last modification time
    #[must_use]
    pub fn with_last_modified(mut self, at: DateTime<Utc>) -> Self {
        self.last_modified = Some(at);
        self
    }

    /// Mark the asset as business critical
    #[must_use]
    pub fn critical(mut self) -> Self {
        self.critical = true;
        self
    }

    /// Whether the asset's quality score is below [`QUALITY_ISSUE_THRESHOLD`].
    ///
    /// Unscored assets are not flagged.
    #[must_use]
    pub fn has_quality_issues(&self) -> bool {
        self.quality_score
            .is_some_and(|score| score < QUALITY_ISSUE_THRESHOLD)
    }

    /// Check the record for values the engine cannot use.
    ///
    /// # Errors
    ///
    /// Returns a description of the first problem found: an empty ID or a
    /// quality score outside 0-100.
    pub fn validate(&self) -> Result<(), String> {
        if self.id.as_str().trim().is_empty() {
            return Err("asset id must not be empty".to_string());
        }
        if let Some(score) = self.quality_score
            && !(0.0..=100.0).contains(&score)
        {
            return Err(format!("quality score {score} is outside 0-100"));
        }
        Ok(())
    }
}

/// Kind of transformation an edge represents
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EdgeKind {
    /// Derived through a transformation step
    Transformation,

    /// Joined with other inputs
    Join,

    /// Copied verbatim
    Copy,

    /// Aggregated
    Aggregation,

    /// Filtered subset
    Filter,

    /// Any kind the engine does not distinguish
    #[serde(other)]
    Other,
}

impl fmt::Display for EdgeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Transformation => "transformation",
            Self::Join => "join",
            Self::Copy => "copy",
            Self::Aggregation => "aggregation",
            Self::Filter => "filter",
            Self::Other => "other",
        };
        f.write_str(name)
    }
}

/// Strength of a lineage relationship
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RelationshipStrength {
    /// Inferred or partial relationship
    Weak,

    /// Confirmed relationship
    #[default]
    Strong,
}

/// A directed lineage edge: data flows from `source` to `target`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LineageEdge {
    /// Stable edge ID, when the provider assigns one
    #[serde(default)]
    pub id: Option<String>,

    /// Asset the data flows from
    pub source: AssetId,

    /// Asset the data flows to
    pub target: AssetId,

    /// Edge kind
    pub kind: EdgeKind,

    /// Confidence in [0, 1], 1.0 when omitted
    #[serde(default = "full_confidence")]
    pub confidence: f64,

    /// Relationship strength
    #[serde(default)]
    pub strength: RelationshipStrength,
}

fn full_confidence() -> f64 {
    1.0
}

impl LineageEdge {
    /// Create an edge without a provider-assigned ID.
    pub fn new(source: impl Into<String>, target: impl Into<String>, kind: EdgeKind) -> Self {
        Self {
            id: None,
            source: AssetId::new(source),
            target: AssetId::new(target),
            kind,
            confidence: 1.0,
            strength: RelationshipStrength::Strong,
        }
    }

    /// Set the provider-assigned ID
    #[must_use]
    pub fn with_id(mut self, id: impl Into<String>) -> Self {
        self.id = Some(id.into());
        self
    }

    /// Set confidence and strength
    #[must_use]
    pub fn with_confidence(mut self, confidence: f64, strength: RelationshipStrength) -> Self {
        self.confidence = confidence;
        self.strength = strength;
        self
    }

    /// The ID used for de-duplication.
    ///
    /// Falls back to `source->target:kind` when the provider assigned none.
    #[must_use]
    pub fn effective_id(&self) -> String {
        match &self.id {
            Some(id) => id.clone(),
            None => format!("{}->{}:{}", self.source, self.target, self.kind),
        }
    }

    /// Check the record for values the engine cannot use.
    ///
    /// # Errors
    ///
    /// Returns a description of the first problem found: an empty endpoint
    /// or a confidence outside 0-1.
    pub fn validate(&self) -> Result<(), String> {
        if self.source.as_str().trim().is_empty() || self.target.as_str().trim().is_empty() {
            return Err("edge endpoints must not be empty".to_string());
        }
        if !(0.0..=1.0).contains(&self.confidence) {
            return Err(format!("confidence {} is outside 0-1", self.confidence));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn effective_id_prefers_provider_id() {
        let edge = LineageEdge::new("a", "b", EdgeKind::Join).with_id("e-1");
        assert_eq!(edge.effective_id(), "e-1");
    }

    #[test]
    fn effective_id_derives_from_endpoints_and_kind() {
        let copy = LineageEdge::new("a", "b", EdgeKind::Copy);
        let join = LineageEdge::new("a", "b", EdgeKind::Join);
        assert_eq!(copy.effective_id(), "a->b:copy");
        assert_ne!(copy.effective_id(), join.effective_id());
    }

    #[test]
    fn quality_issues_require_a_score_below_threshold() {
        assert!(!AssetRef::new("a", "A", "table").has_quality_issues());
        assert!(
            !AssetRef::new("a", "A", "table")
                .with_quality_score(80.0)
                .has_quality_issues()
        );
        assert!(
            AssetRef::new("a", "A", "table")
                .with_quality_score(79.9)
                .has_quality_issues()
        );
    }

    #[test]
    fn asset_deserializes_with_optional_fields_missing() {
        let json = r#"{"id":"orders","name":"Orders","type":"table"}"#;
        let asset: AssetRef = serde_json::from_str(json).unwrap();
        assert_eq!(asset.id.as_str(), "orders");
        assert_eq!(asset.asset_type, "table");
        assert!(!asset.critical);
        assert!(asset.tags.is_empty());
    }

    #[test]
    fn unknown_edge_kind_maps_to_other() {
        let json = r#"{"source":"a","target":"b","kind":"replication","confidence":0.7}"#;
        let edge: LineageEdge = serde_json::from_str(json).unwrap();
        assert_eq!(edge.kind, EdgeKind::Other);
        assert_eq!(edge.strength, RelationshipStrength::Strong);
    }

    #[test]
    fn validate_rejects_out_of_range_values() {
        assert!(AssetRef::new("a", "A", "table").validate().is_ok());
        assert!(AssetRef::new(" ", "A", "table").validate().is_err());
        assert!(
            AssetRef::new("a", "A", "table")
                .with_quality_score(120.0)
                .validate()
                .is_err()
        );

        let edge = LineageEdge::new("a", "b", EdgeKind::Copy);
        assert!(edge.validate().is_ok());
        assert!(
            edge.clone()
                .with_confidence(1.5, RelationshipStrength::Weak)
                .validate()
                .is_err()
        );
        assert!(LineageEdge::new("", "b", EdgeKind::Copy).validate().is_err());
    }
}
