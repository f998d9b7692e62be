//! Lineage - asset lineage graph construction and analysis.
//!
//! Given a catalog of data assets and the directed lineage edges between
//! them, this crate builds a depth-bounded graph around a root asset, lays it
//! out for rendering, and answers questions about it:
//!
//! - structure and quality metrics ([`analyze`])
//! - circular dependencies ([`find_cycles`])
//! - long dependency chains ([`find_critical_paths`])
//! - blast radius of a change ([`analyze_impact`])
//! - prioritized improvements ([`suggest_optimizations`])
//!
//! Everything runs synchronously on data the caller already holds. Results
//! are plain serde-serializable values.

#![forbid(unsafe_code)]

pub mod advisor;
pub mod analysis;
pub mod catalog;
pub mod clock;
pub mod config;
pub mod domain;
pub mod engine;
pub mod error;
pub mod export;
pub mod graph;
pub mod impact;
pub mod options;
pub mod source;

pub(crate) mod path_id;

pub use advisor::suggest_optimizations;
pub use analysis::{analyze, find_critical_paths, find_cycles};
pub use catalog::{AssetCatalog, AssetProvider};
pub use clock::{Clock, FixedClock, SystemClock};
pub use config::LineageConfig;
pub use domain::{
    AnalysisResult, AssetId, AssetRef, ChangeType, EdgeKind, ImpactResult, LineageEdge,
    LineageGraph, LineageNode, LineagePath, PathDirection, Priority, RelationshipStrength,
    Suggestion,
};
pub use engine::LineageEngine;
pub use error::{Error, Result};
pub use export::ExportFormat;
pub use graph::{assign_positions, build_graph};
pub use impact::analyze_impact;
pub use options::{BuildOptions, Directionality};
pub use source::LoadWarning;
