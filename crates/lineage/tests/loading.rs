//! Integration tests for loading records and configuration from disk.

mod common;

use std::fs;
use std::io::Write;

use lineage::source::{load_assets, load_edges};
use lineage::{
    BuildOptions, ChangeType, Directionality, FixedClock, LineageConfig, LineageEngine,
    LoadWarning,
};
use tempfile::NamedTempFile;

use common::now;

// =============================================================================
// Test Helpers
// =============================================================================

fn temp_file_with(suffix: &str, content: &str) -> NamedTempFile {
    let mut file = tempfile::Builder::new()
        .suffix(suffix)
        .tempfile()
        .expect("Failed to create temp file");
    file.write_all(content.as_bytes())
        .expect("Failed to write to temp file");
    file.flush().expect("Failed to flush temp file");
    file
}

const ASSETS_JSONL: &str = r#"{"id":"raw","name":"Raw events","type":"table","quality_score":72.0,"critical":true}
{"id":"clean","name":"Clean events","type":"view"}
this line is not json
{"id":"pii","name":"Customers","type":"personal_data_table","department":"crm"}
"#;

const EDGES_JSON: &str = r#"[
    {"source":"raw","target":"clean","kind":"filter","confidence":0.9},
    {"source":"pii","target":"clean","kind":"join","strength":"weak"},
    {"source":"clean","target":"ghost","kind":"copy"}
]"#;

// =============================================================================
// Record loading
// =============================================================================

#[test]
fn loaded_records_build_a_graph() {
    let assets_file = temp_file_with(".jsonl", ASSETS_JSONL);
    let edges_file = temp_file_with(".json", EDGES_JSON);

    let (assets, asset_warnings) = load_assets(assets_file.path()).unwrap();
    let (edges, edge_warnings) = load_edges(edges_file.path()).unwrap();

    assert_eq!(assets.len(), 3);
    assert_eq!(asset_warnings.len(), 1);
    assert!(matches!(
        asset_warnings[0],
        LoadWarning::MalformedJson { line_number: 3, .. }
    ));
    assert_eq!(edges.len(), 3);
    assert!(edge_warnings.is_empty());

    let engine = LineageEngine::with_clock(FixedClock(now()));
    let catalog: lineage::AssetCatalog = assets.into();
    let graph = engine
        .build("clean", &catalog, &edges, &BuildOptions::default())
        .unwrap();

    // "ghost" is not in the catalog, so its edge is skipped
    assert_eq!(graph.node_count(), 3);
    assert_eq!(graph.edge_count(), 2);

    let raw = graph.node("raw").unwrap();
    assert!(raw.is_critical);
    assert!(raw.has_quality_issues);
}

#[test]
fn regulated_assets_raise_compliance_risk() {
    let assets_file = temp_file_with(".jsonl", ASSETS_JSONL);
    let edges_file = temp_file_with(".json", EDGES_JSON);
    let (assets, _) = load_assets(assets_file.path()).unwrap();
    let (edges, _) = load_edges(edges_file.path()).unwrap();
    let catalog: lineage::AssetCatalog = assets.into();

    let engine = LineageEngine::with_clock(FixedClock(now()));
    let graph = engine
        .build("clean", &catalog, &edges, &BuildOptions::default())
        .unwrap();
    let impact = engine.impact("clean", &graph, ChangeType::Access).unwrap();

    assert_eq!(impact.total_impacted(), 2);
    assert!((impact.risk.compliance - 0.5).abs() < 1e-9);
    assert!((impact.risk.business_impact - 0.5).abs() < 1e-9);
    assert!((impact.risk.data_quality - 0.5).abs() < 1e-9);
    assert!((impact.risk.overall - 0.5).abs() < 1e-9);
    assert!(impact.recommendations.is_empty());
}

// =============================================================================
// Configuration
// =============================================================================

#[test]
fn config_file_supplies_traversal_defaults() {
    let dir = tempfile::tempdir().unwrap();
    fs::write(
        dir.path().join(lineage::config::CONFIG_FILE_NAME),
        "traversal:\n  max-depth: 2\n  directionality: upstream\n  exclude-types: [dashboard]\nchange-type: location\n",
    )
    .unwrap();

    let config = LineageConfig::discover(dir.path()).unwrap();

    assert_eq!(config.traversal.max_depth, 2);
    assert_eq!(config.traversal.directionality, Directionality::Upstream);
    assert_eq!(config.traversal.exclude_types, vec!["dashboard".to_string()]);
    assert_eq!(config.change_type, ChangeType::Location);
}

#[test]
fn unknown_config_values_are_rejected() {
    let result = LineageConfig::from_yaml("traversal:\n  directionality: sideways\n");
    assert!(matches!(result, Err(lineage::Error::Config(_))));
}
