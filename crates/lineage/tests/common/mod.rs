//! Common fixtures shared across integration tests.

#![allow(dead_code)]

use chrono::{DateTime, TimeZone, Utc};
use lineage::{AssetCatalog, AssetRef, EdgeKind, LineageEdge, RelationshipStrength};

/// Fixed reference instant for freshness-dependent assertions
pub fn now() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2024, 6, 1, 12, 0, 0).unwrap()
}

/// Table T feeds view V, which feeds report R and dashboard D.
///
/// The `V → D` edge is weak (confidence 0.4).
pub fn reporting_pipeline() -> (AssetCatalog, Vec<LineageEdge>) {
    let assets = vec![
        AssetRef::new("T", "Orders table", "table"),
        AssetRef::new("V", "Orders view", "view"),
        AssetRef::new("R", "Revenue report", "report"),
        AssetRef::new("D", "Sales dashboard", "dashboard"),
    ];
    let edges = vec![
        LineageEdge::new("T", "V", EdgeKind::Transformation)
            .with_confidence(0.9, RelationshipStrength::Strong),
        LineageEdge::new("V", "R", EdgeKind::Aggregation)
            .with_confidence(0.85, RelationshipStrength::Strong),
        LineageEdge::new("V", "D", EdgeKind::Filter)
            .with_confidence(0.4, RelationshipStrength::Weak),
    ];
    (assets.into(), edges)
}

/// `n0 → n1 → ... → n{len-1} → n0`
pub fn ring(len: usize) -> (AssetCatalog, Vec<LineageEdge>) {
    let assets: AssetCatalog = (0..len)
        .map(|i| AssetRef::new(format!("n{i}"), format!("Node {i}"), "table"))
        .collect();
    let edges = (0..len)
        .map(|i| {
            LineageEdge::new(
                format!("n{i}"),
                format!("n{}", (i + 1) % len),
                EdgeKind::Copy,
            )
        })
        .collect();
    (assets, edges)
}

/// `n0 → n1 → ... → n{len-1}`
pub fn chain(len: usize) -> (AssetCatalog, Vec<LineageEdge>) {
    let assets: AssetCatalog = (0..len)
        .map(|i| AssetRef::new(format!("n{i}"), format!("Node {i}"), "table"))
        .collect();
    let edges = (1..len)
        .map(|i| LineageEdge::new(format!("n{}", i - 1), format!("n{i}"), EdgeKind::Copy))
        .collect();
    (assets, edges)
}
