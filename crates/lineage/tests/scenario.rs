//! End-to-end analysis of small, hand-built lineage graphs.

mod common;

use chrono::Duration;
use lineage::{
    AssetCatalog, AssetRef, BuildOptions, ChangeType, Directionality, EdgeKind, Error,
    LineageEdge, PathDirection, Priority, analyze, analyze_impact, build_graph,
    find_critical_paths, find_cycles, suggest_optimizations,
};
use rstest::rstest;

use common::{chain, now, reporting_pipeline, ring};

// =============================================================================
// Reporting pipeline
// =============================================================================

mod reporting_pipeline_tests {
    use super::*;
    use lineage::LineageGraph;
    use lineage::domain::QualityIssueKind;

    fn downstream_from_root() -> LineageGraph {
        let (assets, edges) = reporting_pipeline();
        let options = BuildOptions::default().with_directionality(Directionality::Downstream);
        build_graph("T", &assets, &edges, &options, now()).unwrap()
    }

    #[test]
    fn depths_follow_the_pipeline() {
        let graph = downstream_from_root();

        let depths: Vec<(&str, usize)> = graph
            .nodes
            .iter()
            .map(|n| (n.id.as_str(), n.depth))
            .collect();
        assert_eq!(depths, vec![("T", 0), ("V", 1), ("R", 2), ("D", 2)]);
        assert_eq!(graph.edge_count(), 3);
        assert_eq!(graph.metadata.max_depth, 2);
        assert_eq!(graph.metadata.built_at, now());
    }

    #[test]
    fn schema_change_to_root_reaches_every_consumer() {
        let graph = downstream_from_root();

        let impact = analyze_impact("T", &graph, ChangeType::Schema).unwrap();

        let direct: Vec<&str> = impact.direct_impacts.iter().map(|id| id.as_str()).collect();
        let indirect: Vec<&str> = impact
            .indirect_impacts
            .iter()
            .map(|id| id.as_str())
            .collect();
        assert_eq!(direct, vec!["V"]);
        assert_eq!(indirect, vec!["R", "D"]);
        assert_eq!(impact.impact_radius, 2);
        assert!((impact.criticality_score - 0.2).abs() < 1e-9);
        assert!(
            impact
                .recommendations
                .iter()
                .any(|r| r.contains("schema compatibility"))
        );
    }

    #[test]
    fn weak_dashboard_edge_is_low_confidence_lineage() {
        let graph = downstream_from_root();

        let analysis = analyze(&graph, now());

        assert_eq!(analysis.quality_issues.len(), 1);
        let issue = &analysis.quality_issues[0];
        assert_eq!(issue.kind, QualityIssueKind::LowConfidenceLineage);
        assert_eq!(issue.severity, Priority::Low);
        let affected: Vec<&str> = issue.affected_nodes.iter().map(|id| id.as_str()).collect();
        assert_eq!(affected, vec!["V", "D"]);
    }

    #[test]
    fn data_change_has_no_recommendations() {
        let (assets, edges) = reporting_pipeline();
        let graph = build_graph("T", &assets, &edges, &BuildOptions::default(), now()).unwrap();

        let impact = analyze_impact("T", &graph, ChangeType::Data).unwrap();

        assert!(impact.recommendations.is_empty());
        assert_eq!(impact.risk.overall, 0.0);
    }

    #[test]
    fn impact_target_must_be_in_graph() {
        let (assets, edges) = reporting_pipeline();
        let graph = build_graph("T", &assets, &edges, &BuildOptions::default(), now()).unwrap();

        let result = analyze_impact("missing", &graph, ChangeType::Data);

        assert!(matches!(result, Err(Error::AssetNotFound(_))));
    }

    #[test]
    fn analysis_finds_one_critical_path_and_no_cycles() {
        let (assets, edges) = reporting_pipeline();
        let graph = build_graph("T", &assets, &edges, &BuildOptions::default(), now()).unwrap();

        let analysis = analyze(&graph, now());

        assert_eq!(analysis.total_nodes, 4);
        assert_eq!(analysis.total_edges, 3);
        assert_eq!(analysis.max_depth, 2);
        assert!((analysis.avg_depth - 1.25).abs() < 1e-9);
        assert!(analysis.circular_dependencies.is_empty());
        assert!(analysis.orphaned_nodes.is_empty());

        let paths: Vec<Vec<&str>> = analysis
            .critical_paths
            .iter()
            .map(|p| p.nodes.iter().map(|id| id.as_str()).collect())
            .collect();
        assert_eq!(paths, vec![vec!["T", "V", "R"]]);
    }

    #[test]
    fn upstream_build_from_leaf_reaches_sources_only() {
        let (assets, edges) = reporting_pipeline();
        let options = BuildOptions::default().with_directionality(Directionality::Upstream);
        let graph = build_graph("R", &assets, &edges, &options, now()).unwrap();

        let ids: Vec<&str> = graph.nodes.iter().map(|n| n.id.as_str()).collect();
        assert_eq!(ids, vec!["R", "V", "T"]);
        assert!(!graph.contains("D"));
    }

    #[test]
    fn excluded_types_leave_no_dangling_edges() {
        let (assets, edges) = reporting_pipeline();
        let options = BuildOptions {
            exclude_types: vec!["view".to_string()],
            ..BuildOptions::default()
        };
        let graph = build_graph("T", &assets, &edges, &options, now()).unwrap();

        assert_eq!(graph.node_count(), 1);
        assert_eq!(graph.edge_count(), 0);
    }
}

// =============================================================================
// Cycles
// =============================================================================

mod cycle_tests {
    use super::*;

    #[test]
    fn triangle_yields_one_circular_path() {
        let (assets, edges) = ring(3);
        let graph = build_graph("n0", &assets, &edges, &BuildOptions::default(), now()).unwrap();

        let cycles = find_cycles(&graph);

        assert_eq!(cycles.len(), 1);
        let cycle = &cycles[0];
        assert_eq!(cycle.direction, PathDirection::Circular);
        assert!(cycle.is_critical);
        assert_eq!(cycle.length, 3);
        assert_eq!(cycle.edges.len(), 3);
        for id in ["n0", "n1", "n2"] {
            assert!(cycle.contains(id));
        }
    }

    #[test]
    fn cycle_ids_are_stable_across_builds() {
        let (assets, edges) = ring(4);
        let first = build_graph("n0", &assets, &edges, &BuildOptions::default(), now()).unwrap();
        let second = build_graph("n0", &assets, &edges, &BuildOptions::default(), now()).unwrap();

        assert_eq!(find_cycles(&first)[0].id, find_cycles(&second)[0].id);
    }

    #[test]
    fn analysis_reports_cycles() {
        let (assets, edges) = ring(3);
        let graph = build_graph("n0", &assets, &edges, &BuildOptions::default(), now()).unwrap();

        let analysis = analyze(&graph, now());

        assert_eq!(analysis.circular_dependencies.len(), 1);
    }
}

// =============================================================================
// Critical paths
// =============================================================================

#[rstest]
#[case(2, 0)]
#[case(3, 1)]
#[case(6, 1)]
fn chains_become_critical_once_long_enough(#[case] len: usize, #[case] expected: usize) {
    let (assets, edges) = chain(len);
    let graph = build_graph("n0", &assets, &edges, &BuildOptions::default(), now()).unwrap();

    let paths = find_critical_paths(&graph);

    assert_eq!(paths.len(), expected);
    if let Some(path) = paths.first() {
        assert_eq!(path.length, len);
        assert_eq!(path.direction, PathDirection::Downstream);
    }
}

#[test]
fn max_depth_truncates_chain() {
    let (assets, edges) = chain(8);
    let options = BuildOptions::default().with_max_depth(3);
    let graph = build_graph("n0", &assets, &edges, &options, now()).unwrap();

    assert_eq!(graph.node_count(), 4);
    assert_eq!(graph.edge_count(), 3);
    assert!(graph.nodes.iter().all(|n| n.depth <= 3));
}

// =============================================================================
// Quality and suggestions
// =============================================================================

#[test]
fn quality_problems_surface_as_critical_suggestion() {
    let assets: AssetCatalog = vec![
        AssetRef::new("src", "Source", "table")
            .with_quality_score(40.0)
            .with_last_modified(now() - Duration::days(90)),
        AssetRef::new("dst", "Destination", "table").with_quality_score(95.0),
        AssetRef::new("lonely", "Lonely", "table"),
    ]
    .into();
    let edges = vec![
        LineageEdge::new("src", "dst", EdgeKind::Copy)
            .with_confidence(0.3, lineage::RelationshipStrength::Weak),
    ];
    let graph = build_graph("src", &assets, &edges, &BuildOptions::default(), now()).unwrap();

    let analysis = analyze(&graph, now());
    assert_eq!(analysis.quality_issues.len(), 3);
    assert!((analysis.metrics.reliability - 0.675).abs() < 1e-9);

    let suggestions = suggest_optimizations(&graph, &analysis);
    assert_eq!(suggestions.len(), 1);
    assert_eq!(suggestions[0].priority, Priority::Critical);
    assert_eq!(suggestions[0].affected_assets.len(), 2);
}

#[test]
fn unscored_graph_has_default_reliability() {
    let (assets, edges) = reporting_pipeline();
    let graph = build_graph("T", &assets, &edges, &BuildOptions::default(), now()).unwrap();

    let analysis = analyze(&graph, now());

    assert_eq!(analysis.metrics.reliability, 0.5);
    assert_eq!(analysis.metrics.freshness, 0.0);
    assert_eq!(analysis.metrics.coverage, 1.0);
}
