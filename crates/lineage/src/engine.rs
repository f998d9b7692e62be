//! Facade bundling a clock with the analysis entry points.

use crate::advisor::suggest_optimizations;
use crate::analysis::analyze;
use crate::catalog::AssetProvider;
use crate::clock::{Clock, SystemClock};
use crate::domain::{AnalysisResult, ChangeType, ImpactResult, LineageEdge, LineageGraph, Suggestion};
use crate::error::Result;
use crate::graph::build_graph;
use crate::impact::analyze_impact;
use crate::options::BuildOptions;

/// Runs builds and analyses against a fixed clock.
///
/// The free functions ([`build_graph`], [`analyze`], ...) take `now`
/// explicitly; the engine supplies it from its [`Clock`].
///
/// # Example
///
/// ```
/// use lineage::{AssetCatalog, AssetRef, BuildOptions, EdgeKind, LineageEdge, LineageEngine};
///
/// let assets: AssetCatalog = vec![
///     AssetRef::new("orders", "Orders", "table"),
///     AssetRef::new("revenue", "Revenue", "view"),
/// ]
/// .into();
/// let edges = vec![LineageEdge::new("orders", "revenue", EdgeKind::Aggregation)];
///
/// let engine = LineageEngine::new();
/// let graph = engine.build("orders", &assets, &edges, &BuildOptions::default())?;
/// let analysis = engine.analyze(&graph);
///
/// assert_eq!(analysis.total_nodes, 2);
/// # Ok::<(), lineage::Error>(())
/// ```
#[derive(Debug, Clone, Default)]
pub struct LineageEngine<C: Clock = SystemClock> {
    clock: C,
}

impl LineageEngine<SystemClock> {
    /// Engine using wall-clock time
    #[must_use]
    pub fn new() -> Self {
        Self { clock: SystemClock }
    }
}

impl<C: Clock> LineageEngine<C> {
    /// Engine using the given clock
    pub fn with_clock(clock: C) -> Self {
        Self { clock }
    }

    /// The engine's clock
    pub fn clock(&self) -> &C {
        &self.clock
    }

    /// Build a graph. See [`build_graph`].
    ///
    /// # Errors
    ///
    /// See [`build_graph`].
    pub fn build<P: AssetProvider + ?Sized>(
        &self,
        root_id: &str,
        assets: &P,
        edges: &[LineageEdge],
        options: &BuildOptions,
    ) -> Result<LineageGraph> {
        build_graph(root_id, assets, edges, options, self.clock.now())
    }

    /// Analyze a graph. See [`analyze`].
    #[must_use]
    pub fn analyze(&self, graph: &LineageGraph) -> AnalysisResult {
        analyze(graph, self.clock.now())
    }

    /// Assess the impact of changing `target`. See [`analyze_impact`].
    ///
    /// # Errors
    ///
    /// See [`analyze_impact`].
    pub fn impact(
        &self,
        target: &str,
        graph: &LineageGraph,
        change_type: ChangeType,
    ) -> Result<ImpactResult> {
        analyze_impact(target, graph, change_type)
    }

    /// Analyze a graph and derive suggestions from the result.
    #[must_use]
    pub fn suggest(&self, graph: &LineageGraph) -> (AnalysisResult, Vec<Suggestion>) {
        let analysis = self.analyze(graph);
        let suggestions = suggest_optimizations(graph, &analysis);
        (analysis, suggestions)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::AssetCatalog;
    use crate::clock::FixedClock;
    use crate::domain::{AssetRef, EdgeKind};
    use chrono::{Duration, TimeZone, Utc};

    #[test]
    fn fixed_clock_drives_timestamps_and_freshness() {
        let now = Utc.with_ymd_and_hms(2024, 6, 1, 12, 0, 0).unwrap();
        let assets: AssetCatalog = vec![
            AssetRef::new("a", "A", "table").with_last_modified(now - Duration::days(15)),
            AssetRef::new("b", "B", "table").with_last_modified(now),
        ]
        .into();
        let edges = vec![LineageEdge::new("a", "b", EdgeKind::Copy)];

        let engine = LineageEngine::with_clock(FixedClock(now));
        let graph = engine
            .build("a", &assets, &edges, &BuildOptions::default())
            .unwrap();
        let analysis = engine.analyze(&graph);

        assert_eq!(graph.metadata.built_at, now);
        assert!((analysis.metrics.freshness - 0.75).abs() < 1e-9);
    }

    #[test]
    fn suggest_returns_the_analysis_it_used() {
        let assets: AssetCatalog = vec![
            AssetRef::new("a", "A", "table").with_quality_score(30.0),
        ]
        .into();

        let engine = LineageEngine::new();
        let graph = engine
            .build("a", &assets, &[], &BuildOptions::default())
            .unwrap();
        let (analysis, suggestions) = engine.suggest(&graph);

        assert_eq!(analysis.orphaned_nodes.len(), 1);
        assert_eq!(suggestions.len(), 2);
        assert_eq!(suggestions[0].priority, crate::domain::Priority::Critical);
    }
}
