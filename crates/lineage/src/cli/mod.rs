//! CLI command implementations.

mod display;

pub mod analyze;
pub mod cycles;
pub mod export;
pub mod graph;
pub mod impact;
pub mod suggest;

use std::path::PathBuf;

use anyhow::{Context as _, Result};
use lineage::source::{load_assets, load_edges};
use lineage::{
    AssetCatalog, BuildOptions, Directionality, LineageConfig, LineageEdge, LineageEngine,
    LineageGraph,
};

/// Input locations and overrides shared by every command.
pub struct Sources {
    pub assets: PathBuf,
    pub edges: PathBuf,
    pub config: Option<PathBuf>,
    pub max_depth: Option<usize>,
    pub direction: Option<Directionality>,
}

/// Loaded records and effective settings for a command run.
pub struct Context {
    pub engine: LineageEngine,
    pub catalog: AssetCatalog,
    pub edges: Vec<LineageEdge>,
    pub config: LineageConfig,
    pub options: BuildOptions,
    pub json: bool,
}

impl Context {
    /// Load configuration and records, then apply command-line overrides.
    pub fn load(sources: &Sources, json: bool) -> Result<Self> {
        let config = match &sources.config {
            Some(path) => LineageConfig::load(path)
                .with_context(|| format!("failed to load config {}", path.display()))?,
            None => {
                let cwd = std::env::current_dir().context("failed to get current directory")?;
                LineageConfig::discover(&cwd).context("failed to load lineage.yaml")?
            }
        };

        let (assets, warnings) = load_assets(&sources.assets)
            .with_context(|| format!("failed to load assets from {}", sources.assets.display()))?;
        display::print_load_warnings(&sources.assets, &warnings);

        let (edges, warnings) = load_edges(&sources.edges)
            .with_context(|| format!("failed to load edges from {}", sources.edges.display()))?;
        display::print_load_warnings(&sources.edges, &warnings);

        let mut options = config.traversal.clone();
        if let Some(max_depth) = sources.max_depth {
            options.max_depth = max_depth;
        }
        if let Some(direction) = sources.direction {
            options.directionality = direction;
        }
        options.validate()?;

        Ok(Self {
            engine: LineageEngine::new(),
            catalog: assets.into(),
            edges,
            config,
            options,
            json,
        })
    }

    /// Build the graph rooted at `root` with the effective options.
    pub fn build(&self, root: &str) -> Result<LineageGraph> {
        self.engine
            .build(root, &self.catalog, &self.edges, &self.options)
            .with_context(|| format!("failed to build lineage graph from '{root}'"))
    }
}

/// Print `value` as pretty JSON on stdout.
pub fn print_json<T: serde::Serialize>(value: &T) -> Result<()> {
    let json = serde_json::to_string_pretty(value).context("failed to serialize output")?;
    println!("{json}");
    Ok(())
}
