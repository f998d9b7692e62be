//! Lineage CLI - asset lineage analysis from the command line.
//!
//! Loads asset and edge records from JSON or JSONL files, builds a lineage
//! graph around a root asset and reports on it.

use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Parser, Subcommand};
use colored::Colorize;
use lineage::{ChangeType, Directionality, ExportFormat};
use tracing_subscriber::EnvFilter;

mod cli;

/// Lineage: graph analysis over data asset lineage.
#[derive(Parser)]
#[command(name = "lineage")]
#[command(version, about, long_about = None)]
#[command(propagate_version = true)]
struct Cli {
    /// Asset records (.json array or .jsonl)
    #[arg(long, global = true, default_value = "assets.json")]
    assets: PathBuf,

    /// Lineage edge records (.json array or .jsonl)
    #[arg(long, global = true, default_value = "edges.json")]
    edges: PathBuf,

    /// Configuration file (defaults to ./lineage.yaml when present)
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    /// Maximum traversal depth (overrides the configuration)
    #[arg(long, global = true)]
    max_depth: Option<usize>,

    /// Traversal direction: upstream, downstream or both
    #[arg(long, global = true)]
    direction: Option<Directionality>,

    /// Print results as JSON
    #[arg(long, global = true)]
    json: bool,

    /// Verbose output (can be repeated: -v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Build the lineage graph around an asset and list its nodes
    Graph {
        /// Root asset ID
        root: String,
    },

    /// Analyze structure, metrics and quality of the graph
    Analyze {
        /// Root asset ID
        root: String,
    },

    /// Assess the impact of changing an asset
    Impact {
        /// Asset being changed
        target: String,

        /// Root to build the graph from (defaults to the target)
        #[arg(short, long)]
        root: Option<String>,

        /// Kind of change: schema, data, location or access
        #[arg(short = 't', long)]
        change_type: Option<ChangeType>,
    },

    /// Detect circular dependencies
    Cycles {
        /// Root asset ID
        root: String,
    },

    /// Suggest optimizations for the graph
    Suggest {
        /// Root asset ID
        root: String,
    },

    /// Render the graph as Graphviz DOT or Mermaid
    Export {
        /// Root asset ID
        root: String,

        /// Output format: dot or mermaid
        #[arg(short, long, default_value = "dot")]
        format: ExportFormat,
    },
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let filter = match cli.verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(filter)),
        )
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    let sources = cli::Sources {
        assets: cli.assets,
        edges: cli.edges,
        config: cli.config,
        max_depth: cli.max_depth,
        direction: cli.direction,
    };

    let result = cli::Context::load(&sources, cli.json).and_then(|ctx| match cli.command {
        Commands::Graph { root } => cli::graph::run(&ctx, &root),
        Commands::Analyze { root } => cli::analyze::run(&ctx, &root),
        Commands::Impact {
            target,
            root,
            change_type,
        } => cli::impact::run(&ctx, &target, root.as_deref(), change_type),
        Commands::Cycles { root } => cli::cycles::run(&ctx, &root),
        Commands::Suggest { root } => cli::suggest::run(&ctx, &root),
        Commands::Export { root, format } => cli::export::run(&ctx, &root, format),
    });

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("{}: {e}", "error".red().bold());
            for cause in e.chain().skip(1) {
                eprintln!("  {}: {cause}", "caused by".dimmed());
            }
            ExitCode::FAILURE
        }
    }
}
