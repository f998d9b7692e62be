//! `lineage export` command implementation.

use anyhow::Result;
use lineage::ExportFormat;
use lineage::export::render;

use super::Context;

/// Run the export command. The rendering goes to stdout; `--json` is ignored.
pub fn run(ctx: &Context, root: &str, format: ExportFormat) -> Result<()> {
    let graph = ctx.build(root)?;
    print!("{}", render(&graph, format));
    Ok(())
}
