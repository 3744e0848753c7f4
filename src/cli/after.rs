//! CLI handler for the `after` subcommand
//!
//! Renders what completing a task would unblock, transitively, as a
//! Mermaid diagram over the pending tasks.

use std::path::Path;

use anyhow::Result;

use crate::cli::TaskIdArgs;
use crate::error::GraphError;
use crate::persist;
use crate::render::{render_mermaid, RenderOptions};

pub fn execute(args: TaskIdArgs) -> Result<()> {
    let graph = persist::load_graph(Path::new("."))?;

    if !graph.nodes.contains_key(&args.id) {
        return Err(GraphError::NotFound(args.id).into());
    }

    let options = RenderOptions {
        highlight_downstream: Some(args.id),
        pending_only: true,
        ..Default::default()
    };
    println!("{}", render_mermaid(&graph, &options));
    Ok(())
}
