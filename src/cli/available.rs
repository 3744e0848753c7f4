//! CLI handler for the `available` subcommand
//!
//! Renders pending tasks as a Mermaid diagram: ready tasks highlighted in
//! green, blocked ones dimmed.

use std::path::Path;

use anyhow::Result;

use crate::persist;
use crate::render::{render_mermaid, RenderOptions};

pub fn execute() -> Result<()> {
    let graph = persist::load_graph(Path::new("."))?;

    if graph.nodes.is_empty() {
        println!("No tasks in graph");
        return Ok(());
    }

    let options = RenderOptions {
        highlight_ready: true,
        pending_only: true,
        ..Default::default()
    };
    println!("{}", render_mermaid(&graph, &options));
    Ok(())
}
