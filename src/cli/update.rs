//! CLI handler for the `update` subcommand
//!
//! Applies partial updates to existing tasks from a JSON payload.

use std::path::Path;

use anyhow::{bail, Context, Result};

use crate::cli::payload::UpdatePayload;
use crate::cli::PayloadArgs;
use crate::error::GraphError;
use crate::graph::TaskStatus;
use crate::persist;

pub fn execute(args: PayloadArgs) -> Result<()> {
    let payload: UpdatePayload =
        serde_json::from_str(&args.json).context("Invalid JSON payload")?;

    if payload.tasks.is_empty() {
        bail!("JSON must contain a 'tasks' array");
    }

    let root = Path::new(".");
    let mut graph = persist::load_graph(root)?;

    // Check every target and status string before patching anything.
    for entry in &payload.tasks {
        if !graph.nodes.contains_key(&entry.id) {
            return Err(GraphError::NotFound(entry.id.clone()).into());
        }
        if let Some(status) = entry.patch.status.as_deref() {
            status.parse::<TaskStatus>()?;
        }
    }

    let count = payload.tasks.len();
    for entry in payload.tasks {
        graph.update_task(&entry.id, entry.patch)?;
    }

    persist::save_graph(root, &graph)?;
    println!("Updated {} task(s)", count);
    Ok(())
}
