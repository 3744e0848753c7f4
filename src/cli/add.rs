//! CLI handler for the `add` subcommand
//!
//! Adds tasks and relationships from a JSON payload. The whole payload is
//! validated before anything is applied, so one bad entry leaves the graph
//! untouched.

use std::collections::BTreeSet;
use std::path::Path;

use anyhow::{bail, Context, Result};
use tracing::debug;

use crate::cli::payload::AddPayload;
use crate::cli::PayloadArgs;
use crate::error::GraphError;
use crate::graph::{validate_task_id, RelationType, TaskStatus};
use crate::persist;

pub fn execute(args: PayloadArgs) -> Result<()> {
    let payload: AddPayload =
        serde_json::from_str(&args.json).context("Invalid JSON payload")?;

    if payload.tasks.is_empty() && payload.relationships.is_empty() {
        bail!("JSON must contain 'tasks' and/or 'relationships'");
    }

    let root = Path::new(".");
    let mut graph = persist::load_graph(root)?;
    debug!("loaded graph with {} tasks", graph.nodes.len());

    // Validate the entire payload before applying any of it.
    let mut known_ids: BTreeSet<String> = graph.nodes.keys().cloned().collect();
    for task in &payload.tasks {
        validate_task_id(&task.id)?;
        if !known_ids.insert(task.id.clone()) {
            return Err(GraphError::DuplicateId(task.id.clone()).into());
        }
        if let Some(status) = task.status.as_deref() {
            status.parse::<TaskStatus>()?;
        }
    }

    for rel in &payload.relationships {
        if !known_ids.contains(&rel.from) {
            return Err(GraphError::NotFound(rel.from.clone()).into());
        }
        if !known_ids.contains(&rel.to) {
            return Err(GraphError::NotFound(rel.to.clone()).into());
        }
        rel.relation.parse::<RelationType>()?;
    }

    let task_count = payload.tasks.len();
    let rel_count = payload.relationships.len();

    for task in payload.tasks {
        graph.add_task(task.into_task()?)?;
    }
    for rel in payload.relationships {
        let relation = rel.relation.parse::<RelationType>()?;
        graph.add_relationship(&rel.from, &rel.to, relation)?;
    }

    persist::save_graph(root, &graph)?;
    println!(
        "Added {} task(s) and {} relationship(s)",
        task_count, rel_count
    );
    Ok(())
}
