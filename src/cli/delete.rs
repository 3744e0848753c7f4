//! CLI handler for the `delete` subcommand
//!
//! Deletes tasks (cascading to their edges) and relationships from a JSON
//! payload. Absent targets are skipped, not errors; the output counts what
//! was actually removed.

use std::path::Path;

use anyhow::{Context, Result};

use crate::cli::payload::DeletePayload;
use crate::cli::PayloadArgs;
use crate::graph::RelationType;
use crate::persist;

pub fn execute(args: PayloadArgs) -> Result<()> {
    let payload: DeletePayload =
        serde_json::from_str(&args.json).context("Invalid JSON payload")?;

    let root = Path::new(".");
    let mut graph = persist::load_graph(root)?;

    let mut deleted_tasks = 0;
    for id in &payload.tasks {
        if graph.delete_task(id) {
            deleted_tasks += 1;
        }
    }

    let mut deleted_rels = 0;
    for rel in &payload.relationships {
        let relation = match rel.relation.as_deref() {
            Some(s) => Some(s.parse::<RelationType>()?),
            None => None,
        };
        deleted_rels += graph.delete_relationship(&rel.from, &rel.to, relation);
    }

    persist::save_graph(root, &graph)?;
    println!(
        "Deleted {} task(s) and {} relationship(s)",
        deleted_tasks, deleted_rels
    );
    Ok(())
}
