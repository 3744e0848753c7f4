//! CLI handler for the `complete` subcommand

use std::path::Path;

use anyhow::Result;

use crate::cli::TaskIdArgs;
use crate::graph::TaskStatus;
use crate::persist;

pub fn execute(args: TaskIdArgs) -> Result<()> {
    let root = Path::new(".");
    let mut graph = persist::load_graph(root)?;

    graph.set_status(&args.id, TaskStatus::Done)?;

    persist::save_graph(root, &graph)?;
    println!("Completed task: {}", args.id);
    Ok(())
}
