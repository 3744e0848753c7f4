//! CLI handler for the `show` subcommand
//!
//! Detail view of one task: fields, checklist progress, and its blocking
//! relationships in both directions.

use std::path::Path;

use anyhow::Result;

use crate::cli::TaskIdArgs;
use crate::error::GraphError;
use crate::persist;

pub fn execute(args: TaskIdArgs) -> Result<()> {
    let graph = persist::load_graph(Path::new("."))?;

    let Some(task) = graph.get_task(&args.id) else {
        return Err(GraphError::NotFound(args.id).into());
    };

    println!("Task: {}", task.id);
    println!("Status: {}", task.status);

    if !task.description.is_empty() {
        println!("\nDescription:");
        println!("  {}", task.description);
    }

    if let Some(estimate) = task.estimate_hours {
        if estimate > 0.0 {
            println!("\nEstimate: {}h", estimate);
        }
    }

    if !task.acceptance_criteria.is_empty() {
        println!("\nAcceptance Criteria:");
        for (i, criterion) in task.acceptance_criteria.iter().enumerate() {
            println!("  {}. {}", i + 1, criterion);
        }
    }

    if !task.checklist.is_empty() {
        println!("\nChecklist:");
        let (completed, total) = task.checklist_progress();
        println!("  Progress: {}/{}", completed, total);
        for item in &task.checklist {
            let mark = if item.done { "✓" } else { "○" };
            println!("  {} {}", mark, item.item);
        }
    }

    let blockers = graph.blocking_dependencies(&task.id);
    if !blockers.is_empty() {
        println!("\nBlocked by:");
        for blocker in blockers {
            let mark = if blocker.is_complete() { "✓" } else { "○" };
            println!("  {} {} ({})", mark, blocker.id, blocker.status);
        }
    }

    let blocked = graph.blocked_tasks(&task.id);
    if !blocked.is_empty() {
        println!("\nBlocks:");
        for target in blocked {
            println!("  - {} ({})", target.id, target.status);
        }
    }

    Ok(())
}
