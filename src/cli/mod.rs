pub mod add;
pub mod after;
pub mod available;
pub mod complete;
pub mod delete;
pub mod payload;
pub mod schema;
pub mod show;
pub mod start;
pub mod update;
pub mod validate;

use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(name = "taskdag")]
#[command(
    author,
    version,
    about = "Task graph planner with dependency tracking and Mermaid diagrams"
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Enable verbose/debug logging
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Add tasks and relationships from a JSON payload
    Add(PayloadArgs),

    /// Update task fields from a JSON payload
    Update(PayloadArgs),

    /// Delete tasks and relationships from a JSON payload
    Delete(PayloadArgs),

    /// Mark a task as in_progress
    Start(TaskIdArgs),

    /// Mark a task as done
    Complete(TaskIdArgs),

    /// Check graph health: cycles, orphans, and integrity issues
    Validate,

    /// Show detailed information about a task
    Show(TaskIdArgs),

    /// Show pending tasks with ready/blocked status (Mermaid diagram)
    Available,

    /// Show downstream tasks after completing a task (Mermaid diagram)
    After(TaskIdArgs),

    /// Print the JSON Schema of the graph document
    Schema,
}

#[derive(Parser, Clone)]
pub struct PayloadArgs {
    /// JSON payload, e.g. '{"tasks": [{"id": "design-api"}]}'
    #[arg(value_name = "JSON")]
    pub json: String,
}

#[derive(Parser, Clone)]
pub struct TaskIdArgs {
    /// Task ID
    #[arg(value_name = "TASK_ID")]
    pub id: String,
}
