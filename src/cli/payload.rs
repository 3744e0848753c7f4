//! JSON payload types for the write subcommands.
//!
//! `add`, `update`, and `delete` each take one JSON argument shaped as
//! `{"tasks": [...], "relationships": [...]}`. Enum-valued fields arrive
//! as strings and are mapped to the closed enums before anything mutates.

use serde::Deserialize;

use crate::error::GraphError;
use crate::graph::{ChecklistItem, Task, TaskPatch, TaskStatus};

/// Payload for `taskdag add`.
#[derive(Debug, Deserialize)]
pub struct AddPayload {
    #[serde(default)]
    pub tasks: Vec<TaskInput>,

    #[serde(default)]
    pub relationships: Vec<RelationshipInput>,
}

/// A task as supplied on the command line.
#[derive(Debug, Clone, Deserialize)]
pub struct TaskInput {
    pub id: String,

    #[serde(default)]
    pub description: String,

    #[serde(default)]
    pub status: Option<String>,

    #[serde(default)]
    pub acceptance_criteria: Vec<String>,

    #[serde(default)]
    pub checklist: Vec<ChecklistItem>,

    #[serde(default)]
    pub estimate_hours: Option<f64>,
}

impl TaskInput {
    /// Convert into a [`Task`], mapping the status string to the enum.
    pub fn into_task(self) -> Result<Task, GraphError> {
        let status = match self.status.as_deref() {
            Some(s) => s.parse::<TaskStatus>()?,
            None => TaskStatus::default(),
        };

        Ok(Task {
            id: self.id,
            description: self.description,
            status,
            acceptance_criteria: self.acceptance_criteria,
            checklist: self.checklist,
            estimate_hours: self.estimate_hours,
        })
    }
}

/// A relationship as supplied on the command line.
#[derive(Debug, Clone, Deserialize)]
pub struct RelationshipInput {
    pub from: String,

    pub to: String,

    #[serde(rename = "type")]
    pub relation: String,
}

/// Payload for `taskdag update`.
#[derive(Debug, Deserialize)]
pub struct UpdatePayload {
    #[serde(default)]
    pub tasks: Vec<TaskUpdateInput>,
}

/// One task patch with its target ID.
#[derive(Debug, Deserialize)]
pub struct TaskUpdateInput {
    pub id: String,

    #[serde(flatten)]
    pub patch: TaskPatch,
}

/// Payload for `taskdag delete`.
#[derive(Debug, Deserialize)]
pub struct DeletePayload {
    #[serde(default)]
    pub tasks: Vec<String>,

    #[serde(default)]
    pub relationships: Vec<RelationshipDeleteInput>,
}

/// Relationship selector for deletion; without a type, every edge between
/// the pair is removed.
#[derive(Debug, Deserialize)]
pub struct RelationshipDeleteInput {
    pub from: String,

    pub to: String,

    #[serde(rename = "type", default)]
    pub relation: Option<String>,
}
