//! Task nodes and the identifier naming policy.

use std::str::FromStr;
use std::sync::OnceLock;

use regex::Regex;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::error::GraphError;

/// Maximum number of hyphen-separated segments in a task ID.
const MAX_ID_SEGMENTS: usize = 4;

/// Lifecycle status of a task.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, Serialize, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum TaskStatus {
    #[default]
    Pending,
    InProgress,
    Done,
}

impl std::fmt::Display for TaskStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TaskStatus::Pending => write!(f, "pending"),
            TaskStatus::InProgress => write!(f, "in_progress"),
            TaskStatus::Done => write!(f, "done"),
        }
    }
}

impl FromStr for TaskStatus {
    type Err = GraphError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "pending" => Ok(TaskStatus::Pending),
            "in_progress" => Ok(TaskStatus::InProgress),
            "done" => Ok(TaskStatus::Done),
            other => Err(GraphError::InvalidStatus(other.to_string())),
        }
    }
}

/// A single checklist entry on a task.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize, JsonSchema)]
pub struct ChecklistItem {
    pub item: String,

    #[serde(default)]
    pub done: bool,
}

/// A node in the task graph. The ID doubles as the display name.
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize, JsonSchema)]
pub struct Task {
    /// Kebab-case identifier, max 4 segments (e.g. "design-2fa-flow")
    pub id: String,

    #[serde(default)]
    pub description: String,

    #[serde(default)]
    pub status: TaskStatus,

    /// How to verify completion
    #[serde(default)]
    pub acceptance_criteria: Vec<String>,

    #[serde(default)]
    pub checklist: Vec<ChecklistItem>,

    #[serde(default)]
    pub estimate_hours: Option<f64>,
}

impl Task {
    pub fn is_complete(&self) -> bool {
        self.status == TaskStatus::Done
    }

    /// Checklist progress as (completed, total).
    pub fn checklist_progress(&self) -> (usize, usize) {
        let completed = self.checklist.iter().filter(|item| item.done).count();
        (completed, self.checklist.len())
    }
}

fn kebab_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| {
        Regex::new(r"^[a-z0-9]+(-[a-z0-9]+)*$").expect("hard-coded pattern compiles")
    })
}

/// Validate a task ID against the naming policy: kebab-case, lowercase
/// alphanumeric, at most [`MAX_ID_SEGMENTS`] hyphen-separated segments.
pub fn validate_task_id(id: &str) -> Result<(), GraphError> {
    if id != id.to_lowercase() {
        return Err(GraphError::InvalidId(format!(
            "Task ID must be lowercase: '{}'",
            id
        )));
    }

    if id.contains(' ') {
        return Err(GraphError::InvalidId(format!(
            "Task ID must use hyphens, not spaces: '{}'",
            id
        )));
    }

    if !kebab_pattern().is_match(id) {
        return Err(GraphError::InvalidId(format!(
            "Task ID must be kebab-case (lowercase alphanumeric with hyphens): '{}'",
            id
        )));
    }

    let segments = id.split('-').count();
    if segments > MAX_ID_SEGMENTS {
        return Err(GraphError::InvalidId(format!(
            "Task ID has {} words, max {} allowed: '{}'",
            segments, MAX_ID_SEGMENTS, id
        )));
    }

    Ok(())
}
