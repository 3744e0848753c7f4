//! The task graph store: owns all tasks and relationships, enforces
//! invariants, and round-trips to a single JSON document.

use std::collections::BTreeMap;

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::error::{GraphError, PersistError};
use crate::graph::relationship::{RelationType, Relationship};
use crate::graph::task::{validate_task_id, ChecklistItem, Task, TaskStatus};

/// A directed graph of tasks, persisted wholesale as one JSON document
/// with top-level `nodes` (id -> task) and `edges` (ordered list).
///
/// `nodes` is a `BTreeMap` so iteration, traversal, and serialization are
/// deterministic. Edge order is preserved as inserted.
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize, JsonSchema)]
pub struct TaskGraph {
    #[serde(default)]
    pub nodes: BTreeMap<String, Task>,

    #[serde(default)]
    pub edges: Vec<Relationship>,
}

/// Partial update for a task. Only supplied fields are applied; the rest
/// keep their prior values.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct TaskPatch {
    #[serde(default)]
    pub description: Option<String>,

    /// Status as its wire string; parsed before any field is applied.
    #[serde(default)]
    pub status: Option<String>,

    #[serde(default)]
    pub acceptance_criteria: Option<Vec<String>>,

    #[serde(default)]
    pub checklist: Option<Vec<ChecklistItem>>,

    #[serde(default)]
    pub estimate_hours: Option<f64>,
}

impl TaskGraph {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get_task(&self, id: &str) -> Option<&Task> {
        self.nodes.get(id)
    }

    /// Insert a new task. Fails if the ID violates the naming policy or is
    /// already present; the store is unchanged on failure.
    pub fn add_task(&mut self, task: Task) -> Result<(), GraphError> {
        validate_task_id(&task.id)?;

        if self.nodes.contains_key(&task.id) {
            return Err(GraphError::DuplicateId(task.id));
        }

        self.nodes.insert(task.id.clone(), task);
        Ok(())
    }

    /// Apply a partial update. A bad status string fails the whole call
    /// before any field is touched.
    pub fn update_task(&mut self, id: &str, patch: TaskPatch) -> Result<(), GraphError> {
        let status = match patch.status.as_deref() {
            Some(s) => Some(s.parse::<TaskStatus>()?),
            None => None,
        };

        let task = self
            .nodes
            .get_mut(id)
            .ok_or_else(|| GraphError::NotFound(id.to_string()))?;

        if let Some(description) = patch.description {
            task.description = description;
        }
        if let Some(status) = status {
            task.status = status;
        }
        if let Some(criteria) = patch.acceptance_criteria {
            task.acceptance_criteria = criteria;
        }
        if let Some(checklist) = patch.checklist {
            task.checklist = checklist;
        }
        if let Some(estimate) = patch.estimate_hours {
            task.estimate_hours = Some(estimate);
        }

        Ok(())
    }

    /// Set a task's status directly. Any transition is accepted, including
    /// reverting a done task.
    pub fn set_status(&mut self, id: &str, status: TaskStatus) -> Result<(), GraphError> {
        let task = self
            .nodes
            .get_mut(id)
            .ok_or_else(|| GraphError::NotFound(id.to_string()))?;
        task.status = status;
        Ok(())
    }

    /// Remove a task and every edge where it is source or target.
    /// Idempotent; returns whether a task was actually removed.
    pub fn delete_task(&mut self, id: &str) -> bool {
        let removed = self.nodes.remove(id).is_some();
        self.edges.retain(|edge| edge.from != id && edge.to != id);
        removed
    }

    /// Add an edge between two existing tasks. An exact (from, to, type)
    /// duplicate is silently ignored.
    pub fn add_relationship(
        &mut self,
        from: &str,
        to: &str,
        relation: RelationType,
    ) -> Result<(), GraphError> {
        if !self.nodes.contains_key(from) {
            return Err(GraphError::NotFound(from.to_string()));
        }
        if !self.nodes.contains_key(to) {
            return Err(GraphError::NotFound(to.to_string()));
        }

        let exists = self
            .edges
            .iter()
            .any(|edge| edge.from == from && edge.to == to && edge.relation == relation);
        if !exists {
            self.edges.push(Relationship {
                from: from.to_string(),
                to: to.to_string(),
                relation,
            });
        }

        Ok(())
    }

    /// Remove edges between a pair: only the matching type when one is
    /// given, all types otherwise. Returns the number removed.
    pub fn delete_relationship(
        &mut self,
        from: &str,
        to: &str,
        relation: Option<RelationType>,
    ) -> usize {
        let before = self.edges.len();
        self.edges.retain(|edge| {
            let pair = edge.from == from && edge.to == to;
            let matched = match relation {
                Some(r) => pair && edge.relation == r,
                None => pair,
            };
            !matched
        });
        before - self.edges.len()
    }

    pub fn to_json(&self) -> Result<String, PersistError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    pub fn from_json(json: &str) -> Result<Self, PersistError> {
        Ok(serde_json::from_str(json)?)
    }
}
