use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum GraphError {
    #[error("Invalid task ID: {0}")]
    InvalidId(String),

    #[error("Task ID already exists: {0}")]
    DuplicateId(String),

    #[error("Task not found: {0}")]
    NotFound(String),

    #[error("Invalid status: {0} (valid: pending, in_progress, done)")]
    InvalidStatus(String),

    #[error("Invalid relationship type: {0} (valid: blocks, relates_to, part_of)")]
    InvalidRelationType(String),
}

#[derive(Error, Debug)]
pub enum PersistError {
    #[error("Failed to read graph file '{path}': {source}")]
    ReadFile {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Failed to write graph file '{path}': {source}")]
    WriteFile {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Malformed graph document: {0}")]
    Malformed(#[from] serde_json::Error),
}
