//! Loading and saving the graph file.
//!
//! The graph lives at `.taskdag/graph.json` under the working directory.
//! Saves go through a temp file in the same directory followed by an atomic
//! rename, so a reader never observes a partially written document.

use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

use tempfile::NamedTempFile;
use tracing::debug;

use crate::error::PersistError;
use crate::graph::TaskGraph;

const GRAPH_DIR: &str = ".taskdag";
const GRAPH_FILE: &str = "graph.json";

pub fn graph_path(root: &Path) -> PathBuf {
    root.join(GRAPH_DIR).join(GRAPH_FILE)
}

/// Load the graph under `root`, or an empty graph if none was saved yet.
pub fn load_graph(root: &Path) -> Result<TaskGraph, PersistError> {
    let path = graph_path(root);
    if !path.exists() {
        debug!("no graph file at {}, starting empty", path.display());
        return Ok(TaskGraph::new());
    }

    let content = fs::read_to_string(&path).map_err(|e| PersistError::ReadFile {
        path: path.clone(),
        source: e,
    })?;
    TaskGraph::from_json(&content)
}

/// Save the graph under `root`, creating `.taskdag/` if needed.
pub fn save_graph(root: &Path, graph: &TaskGraph) -> Result<(), PersistError> {
    let dir = root.join(GRAPH_DIR);
    fs::create_dir_all(&dir).map_err(|e| PersistError::WriteFile {
        path: dir.clone(),
        source: e,
    })?;

    let path = dir.join(GRAPH_FILE);
    let json = graph.to_json()?;

    let mut tmp = NamedTempFile::new_in(&dir).map_err(|e| PersistError::WriteFile {
        path: path.clone(),
        source: e,
    })?;
    tmp.write_all(json.as_bytes())
        .map_err(|e| PersistError::WriteFile {
            path: path.clone(),
            source: e,
        })?;
    tmp.persist(&path).map_err(|e| PersistError::WriteFile {
        path: path.clone(),
        source: e.error,
    })?;

    debug!("saved {} tasks to {}", graph.nodes.len(), path.display());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graph::Task;

    #[test]
    fn test_load_missing_is_empty() {
        let dir = tempfile::tempdir().unwrap();
        let graph = load_graph(dir.path()).unwrap();
        assert!(graph.nodes.is_empty());
        assert!(graph.edges.is_empty());
    }

    #[test]
    fn test_save_load_round_trip() {
        let dir = tempfile::tempdir().unwrap();

        let mut graph = TaskGraph::new();
        graph
            .add_task(Task {
                id: "design-api".to_string(),
                description: "Sketch the endpoints".to_string(),
                ..Default::default()
            })
            .unwrap();
        save_graph(dir.path(), &graph).unwrap();

        let restored = load_graph(dir.path()).unwrap();
        assert_eq!(restored, graph);
    }

    #[test]
    fn test_save_overwrites_previous() {
        let dir = tempfile::tempdir().unwrap();

        let mut graph = TaskGraph::new();
        graph
            .add_task(Task {
                id: "first".to_string(),
                ..Default::default()
            })
            .unwrap();
        save_graph(dir.path(), &graph).unwrap();

        graph.delete_task("first");
        save_graph(dir.path(), &graph).unwrap();

        let restored = load_graph(dir.path()).unwrap();
        assert!(restored.nodes.is_empty());
    }

    #[test]
    fn test_load_malformed_errors() {
        let dir = tempfile::tempdir().unwrap();
        fs::create_dir_all(dir.path().join(GRAPH_DIR)).unwrap();
        fs::write(graph_path(dir.path()), "{not json").unwrap();

        let err = load_graph(dir.path()).unwrap_err();
        assert!(matches!(err, PersistError::Malformed(_)));
    }
}
