//! CLI handler for the `validate` subcommand
//!
//! Reports integrity issues (cycles, orphans, invalid IDs, dangling edges)
//! without repairing anything. Exits 1 when any issue is found.

use std::path::Path;

use anyhow::Result;

use crate::error::GraphError;
use crate::graph::validate_task_id;
use crate::persist;

pub fn execute() -> Result<()> {
    let graph = persist::load_graph(Path::new("."))?;

    let mut issues: Vec<String> = Vec::new();

    let cycles = graph.detect_cycles();
    if !cycles.is_empty() {
        issues.push(format!("Found {} cycle(s):", cycles.len()));
        for (i, cycle) in cycles.iter().enumerate() {
            issues.push(format!("  {}. {}", i + 1, cycle.join(" → ")));
        }
    }

    let orphans = graph.find_orphans();
    if !orphans.is_empty() {
        issues.push(format!(
            "\nFound {} orphaned task(s) (no relationships):",
            orphans.len()
        ));
        for orphan in &orphans {
            issues.push(format!("  - {}", orphan));
        }
    }

    let invalid_ids: Vec<(&String, GraphError)> = graph
        .nodes
        .keys()
        .filter_map(|id| validate_task_id(id).err().map(|e| (id, e)))
        .collect();
    if !invalid_ids.is_empty() {
        issues.push(format!(
            "\nFound {} task(s) with invalid IDs:",
            invalid_ids.len()
        ));
        for (id, error) in &invalid_ids {
            issues.push(format!("  - {}: {}", id, error));
        }
    }

    let dangling = graph.dangling_edges();
    if !dangling.is_empty() {
        issues.push(format!(
            "\nFound {} broken relationship(s):",
            dangling.len()
        ));
        for d in &dangling {
            let side = if d.missing_source {
                "source missing"
            } else {
                "target missing"
            };
            issues.push(format!("  - {} → {} ({})", d.edge.from, d.edge.to, side));
        }
    }

    if issues.is_empty() {
        println!("Validation PASSED: Graph is healthy");
        println!("  - {} tasks", graph.nodes.len());
        println!("  - {} relationships", graph.edges.len());
        println!("  - No cycles, orphans, or integrity issues");
        Ok(())
    } else {
        println!("Validation FAILED:\n");
        println!("{}", issues.join("\n"));
        std::process::exit(1);
    }
}
