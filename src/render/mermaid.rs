//! Mermaid flowchart rendering for task graphs.
//!
//! A pure consumer of the graph's query functions; no graph logic lives
//! here. Output is a fenced ```mermaid block suitable for markdown.

use std::collections::BTreeSet;

use crate::graph::{RelationType, Task, TaskGraph, TaskStatus};

/// Display options for [`render_mermaid`].
#[derive(Debug, Clone, Default)]
pub struct RenderOptions {
    /// Highlight ready tasks in green and dim blocked ones.
    pub highlight_ready: bool,

    /// Highlight the downstream closure of this task ID.
    pub highlight_downstream: Option<String>,

    /// Only show pending tasks.
    pub pending_only: bool,
}

/// Render the graph as a Mermaid `graph TD` flowchart.
pub fn render_mermaid(graph: &TaskGraph, options: &RenderOptions) -> String {
    let mut lines = vec!["```mermaid".to_string(), "graph TD".to_string()];

    let visible: Vec<&Task> = graph
        .nodes
        .values()
        .filter(|task| !options.pending_only || task.status == TaskStatus::Pending)
        .collect();

    if visible.is_empty() {
        lines.push("  empty[\"No tasks to display\"]".to_string());
        lines.push("```".to_string());
        return lines.join("\n");
    }

    let visible_ids: BTreeSet<&str> = visible.iter().map(|task| task.id.as_str()).collect();

    let downstream = options
        .highlight_downstream
        .as_deref()
        .filter(|id| graph.nodes.contains_key(*id))
        .map(|id| graph.downstream_tasks(id))
        .unwrap_or_default();

    for task in &visible {
        lines.push(format!(
            "  {}[\"{}\"]",
            sanitize_id(&task.id),
            node_label(task)
        ));
    }

    // Edges only between visible nodes, arrow style per relation type.
    for edge in &graph.edges {
        if !visible_ids.contains(edge.from.as_str()) || !visible_ids.contains(edge.to.as_str()) {
            continue;
        }
        let from = sanitize_id(&edge.from);
        let to = sanitize_id(&edge.to);
        lines.push(match edge.relation {
            RelationType::Blocks => format!("  {} --> {}", from, to),
            RelationType::PartOf => format!("  {} -.-> {}", from, to),
            RelationType::RelatesTo => format!("  {} ~~~ {}", from, to),
        });
    }

    lines.push(String::new());
    lines.extend(style_lines(graph, &visible, options, &downstream));
    lines.push("```".to_string());
    lines.join("\n")
}

/// Label: task ID, estimate when present, status icon.
fn node_label(task: &Task) -> String {
    let icon = match task.status {
        TaskStatus::Done => "✓",
        TaskStatus::InProgress => "⟳",
        TaskStatus::Pending => "○",
    };

    let mut parts = vec![task.id.clone()];
    if let Some(estimate) = task.estimate_hours {
        if estimate > 0.0 {
            parts.push(format!("({}h)", estimate));
        }
    }
    parts.push(format!("[{}]", icon));
    parts.join(" ")
}

/// Mermaid node IDs cannot contain hyphens.
fn sanitize_id(id: &str) -> String {
    id.replace('-', "_")
}

/// classDef styling in three layers, later layers overriding earlier:
/// status colors, then ready/blocked, then downstream highlighting.
fn style_lines(
    graph: &TaskGraph,
    visible: &[&Task],
    options: &RenderOptions,
    downstream: &BTreeSet<String>,
) -> Vec<String> {
    let mut styles = Vec::new();

    let mut done = Vec::new();
    let mut in_progress = Vec::new();
    let mut pending = Vec::new();
    for task in visible {
        let id = sanitize_id(&task.id);
        match task.status {
            TaskStatus::Done => done.push(id),
            TaskStatus::InProgress => in_progress.push(id),
            TaskStatus::Pending => pending.push(id),
        }
    }

    if !done.is_empty() {
        styles.push("  classDef done fill:#90EE90,stroke:#333,stroke-width:2px".to_string());
        styles.push(format!("  class {} done", done.join(",")));
    }
    if !in_progress.is_empty() {
        styles.push("  classDef inProgress fill:#ADD8E6,stroke:#333,stroke-width:2px".to_string());
        styles.push(format!("  class {} inProgress", in_progress.join(",")));
    }
    if !pending.is_empty() {
        styles.push("  classDef pending fill:#F5F5DC,stroke:#333,stroke-width:2px".to_string());
        styles.push(format!("  class {} pending", pending.join(",")));
    }

    if options.highlight_ready {
        let mut ready = Vec::new();
        let mut blocked = Vec::new();
        for task in visible {
            if task.status != TaskStatus::Pending {
                continue;
            }
            if graph.is_blocked(&task.id) {
                blocked.push(sanitize_id(&task.id));
            } else {
                ready.push(sanitize_id(&task.id));
            }
        }

        if !ready.is_empty() {
            styles.push("  classDef ready fill:#98FB98,stroke:#2E7D32,stroke-width:3px".to_string());
            styles.push(format!("  class {} ready", ready.join(",")));
        }
        if !blocked.is_empty() {
            styles.push("  classDef blocked fill:#D3D3D3,stroke:#666,stroke-width:1px".to_string());
            styles.push(format!("  class {} blocked", blocked.join(",")));
        }
    }

    if let Some(highlight) = options.highlight_downstream.as_deref() {
        if !downstream.is_empty() {
            let mut will_unblock = Vec::new();
            let mut still_blocked = Vec::new();

            for id in downstream {
                let Some(task) = visible.iter().find(|task| task.id == *id) else {
                    continue;
                };
                if task.status != TaskStatus::Pending {
                    continue;
                }

                // Would completing the highlighted task unblock this one?
                let unblocked = graph
                    .blocking_dependencies(id)
                    .iter()
                    .all(|dep| dep.is_complete() || dep.id == highlight);

                if unblocked {
                    will_unblock.push(sanitize_id(id));
                } else {
                    still_blocked.push(sanitize_id(id));
                }
            }

            if !will_unblock.is_empty() {
                styles.push(
                    "  classDef willUnblock fill:#00FA9A,stroke:#006400,stroke-width:4px"
                        .to_string(),
                );
                styles.push(format!("  class {} willUnblock", will_unblock.join(",")));
            }
            if !still_blocked.is_empty() {
                styles.push(
                    "  classDef stillBlocked fill:#FFE4B5,stroke:#DAA520,stroke-width:2px"
                        .to_string(),
                );
                styles.push(format!("  class {} stillBlocked", still_blocked.join(",")));
            }
        }
    }

    styles
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graph::TaskPatch;

    fn task(id: &str) -> Task {
        Task {
            id: id.to_string(),
            ..Default::default()
        }
    }

    fn set_status(graph: &mut TaskGraph, id: &str, status: &str) {
        graph
            .update_task(
                id,
                TaskPatch {
                    status: Some(status.to_string()),
                    ..Default::default()
                },
            )
            .unwrap();
    }

    #[test]
    fn test_empty_graph_placeholder() {
        let graph = TaskGraph::new();
        let out = render_mermaid(&graph, &RenderOptions::default());
        assert!(out.contains("empty[\"No tasks to display\"]"));
        assert!(out.starts_with("```mermaid"));
        assert!(out.ends_with("```"));
    }

    #[test]
    fn test_arrow_styles_per_relation_type() {
        let mut graph = TaskGraph::new();
        graph.add_task(task("a")).unwrap();
        graph.add_task(task("b")).unwrap();
        graph.add_task(task("c")).unwrap();
        graph
            .add_relationship("a", "b", RelationType::Blocks)
            .unwrap();
        graph
            .add_relationship("b", "c", RelationType::PartOf)
            .unwrap();
        graph
            .add_relationship("a", "c", RelationType::RelatesTo)
            .unwrap();

        let out = render_mermaid(&graph, &RenderOptions::default());
        assert!(out.contains("  a --> b"));
        assert!(out.contains("  b -.-> c"));
        assert!(out.contains("  a ~~~ c"));
    }

    #[test]
    fn test_hyphens_sanitized_in_node_ids() {
        let mut graph = TaskGraph::new();
        graph.add_task(task("design-api")).unwrap();

        let out = render_mermaid(&graph, &RenderOptions::default());
        assert!(out.contains("design_api[\"design-api [○]\"]"));
    }

    #[test]
    fn test_estimate_in_label() {
        let mut graph = TaskGraph::new();
        graph
            .add_task(Task {
                id: "design-api".to_string(),
                estimate_hours: Some(2.5),
                ..Default::default()
            })
            .unwrap();

        let out = render_mermaid(&graph, &RenderOptions::default());
        assert!(out.contains("design-api (2.5h) [○]"));
    }

    #[test]
    fn test_pending_only_hides_done_and_its_edges() {
        let mut graph = TaskGraph::new();
        graph.add_task(task("a")).unwrap();
        graph.add_task(task("b")).unwrap();
        graph
            .add_relationship("a", "b", RelationType::Blocks)
            .unwrap();
        set_status(&mut graph, "a", "done");

        let options = RenderOptions {
            pending_only: true,
            ..Default::default()
        };
        let out = render_mermaid(&graph, &options);
        assert!(!out.contains("a[\""));
        assert!(out.contains("b[\""));
        assert!(!out.contains("-->"));
    }

    #[test]
    fn test_ready_blocked_highlighting() {
        let mut graph = TaskGraph::new();
        graph.add_task(task("a")).unwrap();
        graph.add_task(task("b")).unwrap();
        graph
            .add_relationship("a", "b", RelationType::Blocks)
            .unwrap();

        let options = RenderOptions {
            highlight_ready: true,
            pending_only: true,
            ..Default::default()
        };
        let out = render_mermaid(&graph, &options);
        assert!(out.contains("class a ready"));
        assert!(out.contains("class b blocked"));
    }

    #[test]
    fn test_downstream_highlighting() {
        let mut graph = TaskGraph::new();
        for id in ["a", "b", "c", "d"] {
            graph.add_task(task(id)).unwrap();
        }
        // a blocks b and c; d also blocks c, so b will unblock but c won't.
        graph
            .add_relationship("a", "b", RelationType::Blocks)
            .unwrap();
        graph
            .add_relationship("a", "c", RelationType::Blocks)
            .unwrap();
        graph
            .add_relationship("d", "c", RelationType::Blocks)
            .unwrap();

        let options = RenderOptions {
            highlight_downstream: Some("a".to_string()),
            pending_only: true,
            ..Default::default()
        };
        let out = render_mermaid(&graph, &options);
        assert!(out.contains("class b willUnblock"));
        assert!(out.contains("class c stillBlocked"));
    }
}
