//! Read-only graph algorithms: cycle detection, readiness, closures.
//!
//! Everything here operates on an immutable [`TaskGraph`] snapshot and is
//! consumed by the `validate`, `show`, `available`, and `after` views.

use std::collections::{BTreeSet, HashSet, VecDeque};

use crate::graph::relationship::{RelationType, Relationship};
use crate::graph::store::TaskGraph;
use crate::graph::task::{Task, TaskStatus};

/// An edge referencing at least one task ID missing from the store.
#[derive(Debug)]
pub struct DanglingEdge<'a> {
    pub edge: &'a Relationship,
    pub missing_source: bool,
    pub missing_target: bool,
}

/// One frame of the explicit-stack depth-first cycle search.
struct Frame {
    node: String,
    /// The path from the traversal root to this node, own copy per branch.
    path: Vec<String>,
    /// Index into the edge list where the scan for this node resumes.
    next_edge: usize,
}

impl TaskGraph {
    /// Tasks that must reach `done` before `id` is unblocked.
    pub fn blocking_dependencies(&self, id: &str) -> Vec<&Task> {
        self.edges
            .iter()
            .filter(|edge| edge.relation == RelationType::Blocks && edge.to == id)
            .filter_map(|edge| self.nodes.get(&edge.from))
            .collect()
    }

    /// Tasks that `id` blocks.
    pub fn blocked_tasks(&self, id: &str) -> Vec<&Task> {
        self.edges
            .iter()
            .filter(|edge| edge.relation == RelationType::Blocks && edge.from == id)
            .filter_map(|edge| self.nodes.get(&edge.to))
            .collect()
    }

    /// True iff any blocking dependency of `id` is not done. A task with
    /// no blocking dependencies is never blocked.
    pub fn is_blocked(&self, id: &str) -> bool {
        self.blocking_dependencies(id)
            .iter()
            .any(|dep| !dep.is_complete())
    }

    /// Every pending task paired with its readiness (`true` when nothing
    /// blocks it).
    pub fn available_tasks(&self) -> Vec<(&Task, bool)> {
        self.nodes
            .values()
            .filter(|task| task.status == TaskStatus::Pending)
            .map(|task| (task, !self.is_blocked(&task.id)))
            .collect()
    }

    /// Transitive closure over outgoing `blocks` edges from `id`: the task
    /// IDs that completing `id` would eventually unblock. `id` itself is
    /// only included when a cycle leads back to it.
    pub fn downstream_tasks(&self, id: &str) -> BTreeSet<String> {
        let mut downstream = BTreeSet::new();
        let mut visited: HashSet<&str> = HashSet::new();
        let mut queue: VecDeque<&str> = VecDeque::new();
        queue.push_back(id);

        while let Some(current) = queue.pop_front() {
            if !visited.insert(current) {
                continue;
            }

            for edge in &self.edges {
                if edge.from == current && edge.relation == RelationType::Blocks {
                    downstream.insert(edge.to.clone());
                    queue.push_back(&edge.to);
                }
            }
        }

        downstream
    }

    /// Cycles among `blocks` edges, detection only.
    ///
    /// Depth-first from every not-yet-visited task in map iteration order,
    /// using an explicit frame stack so graph size never threatens the call
    /// stack. Each branch explores a copy of the current path; hitting a
    /// node already on the recursion stack records the path subsequence
    /// from that node's first occurrence, closed by repeating it. A cycle
    /// reachable through several entry paths is reported once per path.
    pub fn detect_cycles(&self) -> Vec<Vec<String>> {
        let mut cycles: Vec<Vec<String>> = Vec::new();
        let mut visited: HashSet<String> = HashSet::new();
        let mut on_stack: HashSet<String> = HashSet::new();

        for root in self.nodes.keys() {
            if visited.contains(root.as_str()) {
                continue;
            }

            visited.insert(root.clone());
            on_stack.insert(root.clone());
            let mut stack = vec![Frame {
                node: root.clone(),
                path: vec![root.clone()],
                next_edge: 0,
            }];

            while let Some(top) = stack.last_mut() {
                let mut next = None;
                for (i, edge) in self.edges.iter().enumerate().skip(top.next_edge) {
                    if edge.from == top.node && edge.relation == RelationType::Blocks {
                        next = Some((i, edge));
                        break;
                    }
                }

                let Some((i, edge)) = next else {
                    // Exhausted this node: leave the recursion stack.
                    on_stack.remove(&top.node);
                    stack.pop();
                    continue;
                };
                top.next_edge = i + 1;

                let neighbor = edge.to.as_str();
                if !visited.contains(neighbor) {
                    let mut path = top.path.clone();
                    path.push(edge.to.clone());
                    visited.insert(edge.to.clone());
                    on_stack.insert(edge.to.clone());
                    stack.push(Frame {
                        node: edge.to.clone(),
                        path,
                        next_edge: 0,
                    });
                } else if on_stack.contains(neighbor) {
                    if let Some(start) = top.path.iter().position(|n| n == neighbor) {
                        let mut cycle: Vec<String> = top.path[start..].to_vec();
                        cycle.push(edge.to.clone());
                        cycles.push(cycle);
                    }
                }
            }
        }

        cycles
    }

    /// Task IDs with no incident relationship of any type.
    pub fn find_orphans(&self) -> Vec<String> {
        let mut connected: HashSet<&str> = HashSet::new();
        for edge in &self.edges {
            connected.insert(edge.from.as_str());
            connected.insert(edge.to.as_str());
        }

        self.nodes
            .keys()
            .filter(|id| !connected.contains(id.as_str()))
            .cloned()
            .collect()
    }

    /// Edges whose source and/or target task is absent from the store.
    /// Deserialization keeps such edges so `validate` can report them.
    pub fn dangling_edges(&self) -> Vec<DanglingEdge<'_>> {
        self.edges
            .iter()
            .filter_map(|edge| {
                let missing_source = !self.nodes.contains_key(&edge.from);
                let missing_target = !self.nodes.contains_key(&edge.to);
                (missing_source || missing_target).then_some(DanglingEdge {
                    edge,
                    missing_source,
                    missing_target,
                })
            })
            .collect()
    }
}
