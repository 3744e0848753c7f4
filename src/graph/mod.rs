pub mod algo;
pub mod relationship;
pub mod store;
pub mod task;

pub use algo::DanglingEdge;
pub use relationship::{RelationType, Relationship};
pub use store::{TaskGraph, TaskPatch};
pub use task::{validate_task_id, ChecklistItem, Task, TaskStatus};
