//! Task and subtask model.
//!
//! # Responsibility
//! - Model the central task record with nested subtasks.
//! - Carry the manual sort position and creation timestamp used by sorting.
//!
//! # Invariants
//! - `id` is stable for the task lifetime and never reused.
//! - `name` is non-empty at creation; empty inputs are rejected upstream.
//! - Subtasks have no lifecycle outside their parent task.

use crate::model::list::ListId;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Stable identifier of a task.
pub type TaskId = Uuid;

/// Identifier of a subtask, unique within its parent task.
pub type SubtaskId = Uuid;

/// A checklist item nested inside a task.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Subtask {
    pub id: SubtaskId,
    pub name: String,
    pub completed: bool,
}

impl Subtask {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4(),
            name: name.into(),
            completed: false,
        }
    }
}

/// A single task, owned by exactly one list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Task {
    pub id: TaskId,
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    pub completed: bool,
    /// Back-reference to the owning list (`ListId::All` for unfiled tasks).
    pub list_id: ListId,
    #[serde(default)]
    pub subtasks: Vec<Subtask>,
    /// Unix epoch milliseconds.
    pub created_at: i64,
    /// Manual sort position; ties are resolved by stored order.
    #[serde(default)]
    pub order: i64,
}

impl Task {
    /// Creates a task with defaults for completion and subtasks.
    ///
    /// An empty description is stored as `None` rather than an empty string.
    pub fn new(
        list_id: ListId,
        name: impl Into<String>,
        description: &str,
        created_at: i64,
        order: i64,
    ) -> Self {
        let description = description.trim();
        Self {
            id: Uuid::new_v4(),
            name: name.into(),
            description: (!description.is_empty()).then(|| description.to_string()),
            completed: false,
            list_id,
            subtasks: Vec::new(),
            created_at,
            order,
        }
    }

    /// Completed and total subtask counts, in that order.
    pub fn subtask_progress(&self) -> (usize, usize) {
        let done = self.subtasks.iter().filter(|sub| sub.completed).count();
        (done, self.subtasks.len())
    }
}
