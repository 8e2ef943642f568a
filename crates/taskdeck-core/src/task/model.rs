//! Task domain model.
//!
//! This module contains the core Task entities and value objects that represent
//! work items on the board (todo/doing/done columns) in the application's
//! domain layer.

use serde::{Deserialize, Serialize};

/// Represents the board column a task currently belongs to.
///
/// Tasks move between these states as the user drags them across columns
/// or edits them through the task dialog.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TaskStatus {
    /// The task has been created but work has not started.
    Todo,
    /// The task is currently being worked on.
    Doing,
    /// The task is finished.
    Done,
}

impl std::fmt::Display for TaskStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TaskStatus::Todo => write!(f, "todo"),
            TaskStatus::Doing => write!(f, "doing"),
            TaskStatus::Done => write!(f, "done"),
        }
    }
}

/// Priority of a task.
///
/// Priority is optional on records; tasks created before the field was
/// introduced simply omit it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TaskPriority {
    Low,
    Medium,
    High,
}

/// A single work item on the board.
///
/// Identity is `id`; ids are assumed unique but uniqueness is never
/// enforced by the system.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Task {
    /// A unique identifier for the task (epoch milliseconds at creation).
    pub id: i64,
    /// Short human-readable title. Required, non-empty.
    pub title: String,
    /// Free-form description. May be empty.
    #[serde(default)]
    pub description: String,
    /// The column this task belongs to.
    pub status: TaskStatus,
    /// Optional priority; absent in some records.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub priority: Option<TaskPriority>,
}

/// Input shape for creating or updating a task.
///
/// This is what the task dialog produces; the remote source turns it into
/// a full [`Task`] record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TaskDraft {
    pub title: String,
    #[serde(default)]
    pub description: String,
    pub status: TaskStatus,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub priority: Option<TaskPriority>,
}

impl TaskDraft {
    /// Creates a draft with the given title and status and no description.
    pub fn new(title: impl Into<String>, status: TaskStatus) -> Self {
        Self {
            title: title.into(),
            description: String::new(),
            status,
            priority: None,
        }
    }

    /// Sets the description.
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    /// Sets the priority.
    pub fn with_priority(mut self, priority: TaskPriority) -> Self {
        self.priority = Some(priority);
        self
    }
}
