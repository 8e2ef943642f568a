//! In-memory task collection.
//!
//! [`TaskBoard`] is the single source of truth for rendering: an ordered
//! sequence of tasks (insertion order) plus a derived id-to-position index.
//! The index is rebuilt from the sequence, never independently mutated.

use std::collections::HashMap;

use super::model::{Task, TaskStatus};

/// The central in-memory collection of tasks.
///
/// The board owns its tasks exclusively; durability is delegated to the
/// snapshot store and survives only as long as the process otherwise.
#[derive(Debug, Default)]
pub struct TaskBoard {
    /// Tasks in insertion order.
    tasks: Vec<Task>,
    /// Derived index: task id to position in `tasks`.
    ///
    /// Invariant: equals the map derived from `tasks` immediately after
    /// any call that reads it. With duplicate ids (never enforced away),
    /// the later entry wins, like a map comprehension over the sequence.
    index: HashMap<i64, usize>,
}

impl TaskBoard {
    /// Creates an empty board.
    pub fn new() -> Self {
        Self::default()
    }

    /// Replaces the entire sequence with `records` and rebuilds the index.
    ///
    /// No shape validation happens here; whatever the source produced is
    /// what the presentation layer will see.
    pub fn load_from_source(&mut self, records: Vec<Task>) {
        self.tasks = records;
        self.rebuild_index();
    }

    /// Appends a task to the sequence and indexes it.
    pub fn insert(&mut self, task: Task) {
        let id = task.id;
        self.tasks.push(task);
        self.index.insert(id, self.tasks.len() - 1);
    }

    /// Overwrites title/description/status of the task with `updated.id`
    /// in place, found via the index.
    ///
    /// Priority is intentionally not copied back; the update path has
    /// never carried it (see the remote source stubs).
    ///
    /// Returns `false` if no task with that id exists.
    pub fn apply_update(&mut self, updated: &Task) -> bool {
        let Some(&pos) = self.index.get(&updated.id) else {
            return false;
        };
        let task = &mut self.tasks[pos];
        task.title = updated.title.clone();
        task.description = updated.description.clone();
        task.status = updated.status;
        true
    }

    /// Removes the first sequence entry matching `id` and drops it from
    /// the index.
    ///
    /// Returns `false` if no matching entry existed.
    pub fn remove(&mut self, id: i64) -> bool {
        let Some(pos) = self.tasks.iter().position(|t| t.id == id) else {
            return false;
        };
        self.tasks.remove(pos);
        // Positions after `pos` shifted; rebuild keeps the index honest.
        self.rebuild_index();
        true
    }

    /// Clears and repopulates the id-to-position index from the current
    /// sequence. Idempotent.
    ///
    /// Must be called after any bulk replace of the sequence and before
    /// any index lookup.
    pub fn rebuild_index(&mut self) {
        self.index.clear();
        for (pos, task) in self.tasks.iter().enumerate() {
            self.index.insert(task.id, pos);
        }
    }

    /// Looks up a task by id via the index.
    pub fn get(&self, id: i64) -> Option<&Task> {
        self.index.get(&id).map(|&pos| &self.tasks[pos])
    }

    /// Returns the tasks in insertion order.
    pub fn tasks(&self) -> &[Task] {
        &self.tasks
    }

    /// Returns the tasks belonging to one column, preserving order.
    pub fn by_status(&self, status: TaskStatus) -> Vec<&Task> {
        self.tasks.iter().filter(|t| t.status == status).collect()
    }

    /// Number of tasks on the board.
    pub fn len(&self) -> usize {
        self.tasks.len()
    }

    /// Whether the board holds no tasks.
    pub fn is_empty(&self) -> bool {
        self.tasks.is_empty()
    }
}
