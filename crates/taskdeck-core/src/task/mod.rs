//! Task domain module.
//!
//! This module contains all task-related domain models, the in-memory
//! board collection, and the remote source interface.
//!
//! # Module Structure
//!
//! - `model`: Core task domain models (`Task`, `TaskStatus`, `TaskPriority`,
//!   `TaskDraft`)
//! - `board`: The in-memory ordered task collection with its derived index
//! - `source`: Remote task source trait

mod model;
pub mod board;
pub mod source;

// Re-export public API
pub use board::TaskBoard;
pub use model::{Task, TaskDraft, TaskPriority, TaskStatus};
pub use source::RemoteTaskSource;
