//! Core data structures for task management.

mod task;

pub use task::{Task, TaskPriority};
