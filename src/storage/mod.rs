//! Storage trait definitions.

mod memory;

pub use memory::MemoryStorage;

use async_trait::async_trait;

use crate::entities::Task;
use crate::errors::TaskResult;

/// Storage interface for task persistence.
///
/// Implementations need only atomic single-task reads and writes; the
/// service serializes per-task read-modify-write sequences itself.
#[async_trait]
pub trait Storage: Send + Sync {
    /// Persist a new task
    async fn create_task(&self, task: Task) -> TaskResult<Task>;

    /// Load a single task by id
    async fn get_task(&self, task_id: &str) -> TaskResult<Option<Task>>;

    /// Replace an existing task's mutable fields
    async fn save_task(&self, task: &Task) -> TaskResult<Task>;

    /// Load all tasks
    async fn list_tasks(&self) -> TaskResult<Vec<Task>>;
}
