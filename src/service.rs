//! Task service orchestrating priority inference, timers, and storage.

use std::collections::HashMap;
use std::sync::Arc;

use chrono::Utc;
use tokio::sync::Mutex;
use tracing::{debug, info};

use crate::entities::Task;
use crate::errors::{TaskError, TaskResult};
use crate::priority::PriorityResolver;
use crate::storage::Storage;
use crate::timer::WorkTimer;

/// Result of a stop-timer operation.
#[derive(Debug, Clone)]
pub struct StopOutcome {
    /// The task after the stop transition was persisted
    pub task: Task,
    /// Minutes added to the accumulator by this stop
    pub elapsed_minutes: u64,
}

/// High-level task operations: create-task, start-timer, stop-timer.
pub struct TaskService {
    storage: Arc<dyn Storage>,
    resolver: PriorityResolver,
    /// Per-task-id locks serializing timer read-modify-write sequences, so
    /// concurrent stops cannot both read the same start instant and
    /// double-count elapsed time.
    ///
    /// Entries are never removed; this assumes tasks are never deleted. A
    /// delete operation would need to evict the task's lock here too.
    timer_locks: Mutex<HashMap<String, Arc<Mutex<()>>>>,
}

impl TaskService {
    pub fn new(storage: Arc<dyn Storage>, resolver: PriorityResolver) -> Self {
        Self {
            storage,
            resolver,
            timer_locks: Mutex::new(HashMap::new()),
        }
    }

    /// Create a task, inferring its priority from the description.
    ///
    /// The title must be non-empty; the priority is assigned exactly once
    /// here and never re-derived. Nothing is persisted when validation or
    /// priority resolution fails.
    pub async fn create_task(
        &self,
        title: &str,
        description: &str,
        created_by: Option<String>,
    ) -> TaskResult<Task> {
        let title = title.trim();
        if title.is_empty() {
            return Err(TaskError::Validation {
                reason: "title must not be empty".to_string(),
            });
        }

        let priority = self.resolver.resolve(description)?;

        let mut task = Task::new(title, description, priority);
        task.created_by = created_by;
        let task = self.storage.create_task(task).await?;

        info!(
            task_id = %task.id,
            priority = %task.priority,
            "Task created"
        );
        Ok(task)
    }

    /// Load a task by id.
    pub async fn get_task(&self, task_id: &str) -> TaskResult<Task> {
        self.storage
            .get_task(task_id)
            .await?
            .ok_or_else(|| TaskError::TaskNotFound {
                task_id: task_id.to_string(),
            })
    }

    /// List all tasks in creation order.
    pub async fn list_tasks(&self) -> TaskResult<Vec<Task>> {
        self.storage.list_tasks().await
    }

    /// Start (or re-arm) the work timer on a task.
    pub async fn start_timer(&self, task_id: &str) -> TaskResult<Task> {
        let lock = self.timer_lock(task_id).await;
        let _guard = lock.lock().await;

        let mut task = self.get_task(task_id).await?;
        let was_running = task.timer_running();
        WorkTimer::start(&mut task, Utc::now());
        let task = self.storage.save_task(&task).await?;

        if was_running {
            debug!(task_id = %task.id, "Timer re-armed while running");
        }
        info!(task_id = %task.id, "Timer started");
        Ok(task)
    }

    /// Stop the work timer and accumulate the elapsed minutes.
    pub async fn stop_timer(&self, task_id: &str) -> TaskResult<StopOutcome> {
        let lock = self.timer_lock(task_id).await;
        let _guard = lock.lock().await;

        let mut task = self.get_task(task_id).await?;
        let elapsed_minutes = WorkTimer::stop(&mut task, Utc::now())?;
        let task = self.storage.save_task(&task).await?;

        info!(
            task_id = %task.id,
            elapsed_minutes,
            total_minutes = task.time_spent_minutes,
            "Timer stopped"
        );
        Ok(StopOutcome {
            task,
            elapsed_minutes,
        })
    }

    async fn timer_lock(&self, task_id: &str) -> Arc<Mutex<()>> {
        let mut locks = self.timer_locks.lock().await;
        locks
            .entry(task_id.to_string())
            .or_insert_with(|| Arc::new(Mutex::new(())))
            .clone()
    }
}
