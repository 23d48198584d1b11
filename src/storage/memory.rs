//! In-memory task storage.

use std::collections::HashMap;

use async_trait::async_trait;
use tokio::sync::RwLock;

use crate::entities::Task;
use crate::errors::{TaskError, TaskResult};

use super::Storage;

/// Task store backed by a process-local map.
#[derive(Default)]
pub struct MemoryStorage {
    tasks: RwLock<HashMap<String, Task>>,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl Storage for MemoryStorage {
    async fn create_task(&self, task: Task) -> TaskResult<Task> {
        let mut tasks = self.tasks.write().await;
        if tasks.contains_key(&task.id) {
            return Err(TaskError::Storage {
                reason: format!("task id collision: '{}'", task.id),
            });
        }
        tasks.insert(task.id.clone(), task.clone());
        Ok(task)
    }

    async fn get_task(&self, task_id: &str) -> TaskResult<Option<Task>> {
        Ok(self.tasks.read().await.get(task_id).cloned())
    }

    async fn save_task(&self, task: &Task) -> TaskResult<Task> {
        let mut tasks = self.tasks.write().await;
        if !tasks.contains_key(&task.id) {
            return Err(TaskError::TaskNotFound {
                task_id: task.id.clone(),
            });
        }
        tasks.insert(task.id.clone(), task.clone());
        Ok(task.clone())
    }

    async fn list_tasks(&self) -> TaskResult<Vec<Task>> {
        let mut tasks: Vec<Task> = self.tasks.read().await.values().cloned().collect();
        tasks.sort_by(|a, b| a.created_at.cmp(&b.created_at).then(a.id.cmp(&b.id)));
        Ok(tasks)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::entities::TaskPriority;

    #[tokio::test]
    async fn test_create_and_get() {
        let storage = MemoryStorage::new();
        let task = Task::new("Test", "", TaskPriority::Medium);
        let created = storage.create_task(task.clone()).await.unwrap();
        assert_eq!(created.id, task.id);

        let loaded = storage.get_task(&task.id).await.unwrap();
        assert_eq!(loaded.unwrap().title, "Test");
    }

    #[tokio::test]
    async fn test_get_missing_returns_none() {
        let storage = MemoryStorage::new();
        assert!(storage.get_task("nope").await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_save_replaces_fields() {
        let storage = MemoryStorage::new();
        let mut task = Task::new("Test", "", TaskPriority::Medium);
        storage.create_task(task.clone()).await.unwrap();

        task.time_spent_minutes = 5;
        storage.save_task(&task).await.unwrap();

        let loaded = storage.get_task(&task.id).await.unwrap().unwrap();
        assert_eq!(loaded.time_spent_minutes, 5);
    }

    #[tokio::test]
    async fn test_save_unknown_task_fails() {
        let storage = MemoryStorage::new();
        let task = Task::new("Test", "", TaskPriority::Medium);
        let err = storage.save_task(&task).await.unwrap_err();
        assert!(matches!(err, TaskError::TaskNotFound { .. }));
    }

    #[tokio::test]
    async fn test_list_orders_by_creation() {
        let storage = MemoryStorage::new();
        let first = Task::new("First", "", TaskPriority::Medium);
        let second = Task::new("Second", "", TaskPriority::Medium);
        storage.create_task(first.clone()).await.unwrap();
        storage.create_task(second.clone()).await.unwrap();

        let tasks = storage.list_tasks().await.unwrap();
        assert_eq!(tasks.len(), 2);
        assert!(tasks[0].created_at <= tasks[1].created_at);
    }
}
