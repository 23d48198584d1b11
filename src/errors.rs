//! Error types for the taskpulse crate.

use thiserror::Error;

/// Error types for task management and priority inference
#[derive(Error, Debug, Clone)]
pub enum TaskError {
    // Input errors
    #[error("Validation failed: {reason}")]
    Validation { reason: String },

    // Task errors
    #[error("Task '{task_id}' not found")]
    TaskNotFound { task_id: String },

    #[error("Timer for task '{task_id}' has not been started")]
    TimerNotStarted { task_id: String },

    // Classifier errors
    #[error("Priority model has not been trained yet")]
    ModelNotReady,

    #[error("Cannot train priority model on an empty example set")]
    EmptyTrainingSet,

    // Storage errors
    #[error("Storage error: {reason}")]
    Storage { reason: String },
}

/// Result type alias for taskpulse operations
pub type TaskResult<T> = Result<T, TaskError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = TaskError::TaskNotFound {
            task_id: "123".to_string(),
        };
        assert_eq!(err.to_string(), "Task '123' not found");
    }

    #[test]
    fn test_timer_error_display() {
        let err = TaskError::TimerNotStarted {
            task_id: "abc".to_string(),
        };
        assert!(err.to_string().contains("has not been started"));
    }
}
