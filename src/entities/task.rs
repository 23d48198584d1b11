//! Task entity and related types.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::errors::TaskError;

/// Task priority levels
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum TaskPriority {
    Low,
    #[default]
    Medium,
    High,
}

impl std::fmt::Display for TaskPriority {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Low => write!(f, "low"),
            Self::Medium => write!(f, "medium"),
            Self::High => write!(f, "high"),
        }
    }
}

impl std::str::FromStr for TaskPriority {
    type Err = TaskError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "low" => Ok(Self::Low),
            "medium" | "med" => Ok(Self::Medium),
            "high" => Ok(Self::High),
            _ => Err(TaskError::Validation {
                reason: format!("invalid priority: '{s}'"),
            }),
        }
    }
}

/// Core task structure
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Task {
    /// Unique identifier (UUID v4)
    pub id: String,

    /// Brief, descriptive title
    pub title: String,

    /// Free-text description; the source for priority inference
    #[serde(default)]
    pub description: String,

    /// Derived priority, assigned once at creation
    #[serde(default)]
    pub priority: TaskPriority,

    /// Whether the task is done
    #[serde(default)]
    pub completed: bool,

    /// Accumulated work time in whole minutes; never decreases
    #[serde(default)]
    pub time_spent_minutes: u64,

    /// Start instant of the currently running work interval, if any
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub timer_started_at: Option<DateTime<Utc>>,

    /// Owner reference
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_by: Option<String>,

    pub created_at: DateTime<Utc>,

    pub updated_at: DateTime<Utc>,
}

impl Task {
    /// Create a new task with a freshly generated id
    pub fn new(
        title: impl Into<String>,
        description: impl Into<String>,
        priority: TaskPriority,
    ) -> Self {
        let now = Utc::now();
        Self {
            id: Uuid::new_v4().to_string(),
            title: title.into(),
            description: description.into(),
            priority,
            completed: false,
            time_spent_minutes: 0,
            timer_started_at: None,
            created_by: None,
            created_at: now,
            updated_at: now,
        }
    }

    /// Whether a work interval is currently being tracked
    pub fn timer_running(&self) -> bool {
        self.timer_started_at.is_some()
    }
}
