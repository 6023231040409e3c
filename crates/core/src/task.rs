//! Production task model - a unit of work attached to one asset.

use crate::id::TaskId;
use crate::Time;
use serde::{Deserialize, Serialize};

/// A checklist item attached to a single video asset.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProductionTask {
    /// Unique identifier (within the parent asset)
    pub id: TaskId,

    /// Task title, non-empty after trimming
    pub title: String,

    /// Current status
    pub status: TaskStatus,

    /// Optional owner
    pub owner: Option<String>,

    /// Optional due date
    pub due: Option<Time>,

    /// Optional free-text notes
    pub notes: Option<String>,

    /// Creation timestamp
    pub created_at: Time,
}

impl ProductionTask {
    /// Create a new task with the given title, status `Todo`.
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            id: TaskId::new(),
            title: title.into(),
            status: TaskStatus::Todo,
            owner: None,
            due: None,
            notes: None,
            created_at: chrono::Utc::now(),
        }
    }
}

/// Status of a production task.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum TaskStatus {
    /// Not started
    Todo,
    /// Being worked on
    InProgress,
    /// Finished
    Done,
}

impl TaskStatus {
    /// Get string representation.
    pub fn as_str(&self) -> &'static str {
        match self {
            TaskStatus::Todo => "todo",
            TaskStatus::InProgress => "in-progress",
            TaskStatus::Done => "done",
        }
    }
}

impl std::fmt::Display for TaskStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
