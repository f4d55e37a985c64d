//! Task entity, form input and repository errors.
//!
//! A [`Task`] is the single persisted record of the application. Tasks are
//! created from a submitted [`TaskForm`], which is checked for presence of
//! both fields and turned into a [`TaskDraft`] before it reaches storage.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// A stored task.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Task {
    /// Auto-assigned primary key, never reused.
    pub id: i64,
    pub title: String,
    pub description: String,
    /// Moment of insertion. Not touched by updates.
    pub created_at: DateTime<Utc>,
}

/// Raw form fields as posted by the browser.
///
/// The wire names are `title` and `desc`. Both default to an empty string so
/// that a missing field ends up as a validation failure instead of a
/// rejected request.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaskForm {
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub desc: String,
}

impl TaskForm {
    pub fn new(title: &str, desc: &str) -> Self {
        TaskForm {
            title: title.to_string(),
            desc: desc.to_string(),
        }
    }
}

impl From<&Task> for TaskForm {
    fn from(task: &Task) -> Self {
        TaskForm::new(&task.title, &task.description)
    }
}

/// Title and description that passed the presence check.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TaskDraft {
    title: String,
    description: String,
}

impl TaskDraft {
    /// Trims both fields and rejects the first one that ends up empty.
    pub fn new(title: &str, description: &str) -> Result<Self, TaskError> {
        let title = title.trim();
        let description = description.trim();

        if title.is_empty() {
            return Err(TaskError::Validation(TaskField::Title));
        }
        if description.is_empty() {
            return Err(TaskError::Validation(TaskField::Description));
        }

        Ok(TaskDraft {
            title: title.to_string(),
            description: description.to_string(),
        })
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn description(&self) -> &str {
        &self.description
    }
}

/// Required task field, used to report which one failed validation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TaskField {
    Title,
    Description,
}

impl std::fmt::Display for TaskField {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TaskField::Title => write!(f, "title"),
            TaskField::Description => write!(f, "description"),
        }
    }
}

/// Failure of a repository operation.
#[derive(Debug, Error)]
pub enum TaskError {
    #[error("task with id {0} not found")]
    NotFound(i64),
    #[error("task {0} must not be empty")]
    Validation(TaskField),
    #[error("storage error: {0}")]
    Storage(#[from] rusqlite::Error),
}

#[derive(Debug, Clone)]
pub enum TaskFilter {
    All,
    ById(i64),
}
