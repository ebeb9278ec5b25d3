use thiserror::Error;

use super::recurrence::{RecurrenceDraft, RecurrenceRule};
use super::task::Task;

/// The one user-visible validation in the crate; everything else is
/// fail-soft.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum FormError {
    #[error("task name is required")]
    EmptySummary,
}

impl FormError {
    /// Dialog message in the card's two display languages.
    pub fn localized_message(&self, language: &str) -> &'static str {
        match self {
            Self::EmptySummary => {
                if language.starts_with("es") {
                    "El nombre de la tarea es obligatorio"
                } else {
                    "Task name is required"
                }
            }
        }
    }
}

/// Edit-dialog state for a single task: the task fields plus the recurrence
/// sub-form. Field values stay raw strings until save.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TaskDraft {
    pub completed: bool,
    pub summary: String,
    pub description: String,
    pub due: String,
    pub recurrence: RecurrenceDraft,
}

impl TaskDraft {
    /// Hydrate the dialog for editing an existing task, with its stored
    /// recurrence rule if one exists.
    pub fn from_task(task: &Task, rule: Option<&RecurrenceRule>) -> Self {
        Self {
            completed: task.status.is_completed(),
            summary: task.summary.clone(),
            description: task.description.clone().unwrap_or_default(),
            due: task.due.clone().unwrap_or_default(),
            recurrence: RecurrenceDraft::from_rule(rule),
        }
    }

    pub fn validate(&self) -> Result<(), FormError> {
        if self.summary.trim().is_empty() {
            return Err(FormError::EmptySummary);
        }
        Ok(())
    }
}
