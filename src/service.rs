//! Payload shapes for the host's task-mutation service calls.
//!
//! The crate builds these; the presentation layer issues the actual calls.
//! Key names are fixed by the host schema, so every payload serializes with
//! explicit omission rules: an absent `Option` drops the key entirely, and
//! the update payload distinguishes "keep the stored value" (key absent)
//! from "clear it" (explicit `null`).

use serde::Serialize;

use crate::core::form::TaskDraft;
use crate::core::recurrence::{parse_positive, EndType, RecurrenceDraft, RecurrenceUnit};
use crate::core::task::TaskStatus;

/// Service domain the host registers the task services under.
pub const DOMAIN: &str = "hearth";

pub const SERVICE_CREATE_TASK: &str = "create_task";
pub const SERVICE_UPDATE_TASK: &str = "update_task";
pub const SERVICE_DELETE_TASK: &str = "delete_task";
pub const SERVICE_MOVE_TASK: &str = "move_task";
pub const SERVICE_SET_TASK_RECURRENCE: &str = "set_task_recurrence";

/// The recurrence half of a `set_task_recurrence` call.
///
/// Disablement is the minimal `{task_uid, recurrence_enabled: false}` shape;
/// when enabled, the end fields appear only if the end condition is on, and
/// exactly one of count/date is populated.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RecurrencePayload {
    pub task_uid: String,
    pub recurrence_enabled: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub recurrence_interval: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub recurrence_unit: Option<RecurrenceUnit>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub recurrence_end_enabled: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub recurrence_end_type: Option<EndType>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub recurrence_end_count: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub recurrence_end_date: Option<String>,
}

impl RecurrencePayload {
    /// The explicit disable shape. Disabling is a service call, not a
    /// delete.
    pub fn disable(task_uid: impl Into<String>) -> Self {
        Self {
            task_uid: task_uid.into(),
            recurrence_enabled: false,
            recurrence_interval: None,
            recurrence_unit: None,
            recurrence_end_enabled: None,
            recurrence_end_type: None,
            recurrence_end_count: None,
            recurrence_end_date: None,
        }
    }

    /// Build the payload from the dialog's recurrence sub-form. Pure and
    /// total: malformed numeric input falls back to 1 instead of failing the
    /// save.
    pub fn from_draft(task_uid: impl Into<String>, draft: &RecurrenceDraft) -> Self {
        if !draft.enabled {
            return Self::disable(task_uid);
        }

        let mut payload = Self {
            task_uid: task_uid.into(),
            recurrence_enabled: true,
            recurrence_interval: Some(parse_positive(&draft.interval, 1)),
            recurrence_unit: Some(draft.unit),
            recurrence_end_enabled: Some(draft.end_enabled),
            recurrence_end_type: None,
            recurrence_end_count: None,
            recurrence_end_date: None,
        };

        if draft.end_enabled {
            payload.recurrence_end_type = Some(draft.end_type);
            match draft.end_type {
                EndType::Count => {
                    payload.recurrence_end_count = Some(parse_positive(&draft.end_count, 1));
                }
                EndType::Date => {
                    // Pass-through; the storing backend validates the date
                    payload.recurrence_end_date = Some(draft.end_date.clone());
                }
            }
        }

        payload
    }
}

/// Full `set_task_recurrence` call body.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SetRecurrencePayload {
    pub entity_id: String,
    #[serde(flatten)]
    pub recurrence: RecurrencePayload,
}

impl SetRecurrencePayload {
    pub fn new(entity_id: impl Into<String>, recurrence: RecurrencePayload) -> Self {
        Self {
            entity_id: entity_id.into(),
            recurrence,
        }
    }
}

/// `create_task` call body. Optional fields are omitted when the form left
/// them empty; the backend fills nothing in for them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CreateTaskPayload {
    pub entity_id: String,
    pub summary: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub due: Option<String>,
}

impl CreateTaskPayload {
    pub fn from_draft(entity_id: impl Into<String>, draft: &TaskDraft) -> Self {
        Self {
            entity_id: entity_id.into(),
            summary: draft.summary.trim().to_string(),
            description: non_empty(&draft.description),
            due: non_empty(&draft.due),
        }
    }
}

/// `update_task` call body with patch semantics: an absent key keeps the
/// stored value, an explicit `null` clears it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct UpdateTaskPayload {
    pub entity_id: String,
    pub uid: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub summary: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<Option<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub due: Option<Option<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<TaskStatus>,
}

impl UpdateTaskPayload {
    /// Dialog save: every field is present, with cleared description/due
    /// serialized as explicit `null`.
    pub fn from_draft(
        entity_id: impl Into<String>,
        uid: impl Into<String>,
        draft: &TaskDraft,
    ) -> Self {
        let status = if draft.completed {
            TaskStatus::Completed
        } else {
            TaskStatus::NeedsAction
        };
        Self {
            entity_id: entity_id.into(),
            uid: uid.into(),
            summary: Some(draft.summary.trim().to_string()),
            description: Some(non_empty(&draft.description)),
            due: Some(non_empty(&draft.due)),
            status: Some(status),
        }
    }

    /// Checkbox toggle: only the status key is sent.
    pub fn set_status(
        entity_id: impl Into<String>,
        uid: impl Into<String>,
        status: TaskStatus,
    ) -> Self {
        Self {
            entity_id: entity_id.into(),
            uid: uid.into(),
            summary: None,
            description: None,
            due: None,
            status: Some(status),
        }
    }
}

/// `delete_task` call body; the host schema takes a uid batch.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DeleteTaskPayload {
    pub entity_id: String,
    pub uid: Vec<String>,
}

impl DeleteTaskPayload {
    pub fn single(entity_id: impl Into<String>, uid: impl Into<String>) -> Self {
        Self {
            entity_id: entity_id.into(),
            uid: vec![uid.into()],
        }
    }
}

/// `move_task` call body; `previous_uid` absent moves the task to the top.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MoveTaskPayload {
    pub entity_id: String,
    pub uid: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub previous_uid: Option<String>,
}

fn non_empty(raw: &str) -> Option<String> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_string())
    }
}
