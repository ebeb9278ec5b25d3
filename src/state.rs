//! Decoding of host entity attribute snapshots.
//!
//! The host republishes each list's state as a JSON attribute set:
//! `todo_items` (active tasks with synthetic category headers interleaved),
//! `completed_items`, a per-uid `recurrence_data` map, and `total_tasks`.
//! Decoding is lenient throughout: individually malformed entries are
//! skipped with a warning, never surfaced as an error, so a card always has
//! something to render.

use serde::Deserialize;
use serde_json::Value;
use std::collections::HashMap;

use crate::core::recurrence::{EndType, RecurrenceEnd, RecurrenceRule, RecurrenceUnit};
use crate::core::task::Task;

/// The flat per-uid recurrence shape the host stores. Everything beyond the
/// enabled flag is optional; [`StoredRecurrence::to_rule`] applies the
/// defaults.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct StoredRecurrence {
    #[serde(default)]
    pub recurrence_enabled: bool,
    #[serde(default)]
    pub recurrence_interval: Option<u32>,
    #[serde(default)]
    pub recurrence_unit: Option<String>,
    #[serde(default)]
    pub recurrence_end_enabled: Option<bool>,
    #[serde(default)]
    pub recurrence_end_type: Option<String>,
    #[serde(default)]
    pub recurrence_end_count: Option<u32>,
    #[serde(default)]
    pub recurrence_end_date: Option<String>,
    /// Completions so far under a count-limited rule; display only.
    #[serde(default)]
    pub recurrence_current_count: Option<u32>,
}

impl StoredRecurrence {
    /// Convert to the explicit rule model. Disabled or absent recurrence is
    /// `None`; stored fields degrade to their form defaults (interval 1,
    /// unit days, end type count).
    pub fn to_rule(&self) -> Option<RecurrenceRule> {
        if !self.recurrence_enabled {
            return None;
        }

        let interval = match self.recurrence_interval {
            Some(n) if n > 0 => n,
            _ => 1,
        };
        let unit = self
            .recurrence_unit
            .as_deref()
            .and_then(RecurrenceUnit::from_wire)
            .unwrap_or_default();

        let end = if self.recurrence_end_enabled.unwrap_or(false) {
            let end_type = match self.recurrence_end_type.as_deref() {
                Some("date") => EndType::Date,
                // Missing or unknown end type displays as count
                _ => EndType::Count,
            };
            Some(match end_type {
                EndType::Count => RecurrenceEnd::Count(
                    self.recurrence_end_count.filter(|&n| n > 0).unwrap_or(1),
                ),
                EndType::Date => {
                    RecurrenceEnd::Date(self.recurrence_end_date.clone().unwrap_or_default())
                }
            })
        } else {
            None
        };

        Some(RecurrenceRule { interval, unit, end })
    }
}

/// One list entity's decoded attribute snapshot.
#[derive(Debug, Clone, Default)]
pub struct ListSnapshot {
    pub todo_items: Vec<Task>,
    pub completed_items: Vec<Task>,
    pub recurrence_data: HashMap<String, StoredRecurrence>,
    pub total_tasks: u32,
}

impl ListSnapshot {
    /// Decode an entity attribute object. Total: missing or malformed
    /// attribute sets decode to empty collections, malformed individual
    /// entries are skipped with a warning.
    pub fn from_value(attributes: &Value) -> Self {
        let todo_items = decode_tasks(attributes.get("todo_items"), "todo_items");
        let completed_items = decode_tasks(attributes.get("completed_items"), "completed_items");

        let mut recurrence_data = HashMap::new();
        if let Some(map) = attributes.get("recurrence_data").and_then(Value::as_object) {
            for (uid, raw) in map {
                match StoredRecurrence::deserialize(raw) {
                    Ok(stored) => {
                        recurrence_data.insert(uid.clone(), stored);
                    }
                    Err(e) => {
                        log::warn!("skipping malformed recurrence entry for {}: {}", uid, e);
                    }
                }
            }
        }

        let total_tasks = attributes
            .get("total_tasks")
            .and_then(Value::as_u64)
            .map(|n| n.min(u32::MAX as u64) as u32)
            .unwrap_or(0);

        Self {
            todo_items,
            completed_items,
            recurrence_data,
            total_tasks,
        }
    }

    /// The stored recurrence rule for a task, if enabled.
    pub fn rule_for(&self, uid: &str) -> Option<RecurrenceRule> {
        self.recurrence_data.get(uid).and_then(StoredRecurrence::to_rule)
    }

    /// Active tasks, with the host's synthetic header rows filtered out.
    pub fn active_tasks(&self) -> impl Iterator<Item = &Task> {
        self.todo_items.iter().filter(|t| !t.is_header())
    }

    /// Active and completed tasks, headers filtered out.
    pub fn all_tasks(&self) -> impl Iterator<Item = &Task> {
        self.active_tasks()
            .chain(self.completed_items.iter().filter(|t| !t.is_header()))
    }

    /// Locate a just-created task by exact summary match, skipping synthetic
    /// headers. The caller polls the snapshot after creating; first match
    /// wins, so duplicate summaries can pick the wrong task. The create
    /// service does not return the new uid, which forces this contract.
    pub fn find_created(&self, summary: &str) -> Option<&Task> {
        self.active_tasks().find(|t| t.summary == summary)
    }
}

fn decode_tasks(raw: Option<&Value>, attr: &str) -> Vec<Task> {
    let Some(items) = raw.and_then(Value::as_array) else {
        return Vec::new();
    };
    let mut tasks = Vec::with_capacity(items.len());
    for item in items {
        match Task::deserialize(item) {
            Ok(task) => tasks.push(task),
            Err(e) => log::warn!("skipping malformed {} entry: {}", attr, e),
        }
    }
    tasks
}

/// Filter a host state key set down to sorted to-do entity ids. The
/// dashboard view uses this to populate its list-of-lists pane.
pub fn todo_entity_ids<'a>(ids: impl IntoIterator<Item = &'a str>) -> Vec<&'a str> {
    let mut out: Vec<&str> = ids
        .into_iter()
        .filter(|id| id.starts_with("todo."))
        .collect();
    out.sort_unstable();
    out
}
