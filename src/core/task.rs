use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Summary prefix/suffix marking a synthetic category header row in the
/// host's legacy list surface. Headers are not real tasks.
pub const HEADER_PREFIX: &str = "--- ";
pub const HEADER_SUFFIX: &str = " ---";

/// Uid prefix for synthetic header rows (`header_<category>`).
pub const HEADER_UID_PREFIX: &str = "header_";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TaskStatus {
    NeedsAction,
    Completed,
}

impl TaskStatus {
    pub fn as_wire(&self) -> &'static str {
        match self {
            Self::NeedsAction => "needs_action",
            Self::Completed => "completed",
        }
    }

    pub fn is_completed(&self) -> bool {
        matches!(self, Self::Completed)
    }
}

impl Default for TaskStatus {
    fn default() -> Self {
        Self::NeedsAction
    }
}

/// A to-do item as published in the host entity's attribute snapshot.
///
/// `due` is kept as the raw host string; parse it with [`parse_due`] where a
/// calendar date is needed. Uids are host-assigned opaque strings, immutable
/// once created.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Task {
    pub uid: String,
    pub summary: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub due: Option<String>,
    #[serde(default)]
    pub status: TaskStatus,
}

impl Task {
    pub fn new(uid: impl Into<String>, summary: impl Into<String>) -> Self {
        Self {
            uid: uid.into(),
            summary: summary.into(),
            description: None,
            due: None,
            status: TaskStatus::NeedsAction,
        }
    }

    /// True for synthetic category header rows the host interleaves into its
    /// legacy list attribute.
    pub fn is_header(&self) -> bool {
        self.summary.starts_with(HEADER_PREFIX) && self.summary.ends_with(HEADER_SUFFIX)
    }

    /// The due date as a calendar date, if present and parseable.
    pub fn due_date(&self) -> Option<NaiveDate> {
        self.due.as_deref().and_then(parse_due)
    }
}

/// Parse a host due value into a calendar date.
///
/// The host nominally stores ISO `YYYY-MM-DD`, but datetime strings appear in
/// older data; anything after a `T` or space separator is ignored. Returns
/// `None` for anything unparseable — callers treat that as "no due date".
pub fn parse_due(raw: &str) -> Option<NaiveDate> {
    let date_part = raw.trim().split(['T', ' ']).next()?;
    NaiveDate::parse_from_str(date_part, "%Y-%m-%d").ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_due_plain_date() {
        assert_eq!(
            parse_due("2024-03-05"),
            Some(NaiveDate::from_ymd_opt(2024, 3, 5).unwrap())
        );
    }

    #[test]
    fn parse_due_datetime_variants() {
        let expected = Some(NaiveDate::from_ymd_opt(2024, 3, 5).unwrap());
        assert_eq!(parse_due("2024-03-05T10:30:00"), expected);
        assert_eq!(parse_due("2024-03-05 10:30:00"), expected);
        assert_eq!(parse_due("  2024-03-05  "), expected);
    }

    #[test]
    fn parse_due_garbage() {
        assert_eq!(parse_due("not-a-date"), None);
        assert_eq!(parse_due(""), None);
        assert_eq!(parse_due("2024-13-40"), None);
    }

    #[test]
    fn header_detection() {
        let mut task = Task::new("header_this_week", "--- This week ---");
        assert!(task.is_header());
        task.summary = "Buy milk".into();
        assert!(!task.is_header());
        // Prefix alone is not enough
        task.summary = "--- half marked".into();
        assert!(!task.is_header());
    }

    #[test]
    fn status_wire_names() {
        assert_eq!(TaskStatus::NeedsAction.as_wire(), "needs_action");
        assert_eq!(TaskStatus::Completed.as_wire(), "completed");
        let parsed: TaskStatus = serde_json::from_str("\"completed\"").unwrap();
        assert_eq!(parsed, TaskStatus::Completed);
    }
}
