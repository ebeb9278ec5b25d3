use serde::{Deserialize, Serialize};
use std::fmt;

/// Form input bounds; the edit dialog's number inputs enforce these, the
/// payload builder does not re-clamp above them.
pub const MAX_INTERVAL: u32 = 365;
pub const MAX_END_COUNT: u32 = 999;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RecurrenceUnit {
    Days,
    Weeks,
    Months,
    Years,
}

impl RecurrenceUnit {
    pub const ALL: [Self; 4] = [Self::Days, Self::Weeks, Self::Months, Self::Years];

    pub fn as_wire(&self) -> &'static str {
        match self {
            Self::Days => "days",
            Self::Weeks => "weeks",
            Self::Months => "months",
            Self::Years => "years",
        }
    }

    pub fn from_wire(s: &str) -> Option<Self> {
        match s {
            "days" => Some(Self::Days),
            "weeks" => Some(Self::Weeks),
            "months" => Some(Self::Months),
            "years" => Some(Self::Years),
            _ => None,
        }
    }

    /// Form option label in the card's two display languages.
    pub fn label(&self, language: &str) -> &'static str {
        if language.starts_with("es") {
            match self {
                Self::Days => "días",
                Self::Weeks => "semanas",
                Self::Months => "meses",
                Self::Years => "años",
            }
        } else {
            self.as_wire()
        }
    }
}

impl Default for RecurrenceUnit {
    fn default() -> Self {
        Self::Days
    }
}

impl fmt::Display for RecurrenceUnit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_wire())
    }
}

/// Which end-condition variant the form has selected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EndType {
    Count,
    Date,
}

impl EndType {
    pub fn as_wire(&self) -> &'static str {
        match self {
            Self::Count => "count",
            Self::Date => "date",
        }
    }
}

impl Default for EndType {
    fn default() -> Self {
        Self::Count
    }
}

/// Optional termination condition for a recurring task.
///
/// The end date is an opaque pass-through string; the storing backend is the
/// validation authority for it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum RecurrenceEnd {
    Count(u32),
    Date(String),
}

impl RecurrenceEnd {
    pub fn end_type(&self) -> EndType {
        match self {
            Self::Count(_) => EndType::Count,
            Self::Date(_) => EndType::Date,
        }
    }
}

/// A task's recurrence configuration. Absence of a rule means recurrence is
/// disabled; there is no `enabled: false` state inside the rule itself.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RecurrenceRule {
    pub interval: u32,
    pub unit: RecurrenceUnit,
    pub end: Option<RecurrenceEnd>,
}

/// Lenient positive-integer parse for form number inputs: trimmed integer
/// text, or `default` for anything non-numeric or non-positive. Never errors.
pub fn parse_positive(raw: &str, default: u32) -> u32 {
    match raw.trim().parse::<i64>() {
        Ok(n) if n > 0 && n <= u32::MAX as i64 => n as u32,
        _ => default,
    }
}

/// Raw recurrence form values as the edit dialog holds them. Numeric fields
/// stay strings until save; the payload builder parses them leniently.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecurrenceDraft {
    pub enabled: bool,
    pub interval: String,
    pub unit: RecurrenceUnit,
    pub end_enabled: bool,
    pub end_type: EndType,
    pub end_count: String,
    pub end_date: String,
}

impl Default for RecurrenceDraft {
    fn default() -> Self {
        Self {
            enabled: false,
            interval: "1".into(),
            unit: RecurrenceUnit::Days,
            end_enabled: false,
            end_type: EndType::Count,
            end_count: "1".into(),
            end_date: String::new(),
        }
    }
}

impl RecurrenceDraft {
    /// Hydrate the edit dialog from a stored rule. No rule gives the
    /// all-disabled defaults; a rule without an end keeps the end fields at
    /// their defaults with `Count` displayed.
    pub fn from_rule(rule: Option<&RecurrenceRule>) -> Self {
        let Some(rule) = rule else {
            return Self::default();
        };
        let mut draft = Self {
            enabled: true,
            interval: rule.interval.to_string(),
            unit: rule.unit,
            ..Self::default()
        };
        match &rule.end {
            Some(RecurrenceEnd::Count(count)) => {
                draft.end_enabled = true;
                draft.end_type = EndType::Count;
                draft.end_count = count.to_string();
            }
            Some(RecurrenceEnd::Date(date)) => {
                draft.end_enabled = true;
                draft.end_type = EndType::Date;
                draft.end_date = date.clone();
            }
            None => {}
        }
        draft
    }
}
