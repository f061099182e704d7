use chrono::{NaiveDate, NaiveTime};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::clock_serde;
use crate::enums::{Category, Priority};

/// Title used when nothing meaningful is left after cleanup.
pub const DEFAULT_TITLE: &str = "New Task";

/// Time used when the text names no valid clock time (09:00).
#[must_use]
pub const fn default_time() -> NaiveTime {
    match NaiveTime::from_hms_opt(9, 0, 0) {
        Some(time) => time,
        None => panic!("Invalid default time"),
    }
}

/// An unsaved task extracted from free text, awaiting user confirmation.
///
/// Serializes to the task-creation payload:
/// `{title, time: "HH:MM", date: "YYYY-MM-DD", priority, category}`.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct TaskCandidate {
    pub title: String,
    #[serde(with = "clock_serde::hhmm")]
    #[schemars(with = "String")]
    pub time: NaiveTime,
    pub date: NaiveDate,
    pub priority: Priority,
    pub category: Category,
}

impl TaskCandidate {
    /// A candidate with every field at its default, dated `date`.
    #[must_use]
    pub fn with_defaults(date: NaiveDate) -> Self {
        Self {
            title: DEFAULT_TITLE.to_string(),
            time: default_time(),
            date,
            priority: Priority::default(),
            category: Category::default(),
        }
    }
}
