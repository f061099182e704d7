//! CLI response types returned as JSON by `dayplan` commands.
//!
//! These structs define the shape of JSON output for commands like
//! `dayplan intent`, `dayplan normalize-time`, `dayplan breakdown`, and
//! `dayplan chat`.

use chrono::NaiveTime;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::clock_serde;
use crate::entities::{NewRoutine, TaskCandidate};

/// Response from `dayplan intent`.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct IntentResponse {
    pub text: String,
    pub is_task_intent: bool,
}

/// Response from `dayplan normalize-time`.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct NormalizedTimeResponse {
    pub input: String,
    #[serde(with = "clock_serde::hhmm")]
    #[schemars(with = "String")]
    pub time: NaiveTime,
}

/// Response from `dayplan breakdown`.
#[derive(Debug, Clone, Default, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct SubtaskBreakdown {
    pub subtasks: Vec<String>,
}

/// One line of `dayplan chat` output.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
#[serde(tag = "event", rename_all = "snake_case")]
pub enum ChatEvent {
    /// A task candidate is pending confirmation.
    Offered { candidate: TaskCandidate },
    /// The pending candidate was accepted.
    Confirmed {
        candidate: TaskCandidate,
        routine: NewRoutine,
    },
    /// The pending candidate was discarded.
    Cancelled,
    /// The message did not look like a task request.
    Ignored { text: String },
    /// A confirm/cancel reply arrived with nothing pending.
    NothingPending,
}
