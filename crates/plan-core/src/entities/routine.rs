use chrono::NaiveTime;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::clock_serde;
use crate::entities::TaskCandidate;
use crate::enums::RepeatType;

/// Longest title the routine store accepts, in characters.
pub const ROUTINE_TITLE_MAX: usize = 200;

/// Payload for the routine-creation endpoint.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct NewRoutine {
    pub title: String,
    #[serde(with = "clock_serde::hhmm")]
    #[schemars(with = "String")]
    pub time: NaiveTime,
    pub repeat_type: RepeatType,
    pub is_completed: bool,
    pub is_active: bool,
}

impl NewRoutine {
    /// Build an active, not-yet-completed routine from a confirmed candidate.
    ///
    /// Titles longer than [`ROUTINE_TITLE_MAX`] characters are cut on a char
    /// boundary.
    #[must_use]
    pub fn from_candidate(candidate: &TaskCandidate, repeat_type: RepeatType) -> Self {
        Self {
            title: clamp_title(&candidate.title),
            time: candidate.time,
            repeat_type,
            is_completed: false,
            is_active: true,
        }
    }
}

fn clamp_title(title: &str) -> String {
    match title.char_indices().nth(ROUTINE_TITLE_MAX) {
        Some((cut, _)) => title[..cut].trim_end().to_string(),
        None => title.to_string(),
    }
}
