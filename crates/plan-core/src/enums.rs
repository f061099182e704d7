//! Priority, category, repeat, and confirmation enums for dayplan.
//!
//! All enums use `snake_case` serialization via `#[serde(rename_all = "snake_case")]`.
//! `ConfirmationState` provides `allowed_next_states()` to enforce valid
//! transitions at the application layer.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::errors::CoreError;

// ---------------------------------------------------------------------------
// Priority
// ---------------------------------------------------------------------------

/// Priority of a task.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema,
)]
#[serde(rename_all = "snake_case")]
pub enum Priority {
    High,
    #[default]
    Medium,
    Low,
}

impl Priority {
    pub const ALL: [Self; 3] = [Self::High, Self::Medium, Self::Low];

    /// Return the string representation used on the wire.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::High => "high",
            Self::Medium => "medium",
            Self::Low => "low",
        }
    }
}

impl fmt::Display for Priority {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Priority {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_variant(s, &Self::ALL, Self::as_str, "priority")
    }
}

// ---------------------------------------------------------------------------
// Category
// ---------------------------------------------------------------------------

/// Category of a task.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema,
)]
#[serde(rename_all = "snake_case")]
pub enum Category {
    Work,
    Personal,
    Health,
    Study,
    Shopping,
    #[default]
    Other,
}

impl Category {
    pub const ALL: [Self; 6] = [
        Self::Work,
        Self::Personal,
        Self::Health,
        Self::Study,
        Self::Shopping,
        Self::Other,
    ];

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Work => "work",
            Self::Personal => "personal",
            Self::Health => "health",
            Self::Study => "study",
            Self::Shopping => "shopping",
            Self::Other => "other",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Category {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_variant(s, &Self::ALL, Self::as_str, "category")
    }
}

// ---------------------------------------------------------------------------
// RepeatType
// ---------------------------------------------------------------------------

/// How often a routine fires.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema,
)]
#[serde(rename_all = "snake_case")]
pub enum RepeatType {
    #[default]
    Once,
    Daily,
    Weekly,
}

impl RepeatType {
    pub const ALL: [Self; 3] = [Self::Once, Self::Daily, Self::Weekly];

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Once => "once",
            Self::Daily => "daily",
            Self::Weekly => "weekly",
        }
    }
}

impl fmt::Display for RepeatType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for RepeatType {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_variant(s, &Self::ALL, Self::as_str, "repeat type")
    }
}

// ---------------------------------------------------------------------------
// ConfirmationState
// ---------------------------------------------------------------------------

/// State of a chat session's pending task candidate.
///
/// ```text
/// idle → awaiting_confirmation → confirmed
///                              → cancelled
///                              → awaiting_confirmation (newer message replaces pending)
/// confirmed | cancelled → idle
///                       → awaiting_confirmation
/// ```
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema,
)]
#[serde(rename_all = "snake_case")]
pub enum ConfirmationState {
    #[default]
    Idle,
    AwaitingConfirmation,
    Confirmed,
    Cancelled,
}

impl ConfirmationState {
    /// Valid next states from the current state.
    #[must_use]
    #[allow(clippy::match_same_arms)]
    pub const fn allowed_next_states(self) -> &'static [Self] {
        match self {
            Self::Idle => &[Self::AwaitingConfirmation],
            Self::AwaitingConfirmation => &[
                Self::AwaitingConfirmation,
                Self::Confirmed,
                Self::Cancelled,
            ],
            Self::Confirmed | Self::Cancelled => &[Self::Idle, Self::AwaitingConfirmation],
        }
    }

    /// Check whether transitioning to `next` is allowed.
    #[must_use]
    pub fn can_transition_to(self, next: Self) -> bool {
        self.allowed_next_states().contains(&next)
    }

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Idle => "idle",
            Self::AwaitingConfirmation => "awaiting_confirmation",
            Self::Confirmed => "confirmed",
            Self::Cancelled => "cancelled",
        }
    }
}

impl fmt::Display for ConfirmationState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Case-insensitive lookup of a variant by its wire spelling.
fn parse_variant<T: Copy>(
    raw: &str,
    variants: &[T],
    as_str: fn(T) -> &'static str,
    field: &str,
) -> Result<T, CoreError> {
    let normalized = raw.trim().to_ascii_lowercase();
    variants
        .iter()
        .copied()
        .find(|variant| as_str(*variant) == normalized)
        .ok_or_else(|| CoreError::Validation(format!("invalid {field} '{raw}'")))
}
