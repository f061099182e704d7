//! Defaults the intent extractor falls back to.

use chrono::NaiveTime;
use plan_core::clock_serde::HHMM_FORMAT;
use plan_core::entities::DEFAULT_TITLE;
use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

fn default_time() -> String {
    "09:00".to_string()
}

fn default_title() -> String {
    DEFAULT_TITLE.to_string()
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ExtractorConfig {
    /// Time for candidates whose text names no clock time, as `HH:MM`.
    #[serde(default = "default_time")]
    pub default_time: String,

    /// Title for candidates with nothing left after cleanup.
    #[serde(default = "default_title")]
    pub default_title: String,
}

impl Default for ExtractorConfig {
    fn default() -> Self {
        Self {
            default_time: default_time(),
            default_title: default_title(),
        }
    }
}

impl ExtractorConfig {
    /// Parse `default_time`.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidValue`] if it is not a 24-hour `HH:MM` time.
    pub fn default_time(&self) -> Result<NaiveTime, ConfigError> {
        NaiveTime::parse_from_str(self.default_time.trim(), HHMM_FORMAT).map_err(|error| {
            ConfigError::InvalidValue {
                field: "extractor.default_time".to_string(),
                reason: format!("'{}' is not an HH:MM time ({error})", self.default_time),
            }
        })
    }

    /// `default_title` trimmed, or `"New Task"` when blank.
    #[must_use]
    pub fn default_title(&self) -> &str {
        let trimmed = self.default_title.trim();
        if trimmed.is_empty() { DEFAULT_TITLE } else { trimmed }
    }
}
