//! Serde helpers for wall-clock times.
//!
//! Task-creation payloads carry times as zero-padded 24-hour `"HH:MM"`
//! strings, not chrono's default `"HH:MM:SS"`. Use with
//! `#[serde(with = "clock_serde::hhmm")]` on `NaiveTime` fields.
//!
//! # Example
//! ```ignore
//! use plan_core::clock_serde;
//! use chrono::NaiveTime;
//!
//! #[derive(Serialize, Deserialize)]
//! struct Record {
//!     #[serde(with = "clock_serde::hhmm")]
//!     pub time: NaiveTime,
//! }
//! ```

/// Format string for the `"HH:MM"` wire form.
pub const HHMM_FORMAT: &str = "%H:%M";

/// Serialize `NaiveTime` as `"HH:MM"`, dropping seconds.
pub mod hhmm {
    use chrono::NaiveTime;
    use serde::{Deserialize, Deserializer, Serializer};

    use super::HHMM_FORMAT;

    pub fn serialize<S: Serializer>(time: &NaiveTime, s: S) -> Result<S::Ok, S::Error> {
        s.collect_str(&time.format(HHMM_FORMAT))
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(d: D) -> Result<NaiveTime, D::Error> {
        let raw = String::deserialize(d)?;
        NaiveTime::parse_from_str(&raw, HHMM_FORMAT)
            .map_err(|e| serde::de::Error::custom(format!("invalid HH:MM time '{raw}': {e}")))
    }
}
