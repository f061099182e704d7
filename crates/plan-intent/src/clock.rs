//! Clock-time conversion and normalization.

use std::sync::LazyLock;

use chrono::NaiveTime;
use regex::Regex;

use crate::error::IntentError;

/// `6 40 pm`, `6:40pm`, `18:40`, `1840`, `6pm` once dots are dropped.
static LOOSE_CLOCK: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^([0-9]{1,2})(?:[:\s]?([0-9]{2}))?\s*(am|pm)?$").expect("clock pattern is valid")
});

/// Half of a 12-hour clock.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Meridiem {
    Am,
    Pm,
}

impl Meridiem {
    /// Parse `am`/`pm` in any case.
    #[must_use]
    pub fn parse(raw: &str) -> Option<Self> {
        if raw.eq_ignore_ascii_case("am") {
            Some(Self::Am)
        } else if raw.eq_ignore_ascii_case("pm") {
            Some(Self::Pm)
        } else {
            None
        }
    }
}

/// Convert an hour/minute pair with an optional meridiem to a 24-hour time.
///
/// `pm` adds twelve to every hour except 12; `12am` becomes midnight. Without
/// a meridiem the hour is taken literally. Returns `None` when the result is
/// not a valid clock time.
#[must_use]
pub fn to_24h(hour: u32, minute: u32, meridiem: Option<Meridiem>) -> Option<NaiveTime> {
    let hour = match meridiem {
        Some(Meridiem::Pm) if hour != 12 => hour + 12,
        Some(Meridiem::Am) if hour == 12 => 0,
        _ => hour,
    };
    NaiveTime::from_hms_opt(hour, minute, 0)
}

/// Normalize a free-form clock string to a 24-hour time.
///
/// Accepts `"6 40 pm"`, `"6:40 PM"`, `"6.40pm"`, `"18:40"`, `"1840"` and
/// `"6pm"`. A bare hour with neither minutes nor meridiem is rejected, as is
/// a 12-hour reading whose hour is outside 1..=12.
///
/// # Errors
///
/// Returns [`IntentError::InvalidTime`] when the input is not a recognizable
/// clock time.
pub fn normalize_time(raw: &str) -> Result<NaiveTime, IntentError> {
    let invalid = || IntentError::InvalidTime(raw.to_string());

    let cleaned = raw.trim().to_ascii_lowercase().replace('.', "");
    let caps = LOOSE_CLOCK.captures(&cleaned).ok_or_else(invalid)?;

    let hour = caps[1].parse::<u32>().map_err(|_| invalid())?;
    let minute = caps
        .get(2)
        .map(|m| m.as_str().parse::<u32>())
        .transpose()
        .map_err(|_| invalid())?;
    let meridiem = caps.get(3).and_then(|m| Meridiem::parse(m.as_str()));

    match (minute, meridiem) {
        (None, None) => return Err(invalid()),
        (_, Some(_)) if !(1..=12).contains(&hour) => return Err(invalid()),
        _ => {}
    }

    to_24h(hour, minute.unwrap_or(0), meridiem).ok_or_else(invalid)
}

/// Format a time as zero-padded `"HH:MM"`.
#[must_use]
pub fn format_hhmm(time: NaiveTime) -> String {
    time.format(plan_core::clock_serde::HHMM_FORMAT).to_string()
}
