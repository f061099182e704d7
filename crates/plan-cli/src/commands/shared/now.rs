use anyhow::bail;
use chrono::{Local, NaiveDate, NaiveDateTime};

const DATE_TIME_FORMATS: &[&str] = &[
    "%Y-%m-%dT%H:%M:%S",
    "%Y-%m-%dT%H:%M",
    "%Y-%m-%d %H:%M:%S",
    "%Y-%m-%d %H:%M",
];

/// Where "now" comes from for relative dates.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NowSource {
    /// Pinned by `--now`.
    Fixed(NaiveDateTime),
    /// Local wall clock, read per call.
    Local,
}

impl NowSource {
    /// Build from the `--now` flag; absent means local time.
    pub fn from_flag(raw: Option<&str>) -> anyhow::Result<Self> {
        raw.map_or(Ok(Self::Local), |raw| parse_now(raw).map(Self::Fixed))
    }

    #[must_use]
    pub fn now(self) -> NaiveDateTime {
        match self {
            Self::Fixed(at) => at,
            Self::Local => Local::now().naive_local(),
        }
    }
}

/// Parse `YYYY-MM-DD` (midnight) or `YYYY-MM-DDTHH:MM[:SS]`.
pub fn parse_now(raw: &str) -> anyhow::Result<NaiveDateTime> {
    let raw = raw.trim();
    for format in DATE_TIME_FORMATS {
        if let Ok(at) = NaiveDateTime::parse_from_str(raw, format) {
            return Ok(at);
        }
    }
    if let Some(midnight) = NaiveDate::parse_from_str(raw, "%Y-%m-%d")
        .ok()
        .and_then(|date| date.and_hms_opt(0, 0, 0))
    {
        return Ok(midnight);
    }
    bail!("invalid --now '{raw}': expected YYYY-MM-DD or YYYY-MM-DDTHH:MM[:SS]")
}
