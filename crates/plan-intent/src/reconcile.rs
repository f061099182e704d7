//! Validation of structured task replies from a language model.
//!
//! A model asked to extract a task may answer with a JSON object wrapped in
//! prose, with wrong field formats, or not at all. Each field is checked on
//! its own and replaced by its default when invalid; when no usable object
//! is present the lexical extractor runs on the original text instead.
//!
//! A model asked to break a task down answers with a JSON array of subtask
//! titles; [`parse_subtasks`] keeps the usable ones.

use std::sync::LazyLock;

use chrono::{NaiveDate, NaiveDateTime, NaiveTime};
use plan_core::entities::TaskCandidate;
use plan_core::enums::{Category, Priority};
use regex::Regex;
use serde_json::{Map, Value};

use crate::error::IntentError;
use crate::extractor::{
    EXPLICIT_CLOCK, Extractor, capitalize_first, strip_all, strip_title_noise,
};

static JSON_OBJECT: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\{[^{}]*\}").expect("json object pattern is valid"));

static STRICT_HHMM: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^([0-9]{1,2}):([0-9]{2})$").expect("strict time pattern is valid")
});

static JSON_ARRAY: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?s)\[.*?\]").expect("json array pattern is valid"));

/// Date, time-of-day, and urgency words a model tends to leave in titles.
static REPLY_NOISE_WORDS: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"(?i)\b(?:tomorrow|today|next week|morning|afternoon|evening|night|urgent|high priority|important)\b",
    )
    .expect("reply noise pattern is valid")
});

/// Most subtasks read from one breakdown reply.
pub const MAX_SUBTASKS: usize = 5;

/// Subtask titles this short or shorter are dropped.
const MIN_SUBTASK_CHARS: usize = 3;

/// Fields of a model reply, each still unvalidated.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LooseCandidate {
    pub title: Option<String>,
    pub task: Option<String>,
    pub time: Option<String>,
    pub date: Option<String>,
    pub priority: Option<String>,
    pub category: Option<String>,
}

impl LooseCandidate {
    fn from_object(object: &Map<String, Value>) -> Self {
        let field = |name: &str| {
            object
                .get(name)
                .and_then(Value::as_str)
                .map(str::to_string)
        };
        Self {
            title: field("title"),
            task: field("task"),
            time: field("time"),
            date: field("date"),
            priority: field("priority"),
            category: field("category"),
        }
    }
}

/// First `{...}` span in `reply` that contains no nested braces.
#[must_use]
pub fn find_json_object(reply: &str) -> Option<&str> {
    JSON_OBJECT.find(reply).map(|m| m.as_str())
}

/// Pull the first flat JSON object out of a reply.
///
/// Non-string field values are treated as absent.
///
/// # Errors
///
/// Returns [`IntentError::NoJsonObject`] when the reply has no `{...}` span,
/// and [`IntentError::Json`] when that span is not a JSON object.
pub fn parse_reply(reply: &str) -> Result<LooseCandidate, IntentError> {
    let raw = find_json_object(reply).ok_or(IntentError::NoJsonObject)?;
    let value: Value = serde_json::from_str(raw)?;
    match value {
        Value::Object(object) => Ok(LooseCandidate::from_object(&object)),
        _ => Err(IntentError::NoJsonObject),
    }
}

/// Subtask titles from a breakdown reply.
///
/// Reads the first `[...]` span as a JSON array and looks at no more than
/// [`MAX_SUBTASKS`] entries. Non-string entries are skipped, strings are
/// cleaned like reply titles, and results of three chars or fewer are
/// dropped. Any unusable reply gives an empty list.
#[must_use]
pub fn parse_subtasks(reply: &str) -> Vec<String> {
    let Some(raw) = JSON_ARRAY.find(reply).map(|m| m.as_str()) else {
        tracing::debug!("no JSON array in breakdown reply");
        return Vec::new();
    };
    let entries: Vec<Value> = match serde_json::from_str(raw) {
        Ok(entries) => entries,
        Err(error) => {
            tracing::warn!(%error, "unparsable breakdown reply");
            return Vec::new();
        }
    };

    entries
        .iter()
        .take(MAX_SUBTASKS)
        .filter_map(Value::as_str)
        .map(clean_reply_text)
        .filter(|title| title.chars().count() > MIN_SUBTASK_CHARS)
        .collect()
}

/// Reconcile a model reply with the default extractor.
#[must_use]
pub fn reconcile(reply: &str, original: &str, now: NaiveDateTime) -> TaskCandidate {
    Extractor::default().reconcile(reply, original, now)
}

impl Extractor {
    /// Turn a model reply into a candidate, validating every field.
    ///
    /// Falls back to [`Extractor::extract`] on `original` when the reply
    /// holds no parsable object. Never fails.
    #[must_use]
    pub fn reconcile(&self, reply: &str, original: &str, now: NaiveDateTime) -> TaskCandidate {
        let loose = match parse_reply(reply) {
            Ok(loose) => loose,
            Err(error) => {
                tracing::warn!(%error, "unusable model reply; falling back to lexical extraction");
                return self.extract(original, now);
            }
        };
        self.validate(loose, original, now)
    }

    fn validate(&self, loose: LooseCandidate, original: &str, now: NaiveDateTime) -> TaskCandidate {
        let time = loose
            .time
            .as_deref()
            .and_then(|raw| {
                let time = parse_strict_hhmm(raw);
                if time.is_none() {
                    tracing::warn!(raw, "discarding invalid reply time");
                }
                time
            })
            .unwrap_or(self.defaults().time);

        let date = loose
            .date
            .as_deref()
            .and_then(|raw| {
                let date = NaiveDate::parse_from_str(raw.trim(), "%Y-%m-%d").ok();
                if date.is_none() {
                    tracing::warn!(raw, "discarding invalid reply date");
                }
                date
            })
            .unwrap_or_else(|| now.date());

        let priority = loose
            .priority
            .as_deref()
            .and_then(|raw| raw.parse::<Priority>().ok())
            .unwrap_or_default();

        let category = loose
            .category
            .as_deref()
            .and_then(|raw| raw.parse::<Category>().ok())
            .unwrap_or_default();

        let raw_title = loose
            .title
            .or(loose.task)
            .unwrap_or_else(|| original.to_string());

        TaskCandidate {
            title: self.clean_reply_title(&raw_title),
            time,
            date,
            priority,
            category,
        }
    }

    fn clean_reply_title(&self, raw: &str) -> String {
        self.or_default_title(clean_reply_text(raw))
    }
}

/// Strip clock fragments, noise words, command words, edge punctuation and
/// quotes, then capitalize. May return an empty string.
fn clean_reply_text(raw: &str) -> String {
    let mut working = raw.to_string();
    strip_all(&mut working, &EXPLICIT_CLOCK);
    strip_all(&mut working, &REPLY_NOISE_WORDS);
    let stripped = strip_title_noise(&working);
    let trimmed =
        stripped.trim_matches(|c: char| ".,!?;:-\"'".contains(c) || c.is_whitespace());
    capitalize_first(trimmed)
}

fn parse_strict_hhmm(raw: &str) -> Option<NaiveTime> {
    let caps = STRICT_HHMM.captures(raw.trim())?;
    let hour = caps[1].parse::<u32>().ok()?;
    let minute = caps[2].parse::<u32>().ok()?;
    NaiveTime::from_hms_opt(hour, minute, 0)
}
