//! Lexical task-intent extraction.
//!
//! The steps run in a fixed order over a working copy of the text:
//!
//! 1. the first valid clock time is parsed and cut out, along with any later
//!    explicit clock fragment (`5:30`, `at 4pm`),
//! 2. `tomorrow` (else `today`) sets the date and is cut out,
//! 3. priority keywords are tested against the *original* text,
//! 4. category keyword groups are tested against the *original* text,
//! 5. the residual text is cleaned into the title.
//!
//! Keyword tests use the original text so cutting time/date fragments never
//! weakens them; the title uses the residual so those fragments never leak
//! into it. Group order decides ties: high before low, work before health
//! before shopping before study before personal.

use std::ops::Range;
use std::sync::LazyLock;

use chrono::{NaiveDate, NaiveDateTime, NaiveTime};
use plan_core::entities::{DEFAULT_TITLE, TaskCandidate, default_time};
use plan_core::enums::{Category, Priority};
use regex::Regex;

use crate::clock::{self, Meridiem};

static TIME_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)([0-9]{1,2})(?::([0-9]{2}))?\s*(am|pm)?").expect("time pattern is valid")
});

static TOMORROW: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)tomorrow").expect("tomorrow pattern is valid"));

static TODAY: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)today").expect("today pattern is valid"));

/// Clock forms that cannot be anything but a time: `at 3:30 pm`, `15:00`,
/// `9am`. Bare numbers are not included.
pub(crate) static EXPLICIT_CLOCK: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)\b(?:at\s+)?[0-9]{1,2}:[0-9]{2}\s*(?:am|pm)?\b|\b(?:at\s+)?[0-9]{1,2}\s*(?:am|pm)\b")
        .expect("explicit clock pattern is valid")
});

static COMMAND_WORDS: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)\b(?:add|create|remind me to|schedule|task|todo)\b")
        .expect("command word pattern is valid")
});

static AT_WORD: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)\bat\b").expect("at pattern is valid"));

static WHITESPACE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\s+").expect("whitespace pattern is valid"));

pub const HIGH_PRIORITY_KEYWORDS: &[&str] =
    &["urgent", "important", "asap", "critical", "high priority"];

pub const LOW_PRIORITY_KEYWORDS: &[&str] = &["low priority", "optional", "maybe"];

/// Category keyword groups in precedence order. First match wins.
pub const CATEGORY_KEYWORDS: &[(Category, &[&str])] = &[
    (Category::Work, &["meeting", "work", "office", "project"]),
    (
        Category::Health,
        &["gym", "exercise", "workout", "health", "doctor"],
    ),
    (Category::Shopping, &["buy", "shop", "purchase", "groceries"]),
    (Category::Study, &["study", "read", "learn", "course"]),
    (Category::Personal, &["call", "family", "friend", "personal"]),
];

/// Values used when the text does not supply a field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExtractorDefaults {
    pub time: NaiveTime,
    pub title: String,
}

impl Default for ExtractorDefaults {
    fn default() -> Self {
        Self {
            time: default_time(),
            title: DEFAULT_TITLE.to_string(),
        }
    }
}

/// Pure text-to-candidate extractor.
#[derive(Debug, Clone, Default)]
pub struct Extractor {
    defaults: ExtractorDefaults,
}

impl Extractor {
    /// Build an extractor with custom defaults. A blank title falls back to
    /// `"New Task"`.
    #[must_use]
    pub fn new(mut defaults: ExtractorDefaults) -> Self {
        let trimmed = defaults.title.trim();
        defaults.title = if trimmed.is_empty() {
            DEFAULT_TITLE.to_string()
        } else {
            trimmed.to_string()
        };
        Self { defaults }
    }

    #[must_use]
    pub const fn defaults(&self) -> &ExtractorDefaults {
        &self.defaults
    }

    /// Extract a task candidate from `text`, resolving relative dates
    /// against `now`. Never fails.
    #[must_use]
    pub fn extract(&self, text: &str, now: NaiveDateTime) -> TaskCandidate {
        let today = now.date();
        let mut working = text.to_string();

        let time = match find_time(&working) {
            Some((time, span)) => {
                working.replace_range(span, "");
                strip_all(&mut working, &EXPLICIT_CLOCK);
                time
            }
            None => self.defaults.time,
        };

        let date = resolve_date(&mut working, today);

        let lowered = text.to_lowercase();
        let priority = priority_of(&lowered);
        let category = category_of(&lowered);

        let title = self.tidy_title(&working);

        tracing::debug!(
            %title,
            time = %clock::format_hhmm(time),
            %date,
            %priority,
            %category,
            "extracted task candidate"
        );

        TaskCandidate {
            title,
            time,
            date,
            priority,
            category,
        }
    }

    /// Strip command words and standalone `at`, collapse whitespace, and
    /// capitalize. Falls back to the default title when nothing is left.
    pub(crate) fn tidy_title(&self, residual: &str) -> String {
        self.or_default_title(capitalize_first(&strip_title_noise(residual)))
    }

    pub(crate) fn or_default_title(&self, title: String) -> String {
        if title.is_empty() {
            self.defaults.title.clone()
        } else {
            title
        }
    }
}

/// Drop command words and standalone `at`, then collapse and trim whitespace.
pub(crate) fn strip_title_noise(text: &str) -> String {
    let stripped = COMMAND_WORDS.replace_all(text, "");
    let stripped = AT_WORD.replace_all(&stripped, "");
    WHITESPACE.replace_all(&stripped, " ").trim().to_string()
}

/// Extract with the default extractor (09:00, "New Task").
#[must_use]
pub fn extract(text: &str, now: NaiveDateTime) -> TaskCandidate {
    Extractor::default().extract(text, now)
}

/// First time-pattern match that converts to a valid clock time, with its
/// byte span in `text`.
pub(crate) fn find_time(text: &str) -> Option<(NaiveTime, Range<usize>)> {
    TIME_PATTERN.captures_iter(text).find_map(|caps| {
        let whole = caps.get(0)?;
        let hour = caps.get(1)?.as_str().parse::<u32>().ok()?;
        let minute = match caps.get(2) {
            Some(m) => m.as_str().parse::<u32>().ok()?,
            None => 0,
        };
        let meridiem = caps.get(3).and_then(|m| Meridiem::parse(m.as_str()));

        let time = clock::to_24h(hour, minute, meridiem);
        if time.is_none() {
            tracing::debug!(matched = whole.as_str(), "skipping out-of-range time");
        }
        time.map(|time| (time, whole.range()))
    })
}

/// Resolve `tomorrow`/`today` and cut every occurrence of the recognized
/// keyword out of `working`.
fn resolve_date(working: &mut String, today: NaiveDate) -> NaiveDate {
    if TOMORROW.is_match(working) {
        strip_all(working, &TOMORROW);
        today.succ_opt().unwrap_or_else(|| {
            tracing::warn!(%today, "no calendar day after today; keeping today");
            today
        })
    } else {
        if TODAY.is_match(working) {
            strip_all(working, &TODAY);
        }
        today
    }
}

/// Remove matches until none remain, so removal cannot splice a new match
/// together.
pub(crate) fn strip_all(working: &mut String, pattern: &Regex) {
    while pattern.is_match(working) {
        *working = pattern.replace_all(working, "").into_owned();
    }
}

fn priority_of(lowered: &str) -> Priority {
    if contains_any(lowered, HIGH_PRIORITY_KEYWORDS) {
        Priority::High
    } else if contains_any(lowered, LOW_PRIORITY_KEYWORDS) {
        Priority::Low
    } else {
        Priority::Medium
    }
}

fn category_of(lowered: &str) -> Category {
    CATEGORY_KEYWORDS
        .iter()
        .find(|(_, keywords)| contains_any(lowered, keywords))
        .map_or(Category::Other, |(category, _)| *category)
}

fn contains_any(haystack: &str, needles: &[&str]) -> bool {
    needles.iter().any(|needle| haystack.contains(needle))
}

pub(crate) fn capitalize_first(text: &str) -> String {
    let mut chars = text.chars();
    chars.next().map_or_else(String::new, |first| {
        first.to_uppercase().chain(chars).collect()
    })
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    fn noon(year: i32, month: u32, day: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(year, month, day)
            .unwrap()
            .and_hms_opt(12, 0, 0)
            .unwrap()
    }

    fn hm(hour: u32, minute: u32) -> NaiveTime {
        NaiveTime::from_hms_opt(hour, minute, 0).unwrap()
    }

    #[test]
    fn find_time_reports_span() {
        let (time, span) = find_time("call at 7:30pm please").unwrap();
        assert_eq!(time, hm(19, 30));
        assert_eq!(&"call at 7:30pm please"[span], "7:30pm");
    }

    #[test]
    fn find_time_skips_out_of_range_matches() {
        let (time, span) = find_time("room 99 at 4pm").unwrap();
        assert_eq!(time, hm(16, 0));
        assert_eq!(&"room 99 at 4pm"[span], "4pm");

        assert!(find_time("13pm").is_none());
        assert!(find_time("no digits here").is_none());
    }

    #[test]
    fn out_of_range_fragment_stays_in_title() {
        let candidate = extract("gate 99 check", noon(2024, 3, 1));
        assert_eq!(candidate.time, default_time());
        assert_eq!(candidate.title, "Gate 99 check");
    }

    #[test]
    fn strip_all_does_not_leave_spliced_keyword() {
        let mut working = String::from("tototodayday");
        strip_all(&mut working, &TODAY);
        assert!(!TODAY.is_match(&working));
    }

    #[test]
    fn first_time_wins_and_later_clock_fragments_are_cut() {
        let candidate = extract("call dentist at 3:00 or 5:30 tomorrow", noon(2024, 1, 1));
        assert_eq!(candidate.time, hm(3, 0));
        assert_eq!(candidate.date, NaiveDate::from_ymd_opt(2024, 1, 2).unwrap());
        assert_eq!(candidate.title, "Call dentist or");

        let candidate = extract("run at 6pm or at 7pm", noon(2024, 1, 1));
        assert_eq!(candidate.time, hm(18, 0));
        assert_eq!(candidate.title, "Run or");
    }

    #[test]
    fn bare_numbers_after_the_time_stay_in_title() {
        let candidate = extract("meet at 4pm in room 12b", noon(2024, 1, 1));
        assert_eq!(candidate.time, hm(16, 0));
        assert_eq!(candidate.title, "Meet in room 12b");
    }

    #[test]
    fn only_tomorrow_is_removed_when_both_present() {
        let candidate = extract("Standup tomorrow not today", noon(2024, 1, 1));
        assert_eq!(candidate.date, NaiveDate::from_ymd_opt(2024, 1, 2).unwrap());
        assert_eq!(candidate.title, "Standup not today");
    }

    #[test]
    fn date_keywords_ignore_case() {
        let candidate = extract("Dentist TOMORROW", noon(2024, 2, 28));
        assert_eq!(candidate.date, NaiveDate::from_ymd_opt(2024, 2, 29).unwrap());
        assert_eq!(candidate.title, "Dentist");

        let candidate = extract("Today: water plants", noon(2024, 2, 28));
        assert_eq!(candidate.date, NaiveDate::from_ymd_opt(2024, 2, 28).unwrap());
        assert_eq!(candidate.title, ": water plants");
    }

    #[test]
    fn tomorrow_rolls_over_year_end() {
        let candidate = extract("party tomorrow", noon(2024, 12, 31));
        assert_eq!(candidate.date, NaiveDate::from_ymd_opt(2025, 1, 1).unwrap());
    }

    #[test]
    fn tomorrow_at_max_date_keeps_today() {
        let now = NaiveDate::MAX.and_hms_opt(0, 0, 0).unwrap();
        let candidate = extract("tomorrow", now);
        assert_eq!(candidate.date, NaiveDate::MAX);
    }

    #[test]
    fn priority_high_wins_over_low() {
        assert_eq!(priority_of("urgent but maybe optional"), Priority::High);
        assert_eq!(priority_of("asap"), Priority::High);
        assert_eq!(priority_of("this is high priority"), Priority::High);
        assert_eq!(priority_of("maybe later"), Priority::Low);
        assert_eq!(priority_of("nothing special"), Priority::Medium);
    }

    #[test]
    fn category_follows_group_order() {
        // work is listed before health
        assert_eq!(category_of("doctor meeting"), Category::Work);
        // health before shopping
        assert_eq!(category_of("buy gym shoes"), Category::Health);
        // shopping before study
        assert_eq!(category_of("buy a course"), Category::Shopping);
        // study before personal
        assert_eq!(category_of("read with a friend"), Category::Study);
        assert_eq!(category_of("family dinner"), Category::Personal);
        assert_eq!(category_of("water plants"), Category::Other);
    }

    #[test]
    fn category_matches_substrings() {
        assert_eq!(category_of("finish homework"), Category::Work);
        assert_eq!(category_of("recall names"), Category::Personal);
    }

    #[test]
    fn title_strips_command_words_as_whole_words_only() {
        let extractor = Extractor::default();
        assert_eq!(extractor.tidy_title("add task todo"), "New Task");
        assert_eq!(extractor.tidy_title("remind me to stretch"), "Stretch");
        assert_eq!(extractor.tidy_title("update address book"), "Update address book");
        assert_eq!(extractor.tidy_title("Schedule   dinner  at  home"), "Dinner home");
        assert_eq!(extractor.tidy_title("look at attic"), "Look attic");
    }

    #[test]
    fn title_capitalizes_non_ascii() {
        let extractor = Extractor::default();
        assert_eq!(extractor.tidy_title("éclair run"), "Éclair run");
    }

    #[test]
    fn custom_defaults_apply() {
        let extractor = Extractor::new(ExtractorDefaults {
            time: hm(8, 30),
            title: "  Untitled  ".into(),
        });
        let candidate = extractor.extract("todo", noon(2024, 5, 5));
        assert_eq!(candidate.time, hm(8, 30));
        assert_eq!(candidate.title, "Untitled");
    }

    #[test]
    fn blank_custom_title_falls_back() {
        let extractor = Extractor::new(ExtractorDefaults {
            time: default_time(),
            title: "   ".into(),
        });
        assert_eq!(extractor.defaults().title, "New Task");
        assert_eq!(extractor.extract("", noon(2024, 5, 5)).title, "New Task");
    }

    #[test]
    fn cleaned_title_does_not_redetect_time_or_date() {
        let now = noon(2024, 1, 1);
        let inputs = [
            "Meeting at 3pm tomorrow",
            "remind me to call mom at 10:30 am today",
            "urgent buy groceries at 9",
            "Gym session tomorrow 6:15pm",
            "todo: pay rent TODAY at 12am",
            "call dentist at 3:00 or 5:30 tomorrow",
            "standup 9am, fallback at 2:15pm today",
        ];
        for input in inputs {
            let candidate = extract(input, now);
            assert!(
                find_time(&candidate.title).is_none(),
                "time leaked into title {:?} from {input:?}",
                candidate.title
            );
            assert!(!TOMORROW.is_match(&candidate.title));
            assert!(!TODAY.is_match(&candidate.title));

            let again = extract(&candidate.title, now);
            assert_eq!(again.time, default_time());
            assert_eq!(again.date, now.date());
        }
    }
}
