//! # plan-intent
//!
//! Turns free-form chat text into structured task candidates.
//!
//! - [`is_task_intent`] gates whether a message looks like a task request.
//! - [`Extractor`] pulls time, date, priority, category, and a cleaned title
//!   out of the text with lexical pattern matching. It never fails and reads
//!   no ambient clock: the caller passes `now`.
//! - [`reconcile`] validates a structured model reply field-by-field, falling
//!   back to the extractor. [`parse_subtasks`] reads a task-breakdown reply.
//! - [`ChatSession`] holds the pending candidate between offer and
//!   confirmation.
//! - [`clock`] normalizes free-form clock strings.
//!
//! Everything here is synchronous and free of I/O.

pub mod classifier;
pub mod clock;
mod error;
pub mod extractor;
pub mod reconcile;
pub mod session;

pub use classifier::is_task_intent;
pub use clock::normalize_time;
pub use error::IntentError;
pub use extractor::{Extractor, ExtractorDefaults, extract};
pub use reconcile::{parse_subtasks, reconcile};
pub use session::ChatSession;
