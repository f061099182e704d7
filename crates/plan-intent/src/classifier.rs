//! Task-intent classification.

/// Substrings that mark a message as a likely task request.
///
/// Independent from the extractor's command-word list: "meeting" or "buy"
/// make a message a task request but are kept in the extracted title.
pub const TASK_INTENT_KEYWORDS: &[&str] = &[
    "add",
    "create",
    "remind",
    "schedule",
    "task",
    "todo",
    "meeting",
    "call",
    "buy",
    "workout",
    "appointment",
];

/// True iff `text` contains any of [`TASK_INTENT_KEYWORDS`], ignoring case.
#[must_use]
pub fn is_task_intent(text: &str) -> bool {
    let lowered = text.to_lowercase();
    TASK_INTENT_KEYWORDS
        .iter()
        .any(|keyword| lowered.contains(keyword))
}
