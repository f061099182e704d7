//! Chat-side confirmation flow for extracted task candidates.

use chrono::NaiveDateTime;
use plan_core::entities::TaskCandidate;
use plan_core::enums::ConfirmationState;
use plan_core::errors::CoreError;

use crate::classifier::is_task_intent;
use crate::error::IntentError;
use crate::extractor::Extractor;

/// One chat conversation's pending task, if any.
///
/// A task-like message produces a candidate and waits for the user to
/// confirm or cancel it. A newer task-like message replaces an unanswered
/// candidate.
#[derive(Debug, Clone, Default)]
pub struct ChatSession {
    extractor: Extractor,
    state: ConfirmationState,
    pending: Option<TaskCandidate>,
}

impl ChatSession {
    #[must_use]
    pub fn new(extractor: Extractor) -> Self {
        Self {
            extractor,
            state: ConfirmationState::Idle,
            pending: None,
        }
    }

    #[must_use]
    pub const fn state(&self) -> ConfirmationState {
        self.state
    }

    #[must_use]
    pub const fn pending(&self) -> Option<&TaskCandidate> {
        self.pending.as_ref()
    }

    /// Offer a candidate for `text` if it reads as a task request.
    ///
    /// Returns `None` and leaves the session untouched otherwise.
    pub fn handle_message(&mut self, text: &str, now: NaiveDateTime) -> Option<&TaskCandidate> {
        if !is_task_intent(text) {
            tracing::debug!(state = %self.state, "message is not a task request");
            return None;
        }

        let candidate = self.extractor.extract(text, now);
        if self.pending.is_some() {
            tracing::debug!("replacing unanswered task candidate");
        }
        self.state = ConfirmationState::AwaitingConfirmation;
        self.pending = Some(candidate);
        self.pending.as_ref()
    }

    /// Accept the pending candidate, handing it to the caller.
    ///
    /// # Errors
    ///
    /// Returns an invalid-transition error unless a candidate is awaiting
    /// confirmation.
    pub fn confirm(&mut self) -> Result<TaskCandidate, IntentError> {
        self.settle(ConfirmationState::Confirmed)
    }

    /// Discard the pending candidate, returning it.
    ///
    /// # Errors
    ///
    /// Returns an invalid-transition error unless a candidate is awaiting
    /// confirmation.
    pub fn cancel(&mut self) -> Result<TaskCandidate, IntentError> {
        self.settle(ConfirmationState::Cancelled)
    }

    /// Return to idle, dropping any pending candidate.
    pub fn reset(&mut self) {
        self.state = ConfirmationState::Idle;
        self.pending = None;
    }

    fn settle(&mut self, next: ConfirmationState) -> Result<TaskCandidate, IntentError> {
        if !self.state.can_transition_to(next) {
            return Err(CoreError::InvalidTransition {
                entity_type: "chat_session".to_string(),
                from: self.state.to_string(),
                to: next.to_string(),
            }
            .into());
        }
        let candidate = self.pending.take().ok_or(IntentError::NothingPending)?;
        self.state = next;
        tracing::debug!(state = %next, title = %candidate.title, "task candidate settled");
        Ok(candidate)
    }
}
