//! Cross-cutting error types for dayplan.
//!
//! Domain-specific errors (`IntentError`, `ConfigError`) are defined in their
//! respective crates. They converge into `anyhow` in `plan-cli`.

use thiserror::Error;

/// Errors that can be raised by any dayplan crate.
#[derive(Debug, Error)]
pub enum CoreError {
    /// A state machine transition was attempted that is not allowed.
    #[error("Invalid state transition: {entity_type} from {from} to {to}")]
    InvalidTransition {
        entity_type: String,
        from: String,
        to: String,
    },

    /// Data failed validation (format, range, enum spelling).
    #[error("Validation error: {0}")]
    Validation(String),
}
