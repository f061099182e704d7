//! # plan-core
//!
//! Core types and error types for dayplan.
//!
//! This crate provides the foundational types shared across all dayplan crates:
//! - `TaskCandidate`, the structured record produced from free-text chat input
//! - `NewRoutine`, the payload handed to the routine-creation endpoint
//! - Priority, category, repeat, and confirmation enums
//! - Cross-cutting error types
//! - CLI response types
//! - The `HH:MM` serde adapter for clock times

pub mod clock_serde;
pub mod entities;
pub mod enums;
pub mod errors;
pub mod responses;
