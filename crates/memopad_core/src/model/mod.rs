//! Domain model for user-authored notes.
//!
//! # Responsibility
//! - Define the canonical note record and its creation payload.
//! - Enforce content/description invariants before persistence.
//!
//! # Invariants
//! - Note identity is a store-assigned integer and never reused.
//! - `content` is non-empty; `description` is capped at 500 characters.

pub mod note;
