//! Query-side helpers for note listing.
//!
//! # Responsibility
//! - Normalize free-text date expressions into calendar days.
//! - Translate a calendar day into the store's timestamp range filter.

pub mod date_input;
