//! Symptom checker: keyword matching over per-language tables and
//! rendering of the advisory reply.
//!
//! Matching is a plain substring scan of the normalized input. Keys are
//! tried in declaration order and the first key with a contained keyword
//! wins. A key without a detail entry yields the "not found" reply.

pub mod catalog;
pub mod format;
pub mod keywords;
pub mod matcher;
pub mod messages;
pub mod sanitize;
pub mod script;
pub mod types;

pub use matcher::{analyze, match_symptom, StaticSymptomChecker};
pub use messages::{bot_messages, BotMessages};
pub use types::{CheckerError, FormattedResponse, MatchOutcome, ResponseKind, SymptomChecker};
