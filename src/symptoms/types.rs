use serde::Serialize;
use thiserror::Error;

use crate::models::enums::Language;
use crate::models::SymptomEntry;

/// What the matcher decided about one piece of user text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MatchOutcome {
    /// A keyword matched and the key has a detail entry.
    Matched {
        symptom_key: &'static str,
        keyword: &'static str,
        entry: &'static SymptomEntry,
    },
    /// A keyword matched but the key has no detail entry in this language.
    Undocumented { symptom_key: &'static str },
    /// No keyword of the active language occurs in the text.
    NotFound,
}

impl MatchOutcome {
    pub fn symptom_key(&self) -> Option<&'static str> {
        match self {
            Self::Matched { symptom_key, .. } | Self::Undocumented { symptom_key } => {
                Some(*symptom_key)
            }
            Self::NotFound => None,
        }
    }
}

/// The rendered chatbot reply plus what produced it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FormattedResponse {
    pub language: Language,
    pub text: String,
    /// Key of the documented symptom the reply describes, if any.
    pub symptom_key: Option<&'static str>,
    pub kind: ResponseKind,
    /// Set when the text appears to be written in another supported
    /// language. Informational; `text` is never affected.
    pub suggested_language: Option<Language>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ResponseKind {
    /// Full advisory for a documented symptom.
    Advisory { has_emergency_warning: bool },
    /// The language's "symptom not found" message.
    NotFound,
    /// Building the advisory failed; generic apology.
    Apology,
}

/// Symptom checker errors.
#[derive(Error, Debug)]
pub enum CheckerError {
    #[error("Response formatting failed: {0}")]
    Formatting(#[from] std::fmt::Error),
}

/// Maps free text in a selected language to a chatbot reply.
pub trait SymptomChecker: Send + Sync {
    /// Produce the reply for `text`. Never fails: errors become the
    /// generic apology.
    fn check(&self, text: &str, language: Language) -> FormattedResponse;
}
