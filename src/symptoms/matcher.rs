use super::catalog::lookup;
use super::format::render_advisory;
use super::keywords::find_symptom_match;
use super::messages::{bot_messages, GENERIC_APOLOGY};
use super::sanitize::normalize_input;
use super::script::suggest_language;
use super::types::{FormattedResponse, MatchOutcome, ResponseKind, SymptomChecker};
use crate::models::enums::Language;

/// Classify free text against the keyword table of `language`.
///
/// Empty or whitespace-only text never matches.
pub fn analyze(text: &str, language: Language) -> MatchOutcome {
    let normalized = normalize_input(text);
    if normalized.is_empty() {
        return MatchOutcome::NotFound;
    }

    match find_symptom_match(&normalized, language) {
        None => MatchOutcome::NotFound,
        Some(hit) => match lookup(language, hit.symptom_key) {
            Some(entry) => MatchOutcome::Matched {
                symptom_key: hit.symptom_key,
                keyword: hit.keyword,
                entry,
            },
            None => MatchOutcome::Undocumented {
                symptom_key: hit.symptom_key,
            },
        },
    }
}

/// Produce the chatbot reply for `text` in `language`.
///
/// Deterministic: the same text and language always give the same reply.
pub fn match_symptom(text: &str, language: Language) -> FormattedResponse {
    respond(text, language, analyze(text, language))
}

/// Turn an already computed outcome into the reply.
fn respond(text: &str, language: Language, outcome: MatchOutcome) -> FormattedResponse {
    let messages = bot_messages(language);
    let suggested_language = suggest_language(text, language);

    match outcome {
        MatchOutcome::Matched {
            symptom_key, entry, ..
        } => match render_advisory(entry, messages) {
            Ok(text) => FormattedResponse {
                language,
                text,
                symptom_key: Some(symptom_key),
                kind: ResponseKind::Advisory {
                    has_emergency_warning: entry.emergency_warning.is_some(),
                },
                suggested_language,
            },
            Err(e) => {
                tracing::warn!(symptom_key, error = %e, "Advisory rendering failed");
                FormattedResponse {
                    language,
                    text: GENERIC_APOLOGY.to_string(),
                    symptom_key: None,
                    kind: ResponseKind::Apology,
                    suggested_language,
                }
            }
        },
        MatchOutcome::Undocumented { .. } | MatchOutcome::NotFound => FormattedResponse {
            language,
            text: messages.symptom_not_found.to_string(),
            symptom_key: None,
            kind: ResponseKind::NotFound,
            suggested_language,
        },
    }
}

/// Symptom checker backed by the built-in keyword and condition tables.
#[derive(Debug, Default, Clone, Copy)]
pub struct StaticSymptomChecker;

impl StaticSymptomChecker {
    pub fn new() -> Self {
        Self
    }
}

impl SymptomChecker for StaticSymptomChecker {
    fn check(&self, text: &str, language: Language) -> FormattedResponse {
        let outcome = analyze(text, language);

        // Log the decision only; the user's text stays out of the logs.
        match &outcome {
            MatchOutcome::Matched { symptom_key, .. } => {
                tracing::info!(
                    language = %language,
                    symptom_key,
                    input_len = text.len(),
                    "Symptom matched"
                );
            }
            MatchOutcome::Undocumented { symptom_key } => {
                tracing::debug!(
                    language = %language,
                    symptom_key,
                    "Keyword matched a key without detail entry"
                );
            }
            MatchOutcome::NotFound => {
                tracing::debug!(language = %language, input_len = text.len(), "No symptom matched");
            }
        }

        respond(text, language, outcome)
    }
}
