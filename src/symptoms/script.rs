//! Lightweight script detection for symptom text.
//!
//! Counts letters per Unicode block and maps the dominant script to one of
//! the supported languages. Used only to hint that the user may be typing
//! in a language other than the one selected; it never changes matching.

use crate::models::enums::Language;

/// Minimum letters before a guess is made.
const MIN_LETTERS: u32 = 2;

/// Detect which supported language the text is most likely written in.
/// Returns `None` for text with too few letters or no dominant script.
pub fn detect_language(text: &str) -> Option<Language> {
    let mut latin = 0u32;
    let mut devanagari = 0u32;
    let mut gurmukhi = 0u32;

    for ch in text.chars() {
        match ch {
            'a'..='z' | 'A'..='Z' => latin += 1,
            '\u{0900}'..='\u{097F}' => devanagari += 1,
            '\u{0A00}'..='\u{0A7F}' => gurmukhi += 1,
            _ => {}
        }
    }

    let scores = [
        (Language::English, latin),
        (Language::Hindi, devanagari),
        (Language::Punjabi, gurmukhi),
    ];
    let (best, best_score) = scores
        .iter()
        .copied()
        .max_by_key(|(_, score)| *score)?;

    if best_score < MIN_LETTERS {
        return None;
    }
    // Ties between scripts give no usable signal.
    let tied = scores
        .iter()
        .filter(|(_, score)| *score == best_score)
        .count();
    if tied > 1 {
        return None;
    }
    Some(best)
}

/// A language to suggest when `text` looks like it belongs to a different
/// supported language than `selected`.
pub fn suggest_language(text: &str, selected: Language) -> Option<Language> {
    detect_language(text).filter(|detected| *detected != selected)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn detects_latin_as_english() {
        assert_eq!(detect_language("headache"), Some(Language::English));
    }

    #[test]
    fn detects_devanagari_as_hindi() {
        assert_eq!(detect_language("मुझे बुखार है"), Some(Language::Hindi));
    }

    #[test]
    fn detects_gurmukhi_as_punjabi() {
        assert_eq!(detect_language("ਮੈਨੂੰ ਖਾਂਸੀ ਹੈ"), Some(Language::Punjabi));
    }

    #[test]
    fn too_short_or_symbolic_gives_none() {
        assert_eq!(detect_language("a"), None);
        assert_eq!(detect_language("123 !!"), None);
        assert_eq!(detect_language(""), None);
    }

    #[test]
    fn mixed_script_picks_dominant() {
        assert_eq!(detect_language("mera सिरदर्द बहुत तेज़ है"), Some(Language::Hindi));
    }

    #[test]
    fn suggestion_skips_selected_language() {
        assert_eq!(suggest_language("headache", Language::English), None);
        assert_eq!(
            suggest_language("headache", Language::Punjabi),
            Some(Language::English)
        );
    }
}
