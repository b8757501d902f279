use std::fmt::Write;
use std::sync::LazyLock;

use regex::Regex;

use super::messages::BotMessages;
use super::types::CheckerError;
use crate::models::SymptomEntry;

/// Render the advisory for a documented symptom.
///
/// Layout: heading, each condition with severity, `✓` recommendations and
/// `⚠️` doctor-visit triggers, general advice, optional emergency warning,
/// then the disclaimer as the final text.
pub fn render_advisory(
    entry: &SymptomEntry,
    messages: &BotMessages,
) -> Result<String, CheckerError> {
    let mut out = String::new();

    write!(out, "**{} Analysis**\n\n", entry.name)?;
    out.push_str("**Possible Conditions:**\n");

    for condition in entry.possible_conditions {
        writeln!(out, "• **{}** ({}% accuracy)", condition.name, condition.accuracy)?;
        writeln!(out, "  {}", condition.description)?;
        writeln!(out, "  **Severity:** {}", condition.severity)?;

        out.push_str("  **Recommendations:**\n");
        for rec in condition.recommendations {
            writeln!(out, "  ✓ {rec}")?;
        }

        out.push_str("  **When to see a doctor:**\n");
        for when in condition.when_to_see_doctor {
            writeln!(out, "  ⚠️ {when}")?;
        }

        out.push('\n');
    }

    write!(out, "**General Advice:**\n{}\n\n", entry.general_advice)?;

    if let Some(warning) = entry.emergency_warning {
        write!(out, "🚨 **EMERGENCY WARNING:** {warning}\n\n")?;
    }

    out.push_str(messages.disclaimer);
    Ok(out)
}

/// How a rendered line should be displayed by a front-end.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineStyle {
    Blank,
    Bullet,
    Heading,
    Emergency,
    Text,
}

/// Classify one line of a reply the way the chat screen styles it.
pub fn classify_line(line: &str) -> LineStyle {
    if line.trim().is_empty() {
        LineStyle::Blank
    } else if line.starts_with('•') || line.starts_with('✓') || line.starts_with("⚠️") {
        LineStyle::Bullet
    } else if line.starts_with("**") && line.ends_with("**") {
        LineStyle::Heading
    } else if line.contains('🚨') {
        LineStyle::Emergency
    } else {
        LineStyle::Text
    }
}

/// Strip paired `**` emphasis markers for plain-text display.
pub fn strip_emphasis(line: &str) -> String {
    static EMPHASIS: LazyLock<Regex> =
        LazyLock::new(|| Regex::new(r"\*\*(.+?)\*\*").expect("Invalid emphasis pattern"));
    EMPHASIS.replace_all(line, "$1").into_owned()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::enums::Language;
    use crate::symptoms::catalog::lookup;
    use crate::symptoms::messages::bot_messages;

    #[test]
    fn fever_advisory_layout() {
        let entry = lookup(Language::English, "fever").unwrap();
        let text = render_advisory(entry, bot_messages(Language::English)).unwrap();

        let expected_start = "**Fever Analysis**\n\n\
            **Possible Conditions:**\n\
            • **Viral Infection** (80% accuracy)\n  \
            Common viral illnesses causing elevated body temperature\n  \
            **Severity:** Low\n  \
            **Recommendations:**\n  \
            ✓ Rest and stay hydrated\n";
        assert!(text.starts_with(expected_start), "got:\n{text}");
        assert!(text.contains("  ⚠️ Lasts more than 3 days\n"));
        assert!(text.contains(
            "**General Advice:**\nFever helps fight infection. Focus on comfort and hydration.\n\n"
        ));
        assert!(!text.contains("EMERGENCY"));
        assert!(text.ends_with(bot_messages(Language::English).disclaimer));
    }

    #[test]
    fn emergency_block_precedes_disclaimer() {
        let entry = lookup(Language::English, "chest pain").unwrap();
        let text = render_advisory(entry, bot_messages(Language::English)).unwrap();
        let warning = text.find("🚨 **EMERGENCY WARNING:**").unwrap();
        let disclaimer = text.rfind("⚠️ AI-powered").unwrap();
        assert!(warning < disclaimer);
    }

    #[test]
    fn classify_reply_lines() {
        assert_eq!(classify_line(""), LineStyle::Blank);
        assert_eq!(classify_line("• **Migraine** (75% accuracy)"), LineStyle::Bullet);
        assert_eq!(classify_line("**Possible Conditions:**"), LineStyle::Heading);
        assert_eq!(classify_line("🚨 **EMERGENCY WARNING:** go"), LineStyle::Emergency);
        // Indented bullets are plain text in the chat screen.
        assert_eq!(classify_line("  ✓ Stay hydrated"), LineStyle::Text);
    }

    #[test]
    fn strip_emphasis_removes_markers() {
        assert_eq!(strip_emphasis("**Fever Analysis**"), "Fever Analysis");
        assert_eq!(
            strip_emphasis("  **Severity:** Low"),
            "  Severity: Low"
        );
        assert_eq!(
            strip_emphasis("🚨 **EMERGENCY WARNING:** Call 108"),
            "🚨 EMERGENCY WARNING: Call 108"
        );
    }

    #[test]
    fn strip_emphasis_keeps_unpaired_stars() {
        assert_eq!(strip_emphasis("rate 5** pain"), "rate 5** pain");
    }
}
