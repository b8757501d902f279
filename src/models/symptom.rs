use serde::Serialize;

use super::enums::Severity;

/// One possible diagnosis for a symptom. Static reference data.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Condition {
    pub name: &'static str,
    /// Confidence score, 0-100.
    pub accuracy: u8,
    pub description: &'static str,
    pub severity: Severity,
    pub recommendations: &'static [&'static str],
    pub when_to_see_doctor: &'static [&'static str],
}

/// Everything the checker knows about one symptom key in one language.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SymptomEntry {
    pub name: &'static str,
    pub possible_conditions: &'static [Condition],
    pub general_advice: &'static str,
    pub emergency_warning: Option<&'static str>,
}
