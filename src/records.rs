//! Health-records browser over the demo patient's records.
//!
//! Records come in two groups (recent and medical history), plus a
//! medication list and the latest vitals. The "all" view can be narrowed by
//! record type and by a case-insensitive search over title, doctor and
//! notes.

use std::str::FromStr;

use serde::Serialize;

use crate::models::enums::{
    str_enum, MedicationStatus, RecordPriority, RecordStatus, RecordType, VitalStatus, VitalType,
};
use crate::models::{HealthRecord, ModelError, RecordedMedication, Vital};

str_enum!(RecordsTab {
    All => "all",
    Recent => "recent",
    Medical => "medical",
    Medications => "medications",
    Vitals => "vitals",
});

impl RecordsTab {
    pub fn label(&self) -> &'static str {
        match self {
            Self::All => "All Records",
            Self::Recent => "Recent",
            Self::Medical => "Medical History",
            Self::Medications => "Medications",
            Self::Vitals => "Vitals",
        }
    }
}

/// Type filter applied to the "all" view.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum RecordFilter {
    #[default]
    All,
    Type(RecordType),
}

impl RecordFilter {
    pub fn matches(&self, record: &HealthRecord) -> bool {
        match self {
            Self::All => true,
            Self::Type(t) => record.record_type == *t,
        }
    }
}

impl FromStr for RecordFilter {
    type Err = ModelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s == "all" {
            return Ok(Self::All);
        }
        s.parse().map(Self::Type)
    }
}

/// One entry of the filter sheet with its badge count.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct FilterOption {
    pub filter: RecordFilter,
    pub label: &'static str,
    pub count: usize,
}

pub fn vital_label(vital_type: VitalType) -> &'static str {
    match vital_type {
        VitalType::BloodPressure => "Blood Pressure",
        VitalType::HeartRate => "Heart Rate",
        VitalType::Temperature => "Temperature",
        VitalType::Oxygen => "Oxygen Saturation",
    }
}

pub fn status_icon(status: RecordStatus) -> &'static str {
    match status {
        RecordStatus::Completed => "✅",
        RecordStatus::Active => "🟢",
        RecordStatus::Pending => "🟡",
        RecordStatus::Cancelled => "❌",
    }
}

/// Everything the browser can show.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct HealthRecordsData {
    pub recent: Vec<HealthRecord>,
    pub medical_history: Vec<HealthRecord>,
    pub medications: Vec<RecordedMedication>,
    pub vitals: Vec<Vital>,
}

fn record(
    id: &str,
    record_type: RecordType,
    title: &str,
    doctor: &str,
    date: &str,
    time: Option<&str>,
    status: RecordStatus,
    notes: &str,
    priority: Option<RecordPriority>,
) -> HealthRecord {
    HealthRecord {
        id: id.to_string(),
        record_type,
        title: title.to_string(),
        doctor: doctor.to_string(),
        date: date.to_string(),
        time: time.map(str::to_string),
        status,
        notes: Some(notes.to_string()),
        priority,
    }
}

fn medication(
    id: &str,
    name: &str,
    dosage: &str,
    frequency: &str,
    dates: (&str, &str),
    doctor: &str,
) -> RecordedMedication {
    RecordedMedication {
        id: id.to_string(),
        name: name.to_string(),
        dosage: dosage.to_string(),
        frequency: frequency.to_string(),
        start_date: dates.0.to_string(),
        end_date: dates.1.to_string(),
        doctor: doctor.to_string(),
        status: MedicationStatus::Active,
    }
}

fn vital(id: &str, vital_type: VitalType, value: &str, unit: &str) -> Vital {
    Vital {
        id: id.to_string(),
        vital_type,
        value: value.to_string(),
        unit: unit.to_string(),
        date: "2024-01-15".to_string(),
        time: "10:30 AM".to_string(),
        status: VitalStatus::Normal,
    }
}

impl HealthRecordsData {
    /// The demo patient's records.
    pub fn demo() -> Self {
        use RecordStatus::{Active, Completed};
        use RecordType::*;

        Self {
            recent: vec![
                record(
                    "1",
                    Consultation,
                    "General Checkup",
                    "Dr. Sarah Johnson",
                    "2024-01-15",
                    Some("10:30 AM"),
                    Completed,
                    "Routine annual checkup. All vitals normal. Blood pressure 120/80, heart rate 72 bpm.",
                    Some(RecordPriority::Routine),
                ),
                record(
                    "2",
                    Lab,
                    "Blood Test Results",
                    "LabCorp Diagnostics",
                    "2024-01-10",
                    Some("09:00 AM"),
                    Completed,
                    "Complete blood count and lipid profile. All parameters within normal range.",
                    Some(RecordPriority::Important),
                ),
                record(
                    "3",
                    Prescription,
                    "Medication Renewal",
                    "Dr. Michael Chen",
                    "2024-01-08",
                    Some("02:15 PM"),
                    Active,
                    "Vitamin D supplements - 3 months. Take one tablet daily with food.",
                    Some(RecordPriority::Routine),
                ),
            ],
            medical_history: vec![
                record(
                    "4",
                    Vaccination,
                    "Flu Vaccination",
                    "Community Health Center",
                    "2023-12-15",
                    None,
                    Completed,
                    "Seasonal influenza vaccine administered. No adverse reactions reported.",
                    None,
                ),
                record(
                    "5",
                    Surgery,
                    "Appendectomy",
                    "Dr. Robert Wilson",
                    "2022-08-20",
                    None,
                    Completed,
                    "Emergency appendectomy surgery. Recovery period: 6 weeks.",
                    None,
                ),
                record(
                    "6",
                    Consultation,
                    "Dermatology Consultation",
                    "Dr. Emily Davis",
                    "2023-11-05",
                    None,
                    Completed,
                    "Skin allergy treatment prescribed. Follow-up in 3 months.",
                    None,
                ),
            ],
            medications: vec![
                medication(
                    "7",
                    "Atorvastatin",
                    "20mg",
                    "Once daily",
                    ("2024-01-01", "2024-06-01"),
                    "Dr. Sarah Johnson",
                ),
                medication(
                    "8",
                    "Vitamin D3",
                    "1000 IU",
                    "Once daily",
                    ("2024-01-08", "2024-04-08"),
                    "Dr. Michael Chen",
                ),
                medication(
                    "9",
                    "Metformin",
                    "500mg",
                    "Twice daily",
                    ("2023-11-15", "2024-05-15"),
                    "Dr. Emily Davis",
                ),
            ],
            vitals: vec![
                vital("10", VitalType::BloodPressure, "120/80", "mmHg"),
                vital("11", VitalType::HeartRate, "72", "bpm"),
                vital("12", VitalType::Temperature, "98.6", "°F"),
                vital("13", VitalType::Oxygen, "98", "%"),
            ],
        }
    }

    /// Recent records followed by medical history.
    pub fn all_records(&self) -> impl Iterator<Item = &HealthRecord> {
        self.recent.iter().chain(self.medical_history.iter())
    }
}

/// Case-insensitive match of `query` against title, doctor and notes.
/// An empty query matches everything.
pub fn matches_query(record: &HealthRecord, query: &str) -> bool {
    if query.is_empty() {
        return true;
    }
    let query = query.to_lowercase();
    record.title.to_lowercase().contains(&query)
        || record.doctor.to_lowercase().contains(&query)
        || record
            .notes
            .as_deref()
            .is_some_and(|notes| notes.to_lowercase().contains(&query))
}

/// What the active tab shows.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", content = "items", rename_all = "snake_case")]
pub enum RecordsView<'a> {
    Records(Vec<&'a HealthRecord>),
    Medications(&'a [RecordedMedication]),
    Vitals(&'a [Vital]),
}

impl RecordsView<'_> {
    pub fn len(&self) -> usize {
        match self {
            Self::Records(records) => records.len(),
            Self::Medications(meds) => meds.len(),
            Self::Vitals(vitals) => vitals.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// `1 record` / `3 records`
    pub fn count_label(&self) -> String {
        match self.len() {
            1 => "1 record".to_string(),
            n => format!("{n} records"),
        }
    }
}

/// Browser state: active tab, type filter and search text.
#[derive(Debug, Clone)]
pub struct RecordsBrowser {
    data: HealthRecordsData,
    pub active_tab: RecordsTab,
    pub filter: RecordFilter,
    pub search_query: String,
}

impl Default for RecordsBrowser {
    fn default() -> Self {
        Self::new(HealthRecordsData::demo())
    }
}

impl RecordsBrowser {
    pub fn new(data: HealthRecordsData) -> Self {
        Self {
            data,
            active_tab: RecordsTab::All,
            filter: RecordFilter::All,
            search_query: String::new(),
        }
    }

    pub fn data(&self) -> &HealthRecordsData {
        &self.data
    }

    /// All records after the type filter and search are applied.
    pub fn filtered_records(&self) -> Vec<&HealthRecord> {
        self.data
            .all_records()
            .filter(|r| self.filter.matches(r))
            .filter(|r| matches_query(r, &self.search_query))
            .collect()
    }

    pub fn current_view(&self) -> RecordsView<'_> {
        match self.active_tab {
            RecordsTab::All => RecordsView::Records(self.filtered_records()),
            RecordsTab::Recent => RecordsView::Records(self.data.recent.iter().collect()),
            RecordsTab::Medical => {
                RecordsView::Records(self.data.medical_history.iter().collect())
            }
            RecordsTab::Medications => RecordsView::Medications(&self.data.medications),
            RecordsTab::Vitals => RecordsView::Vitals(&self.data.vitals),
        }
    }

    /// Badge count per tab.
    pub fn tab_count(&self, tab: RecordsTab) -> usize {
        match tab {
            RecordsTab::All => self.data.recent.len() + self.data.medical_history.len(),
            RecordsTab::Recent => self.data.recent.len(),
            RecordsTab::Medical => self.data.medical_history.len(),
            RecordsTab::Medications => self.data.medications.len(),
            RecordsTab::Vitals => self.data.vitals.len(),
        }
    }

    /// Filter sheet entries. Consultation, lab and prescription counts
    /// cover recent records; vaccinations cover medical history.
    pub fn filter_options(&self) -> Vec<FilterOption> {
        let count_in = |records: &[HealthRecord], t: RecordType| {
            records.iter().filter(|r| r.record_type == t).count()
        };
        let recent = &self.data.recent;
        vec![
            FilterOption {
                filter: RecordFilter::All,
                label: "All Records",
                count: recent.len(),
            },
            FilterOption {
                filter: RecordFilter::Type(RecordType::Consultation),
                label: "Consultations",
                count: count_in(recent, RecordType::Consultation),
            },
            FilterOption {
                filter: RecordFilter::Type(RecordType::Lab),
                label: "Lab Tests",
                count: count_in(recent, RecordType::Lab),
            },
            FilterOption {
                filter: RecordFilter::Type(RecordType::Prescription),
                label: "Prescriptions",
                count: count_in(recent, RecordType::Prescription),
            },
            FilterOption {
                filter: RecordFilter::Type(RecordType::Vaccination),
                label: "Vaccinations",
                count: count_in(&self.data.medical_history, RecordType::Vaccination),
            },
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ids(records: &[&HealthRecord]) -> Vec<String> {
        records.iter().map(|r| r.id.clone()).collect()
    }

    #[test]
    fn demo_data_shape() {
        let data = HealthRecordsData::demo();
        assert_eq!(data.recent.len(), 3);
        assert_eq!(data.medical_history.len(), 3);
        assert_eq!(data.medications.len(), 3);
        assert_eq!(data.vitals.len(), 4);
        assert_eq!(data.vitals[2].unit, "°F");
        assert!(data.medical_history.iter().all(|r| r.time.is_none()));
    }

    #[test]
    fn unfiltered_all_view_lists_recent_then_history() {
        let browser = RecordsBrowser::default();
        assert_eq!(ids(&browser.filtered_records()), ["1", "2", "3", "4", "5", "6"]);
        assert_eq!(browser.current_view().count_label(), "6 records");
    }

    #[test]
    fn type_filter_spans_both_groups() {
        let mut browser = RecordsBrowser::default();
        browser.filter = "consultation".parse().unwrap();
        assert_eq!(ids(&browser.filtered_records()), ["1", "6"]);
    }

    #[test]
    fn search_is_case_insensitive_over_doctor_and_notes() {
        let mut browser = RecordsBrowser::default();
        browser.search_query = "EMILY".into();
        assert_eq!(ids(&browser.filtered_records()), ["6"]);

        browser.search_query = "influenza".into();
        assert_eq!(ids(&browser.filtered_records()), ["4"]);
    }

    #[test]
    fn filter_and_search_combine() {
        let mut browser = RecordsBrowser::default();
        browser.filter = RecordFilter::Type(RecordType::Lab);
        browser.search_query = "checkup".into();
        let view = browser.current_view();
        assert!(view.is_empty());
        assert_eq!(view.count_label(), "0 records");
    }

    #[test]
    fn tab_views_ignore_filter() {
        let mut browser = RecordsBrowser::default();
        browser.search_query = "nothing matches this".into();

        browser.active_tab = RecordsTab::Medications;
        assert_eq!(browser.current_view().len(), 3);
        browser.active_tab = RecordsTab::Vitals;
        assert_eq!(browser.current_view().len(), 4);
        browser.active_tab = RecordsTab::Medical;
        assert_eq!(browser.current_view().len(), 3);
    }

    #[test]
    fn tab_counts() {
        let browser = RecordsBrowser::default();
        assert_eq!(browser.tab_count(RecordsTab::All), 6);
        assert_eq!(browser.tab_count(RecordsTab::Vitals), 4);
    }

    #[test]
    fn filter_counts_follow_source_groups() {
        let counts: Vec<(&str, usize)> = RecordsBrowser::default()
            .filter_options()
            .iter()
            .map(|o| (o.label, o.count))
            .collect();
        assert_eq!(
            counts,
            [
                ("All Records", 3),
                ("Consultations", 1),
                ("Lab Tests", 1),
                ("Prescriptions", 1),
                ("Vaccinations", 1),
            ]
        );
    }

    #[test]
    fn filter_parses_all_and_types() {
        assert_eq!("all".parse::<RecordFilter>().unwrap(), RecordFilter::All);
        assert_eq!(
            "surgery".parse::<RecordFilter>().unwrap(),
            RecordFilter::Type(RecordType::Surgery)
        );
        assert!("dental".parse::<RecordFilter>().is_err());
    }

    #[test]
    fn single_record_label() {
        let mut browser = RecordsBrowser::default();
        browser.search_query = "appendectomy".into();
        assert_eq!(browser.current_view().count_label(), "1 record");
    }

    #[test]
    fn labels_and_icons() {
        assert_eq!(vital_label(VitalType::Oxygen), "Oxygen Saturation");
        assert_eq!(status_icon(RecordStatus::Completed), "✅");
        assert_eq!(RecordsTab::Medical.label(), "Medical History");
    }
}
