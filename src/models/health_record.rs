use serde::{Deserialize, Serialize};

use super::enums::{MedicationStatus, RecordPriority, RecordStatus, RecordType, VitalStatus, VitalType};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HealthRecord {
    pub id: String,
    pub record_type: RecordType,
    pub title: String,
    pub doctor: String,
    /// YYYY-MM-DD
    pub date: String,
    pub time: Option<String>,
    pub status: RecordStatus,
    pub notes: Option<String>,
    pub priority: Option<RecordPriority>,
}

/// Medication as listed in the records browser (not a prescription line).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RecordedMedication {
    pub id: String,
    pub name: String,
    pub dosage: String,
    pub frequency: String,
    pub start_date: String,
    pub end_date: String,
    pub doctor: String,
    pub status: MedicationStatus,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Vital {
    pub id: String,
    pub vital_type: VitalType,
    pub value: String,
    pub unit: String,
    pub date: String,
    pub time: String,
    pub status: VitalStatus,
}
