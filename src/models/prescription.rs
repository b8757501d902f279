use serde::{Deserialize, Serialize};

use super::enums::PatientStatus;

/// A patient waiting in (or being seen from) the doctor's queue.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Patient {
    pub id: String,
    pub name: String,
    pub age: u32,
    pub condition: String,
    pub status: PatientStatus,
    pub appointment_time: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PrescribedMedicine {
    pub name: String,
    pub dosage: String,
    pub frequency: String,
}

impl PrescribedMedicine {
    pub fn is_complete(&self) -> bool {
        !self.name.trim().is_empty()
            && !self.dosage.trim().is_empty()
            && !self.frequency.trim().is_empty()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Prescription {
    pub id: String,
    pub patient_id: String,
    pub patient_name: String,
    pub medications: Vec<PrescribedMedicine>,
    pub instructions: String,
}
