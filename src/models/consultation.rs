use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::enums::{ConsultationPriority, ConsultationType, MedicineTiming, TimeSlot};

/// Video-consultation booking form.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ConsultationData {
    pub sehat_id: String,
    pub consultation_type: ConsultationType,
    pub preferred_date: NaiveDate,
    pub preferred_slot: TimeSlot,
    pub medicine_timing: MedicineTiming,
    pub symptoms: String,
    pub priority: ConsultationPriority,
    pub doctor_preference: String,
}

impl ConsultationData {
    /// Blank form with the booking screen's defaults, dated `today`.
    pub fn new(today: NaiveDate) -> Self {
        Self {
            sehat_id: String::new(),
            consultation_type: ConsultationType::General,
            preferred_date: today,
            preferred_slot: TimeSlot::Morning,
            medicine_timing: MedicineTiming::Morning,
            symptoms: String::new(),
            priority: ConsultationPriority::Normal,
            doctor_preference: String::new(),
        }
    }
}
