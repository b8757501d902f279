use chrono::{DateTime, Local};

use super::DashboardError;
use crate::forms::{book_consultation, BookedConsultation, BookingConfirmation};
use crate::models::enums::str_enum;
use crate::models::ConsultationData;
use crate::navigation::Route;

str_enum!(PatientTab {
    Dashboard => "dashboard",
    Prescription => "prescription",
    HealthRecord => "healthRecord",
    Consult => "consult",
});

impl PatientTab {
    pub fn label(&self) -> &'static str {
        match self {
            Self::Dashboard => "Home",
            Self::Prescription => "Prescriptions",
            Self::HealthRecord => "Records",
            Self::Consult => "Book Consult",
        }
    }

    /// The bottom bar highlights the booking tab.
    pub fn is_featured(&self) -> bool {
        matches!(self, Self::Consult)
    }
}

/// State behind the patient's home dashboard.
#[derive(Debug, Clone)]
pub struct PatientDashboard {
    pub active_tab: PatientTab,
    pub symptom_input: String,
    /// Newest first.
    bookings: Vec<BookedConsultation>,
}

impl Default for PatientDashboard {
    fn default() -> Self {
        Self::new()
    }
}

impl PatientDashboard {
    pub fn new() -> Self {
        Self {
            active_tab: PatientTab::Dashboard,
            symptom_input: String::new(),
            bookings: Vec::new(),
        }
    }

    pub fn select_tab(&mut self, tab: PatientTab) {
        self.active_tab = tab;
    }

    /// Acknowledge the quick symptom box and clear it. Blank input is
    /// ignored.
    pub fn quick_symptom_check(&mut self) -> Option<String> {
        if self.symptom_input.trim().is_empty() {
            return None;
        }
        let text = std::mem::take(&mut self.symptom_input);
        Some(format!("Analyzing symptoms: {text}"))
    }

    pub fn book(
        &mut self,
        data: &ConsultationData,
        now: DateTime<Local>,
    ) -> Result<BookingConfirmation, DashboardError> {
        let confirmation = book_consultation(data, now)?;
        self.bookings.insert(0, confirmation.booking.clone());
        Ok(confirmation)
    }

    pub fn bookings(&self) -> &[BookedConsultation] {
        &self.bookings
    }

    /// Receipt text for a previous booking plus the confirmation line.
    pub fn download_receipt(&self, booking_id: &str) -> Result<(String, String), DashboardError> {
        let booking = self
            .bookings
            .iter()
            .find(|b| b.booking_id == booking_id)
            .ok_or_else(|| DashboardError::UnknownBooking(booking_id.to_string()))?;
        Ok((
            booking.receipt_text(),
            format!("Receipt for {} downloaded successfully!", booking.booking_id),
        ))
    }

    pub fn logout(&self) -> Route {
        Route::Home
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::forms::ValidationError;
    use chrono::{NaiveDate, TimeZone};

    fn data() -> ConsultationData {
        let mut data = ConsultationData::new(NaiveDate::from_ymd_opt(2024, 1, 15).unwrap());
        data.sehat_id = "SH-001".into();
        data.symptoms = "Cough".into();
        data
    }

    #[test]
    fn tabs_have_labels_and_one_featured() {
        assert_eq!(PatientTab::ALL.len(), 4);
        assert_eq!(PatientTab::HealthRecord.as_str(), "healthRecord");
        assert_eq!(PatientTab::Consult.label(), "Book Consult");
        assert_eq!(PatientTab::ALL.iter().filter(|t| t.is_featured()).count(), 1);
    }

    #[test]
    fn quick_check_echoes_and_clears() {
        let mut dash = PatientDashboard::new();
        dash.symptom_input = "sore throat".into();
        assert_eq!(
            dash.quick_symptom_check().as_deref(),
            Some("Analyzing symptoms: sore throat")
        );
        assert!(dash.symptom_input.is_empty());
        assert_eq!(dash.quick_symptom_check(), None);
    }

    #[test]
    fn bookings_are_newest_first() {
        let mut dash = PatientDashboard::new();
        let first = Local.timestamp_millis_opt(1_705_312_000_001).unwrap();
        let second = Local.timestamp_millis_opt(1_705_312_000_002).unwrap();
        dash.book(&data(), first).unwrap();
        dash.book(&data(), second).unwrap();

        let ids: Vec<_> = dash.bookings().iter().map(|b| b.booking_id.as_str()).collect();
        assert_eq!(ids, ["CN-000002", "CN-000001"]);
    }

    #[test]
    fn invalid_booking_is_not_stored() {
        let mut dash = PatientDashboard::new();
        let mut bad = data();
        bad.sehat_id.clear();
        let err = dash.book(&bad, Local::now()).unwrap_err();
        assert_eq!(err, DashboardError::Validation(ValidationError::MissingSehatId));
        assert!(dash.bookings().is_empty());
    }

    #[test]
    fn download_receipt_by_id() {
        let mut dash = PatientDashboard::new();
        let now = Local.timestamp_millis_opt(1_705_312_345_678).unwrap();
        dash.book(&data(), now).unwrap();

        let (receipt, message) = dash.download_receipt("CN-345678").unwrap();
        assert!(receipt.contains("Sehat ID: SH-001"));
        assert_eq!(message, "Receipt for CN-345678 downloaded successfully!");
        assert!(matches!(
            dash.download_receipt("CN-000000"),
            Err(DashboardError::UnknownBooking(_))
        ));
    }
}
