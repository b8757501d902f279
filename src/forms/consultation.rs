use chrono::{DateTime, Local, NaiveDate};
use serde::Serialize;

use super::{is_blank, ValidationError};
use crate::models::ConsultationData;
use crate::navigation::ExternalLink;

pub const BOOKING_SUCCESS_MESSAGE: &str = "Consultation booked successfully!";

/// `Mon, Jan 15, 2024`
pub fn format_short_date(date: NaiveDate) -> String {
    date.format("%a, %b %-d, %Y").to_string()
}

/// `Monday, January 15, 2024`
pub fn format_long_date(date: NaiveDate) -> String {
    date.format("%A, %B %-d, %Y").to_string()
}

/// Booking reference: `CN-` plus the last six digits of the millisecond
/// timestamp.
pub fn booking_id(booked_at: DateTime<Local>) -> String {
    let millis = booked_at.timestamp_millis().rem_euclid(1_000_000);
    format!("CN-{millis:06}")
}

pub fn validate_booking(data: &ConsultationData) -> Result<(), ValidationError> {
    if is_blank(&data.sehat_id) {
        return Err(ValidationError::MissingSehatId);
    }
    if is_blank(&data.symptoms) {
        return Err(ValidationError::MissingSymptoms);
    }
    Ok(())
}

/// A consultation the patient has booked.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BookedConsultation {
    pub booking_id: String,
    pub booked_at: DateTime<Local>,
    pub data: ConsultationData,
}

impl BookedConsultation {
    /// Label/value rows shown on the booking receipt.
    pub fn receipt_rows(&self) -> Vec<(&'static str, String)> {
        let data = &self.data;
        let mut rows = vec![
            ("Booking ID", self.booking_id.clone()),
            ("Sehat ID", data.sehat_id.clone()),
            ("Consultation Type", data.consultation_type.label().to_string()),
            ("Date", format_long_date(data.preferred_date)),
            ("Time Slot", data.preferred_slot.label().to_string()),
            ("Medicine Timing", data.medicine_timing.label().to_string()),
            ("Priority", data.priority.as_str().to_uppercase()),
        ];
        if !is_blank(&data.doctor_preference) {
            rows.push(("Doctor Preference", data.doctor_preference.clone()));
        }
        rows.push(("Symptoms", data.symptoms.clone()));
        rows.push((
            "Booked on",
            self.booked_at.format("%-m/%-d/%Y at %-I:%M:%S %p").to_string(),
        ));
        rows
    }

    /// Plain-text receipt.
    pub fn receipt_text(&self) -> String {
        let mut out = String::from("Booking Confirmed!\n");
        for (label, value) in self.receipt_rows() {
            out.push_str(label);
            out.push_str(": ");
            out.push_str(&value);
            out.push('\n');
        }
        out
    }
}

/// Result of a successful booking.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BookingConfirmation {
    pub booking: BookedConsultation,
    /// Opened right after booking so the patient can join the call.
    pub video_link: ExternalLink,
    pub message: &'static str,
}

pub fn book_consultation(
    data: &ConsultationData,
    now: DateTime<Local>,
) -> Result<BookingConfirmation, ValidationError> {
    validate_booking(data)?;
    let booking = BookedConsultation {
        booking_id: booking_id(now),
        booked_at: now,
        data: data.clone(),
    };
    tracing::info!(
        booking_id = %booking.booking_id,
        consultation_type = %data.consultation_type,
        priority = %data.priority,
        "Consultation booked"
    );
    Ok(BookingConfirmation {
        booking,
        video_link: ExternalLink::VideoConsultation,
        message: BOOKING_SUCCESS_MESSAGE,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::enums::{ConsultationPriority, ConsultationType};
    use chrono::TimeZone;

    fn jan_15() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 1, 15).unwrap()
    }

    fn filled() -> ConsultationData {
        let mut data = ConsultationData::new(jan_15());
        data.sehat_id = "SH-001".into();
        data.symptoms = "Fever for two days".into();
        data
    }

    #[test]
    fn short_date_format() {
        assert_eq!(format_short_date(jan_15()), "Mon, Jan 15, 2024");
        assert_eq!(
            format_short_date(NaiveDate::from_ymd_opt(2024, 3, 5).unwrap()),
            "Tue, Mar 5, 2024"
        );
    }

    #[test]
    fn long_date_format() {
        assert_eq!(format_long_date(jan_15()), "Monday, January 15, 2024");
    }

    #[test]
    fn sehat_id_checked_before_symptoms() {
        let data = ConsultationData::new(jan_15());
        assert_eq!(validate_booking(&data), Err(ValidationError::MissingSehatId));

        let mut data = data;
        data.sehat_id = "SH-001".into();
        data.symptoms = "   ".into();
        assert_eq!(
            validate_booking(&data).unwrap_err().to_string(),
            "Please describe your symptoms"
        );
    }

    #[test]
    fn booking_yields_video_link_and_message() {
        let now = Local.with_ymd_and_hms(2024, 1, 15, 9, 0, 0).unwrap();
        let confirmation = book_consultation(&filled(), now).unwrap();
        assert_eq!(confirmation.message, "Consultation booked successfully!");
        assert_eq!(
            confirmation.video_link.url(),
            "https://video-one-livid.vercel.app/"
        );
        assert_eq!(confirmation.booking.data, filled());
    }

    #[test]
    fn booking_id_uses_last_six_millis_digits() {
        let now = Local.timestamp_millis_opt(1_705_312_345_678).unwrap();
        assert_eq!(booking_id(now), "CN-345678");
        let now = Local.timestamp_millis_opt(1_705_312_000_042).unwrap();
        assert_eq!(booking_id(now), "CN-000042");
    }

    #[test]
    fn receipt_lists_labels() {
        let mut data = filled();
        data.consultation_type = ConsultationType::Specialist;
        data.priority = ConsultationPriority::High;
        let now = Local.with_ymd_and_hms(2024, 1, 15, 9, 0, 0).unwrap();
        let booking = book_consultation(&data, now).unwrap().booking;

        let text = booking.receipt_text();
        assert!(text.starts_with("Booking Confirmed!\n"));
        assert!(text.contains("Consultation Type: Specialist Consultation\n"));
        assert!(text.contains("Date: Monday, January 15, 2024\n"));
        assert!(text.contains("Time Slot: Slot 1: 9:00 AM - 11:00 AM\n"));
        assert!(text.contains("Priority: HIGH\n"));
        assert!(!text.contains("Doctor Preference"));
        assert!(text.contains("Booked on: 1/15/2024 at 9:00:00 AM\n"));
    }
}
