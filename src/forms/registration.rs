use chrono::{DateTime, Local, SecondsFormat};
use serde::{Deserialize, Serialize};

use super::{is_blank, ValidationError};
use crate::models::enums::{Gender, RegistrationType, UserRole};

/// Which date field a day/month/year picker writes to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DateField {
    DateOfBirth,
    RegistrationDate,
}

/// Patient registration form. Registration can be done by the patient,
/// by an ASHA worker, or at a health centre; each path adds its own
/// required fields.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PatientRegistration {
    pub registration_type: RegistrationType,
    pub full_name: String,
    pub phone_number: String,
    pub age: String,
    pub gender: Option<Gender>,
    pub village: String,
    pub abha_id: String,
    pub aadhaar_number: String,
    pub date_of_birth: String,
    pub asha_worker_id: String,
    pub asha_worker_name: String,
    pub health_centre_id: String,
    pub health_centre_name: String,
    pub registration_date: String,
}

impl PatientRegistration {
    pub fn new(registration_type: RegistrationType) -> Self {
        Self {
            registration_type,
            full_name: String::new(),
            phone_number: String::new(),
            age: String::new(),
            gender: None,
            village: String::new(),
            abha_id: String::new(),
            aadhaar_number: String::new(),
            date_of_birth: String::new(),
            asha_worker_id: String::new(),
            asha_worker_name: String::new(),
            health_centre_id: String::new(),
            health_centre_name: String::new(),
            registration_date: String::new(),
        }
    }

    /// Store a picked date as `DD/MM/YYYY` exactly as entered.
    pub fn set_date(&mut self, field: DateField, day: &str, month: &str, year: &str) {
        let value = format!("{day}/{month}/{year}");
        match field {
            DateField::DateOfBirth => self.date_of_birth = value,
            DateField::RegistrationDate => self.registration_date = value,
        }
    }

    /// Check required fields. When several checks fail the most specific
    /// one (registration-type details) is reported.
    pub fn validate(&self) -> Result<(), ValidationError> {
        match self.registration_type {
            RegistrationType::Asha
                if is_blank(&self.asha_worker_id) || is_blank(&self.asha_worker_name) =>
            {
                return Err(ValidationError::MissingAshaWorker);
            }
            RegistrationType::HealthCentre
                if is_blank(&self.health_centre_id) || is_blank(&self.health_centre_name) =>
            {
                return Err(ValidationError::MissingHealthCentre);
            }
            _ => {}
        }

        if [
            &self.full_name,
            &self.phone_number,
            &self.village,
            &self.aadhaar_number,
        ]
        .iter()
        .any(|field| is_blank(field))
        {
            return Err(ValidationError::MissingRequiredFields);
        }
        Ok(())
    }

    pub fn submit(&self, now: DateTime<Local>) -> Result<RegistrationReceipt, ValidationError> {
        self.validate()?;
        tracing::info!(
            registration_type = %self.registration_type,
            "Patient registration submitted"
        );
        Ok(RegistrationReceipt {
            role: UserRole::Patient,
            submitted_at: now.to_rfc3339_opts(SecondsFormat::Millis, false),
            message: format!(
                "Registration submitted via {}!",
                self.registration_type.label()
            ),
        })
    }
}

/// Doctor registration form. Submissions go to manual verification.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DoctorRegistration {
    pub full_name: String,
    pub qualification: String,
    pub specialization: String,
    pub registration_number: String,
    pub phone_number: String,
    pub email: String,
    pub hospital: String,
    pub experience: String,
}

impl DoctorRegistration {
    pub fn validate(&self) -> Result<(), ValidationError> {
        if [
            &self.full_name,
            &self.qualification,
            &self.registration_number,
            &self.phone_number,
        ]
        .iter()
        .any(|field| is_blank(field))
        {
            return Err(ValidationError::MissingRequiredFields);
        }
        Ok(())
    }

    pub fn submit(&self, now: DateTime<Local>) -> Result<RegistrationReceipt, ValidationError> {
        self.validate()?;
        tracing::info!("Doctor registration submitted");
        Ok(RegistrationReceipt {
            role: UserRole::Doctor,
            submitted_at: now.to_rfc3339_opts(SecondsFormat::Millis, false),
            message: "Registration submitted for verification!".to_string(),
        })
    }
}

/// Accepted registration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RegistrationReceipt {
    pub role: UserRole,
    /// RFC 3339 timestamp of submission.
    pub submitted_at: String,
    pub message: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn now() -> DateTime<Local> {
        Local.with_ymd_and_hms(2024, 1, 15, 10, 30, 0).unwrap()
    }

    fn filled(registration_type: RegistrationType) -> PatientRegistration {
        let mut form = PatientRegistration::new(registration_type);
        form.full_name = "Sunita Devi".into();
        form.phone_number = "9876543210".into();
        form.village = "Rampur".into();
        form.aadhaar_number = "1234 5678 9012".into();
        form
    }

    #[test]
    fn self_registration_succeeds_with_common_fields() {
        let receipt = filled(RegistrationType::SelfRegistration).submit(now()).unwrap();
        assert_eq!(receipt.message, "Registration submitted via Self Registration!");
        assert_eq!(receipt.role, UserRole::Patient);
        assert!(receipt.submitted_at.starts_with("2024-01-15T10:30:00.000"));
    }

    #[test]
    fn missing_aadhaar_is_rejected() {
        let mut form = filled(RegistrationType::SelfRegistration);
        form.aadhaar_number = "  ".into();
        assert_eq!(form.validate(), Err(ValidationError::MissingRequiredFields));
    }

    #[test]
    fn asha_path_requires_worker_details() {
        let mut form = filled(RegistrationType::Asha);
        form.asha_worker_id = "ASHA-17".into();
        assert_eq!(form.validate(), Err(ValidationError::MissingAshaWorker));

        form.asha_worker_name = "Kamla".into();
        let receipt = form.submit(now()).unwrap();
        assert_eq!(receipt.message, "Registration submitted via ASHA Worker!");
    }

    #[test]
    fn type_specific_message_wins_over_generic() {
        let form = PatientRegistration::new(RegistrationType::HealthCentre);
        assert_eq!(form.validate(), Err(ValidationError::MissingHealthCentre));
        assert_eq!(
            form.validate().unwrap_err().to_string(),
            "Please select a health centre"
        );
    }

    #[test]
    fn health_centre_path_label() {
        let mut form = filled(RegistrationType::HealthCentre);
        form.health_centre_id = "PHC-3".into();
        form.health_centre_name = "Rampur PHC".into();
        assert_eq!(
            form.submit(now()).unwrap().message,
            "Registration submitted via Health Centre!"
        );
    }

    #[test]
    fn date_picker_formats_day_month_year() {
        let mut form = PatientRegistration::new(RegistrationType::SelfRegistration);
        form.set_date(DateField::DateOfBirth, "07", "03", "1990");
        form.set_date(DateField::RegistrationDate, "1", "2", "2024");
        assert_eq!(form.date_of_birth, "07/03/1990");
        assert_eq!(form.registration_date, "1/2/2024");
    }

    #[test]
    fn doctor_registration_requires_core_fields() {
        let mut form = DoctorRegistration {
            full_name: "Dr. Meera Rao".into(),
            qualification: "MBBS".into(),
            registration_number: "MCI-4455".into(),
            ..Default::default()
        };
        assert_eq!(form.validate(), Err(ValidationError::MissingRequiredFields));

        form.phone_number = "9123456780".into();
        let receipt = form.submit(now()).unwrap();
        assert_eq!(receipt.message, "Registration submitted for verification!");
        assert_eq!(receipt.role, UserRole::Doctor);
    }
}
