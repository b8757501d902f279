//! Form state for registration, login and consultation booking.
//!
//! Validation only checks that required fields are filled in; there is no
//! format checking and no credential verification.

pub mod consultation;
pub mod login;
pub mod registration;

use thiserror::Error;

pub use consultation::{book_consultation, BookedConsultation, BookingConfirmation};
pub use login::{LoginForm, LoginOutcome};
pub use registration::{DoctorRegistration, PatientRegistration, RegistrationReceipt};

/// A form could not be submitted. The message is what the user sees.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValidationError {
    #[error("Please fill in all required fields")]
    MissingRequiredFields,
    #[error("Please provide ASHA worker details")]
    MissingAshaWorker,
    #[error("Please select a health centre")]
    MissingHealthCentre,
    #[error("Please enter both Sehat ID and date of birth")]
    MissingPatientCredentials,
    #[error("Please enter both Medical Registration Number and email")]
    MissingDoctorCredentials,
    #[error("Please enter your Sehat ID")]
    MissingSehatId,
    #[error("Please describe your symptoms")]
    MissingSymptoms,
}

/// True when a required text field has no visible content.
pub(crate) fn is_blank(value: &str) -> bool {
    value.trim().is_empty()
}
