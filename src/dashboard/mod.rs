//! Patient and doctor dashboards, and the profile screen.

pub mod doctor;
pub mod patient;
pub mod profile;

use thiserror::Error;

use crate::forms::ValidationError;

pub use doctor::DoctorDashboard;
pub use patient::{PatientDashboard, PatientTab};
pub use profile::{Preference, ProfileField, ProfileState, ProfileTab};

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DashboardError {
    #[error("Please enter your Medical ID and Room Number")]
    MissingRoomDetails,
    #[error("Please select a patient from the queue")]
    NoPatientSelected,
    #[error("No active patient selected")]
    NoActivePatient,
    #[error("Please fill all medication fields")]
    IncompleteMedication,
    #[error("Please add instructions for the patient")]
    MissingInstructions,
    #[error("Patient not in queue: {0}")]
    UnknownPatient(String),
    #[error("Tap Edit before changing your profile")]
    NotEditing,
    #[error("Booking not found: {0}")]
    UnknownBooking(String),
    #[error(transparent)]
    Validation(#[from] ValidationError),
}
