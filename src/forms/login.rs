use serde::Serialize;

use super::{is_blank, ValidationError};
use crate::models::enums::UserRole;
use crate::navigation::Route;

pub const FORGOT_CREDENTIALS_MESSAGE: &str = "Please contact your administrator for assistance";

/// Sign-in form. Patients sign in with Sehat ID and date of birth,
/// doctors with their medical registration number and email.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoginForm {
    pub role: UserRole,
    pub sehat_id: String,
    pub date_of_birth: String,
    pub medical_reg_number: String,
    pub email: String,
}

impl Default for LoginForm {
    fn default() -> Self {
        Self {
            role: UserRole::Patient,
            sehat_id: String::new(),
            date_of_birth: String::new(),
            medical_reg_number: String::new(),
            email: String::new(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LoginOutcome {
    pub role: UserRole,
    /// Dashboard to replace the login screen with.
    pub route: Route,
    pub message: &'static str,
}

impl LoginForm {
    /// Flip between patient and doctor sign-in. Entered values are kept.
    pub fn toggle_role(&mut self) {
        self.role = match self.role {
            UserRole::Patient => UserRole::Doctor,
            UserRole::Doctor => UserRole::Patient,
        };
    }

    pub fn validate(&self) -> Result<(), ValidationError> {
        match self.role {
            UserRole::Doctor if is_blank(&self.medical_reg_number) || is_blank(&self.email) => {
                Err(ValidationError::MissingDoctorCredentials)
            }
            UserRole::Patient if is_blank(&self.sehat_id) || is_blank(&self.date_of_birth) => {
                Err(ValidationError::MissingPatientCredentials)
            }
            _ => Ok(()),
        }
    }

    /// Accept the sign-in and pick the dashboard. Credentials are not
    /// checked against anything.
    pub fn submit(&self) -> Result<LoginOutcome, ValidationError> {
        self.validate()?;
        let route = match self.role {
            UserRole::Patient => Route::PatientDashboard,
            UserRole::Doctor => Route::DoctorDashboard,
        };
        tracing::info!(role = %self.role, "Sign-in accepted");
        Ok(LoginOutcome {
            role: self.role,
            route,
            message: "Login successful!",
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn patient_login_routes_to_patient_dashboard() {
        let form = LoginForm {
            sehat_id: "SH-001".into(),
            date_of_birth: "01/01/1980".into(),
            ..Default::default()
        };
        let outcome = form.submit().unwrap();
        assert_eq!(outcome.route, Route::PatientDashboard);
        assert_eq!(outcome.message, "Login successful!");
    }

    #[test]
    fn patient_login_needs_both_fields() {
        let form = LoginForm {
            sehat_id: "SH-001".into(),
            ..Default::default()
        };
        assert_eq!(
            form.submit().unwrap_err().to_string(),
            "Please enter both Sehat ID and date of birth"
        );
    }

    #[test]
    fn doctor_login_routes_to_doctor_dashboard() {
        let mut form = LoginForm::default();
        form.toggle_role();
        assert_eq!(form.validate(), Err(ValidationError::MissingDoctorCredentials));

        form.medical_reg_number = "MCI-4455".into();
        form.email = "meera@example.org".into();
        let outcome = form.submit().unwrap();
        assert_eq!(outcome.role, UserRole::Doctor);
        assert_eq!(outcome.route, Route::DoctorDashboard);
    }

    #[test]
    fn toggle_keeps_entered_values() {
        let mut form = LoginForm {
            sehat_id: "SH-9".into(),
            ..Default::default()
        };
        form.toggle_role();
        form.toggle_role();
        assert_eq!(form.role, UserRole::Patient);
        assert_eq!(form.sehat_id, "SH-9");
    }
}
