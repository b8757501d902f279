use chrono::{DateTime, Local};
use serde::Serialize;

use super::DashboardError;
use crate::models::enums::PatientStatus;
use crate::models::{Patient, PrescribedMedicine, Prescription};
use crate::navigation::ExternalLink;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ConsultationStarted {
    pub video_link: ExternalLink,
    pub message: &'static str,
}

fn seed_patient(id: &str, name: &str, age: u32, condition: &str, time: &str) -> Patient {
    Patient {
        id: id.to_string(),
        name: name.to_string(),
        age,
        condition: condition.to_string(),
        status: PatientStatus::Waiting,
        appointment_time: time.to_string(),
    }
}

fn seed_medicine(name: &str, dosage: &str, frequency: &str) -> PrescribedMedicine {
    PrescribedMedicine {
        name: name.to_string(),
        dosage: dosage.to_string(),
        frequency: frequency.to_string(),
    }
}

/// Doctor's console: patient queue, live consultation and prescription pad.
#[derive(Debug, Clone)]
pub struct DoctorDashboard {
    pub medical_id: String,
    pub room_no: String,
    patients: Vec<Patient>,
    prescriptions: Vec<Prescription>,
    active_patient: Option<String>,
    consultation_active: bool,
    /// Medicine currently being typed in.
    pub new_medication: PrescribedMedicine,
    /// Medicines added to the prescription being written.
    drafted: Vec<PrescribedMedicine>,
    pub instructions: String,
}

impl Default for DoctorDashboard {
    fn default() -> Self {
        Self::new()
    }
}

impl DoctorDashboard {
    /// Dashboard with the demo queue and one earlier prescription.
    pub fn new() -> Self {
        Self {
            medical_id: String::new(),
            room_no: String::new(),
            patients: vec![
                seed_patient("1", "Rahul Sharma", 42, "Diabetes Follow-up", "10:00 AM"),
                seed_patient("2", "Priya Patel", 35, "Hypertension", "10:30 AM"),
                seed_patient("3", "Amit Kumar", 28, "Fever & Cough", "11:00 AM"),
            ],
            prescriptions: vec![Prescription {
                id: "1".to_string(),
                patient_id: "1".to_string(),
                patient_name: "Rahul Sharma".to_string(),
                medications: vec![
                    seed_medicine("Metformin", "500mg", "Twice daily"),
                    seed_medicine("Atorvastatin", "20mg", "Once at bedtime"),
                ],
                instructions: "Take with food. Follow up in 3 months.".to_string(),
            }],
            active_patient: None,
            consultation_active: false,
            new_medication: PrescribedMedicine::default(),
            drafted: Vec::new(),
            instructions: String::new(),
        }
    }

    pub fn patients(&self) -> &[Patient] {
        &self.patients
    }

    pub fn prescriptions(&self) -> &[Prescription] {
        &self.prescriptions
    }

    pub fn prescriptions_for<'a>(
        &'a self,
        patient_id: &'a str,
    ) -> impl Iterator<Item = &'a Prescription> + 'a {
        self.prescriptions
            .iter()
            .filter(move |p| p.patient_id == patient_id)
    }

    pub fn active_patient(&self) -> Option<&Patient> {
        let id = self.active_patient.as_deref()?;
        self.patients.iter().find(|p| p.id == id)
    }

    pub fn is_consultation_active(&self) -> bool {
        self.consultation_active
    }

    pub fn drafted_medications(&self) -> &[PrescribedMedicine] {
        &self.drafted
    }

    pub fn select_patient(&mut self, patient_id: &str) -> Result<&Patient, DashboardError> {
        let patient = self
            .patients
            .iter()
            .find(|p| p.id == patient_id)
            .ok_or_else(|| DashboardError::UnknownPatient(patient_id.to_string()))?;
        self.active_patient = Some(patient.id.clone());
        Ok(patient)
    }

    /// Begin the video consultation with the selected patient.
    pub fn start_consultation(&mut self) -> Result<ConsultationStarted, DashboardError> {
        if self.medical_id.trim().is_empty() || self.room_no.trim().is_empty() {
            return Err(DashboardError::MissingRoomDetails);
        }
        let id = self
            .active_patient
            .clone()
            .ok_or(DashboardError::NoPatientSelected)?;
        let patient = self
            .patients
            .iter_mut()
            .find(|p| p.id == id)
            .ok_or(DashboardError::NoPatientSelected)?;

        patient.status = PatientStatus::InConsultation;
        self.consultation_active = true;
        tracing::info!(patient_id = %id, "Consultation started");

        Ok(ConsultationStarted {
            video_link: ExternalLink::VideoConsultation,
            message: "Consultation started successfully! Video consultation opened.",
        })
    }

    /// Finish the consultation and drop the patient from the queue.
    pub fn end_consultation(&mut self) -> Result<&'static str, DashboardError> {
        self.consultation_active = false;
        let id = self
            .active_patient
            .take()
            .ok_or(DashboardError::NoActivePatient)?;
        self.patients.retain(|p| p.id != id);
        tracing::info!(patient_id = %id, remaining = self.patients.len(), "Consultation ended");
        Ok("Consultation ended successfully!")
    }

    /// Move the medicine being typed into the prescription draft.
    pub fn add_medication(&mut self) -> Result<&'static str, DashboardError> {
        if !self.new_medication.is_complete() {
            return Err(DashboardError::IncompleteMedication);
        }
        self.drafted.push(std::mem::take(&mut self.new_medication));
        Ok("Medication added to prescription")
    }

    /// Save the draft for the active patient. A completely filled-in
    /// medicine that was never added is included too.
    pub fn save_prescription(
        &mut self,
        now: DateTime<Local>,
    ) -> Result<Prescription, DashboardError> {
        if self.instructions.trim().is_empty() {
            return Err(DashboardError::MissingInstructions);
        }
        let patient = self
            .active_patient()
            .ok_or(DashboardError::NoActivePatient)?;
        let (patient_id, patient_name) = (patient.id.clone(), patient.name.clone());

        let mut medications = std::mem::take(&mut self.drafted);
        let pending = std::mem::take(&mut self.new_medication);
        if pending.is_complete() {
            medications.push(pending);
        }

        let prescription = Prescription {
            id: now.timestamp_millis().to_string(),
            patient_id,
            patient_name,
            medications,
            instructions: std::mem::take(&mut self.instructions),
        };
        tracing::info!(
            prescription_id = %prescription.id,
            medication_count = prescription.medications.len(),
            "Prescription saved"
        );
        self.prescriptions.push(prescription.clone());
        Ok(prescription)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn ready() -> DoctorDashboard {
        let mut dash = DoctorDashboard::new();
        dash.medical_id = "MCI-4455".into();
        dash.room_no = "12".into();
        dash
    }

    #[test]
    fn seeded_queue_and_prescription() {
        let dash = DoctorDashboard::new();
        let names: Vec<_> = dash.patients().iter().map(|p| p.name.as_str()).collect();
        assert_eq!(names, ["Rahul Sharma", "Priya Patel", "Amit Kumar"]);
        assert!(dash
            .patients()
            .iter()
            .all(|p| p.status == PatientStatus::Waiting));
        assert_eq!(dash.patients()[0].age, 42);

        let rahul: Vec<_> = dash.prescriptions_for("1").collect();
        assert_eq!(rahul.len(), 1);
        assert_eq!(rahul[0].medications[0].name, "Metformin");
        assert_eq!(rahul[0].medications[1].frequency, "Once at bedtime");
    }

    #[test]
    fn start_requires_room_details_then_patient() {
        let mut dash = DoctorDashboard::new();
        assert_eq!(
            dash.start_consultation(),
            Err(DashboardError::MissingRoomDetails)
        );

        let mut dash = ready();
        assert_eq!(
            dash.start_consultation(),
            Err(DashboardError::NoPatientSelected)
        );
    }

    #[test]
    fn start_marks_patient_in_consultation() {
        let mut dash = ready();
        dash.select_patient("2").unwrap();
        let started = dash.start_consultation().unwrap();

        assert_eq!(started.video_link, ExternalLink::VideoConsultation);
        assert!(dash.is_consultation_active());
        assert_eq!(
            dash.active_patient().unwrap().status,
            PatientStatus::InConsultation
        );
        assert_eq!(dash.patients()[0].status, PatientStatus::Waiting);
    }

    #[test]
    fn end_removes_patient_from_queue() {
        let mut dash = ready();
        dash.select_patient("1").unwrap();
        dash.start_consultation().unwrap();
        assert_eq!(dash.end_consultation(), Ok("Consultation ended successfully!"));

        assert_eq!(dash.patients().len(), 2);
        assert!(dash.active_patient().is_none());
        assert!(!dash.is_consultation_active());
        assert_eq!(dash.end_consultation(), Err(DashboardError::NoActivePatient));
    }

    #[test]
    fn unknown_patient_cannot_be_selected() {
        let mut dash = DoctorDashboard::new();
        assert_eq!(
            dash.select_patient("99").unwrap_err(),
            DashboardError::UnknownPatient("99".into())
        );
    }

    #[test]
    fn add_medication_requires_all_fields() {
        let mut dash = DoctorDashboard::new();
        dash.new_medication.name = "Paracetamol".into();
        dash.new_medication.dosage = "650mg".into();
        assert_eq!(dash.add_medication(), Err(DashboardError::IncompleteMedication));

        dash.new_medication.frequency = "Thrice daily".into();
        assert_eq!(dash.add_medication(), Ok("Medication added to prescription"));
        assert_eq!(dash.drafted_medications().len(), 1);
        assert_eq!(dash.new_medication, PrescribedMedicine::default());
    }

    #[test]
    fn save_checks_instructions_before_patient() {
        let mut dash = DoctorDashboard::new();
        let now = Local::now();
        assert_eq!(
            dash.save_prescription(now).unwrap_err(),
            DashboardError::MissingInstructions
        );
        dash.instructions = "Rest for two days".into();
        assert_eq!(
            dash.save_prescription(now).unwrap_err(),
            DashboardError::NoActivePatient
        );
    }

    #[test]
    fn save_prescription_uses_timestamp_id_and_resets_pad() {
        let mut dash = ready();
        dash.select_patient("3").unwrap();
        dash.new_medication = PrescribedMedicine {
            name: "Paracetamol".into(),
            dosage: "650mg".into(),
            frequency: "Thrice daily".into(),
        };
        dash.add_medication().unwrap();
        dash.new_medication = PrescribedMedicine {
            name: "Cough syrup".into(),
            dosage: "10ml".into(),
            frequency: "At night".into(),
        };
        dash.instructions = "Drink warm fluids.".into();

        let now = Local.timestamp_millis_opt(1_705_312_345_678).unwrap();
        let saved = dash.save_prescription(now).unwrap();
        assert_eq!(saved.id, "1705312345678");
        assert_eq!(saved.patient_name, "Amit Kumar");
        assert_eq!(saved.medications.len(), 2);

        assert!(dash.instructions.is_empty());
        assert!(dash.drafted_medications().is_empty());
        assert_eq!(dash.prescriptions().len(), 2);
    }
}
