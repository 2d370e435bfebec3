//! # Prescription Repository
//!
//! The board's backing list. New prescriptions go to the front.

use chrono::NaiveDate;
use tracing::debug;

use officine_core::prescription;
use officine_core::validation::validate_prescription;
use officine_core::{Prescription, PrescriptionStatus, ValidationError};

#[derive(Debug, Clone, Default)]
pub struct PrescriptionRepository {
    prescriptions: Vec<Prescription>,
}

impl PrescriptionRepository {
    pub fn new(prescriptions: Vec<Prescription>) -> Self {
        PrescriptionRepository { prescriptions }
    }

    /// Newest first.
    pub fn all(&self) -> &[Prescription] {
        &self.prescriptions
    }

    pub fn get(&self, id: &str) -> Option<&Prescription> {
        self.prescriptions.iter().find(|p| p.id == id)
    }

    /// Creates a PENDING prescription dated `today` and puts it first.
    ///
    /// ## Arguments
    /// * `medications_csv` - comma-separated names, trimmed
    pub fn create(
        &mut self,
        patient_name: &str,
        doctor_name: &str,
        medications_csv: &str,
        today: NaiveDate,
    ) -> Result<&Prescription, ValidationError> {
        validate_prescription(patient_name, doctor_name)?;

        let rx = Prescription::new(patient_name, doctor_name, medications_csv, today);
        debug!(id = %rx.id, medications = rx.medications.len(), "Creating prescription");
        self.prescriptions.insert(0, rx);

        Ok(&self.prescriptions[0])
    }

    /// Moves a prescription one stage forward.
    ///
    /// ## Returns
    /// The new status, or `None` when the id is unknown or the prescription
    /// is already completed (nothing changes in either case).
    pub fn advance(&mut self, id: &str) -> Option<PrescriptionStatus> {
        let rx = self.prescriptions.iter_mut().find(|p| p.id == id)?;
        if !rx.advance() {
            return None;
        }
        debug!(id = %id, status = ?rx.status, "Prescription advanced");
        Some(rx.status)
    }

    pub fn by_status(&self, status: PrescriptionStatus) -> Vec<&Prescription> {
        prescription::by_status(&self.prescriptions, status)
    }

    pub fn count_with_status(&self, status: PrescriptionStatus) -> usize {
        self.prescriptions.iter().filter(|p| p.status == status).count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fixtures;

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 5, 22).unwrap()
    }

    #[test]
    fn test_create_prepends_pending() {
        let mut repo = PrescriptionRepository::new(fixtures::prescriptions());
        let id = repo
            .create("Afi Akakpo", "Dr. Almeida", "Vitamine C, Efferalgan", today())
            .unwrap()
            .id
            .clone();

        assert_eq!(repo.all()[0].id, id);
        assert_eq!(repo.all()[0].status, PrescriptionStatus::Pending);
        assert_eq!(repo.all()[0].medications, vec!["Vitamine C", "Efferalgan"]);
        assert_eq!(repo.all().len(), 3);
    }

    #[test]
    fn test_advance_until_completed() {
        let mut repo = PrescriptionRepository::new(fixtures::prescriptions());

        // p2 is READY
        assert_eq!(repo.advance("p2"), Some(PrescriptionStatus::Completed));
        assert_eq!(repo.advance("p2"), None);
        assert_eq!(repo.get("p2").unwrap().status, PrescriptionStatus::Completed);

        assert_eq!(repo.advance("missing"), None);
    }

    #[test]
    fn test_board_columns() {
        let repo = PrescriptionRepository::new(fixtures::prescriptions());
        assert_eq!(repo.by_status(PrescriptionStatus::Pending)[0].id, "p1");
        assert_eq!(repo.by_status(PrescriptionStatus::Ready)[0].id, "p2");
        assert_eq!(repo.count_with_status(PrescriptionStatus::Preparing), 0);
    }
}
