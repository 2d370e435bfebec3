//! # Prescription Workflow
//!
//! The board moves each prescription through four fixed columns.
//!
//! ```text
//! ┌────────────┐   advance   ┌────────────┐   advance   ┌────────────┐   advance   ┌────────────┐
//! │  PENDING   │────────────►│ PREPARING  │────────────►│   READY    │────────────►│ COMPLETED  │
//! └────────────┘             └────────────┘             └────────────┘             └─────┬──────┘
//!                                                                                        │ advance
//!                                                                                        ▼
//!                                                                                    (no-op)
//! ```

use chrono::NaiveDate;
use uuid::Uuid;

use crate::types::{Prescription, PrescriptionStatus};

impl PrescriptionStatus {
    /// The next column, or `None` once completed.
    pub const fn next(&self) -> Option<PrescriptionStatus> {
        match self {
            PrescriptionStatus::Pending => Some(PrescriptionStatus::Preparing),
            PrescriptionStatus::Preparing => Some(PrescriptionStatus::Ready),
            PrescriptionStatus::Ready => Some(PrescriptionStatus::Completed),
            PrescriptionStatus::Completed => None,
        }
    }

    #[inline]
    pub const fn is_terminal(&self) -> bool {
        matches!(self, PrescriptionStatus::Completed)
    }
}

impl Prescription {
    /// Builds a new PENDING prescription dated `today`.
    ///
    /// `medications_csv` is the free-text field of the form: names separated
    /// by commas. See [`parse_medications`].
    pub fn new(
        patient_name: &str,
        doctor_name: &str,
        medications_csv: &str,
        today: NaiveDate,
    ) -> Self {
        Prescription {
            id: Uuid::new_v4().to_string(),
            patient_name: patient_name.trim().to_string(),
            doctor_name: doctor_name.trim().to_string(),
            date: today,
            medications: parse_medications(medications_csv),
            status: PrescriptionStatus::Pending,
            image: None,
        }
    }

    /// Moves to the next stage. Returns `false` (and changes nothing) when
    /// already completed.
    pub fn advance(&mut self) -> bool {
        match self.status.next() {
            Some(next) => {
                self.status = next;
                true
            }
            None => false,
        }
    }
}

/// Splits the medications field on `,` and trims each name.
///
/// Blank entries (trailing commas, an empty field) are dropped.
pub fn parse_medications(csv: &str) -> Vec<String> {
    csv.split(',')
        .map(str::trim)
        .filter(|name| !name.is_empty())
        .map(str::to_string)
        .collect()
}

/// Prescriptions in one board column, preserving list order.
pub fn by_status(prescriptions: &[Prescription], status: PrescriptionStatus) -> Vec<&Prescription> {
    prescriptions.iter().filter(|p| p.status == status).collect()
}

// =============================================================================
// Unit Tests
// =============================================================================
