//! # Prescription Commands
//!
//! The prescription board: four fixed columns, forward-only moves.
//!
//! ```text
//! ┌──────────────┬────────────────┬──────────────┬──────────────┐
//! │  En attente  │ En préparation │    Prête     │   Retirée    │
//! │  PENDING     │ PREPARING      │ READY        │ COMPLETED    │
//! ├──────────────┼────────────────┼──────────────┼──────────────┤
//! │  new ones    │                │              │              │
//! │  land here ──┼── advance ────►┼── advance ──►┼── advance ──►│ (stays)
//! └──────────────┴────────────────┴──────────────┴──────────────┘
//! ```

use chrono::Utc;
use serde::{Deserialize, Serialize};
use tracing::{debug, info, warn};

use officine_core::{Prescription, PrescriptionStatus};

use crate::error::ApiError;
use crate::state::SessionState;

/// One board column.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BoardColumn {
    pub status: PrescriptionStatus,
    pub label: String,
    pub prescriptions: Vec<Prescription>,
}

/// Outcome of an advance request.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AdvanceResponse {
    pub id: String,
    /// `false` for an unknown id or a completed prescription.
    pub advanced: bool,
    pub status: Option<PrescriptionStatus>,
}

/// All four columns, left to right.
pub fn prescription_board(session: &SessionState) -> Vec<BoardColumn> {
    debug!("prescription_board command");
    session.with_session(|s| {
        PrescriptionStatus::ALL
            .iter()
            .map(|&status| BoardColumn {
                status,
                label: status.label().to_string(),
                prescriptions: s
                    .pharmacy
                    .prescriptions()
                    .by_status(status)
                    .into_iter()
                    .cloned()
                    .collect(),
            })
            .collect()
    })
}

/// Records a new prescription at the top of the PENDING column.
///
/// ## Arguments
/// * `medications_csv` - "Amoxicilline, Doliprane" (split on commas, trimmed)
pub fn create_prescription(
    session: &SessionState,
    patient_name: &str,
    doctor_name: &str,
    medications_csv: &str,
) -> Result<Prescription, ApiError> {
    debug!(patient = %patient_name, "create_prescription command");
    let today = Utc::now().date_naive();

    let result = session.with_session_mut(|s| {
        s.pharmacy
            .prescriptions_mut()
            .create(patient_name, doctor_name, medications_csv, today)
            .map(|rx| rx.clone())
    });

    match result {
        Ok(rx) => {
            info!(id = %rx.id, medications = rx.medications.len(), "Prescription created");
            Ok(rx)
        }
        Err(e) => {
            warn!(error = %e, "Prescription form rejected");
            Err(e.into())
        }
    }
}

/// Moves a prescription one column to the right.
pub fn advance_prescription(session: &SessionState, id: &str) -> AdvanceResponse {
    debug!(id = %id, "advance_prescription command");

    session.with_session_mut(|s| {
        let prescriptions = s.pharmacy.prescriptions_mut();
        match prescriptions.advance(id) {
            Some(status) => {
                info!(id = %id, status = ?status, "Prescription advanced");
                AdvanceResponse {
                    id: id.to_string(),
                    advanced: true,
                    status: Some(status),
                }
            }
            None => AdvanceResponse {
                id: id.to_string(),
                advanced: false,
                status: prescriptions.get(id).map(|rx| rx.status),
            },
        }
    })
}
