//! # Supplier Commands
//!
//! Supplier registry and the delivery map animation.

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use tracing::{debug, info, warn};

use officine_core::supplier::DeliveryProgress;
use officine_core::{GeoPoint, Supplier, SupplierType};

use crate::error::ApiError;
use crate::state::{DeliveryTicker, SessionState};

/// The "new supplier" form. Position is drawn at random on save.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewSupplier {
    pub name: String,
    pub supplier_type: SupplierType,
    pub contact: String,
    pub email: String,
    pub address: String,
    pub next_delivery: Option<NaiveDateTime>,
}

impl From<NewSupplier> for Supplier {
    fn from(form: NewSupplier) -> Self {
        Supplier {
            id: String::new(),
            name: form.name.trim().to_string(),
            supplier_type: form.supplier_type,
            contact: form.contact,
            email: form.email,
            address: form.address,
            location: GeoPoint { lat: 0.0, lng: 0.0 },
            next_delivery: form.next_delivery,
        }
    }
}

/// Delivery animation snapshot.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DeliveryStatus {
    pub progress: DeliveryProgress,
    pub suppliers: Vec<Supplier>,
}

pub fn list_suppliers(session: &SessionState) -> Vec<Supplier> {
    debug!("list_suppliers command");
    session.with_session(|s| s.pharmacy.suppliers().all().to_vec())
}

/// Registers a supplier and pins it near the centre of the demo map.
pub fn create_supplier(session: &SessionState, form: NewSupplier) -> Result<Supplier, ApiError> {
    debug!("create_supplier command");

    let result = session.with_session_mut(|s| {
        s.pharmacy
            .suppliers_mut()
            .create(Supplier::from(form), &mut rand::thread_rng())
            .map(|supplier| supplier.clone())
    });

    match result {
        Ok(supplier) => {
            info!(id = %supplier.id, name = %supplier.name, "Supplier created");
            Ok(supplier)
        }
        Err(e) => {
            warn!(error = %e, "Supplier form rejected");
            Err(e.into())
        }
    }
}

/// Current truck position plus the pins it travels between.
pub fn delivery_status(session: &SessionState, ticker: &DeliveryTicker) -> DeliveryStatus {
    debug!("delivery_status command");
    DeliveryStatus {
        progress: ticker.progress(),
        suppliers: list_suppliers(session),
    }
}
