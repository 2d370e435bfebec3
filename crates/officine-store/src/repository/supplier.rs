//! # Supplier Repository

use rand::Rng;
use tracing::debug;

use super::generate_id;
use officine_core::validation::validate_supplier_name;
use officine_core::{GeoPoint, Supplier, ValidationError};

#[derive(Debug, Clone, Default)]
pub struct SupplierRepository {
    suppliers: Vec<Supplier>,
}

impl SupplierRepository {
    pub fn new(suppliers: Vec<Supplier>) -> Self {
        SupplierRepository { suppliers }
    }

    pub fn all(&self) -> &[Supplier] {
        &self.suppliers
    }

    pub fn get(&self, id: &str) -> Option<&Supplier> {
        self.suppliers.iter().find(|s| s.id == id)
    }

    /// Adds a supplier with a fresh id and a random pin near the map centre.
    pub fn create<R: Rng>(
        &mut self,
        mut supplier: Supplier,
        rng: &mut R,
    ) -> Result<&Supplier, ValidationError> {
        validate_supplier_name(&supplier.name)?;

        supplier.id = generate_id();
        supplier.location = GeoPoint::random_near_center(rng);

        debug!(
            id = %supplier.id,
            lat = supplier.location.lat,
            lng = supplier.location.lng,
            "Creating supplier"
        );
        self.suppliers.push(supplier);

        let index = self.suppliers.len() - 1;
        Ok(&self.suppliers[index])
    }
}
