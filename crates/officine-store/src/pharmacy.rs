//! # Pharmacy Aggregate
//!
//! Owns every repository for the session.
//!
//! ## Architecture
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                          Pharmacy                                       │
//! │                                                                         │
//! │  Process start                                                          │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  Pharmacy::with_fixtures(now) ← fixture set, sales relative to now     │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  ┌───────────┐ ┌─────────┐ ┌─────────┐ ┌───────────┐ ┌──────────────┐  │
//! │  │  catalog  │ │  sales  │ │ clients │ │ suppliers │ │ prescriptions│  │
//! │  └───────────┘ └─────────┘ └─────────┘ └───────────┘ └──────────────┘  │
//! │                         ┌──────────┐                                    │
//! │                         │ settings │                                    │
//! │                         └──────────┘                                    │
//! │       │                                                                 │
//! │       │ one owner, guarded by the counter's session mutex              │
//! │       ▼                                                                 │
//! │  Commands borrow a repository, mutate, return                          │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Cross-collection operations (recording a sale touches both the sales
//! history and catalog stock) live here rather than in a repository.

use chrono::{DateTime, Utc};
use tracing::info;

use crate::error::StoreResult;
use crate::fixtures;
use crate::repository::catalog::CatalogRepository;
use crate::repository::client::ClientRepository;
use crate::repository::prescription::PrescriptionRepository;
use crate::repository::sale::SaleRepository;
use crate::repository::settings::SettingsRepository;
use crate::repository::supplier::SupplierRepository;
use officine_core::dashboard::DashboardMetrics;
use officine_core::{PharmacySettings, Sale};

#[derive(Debug, Clone)]
pub struct Pharmacy {
    catalog: CatalogRepository,
    sales: SaleRepository,
    clients: ClientRepository,
    suppliers: SupplierRepository,
    prescriptions: PrescriptionRepository,
    settings: SettingsRepository,
}

impl Pharmacy {
    /// A pharmacy with the given profile and no records at all.
    pub fn empty(settings: PharmacySettings) -> Self {
        Pharmacy {
            catalog: CatalogRepository::default(),
            sales: SaleRepository::default(),
            clients: ClientRepository::default(),
            suppliers: SupplierRepository::default(),
            prescriptions: PrescriptionRepository::default(),
            settings: SettingsRepository::new(settings),
        }
    }

    /// The fixture data set, with historical sales placed relative to `now`.
    pub fn with_fixtures(now: DateTime<Utc>) -> Self {
        let pharmacy = Pharmacy {
            catalog: CatalogRepository::new(fixtures::medicines()),
            sales: SaleRepository::new(fixtures::sales(now)),
            clients: ClientRepository::new(fixtures::clients()),
            suppliers: SupplierRepository::new(fixtures::suppliers()),
            prescriptions: PrescriptionRepository::new(fixtures::prescriptions()),
            settings: SettingsRepository::new(fixtures::settings()),
        };

        info!(
            medicines = pharmacy.catalog.len(),
            sales = pharmacy.sales.count(),
            clients = pharmacy.clients.all().len(),
            "Fixtures loaded"
        );
        pharmacy
    }

    // =========================================================================
    // Repository Accessors
    // =========================================================================

    pub fn catalog(&self) -> &CatalogRepository {
        &self.catalog
    }

    pub fn catalog_mut(&mut self) -> &mut CatalogRepository {
        &mut self.catalog
    }

    pub fn sales(&self) -> &SaleRepository {
        &self.sales
    }

    pub fn clients(&self) -> &ClientRepository {
        &self.clients
    }

    pub fn clients_mut(&mut self) -> &mut ClientRepository {
        &mut self.clients
    }

    pub fn suppliers(&self) -> &SupplierRepository {
        &self.suppliers
    }

    pub fn suppliers_mut(&mut self) -> &mut SupplierRepository {
        &mut self.suppliers
    }

    pub fn prescriptions(&self) -> &PrescriptionRepository {
        &self.prescriptions
    }

    pub fn prescriptions_mut(&mut self) -> &mut PrescriptionRepository {
        &mut self.prescriptions
    }

    pub fn settings(&self) -> &PharmacySettings {
        self.settings.get()
    }

    pub fn settings_mut(&mut self) -> &mut SettingsRepository {
        &mut self.settings
    }

    // =========================================================================
    // Cross-Collection Operations
    // =========================================================================

    /// Books a completed sale: appends it to the history and decrements
    /// catalog stock for each line (floored at zero).
    ///
    /// ## Returns
    /// * `Err(DuplicateId)` - the sale id is already recorded; stock is
    ///   left untouched
    pub fn record_sale(&mut self, sale: Sale) -> StoreResult<()> {
        let sale_id = sale.id.clone();
        let total = sale.total;
        let items = sale.items.clone();

        self.sales.append(sale)?;
        self.catalog.apply_sale(&items);

        info!(sale_id = %sale_id, total = %total, lines = items.len(), "Sale recorded");
        Ok(())
    }

    /// Home-screen figures as of `now`.
    pub fn dashboard(&self, now: DateTime<Utc>) -> DashboardMetrics {
        DashboardMetrics::compute(
            self.catalog.all(),
            self.sales.all(),
            self.prescriptions.all(),
            self.settings(),
            now,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_pharmacy() {
        let pharmacy = Pharmacy::empty(fixtures::settings());
        assert!(pharmacy.catalog().is_empty());
        assert_eq!(pharmacy.sales().count(), 0);
        assert_eq!(pharmacy.settings().currency, "FCFA");
    }

    #[test]
    fn test_fixture_dashboard() {
        let now = Utc::now();
        let metrics = Pharmacy::with_fixtures(now).dashboard(now);

        assert_eq!(metrics.low_stock_count, 3);
        assert_eq!(metrics.todays_sales_count, 1);
        assert_eq!(metrics.daily_revenue.units(), 4_500);
        assert_eq!(metrics.pending_prescriptions, 1);
        // 4500 / 150000 = 3%
        assert_eq!(metrics.progress_percentage, 3);
    }
}
