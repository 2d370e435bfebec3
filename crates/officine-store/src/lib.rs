//! # officine-store: In-Memory State for Officine
//!
//! Every business collection lives here for the lifetime of the process.
//! There is no database: a restart reloads the fixtures.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                        Officine Data Flow                               │
//! │                                                                         │
//! │  Counter command (e.g. pay mobile_money)                               │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                  officine-store (THIS CRATE)                    │   │
//! │  │                                                                 │   │
//! │  │   ┌───────────────┐    ┌───────────────┐    ┌──────────────┐  │   │
//! │  │   │   Pharmacy    │    │  Repositories │    │   Fixtures   │  │   │
//! │  │   │ (pharmacy.rs) │    │ (repository/) │    │ (fixtures.rs)│  │   │
//! │  │   │               │    │               │    │              │  │   │
//! │  │   │ record_sale   │◄───│ Catalog, Sale │    │ 6 medicines  │  │   │
//! │  │   │ dashboard     │    │ Client, ...   │    │ 3 clients... │  │   │
//! │  │   └───────────────┘    └───────────────┘    └──────────────┘  │   │
//! │  │                                                                 │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Module Organization
//!
//! - [`pharmacy`] - The aggregate owning every repository
//! - [`repository`] - One repository per collection
//! - [`fixtures`] - Initial data set
//! - [`error`] - Store error types
//!
//! ## Usage
//!
//! ```rust
//! use chrono::Utc;
//! use officine_store::Pharmacy;
//!
//! let pharmacy = Pharmacy::with_fixtures(Utc::now());
//! let low = pharmacy.catalog().low_stock();
//! assert_eq!(low.len(), 3);
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod error;
pub mod fixtures;
pub mod pharmacy;
pub mod repository;

// =============================================================================
// Re-exports
// =============================================================================

pub use error::{StoreError, StoreResult};
pub use pharmacy::Pharmacy;

// Repository re-exports for convenience
pub use repository::catalog::{CatalogRepository, ALL_CATEGORIES};
pub use repository::client::ClientRepository;
pub use repository::prescription::PrescriptionRepository;
pub use repository::sale::SaleRepository;
pub use repository::settings::SettingsRepository;
pub use repository::supplier::SupplierRepository;
