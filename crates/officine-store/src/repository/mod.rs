//! # Repository Module
//!
//! One repository per collection. Each owns a `Vec` and exposes the only
//! mutations that collection supports.
//!
//! ## Repository Pattern
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Repositories at a glance                             │
//! │                                                                         │
//! │  Command                                                                │
//! │       │  pharmacy.catalog_mut().update(medicine)                        │
//! │       ▼                                                                 │
//! │  ┌──────────────────┬─────────────────┬───────────────────────────┐    │
//! │  │ Repository       │ Mutations       │ Order                     │    │
//! │  ├──────────────────┼─────────────────┼───────────────────────────┤    │
//! │  │ Catalog          │ add/update/del  │ insertion                 │    │
//! │  │ Sales            │ append only     │ chronological             │    │
//! │  │ Clients          │ add/update      │ insertion                 │    │
//! │  │ Suppliers        │ add             │ insertion                 │    │
//! │  │ Prescriptions    │ prepend/advance │ newest first              │    │
//! │  │ Settings         │ replace         │ (singleton)               │    │
//! │  └──────────────────┴─────────────────┴───────────────────────────┘    │
//! │                                                                         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

pub mod catalog;
pub mod client;
pub mod prescription;
pub mod sale;
pub mod settings;
pub mod supplier;

/// Fresh identifier for a new record.
pub fn generate_id() -> String {
    uuid::Uuid::new_v4().to_string()
}
