//! # Validation Module
//!
//! Form-level checks for the entry forms at the counter.
//!
//! ## Validation Strategy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      Validation Layers                                  │
//! │                                                                         │
//! │  Layer 1: Command argument parsing (clap)                              │
//! │  ├── Types: numbers, dates, enum labels                                │
//! │  └── Unknown flags rejected before any state is touched                │
//! │           │                                                             │
//! │           ▼                                                             │
//! │  Layer 2: THIS MODULE                                                  │
//! │  ├── Required fields (medicine name, client names, patient)            │
//! │  └── Sale price must be set                                            │
//! │           │                                                             │
//! │           ▼                                                             │
//! │  Layer 3: Store                                                        │
//! │  └── Duplicate ids on insert                                           │
//! │                                                                         │
//! │  Everything else is accepted as typed: stock may be edited to any      │
//! │  value, dates are not range-checked, settings are saved as entered.   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//! ```rust
//! use officine_core::validation::{validate_client_names, validate_search_query};
//!
//! assert!(validate_client_names("Afi", "Akakpo").is_ok());
//! assert!(validate_client_names("Afi", "  ").is_err());
//! assert_eq!(validate_search_query("  para ").unwrap(), "para");
//! ```

use crate::error::ValidationError;
use crate::types::{Client, Medicine};

/// Result type for validation operations.
pub type ValidationResult<T> = Result<T, ValidationError>;

fn required(value: &str, field: &str) -> ValidationResult<()> {
    if value.trim().is_empty() {
        return Err(ValidationError::Required {
            field: field.to_string(),
        });
    }
    Ok(())
}

// =============================================================================
// Medicine Form
// =============================================================================

/// Validates the medicine entry form.
///
/// ## Rules
/// - Name must not be empty
/// - Sale price must be set (any non-zero amount)
///
/// Stock, minimum stock, purchase price, and expiry date are taken as typed.
///
/// ## Example
/// ```rust
/// use officine_core::validation::validate_medicine;
/// # use officine_core::{Medicine, MedicineForm, Money};
/// # let mut medicine = Medicine {
/// #     id: "1".into(), name: "Paracétamol".into(), description: String::new(),
/// #     dosage: "500mg".into(), category: "Douleur".into(), form: MedicineForm::Tablet,
/// #     purchase_price: Money::zero(), sale_price: Money::from_units(200),
/// #     stock: 0, min_stock: 10,
/// #     expiry_date: chrono::NaiveDate::from_ymd_opt(2025, 12, 31).unwrap(),
/// #     supplier_id: "sup1".into(),
/// # };
/// assert!(validate_medicine(&medicine).is_ok());
///
/// medicine.sale_price = Money::zero();
/// assert!(validate_medicine(&medicine).is_err());
/// ```
pub fn validate_medicine(medicine: &Medicine) -> ValidationResult<()> {
    required(&medicine.name, "name")?;

    if medicine.sale_price.is_zero() {
        return Err(ValidationError::MustBeNonZero {
            field: "salePrice".to_string(),
        });
    }

    Ok(())
}

// =============================================================================
// Client Form
// =============================================================================

/// First and last name are the only required client fields.
pub fn validate_client_names(first_name: &str, last_name: &str) -> ValidationResult<()> {
    required(first_name, "firstName")?;
    required(last_name, "lastName")
}

/// Validates a full client record before create/update.
pub fn validate_client(client: &Client) -> ValidationResult<()> {
    validate_client_names(&client.first_name, &client.last_name)
}

// =============================================================================
// Prescription & Supplier Forms
// =============================================================================

/// A prescription needs at least a patient and a prescriber.
pub fn validate_prescription(patient_name: &str, doctor_name: &str) -> ValidationResult<()> {
    required(patient_name, "patientName")?;
    required(doctor_name, "doctorName")
}

pub fn validate_supplier_name(name: &str) -> ValidationResult<()> {
    required(name, "name")
}

// =============================================================================
// Queries
// =============================================================================

/// Validates a search query.
///
/// ## Rules
/// - Can be empty (matches everything)
/// - Maximum 100 characters
///
/// ## Returns
/// The trimmed query string.
pub fn validate_search_query(query: &str) -> ValidationResult<String> {
    let query = query.trim();

    if query.chars().count() > 100 {
        return Err(ValidationError::OutOfRange {
            field: "query".to_string(),
            min: 0,
            max: 100,
        });
    }

    Ok(query.to_string())
}

// =============================================================================
// Unit Tests
// =============================================================================
