//! # Catalog Commands
//!
//! Commands behind the stock screen: listing, search, category filter,
//! low-stock view, and the medicine entry form.
//!
//! ## Entry Form Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Medicine Entry Form                                  │
//! │                                                                         │
//! │  "Nouveau médicament"                  "Modifier" on a row              │
//! │       │                                      │                          │
//! │       ▼                                      ▼                          │
//! │  Medicine::draft(today)               existing record (by id)           │
//! │  (price 0, expiry today,              unknown id ──► Ok(false)          │
//! │   sup1, min stock 10, Tablet)               │                           │
//! │       │                                      │                          │
//! │       └──────────► MedicineFields ◄──────────┘                          │
//! │                    (only typed fields change)                           │
//! │                          │                                              │
//! │                          ▼                                              │
//! │                 validate_medicine                                       │
//! │                 name required, sale price != 0                          │
//! │                          │                                              │
//! │                          ▼                                              │
//! │                 catalog.add / catalog.update                            │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use chrono::{NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use tracing::{debug, info, warn};

use officine_core::validation::{validate_medicine, validate_search_query};
use officine_core::{Medicine, MedicineForm, Money};
use officine_store::ALL_CATEGORIES;

use crate::error::ApiError;
use crate::state::SessionState;

/// Fields typed into the medicine form. `None` leaves the field as it is.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MedicineFields {
    pub name: Option<String>,
    pub description: Option<String>,
    pub dosage: Option<String>,
    pub category: Option<String>,
    pub form: Option<MedicineForm>,
    pub purchase_price: Option<i64>,
    pub sale_price: Option<i64>,
    pub stock: Option<i64>,
    pub min_stock: Option<i64>,
    pub expiry_date: Option<NaiveDate>,
    pub supplier_id: Option<String>,
}

impl MedicineFields {
    fn apply_to(self, medicine: &mut Medicine) {
        if let Some(name) = self.name {
            medicine.name = name.trim().to_string();
        }
        if let Some(description) = self.description {
            medicine.description = description;
        }
        if let Some(dosage) = self.dosage {
            medicine.dosage = dosage;
        }
        if let Some(category) = self.category {
            medicine.category = category.trim().to_string();
        }
        if let Some(form) = self.form {
            medicine.form = form;
        }
        if let Some(units) = self.purchase_price {
            medicine.purchase_price = Money::from_units(units);
        }
        if let Some(units) = self.sale_price {
            medicine.sale_price = Money::from_units(units);
        }
        if let Some(stock) = self.stock {
            medicine.stock = stock;
        }
        if let Some(min_stock) = self.min_stock {
            medicine.min_stock = min_stock;
        }
        if let Some(expiry_date) = self.expiry_date {
            medicine.expiry_date = expiry_date;
        }
        if let Some(supplier_id) = self.supplier_id {
            medicine.supplier_id = supplier_id;
        }
    }
}

/// Every medicine, in catalog order.
pub fn list_medicines(session: &SessionState) -> Vec<Medicine> {
    debug!("list_medicines command");
    session.with_session(|s| s.pharmacy.catalog().all().to_vec())
}

/// Stock-screen search.
///
/// ## Arguments
/// * `query` - substring of name or category (case-insensitive, empty = all)
/// * `category` - exact category, `None` or `"All"` for no filter
pub fn search_medicines(
    session: &SessionState,
    query: &str,
    category: Option<&str>,
) -> Result<Vec<Medicine>, ApiError> {
    debug!(query = %query, category = ?category, "search_medicines command");
    let query = validate_search_query(query)?;

    Ok(session.with_session(|s| {
        s.pharmacy
            .catalog()
            .search(&query, category)
            .into_iter()
            .cloned()
            .collect()
    }))
}

/// Category filter options: `"All"` followed by the distinct categories in
/// first-seen order.
pub fn list_categories(session: &SessionState) -> Vec<String> {
    debug!("list_categories command");
    let mut categories = vec![ALL_CATEGORIES.to_string()];
    categories.extend(session.with_session(|s| s.pharmacy.catalog().categories()));
    categories
}

/// Medicines at or below their minimum stock.
pub fn low_stock_medicines(session: &SessionState) -> Vec<Medicine> {
    debug!("low_stock_medicines command");
    session.with_session(|s| {
        s.pharmacy
            .catalog()
            .low_stock()
            .into_iter()
            .cloned()
            .collect()
    })
}

/// Saves a new medicine from the entry form.
///
/// ## Returns
/// The stored record, with its fresh id.
///
/// ## Errors
/// * `VALIDATION_ERROR` - missing name or non-positive sale price
pub fn add_medicine(session: &SessionState, fields: MedicineFields) -> Result<Medicine, ApiError> {
    debug!("add_medicine command");

    let mut medicine = Medicine::draft(Utc::now().date_naive());
    fields.apply_to(&mut medicine);

    if let Err(e) = validate_medicine(&medicine) {
        warn!(error = %e, "Medicine form rejected");
        return Err(e.into());
    }

    session.with_session_mut(|s| s.pharmacy.catalog_mut().add(medicine.clone()))?;
    info!(id = %medicine.id, name = %medicine.name, "Medicine added");
    Ok(medicine)
}

/// Saves edits to an existing medicine.
///
/// ## Returns
/// `false` when no medicine has this id (nothing changes).
///
/// ## Errors
/// * `VALIDATION_ERROR` - the edited record fails the form rules
pub fn update_medicine(
    session: &SessionState,
    id: &str,
    fields: MedicineFields,
) -> Result<bool, ApiError> {
    debug!(id = %id, "update_medicine command");

    session.with_session_mut(|s| {
        let Some(mut medicine) = s.pharmacy.catalog().get(id).cloned() else {
            return Ok(false);
        };
        fields.apply_to(&mut medicine);

        if let Err(e) = validate_medicine(&medicine) {
            warn!(id = %id, error = %e, "Medicine form rejected");
            return Err(e.into());
        }

        let updated = s.pharmacy.catalog_mut().update(medicine);
        if updated {
            info!(id = %id, "Medicine updated");
        }
        Ok(updated)
    })
}

/// Deletes a medicine. Unknown ids are ignored.
pub fn delete_medicine(session: &SessionState, id: &str) -> bool {
    debug!(id = %id, "delete_medicine command");
    let deleted = session.with_session_mut(|s| s.pharmacy.catalog_mut().delete(id));
    if deleted {
        info!(id = %id, "Medicine deleted");
    }
    deleted
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorCode;

    fn session() -> SessionState {
        SessionState::with_fixtures(Utc::now())
    }

    #[test]
    fn test_search_and_filter() {
        let session = session();

        let names: Vec<_> = search_medicines(&session, "PARA", None)
            .unwrap()
            .into_iter()
            .map(|m| m.name)
            .collect();
        assert_eq!(names, vec!["Paracétamol"]);

        let douleur = search_medicines(&session, "", Some("Douleur")).unwrap();
        assert_eq!(douleur.len(), 2);
        assert_eq!(search_medicines(&session, "", Some("All")).unwrap().len(), 6);
    }

    #[test]
    fn test_categories_start_with_all() {
        let categories = list_categories(&session());
        assert_eq!(categories[0], "All");
        assert_eq!(categories[1], "Douleur");
        assert_eq!(categories.len(), 6);
    }

    #[test]
    fn test_add_uses_draft_defaults() {
        let session = session();
        let medicine = add_medicine(
            &session,
            MedicineFields {
                name: Some("Ibuprofène".to_string()),
                category: Some("Douleur".to_string()),
                sale_price: Some(800),
                stock: Some(40),
                ..Default::default()
            },
        )
        .unwrap();

        assert_eq!(medicine.min_stock, 10);
        assert_eq!(medicine.supplier_id, "sup1");
        assert_eq!(medicine.form, MedicineForm::Tablet);
        assert_eq!(medicine.expiry_date, Utc::now().date_naive());
        assert_eq!(list_medicines(&session).len(), 7);
    }

    #[test]
    fn test_add_rejects_incomplete_form() {
        let session = session();

        let err = add_medicine(
            &session,
            MedicineFields {
                sale_price: Some(800),
                ..Default::default()
            },
        )
        .unwrap_err();
        assert_eq!(err.code, ErrorCode::ValidationError);

        let err = add_medicine(
            &session,
            MedicineFields {
                name: Some("Ibuprofène".to_string()),
                ..Default::default()
            },
        )
        .unwrap_err();
        assert!(err.message.contains("salePrice"));
        assert_eq!(list_medicines(&session).len(), 6);
    }

    #[test]
    fn test_update_and_delete() {
        let session = session();

        let changed = update_medicine(
            &session,
            "5",
            MedicineFields {
                stock: Some(30),
                ..Default::default()
            },
        )
        .unwrap();
        assert!(changed);
        assert_eq!(low_stock_medicines(&session).len(), 2);

        assert!(!update_medicine(&session, "missing", MedicineFields::default()).unwrap());

        assert!(delete_medicine(&session, "2"));
        assert!(!delete_medicine(&session, "2"));
        let ids: Vec<_> = list_medicines(&session).into_iter().map(|m| m.id).collect();
        assert_eq!(ids, vec!["1", "3", "4", "5", "6"]);
    }
}
