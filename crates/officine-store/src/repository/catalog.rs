//! # Catalog Repository
//!
//! The medicine list behind the stock screen and the POS picker.
//!
//! ## Search
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  Stock screen:  search("para", Some("Douleur"))                         │
//! │                   │                     │                               │
//! │                   │                     └─ exact category, "All" = any  │
//! │                   └─ substring of name OR category, case-insensitive    │
//! │                                                                         │
//! │  POS picker:    search_by_name("amox")                                  │
//! │                   └─ substring of name only                             │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use tracing::debug;

use crate::error::{StoreError, StoreResult};
use officine_core::{CartItem, Medicine};

/// Category filter value that disables filtering.
pub const ALL_CATEGORIES: &str = "All";

#[derive(Debug, Clone, Default)]
pub struct CatalogRepository {
    medicines: Vec<Medicine>,
}

impl CatalogRepository {
    pub fn new(medicines: Vec<Medicine>) -> Self {
        CatalogRepository { medicines }
    }

    /// Every medicine, in insertion order.
    pub fn all(&self) -> &[Medicine] {
        &self.medicines
    }

    pub fn get(&self, id: &str) -> Option<&Medicine> {
        self.medicines.iter().find(|m| m.id == id)
    }

    /// Like [`get`](Self::get), for callers that cannot proceed without it.
    pub fn require(&self, id: &str) -> StoreResult<&Medicine> {
        self.get(id)
            .ok_or_else(|| StoreError::not_found("Medicine", id))
    }

    pub fn len(&self) -> usize {
        self.medicines.len()
    }

    pub fn is_empty(&self) -> bool {
        self.medicines.is_empty()
    }

    /// Appends a medicine.
    ///
    /// ## Returns
    /// * `Err(DuplicateId)` - a medicine with this id already exists
    pub fn add(&mut self, medicine: Medicine) -> StoreResult<()> {
        if self.get(&medicine.id).is_some() {
            return Err(StoreError::duplicate("Medicine", medicine.id));
        }

        debug!(id = %medicine.id, name = %medicine.name, "Adding medicine");
        self.medicines.push(medicine);
        Ok(())
    }

    /// Replaces the medicine with the same id.
    ///
    /// ## Returns
    /// `false` when no medicine has this id (nothing changes).
    pub fn update(&mut self, medicine: Medicine) -> bool {
        match self.medicines.iter_mut().find(|m| m.id == medicine.id) {
            Some(slot) => {
                debug!(id = %medicine.id, "Updating medicine");
                *slot = medicine;
                true
            }
            None => false,
        }
    }

    /// Removes the medicine with this id. Other entries are untouched.
    ///
    /// ## Returns
    /// `false` when no medicine has this id.
    pub fn delete(&mut self, id: &str) -> bool {
        match self.medicines.iter().position(|m| m.id == id) {
            Some(index) => {
                debug!(id = %id, "Deleting medicine");
                self.medicines.remove(index);
                true
            }
            None => false,
        }
    }

    /// Stock-screen search.
    ///
    /// ## Arguments
    /// * `query` - substring of name or category (empty matches all)
    /// * `category` - exact category; `None` or `"All"` disables the filter
    pub fn search(&self, query: &str, category: Option<&str>) -> Vec<&Medicine> {
        let category = category.filter(|c| !c.is_empty() && *c != ALL_CATEGORIES);

        let results: Vec<&Medicine> = self
            .medicines
            .iter()
            .filter(|m| m.matches(query))
            .filter(|m| category.map_or(true, |c| m.category == c))
            .collect();

        debug!(query = %query, count = results.len(), "Catalog search");
        results
    }

    /// POS picker search (name only).
    pub fn search_by_name(&self, query: &str) -> Vec<&Medicine> {
        self.medicines
            .iter()
            .filter(|m| m.name_matches(query))
            .collect()
    }

    /// Distinct categories in first-seen order.
    pub fn categories(&self) -> Vec<String> {
        let mut seen: Vec<String> = Vec::new();
        for medicine in &self.medicines {
            if !seen.contains(&medicine.category) {
                seen.push(medicine.category.clone());
            }
        }
        seen
    }

    /// Medicines at or below their minimum stock.
    pub fn low_stock(&self) -> Vec<&Medicine> {
        self.medicines.iter().filter(|m| m.is_low_stock()).collect()
    }

    /// Decrements stock for each sold line, floored at zero.
    ///
    /// Lines whose medicine has been deleted are skipped.
    pub fn apply_sale(&mut self, items: &[CartItem]) {
        for item in items {
            if let Some(medicine) = self
                .medicines
                .iter_mut()
                .find(|m| m.id == item.medicine_id())
            {
                let before = medicine.stock;
                medicine.stock = medicine.stock.saturating_sub(item.quantity).max(0);
                debug!(
                    id = %medicine.id,
                    before,
                    after = medicine.stock,
                    "Stock decremented"
                );
            }
        }
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fixtures;

    fn catalog() -> CatalogRepository {
        CatalogRepository::new(fixtures::medicines())
    }

    #[test]
    fn test_search_by_name_or_category() {
        let catalog = catalog();

        let names: Vec<&str> = catalog
            .search("douleur", None)
            .iter()
            .map(|m| m.name.as_str())
            .collect();
        assert_eq!(names, vec!["Paracétamol", "Efferalgan"]);

        assert_eq!(catalog.search("COART", None).len(), 1);
        assert_eq!(catalog.search("", None).len(), 6);
    }

    #[test]
    fn test_search_category_filter() {
        let catalog = catalog();
        assert_eq!(catalog.search("", Some("Paludisme")).len(), 1);
        assert_eq!(catalog.search("", Some(ALL_CATEGORIES)).len(), 6);
        assert!(catalog.search("para", Some("Vitamines")).is_empty());
    }

    #[test]
    fn test_pos_search_ignores_category() {
        let catalog = catalog();
        assert!(catalog.search_by_name("douleur").is_empty());
        assert_eq!(catalog.search_by_name("amox").len(), 1);
    }

    #[test]
    fn test_categories_first_seen_order() {
        assert_eq!(
            catalog().categories(),
            vec!["Douleur", "Antibiotique", "Paludisme", "Vitamines", "Respiratoire"]
        );
    }

    #[test]
    fn test_low_stock() {
        let ids: Vec<String> = catalog()
            .low_stock()
            .iter()
            .map(|m| m.id.clone())
            .collect();
        // Amoxicilline 45/50, Vitamine C 15/20, Bronchokod 8/10
        assert_eq!(ids, vec!["2", "4", "5"]);
    }

    #[test]
    fn test_update_and_delete_missing_are_noops() {
        let mut catalog = catalog();
        let mut ghost = catalog.get("1").cloned().unwrap();
        ghost.id = "ghost".to_string();

        assert!(!catalog.update(ghost));
        assert!(!catalog.delete("ghost"));
        assert_eq!(catalog.len(), 6);
    }

    #[test]
    fn test_delete_removes_exactly_one() {
        let mut catalog = catalog();
        let before: Vec<Medicine> = catalog.all().to_vec();

        assert!(catalog.delete("3"));
        assert_eq!(catalog.len(), 5);
        let expected: Vec<Medicine> = before.into_iter().filter(|m| m.id != "3").collect();
        assert_eq!(catalog.all(), expected.as_slice());
    }

    #[test]
    fn test_add_rejects_duplicate_id() {
        let mut catalog = catalog();
        let copy = catalog.get("1").cloned().unwrap();
        assert!(matches!(
            catalog.add(copy),
            Err(StoreError::DuplicateId { .. })
        ));
    }

    #[test]
    fn test_apply_sale_floors_at_zero() {
        let mut catalog = catalog();
        let syrup = catalog.get("5").cloned().unwrap();
        let line = CartItem {
            medicine: syrup,
            quantity: 50,
        };

        catalog.apply_sale(&[line]);
        assert_eq!(catalog.get("5").unwrap().stock, 0);
    }
}
