//! # Sale Repository
//!
//! Append-only sales history.
//!
//! ## Sale Lifecycle
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                       Sale Lifecycle                                    │
//! │                                                                         │
//! │  1. BUILD        PosSession (officine-core) collects cart lines        │
//! │  2. COMPLETE     PosSession::complete(method) → Sale                   │
//! │  3. RECORD       Pharmacy::record_sale(sale)                           │
//! │                  ├── catalog.apply_sale(items)   (stock ↓, floor 0)    │
//! │                  └── sales.append(sale)          (THIS REPOSITORY)     │
//! │                                                                         │
//! │  There is no void, refund, or edit: a recorded sale never changes.     │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use chrono::NaiveDate;
use tracing::debug;

use crate::error::{StoreError, StoreResult};
use officine_core::{Money, Sale};

#[derive(Debug, Clone, Default)]
pub struct SaleRepository {
    sales: Vec<Sale>,
}

impl SaleRepository {
    pub fn new(sales: Vec<Sale>) -> Self {
        SaleRepository { sales }
    }

    /// All sales, oldest first.
    pub fn all(&self) -> &[Sale] {
        &self.sales
    }

    pub fn get(&self, id: &str) -> Option<&Sale> {
        self.sales.iter().find(|s| s.id == id)
    }

    /// Appends a completed sale.
    pub fn append(&mut self, sale: Sale) -> StoreResult<()> {
        if self.get(&sale.id).is_some() {
            return Err(StoreError::duplicate("Sale", sale.id));
        }

        debug!(id = %sale.id, total = %sale.total, "Recording sale");
        self.sales.push(sale);
        Ok(())
    }

    pub fn count(&self) -> usize {
        self.sales.len()
    }

    /// Sum of every sale's total.
    pub fn total_revenue(&self) -> Money {
        self.sales.iter().map(|s| s.total).sum()
    }

    /// Sales stamped on the given calendar day (UTC).
    pub fn on_day(&self, day: NaiveDate) -> Vec<&Sale> {
        self.sales.iter().filter(|s| s.is_on(day)).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fixtures;
    use chrono::{Duration, Utc};

    #[test]
    fn test_revenue_and_days() {
        let now = Utc::now();
        let repo = SaleRepository::new(fixtures::sales(now));

        assert_eq!(repo.count(), 2);
        assert_eq!(repo.total_revenue().units(), 17_000);
        assert_eq!(repo.on_day(now.date_naive()).len(), 1);
        assert_eq!(
            repo.on_day((now - Duration::days(1)).date_naive())[0].id,
            "s1"
        );
    }

    #[test]
    fn test_append_rejects_duplicate() {
        let now = Utc::now();
        let mut repo = SaleRepository::new(fixtures::sales(now));
        let again = repo.get("s2").cloned().unwrap();
        assert!(repo.append(again).is_err());
        assert_eq!(repo.count(), 2);
    }
}
