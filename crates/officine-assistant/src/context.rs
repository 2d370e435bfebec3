//! # Report Context
//!
//! The compact JSON snapshot of the pharmacy that is embedded in every
//! prompt.
//!
//! ```text
//! {
//!   "location": "Togo (Afrique de l'Ouest)",
//!   "currency": "FCFA (XOF)",
//!   "inventorySummary": [{"name", "stock", "salesPrice", "exp"}, ...],
//!   "todaysSalesTotal": <sum of every recorded sale>,
//!   "salesCount": <number of recorded sales>,
//!   "lowStockItems": ["Amoxicilline", ...]
//! }
//! ```
//!
//! `todaysSalesTotal` is the total over the whole history, not just today;
//! the key name is what the prompt has always used.

use serde::Serialize;

use officine_core::{Medicine, Money, Sale};

pub const LOCATION: &str = "Togo (Afrique de l'Ouest)";
pub const CURRENCY: &str = "FCFA (XOF)";

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct InventoryLine {
    pub name: String,
    pub stock: i64,
    pub sales_price: Money,
    pub exp: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ReportContext {
    pub location: &'static str,
    pub currency: &'static str,
    pub inventory_summary: Vec<InventoryLine>,
    pub todays_sales_total: Money,
    pub sales_count: usize,
    pub low_stock_items: Vec<String>,
}

impl ReportContext {
    /// Takes a snapshot of the catalog and sales history.
    pub fn capture(medicines: &[Medicine], sales: &[Sale]) -> Self {
        ReportContext {
            location: LOCATION,
            currency: CURRENCY,
            inventory_summary: medicines
                .iter()
                .map(|m| InventoryLine {
                    name: m.name.clone(),
                    stock: m.stock,
                    sales_price: m.sale_price,
                    exp: m.expiry_date.to_string(),
                })
                .collect(),
            todays_sales_total: sales.iter().map(|s| s.total).sum(),
            sales_count: sales.len(),
            low_stock_items: medicines
                .iter()
                .filter(|m| m.is_low_stock())
                .map(|m| m.name.clone())
                .collect(),
        }
    }

    /// Single-line JSON for the prompt.
    pub fn to_json(&self) -> String {
        // Only strings, integers, and vectors of those: cannot fail.
        serde_json::to_string(self).unwrap_or_default()
    }
}
