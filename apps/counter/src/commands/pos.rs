//! # POS Commands
//!
//! Cart manipulation, checkout, and the sales journal.
//!
//! ## Cart Lifecycle
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    POS State Machine                                    │
//! │                                                                         │
//! │        add_to_cart / increment / decrement / remove_from_cart           │
//! │                      ┌────────┐                                         │
//! │                      ▼        │                                         │
//! │               ┌──────────────────┐   begin_checkout    ┌──────────────┐ │
//! │  start ──────►│     BUILDING     │───(cart not empty)─►│    PAYING    │ │
//! │               │  cart editable   │◄──cancel_checkout───│ cart frozen  │ │
//! │               └──────────────────┘                     └──────┬───────┘ │
//! │                      ▲                                        │         │
//! │                      │          complete_sale(method)         │         │
//! │                      └────────────────────────────────────────┘         │
//! │                 sale appended, stock decremented, cart emptied          │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Quantities are clamped silently: adding past the stock or decrementing
//! below 1 leaves the line unchanged.

use chrono::Utc;
use serde::{Deserialize, Serialize};
use tracing::{debug, info, warn};

use officine_core::validation::validate_search_query;
use officine_core::{
    CartItem, CartTotals, CoreError, Medicine, PaymentMethod, PosSession, PosState, Sale,
};

use crate::error::ApiError;
use crate::state::SessionState;

/// Cart response including items, totals, and the panel being shown.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CartResponse {
    pub items: Vec<CartItem>,
    pub totals: CartTotals,
    pub state: PosState,
}

impl From<&PosSession> for CartResponse {
    fn from(pos: &PosSession) -> Self {
        CartResponse {
            items: pos.cart.items.clone(),
            totals: pos.totals(),
            state: pos.state,
        }
    }
}

/// POS product picker: case-insensitive match on the medicine name.
pub fn search_products(session: &SessionState, query: &str) -> Result<Vec<Medicine>, ApiError> {
    debug!(query = %query, "search_products command");
    let query = validate_search_query(query)?;

    Ok(session.with_session(|s| {
        s.pharmacy
            .catalog()
            .search_by_name(&query)
            .into_iter()
            .cloned()
            .collect()
    }))
}

/// Gets the current cart contents.
///
/// ## Returns
/// Current cart with items and calculated totals
pub fn get_cart(session: &SessionState) -> CartResponse {
    debug!("get_cart command");
    session.with_session(|s| CartResponse::from(&s.pos))
}

/// Adds one unit of a catalog medicine to the cart.
///
/// ## User Workflow
/// ```text
/// ┌─────────────────────────────────────────────────────────────────┐
/// │  Product grid: click "Amoxicilline (45 en stock)"               │
/// │           │                                                     │
/// │           ▼                                                     │
/// │  already in cart? ── yes ── at stock? ── yes ──► unchanged      │
/// │           │                    │                                │
/// │           no                   no ──► quantity + 1              │
/// │           │                                                     │
/// │           ▼                                                     │
/// │  stock 0? ── yes ──► unchanged                                  │
/// │           │                                                     │
/// │           no ──► new line, quantity 1, price snapshot           │
/// └─────────────────────────────────────────────────────────────────┘
/// ```
///
/// ## Errors
/// * `NOT_FOUND` - no medicine with this id
/// * `BUSINESS_LOGIC` - the payment panel is open
pub fn add_to_cart(session: &SessionState, medicine_id: &str) -> Result<CartResponse, ApiError> {
    debug!(medicine_id = %medicine_id, "add_to_cart command");

    session.with_session_mut(|s| {
        let medicine = s
            .pharmacy
            .catalog()
            .get(medicine_id)
            .cloned()
            .ok_or_else(|| CoreError::MedicineNotFound(medicine_id.to_string()))?;

        if !s.pos.add_item(&medicine)? {
            debug!(
                medicine_id = %medicine_id,
                stock = medicine.stock,
                "Line unchanged at stock or total ceiling"
            );
        }
        Ok(CartResponse::from(&s.pos))
    })
}

fn change_quantity(
    session: &SessionState,
    medicine_id: &str,
    delta: i64,
) -> Result<CartResponse, ApiError> {
    session.with_session_mut(|s| {
        s.pos.change_quantity(medicine_id, delta)?;
        Ok(CartResponse::from(&s.pos))
    })
}

/// The "+" button of a cart line.
pub fn increment_item(session: &SessionState, medicine_id: &str) -> Result<CartResponse, ApiError> {
    debug!(medicine_id = %medicine_id, "increment_item command");
    change_quantity(session, medicine_id, 1)
}

/// The "-" button of a cart line. Never goes below 1.
pub fn decrement_item(session: &SessionState, medicine_id: &str) -> Result<CartResponse, ApiError> {
    debug!(medicine_id = %medicine_id, "decrement_item command");
    change_quantity(session, medicine_id, -1)
}

/// Drops a line from the cart.
pub fn remove_from_cart(
    session: &SessionState,
    medicine_id: &str,
) -> Result<CartResponse, ApiError> {
    debug!(medicine_id = %medicine_id, "remove_from_cart command");
    session.with_session_mut(|s| {
        s.pos.remove_item(medicine_id)?;
        Ok(CartResponse::from(&s.pos))
    })
}

/// Opens the payment panel.
///
/// ## Errors
/// * `CART_ERROR` - the cart is empty
/// * `BUSINESS_LOGIC` - the payment panel is already open
pub fn begin_checkout(session: &SessionState) -> Result<CartResponse, ApiError> {
    debug!("begin_checkout command");
    session.with_session_mut(|s| {
        if let Err(e) = s.pos.begin_checkout() {
            warn!(error = %e, "Checkout refused");
            return Err(e.into());
        }
        Ok(CartResponse::from(&s.pos))
    })
}

/// The "back" action of the payment panel. The cart is kept.
pub fn cancel_checkout(session: &SessionState) -> Result<CartResponse, ApiError> {
    debug!("cancel_checkout command");
    session.with_session_mut(|s| {
        s.pos.cancel_checkout()?;
        Ok(CartResponse::from(&s.pos))
    })
}

/// Finalizes the sale with the chosen payment method.
///
/// ## Flow
/// ```text
/// ┌─────────────────────────────────────────────────────────────────┐
/// │  1. PosSession::complete  → Sale (items frozen, tax 0, disc. 0) │
/// │  2. Pharmacy::record_sale → appended to the journal             │
/// │                           → catalog stock -= quantity (floor 0) │
/// │  3. Cart emptied, POS back to BUILDING                          │
/// └─────────────────────────────────────────────────────────────────┘
/// ```
///
/// All three steps run under one lock.
///
/// ## Errors
/// * `BUSINESS_LOGIC` - checkout has not been started
pub fn complete_sale(session: &SessionState, method: PaymentMethod) -> Result<Sale, ApiError> {
    debug!(method = ?method, "complete_sale command");

    session.with_session_mut(|s| {
        let sale = s.pos.complete(method, Utc::now())?;
        s.pharmacy.record_sale(sale.clone())?;

        info!(
            sale_id = %sale.id,
            total = %sale.total,
            method = ?sale.payment_method,
            units = sale.unit_count(),
            "Sale completed"
        );
        Ok(sale)
    })
}

/// The sales journal, most recent last.
pub fn list_sales(session: &SessionState) -> Vec<Sale> {
    debug!("list_sales command");
    session.with_session(|s| s.pharmacy.sales().all().to_vec())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorCode;

    fn session() -> SessionState {
        SessionState::with_fixtures(Utc::now())
    }

    fn stock_of(session: &SessionState, id: &str) -> i64 {
        session.with_session(|s| s.pharmacy.catalog().get(id).map(|m| m.stock).unwrap())
    }

    #[test]
    fn test_add_unknown_medicine() {
        let err = add_to_cart(&session(), "404").unwrap_err();
        assert_eq!(err.code, ErrorCode::NotFound);
    }

    #[test]
    fn test_add_stops_at_stock() {
        let session = session();
        // Bronchokod: 8 in stock
        for _ in 0..10 {
            add_to_cart(&session, "5").unwrap();
        }
        assert_eq!(get_cart(&session).items[0].quantity, 8);

        let cart = decrement_item(&session, "5").unwrap();
        assert_eq!(cart.items[0].quantity, 7);
    }

    #[test]
    fn test_checkout_reference_sale() {
        let session = session();
        add_to_cart(&session, "1").unwrap();
        add_to_cart(&session, "1").unwrap();
        add_to_cart(&session, "2").unwrap();

        let cart = begin_checkout(&session).unwrap();
        assert_eq!(cart.state, PosState::Paying);
        assert_eq!(cart.totals.total.units(), 1900);

        let sale = complete_sale(&session, PaymentMethod::MobileMoney).unwrap();
        assert_eq!(sale.total.units(), 1900);
        assert_eq!(sale.cashier_id, "current-user");
        assert!(sale.tax.is_zero() && sale.discount.is_zero());

        assert_eq!(stock_of(&session, "1"), 318);
        assert_eq!(stock_of(&session, "2"), 44);
        assert_eq!(list_sales(&session).len(), 3);

        let cart = get_cart(&session);
        assert!(cart.items.is_empty());
        assert_eq!(cart.state, PosState::Building);
    }

    #[test]
    fn test_cart_frozen_while_paying() {
        let session = session();
        add_to_cart(&session, "3").unwrap();
        begin_checkout(&session).unwrap();

        let err = add_to_cart(&session, "1").unwrap_err();
        assert_eq!(err.code, ErrorCode::BusinessLogic);

        let cart = cancel_checkout(&session).unwrap();
        assert_eq!(cart.state, PosState::Building);
        assert_eq!(cart.items.len(), 1);
    }

    #[test]
    fn test_checkout_requires_items_and_paying_state() {
        let session = session();
        assert_eq!(begin_checkout(&session).unwrap_err().code, ErrorCode::CartError);
        assert_eq!(
            complete_sale(&session, PaymentMethod::Cash).unwrap_err().code,
            ErrorCode::BusinessLogic
        );
        assert_eq!(list_sales(&session).len(), 2);
    }

    #[test]
    fn test_product_picker_matches_names_only() {
        let session = session();
        assert_eq!(search_products(&session, "coart").unwrap().len(), 1);
        // "Paludisme" is a category, not a name
        assert!(search_products(&session, "palu").unwrap().is_empty());
    }
}
