//! # Cart & POS Session
//!
//! The point-of-sale flow: a cart built from catalog items and the
//! two-state session that turns it into a [`Sale`].
//!
//! ## POS State Machine
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                        POS Session                                      │
//! │                                                                         │
//! │            add_item / change_quantity / remove_item                     │
//! │                  ┌──────────┐                                           │
//! │                  ▼          │                                           │
//! │            ┌────────────┐   │   begin_checkout    ┌────────────┐        │
//! │   start ──►│  Building  │───┴────────────────────►│   Paying   │        │
//! │            │ (mutable)  │◄────────────────────────│ (method    │        │
//! │            └────────────┘   cancel_checkout       │  picker)   │        │
//! │                  ▲                                └─────┬──────┘        │
//! │                  │        complete(method)              │               │
//! │                  └──────── cart emptied, Sale returned ◄┘               │
//! │                                                                         │
//! │  Stock ceilings: a line's quantity stays within [1, stock] where        │
//! │  stock is the medicine's stock when the line was created.               │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Bounds are clamped, never reported: pressing "+" at the ceiling simply
//! leaves the line unchanged. The same goes for a step that would push the
//! cart total past what a [`Money`] can hold.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use ts_rs::TS;
use uuid::Uuid;

use crate::error::{CoreError, CoreResult};
use crate::money::Money;
use crate::types::{Medicine, PaymentMethod, Sale};
use crate::DEFAULT_CASHIER_ID;

// =============================================================================
// Cart Item
// =============================================================================

/// A line in the cart.
///
/// ## Snapshot
/// The medicine is copied whole when the line is created. The price and the
/// stock ceiling used by [`Cart::change_quantity`] come from that copy, and
/// the copy is what the resulting [`Sale`] records.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct CartItem {
    #[serde(flatten)]
    pub medicine: Medicine,

    /// Units of this medicine in the cart.
    pub quantity: i64,
}

impl CartItem {
    /// Creates a single-unit line from a medicine.
    pub fn from_medicine(medicine: &Medicine) -> Self {
        CartItem {
            medicine: medicine.clone(),
            quantity: 1,
        }
    }

    /// Catalog id of the medicine on this line.
    #[inline]
    pub fn medicine_id(&self) -> &str {
        &self.medicine.id
    }

    /// Unit sale price frozen on this line.
    #[inline]
    pub fn unit_price(&self) -> Money {
        self.medicine.sale_price
    }

    /// Calculates the line total (unit price × quantity).
    #[inline]
    pub fn line_total(&self) -> Money {
        self.unit_price().multiply_quantity(self.quantity)
    }
}

// =============================================================================
// Cart
// =============================================================================

/// The shopping cart.
///
/// ## Invariants
/// - Lines are unique by medicine id (adding the same medicine again bumps
///   the quantity)
/// - Every quantity is in `[1, stock]`
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct Cart {
    pub items: Vec<CartItem>,
}

impl Cart {
    /// Creates a new empty cart.
    pub fn new() -> Self {
        Cart { items: Vec::new() }
    }

    /// Adds one unit of a medicine.
    ///
    /// ## Behavior
    /// - Already in cart: quantity + 1, unless it already equals the
    ///   medicine's stock
    /// - Not in cart: new line with quantity 1, unless the medicine is
    ///   out of stock
    /// - Either way, refused when the cart total would overflow
    ///
    /// Returns `true` when the cart changed.
    pub fn add_item(&mut self, medicine: &Medicine) -> bool {
        if let Some(index) = self.position(&medicine.id) {
            let item = &self.items[index];
            if item.quantity >= medicine.stock {
                return false;
            }
            let next = item.quantity + 1;
            if self
                .checked_total_with(&medicine.id, item.unit_price(), next)
                .is_none()
            {
                return false;
            }
            self.items[index].quantity = next;
            return true;
        }

        if medicine.is_out_of_stock()
            || self
                .checked_total_with(&medicine.id, medicine.sale_price, 1)
                .is_none()
        {
            return false;
        }

        self.items.push(CartItem::from_medicine(medicine));
        true
    }

    /// Nudges a line's quantity by `delta` (the "+" and "−" buttons).
    ///
    /// A result above the line's stock, or one whose cart total would
    /// overflow, leaves the line unchanged; a result below 1 is clamped
    /// to 1. Returns `true` when the quantity changed.
    pub fn change_quantity(&mut self, medicine_id: &str, delta: i64) -> bool {
        let Some(index) = self.position(medicine_id) else {
            return false;
        };
        let item = &self.items[index];

        let Some(new_qty) = item.quantity.checked_add(delta) else {
            return false;
        };
        if new_qty > item.medicine.stock {
            return false;
        }

        let new_qty = new_qty.max(1);
        if new_qty == item.quantity
            || self
                .checked_total_with(medicine_id, item.unit_price(), new_qty)
                .is_none()
        {
            return false;
        }
        self.items[index].quantity = new_qty;
        true
    }

    fn position(&self, medicine_id: &str) -> Option<usize> {
        self.items.iter().position(|i| i.medicine_id() == medicine_id)
    }

    /// Cart total with the line for `medicine_id` priced at `unit_price`
    /// and set to `quantity`, or `None` if it does not fit in a [`Money`].
    fn checked_total_with(
        &self,
        medicine_id: &str,
        unit_price: Money,
        quantity: i64,
    ) -> Option<Money> {
        let others = self
            .items
            .iter()
            .filter(|i| i.medicine_id() != medicine_id)
            .try_fold(Money::zero(), |acc, i| {
                acc.checked_add(i.unit_price().checked_multiply_quantity(i.quantity)?)
            })?;
        others.checked_add(unit_price.checked_multiply_quantity(quantity)?)
    }

    /// Removes a line by medicine id. Returns `true` if a line was removed.
    pub fn remove_item(&mut self, medicine_id: &str) -> bool {
        let initial_len = self.items.len();
        self.items.retain(|i| i.medicine_id() != medicine_id);
        self.items.len() != initial_len
    }

    /// Quantity of a medicine currently in the cart (0 if absent).
    pub fn quantity_of(&self, medicine_id: &str) -> i64 {
        self.items
            .iter()
            .find(|i| i.medicine_id() == medicine_id)
            .map_or(0, |i| i.quantity)
    }

    /// Clears all items from the cart.
    pub fn clear(&mut self) {
        self.items.clear();
    }

    /// Returns the number of distinct lines.
    pub fn item_count(&self) -> usize {
        self.items.len()
    }

    /// Returns the total quantity of all items.
    pub fn total_quantity(&self) -> i64 {
        self.items
            .iter()
            .fold(0i64, |acc, i| acc.saturating_add(i.quantity))
    }

    /// Σ(unit price × quantity).
    pub fn subtotal(&self) -> Money {
        self.items.iter().map(CartItem::line_total).sum()
    }

    /// Always zero; see [`Sale::tax`].
    pub fn tax(&self) -> Money {
        Money::zero()
    }

    /// Subtotal plus tax.
    pub fn total(&self) -> Money {
        self.subtotal() + self.tax()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

/// Cart totals summary for command responses.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct CartTotals {
    pub item_count: usize,
    pub total_quantity: i64,
    pub subtotal: Money,
    pub tax: Money,
    pub total: Money,
}

impl From<&Cart> for CartTotals {
    fn from(cart: &Cart) -> Self {
        CartTotals {
            item_count: cart.item_count(),
            total_quantity: cart.total_quantity(),
            subtotal: cart.subtotal(),
            tax: cart.tax(),
            total: cart.total(),
        }
    }
}

// =============================================================================
// POS Session
// =============================================================================

/// Which panel the POS shows.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum PosState {
    /// Cart is editable.
    #[default]
    Building,
    /// Payment-method selection is shown; cart is frozen.
    Paying,
}

/// A cart plus the checkout state.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct PosSession {
    pub cart: Cart,
    pub state: PosState,
}

impl PosSession {
    pub fn new() -> Self {
        Self::default()
    }

    fn require(&self, required: PosState) -> CoreResult<()> {
        if self.state != required {
            return Err(CoreError::InvalidPosState {
                current: self.state,
                required,
            });
        }
        Ok(())
    }

    /// See [`Cart::add_item`]. Only allowed while building.
    pub fn add_item(&mut self, medicine: &Medicine) -> CoreResult<bool> {
        self.require(PosState::Building)?;
        Ok(self.cart.add_item(medicine))
    }

    /// See [`Cart::change_quantity`]. Only allowed while building.
    pub fn change_quantity(&mut self, medicine_id: &str, delta: i64) -> CoreResult<bool> {
        self.require(PosState::Building)?;
        Ok(self.cart.change_quantity(medicine_id, delta))
    }

    /// See [`Cart::remove_item`]. Only allowed while building.
    pub fn remove_item(&mut self, medicine_id: &str) -> CoreResult<bool> {
        self.require(PosState::Building)?;
        Ok(self.cart.remove_item(medicine_id))
    }

    /// Building → Paying.
    pub fn begin_checkout(&mut self) -> CoreResult<()> {
        self.require(PosState::Building)?;
        if self.cart.is_empty() {
            return Err(CoreError::EmptyCart);
        }
        self.state = PosState::Paying;
        Ok(())
    }

    /// Paying → Building, cart untouched.
    pub fn cancel_checkout(&mut self) -> CoreResult<()> {
        self.require(PosState::Paying)?;
        self.state = PosState::Building;
        Ok(())
    }

    /// Paying → Building: freezes the cart into a [`Sale`] and empties it.
    ///
    /// The caller is responsible for decrementing catalog stock with the
    /// returned sale's items.
    pub fn complete(&mut self, method: PaymentMethod, now: DateTime<Utc>) -> CoreResult<Sale> {
        self.require(PosState::Paying)?;

        let sale = Sale {
            id: Uuid::new_v4().to_string(),
            date: now,
            total: self.cart.total(),
            tax: Money::zero(),
            discount: Money::zero(),
            payment_method: method,
            cashier_id: DEFAULT_CASHIER_ID.to_string(),
            items: std::mem::take(&mut self.cart.items),
        };

        self.state = PosState::Building;
        Ok(sale)
    }

    pub fn totals(&self) -> CartTotals {
        CartTotals::from(&self.cart)
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
