//! # Money Module
//!
//! Provides the `Money` type for handling monetary values safely.
//!
//! ## Why Integer Money?
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  THE FLOATING POINT PROBLEM                                             │
//! │                                                                         │
//! │  In JavaScript/floating point:                                          │
//! │    0.1 + 0.2 = 0.30000000000000004  ❌ WRONG!                           │
//! │                                                                         │
//! │  OUR SOLUTION: Integer minor units                                      │
//! │    The pharmacy trades in FCFA, which has no subdivision, so one       │
//! │    unit is one franc. Other currencies would store cents.               │
//! │                                                                         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//! ```rust
//! use officine_core::money::Money;
//!
//! let price = Money::from_units(1500);
//! let doubled = price * 2;
//! assert_eq!(doubled.units(), 3000);
//! assert_eq!(price.display_in("FCFA"), "1500 FCFA");
//! ```

use serde::{Deserialize, Serialize};
use std::fmt;
use std::iter::Sum;
use std::ops::{Add, AddAssign, Mul, Sub, SubAssign};
use ts_rs::TS;

// =============================================================================
// Money Type
// =============================================================================

/// Represents a monetary value in the smallest currency unit.
///
/// ## Design Decisions
/// - **i64 (signed)**: differences (target minus revenue) can go negative
/// - **Single field tuple struct**: zero-cost abstraction over i64
/// - **Transparent serde**: serialises as a bare number, like the
///   front-end's `salePrice: number`
/// - **Saturating operators**: `+`, `-`, `*` and `sum` clamp at the i64
///   bounds instead of panicking; callers that must refuse an overflowing
///   step use the `checked_*` methods
///
/// ## Where Money is Used
/// ```text
/// Medicine.sale_price ──► CartItem line total ──► Cart.subtotal ──► Sale.total
///                                                                      │
/// PharmacySettings.daily_revenue_target ◄── goal progress ◄── revenue ◄┘
/// ```
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, TS,
)]
#[serde(transparent)]
#[ts(export)]
pub struct Money(i64);

impl Money {
    /// Creates a Money value from minor units.
    #[inline]
    pub const fn from_units(units: i64) -> Self {
        Money(units)
    }

    /// Returns the value in minor units.
    #[inline]
    pub const fn units(&self) -> i64 {
        self.0
    }

    /// Returns zero money value.
    #[inline]
    pub const fn zero() -> Self {
        Money(0)
    }

    /// Checks if the value is zero.
    #[inline]
    pub const fn is_zero(&self) -> bool {
        self.0 == 0
    }

    /// Checks if the value is positive (greater than zero).
    #[inline]
    pub const fn is_positive(&self) -> bool {
        self.0 > 0
    }

    /// Multiplies money by a quantity, saturating at the i64 bounds.
    ///
    /// ## Example
    /// ```rust
    /// use officine_core::money::Money;
    ///
    /// let unit_price = Money::from_units(200);
    /// assert_eq!(unit_price.multiply_quantity(2).units(), 400);
    /// ```
    #[inline]
    pub const fn multiply_quantity(&self, qty: i64) -> Self {
        Money(self.0.saturating_mul(qty))
    }

    /// Multiplies money by a quantity, or `None` on overflow.
    #[inline]
    pub fn checked_multiply_quantity(&self, qty: i64) -> Option<Self> {
        self.0.checked_mul(qty).map(Money)
    }

    /// Adds two amounts, or `None` on overflow.
    #[inline]
    pub fn checked_add(&self, other: Money) -> Option<Self> {
        self.0.checked_add(other.0).map(Money)
    }

    /// Percentage of `target` this amount represents, rounded to the
    /// nearest whole percent and capped at 100.
    ///
    /// Returns 0 when the target is zero or negative.
    ///
    /// ## Example
    /// ```rust
    /// use officine_core::money::Money;
    ///
    /// let revenue = Money::from_units(17_000);
    /// let target = Money::from_units(150_000);
    /// assert_eq!(revenue.progress_towards(target), 11);
    /// assert_eq!(target.progress_towards(revenue), 100);
    /// ```
    pub fn progress_towards(&self, target: Money) -> u8 {
        if target.0 <= 0 || self.0 <= 0 {
            return 0;
        }

        // Round half up with integer math: (a * 100 + t/2) / t
        let pct = (self.0 as i128 * 100 + target.0 as i128 / 2) / target.0 as i128;
        pct.min(100) as u8
    }

    /// Formats the amount followed by a currency label ("1900 FCFA").
    pub fn display_in(&self, currency: &str) -> String {
        format!("{} {}", self.0, currency)
    }
}

// =============================================================================
// Trait Implementations
// =============================================================================

/// Display shows the bare amount. Use [`Money::display_in`] for labels.
impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl Default for Money {
    fn default() -> Self {
        Money::zero()
    }
}

impl Add for Money {
    type Output = Self;

    #[inline]
    fn add(self, other: Self) -> Self {
        Money(self.0.saturating_add(other.0))
    }
}

impl AddAssign for Money {
    #[inline]
    fn add_assign(&mut self, other: Self) {
        self.0 = self.0.saturating_add(other.0);
    }
}

impl Sub for Money {
    type Output = Self;

    #[inline]
    fn sub(self, other: Self) -> Self {
        Money(self.0.saturating_sub(other.0))
    }
}

impl SubAssign for Money {
    #[inline]
    fn sub_assign(&mut self, other: Self) {
        self.0 = self.0.saturating_sub(other.0);
    }
}

/// Multiplication by i64 (quantities are i64 throughout).
impl Mul<i64> for Money {
    type Output = Self;

    #[inline]
    fn mul(self, qty: i64) -> Self {
        self.multiply_quantity(qty)
    }
}

impl Sum for Money {
    fn sum<I: Iterator<Item = Money>>(iter: I) -> Self {
        iter.fold(Money::zero(), Add::add)
    }
}

impl<'a> Sum<&'a Money> for Money {
    fn sum<I: Iterator<Item = &'a Money>>(iter: I) -> Self {
        iter.copied().sum()
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
