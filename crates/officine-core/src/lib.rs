//! # officine-core: Pure Business Logic for the Pharmacy Counter
//!
//! This crate is the **heart** of Officine. It contains all business logic
//! as pure functions with zero I/O dependencies.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                        Officine Architecture                            │
//! │                                                                         │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                    Counter (console front-end)                  │   │
//! │  │   Stock ──► POS ──► Prescriptions ──► Clients ──► Reports      │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │ commands                               │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │               ★ officine-core (THIS CRATE) ★                    │   │
//! │  │                                                                 │   │
//! │  │   ┌───────────┐  ┌───────────┐  ┌───────────┐  ┌───────────┐  │   │
//! │  │   │   types   │  │   money   │  │   cart    │  │ validation│  │   │
//! │  │   │ Medicine  │  │   Money   │  │ PosSession│  │   forms   │  │   │
//! │  │   │   Sale    │  │           │  │ CartItem  │  │           │  │   │
//! │  │   └───────────┘  └───────────┘  └───────────┘  └───────────┘  │   │
//! │  │   ┌─────────────┐ ┌───────────┐ ┌───────────┐ ┌────────────┐  │   │
//! │  │   │prescription │ │  client   │ │ supplier  │ │ dashboard  │  │   │
//! │  │   └─────────────┘ └───────────┘ └───────────┘ └────────────┘  │   │
//! │  │                                                                 │   │
//! │  │   NO I/O • NO NETWORK • NO CLOCK • PURE FUNCTIONS               │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │                officine-store (in-memory state)                 │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`types`] - Domain types (Medicine, Sale, Client, Supplier, ...)
//! - [`money`] - Money type with integer arithmetic (no floating point!)
//! - [`error`] - Domain error types
//! - [`validation`] - Form-level validation
//! - [`cart`] - Cart and the two-state POS session
//! - [`prescription`] - Prescription board workflow
//! - [`client`] - Derived patient metrics (age, BMI)
//! - [`supplier`] - Simulated map positions and delivery animation
//! - [`dashboard`] - Derived activity metrics
//!
//! ## Design Principles
//!
//! 1. **Pure Functions**: callers pass `now`/`today`, never read the clock here
//! 2. **No I/O**: network and file system access are FORBIDDEN here
//! 3. **Integer Money**: amounts are integer minor units
//! 4. **Forgiving Bounds**: stock and quantity bounds clamp, they don't fail
//!
//! ## Example Usage
//!
//! ```rust
//! use officine_core::money::Money;
//!
//! let unit_price = Money::from_units(200);
//! let line_total = unit_price.multiply_quantity(2);
//!
//! assert_eq!(line_total + Money::from_units(1500), Money::from_units(1900));
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod cart;
pub mod client;
pub mod dashboard;
pub mod error;
pub mod money;
pub mod prescription;
pub mod supplier;
pub mod types;
pub mod validation;

// =============================================================================
// Re-exports for Convenience
// =============================================================================

pub use cart::{Cart, CartItem, CartTotals, PosSession, PosState};
pub use error::{CoreError, CoreResult, ValidationError};
pub use money::Money;
pub use types::*;

// =============================================================================
// Crate-Level Constants
// =============================================================================

/// Cashier recorded on every sale.
///
/// There is no authentication, so every checkout is attributed to the
/// same operator.
pub const DEFAULT_CASHIER_ID: &str = "current-user";

/// Supplier assigned to medicines created without one.
pub const DEFAULT_SUPPLIER_ID: &str = "sup1";

/// Minimum-stock threshold pre-filled on the new medicine form.
pub const DEFAULT_MIN_STOCK: i64 = 10;
