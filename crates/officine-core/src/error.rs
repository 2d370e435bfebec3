//! # Error Types
//!
//! Domain-specific error types for officine-core.
//!
//! ## Error Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Error Types                                     │
//! │                                                                         │
//! │  officine-core errors (this file)                                      │
//! │  ├── CoreError        - POS state and lookup failures                  │
//! │  └── ValidationError  - Form validation failures                       │
//! │                                                                         │
//! │  officine-store errors (separate crate)                                │
//! │  └── StoreError       - Duplicate ids                                  │
//! │                                                                         │
//! │  Counter errors (in app)                                               │
//! │  └── ApiError         - What the front-end sees (serialized)           │
//! │                                                                         │
//! │  Flow: ValidationError → CoreError → ApiError → Front-end              │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## What Is NOT an Error
//! Stock and quantity bounds clamp silently, and update/delete/advance on
//! an unknown id are no-ops. Only operations that genuinely refuse to run
//! produce one of these variants.

use thiserror::Error;

use crate::cart::PosState;

// =============================================================================
// Core Error
// =============================================================================

/// Core business logic errors.
#[derive(Debug, Error)]
pub enum CoreError {
    /// Medicine cannot be found in the catalog.
    #[error("Medicine not found: {0}")]
    MedicineNotFound(String),

    /// The POS session is not in the state the operation requires.
    ///
    /// ## When This Occurs
    /// - Changing the cart while the payment panel is shown
    /// - Completing a sale before checkout began
    /// - Beginning checkout twice
    #[error("POS is {current:?}, operation requires {required:?}")]
    InvalidPosState { current: PosState, required: PosState },

    /// Checkout was requested with nothing in the cart.
    #[error("Cart is empty")]
    EmptyCart,

    /// Validation error (wraps ValidationError).
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),
}

// =============================================================================
// Validation Error
// =============================================================================

/// Input validation errors.
///
/// These mirror the required-field checks of the entry forms.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ValidationError {
    /// A required field is missing or empty.
    #[error("{field} is required")]
    Required { field: String },

    /// Numeric value is out of range.
    #[error("{field} must be between {min} and {max}")]
    OutOfRange { field: String, min: i64, max: i64 },

    /// Value must not be zero.
    #[error("{field} must not be zero")]
    MustBeNonZero { field: String },

    /// Invalid format (e.g., invalid date).
    #[error("{field} has invalid format: {reason}")]
    InvalidFormat { field: String, reason: String },
}

// =============================================================================
// Result Type Alias
// =============================================================================

/// Convenience type alias for Results with CoreError.
pub type CoreResult<T> = Result<T, CoreError>;

// =============================================================================
// Unit Tests
// =============================================================================
