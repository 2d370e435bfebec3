//! # Store Error Types
//!
//! ## Error Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Error Propagation                                    │
//! │                                                                         │
//! │  Repository insert with an id that already exists                      │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  StoreError (this module)                                              │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  ApiError (in counter app) ← Serialized for the front-end              │
//! │                                                                         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Update, delete, and advance on a missing id are NOT errors: they report
//! `false` and leave the collection untouched.

use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum StoreError {
    /// Lookup that the caller required to succeed came back empty.
    ///
    /// ## When This Occurs
    /// - Opening a client card for an unknown id
    /// - Picking a medicine that was deleted meanwhile
    #[error("{entity} not found: {id}")]
    NotFound { entity: String, id: String },

    /// Insert with an id that is already taken.
    #[error("Duplicate {entity} id: '{id}' already exists")]
    DuplicateId { entity: String, id: String },
}

impl StoreError {
    /// Creates a NotFound error for a given entity type and ID.
    pub fn not_found(entity: impl Into<String>, id: impl Into<String>) -> Self {
        StoreError::NotFound {
            entity: entity.into(),
            id: id.into(),
        }
    }

    /// Creates a DuplicateId error.
    pub fn duplicate(entity: impl Into<String>, id: impl Into<String>) -> Self {
        StoreError::DuplicateId {
            entity: entity.into(),
            id: id.into(),
        }
    }
}

/// Result type for store operations.
pub type StoreResult<T> = Result<T, StoreError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_messages() {
        assert_eq!(
            StoreError::not_found("Client", "c9").to_string(),
            "Client not found: c9"
        );
        assert_eq!(
            StoreError::duplicate("Medicine", "1").to_string(),
            "Duplicate Medicine id: '1' already exists"
        );
    }
}
