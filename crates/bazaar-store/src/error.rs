//! # Store Error Types
//!
//! Error types for repository operations.
//!
//! ## Error Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Error Propagation                                    │
//! │                                                                         │
//! │  Repository lookup (linear scan, no match)                             │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  StoreError (this module) ← entity + id for context                    │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  ApiError (in apps/api) ← mapped to 404 + JSON body                    │
//! │                                                                         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Besides lookups, a repository fails only when built from a seed with
//! clashing ids or when its id counter has run out.

use thiserror::Error;

/// Repository operation errors.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StoreError {
    /// No record with the requested id.
    ///
    /// ## When This Occurs
    /// - Get / Update / Merge / Delete / Modify with an unknown id
    /// - The record was deleted by a concurrent request
    #[error("{entity} not found: {id}")]
    NotFound { entity: &'static str, id: u64 },

    /// No product carries the requested category.
    #[error("category not found: {0}")]
    CategoryNotFound(String),

    /// No user has the requested username.
    #[error("user not found: {0}")]
    UsernameNotFound(String),

    /// Two seeded records share an id.
    #[error("duplicate {entity} id in seed: {id}")]
    DuplicateId { entity: &'static str, id: u64 },

    /// Every id up to `u64::MAX` has been handed out.
    #[error("{entity} ids exhausted")]
    IdsExhausted { entity: &'static str },
}

impl StoreError {
    /// Creates a NotFound error for a given entity kind and id.
    pub fn not_found(entity: &'static str, id: u64) -> Self {
        StoreError::NotFound { entity, id }
    }
}

/// Result type for repository operations.
pub type StoreResult<T> = Result<T, StoreError>;
