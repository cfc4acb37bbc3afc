//! # bazaar-core: Pure Domain Model for Bazaar
//!
//! This crate holds the record types served by the Bazaar API and the rules
//! that do not need storage: identity, PATCH merging and sort keys.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                        Bazaar Architecture                              │
//! │                                                                         │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                    HTTP API (apps/api)                          │   │
//! │  │     /products ──► /carts ──► /users                             │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │               bazaar-store (Repositories)                       │   │
//! │  │        RwLock<Vec<T>> + id counter, one per entity kind         │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │               ★ bazaar-core (THIS CRATE) ★                      │   │
//! │  │                                                                 │   │
//! │  │   ┌───────────┐  ┌───────────┐  ┌───────────┐                   │   │
//! │  │   │   types   │  │  record   │  │   query   │                   │   │
//! │  │   │  Product  │  │  Record   │  │ SortOrder │                   │   │
//! │  │   │ Cart/User │  │  merge    │  │ DateRange │                   │   │
//! │  │   └───────────┘  └───────────┘  └───────────┘                   │   │
//! │  │                                                                 │   │
//! │  │   NO I/O • NO LOCKS • PURE FUNCTIONS                            │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`types`] - Product, Cart, CartItem, User, Address
//! - [`record`] - The `Record` trait shared by all stored entities
//! - [`query`] - Sort direction and date windows for listings

// =============================================================================
// Module Declarations
// =============================================================================

pub mod query;
pub mod record;
pub mod types;

// =============================================================================
// Re-exports for Convenience
// =============================================================================

pub use query::{DateRange, SortOrder};
pub use record::Record;
pub use types::*;
