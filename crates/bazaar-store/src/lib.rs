//! # bazaar-store: In-Memory Storage Layer for Bazaar
//!
//! This crate holds every record the Bazaar API serves, in process memory,
//! behind one reader/writer lock per entity kind.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                        Bazaar Architecture                              │
//! │                                                                         │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                    HTTP API (apps/api)                          │   │
//! │  │          handlers hold Arc<Store>, never hold a lock            │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │               ★ bazaar-store (THIS CRATE) ★                     │   │
//! │  │                                                                 │   │
//! │  │   ┌───────────────┐  ┌───────────────┐  ┌───────────────┐       │   │
//! │  │   │   Products    │  │    Carts      │  │    Users      │       │   │
//! │  │   │  Repository   │  │  Repository   │  │  Repository   │       │   │
//! │  │   └───────┬───────┘  └───────┬───────┘  └───────┬───────┘       │   │
//! │  │           └──────────────────┼──────────────────┘               │   │
//! │  │                              ▼                                  │   │
//! │  │                 Repository<T: Record>                           │   │
//! │  │           RwLock<Vec<T>> + monotonic id counter                 │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │                bazaar-core (Pure Types)                         │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Module Organization
//!
//! - [`repository`] - Generic repository plus product, cart and user queries
//! - [`store`] - The `Store` aggregate owning one repository per entity
//! - [`seed`] - Anchor records for a freshly started service
//! - [`error`] - Store error types
//!
//! ## Usage
//!
//! ```rust
//! use bazaar_core::{Product, SortOrder};
//! use bazaar_store::Store;
//!
//! let store = Store::seeded().unwrap();
//!
//! let created = store
//!     .products()
//!     .create(Product {
//!         name: "Kite".to_string(),
//!         price: 10.0,
//!         ..Default::default()
//!     })
//!     .unwrap();
//! assert_eq!(created.id, 1);
//!
//! let cheapest = store.products().list(1, SortOrder::Ascending);
//! assert_eq!(cheapest[0].id, 1);
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod error;
pub mod repository;
pub mod seed;
pub mod store;

// =============================================================================
// Re-exports
// =============================================================================

pub use error::{StoreError, StoreResult};
pub use repository::Repository;
pub use store::Store;

// Repository re-exports for convenience
pub use repository::{CartRepository, ProductRepository, UserRepository};
