//! # Store
//!
//! One repository per entity kind, owned together.
//!
//! ```text
//! Store
//!  ├── products: ProductRepository
//!  ├── carts:    CartRepository      (userId / product_id are not checked
//!  └── users:    UserRepository       against the other repositories)
//! ```

use tracing::info;

use crate::error::StoreResult;
use crate::repository::{CartRepository, ProductRepository, UserRepository};
use crate::seed;

/// All repositories of a running service.
///
/// Instances are independent of each other. Wrap in an `Arc` to share
/// between request handlers.
#[derive(Debug, Default)]
pub struct Store {
    products: ProductRepository,
    carts: CartRepository,
    users: UserRepository,
}

impl Store {
    /// A store holding the anchor records from [`crate::seed`].
    ///
    /// ## Errors
    /// `DuplicateId` if a seed set repeats an id.
    pub fn seeded() -> StoreResult<Self> {
        let store = Store {
            products: ProductRepository::with_records(seed::products())?,
            carts: CartRepository::with_records(seed::carts())?,
            users: UserRepository::with_records(seed::users())?,
        };

        info!(
            products = store.products.len(),
            carts = store.carts.len(),
            users = store.users.len(),
            "Store seeded"
        );
        Ok(store)
    }

    /// A store with no records. Ids start at 0.
    pub fn empty() -> Self {
        Self::default()
    }

    pub fn products(&self) -> &ProductRepository {
        &self.products
    }

    pub fn carts(&self) -> &CartRepository {
        &self.carts
    }

    pub fn users(&self) -> &UserRepository {
        &self.users
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use bazaar_core::SortOrder;

    #[test]
    fn test_seeded_store_has_anchors() {
        let store = Store::seeded().unwrap();

        let product = store.products().get(0).unwrap();
        assert_eq!(product.price, 49.99);
        assert_eq!(product.category, "books");

        let cart = store.carts().get(0).unwrap();
        assert_eq!(cart.user_id, 0);
        assert_eq!(cart.products.len(), 1);
        assert_eq!(cart.products[0].quantity, 2);

        assert_eq!(store.users().by_username("testuser").unwrap().id, 0);
        assert_eq!(store.products().next_id(), Some(1));
    }

    #[test]
    fn test_empty_store() {
        let store = Store::empty();
        assert!(store.products().is_empty());
        assert!(store.carts().list(0, SortOrder::Ascending).is_empty());
        assert_eq!(store.users().next_id(), Some(0));
    }

    #[test]
    fn test_stores_are_independent() {
        let first = Store::seeded().unwrap();
        let second = Store::seeded().unwrap();

        first.products().delete(0).unwrap();

        assert!(first.products().is_empty());
        assert_eq!(second.products().len(), 1);
    }
}
