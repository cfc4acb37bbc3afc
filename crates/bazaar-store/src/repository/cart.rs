//! # Cart Repository
//!
//! Owner and date-window queries over carts.

use bazaar_core::{Cart, DateRange, SortOrder};

use super::Repository;

/// Repository of [`Cart`] records.
pub type CartRepository = Repository<Cart>;

impl Repository<Cart> {
    /// Carts owned by `user_id`, in insertion order. May be empty.
    pub fn by_user(&self, user_id: u64) -> Vec<Cart> {
        self.filter(|cart| cart.user_id == user_id)
    }

    /// Carts dated inside `range`, sorted and limited like
    /// [`Repository::list`].
    pub fn in_date_range(&self, range: DateRange, limit: i64, sort: SortOrder) -> Vec<Cart> {
        self.query(limit, sort, |cart| range.contains(&cart.date))
    }
}
