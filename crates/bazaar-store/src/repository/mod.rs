//! # Repository Module
//!
//! The generic in-memory repository and its per-entity query extensions.
//!
//! ## Repository Pattern
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Repository<T: Record>                                │
//! │                                                                         │
//! │  HTTP handler                                                          │
//! │       │                                                                 │
//! │       │  store.products().list(2, SortOrder::Descending)               │
//! │       ▼                                                                 │
//! │  ┌──────────────────────────────────────────────────────────────┐      │
//! │  │  RwLock<Collection<T>>                                        │      │
//! │  │  ├── records: Vec<T>   (insertion order, never reordered)     │      │
//! │  │  └── next_id: Option<u64> (monotonic, never reissued)         │      │
//! │  └──────────────────────────────────────────────────────────────┘      │
//! │                                                                         │
//! │  SHARED (read) lock            EXCLUSIVE (write) lock                  │
//! │  ──────────────────            ──────────────────────                  │
//! │  get, exists, list, query      create, update, merge                   │
//! │  filter, find, read            modify, delete                          │
//! │                                                                         │
//! │  Every value handed out is a clone. Sorting happens on that clone,     │
//! │  after the lock is released.                                           │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Available Repositories
//!
//! - [`ProductRepository`] - catalogue, category lookups and counts
//! - [`CartRepository`] - carts by owner and by date window
//! - [`UserRepository`] - users by id and by username

use std::collections::HashSet;

use parking_lot::RwLock;
use tracing::debug;

use bazaar_core::{Record, SortOrder};

use crate::error::{StoreError, StoreResult};

pub mod cart;
pub mod product;
pub mod user;

pub use cart::CartRepository;
pub use product::ProductRepository;
pub use user::UserRepository;

/// Records plus the id counter, always mutated together.
///
/// `next_id` is `None` once `u64::MAX` has been issued.
#[derive(Debug)]
struct Collection<T> {
    records: Vec<T>,
    next_id: Option<u64>,
}

/// Concurrency-safe ordered store for one entity kind.
///
/// ## Usage
/// ```rust
/// use bazaar_core::{Product, SortOrder};
/// use bazaar_store::Repository;
///
/// let repo = Repository::<Product>::new();
/// let created = repo
///     .create(Product {
///         name: "Mug".to_string(),
///         price: 8.5,
///         ..Default::default()
///     })
///     .unwrap();
///
/// assert_eq!(created.id, 0);
/// assert_eq!(repo.get(0).unwrap().name, "Mug");
/// assert_eq!(repo.list(0, SortOrder::Unspecified).len(), 1);
/// ```
#[derive(Debug)]
pub struct Repository<T: Record> {
    inner: RwLock<Collection<T>>,
}

impl<T: Record> Repository<T> {
    /// Creates an empty repository. The first record gets id 0.
    pub fn new() -> Self {
        Repository {
            inner: RwLock::new(Collection {
                records: Vec::new(),
                next_id: Some(0),
            }),
        }
    }

    /// Creates a repository holding `records` in the given order.
    ///
    /// New records are numbered from one past the highest seeded id. A seed
    /// holding `u64::MAX` leaves no id to hand out, so every later
    /// [`Repository::create`] fails with `IdsExhausted`.
    ///
    /// ## Errors
    /// `DuplicateId` if two seeded records share an id.
    pub fn with_records(records: Vec<T>) -> StoreResult<Self> {
        let mut seen = HashSet::with_capacity(records.len());
        if let Some(duplicate) = records.iter().map(Record::id).find(|id| !seen.insert(*id)) {
            return Err(StoreError::DuplicateId {
                entity: T::ENTITY,
                id: duplicate,
            });
        }

        let next_id = match records.iter().map(Record::id).max() {
            Some(max) => max.checked_add(1),
            None => Some(0),
        };

        Ok(Repository {
            inner: RwLock::new(Collection { records, next_id }),
        })
    }

    // =========================================================================
    // Writes (exclusive lock)
    // =========================================================================

    /// Stores `record` under a freshly assigned id and returns the stored copy.
    ///
    /// Any id already set on `record` is overwritten. Assignment and append
    /// happen under one lock acquisition, so concurrent creates never receive
    /// the same id.
    ///
    /// ## Errors
    /// `IdsExhausted` once `u64::MAX` has been assigned; nothing is stored.
    pub fn create(&self, mut record: T) -> StoreResult<T> {
        let mut inner = self.inner.write();

        let id = inner
            .next_id
            .ok_or(StoreError::IdsExhausted { entity: T::ENTITY })?;
        inner.next_id = id.checked_add(1);
        record.set_id(id);
        inner.records.push(record.clone());

        debug!(entity = T::ENTITY, id, "Record created");
        Ok(record)
    }

    /// Runs `f` on the stored record with `id` while holding the write lock.
    ///
    /// This is the atomic find-and-mutate primitive: the lookup and the
    /// mutation form one critical section, so no concurrent delete can slip
    /// in between. The record keeps `id` whatever `f` does to it.
    pub fn modify<R, F>(&self, id: u64, f: F) -> StoreResult<R>
    where
        F: FnOnce(&mut T) -> R,
    {
        let mut inner = self.inner.write();

        let record = inner
            .records
            .iter_mut()
            .find(|record| record.id() == id)
            .ok_or_else(|| StoreError::not_found(T::ENTITY, id))?;

        let result = f(record);
        record.set_id(id);

        debug!(entity = T::ENTITY, id, "Record modified");
        Ok(result)
    }

    /// Replaces the stored record carrying `record.id()` wholesale.
    ///
    /// No upsert: an unknown id is `NotFound` and nothing is stored.
    pub fn update(&self, record: T) -> StoreResult<T> {
        self.modify(record.id(), |stored| {
            *stored = record;
            stored.clone()
        })
    }

    /// Applies the non-zero fields of `partial` onto the record with
    /// `partial.id()` and returns the fully merged record.
    ///
    /// ## Limitation
    /// Zero-valued fields count as absent, so a merge cannot clear a field.
    /// See [`bazaar_core::record`].
    pub fn merge(&self, partial: T) -> StoreResult<T> {
        self.modify(partial.id(), |stored| {
            stored.merge_from(&partial);
            stored.clone()
        })
    }

    /// Removes the record with `id` and returns it.
    ///
    /// The remaining records keep their order. The freed id is never reused.
    pub fn delete(&self, id: u64) -> StoreResult<T> {
        let mut inner = self.inner.write();

        let index = inner
            .records
            .iter()
            .position(|record| record.id() == id)
            .ok_or_else(|| StoreError::not_found(T::ENTITY, id))?;
        let removed = inner.records.remove(index);

        debug!(entity = T::ENTITY, id, remaining = inner.records.len(), "Record deleted");
        Ok(removed)
    }

    // =========================================================================
    // Reads (shared lock)
    // =========================================================================

    /// Returns a copy of the record with `id`.
    pub fn get(&self, id: u64) -> StoreResult<T> {
        self.find(|record| record.id() == id)
            .ok_or_else(|| StoreError::not_found(T::ENTITY, id))
    }

    /// True if a record with `id` is stored.
    ///
    /// The answer may be stale by the time the caller acts on it; use
    /// [`Repository::modify`] to check and mutate atomically.
    pub fn exists(&self, id: u64) -> bool {
        self.inner.read().records.iter().any(|record| record.id() == id)
    }

    /// The id the next [`Repository::create`] will assign, or `None` once
    /// the id space is used up.
    pub fn next_id(&self) -> Option<u64> {
        self.inner.read().next_id
    }

    /// Number of stored records.
    pub fn len(&self) -> usize {
        self.inner.read().records.len()
    }

    /// True if no records are stored.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Copies of every record in insertion order.
    pub fn snapshot(&self) -> Vec<T> {
        self.inner.read().records.clone()
    }

    /// Lists records, optionally sorted by the entity's default key.
    ///
    /// ## Limit
    /// `limit <= 0` or `limit >= len` returns every record; otherwise the
    /// first `limit` records *after* sorting are returned.
    pub fn list(&self, limit: i64, sort: SortOrder) -> Vec<T> {
        self.query(limit, sort, |_| true)
    }

    /// Like [`Repository::list`], restricted to records matching `predicate`.
    ///
    /// Filter, then sort, then limit. Only the filtering runs under the lock.
    pub fn query<P>(&self, limit: i64, sort: SortOrder, predicate: P) -> Vec<T>
    where
        P: Fn(&T) -> bool,
    {
        let mut matches: Vec<T> = {
            let inner = self.inner.read();
            inner
                .records
                .iter()
                .filter(|record| predicate(record))
                .cloned()
                .collect()
        };

        sort.apply(&mut matches);
        matches.truncate(effective_limit(limit, matches.len()));

        debug!(entity = T::ENTITY, %sort, limit, count = matches.len(), "Records listed");
        matches
    }

    /// Copies of every record matching `predicate`, in insertion order.
    pub fn filter<P>(&self, predicate: P) -> Vec<T>
    where
        P: Fn(&T) -> bool,
    {
        self.query(0, SortOrder::Unspecified, predicate)
    }

    /// Copy of the first record matching `predicate`.
    pub fn find<P>(&self, predicate: P) -> Option<T>
    where
        P: Fn(&T) -> bool,
    {
        self.inner
            .read()
            .records
            .iter()
            .find(|record| predicate(record))
            .cloned()
    }

    /// Runs `f` over the stored records while holding the read lock.
    ///
    /// For aggregates that should not pay for copying every record. `f` must
    /// not call back into this repository.
    pub fn read<R, F>(&self, f: F) -> R
    where
        F: FnOnce(&[T]) -> R,
    {
        let inner = self.inner.read();
        f(&inner.records)
    }
}

impl<T: Record> Default for Repository<T> {
    fn default() -> Self {
        Self::new()
    }
}

/// Number of records to return for a requested `limit` over `available`.
fn effective_limit(limit: i64, available: usize) -> usize {
    if limit <= 0 {
        return available;
    }
    usize::try_from(limit).map_or(available, |limit| limit.min(available))
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use bazaar_core::Product;

    fn product(name: &str, price: f64) -> Product {
        Product {
            name: name.to_string(),
            category: "misc".to_string(),
            price,
            ..Default::default()
        }
    }

    fn anchored() -> Repository<Product> {
        Repository::with_records(vec![Product {
            id: 0,
            name: "anchor".to_string(),
            price: 49.99,
            ..Default::default()
        }])
        .unwrap()
    }

    #[test]
    fn test_empty_repository_starts_at_zero() {
        let repo = Repository::<Product>::new();
        assert!(repo.is_empty());
        assert_eq!(repo.next_id(), Some(0));
        assert_eq!(repo.create(product("a", 1.0)).unwrap().id, 0);
        assert_eq!(repo.create(product("b", 1.0)).unwrap().id, 1);
    }

    #[test]
    fn test_seeded_ids_continue_after_max() {
        let repo = Repository::with_records(vec![
            Product {
                id: 4,
                ..Default::default()
            },
            Product {
                id: 2,
                ..Default::default()
            },
        ])
        .unwrap();
        assert_eq!(repo.next_id(), Some(5));
    }

    #[test]
    fn test_seed_holding_max_id_exhausts_instead_of_reissuing() {
        let repo = Repository::with_records(vec![Product {
            id: u64::MAX,
            name: "last".to_string(),
            ..Default::default()
        }])
        .unwrap();
        assert_eq!(repo.next_id(), None);

        assert_eq!(
            repo.create(product("x", 1.0)).unwrap_err(),
            StoreError::IdsExhausted { entity: "product" }
        );
        assert_eq!(repo.len(), 1);
        assert_eq!(repo.get(u64::MAX).unwrap().name, "last");
    }

    #[test]
    fn test_create_of_max_id_then_exhausts() {
        let repo = Repository::with_records(vec![Product {
            id: u64::MAX - 1,
            ..Default::default()
        }])
        .unwrap();

        assert_eq!(repo.create(product("x", 1.0)).unwrap().id, u64::MAX);
        assert!(repo.create(product("y", 1.0)).is_err());
        assert_eq!(repo.len(), 2);
    }

    #[test]
    fn test_seed_with_duplicate_ids_is_rejected() {
        let result = Repository::with_records(vec![
            Product {
                id: 3,
                ..Default::default()
            },
            Product {
                id: 1,
                ..Default::default()
            },
            Product {
                id: 3,
                ..Default::default()
            },
        ]);
        assert_eq!(
            result.unwrap_err(),
            StoreError::DuplicateId {
                entity: "product",
                id: 3
            }
        );
    }

    #[test]
    fn test_concurrent_creates_get_unique_sequential_ids() {
        const WRITERS: usize = 8;
        const PER_WRITER: usize = 50;
        let repo = anchored();

        std::thread::scope(|scope| {
            for _ in 0..WRITERS {
                scope.spawn(|| {
                    for _ in 0..PER_WRITER {
                        repo.create(product("x", 1.0)).unwrap();
                    }
                });
            }
        });

        let ids: HashSet<u64> = repo.snapshot().iter().map(|p| p.id).collect();
        let expected: HashSet<u64> = (0..=(WRITERS * PER_WRITER) as u64).collect();
        assert_eq!(repo.len(), WRITERS * PER_WRITER + 1);
        assert_eq!(ids, expected);
    }

    #[test]
    fn test_create_overwrites_caller_id() {
        let repo = anchored();
        let created = repo
            .create(Product {
                id: 42,
                ..product("x", 1.0)
            })
            .unwrap();
        assert_eq!(created.id, 1);
        assert!(!repo.exists(42));
    }

    #[test]
    fn test_create_then_get_round_trips_payload() {
        let repo = anchored();
        let input = product("Keyboard", 120.0);

        let created = repo.create(input.clone()).unwrap();
        let fetched = repo.get(created.id).unwrap();

        assert_eq!(fetched, Product { id: created.id, ..input });
    }

    #[test]
    fn test_returned_records_are_snapshots() {
        let repo = anchored();

        let mut fetched = repo.get(0).unwrap();
        fetched.name = "mutated".to_string();
        let mut listed = repo.list(0, SortOrder::Unspecified);
        listed[0].price = 0.0;

        let stored = repo.get(0).unwrap();
        assert_eq!(stored.name, "anchor");
        assert_eq!(stored.price, 49.99);
    }

    #[test]
    fn test_get_unknown_id_is_not_found() {
        let repo = anchored();
        assert_eq!(
            repo.get(9).unwrap_err(),
            StoreError::not_found("product", 9)
        );
    }

    #[test]
    fn test_update_replaces_wholesale() {
        let repo = anchored();

        let updated = repo
            .update(Product {
                id: 0,
                name: "replaced".to_string(),
                ..Default::default()
            })
            .unwrap();

        assert_eq!(updated.name, "replaced");
        assert_eq!(repo.get(0).unwrap().price, 0.0);
    }

    #[test]
    fn test_update_unknown_id_does_not_upsert() {
        let repo = anchored();
        let result = repo.update(Product {
            id: 7,
            ..product("ghost", 1.0)
        });
        assert!(result.is_err());
        assert_eq!(repo.len(), 1);
    }

    #[test]
    fn test_merge_with_only_zero_fields_leaves_record_unchanged() {
        let repo = anchored();
        let before = repo.get(0).unwrap();

        let merged = repo
            .merge(Product {
                id: 0,
                ..Default::default()
            })
            .unwrap();

        assert_eq!(merged, before);
        assert_eq!(repo.get(0).unwrap(), before);
    }

    #[test]
    fn test_merge_updates_only_non_zero_field() {
        let repo = anchored();

        let merged = repo
            .merge(Product {
                id: 0,
                price: 10.0,
                ..Default::default()
            })
            .unwrap();

        assert_eq!(merged.price, 10.0);
        assert_eq!(merged.name, "anchor");
        assert_eq!(repo.get(0).unwrap(), merged);
    }

    #[test]
    fn test_merge_unknown_id_is_not_found() {
        let repo = anchored();
        assert!(matches!(
            repo.merge(Product {
                id: 3,
                ..Default::default()
            }),
            Err(StoreError::NotFound { id: 3, .. })
        ));
    }

    #[test]
    fn test_modify_keeps_identity() {
        let repo = anchored();

        let name = repo
            .modify(0, |stored| {
                stored.id = 100;
                stored.name = "renamed".to_string();
                stored.name.clone()
            })
            .unwrap();

        assert_eq!(name, "renamed");
        assert_eq!(repo.get(0).unwrap().name, "renamed");
        assert!(!repo.exists(100));
    }

    #[test]
    fn test_modify_races_with_delete_without_resurrecting() {
        let repo = anchored();
        for i in 0..100 {
            repo.create(product("x", f64::from(i))).unwrap();
        }

        std::thread::scope(|scope| {
            scope.spawn(|| {
                for id in 1..=100 {
                    let _ = repo.delete(id);
                }
            });
            scope.spawn(|| {
                for id in 1..=100 {
                    let _ = repo.modify(id, |stored| stored.price += 1.0);
                }
            });
        });

        assert_eq!(repo.len(), 1);
        assert!(repo.exists(0));
    }

    #[test]
    fn test_delete_removes_exactly_one() {
        let repo = anchored();
        repo.create(product("a", 1.0)).unwrap();
        repo.create(product("b", 2.0)).unwrap();
        let before = repo.get(1).unwrap();

        let removed = repo.delete(1).unwrap();

        assert_eq!(removed, before);
        assert_eq!(repo.len(), 2);
        assert!(!repo.exists(1));
        let names: Vec<String> = repo.snapshot().into_iter().map(|p| p.name).collect();
        assert_eq!(names, vec!["anchor", "b"]);
    }

    #[test]
    fn test_delete_unknown_id_leaves_collection_alone() {
        let repo = anchored();
        assert!(repo.delete(5).is_err());
        assert_eq!(repo.len(), 1);
    }

    #[test]
    fn test_ids_are_not_reused_after_deleting_tail_or_anchor() {
        let repo = anchored();
        let tail = repo.create(product("tail", 1.0)).unwrap();
        repo.delete(tail.id).unwrap();
        repo.delete(0).unwrap();

        assert!(repo.is_empty());
        assert_eq!(repo.create(product("next", 1.0)).unwrap().id, 2);
    }

    #[test]
    fn test_list_limit_and_descending_sort() {
        let repo = anchored();
        repo.create(product("cheap", 5.0)).unwrap();
        repo.create(product("mid", 20.0)).unwrap();
        repo.create(product("top", 99.0)).unwrap();

        let listed = repo.list(2, SortOrder::Descending);

        let prices: Vec<f64> = listed.iter().map(|p| p.price).collect();
        assert_eq!(prices, vec![99.0, 49.99]);
    }

    #[test]
    fn test_list_without_limit_or_sort_keeps_insertion_order() {
        let repo = anchored();
        repo.create(product("cheap", 5.0)).unwrap();
        repo.create(product("top", 99.0)).unwrap();

        let ids: Vec<u64> = repo
            .list(0, SortOrder::Unspecified)
            .iter()
            .map(|p| p.id)
            .collect();

        assert_eq!(ids, vec![0, 1, 2]);
    }

    #[test]
    fn test_list_sort_does_not_reorder_store() {
        let repo = anchored();
        repo.create(product("cheap", 5.0)).unwrap();

        let sorted = repo.list(0, SortOrder::Ascending);
        assert_eq!(sorted[0].id, 1);

        assert_eq!(repo.snapshot()[0].id, 0);
    }

    #[test]
    fn test_list_limit_edges() {
        let repo = anchored();
        repo.create(product("a", 1.0)).unwrap();

        assert_eq!(repo.list(-3, SortOrder::Unspecified).len(), 2);
        assert_eq!(repo.list(1, SortOrder::Unspecified).len(), 1);
        assert_eq!(repo.list(50, SortOrder::Unspecified).len(), 2);
        assert!(Repository::<Product>::new().list(3, SortOrder::Ascending).is_empty());
    }

    #[test]
    fn test_query_filters_before_limiting() {
        let repo = anchored();
        for price in [3.0, 1.0, 2.0, 100.0] {
            repo.create(product("x", price)).unwrap();
        }

        let under_ten = repo.query(2, SortOrder::Ascending, |p| p.price < 10.0);

        let prices: Vec<f64> = under_ten.iter().map(|p| p.price).collect();
        assert_eq!(prices, vec![1.0, 2.0]);
    }

    #[test]
    fn test_concrete_scenario() {
        let repo = anchored();

        let created = repo
            .create(Product {
                name: "X".to_string(),
                price: 10.0,
                ..Default::default()
            })
            .unwrap();
        assert_eq!(created.id, 1);
        assert_eq!(created.name, "X");
        assert_eq!(created.price, 10.0);

        let listed = repo.list(0, SortOrder::Ascending);
        assert_eq!(listed[0].id, 1);
        assert_eq!(listed[0].price, 10.0);
        assert_eq!(listed[1].id, 0);
        assert_eq!(listed[1].price, 49.99);

        let removed = repo.delete(0).unwrap();
        assert_eq!(removed.id, 0);
        assert_eq!(removed.price, 49.99);
        assert!(matches!(repo.get(0), Err(StoreError::NotFound { .. })));
    }

    #[test]
    fn test_readers_never_see_partial_writes() {
        let repo = anchored();

        std::thread::scope(|scope| {
            scope.spawn(|| {
                for i in 0..200 {
                    let _ = repo.update(Product {
                        id: 0,
                        name: format!("v{i}"),
                        description: format!("v{i}"),
                        ..Default::default()
                    });
                }
            });
            scope.spawn(|| {
                for _ in 0..200 {
                    let seen = repo.get(0).unwrap();
                    if seen.name != "anchor" {
                        assert_eq!(seen.name, seen.description);
                    }
                }
            });
        });
    }

    #[test]
    fn test_effective_limit() {
        assert_eq!(effective_limit(0, 4), 4);
        assert_eq!(effective_limit(-1, 4), 4);
        assert_eq!(effective_limit(2, 4), 2);
        assert_eq!(effective_limit(9, 4), 4);
    }
}
