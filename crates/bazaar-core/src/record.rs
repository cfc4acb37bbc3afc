//! # Record Trait
//!
//! The contract every stored entity kind fulfils so a single generic
//! repository can own it.
//!
//! ## What a Record Provides
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Record Contract                                 │
//! │                                                                         │
//! │  ENTITY          "product" / "cart" / "user"   (error messages, logs)   │
//! │  id / set_id     identity assigned by the repository                   │
//! │  merge_from      PATCH rule: copy every non-zero field of a partial    │
//! │  cmp_sort_key    default ordering for sorted listings                  │
//! │  Clone           deep copy: every field is an owned value              │
//! │                                                                         │
//! │  ┌──────────┐   ┌──────────┐   ┌──────────┐                            │
//! │  │ Product  │   │   Cart   │   │   User   │                            │
//! │  │ by price │   │ by date  │   │  by id   │                            │
//! │  └──────────┘   └──────────┘   └──────────┘                            │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Zero Value Means "Absent"
//! `merge_from` treats a field equal to its type's `Default` (empty string,
//! `0`, `0.0`, the epoch timestamp, an empty list) as omitted. A merge can
//! therefore never reset a field back to its zero value; use a full replace
//! for that.

use std::cmp::Ordering;

/// A storable entity with a repository-assigned identity.
///
/// `Clone` must produce a value sharing no mutable state with its source.
/// All record types in this crate hold only owned data, so the derived
/// `Clone` is a deep copy.
pub trait Record: Clone + Send + Sync + 'static {
    /// Entity name used in errors and log fields.
    const ENTITY: &'static str;

    /// Returns the record's identity.
    fn id(&self) -> u64;

    /// Overwrites the record's identity.
    fn set_id(&mut self, id: u64);

    /// Applies every non-zero field of `partial` onto `self`.
    ///
    /// The identity of `self` is never touched.
    fn merge_from(&mut self, partial: &Self);

    /// Orders two records by the entity's default sort key.
    fn cmp_sort_key(&self, other: &Self) -> Ordering;
}

/// Copies `value` into `target` unless `value` is the type's zero value.
///
/// ## Example
/// ```rust
/// use bazaar_core::record::merge_field;
///
/// let mut name = "old".to_string();
/// merge_field(&mut name, &String::new());
/// assert_eq!(name, "old");
///
/// merge_field(&mut name, &"new".to_string());
/// assert_eq!(name, "new");
/// ```
pub fn merge_field<T>(target: &mut T, value: &T)
where
    T: Clone + Default + PartialEq,
{
    if *value != T::default() {
        target.clone_from(value);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_merge_field_skips_zero_numbers() {
        let mut price = 49.99_f64;
        merge_field(&mut price, &0.0);
        assert_eq!(price, 49.99);

        merge_field(&mut price, &10.0);
        assert_eq!(price, 10.0);
    }

    #[test]
    fn test_merge_field_skips_empty_lists() {
        let mut items = vec![1_u64, 2];
        merge_field(&mut items, &Vec::new());
        assert_eq!(items, vec![1, 2]);

        merge_field(&mut items, &vec![3]);
        assert_eq!(items, vec![3]);
    }
}
