//! # Query Values
//!
//! Value types describing *how* a listing is shaped: sort direction and
//! date windows. They carry no data access of their own.

use std::fmt;

use chrono::{DateTime, NaiveDate, TimeZone, Utc};
use serde::{Deserialize, Serialize};

use crate::record::Record;

// =============================================================================
// Sort Order
// =============================================================================

/// Direction of a sorted listing over a record's default key.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SortOrder {
    /// Keep insertion order.
    #[default]
    Unspecified,

    /// Smallest key first.
    Ascending,

    /// Largest key first.
    Descending,
}

impl SortOrder {
    /// Interprets a `sort` query parameter.
    ///
    /// ## Mapping
    /// ```text
    /// (absent) ──► Ascending
    /// "asc"    ──► Ascending
    /// "desc"   ──► Descending
    /// other    ──► Unspecified (insertion order)
    /// ```
    pub fn from_param(param: Option<&str>) -> Self {
        match param.map(str::trim) {
            None => SortOrder::Ascending,
            Some(value) if value.eq_ignore_ascii_case("asc") => SortOrder::Ascending,
            Some(value) if value.eq_ignore_ascii_case("desc") => SortOrder::Descending,
            Some(_) => SortOrder::Unspecified,
        }
    }

    /// Sorts `records` in place by their default key.
    ///
    /// The sort is stable: records with equal keys keep their relative order.
    pub fn apply<T: Record>(self, records: &mut [T]) {
        match self {
            SortOrder::Unspecified => {}
            SortOrder::Ascending => records.sort_by(|a, b| a.cmp_sort_key(b)),
            SortOrder::Descending => records.sort_by(|a, b| b.cmp_sort_key(a)),
        }
    }
}

impl fmt::Display for SortOrder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SortOrder::Unspecified => write!(f, "unspecified"),
            SortOrder::Ascending => write!(f, "asc"),
            SortOrder::Descending => write!(f, "desc"),
        }
    }
}

// =============================================================================
// Date Range
// =============================================================================

/// Half-open time window `[start, end)`; a missing bound is unbounded.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct DateRange {
    pub start: Option<DateTime<Utc>>,
    pub end: Option<DateTime<Utc>>,
}

impl DateRange {
    /// Builds a range covering whole calendar days (UTC), both inclusive.
    ///
    /// ## Example
    /// ```rust
    /// use bazaar_core::DateRange;
    /// use chrono::{NaiveDate, TimeZone, Utc};
    ///
    /// let day = NaiveDate::from_ymd_opt(2024, 3, 1);
    /// let range = DateRange::from_days(day, day);
    ///
    /// assert!(range.contains(&Utc.with_ymd_and_hms(2024, 3, 1, 23, 59, 59).unwrap()));
    /// assert!(!range.contains(&Utc.with_ymd_and_hms(2024, 3, 2, 0, 0, 0).unwrap()));
    /// ```
    pub fn from_days(first: Option<NaiveDate>, last: Option<NaiveDate>) -> Self {
        DateRange {
            start: first.and_then(start_of_day),
            end: last.and_then(|day| day.succ_opt()).and_then(start_of_day),
        }
    }

    /// True if neither bound is set.
    pub fn is_unbounded(&self) -> bool {
        self.start.is_none() && self.end.is_none()
    }

    /// True if `instant` falls inside the window.
    pub fn contains(&self, instant: &DateTime<Utc>) -> bool {
        let after_start = self.start.map_or(true, |start| *instant >= start);
        let before_end = self.end.map_or(true, |end| *instant < end);
        after_start && before_end
    }
}

fn start_of_day(day: NaiveDate) -> Option<DateTime<Utc>> {
    day.and_hms_opt(0, 0, 0)
        .map(|midnight| Utc.from_utc_datetime(&midnight))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Product;

    fn priced(id: u64, price: f64) -> Product {
        Product {
            id,
            price,
            ..Default::default()
        }
    }

    #[test]
    fn test_sort_param_parsing() {
        assert_eq!(SortOrder::from_param(None), SortOrder::Ascending);
        assert_eq!(SortOrder::from_param(Some("asc")), SortOrder::Ascending);
        assert_eq!(SortOrder::from_param(Some("DESC")), SortOrder::Descending);
        assert_eq!(SortOrder::from_param(Some("price")), SortOrder::Unspecified);
    }

    #[test]
    fn test_sort_apply_is_stable() {
        let mut records = vec![priced(0, 5.0), priced(1, 1.0), priced(2, 5.0)];

        SortOrder::Ascending.apply(&mut records);
        let ids: Vec<u64> = records.iter().map(|p| p.id).collect();
        assert_eq!(ids, vec![1, 0, 2]);

        SortOrder::Descending.apply(&mut records);
        let ids: Vec<u64> = records.iter().map(|p| p.id).collect();
        assert_eq!(ids, vec![0, 2, 1]);
    }

    #[test]
    fn test_unspecified_keeps_order() {
        let mut records = vec![priced(0, 5.0), priced(1, 1.0)];
        SortOrder::Unspecified.apply(&mut records);
        assert_eq!(records[0].id, 0);
    }

    #[test]
    fn test_open_ended_ranges() {
        let instant = Utc.with_ymd_and_hms(2024, 6, 15, 12, 0, 0).unwrap();

        assert!(DateRange::default().is_unbounded());
        assert!(DateRange::default().contains(&instant));

        let from_june = DateRange::from_days(NaiveDate::from_ymd_opt(2024, 6, 1), None);
        assert!(from_june.contains(&instant));

        let until_may = DateRange::from_days(None, NaiveDate::from_ymd_opt(2024, 5, 31));
        assert!(!until_may.contains(&instant));
    }
}
