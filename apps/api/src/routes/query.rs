//! Query-string parameters shared by the listing routes.

use chrono::NaiveDate;
use serde::Deserialize;

use bazaar_core::{DateRange, SortOrder};

/// `?limit=&sort=`
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ListParams {
    /// 0 or absent returns everything.
    #[serde(default)]
    pub limit: i64,

    /// `asc` (default) or `desc`; anything else keeps insertion order.
    pub sort: Option<String>,
}

impl ListParams {
    pub fn sort_order(&self) -> SortOrder {
        SortOrder::from_param(self.sort.as_deref())
    }
}

/// `?limit=&sort=&username=` for users.
///
/// A `username` switches the route from listing to lookup, and `limit` and
/// `sort` are then ignored.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct UserListParams {
    #[serde(default)]
    pub limit: i64,

    pub sort: Option<String>,

    pub username: Option<String>,
}

impl UserListParams {
    pub fn sort_order(&self) -> SortOrder {
        SortOrder::from_param(self.sort.as_deref())
    }
}

/// `?limit=&sort=&startdate=&enddate=` for carts.
///
/// Dates are `YYYY-MM-DD` calendar days in UTC, both inclusive.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct CartListParams {
    #[serde(default)]
    pub limit: i64,

    pub sort: Option<String>,

    pub startdate: Option<NaiveDate>,

    pub enddate: Option<NaiveDate>,
}

impl CartListParams {
    pub fn sort_order(&self) -> SortOrder {
        SortOrder::from_param(self.sort.as_deref())
    }

    pub fn date_range(&self) -> DateRange {
        DateRange::from_days(self.startdate, self.enddate)
    }
}
