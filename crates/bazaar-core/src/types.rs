//! # Domain Types
//!
//! The three entity kinds served by Bazaar and their nested values.
//!
//! ## Type Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Domain Types                                    │
//! │                                                                         │
//! │  ┌─────────────────┐   ┌─────────────────┐   ┌─────────────────┐       │
//! │  │    Product      │   │      Cart       │   │      User       │       │
//! │  │  ─────────────  │   │  ─────────────  │   │  ─────────────  │       │
//! │  │  id (u64)       │   │  id (u64)       │   │  id (u64)       │       │
//! │  │  name           │   │  userId         │   │  username       │       │
//! │  │  description    │   │  date           │   │  password       │       │
//! │  │  category       │   │  products ──┐   │   │  name, phone    │       │
//! │  │  image          │   └─────────────┼───┘   │  address ──┐    │       │
//! │  │  price          │                 ▼       └────────────┼────┘       │
//! │  └─────────────────┘   ┌─────────────────┐   ┌────────────▼────┐       │
//! │                        │    CartItem     │   │    Address      │       │
//! │                        │  product_id     │   │  city, street   │       │
//! │                        │  quantity       │   │  number         │       │
//! │                        └─────────────────┘   │  zip_code       │       │
//! │                                              └─────────────────┘       │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Wire Shape
//! Field names are the JSON names. Every field is optional when decoding
//! (`#[serde(default)]`) and falls back to its zero value, which is what the
//! merge rules in [`crate::record`] key off.

use std::cmp::Ordering;
use std::collections::BTreeMap;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::record::{merge_field, Record};

// =============================================================================
// Product
// =============================================================================

/// A product in the catalogue.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Product {
    /// Repository-assigned identifier.
    pub id: u64,

    /// Display name.
    pub name: String,

    /// Free-form description.
    pub description: String,

    /// Category name, used for grouping and counts.
    pub category: String,

    /// Image URL.
    pub image: String,

    /// Unit price.
    pub price: f64,
}

impl Record for Product {
    const ENTITY: &'static str = "product";

    fn id(&self) -> u64 {
        self.id
    }

    fn set_id(&mut self, id: u64) {
        self.id = id;
    }

    fn merge_from(&mut self, partial: &Self) {
        merge_field(&mut self.name, &partial.name);
        merge_field(&mut self.description, &partial.description);
        merge_field(&mut self.category, &partial.category);
        merge_field(&mut self.image, &partial.image);
        merge_field(&mut self.price, &partial.price);
    }

    /// Products sort by price.
    fn cmp_sort_key(&self, other: &Self) -> Ordering {
        self.price.total_cmp(&other.price)
    }
}

/// Category name to number of products in that category.
pub type Categories = BTreeMap<String, u64>;

// =============================================================================
// Cart
// =============================================================================

/// One line of a cart.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct CartItem {
    /// Product being bought. Not checked against the product catalogue.
    pub product_id: u64,

    /// Number of units.
    pub quantity: u64,
}

/// A shopping cart owned by a user.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Cart {
    /// Repository-assigned identifier.
    pub id: u64,

    /// Owning user. Not checked against the user collection.
    #[serde(rename = "userId")]
    pub user_id: u64,

    /// When the cart was created or last changed.
    pub date: DateTime<Utc>,

    /// Line items in the order they were added.
    pub products: Vec<CartItem>,
}

impl Record for Cart {
    const ENTITY: &'static str = "cart";

    fn id(&self) -> u64 {
        self.id
    }

    fn set_id(&mut self, id: u64) {
        self.id = id;
    }

    /// A non-empty `products` list replaces the stored list wholesale.
    fn merge_from(&mut self, partial: &Self) {
        merge_field(&mut self.user_id, &partial.user_id);
        merge_field(&mut self.date, &partial.date);
        merge_field(&mut self.products, &partial.products);
    }

    /// Carts sort by date.
    fn cmp_sort_key(&self, other: &Self) -> Ordering {
        self.date.cmp(&other.date)
    }
}

// =============================================================================
// User
// =============================================================================

/// Postal address nested in a [`User`].
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Address {
    pub city: String,
    pub street: String,
    pub number: u64,
    pub zip_code: String,
}

impl Address {
    /// Field-by-field merge, same zero-value rule as the records.
    pub fn merge_from(&mut self, partial: &Self) {
        merge_field(&mut self.city, &partial.city);
        merge_field(&mut self.street, &partial.street);
        merge_field(&mut self.number, &partial.number);
        merge_field(&mut self.zip_code, &partial.zip_code);
    }
}

/// A registered user.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct User {
    /// Repository-assigned identifier.
    pub id: u64,

    /// Login name.
    pub username: String,

    /// Stored as given. Hashing is out of scope for this service.
    pub password: String,

    /// Full name.
    pub name: String,

    /// Contact phone number.
    pub phone: String,

    /// Postal address.
    pub address: Address,
}

impl Record for User {
    const ENTITY: &'static str = "user";

    fn id(&self) -> u64 {
        self.id
    }

    fn set_id(&mut self, id: u64) {
        self.id = id;
    }

    fn merge_from(&mut self, partial: &Self) {
        merge_field(&mut self.username, &partial.username);
        merge_field(&mut self.password, &partial.password);
        merge_field(&mut self.name, &partial.name);
        merge_field(&mut self.phone, &partial.phone);
        self.address.merge_from(&partial.address);
    }

    /// Users sort by id.
    fn cmp_sort_key(&self, other: &Self) -> Ordering {
        self.id.cmp(&other.id)
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
