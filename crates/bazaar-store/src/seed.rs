//! # Seed Data
//!
//! Anchor records installed by [`crate::Store::seeded`]. Each collection
//! starts with exactly one record at id 0.

use chrono::Utc;

use bazaar_core::{Address, Cart, CartItem, Product, User};

/// The catalogue's only seeded product.
pub fn products() -> Vec<Product> {
    vec![Product {
        id: 0,
        name: "The Rust Programming Language".to_string(),
        description: "The official book on the Rust programming language".to_string(),
        category: "books".to_string(),
        image: String::new(),
        price: 49.99,
    }]
}

/// One cart for user 0 holding two copies of product 0, dated now.
pub fn carts() -> Vec<Cart> {
    vec![Cart {
        id: 0,
        user_id: 0,
        date: Utc::now(),
        products: vec![CartItem {
            product_id: 0,
            quantity: 2,
        }],
    }]
}

/// The test account.
pub fn users() -> Vec<User> {
    vec![User {
        id: 0,
        username: "testuser".to_string(),
        password: "12345".to_string(),
        name: "Test User".to_string(),
        phone: "000-000-000".to_string(),
        address: Address {
            city: "Paris".to_string(),
            street: "Liberte".to_string(),
            number: 0,
            zip_code: "123-654".to_string(),
        },
    }]
}
