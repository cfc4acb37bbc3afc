//! # Product Repository
//!
//! Category queries over the product catalogue.
//!
//! ## Category Lookups
//! ```text
//! GET /products/categories          ──► categories()   {"books": 2, "toys": 1}
//! GET /products/categories/books    ──► by_category()  [Product, Product]
//! GET /products/categories/garden   ──► CategoryNotFound("garden")
//! ```

use tracing::debug;

use bazaar_core::{Categories, Product};

use super::Repository;
use crate::error::{StoreError, StoreResult};

/// Repository of [`Product`] records.
pub type ProductRepository = Repository<Product>;

impl Repository<Product> {
    /// Products whose category equals `category`, in insertion order.
    ///
    /// The match is exact and case-sensitive. An empty result is reported as
    /// [`StoreError::CategoryNotFound`].
    pub fn by_category(&self, category: &str) -> StoreResult<Vec<Product>> {
        let products = self.filter(|product| product.category == category);

        if products.is_empty() {
            debug!(category, "Category has no products");
            return Err(StoreError::CategoryNotFound(category.to_string()));
        }

        Ok(products)
    }

    /// Number of products per category, keyed in category order.
    pub fn categories(&self) -> Categories {
        self.read(|products| {
            let mut counts = Categories::new();
            for product in products {
                *counts.entry(product.category.clone()).or_default() += 1;
            }
            counts
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn catalogue() -> ProductRepository {
        let repo = ProductRepository::new();
        for (name, category) in [
            ("Rust Book", "books"),
            ("Kite", "toys"),
            ("Go Book", "books"),
        ] {
            repo.create(Product {
                name: name.to_string(),
                category: category.to_string(),
                ..Default::default()
            })
            .unwrap();
        }
        repo
    }

    #[test]
    fn test_by_category_keeps_insertion_order() {
        let books = catalogue().by_category("books").unwrap();
        let names: Vec<&str> = books.iter().map(|p| p.name.as_str()).collect();
        assert_eq!(names, vec!["Rust Book", "Go Book"]);
    }

    #[test]
    fn test_by_category_without_match_is_not_found() {
        assert_eq!(
            catalogue().by_category("Books").unwrap_err(),
            StoreError::CategoryNotFound("Books".to_string())
        );
    }

    #[test]
    fn test_categories_counts_each_category() {
        let counts = catalogue().categories();
        assert_eq!(counts.len(), 2);
        assert_eq!(counts["books"], 2);
        assert_eq!(counts["toys"], 1);
        assert_eq!(counts.keys().next().map(String::as_str), Some("books"));
    }

    #[test]
    fn test_categories_of_empty_catalogue() {
        assert!(ProductRepository::new().categories().is_empty());
    }
}
