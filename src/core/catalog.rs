//! Catalog business logic - The read-only product and category table.
//!
//! A [`Catalog`] is assembled once at startup, either from the built-in seed or
//! from `config.toml`, validated, and then shared as `Arc<Catalog>` with every
//! view model that needs it. Nothing mutates it afterwards.

use crate::{
    core::filter::ALL_CATEGORIES,
    entities::{Category, Product},
    errors::{Error, Result},
};
use std::{collections::HashSet, sync::Arc};
use tracing::debug;

/// Immutable product/category table.
#[derive(Debug, Clone)]
pub struct Catalog {
    categories: Vec<Category>,
    products: Vec<Arc<Product>>,
}

impl Catalog {
    /// Builds a catalog, performing input validation.
    ///
    /// Product and category order is preserved as given; it is the order the
    /// store screen lists them in.
    ///
    /// # Errors
    /// Returns an error if:
    /// - Two categories share a name
    /// - Two products share an id
    /// - A product name is empty or whitespace-only
    /// - A price is negative or not finite (NaN, infinity)
    pub fn new(categories: Vec<Category>, products: Vec<Product>) -> Result<Self> {
        let mut names = HashSet::new();
        for category in &categories {
            if !names.insert(category.name.as_str()) {
                return Err(Error::DuplicateCategory {
                    name: category.name.clone(),
                });
            }
        }

        let mut ids = HashSet::new();
        for product in &products {
            if !ids.insert(product.id) {
                return Err(Error::DuplicateProduct { id: product.id });
            }

            if product.name.trim().is_empty() {
                return Err(Error::EmptyProductName { id: product.id });
            }

            if product.price < 0.0 || !product.price.is_finite() {
                return Err(Error::InvalidPrice {
                    id: product.id,
                    price: product.price,
                });
            }
        }

        debug!(
            categories = categories.len(),
            products = products.len(),
            "Catalog assembled"
        );

        Ok(Self {
            categories,
            products: products.into_iter().map(Arc::new).collect(),
        })
    }

    /// The catalog the shop ships with when no seed file is configured.
    #[must_use]
    pub fn builtin() -> Self {
        let categories = vec![
            Category::new(ALL_CATEGORIES, "icons/pets"),
            Category::new("Food", "icons/fastfood"),
            Category::new("Toys", "icons/star"),
            Category::new("Accessories", "icons/shopping_cart"),
        ];

        let products = vec![
            Product::new(1, "Premium Dog Kibble", 25.99, "Food", "drawable/kibble"),
            Product::new(2, "Rubber Ball", 5.49, "Toys", "drawable/ball"),
            Product::new(3, "Leather Collar", 12.99, "Accessories", "drawable/collar"),
            Product::new(4, "Padded Bed", 35.00, "Accessories", "drawable/bed"),
            Product::new(5, "Wet Cat Food", 1.99, "Food", "drawable/wet_food"),
            Product::new(6, "Scratching Tower", 45.50, "Toys", "drawable/tower"),
        ];

        Self {
            categories,
            products: products.into_iter().map(Arc::new).collect(),
        }
    }

    /// All categories, in display order.
    #[must_use]
    pub fn categories(&self) -> &[Category] {
        &self.categories
    }

    /// All products, in display order.
    #[must_use]
    pub fn products(&self) -> &[Arc<Product>] {
        &self.products
    }

    /// Looks up a product by id, returning None if the catalog has no such product.
    #[must_use]
    pub fn product_by_id(&self, product_id: i64) -> Option<Arc<Product>> {
        self.products
            .iter()
            .find(|product| product.id == product_id)
            .map(Arc::clone)
    }

    /// Looks up a category by its exact name.
    #[must_use]
    pub fn category_by_name(&self, name: &str) -> Option<&Category> {
        self.categories.iter().find(|category| category.name == name)
    }
}
