//! Product entity - Represents a catalog item with a fixed unit price.
//!
//! Products are immutable once the catalog is built. View models and cart
//! entries hold them behind an `Arc` so every screen sees the same record.

use super::AssetRef;
use serde::{Deserialize, Serialize};

/// Catalog product
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Product {
    /// Unique identifier for the product
    pub id: i64,
    /// Name of the product (e.g., "Rubber Ball")
    pub name: String,
    /// Price per unit in dollars
    pub price: f64,
    /// Name of the category this product belongs to
    pub category: String,
    /// Product picture
    #[serde(default)]
    pub image: AssetRef,
}

impl Product {
    /// Creates a product. Validation happens when the catalog is assembled.
    #[must_use]
    pub fn new(
        id: i64,
        name: impl Into<String>,
        price: f64,
        category: impl Into<String>,
        image: impl Into<AssetRef>,
    ) -> Self {
        Self {
            id,
            name: name.into(),
            price,
            category: category.into(),
            image: image.into(),
        }
    }
}
