//! Product filtering for the store screen.
//!
//! The filtered list is a pure function of the full product list, the selected
//! category and the search text. Callers recompute it whenever any of the three
//! change; nothing here caches.

use crate::entities::Product;
use std::sync::Arc;

/// Name of the sentinel category that matches every product.
pub const ALL_CATEGORIES: &str = "All";

/// Which category the store screen is showing.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum CategoryFilter {
    /// The "All" sentinel, matches every product
    #[default]
    All,
    /// Only products whose category equals this name (case-sensitive)
    Named(String),
}

impl CategoryFilter {
    /// Parses the category name reported by the UI. The sentinel name maps to
    /// [`CategoryFilter::All`].
    #[must_use]
    pub fn from_name(name: &str) -> Self {
        if name == ALL_CATEGORIES {
            Self::All
        } else {
            Self::Named(name.to_string())
        }
    }

    /// The category name to display for this filter.
    #[must_use]
    pub fn name(&self) -> &str {
        match self {
            Self::All => ALL_CATEGORIES,
            Self::Named(name) => name,
        }
    }

    /// Whether a product belongs to this filter.
    #[must_use]
    pub fn matches(&self, product: &Product) -> bool {
        match self {
            Self::All => true,
            Self::Named(name) => product.category == *name,
        }
    }
}

/// Returns the products matching both the category and the search text, in
/// source order. The search is a case-insensitive substring match on the
/// product name; an empty search matches everything.
#[must_use]
pub fn filter_products(
    products: &[Arc<Product>],
    category: &CategoryFilter,
    search: &str,
) -> Vec<Arc<Product>> {
    let needle = search.to_lowercase();

    products
        .iter()
        .filter(|product| category.matches(product))
        .filter(|product| needle.is_empty() || product.name.to_lowercase().contains(&needle))
        .map(Arc::clone)
        .collect()
}
