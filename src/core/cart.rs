//! Cart ledger - Ordered cart lines with a derived total.
//!
//! Entries keep the order products were first added in. There is at most one
//! entry per product id and every stored entry has a quantity of at least 1.
//! The total is recomputed after every mutation, so it always equals the sum
//! of the current line totals.

use crate::entities::{CartEntry, Product};
use std::sync::Arc;
use tracing::{debug, warn};

/// The shopping cart contents.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Cart {
    entries: Vec<CartEntry>,
    total_price: f64,
}

impl Cart {
    /// An empty cart.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds `quantity` units of a product. An existing line for the same
    /// product id grows; otherwise a new line is appended.
    ///
    /// A zero quantity is ignored. Returns whether the cart changed.
    pub fn add(&mut self, product: &Arc<Product>, quantity: u32) -> bool {
        if quantity == 0 {
            warn!(product_id = product.id, "Ignoring add of zero units");
            return false;
        }

        if let Some(entry) = self.entry_mut(product.id) {
            entry.quantity = entry.quantity.saturating_add(quantity);
        } else {
            self.entries.push(CartEntry {
                product: Arc::clone(product),
                quantity,
            });
        }

        self.recalculate();
        debug!(
            product_id = product.id,
            quantity,
            total = self.total_price,
            "Added to cart"
        );
        true
    }

    /// Removes the line for a product, if present.
    pub fn remove(&mut self, product_id: i64) {
        let before = self.entries.len();
        self.entries.retain(|entry| entry.product.id != product_id);

        if self.entries.len() != before {
            debug!(product_id, "Removed from cart");
        }
        self.recalculate();
    }

    /// Sets the quantity of a line. Anything below 1 removes the line.
    /// Unknown product ids are ignored.
    pub fn change_quantity(&mut self, product_id: i64, new_quantity: i64) {
        if new_quantity < 1 {
            self.remove(product_id);
            return;
        }

        let quantity = u32::try_from(new_quantity).unwrap_or(u32::MAX);
        if let Some(entry) = self.entry_mut(product_id) {
            entry.quantity = quantity;
            debug!(product_id, quantity, "Changed cart quantity");
        }
        self.recalculate();
    }

    /// Empties the cart.
    pub fn clear(&mut self) {
        self.entries.clear();
        self.recalculate();
    }

    /// Cart lines in the order they were added.
    #[must_use]
    pub fn entries(&self) -> &[CartEntry] {
        &self.entries
    }

    /// Sum of price × quantity over every line.
    #[must_use]
    pub const fn total_price(&self) -> f64 {
        self.total_price
    }

    /// Total number of units across all lines.
    #[must_use]
    pub fn item_count(&self) -> u64 {
        self.entries.iter().map(|entry| u64::from(entry.quantity)).sum()
    }

    /// Quantity in the cart for a product, if it has a line.
    #[must_use]
    pub fn quantity_of(&self, product_id: i64) -> Option<u32> {
        self.entries
            .iter()
            .find(|entry| entry.product.id == product_id)
            .map(|entry| entry.quantity)
    }

    /// Whether the cart has no lines.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    fn entry_mut(&mut self, product_id: i64) -> Option<&mut CartEntry> {
        self.entries
            .iter_mut()
            .find(|entry| entry.product.id == product_id)
    }

    fn recalculate(&mut self) {
        self.total_price = self.entries.iter().map(CartEntry::line_total).sum();
    }
}
