//! Cart entry - One cart line: a product and how many units of it.

use super::Product;
use std::sync::Arc;

/// A single line in the cart. `quantity` is always at least 1; the ledger
/// removes an entry instead of storing a lower quantity.
#[derive(Clone, Debug, PartialEq)]
pub struct CartEntry {
    /// The catalog product this line refers to
    pub product: Arc<Product>,
    /// Number of units
    pub quantity: u32,
}

impl CartEntry {
    /// Price of this line: unit price times quantity.
    #[must_use]
    pub fn line_total(&self) -> f64 {
        self.product.price * f64::from(self.quantity)
    }
}
