//! Cart screen state, shared between the store, detail and cart screens.

use crate::{
    core::cart::Cart,
    entities::Product,
    state::{Observed, Store},
};
use std::sync::Arc;
use tracing::info;

/// Owns the session's cart and publishes every change to it.
#[derive(Debug, Default)]
pub struct CartViewModel {
    cart: Store<Cart>,
}

impl CartViewModel {
    /// An empty cart session.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Cart lines and derived total.
    #[must_use]
    pub const fn cart(&self) -> Observed<'_, Cart> {
        self.cart.observe()
    }

    /// Adds `quantity` units of `product`, merging with an existing line.
    /// Returns false, without notifying subscribers, when `quantity` is 0.
    #[must_use = "a zero quantity adds nothing"]
    pub fn add_to_cart(&self, product: &Arc<Product>, quantity: u32) -> bool {
        self.cart.update_if(|cart| cart.add(product, quantity))
    }

    /// Drops a product's line regardless of its quantity.
    pub fn remove_from_cart(&self, product_id: i64) {
        self.cart.update(|cart| cart.remove(product_id));
    }

    /// Sets a line's quantity; below 1 removes the line.
    pub fn change_quantity(&self, product_id: i64, new_quantity: i64) {
        self.cart
            .update(|cart| cart.change_quantity(product_id, new_quantity));
    }

    /// Empties the cart after checkout.
    pub fn clear(&self) {
        self.cart.update(Cart::clear);
        info!("Cart cleared");
    }

    /// Current total price.
    #[must_use]
    pub fn total_price(&self) -> f64 {
        self.cart.with(Cart::total_price)
    }

    /// Whether the cart screen should show its empty state.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cart.with(Cart::is_empty)
    }
}
