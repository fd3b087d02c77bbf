//! Product detail screen state.

use crate::{
    core::catalog::Catalog,
    entities::Product,
    state::{Observed, Store},
};
use std::sync::Arc;
use tracing::{debug, warn};

use super::CartViewModel;

/// Detail view for one product id, with a quantity selector.
///
/// An id the catalog does not know leaves [`product`](Self::product) empty;
/// the screen renders nothing in that case.
#[derive(Debug)]
pub struct ProductDetailViewModel {
    product: Option<Arc<Product>>,
    quantity: Store<u32>,
}

impl ProductDetailViewModel {
    /// Looks the product up in the catalog. The quantity starts at 1.
    #[must_use]
    pub fn new(catalog: &Catalog, product_id: i64) -> Self {
        let product = catalog.product_by_id(product_id);
        if product.is_none() {
            warn!(product_id, "Detail requested for unknown product");
        }

        Self {
            product,
            quantity: Store::new(1),
        }
    }

    /// The product being shown, if the id was known.
    #[must_use]
    pub const fn product(&self) -> Option<&Arc<Product>> {
        self.product.as_ref()
    }

    /// Selected quantity, never below 1.
    #[must_use]
    pub const fn quantity(&self) -> Observed<'_, u32> {
        self.quantity.observe()
    }

    /// The selector changed. Values below 1 are ignored.
    pub fn on_quantity_change(&self, new_quantity: i64) {
        if new_quantity < 1 {
            debug!(new_quantity, "Ignoring quantity below 1");
            return;
        }
        self.quantity
            .set(u32::try_from(new_quantity).unwrap_or(u32::MAX));
    }

    /// Price for the selected quantity, shown on the bottom bar.
    #[must_use]
    pub fn line_total(&self) -> Option<f64> {
        let quantity = self.quantity.get();
        self.product
            .as_ref()
            .map(|product| product.price * f64::from(quantity))
    }

    /// Adds the selected quantity to the cart and returns how many units
    /// went in. `None` means the cart was left untouched, either because
    /// there is no product to add or because the cart refused the quantity.
    #[must_use = "the cart may have been left untouched"]
    pub fn add_to_cart(&self, cart: &CartViewModel) -> Option<u32> {
        let product = self.product.as_ref()?;
        let quantity = self.quantity.get();
        if cart.add_to_cart(product, quantity) {
            Some(quantity)
        } else {
            warn!(product_id = product.id, quantity, "Cart refused the selected quantity");
            None
        }
    }
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]
    use super::*;
    use crate::test_utils::{assert_close, sample_catalog};

    #[test]
    fn test_known_product() {
        let catalog = sample_catalog();
        let model = ProductDetailViewModel::new(&catalog, 3);

        assert_eq!(model.product().unwrap().name, "Leather Collar");
        assert_eq!(model.quantity().get(), 1);
        assert_close(model.line_total().unwrap(), 12.99);
    }

    #[test]
    fn test_unknown_product_is_nothing_to_display() {
        let catalog = sample_catalog();
        let model = ProductDetailViewModel::new(&catalog, 404);

        assert!(model.product().is_none());
        assert!(model.line_total().is_none());

        let cart = CartViewModel::new();
        assert_eq!(model.add_to_cart(&cart), None);
        assert!(cart.is_empty());
    }

    #[test]
    fn test_quantity_never_below_one() {
        let catalog = sample_catalog();
        let model = ProductDetailViewModel::new(&catalog, 1);

        model.on_quantity_change(4);
        assert_eq!(model.quantity().get(), 4);

        model.on_quantity_change(0);
        assert_eq!(model.quantity().get(), 4);

        model.on_quantity_change(-3);
        assert_eq!(model.quantity().get(), 4);

        model.on_quantity_change(1);
        assert_eq!(model.quantity().get(), 1);
    }

    #[test]
    fn test_add_selected_quantity_to_cart() {
        let catalog = sample_catalog();
        let model = ProductDetailViewModel::new(&catalog, 1);
        let cart = CartViewModel::new();

        model.on_quantity_change(2);
        assert_close(model.line_total().unwrap(), 51.98);
        assert_eq!(model.add_to_cart(&cart), Some(2));
        assert_eq!(model.add_to_cart(&cart), Some(2));

        assert_eq!(cart.cart().with(|c| c.quantity_of(1)), Some(4));
        assert_close(cart.total_price(), 103.96);
    }

    #[test]
    fn test_reported_units_match_cart_contents() {
        let catalog = sample_catalog();
        let model = ProductDetailViewModel::new(&catalog, 6);
        let cart = CartViewModel::new();

        // Rejected selections leave the last accepted quantity in place
        model.on_quantity_change(3);
        model.on_quantity_change(0);
        let added = model.add_to_cart(&cart).unwrap();

        assert_eq!(added, model.quantity().get());
        assert_eq!(cart.cart().with(|c| c.quantity_of(6)), Some(added));
        assert_close(cart.total_price(), 136.5);
    }
}
