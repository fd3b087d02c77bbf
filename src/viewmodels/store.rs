//! Store screen state.

use crate::{
    core::{
        catalog::Catalog,
        filter::{CategoryFilter, filter_products},
    },
    entities::{Category, Product},
    state::{Observed, Store},
};
use std::sync::Arc;
use tracing::debug;

/// Search text, selected category and the product list they produce.
///
/// The inputs only change through the event methods, so the list is always
/// the filter of the current inputs:
///
/// ```compile_fail
/// use petlife::{core::catalog::Catalog, viewmodels::StoreViewModel};
/// use std::sync::Arc;
///
/// let model = StoreViewModel::new(Arc::new(Catalog::builtin()));
/// model.search_query().set(String::from("ball"));
/// ```
#[derive(Debug)]
pub struct StoreViewModel {
    catalog: Arc<Catalog>,
    search_query: Store<String>,
    selected_category: Store<CategoryFilter>,
    filtered_products: Store<Vec<Arc<Product>>>,
}

impl StoreViewModel {
    /// Starts with an empty search and the "All" category, so every product
    /// is listed.
    #[must_use]
    pub fn new(catalog: Arc<Catalog>) -> Self {
        let filtered = filter_products(catalog.products(), &CategoryFilter::All, "");
        Self {
            catalog,
            search_query: Store::default(),
            selected_category: Store::default(),
            filtered_products: Store::new(filtered),
        }
    }

    /// The user edited the search box.
    pub fn on_search_query_changed(&self, query: &str) {
        self.search_query.set(query.to_string());
        self.refresh();
    }

    /// The user tapped a category chip.
    pub fn on_category_selected(&self, category_name: &str) {
        self.selected_category
            .set(CategoryFilter::from_name(category_name));
        self.refresh();
    }

    /// Current search box text.
    #[must_use]
    pub const fn search_query(&self) -> Observed<'_, String> {
        self.search_query.observe()
    }

    /// Currently selected category chip.
    #[must_use]
    pub const fn selected_category(&self) -> Observed<'_, CategoryFilter> {
        self.selected_category.observe()
    }

    /// Products matching the search and category, in catalog order.
    #[must_use]
    pub const fn filtered_products(&self) -> Observed<'_, Vec<Arc<Product>>> {
        self.filtered_products.observe()
    }

    /// Categories to render as chips.
    #[must_use]
    pub fn categories(&self) -> &[Category] {
        self.catalog.categories()
    }

    /// Snapshot of the filtered list.
    #[must_use]
    pub fn filtered(&self) -> Vec<Arc<Product>> {
        self.filtered_products.get()
    }

    fn refresh(&self) {
        let filtered = self.search_query.with(|query| {
            self.selected_category
                .with(|category| filter_products(self.catalog.products(), category, query))
        });
        debug!(count = filtered.len(), "Store list refreshed");
        self.filtered_products.set(filtered);
    }
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]
    use super::*;
    use crate::test_utils::sample_catalog;

    fn ids(model: &StoreViewModel) -> Vec<i64> {
        model.filtered().iter().map(|p| p.id).collect()
    }

    #[test]
    fn test_starts_with_full_list() {
        let model = StoreViewModel::new(sample_catalog());
        assert_eq!(ids(&model), vec![1, 2, 3, 4, 5, 6]);
        assert_eq!(model.selected_category().get(), CategoryFilter::All);
        assert_eq!(model.search_query().get(), "");
        assert_eq!(model.categories().len(), 4);
    }

    #[test]
    fn test_category_and_search_recompute_immediately() {
        let model = StoreViewModel::new(sample_catalog());

        model.on_category_selected("Food");
        assert_eq!(ids(&model), vec![1, 5]);

        model.on_search_query_changed("cat");
        assert_eq!(ids(&model), vec![5]);

        model.on_category_selected("All");
        assert_eq!(ids(&model), vec![5]);

        model.on_search_query_changed("");
        assert_eq!(ids(&model), vec![1, 2, 3, 4, 5, 6]);
    }

    #[test]
    fn test_subscribers_are_notified_of_new_list() {
        let model = StoreViewModel::new(sample_catalog());
        let mut receiver = model.filtered_products().subscribe();

        model.on_category_selected("Toys");
        assert!(receiver.has_changed().unwrap());
        let ids: Vec<i64> = receiver.borrow_and_update().iter().map(|p| p.id).collect();
        assert_eq!(ids, vec![2, 6]);
    }

    #[test]
    fn test_read_handles_track_event_methods() {
        let model = StoreViewModel::new(sample_catalog());
        let query = model.search_query();
        let category = model.selected_category();
        let mut list = model.filtered_products().subscribe();

        model.on_category_selected("Accessories");
        model.on_search_query_changed("BED");

        assert_eq!(query.get(), "BED");
        assert_eq!(category.get(), CategoryFilter::Named("Accessories".to_string()));
        assert!(list.has_changed().unwrap());
        let listed: Vec<i64> = list.borrow_and_update().iter().map(|p| p.id).collect();
        assert_eq!(listed, vec![4]);
        assert_eq!(listed, ids(&model));
    }
}
