//! Core business logic - framework-agnostic catalog, filtering, cart and form rules.
//!
//! Nothing in here knows about observable state or screens; the view models in
//! [`crate::viewmodels`] wrap these types and publish their changes.

/// Cart ledger with derived total
pub mod cart;
/// Immutable product/category table
pub mod catalog;
/// Store-screen product filtering
pub mod filter;
/// Form field state reducer and submission status
pub mod form;
/// Login and registration field rules
pub mod validation;
