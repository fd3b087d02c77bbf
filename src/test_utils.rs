//! Shared test utilities for the storefront core.
//!
//! This module provides common helpers for building catalogs, products and
//! view models with sensible defaults.

use crate::{
    config::login::LoginSettings,
    core::catalog::Catalog,
    entities::Product,
    viewmodels::{Authenticator, DemoAuthenticator, LoginViewModel},
};
use std::{sync::Arc, time::Duration};
use tokio::sync::Notify;
use tracing_subscriber::EnvFilter;

/// Routes `tracing` output through the test harness. Safe to call repeatedly.
pub fn init_test_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("debug")),
        )
        .with_test_writer()
        .try_init();
}

/// The built-in catalog, shared the way the application shares it.
#[must_use]
pub fn sample_catalog() -> Arc<Catalog> {
    Arc::new(Catalog::builtin())
}

/// Creates a standalone product with an empty image handle.
#[must_use]
pub fn test_product(id: i64, name: &str, price: f64, category: &str) -> Arc<Product> {
    Arc::new(Product::new(id, name, price, category, ""))
}

/// Asserts two money amounts are equal to within a hundredth of a cent.
#[track_caller]
pub fn assert_close(actual: f64, expected: f64) {
    assert!(
        (actual - expected).abs() < 1e-4,
        "expected {expected}, got {actual}"
    );
}

/// Login form with the default demo credentials and no artificial delay.
#[must_use]
pub fn instant_login() -> LoginViewModel<DemoAuthenticator> {
    LoginViewModel::new(DemoAuthenticator::new(LoginSettings {
        latency: Duration::ZERO,
        ..LoginSettings::default()
    }))
}

/// Authenticator that answers only once the test opens the gate.
pub struct GatedAuthenticator {
    gate: Arc<Notify>,
    accept: bool,
}

impl GatedAuthenticator {
    /// Answers `accept` after `gate` is notified.
    #[must_use]
    pub const fn new(gate: Arc<Notify>, accept: bool) -> Self {
        Self { gate, accept }
    }
}

impl Authenticator for GatedAuthenticator {
    async fn authenticate(&self, _email: &str, _password: &str) -> bool {
        self.gate.notified().await;
        self.accept
    }
}
