//! Catalog seed loading from config.toml
//!
//! The products and categories the store sells can be supplied as a TOML file
//! instead of the built-in list. The file is read once at startup and turned
//! into a validated [`Catalog`].

use crate::{
    core::catalog::Catalog,
    entities::{Category, Product},
    errors::{Error, Result},
};
use serde::Deserialize;
use std::path::Path;
use tracing::debug;

/// Default location of the seed file.
pub const DEFAULT_CONFIG_PATH: &str = "config.toml";

/// Configuration structure representing the entire config.toml file
#[derive(Debug, Deserialize)]
pub struct CatalogConfig {
    /// Categories in display order, including the "All" sentinel if the
    /// store screen should offer it
    #[serde(default)]
    pub categories: Vec<Category>,
    /// Products in display order
    #[serde(default)]
    pub products: Vec<Product>,
}

impl CatalogConfig {
    /// Validates the seed and builds the catalog.
    ///
    /// # Errors
    /// Returns an error for duplicate ids or category names, blank product
    /// names, and negative or non-finite prices.
    pub fn into_catalog(self) -> Result<Catalog> {
        Catalog::new(self.categories, self.products)
    }
}

/// Loads the catalog seed from a TOML file
///
/// # Arguments
/// * `path` - Path to the config.toml file
///
/// # Errors
/// Returns an error if:
/// - The file cannot be read
/// - The TOML syntax is invalid
/// - Required fields are missing
pub fn load_config<P: AsRef<Path>>(path: P) -> Result<CatalogConfig> {
    let path_ref = path.as_ref();
    debug!("Attempting to load catalog from: {}", path_ref.display());

    let contents = std::fs::read_to_string(path_ref).map_err(|e| Error::Config {
        message: format!("Failed to read config file {}: {e}", path_ref.display()),
    })?;

    toml::from_str(&contents).map_err(|e| Error::Config {
        message: format!("Failed to parse {}: {e}", path_ref.display()),
    })
}

/// Loads the catalog from `path` when that file exists, otherwise falls back
/// to [`Catalog::builtin`].
///
/// # Errors
/// Returns an error if the file exists but cannot be read, parsed or
/// validated.
pub fn load_catalog_or_builtin<P: AsRef<Path>>(path: P) -> Result<Catalog> {
    let path_ref = path.as_ref();
    if !path_ref.exists() {
        debug!("No catalog file at {}, using built-in catalog", path_ref.display());
        return Ok(Catalog::builtin());
    }
    load_config(path_ref)?.into_catalog()
}
