//! Unified error types and result handling.
//!
//! User-input validation failures are not errors in this sense; they live in
//! [`crate::core::validation::FieldError`] and end up in form field state.

use thiserror::Error;

/// Infrastructure errors: configuration loading and catalog construction.
#[derive(Debug, Error)]
pub enum Error {
    /// Configuration file or environment value could not be used
    #[error("Configuration error: {message}")]
    Config {
        /// Human-readable description of what went wrong
        message: String,
    },

    /// Two catalog products share the same id
    #[error("Duplicate product id in catalog: {id}")]
    DuplicateProduct {
        /// The repeated product id
        id: i64,
    },

    /// Two catalog categories share the same name
    #[error("Duplicate category in catalog: {name}")]
    DuplicateCategory {
        /// The repeated category name
        name: String,
    },

    /// A product was defined with an empty or whitespace-only name
    #[error("Product {id} has an empty name")]
    EmptyProductName {
        /// Id of the offending product
        id: i64,
    },

    /// A product price is negative, NaN or infinite
    #[error("Invalid price for product {id}: {price}")]
    InvalidPrice {
        /// Id of the offending product
        id: i64,
        /// The rejected price
        price: f64,
    },

    /// Environment variable could not be read
    #[error("Environment variable error: {0}")]
    EnvVar(#[from] std::env::VarError),
}

/// Convenience `Result` type
pub type Result<T> = std::result::Result<T, Error>;
