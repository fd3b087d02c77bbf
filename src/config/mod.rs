/// Catalog seed loading from config.toml
pub mod catalog;

/// Demo login settings from environment variables
pub mod login;
