//! Entity module - Contains the immutable catalog records and the cart line type.
//! Products and categories are created once at startup and shared read-only;
//! cart entries are owned by a cart session.

pub mod asset;
pub mod cart_entry;
pub mod category;
pub mod product;

pub use asset::AssetRef;
pub use cart_entry::CartEntry;
pub use category::Category;
pub use product::Product;
