//! Category entity - A named product grouping shown as a filter chip.

use super::AssetRef;
use serde::{Deserialize, Serialize};

/// Catalog category. Names are unique within a catalog.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Category {
    /// Display name, also the value products reference in their `category` field
    pub name: String,
    /// Icon shown next to the name
    #[serde(default)]
    pub icon: AssetRef,
}

impl Category {
    /// Creates a category.
    #[must_use]
    pub fn new(name: impl Into<String>, icon: impl Into<AssetRef>) -> Self {
        Self {
            name: name.into(),
            icon: icon.into(),
        }
    }
}
