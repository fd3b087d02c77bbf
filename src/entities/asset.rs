//! Opaque handle to an image or icon resource.
//!
//! The core only carries these around. Resolving a handle into something
//! displayable is the job of the rendering layer's asset resolver.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Key the asset resolver understands (e.g. `"drawable/kibble"`)
#[derive(Clone, Debug, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AssetRef(String);

impl AssetRef {
    /// Wraps a resolver key.
    #[must_use]
    pub fn new(key: impl Into<String>) -> Self {
        Self(key.into())
    }

    /// The raw key, for handing to the resolver.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for AssetRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for AssetRef {
    fn from(key: &str) -> Self {
        Self::new(key)
    }
}
