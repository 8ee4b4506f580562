//! Request-scoped holder of the active theme

use std::sync::Arc;

use parking_lot::RwLock;

/// Currently selected theme for one request
///
/// Clones share the same cell, so a middleware and the handler it wraps see
/// each other's writes. Build a new holder per request; never share one
/// across requests.
#[derive(Debug, Clone, Default)]
pub struct ActiveTheme {
    name: Arc<RwLock<Option<String>>>,
}

impl ActiveTheme {
    /// Create a holder with no theme selected
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a holder seeded with a theme
    pub fn with_name(name: impl Into<String>) -> Self {
        Self {
            name: Arc::new(RwLock::new(Some(name.into()))),
        }
    }

    pub fn set(&self, name: impl Into<String>) {
        *self.name.write() = Some(name.into());
    }

    /// Name of the active theme, if any
    pub fn name(&self) -> Option<String> {
        self.name.read().clone()
    }

    pub fn is_set(&self) -> bool {
        self.name.read().is_some()
    }
}
