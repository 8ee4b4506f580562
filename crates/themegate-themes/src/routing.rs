//! Named route resolution

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::error::{Result, ThemeError};

/// Resolves a route name to a URL
pub trait UrlGenerator: Send + Sync {
    /// Generate the URL of `route`, failing if the route is unknown
    fn generate(&self, route: &str) -> Result<String>;
}

/// Static mapping of route names to paths
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RouteTable {
    routes: HashMap<String, String>,
}

impl RouteTable {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_route(mut self, name: impl Into<String>, path: impl Into<String>) -> Self {
        self.insert(name, path);
        self
    }

    pub fn insert(&mut self, name: impl Into<String>, path: impl Into<String>) {
        self.routes.insert(name.into(), path.into());
    }

    pub fn contains(&self, name: &str) -> bool {
        self.routes.contains_key(name)
    }

    pub fn len(&self) -> usize {
        self.routes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.routes.is_empty()
    }
}

impl From<HashMap<String, String>> for RouteTable {
    fn from(routes: HashMap<String, String>) -> Self {
        Self { routes }
    }
}

impl UrlGenerator for RouteTable {
    fn generate(&self, route: &str) -> Result<String> {
        self.routes
            .get(route)
            .cloned()
            .ok_or_else(|| ThemeError::RouteNotFound(route.to_string()))
    }
}
