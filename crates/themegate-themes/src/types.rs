//! Core theme selection types

use serde::{Deserialize, Serialize};

use crate::error::{Result, ThemeError};

/// Ordered list of theme names a client is allowed to switch to
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ThemeAllowList {
    names: Vec<String>,
}

impl ThemeAllowList {
    /// Create an allow-list from theme names, keeping their order
    pub fn new<I, S>(names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            names: names.into_iter().map(Into::into).collect(),
        }
    }

    /// Create an allow-list, rejecting blank names
    pub fn try_new<I, S>(names: I) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let list = Self::new(names);
        if let Some(blank) = list.names.iter().find(|name| name.trim().is_empty()) {
            return Err(ThemeError::InvalidName(blank.clone()));
        }
        Ok(list)
    }

    /// Whether `name` is a selectable theme
    pub fn contains(&self, name: &str) -> bool {
        self.names.iter().any(|allowed| allowed == name)
    }

    pub fn names(&self) -> &[String] {
        &self.names
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.names.iter().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }
}

impl<S: Into<String>> FromIterator<S> for ThemeAllowList {
    fn from_iter<T: IntoIterator<Item = S>>(iter: T) -> Self {
        Self::new(iter)
    }
}

/// Options of the cookie that remembers the selected theme
///
/// Only `name` is required; the remaining fields default to a one year,
/// site-wide, host-only cookie without `Secure` or `HttpOnly`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CookieOptions {
    /// Cookie name
    pub name: String,

    /// Lifetime in seconds, added to the time of the switch
    #[serde(default = "default_lifetime")]
    pub lifetime: i64,

    /// Cookie path
    #[serde(default = "default_path")]
    pub path: String,

    /// Cookie domain, empty for a host-only cookie
    #[serde(default)]
    pub domain: String,

    /// Send only over HTTPS
    #[serde(default)]
    pub secure: bool,

    /// Hide from client-side scripts
    #[serde(default)]
    pub http_only: bool,
}

impl CookieOptions {
    /// Create cookie options with defaults for everything but the name
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            lifetime: default_lifetime(),
            path: default_path(),
            domain: String::new(),
            secure: false,
            http_only: false,
        }
    }

    pub fn with_lifetime(mut self, seconds: i64) -> Self {
        self.lifetime = seconds;
        self
    }

    pub fn with_path(mut self, path: impl Into<String>) -> Self {
        self.path = path.into();
        self
    }

    pub fn with_domain(mut self, domain: impl Into<String>) -> Self {
        self.domain = domain.into();
        self
    }

    pub fn with_secure(mut self, secure: bool) -> Self {
        self.secure = secure;
        self
    }

    pub fn with_http_only(mut self, http_only: bool) -> Self {
        self.http_only = http_only;
        self
    }
}

// Default value functions for serde
fn default_lifetime() -> i64 {
    31_536_000
}

fn default_path() -> String {
    "/".to_string()
}
