//! Core configuration types and data structures

use serde::{Deserialize, Serialize};
use themegate_themes::{CookieOptions, RouteTable, ThemeAllowList};

/// Main application configuration
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
#[serde(default)]
pub struct AppConfig {
    /// HTTP server configuration
    pub server: ServerConfig,
    /// Theme switch configuration
    pub themes: ThemeSettings,
    /// Named routes available as redirect targets
    pub routes: RouteTable,
}

/// HTTP server configuration
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct ServerConfig {
    /// Interface to bind
    pub host: String,
    /// Port to listen on
    pub port: u16,
}

/// Theme switch configuration
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct ThemeSettings {
    /// Themes a client may switch to, in display order
    pub available: Vec<String>,
    /// Theme considered active when the request carries no valid theme cookie
    pub default_theme: Option<String>,
    /// Route to redirect to when the request has no referer
    pub default_route: Option<String>,
    /// Cookie persisting the selection; no cookie is written when unset
    pub cookie: Option<CookieOptions>,
}

impl ThemeSettings {
    pub fn allow_list(&self) -> ThemeAllowList {
        ThemeAllowList::new(self.available.iter().cloned())
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "127.0.0.1".to_string(),
            port: 8080,
        }
    }
}

impl ServerConfig {
    /// `host:port` string suitable for binding a listener
    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }

    /// Replace host and port with command-line values when given
    pub fn apply_overrides(&mut self, host: Option<String>, port: Option<u16>) {
        if let Some(host) = host {
            self.host = host;
        }
        if let Some(port) = port {
            self.port = port;
        }
    }
}

impl Default for ThemeSettings {
    fn default() -> Self {
        Self {
            available: vec!["light".to_string(), "dark".to_string()],
            default_theme: None,
            default_route: None,
            cookie: None,
        }
    }
}

/// Configuration manager trait
pub trait ConfigManager {
    /// Load configuration
    fn load_config(&mut self) -> Result<AppConfig, crate::error::ConfigError>;
    /// Save configuration
    fn save_config(&self, config: &AppConfig) -> Result<(), crate::error::ConfigError>;
    /// Validate configuration
    fn validate_config(&self, config: &AppConfig) -> Result<(), crate::error::ConfigError>;
}
