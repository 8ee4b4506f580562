//! Themegate Configuration Management
//!
//! Loads the theme switch settings (allow-list, cookie options, default
//! route), the named route table and the server bind address from a TOML
//! file layered under `THEMEGATE__*` environment variables.

pub mod error;
pub mod manager;
pub mod types;

pub use error::{ConfigError, Result};
pub use manager::ConfigManager;
pub use types::{AppConfig, ConfigManager as ConfigManagerTrait, ServerConfig, ThemeSettings};
