//! Configuration manager implementation

use std::path::{Path, PathBuf};

use config::{Config, Environment, File};
use themegate_themes::ThemeAllowList;

use crate::{
    error::{ConfigError, Result},
    types::{AppConfig, ConfigManager as ConfigManagerTrait},
};

/// Default prefix of environment overrides, e.g. `THEMEGATE__SERVER__PORT`
pub const DEFAULT_ENV_PREFIX: &str = "THEMEGATE";

/// Configuration manager
#[derive(Debug, Clone)]
pub struct ConfigManager {
    /// Configuration file path
    config_path: PathBuf,
    /// Environment prefix
    env_prefix: String,
    /// Fail when the configuration file is missing
    require_file: bool,
}

impl ConfigManager {
    /// Create a new configuration manager
    pub fn new() -> Self {
        Self {
            config_path: Self::default_config_path(),
            env_prefix: DEFAULT_ENV_PREFIX.to_string(),
            require_file: false,
        }
    }

    /// Create with custom config path; the file must exist
    pub fn with_path(path: PathBuf) -> Self {
        Self {
            config_path: path,
            env_prefix: DEFAULT_ENV_PREFIX.to_string(),
            require_file: true,
        }
    }

    /// Use a different environment variable prefix
    pub fn with_env_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.env_prefix = prefix.into();
        self
    }

    pub fn config_path(&self) -> &Path {
        &self.config_path
    }

    /// Get default config path
    fn default_config_path() -> PathBuf {
        dirs::config_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("themegate")
            .join("config.toml")
    }

    /// Load and validate in one step
    pub fn load_validated(&mut self) -> Result<AppConfig> {
        let config = self.load_config()?;
        self.validate_config(&config)?;
        Ok(config)
    }
}

impl ConfigManagerTrait for ConfigManager {
    fn load_config(&mut self) -> Result<AppConfig> {
        if self.require_file && !self.config_path.exists() {
            return Err(ConfigError::NotFound(
                self.config_path.display().to_string(),
            ));
        }

        let builder = Config::builder()
            .add_source(File::from(self.config_path.clone()).required(false))
            .add_source(
                Environment::with_prefix(&self.env_prefix)
                    .separator("__")
                    .list_separator(",")
                    .with_list_parse_key("themes.available")
                    .try_parsing(true),
            );

        let config = builder.build()?;
        let mut app_config: AppConfig = config.try_deserialize()?;

        // Route table keys come back lowercased; keep the default route in step
        if let Some(route) = app_config.themes.default_route.as_mut() {
            *route = route.to_lowercase();
        }

        tracing::debug!(
            path = %self.config_path.display(),
            themes = app_config.themes.available.len(),
            routes = app_config.routes.len(),
            "Loaded configuration"
        );
        Ok(app_config)
    }

    fn save_config(&self, config: &AppConfig) -> Result<()> {
        let toml = toml::to_string(config)?;
        if let Some(parent) = self.config_path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        std::fs::write(&self.config_path, toml)?;
        Ok(())
    }

    fn validate_config(&self, config: &AppConfig) -> Result<()> {
        if config.server.port == 0 {
            return Err(ConfigError::Validation(
                "Port must be greater than 0".to_string(),
            ));
        }

        let themes = &config.themes;
        if themes.available.is_empty() {
            return Err(ConfigError::Validation(
                "At least one theme must be available".to_string(),
            ));
        }
        let allow_list = ThemeAllowList::try_new(themes.available.iter().cloned())
            .map_err(|e| ConfigError::Validation(e.to_string()))?;

        if let Some(default_theme) = &themes.default_theme {
            if !allow_list.contains(default_theme) {
                return Err(ConfigError::Validation(format!(
                    "Default theme '{}' is not an available theme",
                    default_theme
                )));
            }
        }

        if let Some(route) = themes.default_route.as_deref().filter(|r| !r.is_empty()) {
            if !config.routes.contains(route) {
                return Err(ConfigError::Validation(format!(
                    "Default route '{}' is not a configured route",
                    route
                )));
            }
        }

        if let Some(cookie) = &themes.cookie {
            if cookie.name.trim().is_empty() {
                return Err(ConfigError::Validation(
                    "Cookie name cannot be empty".to_string(),
                ));
            }
        }

        Ok(())
    }
}

impl Default for ConfigManager {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;
    use themegate_themes::{CookieOptions, RouteTable};

    fn write_config(dir: &TempDir, contents: &str) -> PathBuf {
        let path = dir.path().join("config.toml");
        std::fs::write(&path, contents).unwrap();
        path
    }

    #[test]
    fn test_load_from_file() {
        let dir = TempDir::new().unwrap();
        let path = write_config(
            &dir,
            r#"
[server]
host = "0.0.0.0"
port = 9090

[themes]
available = ["light", "dark", "solarized"]
default_theme = "light"
default_route = "home"

[themes.cookie]
name = "site_theme"
lifetime = 600
secure = true

[routes]
home = "/home"
"#,
        );

        let mut manager = ConfigManager::with_path(path).with_env_prefix("THEMEGATE_TEST_FILE");
        let config = manager.load_validated().unwrap();

        assert_eq!(config.server.bind_address(), "0.0.0.0:9090");
        assert_eq!(config.themes.available, vec!["light", "dark", "solarized"]);
        assert_eq!(config.themes.default_theme.as_deref(), Some("light"));
        assert_eq!(config.themes.default_route.as_deref(), Some("home"));
        assert_eq!(
            config.themes.cookie,
            Some(CookieOptions::new("site_theme").with_lifetime(600).with_secure(true))
        );
        assert!(config.routes.contains("home"));
    }

    #[test]
    fn test_mixed_case_default_route_matches_route_table() {
        let dir = TempDir::new().unwrap();
        let path = write_config(
            &dir,
            r#"
[themes]
default_route = "Home"

[routes]
Home = "/home"
"#,
        );

        let mut manager = ConfigManager::with_path(path).with_env_prefix("THEMEGATE_TEST_CASE");
        let config = manager.load_validated().unwrap();

        assert_eq!(config.themes.default_route.as_deref(), Some("home"));
        assert!(config.routes.contains("home"));
    }

    #[test]
    fn test_server_overrides_are_validated() {
        let manager = ConfigManager::new();
        let mut config = AppConfig::default();

        config.server.apply_overrides(Some("0.0.0.0".to_string()), Some(9000));
        assert_eq!(config.server.bind_address(), "0.0.0.0:9000");
        assert!(manager.validate_config(&config).is_ok());

        config.server.apply_overrides(None, Some(0));
        assert_eq!(config.server.host, "0.0.0.0");
        assert!(matches!(
            manager.validate_config(&config),
            Err(ConfigError::Validation(_))
        ));
    }

    #[test]
    fn test_missing_optional_file_uses_defaults() {
        let dir = TempDir::new().unwrap();
        let mut manager = ConfigManager {
            config_path: dir.path().join("absent.toml"),
            env_prefix: "THEMEGATE_TEST_DEFAULTS".to_string(),
            require_file: false,
        };

        let config = manager.load_config().unwrap();
        assert_eq!(config, AppConfig::default());
        assert!(config.themes.cookie.is_none());
    }

    #[test]
    fn test_missing_required_file_is_not_found() {
        let dir = TempDir::new().unwrap();
        let mut manager = ConfigManager::with_path(dir.path().join("absent.toml"));

        assert!(matches!(
            manager.load_config(),
            Err(ConfigError::NotFound(_))
        ));
    }

    #[test]
    fn test_environment_overrides_file() {
        let dir = TempDir::new().unwrap();
        let path = write_config(&dir, "[server]\nport = 9090\n");

        std::env::set_var("THEMEGATE_TEST_ENV__SERVER__PORT", "7070");
        std::env::set_var("THEMEGATE_TEST_ENV__THEMES__AVAILABLE", "dusk,dawn");

        let mut manager = ConfigManager::with_path(path).with_env_prefix("THEMEGATE_TEST_ENV");
        let config = manager.load_config().unwrap();

        std::env::remove_var("THEMEGATE_TEST_ENV__SERVER__PORT");
        std::env::remove_var("THEMEGATE_TEST_ENV__THEMES__AVAILABLE");

        assert_eq!(config.server.port, 7070);
        assert_eq!(config.themes.available, vec!["dusk", "dawn"]);
    }

    #[test]
    fn test_save_and_reload() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("nested").join("config.toml");

        let mut config = AppConfig::default();
        config.themes.cookie = Some(CookieOptions::new("theme").with_domain("example.com"));
        config.routes = RouteTable::new().with_route("home", "/welcome");
        config.themes.default_route = Some("home".to_string());

        let mut manager = ConfigManager::with_path(path).with_env_prefix("THEMEGATE_TEST_SAVE");
        manager.save_config(&config).unwrap();

        let reloaded = manager.load_validated().unwrap();
        assert_eq!(reloaded, config);
    }

    #[test]
    fn test_validate_rejects_empty_allow_list() {
        let manager = ConfigManager::new();
        let mut config = AppConfig::default();
        config.themes.available.clear();

        assert!(matches!(
            manager.validate_config(&config),
            Err(ConfigError::Validation(_))
        ));
    }

    #[test]
    fn test_validate_rejects_blank_theme_name() {
        let manager = ConfigManager::new();
        let mut config = AppConfig::default();
        config.themes.available.push(" ".to_string());

        assert!(manager.validate_config(&config).is_err());
    }

    #[test]
    fn test_validate_rejects_unknown_default_theme() {
        let manager = ConfigManager::new();
        let mut config = AppConfig::default();
        config.themes.default_theme = Some("sepia".to_string());

        let err = manager.validate_config(&config).unwrap_err();
        assert!(err.to_string().contains("sepia"));
    }

    #[test]
    fn test_validate_rejects_unknown_default_route() {
        let manager = ConfigManager::new();
        let mut config = AppConfig::default();
        config.themes.default_route = Some("home".to_string());

        assert!(manager.validate_config(&config).is_err());

        config.routes.insert("home", "/");
        assert!(manager.validate_config(&config).is_ok());
    }

    #[test]
    fn test_validate_rejects_blank_cookie_name() {
        let manager = ConfigManager::new();
        let mut config = AppConfig::default();
        config.themes.cookie = Some(CookieOptions::new(""));

        assert!(manager.validate_config(&config).is_err());
    }

    #[test]
    fn test_validate_rejects_zero_port() {
        let manager = ConfigManager::new();
        let mut config = AppConfig::default();
        config.server.port = 0;

        assert!(manager.validate_config(&config).is_err());
    }
}
