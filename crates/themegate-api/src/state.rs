//! Application state for the API server

use std::sync::Arc;

use axum_extra::extract::CookieJar;
use themegate_config::AppConfig;
use themegate_themes::{ActiveTheme, ThemeSwitcher};

/// Application state shared across all API handlers
#[derive(Clone, Debug)]
pub struct AppState {
    /// Theme switcher built from configuration
    pub switcher: Arc<ThemeSwitcher>,
    /// Theme active when a request carries no valid theme cookie
    pub default_theme: Option<String>,
    /// Server start time for uptime calculation
    pub start_time: std::time::Instant,
}

impl AppState {
    /// Create application state from loaded configuration
    pub fn new(config: &AppConfig) -> Self {
        let themes = &config.themes;
        let switcher = ThemeSwitcher::new(themes.allow_list(), Arc::new(config.routes.clone()))
            .with_cookie(themes.cookie.clone())
            .with_default_route(themes.default_route.clone());

        Self::with_switcher(switcher, themes.default_theme.clone())
    }

    /// Create application state around an existing switcher
    pub fn with_switcher(switcher: ThemeSwitcher, default_theme: Option<String>) -> Self {
        Self {
            switcher: Arc::new(switcher),
            default_theme,
            start_time: std::time::Instant::now(),
        }
    }

    /// Fresh active theme holder for one request
    ///
    /// Seeded from the theme cookie when it names an allowed theme, else from
    /// the configured default theme.
    pub fn active_theme_for(&self, jar: &CookieJar) -> ActiveTheme {
        let from_cookie = self
            .switcher
            .cookie_options()
            .and_then(|options| jar.get(&options.name))
            .map(|cookie| cookie.value())
            .filter(|name| self.switcher.themes().contains(name));

        match from_cookie.or(self.default_theme.as_deref()) {
            Some(name) => ActiveTheme::with_name(name),
            None => ActiveTheme::new(),
        }
    }

    /// Get server uptime in seconds
    pub fn uptime_seconds(&self) -> u64 {
        self.start_time.elapsed().as_secs()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum_extra::extract::cookie::Cookie;
    use themegate_themes::CookieOptions;

    fn config() -> AppConfig {
        let mut config = AppConfig::default();
        config.themes.cookie = Some(CookieOptions::new("theme"));
        config.themes.default_theme = Some("light".to_string());
        config
    }

    #[test]
    fn test_active_theme_from_cookie() {
        let state = AppState::new(&config());
        let jar = CookieJar::new().add(Cookie::new("theme", "dark"));
        assert_eq!(state.active_theme_for(&jar).name().as_deref(), Some("dark"));
    }

    #[test]
    fn test_invalid_cookie_falls_back_to_default() {
        let state = AppState::new(&config());
        let jar = CookieJar::new().add(Cookie::new("theme", "purple"));
        assert_eq!(state.active_theme_for(&jar).name().as_deref(), Some("light"));
    }

    #[test]
    fn test_no_cookie_and_no_default_is_unset() {
        let state = AppState::new(&AppConfig::default());
        assert!(!state.active_theme_for(&CookieJar::new()).is_set());
    }

    #[test]
    fn test_each_request_gets_its_own_holder() {
        let state = AppState::new(&config());
        let first = state.active_theme_for(&CookieJar::new());
        let second = state.active_theme_for(&CookieJar::new());
        first.set("dark");
        assert_eq!(second.name().as_deref(), Some("light"));
    }
}
