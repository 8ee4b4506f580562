//! Request capability consumed by the theme switcher

use std::collections::HashMap;

/// Parameter carrying the requested theme name
pub const THEME_PARAM: &str = "theme";

/// Header naming the page the client came from
pub const REFERER_HEADER: &str = "referer";

/// Read access to the parts of an HTTP request the switcher needs
pub trait SwitchRequest {
    /// Value of a query or form parameter
    fn param(&self, name: &str) -> Option<&str>;

    /// Value of a header, looked up case-insensitively
    fn header(&self, name: &str) -> Option<&str>;
}

/// In-memory request, for callers that are not behind an HTTP framework
#[derive(Debug, Clone, Default)]
pub struct StaticRequest {
    params: HashMap<String, String>,
    headers: HashMap<String, String>,
}

impl StaticRequest {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_param(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.params.insert(name.into(), value.into());
        self
    }

    pub fn with_header(mut self, name: impl AsRef<str>, value: impl Into<String>) -> Self {
        self.headers
            .insert(name.as_ref().to_ascii_lowercase(), value.into());
        self
    }

    /// Shorthand for a request asking for `theme`
    pub fn for_theme(theme: impl Into<String>) -> Self {
        Self::new().with_param(THEME_PARAM, theme)
    }
}

impl SwitchRequest for StaticRequest {
    fn param(&self, name: &str) -> Option<&str> {
        self.params.get(name).map(String::as_str)
    }

    fn header(&self, name: &str) -> Option<&str> {
        self.headers
            .get(&name.to_ascii_lowercase())
            .map(String::as_str)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_header_lookup_ignores_case() {
        let request = StaticRequest::new().with_header("Referer", "https://example.com/page");
        assert_eq!(request.header("referer"), Some("https://example.com/page"));
        assert_eq!(request.header("REFERER"), Some("https://example.com/page"));
    }

    #[test]
    fn test_for_theme_sets_param() {
        let request = StaticRequest::for_theme("dark");
        assert_eq!(request.param(THEME_PARAM), Some("dark"));
        assert_eq!(request.param("other"), None);
    }
}
