//! Theme switching: validate the requested theme, record it and redirect

use std::sync::Arc;

use cookie::Cookie;
use time::{Duration, OffsetDateTime};

use crate::{
    active::ActiveTheme,
    error::{Result, ThemeError},
    request::{SwitchRequest, REFERER_HEADER, THEME_PARAM},
    routing::UrlGenerator,
    types::{CookieOptions, ThemeAllowList},
};

/// Redirect target used when neither a referer nor a default route is known
pub const FALLBACK_REDIRECT: &str = "/";

/// Outcome of a successful switch: where to send the client and the cookie
/// to set on the way
#[derive(Debug, Clone, PartialEq)]
pub struct ThemeRedirect {
    location: String,
    cookie: Option<Cookie<'static>>,
}

impl ThemeRedirect {
    /// Redirect to `location` without a cookie
    pub fn to(location: impl Into<String>) -> Self {
        Self {
            location: location.into(),
            cookie: None,
        }
    }

    pub fn with_cookie(mut self, cookie: Cookie<'static>) -> Self {
        self.cookie = Some(cookie);
        self
    }

    pub fn location(&self) -> &str {
        &self.location
    }

    pub fn cookie(&self) -> Option<&Cookie<'static>> {
        self.cookie.as_ref()
    }

    pub fn into_parts(self) -> (String, Option<Cookie<'static>>) {
        (self.location, self.cookie)
    }
}

/// Switches the active theme of a request
#[derive(Clone)]
pub struct ThemeSwitcher {
    themes: ThemeAllowList,
    cookie: Option<CookieOptions>,
    router: Arc<dyn UrlGenerator>,
    default_route: Option<String>,
}

impl std::fmt::Debug for ThemeSwitcher {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ThemeSwitcher")
            .field("themes", &self.themes)
            .field("cookie", &self.cookie)
            .field("default_route", &self.default_route)
            .finish()
    }
}

impl ThemeSwitcher {
    /// Create a switcher without cookie persistence or default route
    pub fn new(themes: ThemeAllowList, router: Arc<dyn UrlGenerator>) -> Self {
        Self {
            themes,
            cookie: None,
            router,
            default_route: None,
        }
    }

    /// Persist the selection in a cookie built from `options`
    pub fn with_cookie(mut self, options: Option<CookieOptions>) -> Self {
        self.cookie = options;
        self
    }

    /// Redirect to `route` when the request has no referer
    ///
    /// An empty route name counts as no default route.
    pub fn with_default_route(mut self, route: Option<String>) -> Self {
        self.default_route = route.filter(|route| !route.is_empty());
        self
    }

    pub fn themes(&self) -> &ThemeAllowList {
        &self.themes
    }

    pub fn cookie_options(&self) -> Option<&CookieOptions> {
        self.cookie.as_ref()
    }

    /// Switch the theme of `request`, stamping the cookie with the current time
    pub fn switch<R>(&self, request: &R, active: &ActiveTheme) -> Result<ThemeRedirect>
    where
        R: SwitchRequest + ?Sized,
    {
        self.switch_at(request, active, OffsetDateTime::now_utc())
    }

    /// Switch the theme of `request` as if it happened at `now`
    ///
    /// Fails with [`ThemeError::UnknownTheme`] before touching `active` when
    /// the requested theme is not allowed. A missing parameter is treated as
    /// an empty theme name.
    pub fn switch_at<R>(
        &self,
        request: &R,
        active: &ActiveTheme,
        now: OffsetDateTime,
    ) -> Result<ThemeRedirect>
    where
        R: SwitchRequest + ?Sized,
    {
        let theme = request.param(THEME_PARAM).unwrap_or_default();

        if !self.themes.contains(theme) {
            tracing::warn!(theme, "Rejected switch to unknown theme");
            return Err(ThemeError::UnknownTheme(theme.to_string()));
        }

        active.set(theme);

        let fallback = self.fallback_target()?;
        let location = match request.header(REFERER_HEADER).filter(|r| !r.is_empty()) {
            Some(referer) => referer.to_string(),
            None => fallback,
        };
        tracing::debug!(theme, location = %location, "Resolved redirect target");

        let mut redirect = ThemeRedirect::to(location);
        if let Some(options) = &self.cookie {
            redirect = redirect.with_cookie(build_cookie(options, theme, now));
        }

        tracing::info!(theme, location = redirect.location(), "Switched theme");
        Ok(redirect)
    }

    /// Default route URL, or `/` when none is configured
    pub fn fallback_target(&self) -> Result<String> {
        match &self.default_route {
            Some(route) => self.router.generate(route),
            None => Ok(FALLBACK_REDIRECT.to_string()),
        }
    }
}

fn build_cookie(options: &CookieOptions, theme: &str, now: OffsetDateTime) -> Cookie<'static> {
    let expires = now.saturating_add(Duration::seconds(options.lifetime));

    let mut builder = Cookie::build((options.name.clone(), theme.to_string()))
        .expires(expires)
        .path(options.path.clone())
        .secure(options.secure)
        .http_only(options.http_only);

    if !options.domain.is_empty() {
        builder = builder.domain(options.domain.clone());
    }

    builder.build()
}
