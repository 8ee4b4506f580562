//! Themegate Theme Selection
//!
//! Framework-independent core of the theme switch endpoint: the allow-list of
//! selectable themes, the request-scoped active theme holder, named route
//! resolution and the switch operation that turns a request into a redirect.

pub mod active;
pub mod error;
pub mod request;
pub mod routing;
pub mod switcher;
pub mod types;

pub use active::ActiveTheme;
pub use error::{Result, ThemeError};
pub use request::{StaticRequest, SwitchRequest, REFERER_HEADER, THEME_PARAM};
pub use routing::{RouteTable, UrlGenerator};
pub use switcher::{ThemeRedirect, ThemeSwitcher, FALLBACK_REDIRECT};
pub use types::{CookieOptions, ThemeAllowList};
