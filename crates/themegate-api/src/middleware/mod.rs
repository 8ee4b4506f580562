//! Request middleware

pub mod active_theme;
pub mod logging;

pub use active_theme::{active_theme_middleware, ACTIVE_THEME_HEADER};
pub use logging::logging_middleware;
