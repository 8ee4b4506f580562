//! Error types for theme selection

use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ThemeError {
    #[error("The theme \"{0}\" does not exist")]
    UnknownTheme(String),

    #[error("Route not found: {0}")]
    RouteNotFound(String),

    #[error("Invalid theme name: {0:?}")]
    InvalidName(String),
}

pub type Result<T> = std::result::Result<T, ThemeError>;
