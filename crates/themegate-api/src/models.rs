//! API request and response models

use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};

/// Theme switch parameters
#[derive(Debug, Clone, Default, Serialize, Deserialize, IntoParams, ToSchema)]
#[into_params(parameter_in = Query)]
pub struct SwitchThemeParams {
    /// Name of the theme to activate
    pub theme: Option<String>,
}

/// Active theme of the current request
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct CurrentThemeResponse {
    /// Active theme name, if any
    pub active: Option<String>,
    /// Themes a client may switch to
    pub available: Vec<String>,
}

/// Health check response
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct HealthResponse {
    /// Service status
    pub status: String,
    /// Service version
    pub version: String,
    /// Uptime in seconds
    pub uptime: u64,
    /// Number of themes a client may switch to
    pub themes: usize,
    /// Whether switches are remembered in a cookie
    pub persists_selection: bool,
}
