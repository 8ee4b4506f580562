//! Health check endpoint

use axum::{extract::State, Json};

use crate::{models::HealthResponse, state::AppState};

/// Health check endpoint
///
/// Reports the size of the theme allow-list and whether selections are
/// persisted in a cookie.
#[utoipa::path(
    get,
    path = "/health",
    responses(
        (status = 200, description = "Service is healthy", body = HealthResponse)
    )
)]
pub async fn health_check(State(state): State<AppState>) -> Json<HealthResponse> {
    let switcher = &state.switcher;
    let themes = switcher.themes().len();

    Json(HealthResponse {
        status: if themes > 0 { "healthy" } else { "degraded" }.to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        uptime: state.uptime_seconds(),
        themes,
        persists_selection: switcher.cookie_options().is_some(),
    })
}
