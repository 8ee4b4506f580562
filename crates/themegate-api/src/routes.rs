//! API route definitions

use axum::{middleware, routing::get, Json, Router};
use utoipa::OpenApi;

use crate::{
    handlers::{health, theme},
    middleware::{active_theme_middleware, logging_middleware},
    state::AppState,
};

/// Path of the theme switch endpoint
pub const SWITCH_PATH: &str = "/theme/switch";

/// API routes
pub fn api_routes() -> Router<AppState> {
    Router::new()
        // Health check
        .route("/health", get(health::health_check))
        // Theme selection
        .route(
            SWITCH_PATH,
            get(theme::switch_theme).post(theme::switch_theme_form),
        )
        .route("/theme/current", get(theme::current_theme))
}

/// OpenAPI document route
pub fn openapi_routes() -> Router<AppState> {
    Router::new().route(
        "/api-docs/openapi.json",
        get(|| async { Json(ApiDoc::openapi()) }),
    )
}

/// Combined routes with middleware applied
pub fn all_routes(state: AppState) -> Router {
    api_routes()
        .merge(openapi_routes())
        .layer(middleware::from_fn_with_state(
            state.clone(),
            active_theme_middleware,
        ))
        .layer(middleware::from_fn(logging_middleware))
        .with_state(state)
}

#[derive(OpenApi)]
#[openapi(
    paths(
        health::health_check,
        theme::switch_theme,
        theme::switch_theme_form,
        theme::current_theme,
    ),
    components(schemas(
        crate::models::SwitchThemeParams,
        crate::models::CurrentThemeResponse,
        crate::models::HealthResponse,
    )),
    info(
        title = "Themegate API",
        version = "1.0.0",
        description = "Switch the active theme and persist the choice in a cookie"
    )
)]
struct ApiDoc;
