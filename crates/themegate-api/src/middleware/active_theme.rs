//! Per-request active theme

use axum::{
    extract::{Request, State},
    http::{HeaderName, HeaderValue},
    middleware::Next,
    response::Response,
};
use axum_extra::extract::CookieJar;

use crate::state::AppState;

/// Response header reporting the theme active once the handler has run
pub const ACTIVE_THEME_HEADER: HeaderName = HeaderName::from_static("x-active-theme");

/// Give every request its own [`themegate_themes::ActiveTheme`]
///
/// The holder is inserted into the request extensions before the handler
/// runs and read back afterwards, so switches made by the handler show up in
/// the `X-Active-Theme` response header.
pub async fn active_theme_middleware(
    State(state): State<AppState>,
    jar: CookieJar,
    mut request: Request,
    next: Next,
) -> Response {
    let active = state.active_theme_for(&jar);
    request.extensions_mut().insert(active.clone());

    let mut response = next.run(request).await;

    if let Some(name) = active.name() {
        match HeaderValue::from_str(&name) {
            Ok(value) => {
                response.headers_mut().insert(ACTIVE_THEME_HEADER, value);
            }
            Err(e) => tracing::debug!(theme = %name, error = %e, "Theme name is not a valid header value"),
        }
    }

    response
}
