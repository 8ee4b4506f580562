//! Theme switch handlers

use std::collections::HashMap;

use axum::{
    extract::{rejection::FormRejection, Query, State},
    http::{header, HeaderMap, StatusCode},
    response::{IntoResponse, Response},
    Extension, Form, Json,
};
use axum_extra::extract::CookieJar;
use themegate_themes::{ActiveTheme, SwitchRequest, ThemeRedirect};

use crate::{
    error::ApiResult,
    models::{CurrentThemeResponse, SwitchThemeParams},
    state::AppState,
};

/// Switch request backed by axum extractors
///
/// Query parameters take precedence over form fields.
struct HttpSwitchRequest<'a> {
    query: &'a HashMap<String, String>,
    form: Option<&'a HashMap<String, String>>,
    headers: &'a HeaderMap,
}

impl SwitchRequest for HttpSwitchRequest<'_> {
    fn param(&self, name: &str) -> Option<&str> {
        self.query
            .get(name)
            .or_else(|| self.form.and_then(|form| form.get(name)))
            .map(String::as_str)
    }

    fn header(&self, name: &str) -> Option<&str> {
        self.headers.get(name).and_then(|value| value.to_str().ok())
    }
}

/// Switch theme from a query parameter
#[utoipa::path(
    get,
    path = "/theme/switch",
    params(SwitchThemeParams),
    responses(
        (status = 302, description = "Theme switched, redirecting to the referer or default route"),
        (status = 404, description = "Theme does not exist"),
        (status = 500, description = "Default route could not be resolved")
    )
)]
pub async fn switch_theme(
    State(state): State<AppState>,
    Extension(active): Extension<ActiveTheme>,
    headers: HeaderMap,
    Query(query): Query<HashMap<String, String>>,
) -> ApiResult<Response> {
    let request = HttpSwitchRequest {
        query: &query,
        form: None,
        headers: &headers,
    };
    let redirect = state.switcher.switch(&request, &active)?;
    Ok(redirect_response(redirect))
}

/// Switch theme from a submitted form
#[utoipa::path(
    post,
    path = "/theme/switch",
    request_body(content = SwitchThemeParams, content_type = "application/x-www-form-urlencoded"),
    responses(
        (status = 302, description = "Theme switched, redirecting to the referer or default route"),
        (status = 404, description = "Theme does not exist"),
        (status = 500, description = "Default route could not be resolved")
    )
)]
pub async fn switch_theme_form(
    State(state): State<AppState>,
    Extension(active): Extension<ActiveTheme>,
    headers: HeaderMap,
    Query(query): Query<HashMap<String, String>>,
    form: Result<Form<HashMap<String, String>>, FormRejection>,
) -> ApiResult<Response> {
    let form = form.ok().map(|Form(fields)| fields);
    let request = HttpSwitchRequest {
        query: &query,
        form: form.as_ref(),
        headers: &headers,
    };
    let redirect = state.switcher.switch(&request, &active)?;
    Ok(redirect_response(redirect))
}

/// Get the active theme of this request
#[utoipa::path(
    get,
    path = "/theme/current",
    responses(
        (status = 200, description = "Active and available themes", body = CurrentThemeResponse)
    )
)]
pub async fn current_theme(
    State(state): State<AppState>,
    Extension(active): Extension<ActiveTheme>,
) -> Json<CurrentThemeResponse> {
    Json(CurrentThemeResponse {
        active: active.name(),
        available: state.switcher.themes().names().to_vec(),
    })
}

fn redirect_response(redirect: ThemeRedirect) -> Response {
    let (location, cookie) = redirect.into_parts();
    let mut jar = CookieJar::new();
    if let Some(cookie) = cookie {
        jar = jar.add(cookie);
    }
    (StatusCode::FOUND, jar, [(header::LOCATION, location)]).into_response()
}
