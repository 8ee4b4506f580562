//! API error types and handling

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use themegate_themes::ThemeError;
use thiserror::Error;

/// API error types
#[derive(Debug, Error)]
pub enum ApiError {
    /// Theme selection failed
    #[error(transparent)]
    Theme(#[from] ThemeError),

    /// Unexpected server-side failure
    #[error("Internal server error: {0}")]
    Internal(String),
}

impl ApiError {
    /// HTTP status and machine-readable type of this error
    pub fn status(&self) -> (StatusCode, &'static str) {
        match self {
            ApiError::Theme(ThemeError::UnknownTheme(_)) => {
                (StatusCode::NOT_FOUND, "theme_not_found")
            }
            ApiError::Theme(ThemeError::InvalidName(_)) => (StatusCode::BAD_REQUEST, "bad_request"),
            ApiError::Theme(ThemeError::RouteNotFound(_)) => {
                (StatusCode::INTERNAL_SERVER_ERROR, "route_error")
            }
            ApiError::Internal(_) => (StatusCode::INTERNAL_SERVER_ERROR, "internal_error"),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, error_type) = self.status();

        if status.is_server_error() {
            tracing::error!(error = %self, "Request failed");
        }

        let body = Json(json!({
            "error": {
                "type": error_type,
                "message": self.to_string(),
            }
        }));

        (status, body).into_response()
    }
}

/// Result type alias for API operations
pub type ApiResult<T> = Result<T, ApiError>;
