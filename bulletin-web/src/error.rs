//! Request error handling.
//!
//! Upstream fetch failures surface as a user-visible "data unavailable"
//! page instead of crashing the request.

use axum::{
    http::StatusCode,
    response::{Html, IntoResponse, Response},
};
use bulletin_core::FetchError;
use thiserror::Error;
use tracing::error;

#[derive(Debug, Error)]
pub enum ApiError {
    #[error("weather data unavailable: {0}")]
    Upstream(#[from] FetchError),

    #[error("failed to render page: {0}")]
    Render(#[from] tera::Error),

    #[error("failed to generate bulletin: {0}")]
    Report(String),
}

const UNAVAILABLE_PAGE: &str = r#"<!DOCTYPE html>
<html lang="en">
<head><meta charset="utf-8"><title>Data unavailable</title></head>
<body>
  <h1>Weather data unavailable</h1>
  <p>The upstream weather service could not be reached. Please try again shortly.</p>
  <p><a href="/">Back to the dashboard</a></p>
</body>
</html>
"#;

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        error!(error = %self, "request failed");

        match self {
            Self::Upstream(_) => {
                (StatusCode::BAD_GATEWAY, Html(UNAVAILABLE_PAGE)).into_response()
            }
            Self::Render(_) | Self::Report(_) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                "An internal error occurred",
            )
                .into_response(),
        }
    }
}
