//! Route definitions.

use axum::{
    Router,
    routing::get,
};
use tower_http::trace::TraceLayer;

use crate::{handlers, state::AppState};

/// Build the application router.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route(
            "/",
            get(handlers::dashboard::show).post(handlers::dashboard::select),
        )
        .route("/report", get(handlers::report::download))
        .route("/health", get(handlers::health::health_check))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
