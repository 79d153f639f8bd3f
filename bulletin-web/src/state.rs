//! Application state shared across handlers.

use std::sync::Arc;

use bulletin_core::{Settings, WeatherGateway};
use tera::Tera;

/// Shared, read-only application state. Safe for unsynchronized concurrent
/// reads since nothing here mutates after startup.
#[derive(Debug, Clone)]
pub struct AppState {
    /// Immutable application settings.
    pub settings: Arc<Settings>,
    /// Gateway to the upstream weather provider.
    pub gateway: Arc<dyn WeatherGateway>,
    /// Compiled page templates.
    pub templates: Arc<Tera>,
}
