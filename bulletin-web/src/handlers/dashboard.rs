//! Dashboard page: current conditions, climate analytics, outlook, chart
//! and map for the selected station.

use axum::{
    Form,
    extract::{Query, State},
    response::Html,
};
use bulletin_core::{ForecastOutlook, aggregate_forecast, classify_heat_risk, compute_anomaly};
use chrono::Utc;
use serde::Deserialize;
use tracing::warn;

use crate::{error::ApiError, map, state::AppState, view::DashboardView};

#[derive(Debug, Default, Deserialize)]
pub struct CitySelection {
    pub city: Option<String>,
}

/// `GET /` with an optional `?city=` query parameter.
pub async fn show(
    State(state): State<AppState>,
    Query(selection): Query<CitySelection>,
) -> Result<Html<String>, ApiError> {
    render(state, selection).await
}

/// `POST /` from the station select form.
pub async fn select(
    State(state): State<AppState>,
    Form(selection): Form<CitySelection>,
) -> Result<Html<String>, ApiError> {
    render(state, selection).await
}

async fn render(state: AppState, selection: CitySelection) -> Result<Html<String>, ApiError> {
    let requested = selection
        .city
        .unwrap_or_else(|| state.settings.default_station.clone());
    // Unknown names fall back to the default station rather than erroring.
    let station = state.settings.station_or_default(&requested).clone();

    let current = state.gateway.fetch_current(station.lat, station.lon).await?;

    // The dashboard degrades to an empty outlook when only the forecast
    // fetch fails; the page is still useful with current conditions alone.
    let outlook = match state.gateway.fetch_forecast(station.lat, station.lon).await {
        Ok(samples) => aggregate_forecast(&samples),
        Err(err) => {
            warn!(station = %station.name, error = %err, "forecast unavailable");
            ForecastOutlook::default()
        }
    };

    let now = Utc::now();
    let anomaly = compute_anomaly(&station.name, current.temperature_c, now.date_naive());
    let risk = classify_heat_risk(current.temperature_c, f64::from(current.humidity_pct));
    let map_html = map::render_embed(&station, current.temperature_c, anomaly.anomaly_c);

    let cities = state
        .settings
        .stations
        .iter()
        .map(|s| s.name.clone())
        .collect();

    let page = DashboardView::build(
        &station, cities, now, &current, anomaly, risk, &outlook, map_html,
    )?;

    let ctx = tera::Context::from_serialize(&page)?;
    let html = state.templates.render("dashboard.html", &ctx)?;
    Ok(Html(html))
}
