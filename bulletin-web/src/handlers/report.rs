//! PDF climate bulletin covering every configured station.

use axum::{
    extract::State,
    http::header,
    response::{IntoResponse, Response},
};
use bulletin_core::{Settings, WeatherGateway, classify_heat_risk, compute_anomaly};
use chrono::Utc;
use tracing::warn;

use crate::{
    error::ApiError,
    pdf::{self, BulletinRow},
    state::AppState,
};

const FILENAME: &str = "Climate_Bulletin.pdf";

/// `GET /report`: one table row per station, served as a download.
pub async fn download(State(state): State<AppState>) -> Result<Response, ApiError> {
    let rows = collect_rows(state.gateway.as_ref(), &state.settings).await;

    let bytes = pdf::render_bulletin(&rows, Utc::now())
        .map_err(|err| ApiError::Report(err.to_string()))?;

    Ok((
        [
            (header::CONTENT_TYPE, "application/pdf".to_string()),
            (
                header::CONTENT_DISPOSITION,
                format!("attachment; filename=\"{FILENAME}\""),
            ),
        ],
        bytes,
    )
        .into_response())
}

/// Fetch and compute one bulletin row per station. A station whose fetch
/// fails is skipped with a warning; the rest of the report continues.
pub async fn collect_rows(gateway: &dyn WeatherGateway, settings: &Settings) -> Vec<BulletinRow> {
    let today = Utc::now().date_naive();
    let mut rows = Vec::with_capacity(settings.stations.len());

    for station in &settings.stations {
        match gateway.fetch_current(station.lat, station.lon).await {
            Ok(current) => {
                let anomaly = compute_anomaly(&station.name, current.temperature_c, today);
                let risk =
                    classify_heat_risk(current.temperature_c, f64::from(current.humidity_pct));
                rows.push(BulletinRow {
                    station: station.name.clone(),
                    temp_c: current.temperature_c,
                    humidity_pct: current.humidity_pct,
                    anomaly_c: anomaly.anomaly_c,
                    risk,
                });
            }
            Err(err) => {
                warn!(station = %station.name, error = %err, "skipping station in bulletin");
            }
        }
    }

    rows
}
