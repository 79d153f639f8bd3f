//! Leaflet map embed for the dashboard page.
//!
//! The marker color follows the sign of the temperature anomaly: warmer
//! than baseline renders red, at or below baseline renders blue.

use bulletin_core::Station;

/// Marker color for an anomaly value. Exactly zero is treated as cool.
pub fn marker_color(anomaly_c: f64) -> &'static str {
    if anomaly_c > 0.0 { "red" } else { "blue" }
}

/// Self-contained HTML fragment with the station map and a popup marker.
pub fn render_embed(station: &Station, temp_c: f64, anomaly_c: f64) -> String {
    let color = marker_color(anomaly_c);
    format!(
        r#"<div id="station-map" style="height: 320px;"></div>
<link rel="stylesheet" href="https://unpkg.com/leaflet@1.9.4/dist/leaflet.css"/>
<script src="https://unpkg.com/leaflet@1.9.4/dist/leaflet.js"></script>
<script>
  var map = L.map("station-map").setView([{lat}, {lon}], 10);
  L.tileLayer("https://tile.openstreetmap.org/{{z}}/{{x}}/{{y}}.png", {{
    maxZoom: 19,
    attribution: "&copy; OpenStreetMap contributors"
  }}).addTo(map);
  L.circleMarker([{lat}, {lon}], {{ color: "{color}", radius: 10 }})
    .addTo(map)
    .bindPopup("{name}: {temp_c:.1}&deg;C");
</script>"#,
        lat = station.lat,
        lon = station.lon,
        name = station.name,
    )
}
