//! PDF rendering for the multi-station climate bulletin.

use anyhow::{Context, Result};
use bulletin_core::RiskLevel;
use chrono::{DateTime, Utc};
use printpdf::{BuiltinFont, IndirectFontRef, Mm, PdfDocument, PdfLayerReference};

/// One table row of the bulletin, computed independently per station.
#[derive(Debug, Clone)]
pub struct BulletinRow {
    pub station: String,
    pub temp_c: f64,
    pub humidity_pct: u8,
    pub anomaly_c: f64,
    pub risk: RiskLevel,
}

// printpdf's Mm wraps f32, so the layout values stay f32 throughout.
const PAGE_WIDTH_MM: f32 = 210.0;
const PAGE_HEIGHT_MM: f32 = 297.0;
const MARGIN_MM: f32 = 20.0;
const ROW_STEP_MM: f32 = 9.0;

// Column left edges: Station, Temp, Humidity, Anomaly, Risk Level.
const COLUMNS_MM: [f32; 5] = [20.0, 60.0, 92.0, 124.0, 156.0];

const FOOTER: [&str; 3] = [
    "Note: Anomalies are calculated against a 30-year operational baseline (1991-2020).",
    "Detailed climatological reports available upon request from the Department of",
    "Climate Change and Meteorological Services.",
];

/// Render the bulletin as PDF bytes: title, generation stamp, a fixed-column
/// table of per-station readings, and the static baseline footer.
pub fn render_bulletin(rows: &[BulletinRow], generated_at: DateTime<Utc>) -> Result<Vec<u8>> {
    let (doc, page, layer) = PdfDocument::new(
        "Malawi National Climate Bulletin",
        Mm(PAGE_WIDTH_MM),
        Mm(PAGE_HEIGHT_MM),
        "bulletin",
    );
    let layer = doc.get_page(page).get_layer(layer);

    let regular = doc
        .add_builtin_font(BuiltinFont::Helvetica)
        .context("Failed to load the regular PDF font")?;
    let bold = doc
        .add_builtin_font(BuiltinFont::HelveticaBold)
        .context("Failed to load the bold PDF font")?;
    let italic = doc
        .add_builtin_font(BuiltinFont::HelveticaOblique)
        .context("Failed to load the italic PDF font")?;

    let mut y = PAGE_HEIGHT_MM - 25.0;
    layer.use_text("Malawi National Climate Bulletin", 16.0, Mm(55.0), Mm(y), &bold);

    y -= 8.0;
    let stamp = format!("Generated on: {}", generated_at.format("%Y-%m-%d %H:%M"));
    layer.use_text(stamp, 10.0, Mm(78.0), Mm(y), &italic);

    y -= 16.0;
    write_row(
        &layer,
        &bold,
        y,
        ["Station", "Temp (C)", "Humidity", "Anomaly", "Risk Level"],
    );

    for row in rows {
        y -= ROW_STEP_MM;
        let temp = format!("{:.1}", row.temp_c);
        let humidity = format!("{}%", row.humidity_pct);
        let anomaly = format!("{:+.1}", row.anomaly_c);
        write_row(
            &layer,
            &regular,
            y,
            [
                row.station.as_str(),
                temp.as_str(),
                humidity.as_str(),
                anomaly.as_str(),
                row.risk.label(),
            ],
        );
    }

    y -= 18.0;
    for line in FOOTER {
        layer.use_text(line, 8.0, Mm(MARGIN_MM), Mm(y), &italic);
        y -= 4.5;
    }

    doc.save_to_bytes().context("Failed to serialize the bulletin PDF")
}

fn write_row(layer: &PdfLayerReference, font: &IndirectFontRef, y: f32, cells: [&str; 5]) {
    for (text, x) in cells.into_iter().zip(COLUMNS_MM) {
        layer.use_text(text, 10.0, Mm(x), Mm(y), font);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn rows() -> Vec<BulletinRow> {
        vec![
            BulletinRow {
                station: "Lilongwe".to_string(),
                temp_c: 26.4,
                humidity_pct: 48,
                anomaly_c: 3.6,
                risk: RiskLevel::Caution,
            },
            BulletinRow {
                station: "Mzuzu".to_string(),
                temp_c: 18.2,
                humidity_pct: 70,
                anomaly_c: -2.6,
                risk: RiskLevel::Safe,
            },
        ]
    }

    #[test]
    fn bulletin_renders_to_pdf_bytes() {
        let generated_at = Utc.with_ymd_and_hms(2024, 3, 4, 12, 0, 0).unwrap();
        let bytes = render_bulletin(&rows(), generated_at).expect("bulletin renders");

        assert!(bytes.starts_with(b"%PDF"));
        assert!(bytes.len() > 500);
    }

    #[test]
    fn empty_bulletin_still_renders() {
        let generated_at = Utc.with_ymd_and_hms(2024, 3, 4, 12, 0, 0).unwrap();
        let bytes = render_bulletin(&[], generated_at).expect("bulletin renders");
        assert!(bytes.starts_with(b"%PDF"));
    }
}
