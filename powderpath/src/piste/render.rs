//! Leaflet map page rendering.

use serde::Serialize;

use super::model::Piste;

/// Page title and heading.
pub const MAP_TITLE: &str = "Ski Piste Map";

/// Initial map center (lat, lon), over the Alps.
pub const MAP_CENTER: (f64, f64) = (46.0, 8.0);

/// Initial zoom level.
pub const MAP_ZOOM: u8 = 5;

/// Polyline stroke width in pixels.
pub const LINE_WEIGHT: f64 = 2.5;

const LEAFLET_VERSION: &str = "1.9.4";

#[derive(Serialize)]
struct Polyline {
    /// `[lat, lon]` pairs, Leaflet order
    points: Vec<[f64; 2]>,
    color: &'static str,
    popup: String,
}

impl From<&Piste> for Polyline {
    fn from(piste: &Piste) -> Self {
        Self {
            points: piste.coordinates.iter().map(|p| [p.lat, p.lon]).collect(),
            color: piste.color().as_str(),
            popup: escape_html(&piste.popup()).replace('\n', "<br>"),
        }
    }
}

/// Escapes text for inclusion in HTML element content or attributes.
pub fn escape_html(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}

/// Serializes for embedding inside a `<script>` element.
///
/// `</` is split so tag text in the data cannot close the script early.
fn script_json<T: Serialize>(value: &T) -> Result<String, serde_json::Error> {
    Ok(serde_json::to_string(value)?.replace("</", "<\\/"))
}

/// Renders the full map page.
///
/// One polyline per piste with at least one position; pistes with no
/// resolved positions are not drawn.
pub fn render_map_page(pistes: &[Piste]) -> Result<String, serde_json::Error> {
    let lines: Vec<Polyline> = pistes
        .iter()
        .filter(|p| !p.coordinates.is_empty())
        .map(Polyline::from)
        .collect();
    let data = script_json(&lines)?;

    Ok(format!(
        r#"<!DOCTYPE html>
<html>
<head>
    <meta charset="utf-8">
    <title>{title}</title>
    <link rel="stylesheet" href="https://unpkg.com/leaflet@{leaflet}/dist/leaflet.css">
    <script src="https://unpkg.com/leaflet@{leaflet}/dist/leaflet.js"></script>
    <style>#map {{ height: 80vh; }}</style>
</head>
<body>
    <h1>{title}</h1>
    <div id="map"></div>
    <script>
        var map = L.map("map").setView([{lat}, {lon}], {zoom});
        L.tileLayer("https://{{s}}.tile.openstreetmap.org/{{z}}/{{x}}/{{y}}.png", {{
            attribution: "&copy; OpenStreetMap contributors"
        }}).addTo(map);
        var pistes = {data};
        pistes.forEach(function (p) {{
            L.polyline(p.points, {{ color: p.color, weight: {weight} }})
                .bindPopup(p.popup)
                .addTo(map);
        }});
    </script>
</body>
</html>
"#,
        title = escape_html(MAP_TITLE),
        leaflet = LEAFLET_VERSION,
        lat = MAP_CENTER.0,
        lon = MAP_CENTER.1,
        zoom = MAP_ZOOM,
        weight = LINE_WEIGHT,
        data = data,
    ))
}
