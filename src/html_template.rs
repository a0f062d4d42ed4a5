use axum::response::Html;
use serde::Serialize;

use crate::settings::Settings;

/// Everything the browser needs to set up the simple CRS map. Inlined into
/// the page and served at `/api/plane`.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PlaneConfig {
    pub width: u32,
    pub height: u32,
    pub bounds: [[f64; 2]; 2],
    pub min_zoom: i32,
    pub max_zoom: i32,
    pub initial_zoom: i32,
    pub floor_id: String,
    pub image_url: &'static str,
}

impl PlaneConfig {
    pub fn from_settings(settings: &Settings) -> Self {
        let plane = settings.plane();
        PlaneConfig {
            width: plane.width(),
            height: plane.height(),
            bounds: plane.bounds(),
            min_zoom: settings.min_zoom,
            max_zoom: settings.max_zoom,
            initial_zoom: settings.initial_zoom,
            floor_id: settings.floor_id.clone(),
            image_url: "/floor-image",
        }
    }
}

/// Map page with the client configuration inlined.
pub fn get_map_html(settings: &Settings) -> Html<String> {
    let config = serde_json::to_string(&PlaneConfig::from_settings(settings))
        .unwrap_or_else(|_| "{}".to_string());
    // `</` would end the inline script early
    let config = config.replace("</", "<\\/");

    let html = MAP_HTML
        .replace("<!-- FLOOR_PLACEHOLDER -->", &settings.floor_id)
        .replace("/* CONFIG_PLACEHOLDER */", &config);
    Html(html)
}

// HTML template for the floor map page
const MAP_HTML: &str = r#"<!DOCTYPE html>
<html lang="en">
<head>
    <meta charset="UTF-8">
    <meta name="viewport" content="width=device-width, initial-scale=1.0">
    <title>FloorMap - <!-- FLOOR_PLACEHOLDER --></title>
    <link rel="stylesheet" href="https://unpkg.com/leaflet@1.9.4/dist/leaflet.css" />
    <link rel="stylesheet" href="/style.css" />
</head>
<body>
    <div id="map"></div>

    <script src="https://unpkg.com/leaflet@1.9.4/dist/leaflet.js"></script>
    <script>window.FLOORMAP = /* CONFIG_PLACEHOLDER */;</script>
    <script src="/script.js"></script>
</body>
</html>
"#;
