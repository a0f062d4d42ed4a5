use axum::{
    extract::{Query, State},
    http::{header, StatusCode},
    response::{Html, IntoResponse, Json, Response},
};
use rust_embed::RustEmbed;
use serde::{Deserialize, Serialize};
use tracing::{error, warn};

use crate::feed::{is_valid_floor_id, resolve_endpoint};
use crate::html_template::{get_map_html, PlaneConfig};
use crate::overlay::{FeatureOverlay, MarkerView};

use super::state::AppState;

#[derive(RustEmbed)]
#[folder = "frontend/"]
struct Asset;

fn embedded_asset(name: &str, content_type: &'static str) -> Result<Response, StatusCode> {
    let asset = Asset::get(name).ok_or_else(|| {
        error!("Embedded asset {name} is missing");
        StatusCode::INTERNAL_SERVER_ERROR
    })?;
    Ok(([(header::CONTENT_TYPE, content_type)], asset.data.into_owned()).into_response())
}

pub async fn index_html(State(state): State<AppState>) -> Html<String> {
    get_map_html(&state.settings)
}

pub async fn style_css() -> Result<Response, StatusCode> {
    embedded_asset("style.css", "text/css")
}

pub async fn script_js() -> Result<Response, StatusCode> {
    embedded_asset("script.js", "application/javascript")
}

pub async fn get_plane(State(state): State<AppState>) -> Json<PlaneConfig> {
    Json(PlaneConfig::from_settings(&state.settings))
}

#[derive(Debug, Deserialize)]
pub struct OverlayQuery {
    pub floor: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct OverlayResponse {
    pub floor: String,
    pub state: &'static str,
    pub markers: Vec<MarkerView>,
}

/// One mount of the overlay: a fresh controller fetches the feed once and
/// the resulting markers are returned. A failed feed still answers 200 with
/// no markers so the page keeps showing the bare floor plan.
pub async fn get_overlay(
    State(state): State<AppState>,
    Query(query): Query<OverlayQuery>,
) -> Result<Json<OverlayResponse>, StatusCode> {
    let floor = query
        .floor
        .unwrap_or_else(|| state.settings.floor_id.clone());
    if !is_valid_floor_id(&floor) {
        warn!("Rejected overlay request for floor {floor:?}");
        return Err(StatusCode::BAD_REQUEST);
    }

    let endpoint = resolve_endpoint(&state.settings.feed_url, &floor);
    let mut overlay = FeatureOverlay::mount(state.plane);
    let markers: Vec<MarkerView> = overlay
        .load_and_render(&state.http, &endpoint)
        .await
        .iter()
        .map(|marker| marker.view())
        .collect();

    Ok(Json(OverlayResponse {
        floor,
        state: overlay.state().name(),
        markers,
    }))
}

pub async fn health() -> Json<serde_json::Value> {
    Json(serde_json::json!({ "status": "ok" }))
}
