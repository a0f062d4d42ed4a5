use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::{Html, IntoResponse, Json, Response},
    routing::get,
    Router,
};
use serde_json::{json, Value};
use std::net::SocketAddr;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use tokio::net::TcpListener;

pub fn scenario_payload() -> Value {
    json!({
        "features": [{
            "geometry": { "type": "Point", "coordinates": [500, 400] },
            "properties": { "label": "A" }
        }]
    })
}

/// Three points interleaved with two non-point geometries.
pub fn mixed_payload() -> Value {
    json!({
        "type": "FeatureCollection",
        "features": [
            { "type": "Feature", "geometry": { "type": "Polygon", "coordinates": [[[0, 0], [5, 0], [5, 5], [0, 0]]] }, "properties": { "zone": "lobby" } },
            { "type": "Feature", "geometry": { "type": "Point", "coordinates": [100, 200] }, "properties": { "name": "Sensor-1", "active": true } },
            { "type": "Feature", "geometry": { "type": "Point", "coordinates": [300, 50] }, "properties": null },
            { "type": "Feature", "geometry": { "type": "LineString", "coordinates": [[0, 0], [9, 9]] } },
            { "type": "Feature", "geometry": { "type": "Point", "coordinates": [1599, 1999] }, "properties": { "battery": 87 } }
        ]
    })
}

async fn devices(State(hits): State<Arc<AtomicUsize>>, Path(floor): Path<String>) -> Response {
    hits.fetch_add(1, Ordering::SeqCst);
    match floor.as_str() {
        "1F" => Json(scenario_payload()).into_response(),
        "mixed" => Json(mixed_payload()).into_response(),
        "empty" => Json(json!({})).into_response(),
        "html" => Html("<html><body>maintenance</body></html>").into_response(),
        _ => (StatusCode::NOT_FOUND, Json(json!({ "error": "not_found" }))).into_response(),
    }
}

/// Stub device backend on an ephemeral port. Returns its address and a
/// counter of feed requests served.
pub async fn spawn_backend() -> (SocketAddr, Arc<AtomicUsize>) {
    let hits = Arc::new(AtomicUsize::new(0));
    let app = Router::new()
        .route("/api/floors/:floor/devices", get(devices))
        .with_state(hits.clone());

    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });
    (addr, hits)
}

pub fn feed_url(addr: SocketAddr, floor: &str) -> String {
    format!("http://{addr}/api/floors/{floor}/devices")
}
