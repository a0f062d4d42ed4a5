mod common;

use floormap::server::{serve, AppState};
use floormap::settings::Settings;
use pretty_assertions::assert_eq;
use serde_json::{json, Value};
use std::net::SocketAddr;
use std::path::PathBuf;
use tokio::net::TcpListener;

use common::spawn_backend;

async fn spawn_viewer(settings: Settings) -> SocketAddr {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(serve(listener, AppState::new(settings)));
    addr
}

async fn viewer_with_backend(floor_image: PathBuf) -> SocketAddr {
    let (backend, _) = spawn_backend().await;
    spawn_viewer(Settings {
        feed_url: format!("http://{backend}/api/floors/{{floor}}/devices"),
        floor_image,
        ..Settings::default()
    })
    .await
}

async fn get_json(url: String) -> (u16, Value) {
    let response = reqwest::get(url).await.unwrap();
    let status = response.status().as_u16();
    let body = response.bytes().await.unwrap();
    (status, serde_json::from_slice(&body).unwrap_or(Value::Null))
}

#[tokio::test]
async fn overlay_uses_default_floor() {
    let addr = viewer_with_backend(PathBuf::from("floor.svg")).await;

    let (status, body) = get_json(format!("http://{addr}/api/overlay")).await;

    assert_eq!(status, 200);
    assert_eq!(
        body,
        json!({
            "floor": "1F",
            "state": "populated",
            "markers": [{
                "key": 0,
                "position": [400.0, 500.0],
                "attributes": [["label", "A"]]
            }]
        })
    );
}

#[tokio::test]
async fn overlay_for_other_floor() {
    let addr = viewer_with_backend(PathBuf::from("floor.svg")).await;

    let (status, body) = get_json(format!("http://{addr}/api/overlay?floor=mixed")).await;

    assert_eq!(status, 200);
    assert_eq!(body["state"], "populated");
    let keys: Vec<_> = body["markers"]
        .as_array()
        .unwrap()
        .iter()
        .map(|m| m["key"].as_u64().unwrap())
        .collect();
    assert_eq!(keys, vec![1, 2, 4]);
}

#[tokio::test]
async fn broken_feed_degrades_to_empty_overlay() {
    let addr = viewer_with_backend(PathBuf::from("floor.svg")).await;

    let (status, body) = get_json(format!("http://{addr}/api/overlay?floor=html")).await;

    assert_eq!(status, 200);
    assert_eq!(body, json!({ "floor": "html", "state": "failed", "markers": [] }));
}

#[tokio::test]
async fn unreachable_backend_degrades_to_empty_overlay() {
    let addr = spawn_viewer(Settings {
        feed_url: "http://127.0.0.1:9/api/floors/{floor}/devices".to_string(),
        ..Settings::default()
    })
    .await;

    let (status, body) = get_json(format!("http://{addr}/api/overlay")).await;

    assert_eq!(status, 200);
    assert_eq!(body["state"], "failed");
    assert_eq!(body["markers"], json!([]));
}

#[tokio::test]
async fn invalid_floor_is_rejected() {
    let addr = viewer_with_backend(PathBuf::from("floor.svg")).await;

    let response = reqwest::get(format!("http://{addr}/api/overlay?floor=..%2Fsecrets"))
        .await
        .unwrap();

    assert_eq!(response.status().as_u16(), 400);
}

#[tokio::test]
async fn plane_config_and_health() {
    let addr = viewer_with_backend(PathBuf::from("floor.svg")).await;

    let (_, plane) = get_json(format!("http://{addr}/api/plane")).await;
    assert_eq!(
        plane,
        json!({
            "width": 1600,
            "height": 2000,
            "bounds": [[0.0, 0.0], [2000.0, 1600.0]],
            "minZoom": -1,
            "maxZoom": 3,
            "initialZoom": 0,
            "floorId": "1F",
            "imageUrl": "/floor-image"
        })
    );

    let (status, health) = get_json(format!("http://{addr}/health")).await;
    assert_eq!(status, 200);
    assert_eq!(health, json!({ "status": "ok" }));
}

#[tokio::test]
async fn serves_page_assets_and_floor_image() {
    let image = std::env::temp_dir().join(format!("floormap-test-{}.svg", std::process::id()));
    let svg = r#"<svg xmlns="http://www.w3.org/2000/svg" width="1600" height="2000"></svg>"#;
    std::fs::write(&image, svg).unwrap();
    let addr = viewer_with_backend(image.clone()).await;

    let page = reqwest::get(format!("http://{addr}/"))
        .await
        .unwrap()
        .text()
        .await
        .unwrap();
    assert!(page.contains("window.FLOORMAP"));
    assert!(page.contains("/script.js"));

    let script = reqwest::get(format!("http://{addr}/script.js")).await.unwrap();
    assert_eq!(script.status().as_u16(), 200);
    assert!(script.text().await.unwrap().contains("L.CRS.Simple"));

    let floor = reqwest::get(format!("http://{addr}/floor-image")).await.unwrap();
    assert_eq!(floor.status().as_u16(), 200);
    assert_eq!(floor.text().await.unwrap(), svg);

    std::fs::remove_file(&image).ok();
}
