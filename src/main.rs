use anyhow::{Context, Result};
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

use floormap::feed::resolve_endpoint;
use floormap::server::{start_server, AppState};
use floormap::settings::Settings;

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    info!("🗺️  FloorMap v{} starting...", env!("CARGO_PKG_VERSION"));

    let settings = Settings::load().context("Failed to load settings")?;
    info!("⚙️  Config: {}", Settings::config_path().display());
    info!(
        "   Plane {}x{}, floor {}",
        settings.plane_width, settings.plane_height, settings.floor_id
    );
    info!(
        "   Feed {}",
        resolve_endpoint(&settings.feed_url, &settings.floor_id)
    );
    if !settings.floor_image.exists() {
        warn!(
            "Floor image {} not found, the map will have no background",
            settings.floor_image.display()
        );
    }

    start_server(AppState::new(settings)).await
}
