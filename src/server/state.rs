use std::sync::Arc;

use crate::plane::Plane;
use crate::settings::Settings;

// Application state shared by all handlers. Read-only after startup.
#[derive(Clone)]
pub struct AppState {
    pub settings: Arc<Settings>,
    pub plane: Plane,
    pub http: reqwest::Client,
}

impl AppState {
    pub fn new(settings: Settings) -> Self {
        Self {
            plane: settings.plane(),
            settings: Arc::new(settings),
            http: reqwest::Client::new(),
        }
    }
}
