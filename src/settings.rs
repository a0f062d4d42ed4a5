use anyhow::{Context, Result};
use std::collections::HashMap;
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::{Path, PathBuf};
use std::str::FromStr;
use tracing::warn;

use crate::constants::{
    CONFIG_FILE_NAME, DEFAULT_FEED_URL, DEFAULT_FLOOR_ID, DEFAULT_FLOOR_IMAGE, DEFAULT_PORT,
    INITIAL_ZOOM, MAX_ZOOM, MIN_ZOOM, PLANE_HEIGHT, PLANE_WIDTH,
};
use crate::feed::is_valid_floor_id;
use crate::plane::{define_plane, Plane};

#[derive(Debug, Clone, PartialEq)]
pub struct Settings {
    pub port: u16,
    pub feed_url: String,
    pub floor_id: String,
    pub floor_image: PathBuf,
    pub plane_width: u32,
    pub plane_height: u32,
    pub min_zoom: i32,
    pub max_zoom: i32,
    pub initial_zoom: i32,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            port: DEFAULT_PORT,
            feed_url: DEFAULT_FEED_URL.to_string(),
            floor_id: DEFAULT_FLOOR_ID.to_string(),
            floor_image: PathBuf::from(DEFAULT_FLOOR_IMAGE),
            plane_width: PLANE_WIDTH,
            plane_height: PLANE_HEIGHT,
            min_zoom: MIN_ZOOM,
            max_zoom: MAX_ZOOM,
            initial_zoom: INITIAL_ZOOM,
        }
    }
}

fn parse_into<T: FromStr>(config_map: &HashMap<String, String>, key: &str, target: &mut T) {
    if let Some(raw) = config_map.get(key) {
        match raw.parse::<T>() {
            Ok(value) => *target = value,
            Err(_) => warn!("Ignoring invalid {key} = {raw:?} in config"),
        }
    }
}

impl Settings {
    pub fn load() -> Result<Self> {
        Self::load_from(&Self::config_path())
    }

    /// Reads `key = value` lines. A missing file means defaults; unknown
    /// keys are ignored and unparsable values keep their default.
    pub fn load_from(config_path: &Path) -> Result<Self> {
        let mut settings = Settings::default();
        if !config_path.exists() {
            return Ok(settings);
        }

        let file = File::open(config_path).context("Failed to open config file")?;
        let reader = BufReader::new(file);
        let mut config_map = HashMap::new();

        for line in reader.lines() {
            let line = line.context("Failed to read line from config")?;
            let line = line.trim();
            if line.starts_with('#') || line.is_empty() {
                continue;
            }
            if let Some((key, value)) = line.split_once('=') {
                config_map.insert(
                    key.trim().to_string(),
                    value.trim().trim_matches('"').to_string(),
                );
            }
        }

        parse_into(&config_map, "port", &mut settings.port);
        parse_into(&config_map, "min_zoom", &mut settings.min_zoom);
        parse_into(&config_map, "max_zoom", &mut settings.max_zoom);
        parse_into(&config_map, "initial_zoom", &mut settings.initial_zoom);

        if let Some(feed_url) = config_map.get("feed_url") {
            settings.feed_url = feed_url.clone();
        }
        if let Some(floor_image) = config_map.get("floor_image") {
            settings.floor_image = PathBuf::from(floor_image);
        }
        if let Some(floor_id) = config_map.get("floor_id") {
            if is_valid_floor_id(floor_id) {
                settings.floor_id = floor_id.clone();
            } else {
                warn!("Ignoring invalid floor_id = {floor_id:?} in config");
            }
        }

        // The plane needs positive dimensions
        for (key, target) in [
            ("plane_width", &mut settings.plane_width),
            ("plane_height", &mut settings.plane_height),
        ] {
            let mut value = *target;
            parse_into(&config_map, key, &mut value);
            if value > 0 {
                *target = value;
            } else {
                warn!("Ignoring {key} = 0 in config");
            }
        }

        Ok(settings)
    }

    pub fn plane(&self) -> Plane {
        define_plane(self.plane_width, self.plane_height)
    }

    pub fn config_path() -> PathBuf {
        let mut path = std::env::current_exe()
            .unwrap_or_default()
            .parent()
            .unwrap_or_else(|| Path::new("."))
            .to_path_buf();

        if path.ends_with("target/debug") || path.ends_with("target/release") {
            path.pop();
            path.pop();
        }
        path.push(CONFIG_FILE_NAME);
        path
    }
}
