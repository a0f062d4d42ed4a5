//! Feature overlay: one feed fetch per mount, projected into markers.
//!
//! A mount is one [`FeatureOverlay`] value. It starts `Idle`, goes through
//! `Fetching` exactly once and ends `Populated` or `Failed`. Mounts share
//! nothing, so two overlapping mounts simply run to completion independently.

use serde::Serialize;
use tracing::{debug, info, warn};

use crate::feature::{FeatureCollection, Geometry, Properties};
use crate::feed::fetch_feature_collection;
use crate::plane::{project, Plane, PlanePosition};
use crate::popup::attribute_entries;

/// A feature placed on the plane, ready to render.
#[derive(Debug, Clone, PartialEq)]
pub struct PlacedMarker {
    /// Index of the feature in the source collection. Positions may collide,
    /// keys never do.
    pub key: usize,
    pub position: PlanePosition,
    pub properties: Properties,
}

impl PlacedMarker {
    /// Popup rows for this marker.
    pub fn attributes(&self) -> Vec<(String, String)> {
        attribute_entries(&self.properties)
    }

    pub fn view(&self) -> MarkerView {
        MarkerView {
            key: self.key,
            position: self.position,
            attributes: self.attributes(),
        }
    }
}

/// Browser-facing form of a marker.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MarkerView {
    pub key: usize,
    pub position: PlanePosition,
    pub attributes: Vec<(String, String)>,
}

#[derive(Debug, Clone, PartialEq)]
pub enum OverlayState {
    Idle,
    Fetching,
    Populated(Vec<PlacedMarker>),
    Failed(String),
}

impl OverlayState {
    pub fn name(&self) -> &'static str {
        match self {
            OverlayState::Idle => "idle",
            OverlayState::Fetching => "fetching",
            OverlayState::Populated(_) => "populated",
            OverlayState::Failed(_) => "failed",
        }
    }
}

/// Projects every point feature onto `plane`; other geometries are skipped.
pub fn place_markers(plane: &Plane, collection: &FeatureCollection) -> Vec<PlacedMarker> {
    collection
        .features
        .iter()
        .enumerate()
        .filter_map(|(key, feature)| {
            let coordinates = feature.geometry.as_ref().and_then(Geometry::point)?;
            let position = project(coordinates.x, coordinates.y);
            if !plane.contains(position) {
                debug!("Marker #{key} at {position:?} lies outside the plane");
            }
            Some(PlacedMarker {
                key,
                position,
                properties: feature.properties.clone(),
            })
        })
        .collect()
}

#[derive(Debug)]
pub struct FeatureOverlay {
    plane: Plane,
    state: OverlayState,
}

impl FeatureOverlay {
    pub fn mount(plane: Plane) -> Self {
        Self {
            plane,
            state: OverlayState::Idle,
        }
    }

    pub fn state(&self) -> &OverlayState {
        &self.state
    }

    /// Current render set. Empty in every state but `Populated`.
    pub fn markers(&self) -> &[PlacedMarker] {
        match &self.state {
            OverlayState::Populated(markers) => markers,
            _ => &[],
        }
    }

    /// Fetches `endpoint` once and replaces the render set with the result.
    ///
    /// Never fails: transport and parse errors are logged and leave the
    /// overlay `Failed` with no markers. A mount that already fetched
    /// returns its render set without issuing another request.
    pub async fn load_and_render(
        &mut self,
        client: &reqwest::Client,
        endpoint: &str,
    ) -> &[PlacedMarker] {
        if self.state != OverlayState::Idle {
            debug!("Overlay already {}, not fetching again", self.state.name());
            return self.markers();
        }

        self.state = OverlayState::Fetching;
        self.state = match fetch_feature_collection(client, endpoint).await {
            Ok(collection) => {
                let markers = place_markers(&self.plane, &collection);
                info!(
                    "📍 {} markers from {} features ({endpoint})",
                    markers.len(),
                    collection.len()
                );
                OverlayState::Populated(markers)
            }
            Err(e) => {
                warn!("Failed to load device feed: {e:#}");
                OverlayState::Failed(format!("{e:#}"))
            }
        };

        self.markers()
    }
}
