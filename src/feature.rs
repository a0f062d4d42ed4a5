//! GeoJSON-style device feed model.
//!
//! Decoding is deliberately forgiving: the backend payload evolves and a
//! missing `features` array, an unknown geometry kind or a single broken
//! entry must never take the whole overlay down.

use serde::de::{self, Deserializer};
use serde::Deserialize;
use serde_json::{Map, Value};
use tracing::debug;

/// Feature attributes. Keys iterate in sorted order, which keeps popups
/// stable between renders.
pub type Properties = Map<String, Value>;

/// Feature coordinates in plane pixel units. Extra ordinates (altitude) are
/// ignored.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Position {
    pub x: f64,
    pub y: f64,
}

impl<'de> Deserialize<'de> for Position {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let values = Vec::<f64>::deserialize(deserializer)?;
        match values.as_slice() {
            [x, y, ..] => Ok(Position { x: *x, y: *y }),
            _ => Err(de::Error::invalid_length(
                values.len(),
                &"at least two coordinates",
            )),
        }
    }
}

/// Geometry kinds a feed may carry. Only [`Geometry::Point`] is rendered;
/// everything else, including tags this enum has never heard of, is skipped.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(tag = "type")]
pub enum Geometry {
    Point { coordinates: Position },
    MultiPoint,
    LineString,
    MultiLineString,
    Polygon,
    MultiPolygon,
    GeometryCollection,
    #[serde(other)]
    Unsupported,
}

impl Geometry {
    /// Coordinates of a point geometry, `None` for every other kind.
    pub fn point(&self) -> Option<Position> {
        match self {
            Geometry::Point { coordinates } => Some(*coordinates),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct Feature {
    #[serde(default)]
    pub geometry: Option<Geometry>,
    #[serde(default, deserialize_with = "lenient_properties")]
    pub properties: Properties,
}

fn lenient_properties<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Properties, D::Error> {
    Ok(match Option::<Value>::deserialize(deserializer)? {
        Some(Value::Object(map)) => map,
        _ => Properties::new(),
    })
}

/// Ordered features of one feed response.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FeatureCollection {
    pub features: Vec<Feature>,
}

impl FeatureCollection {
    /// Parses a response body. Only invalid JSON is an error; any JSON shape
    /// without a `features` array is an empty collection.
    pub fn from_slice(body: &[u8]) -> serde_json::Result<Self> {
        let value: Value = serde_json::from_slice(body)?;
        Ok(Self::from_value(value))
    }

    /// Entries that cannot be decoded stay in place as geometry-less
    /// features, so a feature's index always matches its source position.
    pub fn from_value(value: Value) -> Self {
        let items = match value {
            Value::Object(mut object) => match object.remove("features") {
                Some(Value::Array(items)) => items,
                _ => Vec::new(),
            },
            _ => Vec::new(),
        };

        let features = items
            .into_iter()
            .enumerate()
            .map(|(index, item)| {
                serde_json::from_value(item).unwrap_or_else(|e| {
                    debug!("Feature #{index} is malformed, skipping: {e}");
                    Feature::default()
                })
            })
            .collect();

        FeatureCollection { features }
    }

    pub fn len(&self) -> usize {
        self.features.len()
    }

    pub fn is_empty(&self) -> bool {
        self.features.is_empty()
    }
}
