//! Pixel-based plane the floor image is rendered into.
//!
//! The plane is not georeferenced: `(0, 0)` is the bottom-left corner of the
//! image and one unit is one pixel. Leaflet's simple CRS addresses points as
//! `[lat, lng]`, which on this plane means `[row, col]`, so feature
//! coordinates `(x, y)` are placed at `(y, x)`. [`project`] is the only place
//! that ordering is written down.

use serde::Serialize;

/// Rendering surface of a mounted view. Immutable once defined.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Plane {
    width: u32,
    height: u32,
}

/// Builds the plane for a floor image of `width` x `height` pixels.
///
/// Dimensions are expected to be positive; that is guaranteed by the
/// configuration layer and not checked here.
pub const fn define_plane(width: u32, height: u32) -> Plane {
    Plane { width, height }
}

impl Plane {
    pub const fn width(&self) -> u32 {
        self.width
    }

    pub const fn height(&self) -> u32 {
        self.height
    }

    /// `[[0, 0], [height, width]]`, in `[row, col]` order.
    pub fn bounds(&self) -> [[f64; 2]; 2] {
        [[0.0, 0.0], [f64::from(self.height), f64::from(self.width)]]
    }

    pub fn contains(&self, position: PlanePosition) -> bool {
        (0.0..=f64::from(self.height)).contains(&position.row)
            && (0.0..=f64::from(self.width)).contains(&position.col)
    }
}

/// Render position on the plane. Serialized as `[row, col]`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(into = "[f64; 2]")]
pub struct PlanePosition {
    pub row: f64,
    pub col: f64,
}

impl From<PlanePosition> for [f64; 2] {
    fn from(position: PlanePosition) -> Self {
        [position.row, position.col]
    }
}

/// Maps feature coordinates `(x, y)` to the plane position `(y, x)`.
pub fn project(x: f64, y: f64) -> PlanePosition {
    PlanePosition { row: y, col: x }
}

/// Inverse of [`project`].
pub fn unproject(position: PlanePosition) -> (f64, f64) {
    (position.col, position.row)
}
