//! Floor-plan viewer core: a pixel plane for the floor image and an overlay
//! of device markers projected from a GeoJSON feed.

pub mod constants;
pub mod feature;
pub mod feed;
pub mod html_template;
pub mod overlay;
pub mod plane;
pub mod popup;
pub mod server;
pub mod settings;
