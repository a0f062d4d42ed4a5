// Port configuration
pub const DEFAULT_PORT: u16 = 3001;

// Plane size of the floor-plan asset currently in use (pixels)
pub const PLANE_WIDTH: u32 = 1600;
pub const PLANE_HEIGHT: u32 = 2000;

// Leaflet zoom levels for the simple CRS. Negative zoom shrinks the image.
pub const MIN_ZOOM: i32 = -1;
pub const MAX_ZOOM: i32 = 3;
pub const INITIAL_ZOOM: i32 = 0;

// Backend feed. `{floor}` is replaced with the floor id.
pub const DEFAULT_FEED_URL: &str = "http://127.0.0.1:8000/api/floors/{floor}/devices";
pub const FLOOR_PLACEHOLDER: &str = "{floor}";
pub const DEFAULT_FLOOR_ID: &str = "1F";
pub const MAX_FLOOR_ID_LEN: usize = 64;

pub const DEFAULT_FLOOR_IMAGE: &str = "floor.svg";
pub const CONFIG_FILE_NAME: &str = "floormap.ini";
