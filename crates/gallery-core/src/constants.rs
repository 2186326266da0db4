use glam::Vec3;

// Shared layout, timing and styling constants used by the core and the web frontend.

// Wall geometry
pub const HORIZONTAL_WALL_WIDTH: f32 = 16.0; // north/south span along x
pub const VERTICAL_WALL_WIDTH: f32 = 12.0; // east/west span along z
pub const WALL_HEIGHT: f32 = 2.0; // eye-level y for every artwork

pub const NORTH_WALL_POSITION: [f32; 3] = [0.0, WALL_HEIGHT, -7.0];
pub const SOUTH_WALL_POSITION: [f32; 3] = [0.0, WALL_HEIGHT, 7.0];
pub const EAST_WALL_POSITION: [f32; 3] = [9.0, WALL_HEIGHT, 0.0];
pub const WEST_WALL_POSITION: [f32; 3] = [-9.0, WALL_HEIGHT, 0.0];

// Rotations in degrees, facing into the room
pub const NORTH_WALL_ROTATION: [f32; 3] = [0.0, 0.0, 0.0];
pub const SOUTH_WALL_ROTATION: [f32; 3] = [0.0, 180.0, 0.0];
pub const EAST_WALL_ROTATION: [f32; 3] = [0.0, -90.0, 0.0];
pub const WEST_WALL_ROTATION: [f32; 3] = [0.0, 90.0, 0.0];

// Artwork composite
pub const FRAME_DEPTH: f32 = 0.1;
pub const FRAME_COLOR: &str = "#8B4513";
pub const FRAME_MATERIAL: &str = "roughness: 0.8; metalness: 0.1";
pub const IMAGE_Z: f32 = 0.06;
pub const TITLE_Z: f32 = 0.07;
pub const TEXT_WIDTH: f32 = 6.0;
pub const TEXT_FONT: &str = "roboto";
pub const LABEL_WIDTH: f32 = 2.0;
pub const LABEL_HEIGHT: f32 = 0.4;
pub const LABEL_GAP: f32 = 0.4; // distance below the frame's bottom edge
pub const LABEL_Z: f32 = 0.02;
pub const LABEL_TEXT_Z: f32 = 0.01;
pub const LABEL_MATERIAL: &str = "roughness: 0.9";

// Hover feedback
pub const HOVER_SCALE: f32 = 1.05;
pub const CURSOR_HOVER_SCALE: f32 = 1.2;
pub const HOVER_ANIMATION_MS: u32 = 200;
pub const CURSOR_HOVER_COLOR: &str = "#ff6b6b";
pub const CURSOR_IDLE_COLOR: &str = "#32a085";

// Description panel
pub const DESCRIPTION_WRAP_WIDTH: usize = 50;
pub const AUTO_HIDE_DELAY_MS: u64 = 2000;
pub const PANEL_FADE_IN_MS: u32 = 400;
pub const PANEL_FADE_OUT_MS: u32 = 300;

// Startup
pub const LOADING_DELAY_MS: u64 = 1000;
pub const WELCOME_HIDE_DELAY_MS: u64 = 3000;
pub const WELCOME_FADE_MS: u32 = 1000;
pub const ORIENTATION_DEBOUNCE_MS: u64 = 100;

// Raycaster on the camera
pub const RAYCASTER_CONFIG: &str = "objects: .interactive; far: 20";

#[inline]
pub fn vec3(a: [f32; 3]) -> Vec3 {
    Vec3::new(a[0], a[1], a[2])
}

// Page anchors (selectors) the gallery expects the host page to provide
pub const SCENE_SELECTOR: &str = "#museum-scene";
pub const ARTWORKS_CONTAINER_SELECTOR: &str = "#artworks-container";
pub const CAMERA_SELECTOR: &str = "#main-camera";
pub const CURSOR_SELECTOR: &str = "#main-cursor";
pub const WELCOME_PANEL_SELECTOR: &str = "#welcome-panel";
pub const DESCRIPTION_PANEL_SELECTOR: &str = "#description-panel";
pub const ARTWORK_TITLE_SELECTOR: &str = "#artwork-title";
pub const ARTWORK_INFO_SELECTOR: &str = "#artwork-info";
pub const ARTWORK_DESCRIPTION_SELECTOR: &str = "#artwork-description";
pub const LOADING_OVERLAY_SELECTOR: &str = "#loading-overlay";
pub const UI_OVERLAY_SELECTOR: &str = "#ui-overlay";

// Classes and attributes set on artwork nodes
pub const INTERACTIVE_CLASS: &str = "interactive";
pub const ARTWORK_CLASS: &str = "artwork-entity";
pub const ARTWORK_DATA_ATTR: &str = "data-artwork";
pub const HIDDEN_CLASS: &str = "hidden";
