// Host-side tuning for the web front end: camera placement, sprite sizes and
// DOM hooks. Engine tuning lives in `backdrop_core::constants`.

// Cameras (the presets were tuned against these)
pub const NEURAL_CAMERA_Z: f32 = 8.0;
pub const NEURAL_FOV_DEG: f32 = 50.0;
pub const GALAXY_CAMERA_Z: f32 = 15.0;
pub const GALAXY_FOV_DEG: f32 = 60.0;
pub const CAMERA_ZNEAR: f32 = 0.1;
pub const CAMERA_ZFAR: f32 = 100.0;

// World-space sprite radii
pub const NODE_RADIUS: f32 = 0.055; // graph node sphere
pub const GALAXY_POINT_RADIUS: f32 = 0.025; // half the 0.05 point size
pub const MIN_SPRITE_PX: f64 = 0.5; // never draw below half a pixel

// Linear fog over galaxy points, in view depth
pub const FOG_NEAR: f32 = 10.0;
pub const FOG_FAR: f32 = 30.0;

// Strokes (CSS px)
pub const EDGE_LINE_WIDTH: f64 = 1.0;
pub const SPLASH_LINE_WIDTH: f64 = 0.5;
pub const SPLASH_GLOW_SCALE: f64 = 3.0; // halo radius relative to the dot

// Canvas clear colour for the splash (deep navy)
pub const SPLASH_BACKGROUND: [f32; 4] = [0.02, 0.03, 0.08, 1.0];

// DOM hooks
pub const VARIANT_ATTR: &str = "data-variant";
pub const BOOT_LINE_CLASS: &str = "boot-line";
pub const BOOT_LINES_ID: &str = "boot-lines";
pub const BOOT_PERCENT_ID: &str = "boot-percent";
pub const BOOT_BAR_ID: &str = "boot-bar";
pub const BOOT_COMPLETE_CLASS: &str = "complete";
pub const BOOT_LINE_PREFIX: &str = "> ";
pub const SPLASH_TITLE_ID: &str = "splash-title";
pub const SPLASH_PROGRESS_ID: &str = "splash-progress";
