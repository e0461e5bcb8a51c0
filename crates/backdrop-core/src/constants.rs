use glam::Vec2;
use std::f32::consts::PI;

// Shared visual tuning constants for the backdrop variants.

// Neural (node-link) field
pub const NEURAL_NODE_COUNT: usize = 60;
pub const NEURAL_EXTENT: [f32; 3] = [14.0, 9.0, 4.0]; // box the nodes are scattered in
pub const NEURAL_EDGE_THRESHOLD: f32 = 3.2; // max base distance for a connecting line
pub const NEURAL_POINTER_EXTENT: Vec2 = Vec2::new(7.0, 4.5); // NDC -> world scale
pub const NEURAL_POINTER_RADIUS: f32 = 4.0;
pub const NEURAL_PUSH_STRENGTH: f32 = 0.12;
pub const NEURAL_FLOAT_X: (f32, f32, f32) = (0.15, 0.25, 0.6); // amplitude, frequency, phase scale
pub const NEURAL_FLOAT_Y: (f32, f32, f32) = (0.18, 0.35, 1.0);
pub const NEURAL_PULSE_FREQUENCY: f32 = 1.8;
pub const NEURAL_PULSE_AMPLITUDE: f32 = 0.3;
pub const NEURAL_PROXIMITY_BOOST: f32 = 1.2; // extra scale at full pointer influence

pub const NEURAL_NODE_COLOR: [f32; 3] = [0.13, 0.83, 0.93]; // cyan
pub const NEURAL_NODE_ACCENT: [f32; 3] = [0.96, 0.63, 0.43]; // warm glow near the pointer
pub const NEURAL_EDGE_COLOR: [f32; 3] = [0.08, 0.45, 0.55]; // dim cyan
pub const NEURAL_EDGE_ACCENT: [f32; 3] = [0.96, 0.82, 0.25]; // amber
pub const NEURAL_EDGE_OPACITY: f32 = 0.3;
pub const NEURAL_NODE_OPACITY: f32 = 0.9;

// Galaxy (scroll morph) field
pub const GALAXY_PARTICLE_COUNT: usize = 2000;
pub const GALAXY_EXTENT: [f32; 3] = [20.0, 20.0, 10.0];
pub const GALAXY_DISC_RADIUS: f32 = 10.0;
pub const GALAXY_DISC_THICKNESS: f32 = 2.0;
pub const GALAXY_SPIRAL_TWIST: f32 = 2.0; // radians of extra angle per unit radius
pub const GALAXY_WOBBLE: (f32, f32) = (0.1, 2.0); // amplitude, frequency
pub const GALAXY_SPIN_RATE: f32 = 0.05; // radians/sec around Y
pub const GALAXY_SCROLL_SPIN: f32 = PI; // extra Y rotation at full scroll
pub const GALAXY_SCROLL_TILT: f32 = 0.5; // X rotation at full scroll
pub const GALAXY_OPACITY: f32 = 0.8;

// Brand palette
pub const BRAND_CYAN: [f32; 3] = [0.0, 150.0 / 255.0, 1.0]; // #0096FF
pub const BRAND_AMBER: [f32; 3] = [1.0, 107.0 / 255.0, 53.0 / 255.0]; // #FF6B35

// Above this many particles the topology builder buckets points into a grid
pub const GRID_EDGE_CUTOFF: usize = 512;

// Boot sequencer timing (milliseconds)
pub const BOOT_LINE_INTERVAL_MS: u64 = 400;
pub const BOOT_PROGRESS_INTERVAL_MS: u64 = 300;
pub const BOOT_PROGRESS_STEP: (u32, u32) = (5, 20); // half-open increment range
pub const BOOT_MIN_DURATION_MS: u64 = 2500;
pub const BOOT_SETTLE_MS: u64 = 500; // added after the longer of lines/min duration
pub const BOOT_EXIT_MS: u64 = 1200; // exit animation before the completion callback

pub const BOOT_MESSAGES: [&str; 6] = [
    "INITIALIZING QUANTUM CORE...",
    "LOADING NEURAL PATHWAYS...",
    "SYNCING WITH SATELLITE T-89...",
    "DECRYPTING PORTFOLIO DATA...",
    "ESTABLISHING CONNECTION...",
    "PORTFOLIO.ENV LOADED.",
];

// Network splash
pub const SPLASH_LAYERS: [usize; 5] = [3, 5, 7, 5, 3];
pub const SPLASH_BUILD_MS: u64 = 2800;
pub const SPLASH_DISSOLVE_MS: u64 = 500;
pub const SPLASH_SCATTER_PX: f32 = 200.0; // start positions spread around the centre
pub const SPLASH_EDGE_PROBABILITY: f64 = 0.6;
pub const SPLASH_SIGNAL_PERIOD_MS: u64 = 1500;
pub const SPLASH_SIGNAL_EVERY: usize = 3; // every n-th edge carries a signal dot
pub const SPLASH_OUTER_RADIUS: f32 = 3.0;
pub const SPLASH_INNER_RADIUS: f32 = 2.5;
pub const SPLASH_AMBER: [f32; 3] = [245.0 / 255.0, 158.0 / 255.0, 11.0 / 255.0];
pub const SPLASH_BLUE: [f32; 3] = [59.0 / 255.0, 130.0 / 255.0, 246.0 / 255.0];

// Typewriter (milliseconds)
pub const TYPE_STEP_MS: u64 = 80;
pub const DELETE_STEP_MS: u64 = 50;
pub const PAUSE_AFTER_TYPING_MS: u64 = 2000;
pub const PAUSE_AFTER_DELETING_MS: u64 = 400;
pub const DEFAULT_ROLES: [&str; 3] = ["AI Engineer", "Data Scientist", "Big Data Engineer"];

// Count-up
pub const COUNT_UP_MS: u64 = 1800;
