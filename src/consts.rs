// Floating point comparisons
pub const FEQ_EPSILON: f64 = 0.0001;

// PPM output
pub const PPM_MAGIC: &str = "P3";
pub const PPM_MAX_COLOR_VALUE: u8 = 255;
pub const PPM_MAX_LINE_WIDTH: usize = 70;

// Virtual cannon defaults
pub const CANNON_CANVAS_WIDTH: usize = 900;
pub const CANNON_CANVAS_HEIGHT: usize = 550;
pub const CANNON_LAUNCH_SPEED: f64 = 11.25;
pub const CANNON_MAX_TICKS: usize = 10_000;
pub const CANNON_OUT_DIR: &str = "images";
pub const CANNON_OUT_FILE: &str = "virtual_cannon.ppm";
