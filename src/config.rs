//! Configuration for the virtual cannon.

use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use serde::{ Serialize, Deserialize };

use crate::tuple::Tuple4D;
use crate::color::Color;
use crate::error::Result;
use crate::consts::{
    CANNON_CANVAS_WIDTH, CANNON_CANVAS_HEIGHT, CANNON_LAUNCH_SPEED,
    CANNON_MAX_TICKS, CANNON_OUT_DIR, CANNON_OUT_FILE,
};

/// Launch parameters, environment and output settings for the cannon.
///
/// Positions and directions are JSON arrays of three numbers; `trail_color`
/// is an RGB array. Missing fields fall back to their defaults:
///
/// ```json
/// {
///     "canvas_width": 900,
///     "canvas_height": 550,
///     "start": [0.0, 1.0, 0.0],
///     "direction": [1.0, 1.8, 0.0],
///     "speed": 11.25,
///     "gravity": [0.0, -0.1, 0.0],
///     "wind": [-0.01, 0.0, 0.0],
///     "trail_color": [0.0, 1.0, 0.0],
///     "output_dir": "images",
///     "file_name": "virtual_cannon.ppm",
///     "max_ticks": 10000
/// }
/// ```
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CannonConfig {
    pub canvas_width: usize,
    pub canvas_height: usize,

    pub start: [f64; 3],
    pub direction: [f64; 3],
    pub speed: f64,

    pub gravity: [f64; 3],
    pub wind: [f64; 3],

    pub trail_color: Vec<f64>,

    pub output_dir: String,
    pub file_name: String,

    /// Upper bound on simulation steps, in case the projectile never lands.
    pub max_ticks: usize,
}

impl Default for CannonConfig {
    fn default() -> Self {
        Self {
            canvas_width: CANNON_CANVAS_WIDTH,
            canvas_height: CANNON_CANVAS_HEIGHT,
            start: [0.0, 1.0, 0.0],
            direction: [1.0, 1.8, 0.0],
            speed: CANNON_LAUNCH_SPEED,
            gravity: [0.0, -0.1, 0.0],
            wind: [-0.01, 0.0, 0.0],
            trail_color: vec![0.0, 1.0, 0.0],
            output_dir: CANNON_OUT_DIR.to_string(),
            file_name: CANNON_OUT_FILE.to_string(),
            max_ticks: CANNON_MAX_TICKS,
        }
    }
}

impl CannonConfig {
    /// Reads a configuration from a JSON file.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let reader = BufReader::new(File::open(path)?);
        Ok(serde_json::from_reader(reader)?)
    }

    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn start_point(&self) -> Tuple4D {
        let [x, y, z] = self.start;
        Tuple4D::point(x, y, z)
    }

    pub fn launch_direction(&self) -> Tuple4D {
        let [x, y, z] = self.direction;
        Tuple4D::vector(x, y, z)
    }

    pub fn gravity_vector(&self) -> Tuple4D {
        let [x, y, z] = self.gravity;
        Tuple4D::vector(x, y, z)
    }

    pub fn wind_vector(&self) -> Tuple4D {
        let [x, y, z] = self.wind;
        Tuple4D::vector(x, y, z)
    }

    pub fn color(&self) -> Color {
        (&self.trail_color).into()
    }
}

#[test]
fn empty_json_gives_defaults() {
    let config = CannonConfig::from_json("{}").unwrap();

    assert_eq!(config, CannonConfig::default());
    assert_eq!(config.start_point(), Tuple4D::point(0.0, 1.0, 0.0));
    assert_eq!(config.color(), Color::green());
}

#[test]
fn partial_json_overrides_fields() {
    let json = r#"{
        "canvas_width": 300,
        "wind": [0.0, 0.0, 0.5],
        "trail_color": [1.0, 0.5]
    }"#;
    let config = CannonConfig::from_json(json).unwrap();

    assert_eq!(config.canvas_width, 300);
    assert_eq!(config.canvas_height, CANNON_CANVAS_HEIGHT);
    assert_eq!(config.wind_vector(), Tuple4D::vector(0.0, 0.0, 0.5));
    assert!(config.wind_vector().is_vector());
    assert_eq!(config.color(), Color::rgb(1.0, 0.5, 0.0));
}

#[test]
fn malformed_json_fails() {
    let result = CannonConfig::from_json(r#"{ "start": [1.0, 2.0] }"#);

    assert!(matches!(result, Err(crate::error::RayTracerError::Config(_))));
}

#[test]
fn missing_file_fails() {
    let result = CannonConfig::from_file("/definitely/not/here/cannon.json");

    assert!(matches!(result, Err(crate::error::RayTracerError::Io(_))));
}
