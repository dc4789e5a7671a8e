pub mod consts;
pub mod error;

pub mod tuple;
pub mod spatial;

pub mod color;
pub mod canvas;
pub mod ppm;
pub mod sink;

pub mod config;
pub mod cannon;

pub use error::{ RayTracerError, Result };

use crate::consts::FEQ_EPSILON;

pub fn feq(left: f64, right: f64) -> bool {
    (left - right).abs() < FEQ_EPSILON
}
