//! Error types for the tuple algebra, the canvas and PPM output.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum RayTracerError {
    /// A geometrically meaningless combination, such as adding two points.
    #[error("Invalid operation: {0}")]
    InvalidOperation(String),

    #[error("Division by zero")]
    DivisionByZero,

    #[error("Pixel ({x}, {y}) is outside of the {width}x{height} canvas")]
    OutOfRange {
        x: usize,
        y: usize,
        width: usize,
        height: usize,
    },

    #[error("Canvas dimensions must be positive, got {width}x{height}")]
    EmptyCanvas {
        width: usize,
        height: usize,
    },

    #[error("Canvas of {width}x{height} pixels does not fit in memory")]
    TooLarge {
        width: usize,
        height: usize,
    },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Configuration error: {0}")]
    Config(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, RayTracerError>;
