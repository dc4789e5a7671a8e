use std::mem::size_of;
use std::slice::Chunks;

use crate::color::Color;
use crate::error::{ RayTracerError, Result };

/// A canvas for drawing pixels.
///
/// The canvas owns a fixed-size grid of colors. Every cell starts out black,
/// so an unpainted pixel and a pixel painted black are indistinguishable.
/// Once painting is done, a `PpmEncoder` turns the canvas into an image file.
///
/// The dimensions are fixed at creation.
#[derive(Clone, Debug, PartialEq)]
pub struct Canvas {
    width: usize,
    height: usize,

    /// The pixels of the canvas, stored as a flattened, row-major vector.
    pixels: Vec<Color>,
}

impl Canvas {
    /// Creates a new, all-black canvas with specified width and height.
    ///
    /// Both dimensions must be positive, and the pixel buffer must be
    /// addressable; otherwise `RayTracerError::TooLarge` is returned.
    pub fn new(width: usize, height: usize) -> Result<Canvas> {
        if width == 0 || height == 0 {
            return Err(RayTracerError::EmptyCanvas { width, height });
        }

        let len = width.checked_mul(height)
            .filter(|len| {
                len.checked_mul(size_of::<Color>())
                    .map_or(false, |bytes| bytes <= isize::MAX as usize)
            })
            .ok_or(RayTracerError::TooLarge { width, height })?;

        Ok(Canvas {
            width,
            height,
            pixels: vec![Color::black(); len]
        })
    }

    /// The width of the canvas, in pixels.
    pub fn width(&self) -> usize {
        self.width
    }

    /// The height of the canvas, in pixels.
    pub fn height(&self) -> usize {
        self.height
    }

    /// Writes a color to a location on the `Canvas`.
    ///
    /// `x` is the column and `y` the row of the pixel, both zero-indexed, with
    /// row `0` at the top. Any previous color at that location is replaced.
    /// Out-of-bounds locations are rejected and leave the canvas untouched.
    ///
    /// # Examples
    ///
    /// Writing a pixel to the fourth column, second row on an 8-by-8 canvas:
    ///
    /// ```
    /// # use ray_tracer_canvas::color::Color;
    /// # use ray_tracer_canvas::canvas::Canvas;
    /// let purple = Color::rgb(1.0, 0.0, 1.0);
    /// let mut canvas = Canvas::new(8, 8).unwrap();
    /// canvas.write_pixel(4, 2, &purple).unwrap();
    /// assert_eq!(canvas.read_pixel(4, 2).unwrap(), purple);
    /// assert!(canvas.write_pixel(8, 2, &purple).is_err());
    /// ```
    pub fn write_pixel(&mut self, x: usize, y: usize, pixel: &Color)
        -> Result<()> {
        let index = self.index_of(x, y)?;
        log::trace!("Writing pixel ({}, {}) = {:?}", x, y, pixel);

        self.pixels[index] = *pixel;
        Ok(())
    }

    /// Reads a color from a location on the `Canvas`.
    ///
    /// Unpainted pixels read as black. See `write_pixel` for the coordinate
    /// convention.
    pub fn read_pixel(&self, x: usize, y: usize) -> Result<Color> {
        let index = self.index_of(x, y)?;
        Ok(self.pixels[index])
    }

    /// Iterates over the rows of the canvas, top row first.
    pub fn rows(&self) -> Chunks<'_, Color> {
        self.pixels.chunks(self.width)
    }

    fn index_of(&self, x: usize, y: usize) -> Result<usize> {
        if x >= self.width || y >= self.height {
            return Err(RayTracerError::OutOfRange {
                x,
                y,
                width: self.width,
                height: self.height,
            });
        }

        Ok((y * self.width) + x)
    }
}

#[test]
fn new_canvas_dimensions() {
    let canvas = Canvas::new(10, 20).unwrap();

    assert_eq!(canvas.width(), 10);
    assert_eq!(canvas.height(), 20);
}

#[test]
fn new_canvas_is_black() {
    let canvas = Canvas::new(10, 20).unwrap();

    for y in 0..20 {
        for x in 0..10 {
            assert_eq!(canvas.read_pixel(x, y).unwrap(), Color::black());
        }
    }
}

#[test]
fn empty_canvas_fails() {
    assert!(matches!(Canvas::new(0, 5),
        Err(RayTracerError::EmptyCanvas { width: 0, height: 5 })));
    assert!(matches!(Canvas::new(5, 0),
        Err(RayTracerError::EmptyCanvas { .. })));
}

#[test]
fn oversized_canvas_fails() {
    assert!(matches!(Canvas::new(usize::MAX, 2),
        Err(RayTracerError::TooLarge { width: usize::MAX, height: 2 })));
    assert!(matches!(Canvas::new(2, usize::MAX / 2),
        Err(RayTracerError::TooLarge { .. })));
    assert!(matches!(Canvas::new(usize::MAX / 4, 2),
        Err(RayTracerError::TooLarge { .. })));
}

#[test]
fn write_and_read_pixels() {
    let mut canvas = Canvas::new(2, 2).unwrap();
    canvas.write_pixel(0, 0, &Color::red()).unwrap();
    canvas.write_pixel(0, 1, &Color::green()).unwrap();
    canvas.write_pixel(1, 1, &Color::blue()).unwrap();

    assert_eq!(canvas.read_pixel(0, 0).unwrap(), Color::red());
    assert_eq!(canvas.read_pixel(1, 0).unwrap(), Color::black());
    assert_eq!(canvas.read_pixel(0, 1).unwrap(), Color::green());
    assert_eq!(canvas.read_pixel(1, 1).unwrap(), Color::blue());
}

#[test]
fn last_write_wins() {
    let mut canvas = Canvas::new(3, 3).unwrap();
    canvas.write_pixel(1, 2, &Color::red()).unwrap();
    canvas.write_pixel(1, 2, &Color::rgb(0.25, 0.5, 0.75)).unwrap();

    assert_eq!(canvas.read_pixel(1, 2).unwrap(), Color::rgb(0.25, 0.5, 0.75));
}

#[test]
fn write_out_of_bounds_fails() {
    let mut canvas = Canvas::new(1, 1).unwrap();
    let before = canvas.clone();

    assert!(matches!(canvas.write_pixel(1, 1, &Color::red()),
        Err(RayTracerError::OutOfRange { x: 1, y: 1, width: 1, height: 1 })));
    assert!(canvas.write_pixel(1, 0, &Color::red()).is_err());
    assert!(canvas.write_pixel(0, 1, &Color::red()).is_err());
    assert_eq!(canvas, before);
}

#[test]
fn read_out_of_bounds_fails() {
    let canvas = Canvas::new(10, 20).unwrap();

    assert!(canvas.read_pixel(10, 0).is_err());
    assert!(canvas.read_pixel(0, 20).is_err());
}

#[test]
fn rows_are_top_first() {
    let mut canvas = Canvas::new(3, 2).unwrap();
    canvas.write_pixel(2, 1, &Color::white()).unwrap();

    let rows: Vec<&[Color]> = canvas.rows().collect();
    assert_eq!(rows.len(), 2);
    assert_eq!(rows[0], &[Color::black(); 3][..]);
    assert_eq!(rows[1][2], Color::white());
}
