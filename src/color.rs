use std::ops::{ Add, Sub, Mul };

use crate::feq;
use crate::consts::PPM_MAX_COLOR_VALUE;

/// A color.
///
/// Represented conventionally with red-green-blue (RGB) values. Channels are
/// nominally in `0.0..=1.0`, but may leave that range while light is being
/// accumulated; they are only clamped when converted to bytes.
///
/// # Examples
///
/// Construct the color red:
///
/// ```
/// # #![allow(unused)]
/// # use ray_tracer_canvas::color::Color;
/// let red = Color::red();
/// assert_eq!(red, Color::rgb(1.0, 0.0, 0.0));
/// ```
///
/// Convert a color to bytes:
///
/// ```
/// # use ray_tracer_canvas::color::Color;
/// let c = Color::rgb(1.5, 0.5, -0.5);
/// assert_eq!(c.to_bytes(), [255, 128, 0]);
/// ```
#[derive(Copy, Clone, Debug, Default, PartialOrd)]
pub struct Color {
    pub r: f64,
    pub g: f64,
    pub b: f64,
}

/// Channels are equal within `FEQ_EPSILON`, like `Tuple4D` components.
impl PartialEq for Color {
    fn eq(&self, other: &Color) -> bool {
        feq(self.r, other.r) &&
            feq(self.g, other.g) &&
            feq(self.b, other.b)
    }
}

/// Reads an `[r, g, b]` list, as found in JSON configuration.
///
/// Missing channels are dark (`0.0`); anything past the third is ignored.
impl From<&Vec<f64>> for Color {
    fn from(v: &Vec<f64>) -> Color {
        let channel = |i: usize| v.get(i).copied().unwrap_or(0.0);
        Color::rgb(channel(0), channel(1), channel(2))
    }
}

impl Color {
    /// Creates a color with red, green and blue values.
    pub fn rgb(r: f64, g: f64, b: f64) -> Color {
        Color { r, g, b }
    }

    /// The color black.
    pub fn black() -> Color {
        Color::rgb(0.0, 0.0, 0.0)
    }

    /// The color white.
    pub fn white() -> Color {
        Color::rgb(1.0, 1.0, 1.0)
    }

    /// The color red.
    pub fn red() -> Color {
        Color::rgb(1.0, 0.0, 0.0)
    }

    /// The color green.
    pub fn green() -> Color {
        Color::rgb(0.0, 1.0, 0.0)
    }

    /// The color blue.
    pub fn blue() -> Color {
        Color::rgb(0.0, 0.0, 1.0)
    }

    /// Filters light of color `c1` through a surface of color `c2`.
    ///
    /// Each channel of the light is scaled by how much of that channel the
    /// surface reflects. Light brighter than `1.0` stays brighter than `1.0`
    /// until it is written out.
    ///
    /// ```
    /// # use ray_tracer_canvas::color::Color;
    /// let light = Color::rgb(2.0, 1.0, 0.5);
    /// let surface = Color::rgb(0.5, 0.0, 1.0);
    /// assert_eq!(Color::hadamard(&light, &surface), Color::rgb(1.0, 0.0, 0.5));
    /// ```
    pub fn hadamard(c1: &Color, c2: &Color) -> Color {
        Color::rgb(c1.r * c2.r, c1.g * c2.g, c1.b * c2.b)
    }

    /// The channels as bytes, in red-green-blue order.
    pub fn to_bytes(&self) -> [u8; 3] {
        [
            channel_to_byte(self.r),
            channel_to_byte(self.g),
            channel_to_byte(self.b),
        ]
    }
}

/// Converts a single channel to a byte.
///
/// The channel is clamped to `0.0..=1.0`, scaled by 255 and rounded half away
/// from zero, so `0.5` becomes `128`. NaN maps to `0`.
pub fn channel_to_byte(channel: f64) -> u8 {
    let max = PPM_MAX_COLOR_VALUE as f64;
    (channel.clamp(0.0, 1.0) * max).round() as u8
}

/// Accumulates light. The sum is not clamped.
impl Add<Color> for Color {
    type Output = Color;

    fn add(self, other: Color) -> Self::Output {
        Color::rgb(self.r + other.r, self.g + other.g, self.b + other.b)
    }
}

/// Channel-wise difference; channels may go negative.
impl Sub<Color> for Color {
    type Output = Color;

    fn sub(self, other: Color) -> Self::Output {
        Color::rgb(self.r - other.r, self.g - other.g, self.b - other.b)
    }
}

/// Multiplies a color by a scalar.
impl Mul<f64> for Color {
    type Output = Color;

    fn mul(self, other: f64) -> Self::Output {
        Color::rgb(self.r * other, self.g * other, self.b * other)
    }
}

/// Multiplies a scalar by a color.
impl Mul<Color> for f64 {
    type Output = Color;

    fn mul(self, other: Color) -> Self::Output {
        other * self
    }
}

/// Same as `Color::hadamard`.
impl Mul<Color> for Color {
    type Output = Color;

    fn mul(self, other: Color) -> Self::Output {
        Color::hadamard(&self, &other)
    }
}

#[test]
fn color_channels() {
    let c = Color::rgb(-0.5, 0.4, 1.7);

    assert_eq!(c.r, -0.5);
    assert_eq!(c.g, 0.4);
    assert_eq!(c.b, 1.7);
}

#[test]
fn accumulated_light_is_not_clamped() {
    let key = Color::rgb(0.8, 0.5, 0.1);
    let fill = Color::rgb(0.6, 0.25, 0.05);
    let total = key + fill;

    assert_eq!(total, Color::rgb(1.4, 0.75, 0.15));
    assert_eq!(total.to_bytes(), [255, 191, 38]);
}

#[test]
fn subtracting_below_zero_keeps_negative_channels() {
    let c = Color::rgb(0.2, 0.5, 1.0) - Color::rgb(0.7, 0.25, 0.0);

    assert_eq!(c, Color::rgb(-0.5, 0.25, 1.0));
    assert_eq!(c.to_bytes(), [0, 64, 255]);
}

#[test]
fn overbright_light_filtered_back_into_range() {
    let light = Color::rgb(3.0, 2.0, 4.0);
    let surface = Color::rgb(0.25, 0.5, 0.1);

    assert_eq!((light * surface).to_bytes(), [191, 255, 102]);
}

#[test]
fn multiply_color_by_scalar() {
    let c1 = Color::rgb(0.2, 0.3, 0.4);
    let c2 = Color { r: 0.4, g: 0.6, b: 0.8 };

    assert_eq!(c1 * 2.0, c2);
    assert_eq!(2.0 * c1, c2);
}

#[test]
fn multiply_colors() {
    let c1 = Color::rgb(1.0, 0.2, 0.4);
    let c2 = Color::rgb(0.9, 1.0, 0.1);

    assert_eq!(c1 * c2, Color::rgb(0.9, 0.2, 0.04));
}

#[test]
fn color_from_vec() {
    assert_eq!(Color::from(&vec![]), Color::black());
    assert_eq!(Color::from(&vec![0.5, 0.25]), Color::rgb(0.5, 0.25, 0.0));
    assert_eq!(Color::from(&vec![0.0, 1.0, 0.0, 9.0]), Color::green());
}

#[test]
fn channel_clamps_and_rounds() {
    assert_eq!(channel_to_byte(-0.5), 0);
    assert_eq!(channel_to_byte(0.0), 0);
    assert_eq!(channel_to_byte(0.5), 128);
    assert_eq!(channel_to_byte(0.6), 153);
    assert_eq!(channel_to_byte(0.8), 204);
    assert_eq!(channel_to_byte(1.0), 255);
    assert_eq!(channel_to_byte(1.5), 255);
    assert_eq!(channel_to_byte(f64::NAN), 0);
}
