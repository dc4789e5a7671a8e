//! Plain PPM (P3) output.

use crate::canvas::Canvas;
use crate::color::Color;
use crate::consts::{ PPM_MAGIC, PPM_MAX_COLOR_VALUE, PPM_MAX_LINE_WIDTH };
use crate::error::Result;
use crate::sink::Sink;

/// Serializes a `Canvas` to the plain PPM format.
///
/// The output looks like this:
///
/// ```text
/// P3
/// <width> <height>
/// 255
/// <row 0 channel values>
/// ...
/// ```
///
/// Each pixel contributes its red, green and blue bytes as decimal tokens.
/// Rows are written top to bottom. A row is wrapped greedily so that no
/// physical line exceeds 70 characters; a wrap may fall between the channels
/// of a single pixel, but never inside a token. Every row starts on a fresh
/// line, and no line ends in whitespace.
#[derive(Copy, Clone, Debug, Default)]
pub struct PpmEncoder;

impl PpmEncoder {
    pub fn new() -> PpmEncoder {
        PpmEncoder
    }

    /// Encodes the whole canvas into a string.
    ///
    /// # Examples
    ///
    /// ```
    /// # use ray_tracer_canvas::canvas::Canvas;
    /// # use ray_tracer_canvas::color::Color;
    /// # use ray_tracer_canvas::ppm::PpmEncoder;
    /// let mut canvas = Canvas::new(2, 1).unwrap();
    /// canvas.write_pixel(1, 0, &Color::rgb(1.0, 0.5, 0.0)).unwrap();
    ///
    /// let ppm = PpmEncoder::new().encode(&canvas);
    /// assert_eq!(ppm, "P3\n2 1\n255\n0 0 0 255 128 0\n");
    /// ```
    pub fn encode(&self, canvas: &Canvas) -> String {
        let mut out = self.header(canvas);

        for row in canvas.rows() {
            encode_row(row, &mut out);
        }

        log::debug!("Encoded {}x{} canvas into {} bytes of PPM",
            canvas.width(), canvas.height(), out.len());

        out
    }

    /// Encodes the canvas and stores the result in `sink` under `name`.
    ///
    /// Sink failures are returned as `RayTracerError::Io`.
    pub fn write<S: Sink + ?Sized>(&self, canvas: &Canvas, sink: &mut S,
        name: &str) -> Result<()> {
        let content = self.encode(canvas);
        sink.put(name, content.as_bytes())?;

        Ok(())
    }

    fn header(&self, canvas: &Canvas) -> String {
        format!("{}\n{} {}\n{}\n",
            PPM_MAGIC, canvas.width(), canvas.height(), PPM_MAX_COLOR_VALUE)
    }
}

/// Appends one canvas row, wrapped at `PPM_MAX_LINE_WIDTH`.
fn encode_row(row: &[Color], out: &mut String) {
    // Holds the current physical line, each token followed by a space.
    let mut line = String::with_capacity(PPM_MAX_LINE_WIDTH + 4);

    for pixel in row {
        for channel in pixel.to_bytes().iter() {
            let token = channel.to_string();

            if line.len() + token.len() > PPM_MAX_LINE_WIDTH {
                out.push_str(line.trim_end());
                out.push('\n');
                line.clear();
            }

            line.push_str(&token);
            line.push(' ');
        }
    }

    out.push_str(line.trim_end());
    out.push('\n');
}

#[cfg(test)]
fn lines_of(ppm: &str) -> Vec<&str> {
    ppm.lines().collect()
}

#[test]
fn header() {
    let canvas = Canvas::new(5, 3).unwrap();
    let ppm = PpmEncoder::new().encode(&canvas);
    let lines = lines_of(&ppm);

    assert_eq!(lines[0], "P3");
    assert_eq!(lines[1], "5 3");
    assert_eq!(lines[2], "255");
}

#[test]
fn blank_canvas() {
    let canvas = Canvas::new(5, 3).unwrap();
    let ppm = PpmEncoder::new().encode(&canvas);
    let lines = lines_of(&ppm);

    assert_eq!(lines.len(), 6);
    for line in &lines[3..] {
        assert_eq!(*line, "0 0 0 0 0 0 0 0 0 0 0 0 0 0 0");
    }
}

#[test]
fn pixel_data() {
    let mut canvas = Canvas::new(5, 3).unwrap();
    canvas.write_pixel(0, 0, &Color::rgb(1.5, 0.0, 0.0)).unwrap();
    canvas.write_pixel(2, 1, &Color::rgb(0.0, 0.5, 0.0)).unwrap();
    canvas.write_pixel(4, 2, &Color::rgb(-0.5, 0.0, 1.0)).unwrap();

    let ppm = PpmEncoder::new().encode(&canvas);
    let lines = lines_of(&ppm);

    assert_eq!(lines[3], "255 0 0 0 0 0 0 0 0 0 0 0 0 0 0");
    assert_eq!(lines[4], "0 0 0 0 0 0 0 128 0 0 0 0 0 0 0");
    assert_eq!(lines[5], "0 0 0 0 0 0 0 0 0 0 0 0 0 0 255");
}

#[test]
fn explicit_black_matches_unpainted() {
    let blank = Canvas::new(4, 2).unwrap();
    let mut painted = Canvas::new(4, 2).unwrap();
    painted.write_pixel(3, 1, &Color::black()).unwrap();

    let encoder = PpmEncoder::new();
    assert_eq!(encoder.encode(&blank), encoder.encode(&painted));
}

#[test]
fn long_lines_are_split() {
    let mut canvas = Canvas::new(10, 2).unwrap();
    for y in 0..2 {
        for x in 0..10 {
            canvas.write_pixel(x, y, &Color::rgb(1.0, 0.8, 0.6)).unwrap();
        }
    }

    let ppm = PpmEncoder::new().encode(&canvas);
    let lines = lines_of(&ppm);

    assert_eq!(lines.len(), 7);
    assert_eq!(lines[3],
        "255 204 153 255 204 153 255 204 153 255 204 153 255 204 153 255 204");
    assert_eq!(lines[4],
        "153 255 204 153 255 204 153 255 204 153 255 204 153");
    assert_eq!(lines[5],
        "255 204 153 255 204 153 255 204 153 255 204 153 255 204 153 255 204");
    assert_eq!(lines[6],
        "153 255 204 153 255 204 153 255 204 153 255 204 153");
}

#[test]
fn lines_fit_and_are_trimmed() {
    let mut canvas = Canvas::new(37, 4).unwrap();
    for y in 0..4 {
        for x in 0..37 {
            let shade = (x * 7 + y * 13) as f64 / 300.0;
            canvas.write_pixel(x, y, &Color::rgb(shade, 1.0 - shade, 0.5))
                .unwrap();
        }
    }

    let ppm = PpmEncoder::new().encode(&canvas);
    let mut tokens = 0;
    for line in lines_of(&ppm).iter().skip(3) {
        assert!(line.len() <= PPM_MAX_LINE_WIDTH);
        assert!(!line.ends_with(' '));
        assert!(!line.starts_with(' '));

        for token in line.split(' ') {
            assert!(token.parse::<u8>().is_ok());
            tokens += 1;
        }
    }

    assert_eq!(tokens, 37 * 4 * 3);
}

#[test]
fn ends_with_newline() {
    let canvas = Canvas::new(5, 3).unwrap();
    let ppm = PpmEncoder::new().encode(&canvas);

    assert!(ppm.ends_with('\n'));
}

#[test]
fn write_to_sink() {
    let mut canvas = Canvas::new(1, 1).unwrap();
    canvas.write_pixel(0, 0, &Color::white()).unwrap();

    let mut sink = crate::sink::MemorySink::new();
    PpmEncoder::new().write(&canvas, &mut sink, "my_canvas.ppm").unwrap();

    assert_eq!(sink.get("my_canvas.ppm"), Some(&b"P3\n1 1\n255\n255 255 255\n"[..]));
}

#[test]
fn sink_failure_is_propagated() {
    struct BrokenSink;

    impl Sink for BrokenSink {
        fn put(&mut self, _name: &str, _content: &[u8]) -> std::io::Result<()> {
            Err(std::io::Error::new(std::io::ErrorKind::PermissionDenied, "read-only"))
        }
    }

    let canvas = Canvas::new(1, 1).unwrap();
    let result = PpmEncoder::new().write(&canvas, &mut BrokenSink, "x.ppm");

    match result {
        Err(crate::error::RayTracerError::Io(e)) => {
            assert_eq!(e.kind(), std::io::ErrorKind::PermissionDenied);
        },
        _ => panic!("expected an I/O error"),
    }
}
