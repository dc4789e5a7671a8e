//! A projectile fired through a simple environment, plotted onto a canvas.

use crate::tuple::Tuple4D;
use crate::canvas::Canvas;
use crate::config::CannonConfig;
use crate::error::Result;

#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub struct Projectile {
    pub pos: Tuple4D,
    pub vel: Tuple4D,
}

#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub struct Environment {
    pub grav: Tuple4D,
    pub wind: Tuple4D,
}

impl Environment {
    /// Advances a projectile by one tick, based on environmental conditions.
    ///
    /// The projectile returned from this function is the parameter `proj`
    /// subjected to one "tick" of time in the environment `env`.
    ///
    /// Position is a point; velocity, gravity and wind are all vectors.
    pub fn tick(&self, proj: &Projectile) -> Result<Projectile> {
        let pos = proj.pos.plus(&proj.vel)?;
        let vel = proj.vel.plus(&self.grav)?.plus(&self.wind)?;

        Ok(Projectile { pos, vel })
    }
}

/// Fires a projectile and plots every position it passes through.
///
/// The launch velocity is the normalized launch direction scaled by the
/// launch speed. The simulation runs while the projectile is above the
/// ground (`y > 0`), up to `max_ticks` steps. World `y` grows upwards while
/// canvas rows grow downwards, so a position `(x, y)` lands on pixel
/// `(x, height - y)`. Positions that fall outside the canvas are skipped.
pub fn fire(config: &CannonConfig) -> Result<Canvas> {
    let mut canvas = Canvas::new(config.canvas_width, config.canvas_height)?;
    let color = config.color();

    let env = Environment {
        grav: config.gravity_vector(),
        wind: config.wind_vector(),
    };

    let mut proj = Projectile {
        pos: config.start_point(),
        vel: config.launch_direction().normalize()? * config.speed,
    };

    let mut ticks = 0;
    let mut plotted = 0;
    while proj.pos.y > 0.0 && ticks < config.max_ticks {
        match pixel_for(&proj.pos, &canvas) {
            Some((x, y)) => {
                canvas.write_pixel(x, y, &color)?;
                plotted += 1;
            },
            None => log::warn!(
                "Projectile at ({:.3}, {:.3}) is outside the canvas, skipping",
                proj.pos.x, proj.pos.y
            ),
        }

        proj = env.tick(&proj)?;
        ticks += 1;
    }

    log::info!("Projectile flew for {} ticks, {} positions plotted",
        ticks, plotted);

    Ok(canvas)
}

/// Maps a world position onto canvas coordinates, if it is on the canvas.
fn pixel_for(pos: &Tuple4D, canvas: &Canvas) -> Option<(usize, usize)> {
    if !pos.x.is_finite() || !pos.y.is_finite() || pos.x < 0.0 || pos.y < 0.0 {
        return None;
    }

    let x = pos.x.trunc() as usize;
    let y = canvas.height().checked_sub(pos.y.trunc() as usize)?;

    if x < canvas.width() && y < canvas.height() {
        Some((x, y))
    } else {
        None
    }
}

#[test]
fn tick_moves_projectile() {
    let env = Environment {
        grav: Tuple4D::vector(0.0, -0.1, 0.0),
        wind: Tuple4D::vector(-0.01, 0.0, 0.0),
    };
    let proj = Projectile {
        pos: Tuple4D::point(0.0, 1.0, 0.0),
        vel: Tuple4D::vector(1.0, 1.0, 0.0),
    };

    let next = env.tick(&proj).unwrap();
    assert_eq!(next.pos, Tuple4D::point(1.0, 2.0, 0.0));
    assert_eq!(next.vel, Tuple4D::vector(0.99, 0.9, 0.0));
}

#[test]
fn tick_with_point_velocity_fails() {
    let env = Environment::default();
    let proj = Projectile {
        pos: Tuple4D::point(0.0, 1.0, 0.0),
        vel: Tuple4D::point(1.0, 1.0, 0.0),
    };

    assert!(env.tick(&proj).is_err());
}

#[test]
fn pixel_mapping_flips_y() {
    let canvas = Canvas::new(10, 5).unwrap();

    assert_eq!(pixel_for(&Tuple4D::point(0.0, 5.0, 0.0), &canvas), Some((0, 0)));
    assert_eq!(pixel_for(&Tuple4D::point(3.7, 1.2, 0.0), &canvas), Some((3, 4)));
    assert_eq!(pixel_for(&Tuple4D::point(3.0, 0.5, 0.0), &canvas), None);
    assert_eq!(pixel_for(&Tuple4D::point(10.0, 1.0, 0.0), &canvas), None);
    assert_eq!(pixel_for(&Tuple4D::point(-0.5, 1.0, 0.0), &canvas), None);
    assert_eq!(pixel_for(&Tuple4D::point(1.0, 6.0, 0.0), &canvas), None);
}

#[test]
fn fire_default_lands() {
    let config = CannonConfig::default();
    let canvas = fire(&config).unwrap();

    assert_eq!(canvas.width(), config.canvas_width);
    assert_eq!(canvas.height(), config.canvas_height);

    // The first position is the launch point (0, 1).
    assert_eq!(canvas.read_pixel(0, config.canvas_height - 1).unwrap(),
        crate::color::Color::green());

    let painted = canvas.rows()
        .flat_map(|row| row.iter())
        .filter(|&&c| c != crate::color::Color::black())
        .count();
    assert!(painted > 10);
}

#[test]
fn fire_skips_offscreen_positions() {
    let config = CannonConfig {
        canvas_width: 4,
        canvas_height: 20,
        start: [-3.0, 10.0, 0.0],
        direction: [1.0, 0.0, 0.0],
        speed: 1.0,
        gravity: [0.0, 0.0, 0.0],
        wind: [0.0, 0.0, 0.0],
        trail_color: vec![1.0, 0.0, 0.0],
        max_ticks: 5,
        ..Default::default()
    };

    let canvas = fire(&config).unwrap();
    assert_eq!(canvas.read_pixel(0, 10).unwrap(), crate::color::Color::red());
    assert_eq!(canvas.read_pixel(1, 10).unwrap(), crate::color::Color::red());
    assert_eq!(canvas.read_pixel(2, 10).unwrap(), crate::color::Color::black());
}

#[test]
fn fire_with_zero_direction_fails() {
    let config = CannonConfig {
        direction: [0.0, 0.0, 0.0],
        ..Default::default()
    };

    assert!(matches!(fire(&config),
        Err(crate::error::RayTracerError::DivisionByZero)));
}

#[test]
fn fire_with_oversized_canvas_fails() {
    let config = CannonConfig {
        canvas_width: usize::MAX,
        canvas_height: 2,
        ..Default::default()
    };

    assert!(matches!(fire(&config),
        Err(crate::error::RayTracerError::TooLarge { .. })));
}
