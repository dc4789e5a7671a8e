//! Points and vectors as distinct types.
//!
//! `Tuple4D` checks the point/vector discriminator at runtime. The types in
//! this module make the same distinction at compile time: only the legal
//! combinations have operator implementations, so `point + point` or
//! `vector - point` do not type-check.

use std::convert::TryFrom;
use std::ops::{ Add, Sub, Neg, Mul };

use crate::feq;
use crate::tuple::Tuple4D;
use crate::error::{ RayTracerError, Result };

/// A position in space.
#[derive(Debug, Default, Copy, Clone, PartialOrd)]
pub struct Point {
    pub x: f64,
    pub y: f64,
    pub z: f64
}

/// A displacement in space.
#[derive(Debug, Default, Copy, Clone, PartialOrd)]
pub struct Vector {
    pub x: f64,
    pub y: f64,
    pub z: f64
}

impl PartialEq for Point {
    fn eq(&self, other: &Point) -> bool {
        feq(self.x, other.x) &&
            feq(self.y, other.y) &&
            feq(self.z, other.z)
    }
}

impl PartialEq for Vector {
    fn eq(&self, other: &Vector) -> bool {
        feq(self.x, other.x) &&
            feq(self.y, other.y) &&
            feq(self.z, other.z)
    }
}

impl Point {
    pub fn new(x: f64, y: f64, z: f64) -> Point {
        Point { x, y, z }
    }
}

impl Vector {
    pub fn new(x: f64, y: f64, z: f64) -> Vector {
        Vector { x, y, z }
    }

    pub fn magnitude(&self) -> f64 {
        f64::sqrt(self.x.powi(2) + self.y.powi(2) + self.z.powi(2))
    }

    pub fn divide(&self, divisor: f64) -> Result<Vector> {
        if divisor == 0.0 {
            return Err(RayTracerError::DivisionByZero);
        }

        Ok(Vector {
            x: self.x / divisor,
            y: self.y / divisor,
            z: self.z / divisor
        })
    }

    /// Fails with `RayTracerError::DivisionByZero` for the zero vector.
    pub fn normalize(&self) -> Result<Vector> {
        self.divide(self.magnitude())
    }

    pub fn dot(&self, other: &Vector) -> f64 {
        self.x * other.x + self.y * other.y + self.z * other.z
    }

    pub fn cross(&self, other: &Vector) -> Vector {
        Vector {
            x: self.y * other.z - self.z * other.y,
            y: self.z * other.x - self.x * other.z,
            z: self.x * other.y - self.y * other.x
        }
    }
}

impl From<Point> for Tuple4D {
    fn from(p: Point) -> Tuple4D {
        Tuple4D::point(p.x, p.y, p.z)
    }
}

impl From<Vector> for Tuple4D {
    fn from(v: Vector) -> Tuple4D {
        Tuple4D::vector(v.x, v.y, v.z)
    }
}

impl TryFrom<Tuple4D> for Point {
    type Error = RayTracerError;

    fn try_from(t: Tuple4D) -> Result<Point> {
        if !t.is_point() {
            return Err(RayTracerError::InvalidOperation(
                format!("tuple with w = {} is not a point", t.w)
            ));
        }

        Ok(Point { x: t.x, y: t.y, z: t.z })
    }
}

impl TryFrom<Tuple4D> for Vector {
    type Error = RayTracerError;

    fn try_from(t: Tuple4D) -> Result<Vector> {
        if !t.is_vector() {
            return Err(RayTracerError::InvalidOperation(
                format!("tuple with w = {} is not a vector", t.w)
            ));
        }

        Ok(Vector { x: t.x, y: t.y, z: t.z })
    }
}

/// Moves a point by a vector.
impl Add<Vector> for Point {
    type Output = Point;

    fn add(self, other: Vector) -> Point {
        Point {
            x: self.x + other.x,
            y: self.y + other.y,
            z: self.z + other.z
        }
    }
}

impl Add<Point> for Vector {
    type Output = Point;

    fn add(self, other: Point) -> Point {
        other + self
    }
}

impl Add<Vector> for Vector {
    type Output = Vector;

    fn add(self, other: Vector) -> Vector {
        Vector {
            x: self.x + other.x,
            y: self.y + other.y,
            z: self.z + other.z
        }
    }
}

/// The displacement between two points.
impl Sub<Point> for Point {
    type Output = Vector;

    fn sub(self, other: Point) -> Vector {
        Vector {
            x: self.x - other.x,
            y: self.y - other.y,
            z: self.z - other.z
        }
    }
}

impl Sub<Vector> for Point {
    type Output = Point;

    fn sub(self, other: Vector) -> Point {
        Point {
            x: self.x - other.x,
            y: self.y - other.y,
            z: self.z - other.z
        }
    }
}

impl Sub<Vector> for Vector {
    type Output = Vector;

    fn sub(self, other: Vector) -> Vector {
        Vector {
            x: self.x - other.x,
            y: self.y - other.y,
            z: self.z - other.z
        }
    }
}

impl Neg for Vector {
    type Output = Vector;

    fn neg(self) -> Vector {
        Vector {
            x: -self.x,
            y: -self.y,
            z: -self.z
        }
    }
}

impl Mul<f64> for Vector {
    type Output = Vector;

    fn mul(self, other: f64) -> Vector {
        Vector {
            x: self.x * other,
            y: self.y * other,
            z: self.z * other
        }
    }
}

impl Mul<Vector> for f64 {
    type Output = Vector;

    fn mul(self, other: Vector) -> Vector {
        other * self
    }
}

/* Tests */

#[test]
fn point_plus_vector_is_point() {
    let p = Point::new(3.0, -2.0, 5.0);
    let v = Vector::new(-2.0, 3.0, 1.0);

    assert_eq!(p + v, Point::new(1.0, 1.0, 6.0));
    assert_eq!(v + p, Point::new(1.0, 1.0, 6.0));
}

#[test]
fn point_minus_point_is_vector() {
    let p1 = Point::new(3.0, 2.0, 1.0);
    let p2 = Point::new(5.0, 6.0, 7.0);

    assert_eq!(p1 - p2, Vector::new(-2.0, -4.0, -6.0));
}

#[test]
fn point_minus_vector_is_point() {
    let p = Point::new(3.0, 2.0, 1.0);
    let v = Vector::new(5.0, 6.0, 7.0);

    assert_eq!(p - v, Point::new(-2.0, -4.0, -6.0));
}

#[test]
fn typed_ops_agree_with_tuples() {
    let p = Point::new(1.1, 2.2, 3.3);
    let v = Vector::new(2.0, 3.0, 4.0);
    let w = Vector::new(-0.5, 0.25, 8.0);

    let tp: Tuple4D = p.into();
    let tv: Tuple4D = v.into();
    let tw: Tuple4D = w.into();

    assert_eq!(Tuple4D::from(p + v), tp.plus(&tv).unwrap());
    assert_eq!(Tuple4D::from(v + w), tv.plus(&tw).unwrap());
    assert_eq!(Tuple4D::from(p - v), tp.minus(&tv).unwrap());
    assert_eq!(Tuple4D::from(v - w), tv.minus(&tw).unwrap());
    assert_eq!(Tuple4D::from(-v), -tv);
    assert_eq!(Tuple4D::from(v * 1.5), tv * 1.5);
    assert_eq!(v.magnitude(), tv.magnitude().unwrap());
    assert_eq!(v.dot(&w), tv.dot(&tw).unwrap());
    assert_eq!(Tuple4D::from(v.cross(&w)), tv.cross(&tw).unwrap());
    assert_eq!(Tuple4D::from(v.normalize().unwrap()), tv.normalize().unwrap());
}

#[test]
fn associativity_with_point() {
    let p = Point::new(1.0, -2.0, 0.5);
    let v1 = Vector::new(0.25, 4.0, -3.0);
    let v2 = Vector::new(-7.0, 1.5, 2.0);

    assert_eq!((p + v1) + v2, p + (v1 + v2));
    assert_eq!(p - v1 - v2, p - (v1 + v2));
}

#[test]
fn cross_is_anticommutative() {
    let a = Vector::new(1.0, 2.0, 3.0);
    let b = Vector::new(2.0, 3.0, 4.0);

    assert_eq!(a.cross(&b), Vector::new(-1.0, 2.0, -1.0));
    assert_eq!(a.cross(&b), -b.cross(&a));
}

#[test]
fn normalize_has_unit_magnitude() {
    let v = Vector::new(1.0, 2.0, 3.0);

    assert!(feq(v.normalize().unwrap().magnitude(), 1.0));
}

#[test]
fn normalize_zero_vector_fails() {
    let v = Vector::new(0.0, 0.0, 0.0);

    assert!(matches!(v.normalize(), Err(RayTracerError::DivisionByZero)));
    assert!(matches!(v.divide(0.0), Err(RayTracerError::DivisionByZero)));
}

#[test]
fn convert_from_tuple() {
    let p = Tuple4D::point(1.0, 2.0, 3.0);
    let v = Tuple4D::vector(1.0, 2.0, 3.0);

    assert_eq!(Point::try_from(p).unwrap(), Point::new(1.0, 2.0, 3.0));
    assert_eq!(Vector::try_from(v).unwrap(), Vector::new(1.0, 2.0, 3.0));
    assert!(Point::try_from(v).is_err());
    assert!(Vector::try_from(p).is_err());
    assert!(Point::try_from(-p).is_err());
}
