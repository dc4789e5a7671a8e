use std::ops::{ Neg, Mul };

use crate::feq;
use crate::error::{ RayTracerError, Result };

/// A homogeneous 4D tuple.
///
/// Points and vectors share this representation and are told apart by `w`:
/// points carry `w == 1.0`, vectors carry `w == 0.0`. Binary operations work
/// on all four components, so the discriminator of a result falls out of the
/// arithmetic (`point - point` yields `w == 0.0`, a vector). Combinations that
/// produce a meaningless discriminator are rejected with
/// `RayTracerError::InvalidOperation`.
///
/// Tuples are compared component-wise within `FEQ_EPSILON`.
#[derive(Debug, Default, Copy, Clone, PartialOrd)]
pub struct Tuple4D {
    pub x: f64,
    pub y: f64,
    pub z: f64,
    pub w: f64
}

impl PartialEq for Tuple4D {
    fn eq(&self, other: &Tuple4D) -> bool {
        feq(self.x, other.x) &&
            feq(self.y, other.y) &&
            feq(self.z, other.z) &&
            feq(self.w, other.w)
    }
}

impl Tuple4D {
    /// Creates a tuple from four raw components.
    ///
    /// No check is made on `w`; this exists for intermediate results.
    pub fn tuple(x: f64, y: f64, z: f64, w: f64) -> Tuple4D {
        Tuple4D { x, y, z, w }
    }

    pub fn point(x: f64, y: f64, z: f64) -> Tuple4D {
        Tuple4D { x, y, z, w: 1.0 }
    }

    pub fn vector(x: f64, y: f64, z: f64) -> Tuple4D {
        Tuple4D { x, y, z, w: 0.0 }
    }

    pub fn is_point(&self) -> bool {
        self.w == 1.0
    }

    pub fn is_vector(&self) -> bool {
        self.w == 0.0
    }

    /// Adds two tuples component-wise.
    ///
    /// Two points cannot be added: the result would carry `w == 2.0`.
    ///
    /// # Examples
    ///
    /// ```
    /// # use ray_tracer_canvas::tuple::Tuple4D;
    /// let p = Tuple4D::point(3.0, -2.0, 5.0);
    /// let v = Tuple4D::vector(-2.0, 3.0, 1.0);
    /// assert_eq!(p.plus(&v).unwrap(), Tuple4D::point(1.0, 1.0, 6.0));
    /// assert!(p.plus(&p).is_err());
    /// ```
    pub fn plus(&self, other: &Tuple4D) -> Result<Tuple4D> {
        if self.is_point() && other.is_point() {
            return Err(RayTracerError::InvalidOperation(
                "cannot add a point to another point".into()
            ));
        }

        Ok(Tuple4D {
            x: self.x + other.x,
            y: self.y + other.y,
            z: self.z + other.z,
            w: self.w + other.w
        })
    }

    /// Subtracts `other` from this tuple component-wise.
    ///
    /// `point - point` yields a vector and `point - vector` yields a point.
    /// Subtracting a point from a vector is rejected.
    pub fn minus(&self, other: &Tuple4D) -> Result<Tuple4D> {
        if self.is_vector() && other.is_point() {
            return Err(RayTracerError::InvalidOperation(
                "cannot subtract a point from a vector".into()
            ));
        }

        Ok(Tuple4D {
            x: self.x - other.x,
            y: self.y - other.y,
            z: self.z - other.z,
            w: self.w - other.w
        })
    }

    /// Divides every component by `divisor`.
    pub fn divide(&self, divisor: f64) -> Result<Tuple4D> {
        if divisor == 0.0 {
            return Err(RayTracerError::DivisionByZero);
        }

        Ok(Tuple4D {
            x: self.x / divisor,
            y: self.y / divisor,
            z: self.z / divisor,
            w: self.w / divisor
        })
    }

    /// The length of a vector. Points have no magnitude.
    pub fn magnitude(&self) -> Result<f64> {
        self.require_vector("magnitude")?;

        Ok(f64::sqrt(
            self.x.powi(2)
            + self.y.powi(2)
            + self.z.powi(2)
        ))
    }

    /// Scales a vector to unit length.
    ///
    /// Fails like `magnitude` for points, and with
    /// `RayTracerError::DivisionByZero` for the zero vector.
    pub fn normalize(&self) -> Result<Tuple4D> {
        let mag = self.magnitude()?;
        self.divide(mag)
    }

    pub fn dot(&self, other: &Tuple4D) -> Result<f64> {
        self.require_vector("dot product")?;
        other.require_vector("dot product")?;

        Ok(self.x * other.x
            + self.y * other.y
            + self.z * other.z)
    }

    /// The cross product of two vectors. Note that `a × b == -(b × a)`.
    pub fn cross(&self, other: &Tuple4D) -> Result<Tuple4D> {
        self.require_vector("cross product")?;
        other.require_vector("cross product")?;

        Ok(Tuple4D {
            x: self.y * other.z - self.z * other.y,
            y: self.z * other.x - self.x * other.z,
            z: self.x * other.y - self.y * other.x,
            w: 0.0
        })
    }

    fn require_vector(&self, operation: &str) -> Result<()> {
        if self.is_vector() {
            Ok(())
        } else {
            Err(RayTracerError::InvalidOperation(
                format!("{} is only defined for vectors, got w = {}",
                    operation, self.w)
            ))
        }
    }
}

/// Negates every component, including `w`.
///
/// A negated vector is still a vector; a negated point carries `w == -1.0`
/// and is no longer a point.
impl Neg for Tuple4D {
    type Output = Self;

    fn neg(self) -> Self {
        Self {
            x: -self.x,
            y: -self.y,
            z: -self.z,
            w: -self.w
        }
    }
}

/// Implements scalar right-multiplication for a 4D tuple.
///
/// ```
/// use ray_tracer_canvas::tuple::Tuple4D;
///
/// let t = Tuple4D::tuple(1.0, -2.0, 3.0, -4.0);
///
/// // (notice how the scalar is on the right)
/// assert_eq!(t * 3.5, Tuple4D::tuple(3.5, -7.0, 10.5, -14.0));
/// ```
impl Mul<f64> for Tuple4D {
    type Output = Self;

    fn mul(self, other: f64) -> Self {
        Self {
            x: self.x * other,
            y: self.y * other,
            z: self.z * other,
            w: self.w * other
        }
    }
}

/// Implements scalar left-multiplication for a 4D tuple.
impl Mul<Tuple4D> for f64 {
    type Output = Tuple4D;

    fn mul(self, other: Tuple4D) -> Tuple4D {
        other * self
    }
}

/* Tests */

#[test]
fn point_has_w_one() {
    let a = Tuple4D::tuple(4.3, -4.2, 3.1, 1.0);

    assert_eq!(a, Tuple4D::point(4.3, -4.2, 3.1));
    assert!(a.is_point());
    assert!(!a.is_vector());
}

#[test]
fn vector_has_w_zero() {
    let a = Tuple4D::tuple(4.3, -4.2, 3.1, 0.0);

    assert_eq!(a, Tuple4D::vector(4.3, -4.2, 3.1));
    assert!(!a.is_point());
    assert!(a.is_vector());
}

#[test]
fn add_vector_to_point() {
    let p = Tuple4D::point(3.0, -2.0, 5.0);
    let v = Tuple4D::vector(-2.0, 3.0, 1.0);

    assert_eq!(p.plus(&v).unwrap(), Tuple4D::point(1.0, 1.0, 6.0));
    assert_eq!(v.plus(&p).unwrap(), Tuple4D::point(1.0, 1.0, 6.0));
}

#[test]
fn add_vectors() {
    let a = Tuple4D::vector(1.1, 2.2, 3.3);
    let b = Tuple4D::vector(0.9, 0.8, 0.7);

    assert_eq!(a.plus(&b).unwrap(), Tuple4D::vector(2.0, 3.0, 4.0));
}

#[test]
fn add_points_fails() {
    let p1 = Tuple4D::point(1.0, 1.0, 1.0);
    let p2 = Tuple4D::point(1.0, 1.0, 1.0);

    assert!(matches!(p1.plus(&p2), Err(RayTracerError::InvalidOperation(_))));
}

#[test]
fn add_is_associative_for_point_and_vectors() {
    let p = Tuple4D::point(1.0, -2.0, 0.5);
    let v1 = Tuple4D::vector(0.25, 4.0, -3.0);
    let v2 = Tuple4D::vector(-7.0, 1.5, 2.0);

    let left = p.plus(&v1).unwrap().plus(&v2).unwrap();
    let right = p.plus(&v1.plus(&v2).unwrap()).unwrap();
    assert_eq!(left, right);

    let left = p.minus(&v1).unwrap().minus(&v2).unwrap();
    let right = p.minus(&v1.plus(&v2).unwrap()).unwrap();
    assert_eq!(left, right);
}

#[test]
fn sub_points() {
    let p1 = Tuple4D::point(3.0, 2.0, 1.0);
    let p2 = Tuple4D::point(5.0, 6.0, 7.0);

    assert_eq!(p1.minus(&p2).unwrap(), Tuple4D::vector(-2.0, -4.0, -6.0));
}

#[test]
fn sub_vector_from_point() {
    let p = Tuple4D::point(3.0, 2.0, 1.0);
    let v = Tuple4D::vector(5.0, 6.0, 7.0);

    assert_eq!(p.minus(&v).unwrap(), Tuple4D::point(-2.0, -4.0, -6.0));
}

#[test]
fn sub_vectors() {
    let v1 = Tuple4D::vector(3.0, 2.0, 1.0);
    let v2 = Tuple4D::vector(5.0, 6.0, 7.0);

    assert_eq!(v1.minus(&v2).unwrap(), Tuple4D::vector(-2.0, -4.0, -6.0));
}

#[test]
fn sub_vector_from_zero_vector() {
    let zero = Tuple4D::vector(0.0, 0.0, 0.0);
    let v = Tuple4D::vector(1.0, -2.0, 3.0);

    assert_eq!(zero.minus(&v).unwrap(), Tuple4D::vector(-1.0, 2.0, -3.0));
}

#[test]
fn sub_point_from_vector_fails() {
    let v = Tuple4D::vector(1.0, 1.0, 1.0);
    let p = Tuple4D::point(1.0, 1.0, 1.0);

    assert!(matches!(v.minus(&p), Err(RayTracerError::InvalidOperation(_))));
}

#[test]
fn neg_tuple() {
    let a = Tuple4D::tuple(1.0, -2.0, 3.0, -4.0);

    assert_eq!(-a, Tuple4D::tuple(-1.0, 2.0, -3.0, 4.0));
}

#[test]
fn neg_point_is_not_a_point() {
    let p = -Tuple4D::point(3.0, -2.0, 5.0);

    assert_eq!(p, Tuple4D::tuple(-3.0, 2.0, -5.0, -1.0));
    assert!(!p.is_point());
    assert!(!p.is_vector());
}

#[test]
fn neg_vector_stays_vector() {
    let v = -Tuple4D::vector(1.1, 2.2, 3.3);

    assert!(v.is_vector());
    assert_eq!(v, Tuple4D::vector(-1.1, -2.2, -3.3));
}

#[test]
fn mul_scalar() {
    let a = Tuple4D::tuple(1.0, -2.0, 3.0, -4.0);

    assert_eq!(a * 3.5, Tuple4D::tuple(3.5, -7.0, 10.5, -14.0));
    assert_eq!(-1.0 * a, Tuple4D::tuple(-1.0, 2.0, -3.0, 4.0));
}

#[test]
fn mul_fraction() {
    let a = Tuple4D::tuple(1.0, -2.0, 3.0, -4.0);

    assert_eq!(a * 0.5, Tuple4D::tuple(0.5, -1.0, 1.5, -2.0));
}

#[test]
fn div_scalar() {
    let a = Tuple4D::tuple(1.0, -2.0, 3.0, -4.0);

    assert_eq!(a.divide(2.0).unwrap(), Tuple4D::tuple(0.5, -1.0, 1.5, -2.0));
    assert_eq!(a.divide(0.5).unwrap(), Tuple4D::tuple(2.0, -4.0, 6.0, -8.0));
}

#[test]
fn div_by_zero_fails() {
    let a = Tuple4D::vector(1.0, 2.0, 3.0);

    assert!(matches!(a.divide(0.0), Err(RayTracerError::DivisionByZero)));
    assert!(matches!(a.divide(-0.0), Err(RayTracerError::DivisionByZero)));
}

#[test]
fn magnitude_unit() {
    assert_eq!(Tuple4D::vector(1.0, 0.0, 0.0).magnitude().unwrap(), 1.0);
    assert_eq!(Tuple4D::vector(0.0, 1.0, 0.0).magnitude().unwrap(), 1.0);
    assert_eq!(Tuple4D::vector(0.0, 0.0, 1.0).magnitude().unwrap(), 1.0);
}

#[test]
fn magnitude_pos() {
    let v = Tuple4D::vector(1.0, 2.0, 3.0);

    assert_eq!(v.magnitude().unwrap(), f64::sqrt(14.0));
}

#[test]
fn magnitude_neg() {
    let v = Tuple4D::vector(-1.0, -2.0, -3.0);

    assert_eq!(v.magnitude().unwrap(), f64::sqrt(14.0));
}

#[test]
fn magnitude_of_point_fails() {
    let p = Tuple4D::point(1.0, 2.0, 3.0);

    assert!(matches!(p.magnitude(), Err(RayTracerError::InvalidOperation(_))));
}

#[test]
fn normalize_clean() {
    let v = Tuple4D::vector(4.0, 0.0, 0.0);

    assert_eq!(v.normalize().unwrap(), Tuple4D::vector(1.0, 0.0, 0.0));
}

#[test]
fn normalize_dirty() {
    let v = Tuple4D::vector(1.0, 2.0, 3.0);
    let e = Tuple4D::vector(
        1.0 / f64::sqrt(14.0),
        2.0 / f64::sqrt(14.0),
        3.0 / f64::sqrt(14.0)
    );

    let n = v.normalize().unwrap();
    assert_eq!(n, e);
    assert!(feq(n.magnitude().unwrap(), 1.0));
}

#[test]
fn normalize_has_unit_magnitude() {
    let vectors = [
        Tuple4D::vector(0.001, 0.0, 0.0),
        Tuple4D::vector(-3.0, 4.0, 12.0),
        Tuple4D::vector(1e6, -2e6, 5e5),
        Tuple4D::vector(0.3, 0.3, -0.3),
    ];

    for v in vectors.iter() {
        let n = v.normalize().unwrap();
        assert!(n.is_vector());
        assert!(feq(n.magnitude().unwrap(), 1.0));
    }
}

#[test]
fn normalize_point_fails() {
    let p = Tuple4D::point(1.0, 2.0, 3.0);

    assert!(matches!(p.normalize(), Err(RayTracerError::InvalidOperation(_))));
}

#[test]
fn normalize_zero_vector_fails() {
    let v = Tuple4D::vector(0.0, 0.0, 0.0);

    assert!(matches!(v.normalize(), Err(RayTracerError::DivisionByZero)));
}

#[test]
fn dot_vectors() {
    let a = Tuple4D::vector(1.0, 2.0, 3.0);
    let b = Tuple4D::vector(2.0, 3.0, 4.0);

    assert_eq!(a.dot(&b).unwrap(), 20.0);
}

#[test]
fn dot_with_point_fails() {
    let v = Tuple4D::vector(1.0, 2.0, 3.0);
    let p = Tuple4D::point(2.0, 3.0, 4.0);

    assert!(matches!(v.dot(&p), Err(RayTracerError::InvalidOperation(_))));
    assert!(matches!(p.dot(&v), Err(RayTracerError::InvalidOperation(_))));
    assert!(matches!(p.dot(&p), Err(RayTracerError::InvalidOperation(_))));
}

#[test]
fn cross_vectors() {
    let a = Tuple4D::vector(1.0, 2.0, 3.0);
    let b = Tuple4D::vector(2.0, 3.0, 4.0);

    let c = Tuple4D::vector(-1.0, 2.0, -1.0);
    let d = Tuple4D::vector(1.0, -2.0, 1.0);

    assert_eq!(a.cross(&b).unwrap(), c);
    assert_eq!(b.cross(&a).unwrap(), d);
    assert!(a.cross(&b).unwrap().is_vector());
}

#[test]
fn cross_is_anticommutative() {
    let a = Tuple4D::vector(0.5, -7.0, 2.25);
    let b = Tuple4D::vector(-3.0, 1.0, 8.0);

    assert_eq!(a.cross(&b).unwrap(), -b.cross(&a).unwrap());
}

#[test]
fn cross_with_point_fails() {
    let v = Tuple4D::vector(1.0, 2.0, 3.0);
    let p = Tuple4D::point(2.0, 3.0, 4.0);

    assert!(matches!(v.cross(&p), Err(RayTracerError::InvalidOperation(_))));
    assert!(matches!(p.cross(&v), Err(RayTracerError::InvalidOperation(_))));
}
