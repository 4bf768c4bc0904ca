use crate::error::{GeometryError, Result};
use crate::math::are_equal;

use super::point::VirtualPoint;

/// An infinite line in general form `a*x + b*y + c = 0`.
///
/// The normal `(a, b)` is kept at unit length, so `a*x + b*y + c` is the
/// signed distance of `(x, y)` from the line and every tolerance test
/// below compares distances rather than scaled residuals.
#[derive(Debug, Clone, Copy)]
pub struct Line {
    a: f64,
    b: f64,
    c: f64,
    anchor: VirtualPoint,
}

impl Line {
    /// Creates the line passing through two points.
    ///
    /// # Errors
    ///
    /// Returns an error if the points coincide.
    pub fn new(first: impl Into<VirtualPoint>, second: impl Into<VirtualPoint>) -> Result<Self> {
        let (p, q) = (first.into(), second.into());
        if p == q {
            return Err(GeometryError::CoincidentPoints { x: p.x(), y: p.y() }.into());
        }
        Self::from_quotients(p.y() - q.y(), q.x() - p.x(), p)
    }

    /// Creates the line `vertical*x + horizontal*y + c = 0` through `through`.
    ///
    /// A zero `horizontal` quotient gives a vertical line, a zero `vertical`
    /// quotient a horizontal one.
    ///
    /// # Errors
    ///
    /// Returns an error if both quotients are zero.
    pub fn from_quotients(
        vertical: f64,
        horizontal: f64,
        through: impl Into<VirtualPoint>,
    ) -> Result<Self> {
        if are_equal(vertical, 0.0) && are_equal(horizontal, 0.0) {
            return Err(GeometryError::ZeroQuotients.into());
        }
        let norm = vertical.hypot(horizontal);
        Ok(Self::normalized(vertical / norm, horizontal / norm, through.into()))
    }

    /// The horizontal line `y = y`.
    #[must_use]
    pub fn horizontal(y: f64) -> Self {
        Self::normalized(0.0, 1.0, VirtualPoint::new(0.0, y))
    }

    fn normalized(a: f64, b: f64, anchor: VirtualPoint) -> Self {
        Self {
            a,
            b,
            c: -(a * anchor.x() + b * anchor.y()),
            anchor,
        }
    }

    /// Returns the `(a, b, c)` coefficients, with `(a, b)` of unit length.
    #[must_use]
    pub fn coefficients(&self) -> (f64, f64, f64) {
        (self.a, self.b, self.c)
    }

    /// Returns the point the line was constructed through.
    #[must_use]
    pub fn anchor(&self) -> VirtualPoint {
        self.anchor
    }

    /// Signed distance of `point` from the line.
    #[must_use]
    pub fn signed_distance(&self, point: impl Into<VirtualPoint>) -> f64 {
        let p = point.into();
        self.a * p.x() + self.b * p.y() + self.c
    }

    /// Returns `true` if `point` lies on the line.
    #[must_use]
    pub fn is_collinear(&self, point: impl Into<VirtualPoint>) -> bool {
        are_equal(self.signed_distance(point), 0.0)
    }

    /// Returns `true` for a line of constant x.
    #[must_use]
    pub fn is_vertical(&self) -> bool {
        are_equal(self.b, 0.0)
    }

    /// Returns `true` for a line of constant y.
    #[must_use]
    pub fn is_horizontal(&self) -> bool {
        are_equal(self.a, 0.0)
    }

    /// Returns `true` if the lines share a direction, coincident lines included.
    #[must_use]
    pub fn is_parallel(&self, other: &Line) -> bool {
        are_equal(self.determinant(other), 0.0)
    }

    /// Returns `true` if the lines meet at a right angle.
    #[must_use]
    pub fn is_perpendicular(&self, other: &Line) -> bool {
        are_equal(self.a * other.a + self.b * other.b, 0.0)
    }

    /// Returns `true` if both lines describe the same set of points.
    #[must_use]
    pub fn is_same_line(&self, other: &Line) -> bool {
        self.is_parallel(other) && self.is_collinear(other.anchor)
    }

    fn determinant(&self, other: &Line) -> f64 {
        self.a * other.b - other.a * self.b
    }

    /// Computes the single point shared by two lines.
    ///
    /// # Errors
    ///
    /// Returns [`GeometryError::ParallelLines`] if the lines are parallel,
    /// including when they coincide.
    pub fn intersection(&self, other: &Line) -> Result<VirtualPoint> {
        let det = self.determinant(other);
        if are_equal(det, 0.0) {
            return Err(GeometryError::ParallelLines.into());
        }
        let x = (self.b * other.c - other.b * self.c) / det;
        let y = (other.a * self.c - self.a * other.c) / det;
        Ok(VirtualPoint::new(x, y))
    }

    /// Returns the line perpendicular to this one through `through`.
    #[must_use]
    pub fn generate_perpendicular(&self, through: impl Into<VirtualPoint>) -> Line {
        Self::normalized(-self.b, self.a, through.into())
    }

    /// Foot of the perpendicular dropped from `point` onto the line.
    #[must_use]
    pub fn project(&self, point: impl Into<VirtualPoint>) -> VirtualPoint {
        let p = point.into();
        let d = self.signed_distance(p);
        VirtualPoint::new(p.x() - self.a * d, p.y() - self.b * d)
    }
}

impl PartialEq for Line {
    fn eq(&self, other: &Self) -> bool {
        self.is_same_line(other)
    }
}
