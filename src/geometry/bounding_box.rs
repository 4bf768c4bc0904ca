use crate::error::{GeometryError, Result};
use crate::math::{is_greater_or_equal, is_less_or_equal};

use super::point::{Point, VirtualPoint};
use super::shape::{Circle, Polygon};

/// An axis-aligned bounding box.
///
/// Used as a coarse broad-phase test: two boxes may overlap while the
/// shapes they cover do not.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BoundingBox {
    min: Point,
    max: Point,
}

impl BoundingBox {
    /// Computes the box covering `points`.
    ///
    /// # Errors
    ///
    /// Returns an error if `points` is empty.
    pub fn from_points(points: &[Point]) -> Result<Self> {
        let (first, rest) = points
            .split_first()
            .ok_or(GeometryError::EmptyPointSet)?;
        let (mut min_x, mut min_y) = (first.x(), first.y());
        let (mut max_x, mut max_y) = (min_x, min_y);
        for p in rest {
            min_x = min_x.min(p.x());
            min_y = min_y.min(p.y());
            max_x = max_x.max(p.x());
            max_y = max_y.max(p.y());
        }
        Ok(Self {
            min: Point::clamped(min_x, min_y),
            max: Point::clamped(max_x, max_y),
        })
    }

    /// Computes the box covering the polygon's vertices.
    #[must_use]
    pub fn from_polygon(polygon: &Polygon) -> Self {
        let vertices = polygon.vertices();
        let fold = |pick: fn(f64, f64) -> f64, coord: fn(&Point) -> f64| {
            vertices.iter().map(coord).reduce(pick).unwrap_or_default()
        };
        Self {
            min: Point::clamped(fold(f64::min, Point::x), fold(f64::min, Point::y)),
            max: Point::clamped(fold(f64::max, Point::x), fold(f64::max, Point::y)),
        }
    }

    /// Computes the box covering the circle's full extent.
    #[must_use]
    pub fn from_circle(circle: &Circle) -> Self {
        let (c, r) = (circle.center(), circle.radius());
        Self {
            min: Point::clamped(c.x() - r, c.y() - r),
            max: Point::clamped(c.x() + r, c.y() + r),
        }
    }

    /// Returns the lower-left corner.
    #[must_use]
    pub fn min(&self) -> Point {
        self.min
    }

    /// Returns the upper-right corner.
    #[must_use]
    pub fn max(&self) -> Point {
        self.max
    }

    #[must_use]
    pub fn width(&self) -> f64 {
        self.max.x() - self.min.x()
    }

    #[must_use]
    pub fn height(&self) -> f64 {
        self.max.y() - self.min.y()
    }

    /// Returns `true` if `point` lies inside or on the box.
    #[must_use]
    pub fn contains_point(&self, point: impl Into<VirtualPoint>) -> bool {
        let p = point.into();
        is_greater_or_equal(p.x(), self.min.x())
            && is_less_or_equal(p.x(), self.max.x())
            && is_greater_or_equal(p.y(), self.min.y())
            && is_less_or_equal(p.y(), self.max.y())
    }

    /// Returns `true` if the boxes overlap with positive area.
    ///
    /// Boxes that only share an edge or a corner do not intersect.
    #[must_use]
    pub fn intersects(&self, other: &BoundingBox) -> bool {
        let disjoint_x = is_less_or_equal(self.max.x(), other.min.x())
            || is_greater_or_equal(self.min.x(), other.max.x());
        let disjoint_y = is_less_or_equal(self.max.y(), other.min.y())
            || is_greater_or_equal(self.min.y(), other.max.y());
        !disjoint_x && !disjoint_y
    }
}
