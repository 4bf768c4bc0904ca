use std::f64::consts::TAU;
use std::fmt;
use std::str::FromStr;

use crate::error::{GeoscanError, GeometryError, Result};
use crate::geometry::bounding_box::BoundingBox;
use crate::geometry::parse::parse_fixed;
use crate::geometry::point::{Point, Vector, VirtualPoint};
use crate::geometry::segment::LineSegment;
use crate::math::{are_equal, is_greater_or_equal, is_less_or_equal};

use super::{Geometric, Outline, Polygon};

/// A circle whose whole extent lies in the non-negative domain.
#[derive(Debug, Clone, Copy)]
pub struct Circle {
    center: Point,
    radius: f64,
}

impl Circle {
    /// Creates a new circle.
    ///
    /// # Errors
    ///
    /// Returns an error if the radius is not finite and strictly positive,
    /// or if the circle would reach below zero on either axis.
    pub fn new(center: Point, radius: f64) -> Result<Self> {
        if !radius.is_finite() || radius <= 0.0 {
            return Err(GeometryError::NonPositiveRadius(radius).into());
        }
        let (min_x, min_y) = (center.x() - radius, center.y() - radius);
        if !is_greater_or_equal(min_x, 0.0) || !is_greater_or_equal(min_y, 0.0) {
            return Err(GeometryError::OutOfDomain { x: min_x, y: min_y }.into());
        }
        Ok(Self { center, radius })
    }

    #[must_use]
    pub fn center(&self) -> Point {
        self.center
    }

    #[must_use]
    pub fn radius(&self) -> f64 {
        self.radius
    }

    fn is_on_circumference(&self, point: impl Into<VirtualPoint>) -> bool {
        are_equal(self.center.dist(point), self.radius)
    }

    /// Returns `true` if `point` lies strictly inside the circle.
    #[must_use]
    pub fn contains_point_exclusive(&self, point: impl Into<VirtualPoint>) -> bool {
        let d = self.center.dist(point);
        d < self.radius && !are_equal(d, self.radius)
    }

    #[must_use]
    pub fn contains_circle(&self, other: &Circle) -> bool {
        is_less_or_equal(self.center.dist(other.center) + other.radius, self.radius)
    }

    /// A polygon lies inside a circle exactly when all its vertices do.
    #[must_use]
    pub fn contains_polygon(&self, polygon: &Polygon) -> bool {
        polygon.vertices().iter().all(|v| self.contains_point(*v))
    }

    /// Returns `true` if the segment crosses the circumference.
    ///
    /// A segment lying strictly inside never intersects, and neither does
    /// one that only touches the circle.
    #[must_use]
    pub fn intersects_segment(&self, segment: &LineSegment) -> bool {
        let first_inside = self.contains_point_exclusive(segment.first());
        let second_inside = self.contains_point_exclusive(segment.second());
        if first_inside != second_inside {
            return true;
        }
        if first_inside {
            return false;
        }
        let foot = segment.line().project(self.center);
        if !segment.contains(foot) {
            return false;
        }
        let d = self.center.dist(foot);
        d < self.radius && !are_equal(d, self.radius)
    }

    /// Returns `true` if the segment crosses or touches the circumference.
    #[must_use]
    pub fn intersects_segment_inclusive(&self, segment: &LineSegment) -> bool {
        let first_inside = self.contains_point_exclusive(segment.first());
        let second_inside = self.contains_point_exclusive(segment.second());
        if first_inside != second_inside {
            return true;
        }
        if first_inside {
            return false;
        }
        if self.is_on_circumference(segment.first()) || self.is_on_circumference(segment.second())
        {
            return true;
        }
        let foot = segment.line().project(self.center);
        segment.contains(foot) && is_less_or_equal(self.center.dist(foot), self.radius)
    }

    /// Returns `true` if the circumferences cross at two points.
    #[must_use]
    pub fn intersects_circle(&self, other: &Circle) -> bool {
        if self.contains_circle(other) || other.contains_circle(self) {
            return false;
        }
        let d = self.center.dist(other.center);
        let reach = self.radius + other.radius;
        d < reach && !are_equal(d, reach)
    }

    /// Returns `true` if the circumferences cross or touch.
    #[must_use]
    pub fn intersects_circle_inclusive(&self, other: &Circle) -> bool {
        if self.contains_circle(other) || other.contains_circle(self) {
            return false;
        }
        is_less_or_equal(self.center.dist(other.center), self.radius + other.radius)
    }

    #[must_use]
    pub fn intersects_polygon(&self, polygon: &Polygon) -> bool {
        polygon.sides().iter().any(|s| self.intersects_segment(s))
    }

    #[must_use]
    pub fn intersects_polygon_inclusive(&self, polygon: &Polygon) -> bool {
        polygon
            .sides()
            .iter()
            .any(|s| self.intersects_segment_inclusive(s))
    }
}

impl Geometric for Circle {
    fn perimeter(&self) -> f64 {
        TAU * self.radius
    }

    fn centroid(&self) -> VirtualPoint {
        self.center.as_virtual()
    }

    fn rotate(&self, angle: f64, pivot: impl Into<VirtualPoint>) -> Result<Self> {
        Self::new(self.center.rotate(angle, pivot)?, self.radius)
    }

    fn translate(&self, vector: Vector) -> Result<Self> {
        Self::new(self.center.translate(vector)?, self.radius)
    }

    fn bounding_box(&self) -> BoundingBox {
        BoundingBox::from_circle(self)
    }

    fn outline(&self) -> Outline<'_> {
        Outline::Circle(self)
    }

    fn contains_point(&self, point: impl Into<VirtualPoint>) -> bool {
        is_less_or_equal(self.center.dist(point), self.radius)
    }
}

impl PartialEq for Circle {
    fn eq(&self, other: &Self) -> bool {
        self.center == other.center && are_equal(self.radius, other.radius)
    }
}

impl fmt::Display for Circle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Circle[center={}, radius={}]", self.center, self.radius)
    }
}

impl FromStr for Circle {
    type Err = GeoscanError;

    /// Parses `"x y radius"`.
    fn from_str(s: &str) -> Result<Self> {
        let [x, y, radius] = parse_fixed::<3>(s)?;
        Self::new(Point::new(x, y)?, radius)
    }
}
