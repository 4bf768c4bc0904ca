//! Closed shapes and the capabilities they share.
//!
//! Every shape is an immutable value: transforms return a new shape and
//! fail with a geometry error instead of leaving the non-negative domain.
//! Predicates between two shapes are resolved through [`Outline`], which
//! reduces each shape to either a circle or a polygon boundary.

mod circle;
mod polygon;
mod rectangle;
mod triangle;

pub use circle::Circle;
pub use polygon::Polygon;
pub use rectangle::{Rectangle, Square};
pub use triangle::Triangle;

use std::fmt;

use crate::error::Result;

use super::bounding_box::BoundingBox;
use super::point::{Point, Vector, VirtualPoint};

/// Capabilities shared by every shape.
pub trait Geometric: Sized {
    /// Length of the boundary.
    fn perimeter(&self) -> f64;

    /// The point the shape rotates about by default and that
    /// [`move_centroid`](Geometric::move_centroid) relocates.
    fn centroid(&self) -> VirtualPoint;

    /// Rotates counter-clockwise by `angle` radians about `pivot`.
    ///
    /// # Errors
    ///
    /// Returns an error if the rotated shape leaves the non-negative domain.
    fn rotate(&self, angle: f64, pivot: impl Into<VirtualPoint>) -> Result<Self>;

    /// Displaces the shape by `vector`.
    ///
    /// # Errors
    ///
    /// Returns an error if the displaced shape leaves the non-negative domain.
    fn translate(&self, vector: Vector) -> Result<Self>;

    /// Smallest axis-aligned box covering the shape.
    fn bounding_box(&self) -> BoundingBox;

    /// The boundary used by cross-shape predicates.
    fn outline(&self) -> Outline<'_>;

    /// Rotates counter-clockwise by `degrees` about `pivot`.
    ///
    /// # Errors
    ///
    /// Returns an error if the rotated shape leaves the non-negative domain.
    fn rotate_degrees(&self, degrees: f64, pivot: impl Into<VirtualPoint>) -> Result<Self> {
        self.rotate(degrees.to_radians(), pivot)
    }

    /// Rotates counter-clockwise by `angle` radians about the centroid.
    ///
    /// # Errors
    ///
    /// Returns an error if the rotated shape leaves the non-negative domain.
    fn rotate_about_centroid(&self, angle: f64) -> Result<Self> {
        self.rotate(angle, self.centroid())
    }

    /// Translates the shape so its centroid lands on `target`.
    ///
    /// # Errors
    ///
    /// Returns an error if the moved shape leaves the non-negative domain.
    fn move_centroid(&self, target: Point) -> Result<Self> {
        self.translate(Vector::between(self.centroid(), target))
    }

    /// Returns `true` if `point` lies inside or on the boundary.
    fn contains_point(&self, point: impl Into<VirtualPoint>) -> bool {
        self.outline().contains_point(point.into())
    }

    /// Returns `true` if `other` lies inside this shape without crossing
    /// its boundary. Every shape contains itself.
    fn contains<S: Geometric>(&self, other: &S) -> bool {
        self.outline().contains(other.outline())
    }

    /// Returns `true` if the boundaries cross. Shapes that only touch do
    /// not intersect.
    fn intersects<S: Geometric>(&self, other: &S) -> bool {
        self.outline().intersects(other.outline())
    }

    /// Returns `true` if the boundaries cross or touch.
    fn intersects_inclusive<S: Geometric>(&self, other: &S) -> bool {
        self.outline().intersects_inclusive(other.outline())
    }
}

/// A borrowed view of a shape's boundary.
#[derive(Debug, Clone, Copy)]
pub enum Outline<'a> {
    Circle(&'a Circle),
    Polygon(&'a Polygon),
}

impl Outline<'_> {
    #[must_use]
    pub fn contains_point(self, point: VirtualPoint) -> bool {
        match self {
            Outline::Circle(c) => c.contains_point(point),
            Outline::Polygon(p) => p.contains_point(point),
        }
    }

    #[must_use]
    pub fn contains(self, other: Outline<'_>) -> bool {
        match (self, other) {
            (Outline::Circle(a), Outline::Circle(b)) => a.contains_circle(b),
            (Outline::Circle(a), Outline::Polygon(b)) => a.contains_polygon(b),
            (Outline::Polygon(a), Outline::Circle(b)) => a.contains_circle(b),
            (Outline::Polygon(a), Outline::Polygon(b)) => a.contains_polygon(b),
        }
    }

    #[must_use]
    pub fn intersects(self, other: Outline<'_>) -> bool {
        match (self, other) {
            (Outline::Circle(a), Outline::Circle(b)) => a.intersects_circle(b),
            (Outline::Circle(c), Outline::Polygon(p))
            | (Outline::Polygon(p), Outline::Circle(c)) => c.intersects_polygon(p),
            (Outline::Polygon(a), Outline::Polygon(b)) => a.intersects_polygon(b),
        }
    }

    #[must_use]
    pub fn intersects_inclusive(self, other: Outline<'_>) -> bool {
        match (self, other) {
            (Outline::Circle(a), Outline::Circle(b)) => a.intersects_circle_inclusive(b),
            (Outline::Circle(c), Outline::Polygon(p))
            | (Outline::Polygon(p), Outline::Circle(c)) => c.intersects_polygon_inclusive(p),
            (Outline::Polygon(a), Outline::Polygon(b)) => a.intersects_polygon_inclusive(b),
        }
    }

    /// Structural equality. A circle never equals a polygon.
    #[must_use]
    pub fn same_as(self, other: Outline<'_>) -> bool {
        match (self, other) {
            (Outline::Circle(a), Outline::Circle(b)) => a == b,
            (Outline::Polygon(a), Outline::Polygon(b)) => a == b,
            _ => false,
        }
    }
}

/// Any shape, as carried by colliders and render items.
#[derive(Debug, Clone)]
pub enum Shape {
    Circle(Circle),
    Polygon(Polygon),
    Triangle(Triangle),
    Rectangle(Rectangle),
    Square(Square),
}

impl Geometric for Shape {
    fn perimeter(&self) -> f64 {
        match self {
            Shape::Circle(s) => s.perimeter(),
            Shape::Polygon(s) => s.perimeter(),
            Shape::Triangle(s) => s.perimeter(),
            Shape::Rectangle(s) => s.perimeter(),
            Shape::Square(s) => s.perimeter(),
        }
    }

    fn centroid(&self) -> VirtualPoint {
        match self {
            Shape::Circle(s) => s.centroid(),
            Shape::Polygon(s) => s.centroid(),
            Shape::Triangle(s) => s.centroid(),
            Shape::Rectangle(s) => s.centroid(),
            Shape::Square(s) => s.centroid(),
        }
    }

    fn rotate(&self, angle: f64, pivot: impl Into<VirtualPoint>) -> Result<Self> {
        let pivot = pivot.into();
        Ok(match self {
            Shape::Circle(s) => Shape::Circle(s.rotate(angle, pivot)?),
            Shape::Polygon(s) => Shape::Polygon(s.rotate(angle, pivot)?),
            Shape::Triangle(s) => Shape::Triangle(s.rotate(angle, pivot)?),
            Shape::Rectangle(s) => Shape::Rectangle(s.rotate(angle, pivot)?),
            Shape::Square(s) => Shape::Square(s.rotate(angle, pivot)?),
        })
    }

    fn translate(&self, vector: Vector) -> Result<Self> {
        Ok(match self {
            Shape::Circle(s) => Shape::Circle(s.translate(vector)?),
            Shape::Polygon(s) => Shape::Polygon(s.translate(vector)?),
            Shape::Triangle(s) => Shape::Triangle(s.translate(vector)?),
            Shape::Rectangle(s) => Shape::Rectangle(s.translate(vector)?),
            Shape::Square(s) => Shape::Square(s.translate(vector)?),
        })
    }

    fn bounding_box(&self) -> BoundingBox {
        match self.outline() {
            Outline::Circle(c) => BoundingBox::from_circle(c),
            Outline::Polygon(p) => BoundingBox::from_polygon(p),
        }
    }

    fn outline(&self) -> Outline<'_> {
        match self {
            Shape::Circle(s) => s.outline(),
            Shape::Polygon(s) => s.outline(),
            Shape::Triangle(s) => s.outline(),
            Shape::Rectangle(s) => s.outline(),
            Shape::Square(s) => s.outline(),
        }
    }
}

impl PartialEq for Shape {
    fn eq(&self, other: &Self) -> bool {
        self.outline().same_as(other.outline())
    }
}

impl fmt::Display for Shape {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Shape::Circle(s) => s.fmt(f),
            Shape::Polygon(s) => s.fmt(f),
            Shape::Triangle(s) => s.fmt(f),
            Shape::Rectangle(s) => s.fmt(f),
            Shape::Square(s) => s.fmt(f),
        }
    }
}

impl From<Circle> for Shape {
    fn from(shape: Circle) -> Self {
        Shape::Circle(shape)
    }
}

impl From<Polygon> for Shape {
    fn from(shape: Polygon) -> Self {
        Shape::Polygon(shape)
    }
}

impl From<Triangle> for Shape {
    fn from(shape: Triangle) -> Self {
        Shape::Triangle(shape)
    }
}

impl From<Rectangle> for Shape {
    fn from(shape: Rectangle) -> Self {
        Shape::Rectangle(shape)
    }
}

impl From<Square> for Shape {
    fn from(shape: Square) -> Self {
        Shape::Square(shape)
    }
}
