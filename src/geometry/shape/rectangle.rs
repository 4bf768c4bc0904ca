use std::fmt;
use std::str::FromStr;

use crate::error::{GeoscanError, GeometryError, Result};
use crate::geometry::bounding_box::BoundingBox;
use crate::geometry::parse::parse_points;
use crate::geometry::point::{Point, Vector, VirtualPoint};
use crate::math::are_equal;

use super::polygon::write_vertices;
use super::{Geometric, Outline, Polygon};

/// A four-sided polygon with right angles, in any orientation.
#[derive(Debug, Clone, PartialEq)]
pub struct Rectangle(Polygon);

impl Rectangle {
    /// Creates a rectangle from its four vertices in boundary order.
    ///
    /// # Errors
    ///
    /// Returns an error if the vertices do not form a valid polygon or its
    /// angles are not right angles.
    pub fn new(vertices: [Point; 4]) -> Result<Self> {
        Self::try_from(Polygon::new(vertices.to_vec())?)
    }

    /// Creates the axis-aligned rectangle spanned by two opposite corners.
    ///
    /// # Errors
    ///
    /// Returns an error if the corners share an x or a y coordinate.
    pub fn from_corners(corner: Point, opposite: Point) -> Result<Self> {
        Self::new([
            corner,
            Point::new(corner.x(), opposite.y())?,
            opposite,
            Point::new(opposite.x(), corner.y())?,
        ])
    }

    #[must_use]
    pub fn as_polygon(&self) -> &Polygon {
        &self.0
    }
}

impl TryFrom<Polygon> for Rectangle {
    type Error = GeoscanError;

    fn try_from(polygon: Polygon) -> Result<Self> {
        let found = polygon.vertices().len();
        if found != 4 {
            return Err(GeometryError::VertexCount {
                shape: "rectangle",
                expected: 4,
                found,
            }
            .into());
        }
        let sides = polygon.sides();
        let right_angled = sides[0].line().is_perpendicular(sides[1].line())
            && sides[0].line().is_perpendicular(sides[3].line())
            && sides[1].line().is_perpendicular(sides[2].line());
        if !right_angled {
            return Err(GeometryError::NotRectangular.into());
        }
        Ok(Self(polygon))
    }
}

impl From<Rectangle> for Polygon {
    fn from(rectangle: Rectangle) -> Self {
        rectangle.0
    }
}

impl AsRef<Polygon> for Rectangle {
    fn as_ref(&self) -> &Polygon {
        &self.0
    }
}

impl Geometric for Rectangle {
    fn perimeter(&self) -> f64 {
        self.0.perimeter()
    }

    fn centroid(&self) -> VirtualPoint {
        self.0.centroid()
    }

    fn rotate(&self, angle: f64, pivot: impl Into<VirtualPoint>) -> Result<Self> {
        Self::try_from(self.0.rotate(angle, pivot)?)
    }

    fn translate(&self, vector: Vector) -> Result<Self> {
        Self::try_from(self.0.translate(vector)?)
    }

    fn bounding_box(&self) -> BoundingBox {
        self.0.bounding_box()
    }

    fn outline(&self) -> Outline<'_> {
        Outline::Polygon(&self.0)
    }
}

impl fmt::Display for Rectangle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Rectangle")?;
        write_vertices(f, self.0.vertices())
    }
}

impl FromStr for Rectangle {
    type Err = GeoscanError;

    /// Parses the four vertices as `"x0 y0 x1 y1 x2 y2 x3 y3"`.
    fn from_str(s: &str) -> Result<Self> {
        Self::try_from(Polygon::new(parse_points(s)?)?)
    }
}

/// A rectangle with four sides of equal length.
#[derive(Debug, Clone, PartialEq)]
pub struct Square(Rectangle);

impl Square {
    /// Creates a square from its four vertices in boundary order.
    ///
    /// # Errors
    ///
    /// Returns an error if the vertices do not form a rectangle with equal
    /// sides.
    pub fn new(vertices: [Point; 4]) -> Result<Self> {
        Self::try_from(Rectangle::new(vertices)?)
    }

    /// Creates the axis-aligned square with its lowest corner at `corner`.
    ///
    /// # Errors
    ///
    /// Returns an error if `side` is not positive.
    pub fn with_side(corner: Point, side: f64) -> Result<Self> {
        let opposite = Point::new(corner.x() + side, corner.y() + side)?;
        Self::try_from(Rectangle::from_corners(corner, opposite)?)
    }

    #[must_use]
    pub fn as_polygon(&self) -> &Polygon {
        self.0.as_polygon()
    }

    #[must_use]
    pub fn side(&self) -> f64 {
        self.as_polygon().sides()[0].length()
    }
}

impl TryFrom<Rectangle> for Square {
    type Error = GeoscanError;

    fn try_from(rectangle: Rectangle) -> Result<Self> {
        let sides = rectangle.as_polygon().sides();
        let side = sides[0].length();
        if !sides.iter().all(|s| are_equal(s.length(), side)) {
            return Err(GeometryError::UnequalSides.into());
        }
        Ok(Self(rectangle))
    }
}

impl From<Square> for Rectangle {
    fn from(square: Square) -> Self {
        square.0
    }
}

impl AsRef<Polygon> for Square {
    fn as_ref(&self) -> &Polygon {
        self.as_polygon()
    }
}

impl Geometric for Square {
    fn perimeter(&self) -> f64 {
        self.0.perimeter()
    }

    fn centroid(&self) -> VirtualPoint {
        self.0.centroid()
    }

    fn rotate(&self, angle: f64, pivot: impl Into<VirtualPoint>) -> Result<Self> {
        Self::try_from(self.0.rotate(angle, pivot)?)
    }

    fn translate(&self, vector: Vector) -> Result<Self> {
        Self::try_from(self.0.translate(vector)?)
    }

    fn bounding_box(&self) -> BoundingBox {
        self.0.bounding_box()
    }

    fn outline(&self) -> Outline<'_> {
        self.0.outline()
    }
}

impl fmt::Display for Square {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Square")?;
        write_vertices(f, self.as_polygon().vertices())
    }
}

impl FromStr for Square {
    type Err = GeoscanError;

    /// Parses the four vertices as `"x0 y0 x1 y1 x2 y2 x3 y3"`.
    fn from_str(s: &str) -> Result<Self> {
        Self::try_from(s.parse::<Rectangle>()?)
    }
}
