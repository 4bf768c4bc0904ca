use std::fmt;
use std::str::FromStr;

use crate::error::{GeoscanError, GeometryError, Result};
use crate::geometry::bounding_box::BoundingBox;
use crate::geometry::parse::parse_points;
use crate::geometry::point::{Point, Vector, VirtualPoint};

use super::polygon::write_vertices;
use super::{Geometric, Outline, Polygon};

/// A polygon with exactly three vertices.
#[derive(Debug, Clone, PartialEq)]
pub struct Triangle(Polygon);

impl Triangle {
    /// Creates a new triangle.
    ///
    /// # Errors
    ///
    /// Returns an error if the vertices are collinear or two coincide.
    pub fn new(vertices: [Point; 3]) -> Result<Self> {
        Self::try_from(Polygon::new(vertices.to_vec())?)
    }

    #[must_use]
    pub fn as_polygon(&self) -> &Polygon {
        &self.0
    }
}

impl TryFrom<Polygon> for Triangle {
    type Error = GeoscanError;

    fn try_from(polygon: Polygon) -> Result<Self> {
        let found = polygon.vertices().len();
        if found != 3 {
            return Err(GeometryError::VertexCount {
                shape: "triangle",
                expected: 3,
                found,
            }
            .into());
        }
        Ok(Self(polygon))
    }
}

impl From<Triangle> for Polygon {
    fn from(triangle: Triangle) -> Self {
        triangle.0
    }
}

impl AsRef<Polygon> for Triangle {
    fn as_ref(&self) -> &Polygon {
        &self.0
    }
}

impl Geometric for Triangle {
    fn perimeter(&self) -> f64 {
        self.0.perimeter()
    }

    fn centroid(&self) -> VirtualPoint {
        self.0.centroid()
    }

    fn rotate(&self, angle: f64, pivot: impl Into<VirtualPoint>) -> Result<Self> {
        Ok(Self(self.0.rotate(angle, pivot)?))
    }

    fn translate(&self, vector: Vector) -> Result<Self> {
        Ok(Self(self.0.translate(vector)?))
    }

    fn bounding_box(&self) -> BoundingBox {
        self.0.bounding_box()
    }

    fn outline(&self) -> Outline<'_> {
        Outline::Polygon(&self.0)
    }
}

impl fmt::Display for Triangle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Triangle")?;
        write_vertices(f, self.0.vertices())
    }
}

impl FromStr for Triangle {
    type Err = GeoscanError;

    /// Parses `"x0 y0 x1 y1 x2 y2"`.
    fn from_str(s: &str) -> Result<Self> {
        Self::try_from(Polygon::new(parse_points(s)?)?)
    }
}
