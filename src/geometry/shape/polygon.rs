use std::fmt;
use std::str::FromStr;

use crate::error::{GeoscanError, GeometryError, Result};
use crate::geometry::bounding_box::BoundingBox;
use crate::geometry::parse::parse_counted_points;
use crate::geometry::point::{Point, Vector, VirtualPoint};
use crate::geometry::segment::LineSegment;
use crate::math::polygon_2d::winding_number;
use crate::math::Point2;

use super::{Circle, Geometric, Outline};

/// A simple polygon with at least three vertices.
///
/// Sides run between consecutive vertices, the last one closing back to
/// the first. Construction rejects repeated consecutive vertices, three
/// consecutive collinear vertices and sides that cross each other.
#[derive(Debug, Clone)]
pub struct Polygon {
    vertices: Vec<Point>,
    sides: Vec<LineSegment>,
}

impl Polygon {
    /// Creates a new polygon from its vertices in boundary order.
    ///
    /// # Errors
    ///
    /// Returns an error if fewer than 3 vertices are given, if two
    /// consecutive vertices coincide, if three consecutive vertices are
    /// collinear, or if two non-adjacent sides cross.
    pub fn new(vertices: Vec<Point>) -> Result<Self> {
        let n = vertices.len();
        if n < 3 {
            return Err(GeometryError::TooFewVertices(n).into());
        }

        let sides = (0..n)
            .map(|i| LineSegment::new(vertices[i], vertices[(i + 1) % n]))
            .collect::<Result<Vec<_>>>()?;

        for (i, side) in sides.iter().enumerate() {
            let k = (i + 2) % n;
            if side.line().is_collinear(vertices[k]) {
                return Err(GeometryError::CollinearVertices(i, (i + 1) % n, k).into());
            }
        }

        for i in 0..n {
            // Side 0 and side n-1 share vertex 0.
            let last = if i == 0 { n - 1 } else { n };
            for j in (i + 2)..last {
                if sides[i].intersects(&sides[j]) {
                    return Err(GeometryError::SelfIntersecting(i, j).into());
                }
            }
        }

        Ok(Self { vertices, sides })
    }

    #[must_use]
    pub fn vertices(&self) -> &[Point] {
        &self.vertices
    }

    #[must_use]
    pub fn sides(&self) -> &[LineSegment] {
        &self.sides
    }

    #[must_use]
    pub fn num_sides(&self) -> usize {
        self.sides.len()
    }

    fn map_vertices(&self, f: impl Fn(&Point) -> Result<Point>) -> Result<Vec<Point>> {
        self.vertices.iter().map(f).collect()
    }

    /// Returns `true` if any side crosses `segment` away from endpoints.
    #[must_use]
    pub fn intersects_segment(&self, segment: &LineSegment) -> bool {
        self.sides.iter().any(|s| s.intersects(segment))
    }

    /// Returns `true` if any side crosses or touches `segment`.
    #[must_use]
    pub fn intersects_segment_inclusive(&self, segment: &LineSegment) -> bool {
        self.sides.iter().any(|s| s.intersects_inclusive(segment))
    }

    #[must_use]
    pub fn intersects_polygon(&self, other: &Polygon) -> bool {
        self.sides.iter().any(|s| other.intersects_segment(s))
    }

    #[must_use]
    pub fn intersects_polygon_inclusive(&self, other: &Polygon) -> bool {
        self.sides.iter().any(|s| other.intersects_segment_inclusive(s))
    }

    #[must_use]
    pub fn contains_polygon(&self, other: &Polygon) -> bool {
        !self.intersects_polygon(other) && other.vertices.iter().all(|v| self.contains_point(*v))
    }

    #[must_use]
    pub fn contains_circle(&self, circle: &Circle) -> bool {
        !circle.intersects_polygon(self)
            && !circle.contains_polygon(self)
            && self.contains_point(circle.center())
    }
}

impl Geometric for Polygon {
    fn perimeter(&self) -> f64 {
        self.sides.iter().map(LineSegment::length).sum()
    }

    /// Average of the vertices.
    #[allow(clippy::cast_precision_loss)]
    fn centroid(&self) -> VirtualPoint {
        let n = self.vertices.len() as f64;
        let (sx, sy) = self
            .vertices
            .iter()
            .fold((0.0, 0.0), |(sx, sy), v| (sx + v.x(), sy + v.y()));
        VirtualPoint::new(sx / n, sy / n)
    }

    fn rotate(&self, angle: f64, pivot: impl Into<VirtualPoint>) -> Result<Self> {
        let pivot = pivot.into();
        Self::new(self.map_vertices(|v| v.rotate(angle, pivot))?)
    }

    fn translate(&self, vector: Vector) -> Result<Self> {
        Self::new(self.map_vertices(|v| v.translate(vector))?)
    }

    fn bounding_box(&self) -> BoundingBox {
        BoundingBox::from_polygon(self)
    }

    fn outline(&self) -> Outline<'_> {
        Outline::Polygon(self)
    }

    /// Boundary points count as inside.
    fn contains_point(&self, point: impl Into<VirtualPoint>) -> bool {
        let p = point.into();
        if self.sides.iter().any(|s| s.contains(p)) {
            return true;
        }
        let verts: Vec<Point2> = self
            .vertices
            .iter()
            .map(|v| Point2::new(v.x(), v.y()))
            .collect();
        winding_number(&Point2::new(p.x(), p.y()), &verts) != 0
    }
}

/// Equal when the vertex sequences match pairwise.
impl PartialEq for Polygon {
    fn eq(&self, other: &Self) -> bool {
        self.vertices == other.vertices
    }
}

pub(super) fn write_vertices(f: &mut fmt::Formatter<'_>, vertices: &[Point]) -> fmt::Result {
    write!(f, "[")?;
    for (i, v) in vertices.iter().enumerate() {
        if i > 0 {
            write!(f, ", ")?;
        }
        write!(f, "{v}")?;
    }
    write!(f, "]")
}

impl fmt::Display for Polygon {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Polygon")?;
        write_vertices(f, &self.vertices)
    }
}

impl FromStr for Polygon {
    type Err = GeoscanError;

    /// Parses `"n x0 y0 ... x(n-1) y(n-1)"`.
    fn from_str(s: &str) -> Result<Self> {
        Self::new(parse_counted_points(s)?)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use std::f64::consts::{FRAC_PI_2, FRAC_PI_4};

    use approx::assert_abs_diff_eq;

    use super::*;

    fn p(x: f64, y: f64) -> Point {
        Point::new(x, y).unwrap()
    }

    fn poly(coords: &[(f64, f64)]) -> Polygon {
        Polygon::new(coords.iter().map(|&(x, y)| p(x, y)).collect()).unwrap()
    }

    fn try_poly(coords: &[(f64, f64)]) -> Result<Polygon> {
        Polygon::new(coords.iter().map(|&(x, y)| p(x, y)).collect())
    }

    fn unit_square() -> Polygon {
        poly(&[(1.0, 1.0), (1.0, 2.0), (2.0, 2.0), (2.0, 1.0)])
    }

    fn circle(x: f64, y: f64, r: f64) -> Circle {
        Circle::new(p(x, y), r).unwrap()
    }

    #[test]
    fn too_few_vertices() {
        let err = try_poly(&[(0.0, 0.0), (1.0, 1.0)]).unwrap_err();
        assert!(matches!(
            err,
            GeoscanError::Geometry(GeometryError::TooFewVertices(2))
        ));
    }

    #[test]
    fn collinear_vertices_fail() {
        assert!(try_poly(&[(0.0, 0.0), (0.0, 2.0), (1.0, 3.0), (2.0, 4.0), (4.0, 2.0)]).is_err());
        let err = try_poly(&[(0.0, 0.0), (0.0, 2.0), (2.0, 2.0), (1.0, 1.0)]).unwrap_err();
        assert!(matches!(
            err,
            GeoscanError::Geometry(GeometryError::CollinearVertices(2, 3, 0))
        ));
    }

    #[test]
    fn repeated_vertex_fails() {
        assert!(try_poly(&[(0.0, 0.0), (0.0, 2.0), (0.0, 2.0), (2.0, 2.0)]).is_err());
    }

    #[test]
    fn self_intersection_fails() {
        let err = try_poly(&[(0.0, 0.0), (2.0, 1.0), (2.0, 0.0), (0.0, 2.0)]).unwrap_err();
        assert!(matches!(
            err,
            GeoscanError::Geometry(GeometryError::SelfIntersecting(0, 2))
        ));
    }

    #[test]
    fn perimeter_and_sides() {
        let square = unit_square();
        assert_abs_diff_eq!(square.perimeter(), 4.0);
        assert_eq!(square.num_sides(), 4);
        assert_eq!(square.sides()[3].second(), p(1.0, 1.0));
    }

    #[test]
    fn rotate_about_corner() {
        let rotated = unit_square().rotate(FRAC_PI_2, p(2.0, 1.0)).unwrap();
        assert_eq!(rotated, poly(&[(2.0, 0.0), (1.0, 0.0), (1.0, 1.0), (2.0, 1.0)]));
    }

    #[test]
    fn rotate_about_centroid_keeps_centroid() {
        let square = unit_square();
        let rotated = square.rotate_about_centroid(FRAC_PI_4).unwrap();
        assert_eq!(rotated.centroid(), square.centroid());
        let half = 0.5_f64.sqrt();
        assert_eq!(rotated.vertices()[0], p(1.5, 1.5 - half));
    }

    #[test]
    fn translate_and_move_centroid() {
        let square = unit_square();
        assert_eq!(
            square.translate(Vector::new(1.0, 1.0)).unwrap(),
            poly(&[(2.0, 2.0), (2.0, 3.0), (3.0, 3.0), (3.0, 2.0)])
        );
        assert_eq!(
            square.move_centroid(p(2.5, 1.5)).unwrap(),
            poly(&[(2.0, 1.0), (2.0, 2.0), (3.0, 2.0), (3.0, 1.0)])
        );
        assert!(square.translate(Vector::new(-4.0, 0.0)).is_err());
    }

    #[test]
    fn rotate_out_of_domain_fails() {
        let tri = poly(&[(1.0, 1.0), (2.0, 3.0), (3.0, 3.0)]);
        assert!(tri.rotate(-FRAC_PI_2, p(0.0, 0.0)).is_err());
    }

    #[test]
    fn vertex_order_matters_for_equality() {
        let a = poly(&[(1.0, 1.0), (1.0, 2.0), (2.0, 2.0), (2.0, 1.0)]);
        let b = poly(&[(1.0, 2.0), (2.0, 2.0), (2.0, 1.0), (1.0, 1.0)]);
        assert_eq!(a, unit_square());
        assert_ne!(a, b);
    }

    #[test]
    fn contains_points_inside_and_on_boundary() {
        let notched = poly(&[(1.0, 1.0), (2.0, 6.0), (8.0, 5.0), (7.0, 1.0), (6.0, 3.0)]);
        assert!(notched.contains_point(p(4.0, 4.0)));
        assert!(notched.contains_point(p(1.0, 1.0)));
        assert!(notched.contains_point(p(5.0, 5.5)));
        assert!(!notched.contains_point(p(6.0, 2.0)));
        assert!(!notched.contains_point(p(9.0, 5.0)));
    }

    #[test]
    fn contains_polygons() {
        let outer = poly(&[(1.0, 1.0), (2.0, 6.0), (8.0, 5.0), (7.0, 1.0), (6.0, 3.0)]);
        assert!(outer.contains(&poly(&[(2.0, 2.0), (3.0, 5.0), (5.0, 4.0), (7.0, 4.0)])));
        assert!(!outer.contains(&poly(&[(2.0, 2.0), (3.0, 5.0), (5.0, 4.0), (5.0, 2.0)])));

        let touching = poly(&[(1.0, 1.0), (2.0, 6.0), (8.0, 6.0), (7.0, 1.0), (6.0, 3.0)]);
        assert!(touching.contains(&poly(&[(2.0, 2.0), (3.0, 6.0), (7.0, 6.0), (7.0, 4.0)])));
        assert!(touching.contains(&touching.clone()));
    }

    #[test]
    fn contains_circles() {
        let outer = poly(&[(1.0, 1.0), (2.0, 6.0), (8.0, 5.0), (7.0, 1.0), (6.0, 3.0)]);
        assert!(outer.contains(&circle(4.0, 4.0, 1.5)));
        assert!(!outer.contains(&circle(4.0, 4.0, 2.0)));

        let small = poly(&[(2.0, 2.0), (2.0, 3.0), (3.0, 3.0), (3.0, 2.0)]);
        assert!(!small.contains(&circle(2.5, 2.5, 2.0)));
        assert!(unit_square().contains(&circle(1.5, 1.5, 0.5)));
    }

    #[test]
    fn intersects_circles() {
        let square = unit_square();
        assert!(square.intersects(&circle(1.0, 1.0, 0.5)));
        assert!(square.intersects_inclusive(&circle(3.0, 1.5, 1.0)));
        assert!(!square.intersects(&circle(3.0, 1.5, 1.0)));

        let ring = circle(4.0, 4.0, 2.0);
        assert!(poly(&[(7.0, 2.0), (4.0, 7.0), (7.0, 7.0)]).intersects(&ring));
        assert!(!poly(&[(7.0, 2.0), (6.0, 7.0), (7.0, 7.0)]).intersects(&ring));
        assert!(!poly(&[(6.0, 2.0), (6.0, 7.0), (7.0, 7.0)]).intersects(&ring));
    }

    #[test]
    fn intersects_polygons() {
        let a = poly(&[(1.0, 1.0), (4.0, 1.0), (4.0, 4.0), (1.0, 4.0)]);
        let b = poly(&[(3.0, 3.0), (5.0, 3.0), (5.0, 5.0), (3.0, 5.0)]);
        assert!(a.intersects(&b));

        let left = poly(&[(1.0, 1.0), (1.0, 2.0), (2.0, 2.0), (2.0, 1.0)]);
        let right = poly(&[(2.0, 1.0), (2.0, 2.0), (3.0, 2.0), (3.0, 1.0)]);
        assert!(!left.intersects(&right));
        assert!(left.intersects_inclusive(&right));

        let far = poly(&[(5.0, 5.0), (5.0, 6.0), (6.0, 6.0), (6.0, 5.0)]);
        assert!(!left.intersects_inclusive(&far));
    }

    #[test]
    fn parse_and_display() {
        let parsed: Polygon = "3 0 0 2 0 1 1".parse().unwrap();
        assert_eq!(parsed, poly(&[(0.0, 0.0), (2.0, 0.0), (1.0, 1.0)]));
        assert_eq!(parsed.to_string(), "Polygon[(0,0), (2,0), (1,1)]");
        assert!("3 0 0 1 1 2 2".parse::<Polygon>().is_err());
        assert!("9223372036854775808 0 0 1 0 1 1".parse::<Polygon>().is_err());
    }
}
