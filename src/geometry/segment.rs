use crate::error::Result;
use crate::math::{is_greater_or_equal, is_less_or_equal};

use super::line::Line;
use super::point::{Point, VirtualPoint};

/// A bounded portion of a [`Line`] between two distinct endpoints.
#[derive(Debug, Clone, Copy)]
pub struct LineSegment {
    first: Point,
    second: Point,
    line: Line,
}

impl LineSegment {
    /// Creates a segment from `first` to `second`.
    ///
    /// # Errors
    ///
    /// Returns an error if the endpoints coincide.
    pub fn new(first: Point, second: Point) -> Result<Self> {
        let line = Line::new(first, second)?;
        Ok(Self {
            first,
            second,
            line,
        })
    }

    /// Endpoint the segment starts from.
    #[must_use]
    pub fn first(&self) -> Point {
        self.first
    }

    /// Endpoint the segment ends at.
    #[must_use]
    pub fn second(&self) -> Point {
        self.second
    }

    /// Returns the line the segment lies on.
    #[must_use]
    pub fn line(&self) -> &Line {
        &self.line
    }

    #[must_use]
    pub fn length(&self) -> f64 {
        self.first.dist(self.second)
    }

    /// The endpoint with the strictly smaller y, or `second` on a tie.
    #[must_use]
    pub fn lower_endpoint(&self) -> Point {
        if self.first.y() < self.second.y() {
            self.first
        } else {
            self.second
        }
    }

    /// Returns `true` if `point` equals either endpoint.
    #[must_use]
    pub fn is_endpoint(&self, point: impl Into<VirtualPoint>) -> bool {
        let p = point.into();
        p == self.first.as_virtual() || p == self.second.as_virtual()
    }

    fn within_extent(&self, p: VirtualPoint) -> bool {
        let (min_x, max_x) = min_max(self.first.x(), self.second.x());
        let (min_y, max_y) = min_max(self.first.y(), self.second.y());
        is_greater_or_equal(p.x(), min_x)
            && is_less_or_equal(p.x(), max_x)
            && is_greater_or_equal(p.y(), min_y)
            && is_less_or_equal(p.y(), max_y)
    }

    /// Returns `true` if `point` lies on the segment, endpoints included.
    #[must_use]
    pub fn contains(&self, point: impl Into<VirtualPoint>) -> bool {
        let p = point.into();
        self.line.is_collinear(p) && self.within_extent(p)
    }

    /// Returns `true` if `point` lies on the segment but is not an endpoint.
    #[must_use]
    pub fn contains_exclusive(&self, point: impl Into<VirtualPoint>) -> bool {
        let p = point.into();
        self.contains(p) && !self.is_endpoint(p)
    }

    /// Returns `true` if `other` lies entirely on this segment.
    #[must_use]
    pub fn contains_segment(&self, other: &LineSegment) -> bool {
        self.contains(other.first) && self.contains(other.second)
    }

    /// Returns `true` if the segments cross at a point interior to both.
    ///
    /// Parallel segments never intersect under this test, and neither do
    /// segments that only meet at an endpoint of either one.
    #[must_use]
    pub fn intersects(&self, other: &LineSegment) -> bool {
        let Ok(p) = self.line.intersection(&other.line) else {
            return false;
        };
        if self.is_endpoint(p) || other.is_endpoint(p) {
            return false;
        }
        self.contains(p) && other.contains(p)
    }

    /// Returns `true` if the segments share at least one point.
    ///
    /// Touching endpoints and collinear overlaps both count.
    #[must_use]
    pub fn intersects_inclusive(&self, other: &LineSegment) -> bool {
        match self.line.intersection(&other.line) {
            Ok(p) => self.contains(p) && other.contains(p),
            Err(_) => {
                self.line.is_same_line(&other.line)
                    && (self.contains(other.first)
                        || self.contains(other.second)
                        || other.contains(self.first)
                        || other.contains(self.second))
            }
        }
    }

    /// Returns `true` if `line` crosses the segment away from its endpoints.
    #[must_use]
    pub fn intersects_line(&self, line: &Line) -> bool {
        match self.line.intersection(line) {
            Ok(p) => !self.is_endpoint(p) && self.contains(p),
            Err(_) => false,
        }
    }

    /// Returns `true` if `line` crosses or touches the segment.
    ///
    /// A parallel line never intersects, even when it contains the segment.
    #[must_use]
    pub fn intersects_line_inclusive(&self, line: &Line) -> bool {
        match self.line.intersection(line) {
            Ok(p) => self.contains(p),
            Err(_) => false,
        }
    }
}

impl PartialEq for LineSegment {
    fn eq(&self, other: &Self) -> bool {
        (self.first == other.first && self.second == other.second)
            || (self.first == other.second && self.second == other.first)
    }
}

fn min_max(a: f64, b: f64) -> (f64, f64) {
    if a <= b {
        (a, b)
    } else {
        (b, a)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use approx::assert_abs_diff_eq;

    use super::*;

    fn p(x: f64, y: f64) -> Point {
        Point::new(x, y).unwrap()
    }

    fn seg(x0: f64, y0: f64, x1: f64, y1: f64) -> LineSegment {
        LineSegment::new(p(x0, y0), p(x1, y1)).unwrap()
    }

    #[test]
    fn coincident_endpoints_fail() {
        assert!(LineSegment::new(p(2.0, 2.0), p(2.0, 2.0)).is_err());
    }

    #[test]
    fn length_and_lower_endpoint() {
        let s = seg(1.0, 5.0, 4.0, 1.0);
        assert_abs_diff_eq!(s.length(), 5.0);
        assert_eq!(s.lower_endpoint(), p(4.0, 1.0));
        assert_eq!(seg(1.0, 2.0, 5.0, 2.0).lower_endpoint(), p(5.0, 2.0));
    }

    #[test]
    fn contains_points() {
        let s = seg(0.0, 0.0, 4.0, 2.0);
        assert!(s.contains(p(2.0, 1.0)));
        assert!(s.contains(p(0.0, 0.0)));
        assert!(!s.contains_exclusive(p(0.0, 0.0)));
        assert!(s.contains_exclusive(p(2.0, 1.0)));
        assert!(!s.contains(p(6.0, 3.0)));
        assert!(!s.contains(p(2.0, 1.5)));
    }

    #[test]
    fn crossing_segments() {
        let a = seg(0.0, 0.0, 4.0, 4.0);
        let b = seg(0.0, 4.0, 4.0, 0.0);
        assert!(a.intersects(&b));
        assert!(a.intersects_inclusive(&b));
    }

    #[test]
    fn touching_segments_only_intersect_inclusively() {
        let base = seg(0.0, 0.0, 4.0, 0.0);
        let t_junction = seg(2.0, 0.0, 2.0, 3.0);
        assert!(!base.intersects(&t_junction));
        assert!(base.intersects_inclusive(&t_junction));

        let corner = seg(4.0, 0.0, 4.0, 3.0);
        assert!(!base.intersects(&corner));
        assert!(base.intersects_inclusive(&corner));
    }

    #[test]
    fn disjoint_segments() {
        let a = seg(0.0, 0.0, 1.0, 1.0);
        let b = seg(3.0, 0.0, 2.0, 1.0);
        assert!(!a.intersects(&b));
        assert!(!a.intersects_inclusive(&b));
    }

    #[test]
    fn collinear_overlap() {
        let a = seg(0.0, 1.0, 3.0, 1.0);
        assert!(!a.intersects(&seg(2.0, 1.0, 5.0, 1.0)));
        assert!(a.intersects_inclusive(&seg(2.0, 1.0, 5.0, 1.0)));
        assert!(a.intersects_inclusive(&seg(3.0, 1.0, 5.0, 1.0)));
        assert!(!a.intersects_inclusive(&seg(4.0, 1.0, 5.0, 1.0)));
        assert!(!a.intersects_inclusive(&seg(0.0, 2.0, 3.0, 2.0)));
    }

    #[test]
    fn segment_against_line() {
        let s = seg(1.0, 1.0, 1.0, 3.0);
        assert!(s.intersects_line(&Line::horizontal(2.0)));
        assert!(!s.intersects_line(&Line::horizontal(3.0)));
        assert!(s.intersects_line_inclusive(&Line::horizontal(3.0)));
        assert!(!s.intersects_line_inclusive(&Line::horizontal(4.0)));

        let flat = seg(1.0, 2.0, 3.0, 2.0);
        assert!(!flat.intersects_line_inclusive(&Line::horizontal(2.0)));
    }

    #[test]
    fn equality_ignores_direction() {
        assert_eq!(seg(0.0, 0.0, 1.0, 2.0), seg(1.0, 2.0, 0.0, 0.0));
        assert_ne!(seg(0.0, 0.0, 1.0, 2.0), seg(0.0, 0.0, 1.0, 3.0));
    }

    #[test]
    fn segment_containment() {
        let s = seg(0.0, 0.0, 4.0, 4.0);
        assert!(s.contains_segment(&seg(1.0, 1.0, 3.0, 3.0)));
        assert!(!s.contains_segment(&seg(1.0, 1.0, 5.0, 5.0)));
    }
}
