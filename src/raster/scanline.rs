use crate::geometry::{Line, NaturalPoint, Polygon};
use crate::math::{are_equal, is_greater_or_equal, TOLERANCE};

use super::{RasterizeSegment, GRID_LIMIT};

/// Fills a polygon by intersecting it with horizontal scanlines.
///
/// Every integer row between the lowest and highest vertex is scanned. A
/// sloped side crosses a row when the row lies in its vertical extent,
/// lower end included and upper end excluded. So a vertex between two
/// sides counts once per side it is the lower end of:
///
/// - twice at a valley, printing the single vertex cell,
/// - once where the boundary passes through,
/// - never at a peak.
///
/// Horizontal sides never toggle the walk. A horizontal run is decided by
/// the sloped sides at its ends in the same way, so the result does not
/// depend on vertex order. Horizontal sides lying on the row are painted
/// directly, and the whole outline is rasterized on top so thin features
/// keep their edges.
#[derive(Debug, Clone, Copy)]
pub struct ScanlineFill<'a> {
    polygon: &'a Polygon,
}

impl<'a> ScanlineFill<'a> {
    /// Creates a new `ScanlineFill` operation.
    #[must_use]
    pub fn new(polygon: &'a Polygon) -> Self {
        Self { polygon }
    }

    /// Executes the fill. Cells may repeat where the outline overlaps the
    /// interior.
    #[must_use]
    pub fn execute(&self) -> Vec<NaturalPoint> {
        let (low, high) = self.rows();
        let mut cells = Vec::new();
        for y in low..=high {
            self.fill_row(y, &mut cells);
        }
        for side in self.polygon.sides() {
            cells.extend(RasterizeSegment::new(side).execute());
        }
        cells
    }

    /// Rows to scan, limited to the grid.
    #[allow(clippy::cast_possible_truncation)]
    fn rows(&self) -> (i64, i64) {
        let ys = self.polygon.vertices().iter().map(|v| v.y());
        let low = ys.clone().fold(f64::INFINITY, f64::min);
        let high = ys.fold(f64::NEG_INFINITY, f64::max);
        (
            low.floor().clamp(0.0, GRID_LIMIT) as i64,
            high.ceil().clamp(0.0, GRID_LIMIT) as i64,
        )
    }

    /// Sorted x coordinates where sloped sides cross row `y`.
    fn crossings(&self, y: f64) -> Vec<f64> {
        let scan = Line::horizontal(y);
        let mut crossings: Vec<f64> = self
            .polygon
            .sides()
            .iter()
            .filter(|side| !side.line().is_horizontal())
            .filter(|side| {
                let (a, b) = (side.first().y(), side.second().y());
                is_greater_or_equal(y, a.min(b)) && y < a.max(b) - TOLERANCE
            })
            .filter_map(|side| side.line().intersection(&scan).ok())
            .map(|hit| hit.x())
            .collect();
        crossings.sort_by(f64::total_cmp);
        crossings
    }

    #[allow(clippy::cast_precision_loss)]
    fn fill_row(&self, y: i64, cells: &mut Vec<NaturalPoint>) {
        let row = y as f64;
        for pair in self.crossings(row).chunks_exact(2) {
            span(pair[0], pair[1], y, cells);
        }
        for side in self.polygon.sides() {
            let (first, second) = (side.first(), side.second());
            if side.line().is_horizontal() && are_equal(first.y(), row) {
                span(first.x().min(second.x()), first.x().max(second.x()), y, cells);
            }
        }
    }
}

/// Emits the integer cells of `[from, to]` on row `y` that fit the grid.
#[allow(clippy::cast_possible_truncation)]
fn span(from: f64, to: f64, y: i64, cells: &mut Vec<NaturalPoint>) {
    let start = (from - TOLERANCE).ceil().clamp(0.0, GRID_LIMIT) as i64;
    let end = (to + TOLERANCE).floor().clamp(-1.0, GRID_LIMIT) as i64;
    cells.extend((start..=end).filter_map(|x| NaturalPoint::from_signed(x, y)));
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use std::collections::BTreeSet;

    use super::*;
    use crate::geometry::{Point, Rectangle};

    fn p(x: f64, y: f64) -> Point {
        Point::new(x, y).unwrap()
    }

    fn polygon(coords: &[(f64, f64)]) -> Polygon {
        Polygon::new(coords.iter().map(|&(x, y)| p(x, y)).collect()).unwrap()
    }

    fn filled(polygon: &Polygon) -> BTreeSet<(u32, u32)> {
        ScanlineFill::new(polygon)
            .execute()
            .into_iter()
            .map(|c| (c.x(), c.y()))
            .collect()
    }

    fn rows(layout: &[(u32, Vec<u32>)]) -> BTreeSet<(u32, u32)> {
        layout
            .iter()
            .flat_map(|(y, xs)| xs.iter().map(move |&x| (x, *y)))
            .collect()
    }

    #[test]
    fn unit_square() {
        let square = polygon(&[(1.0, 1.0), (1.0, 2.0), (2.0, 2.0), (2.0, 1.0)]);
        let expected: BTreeSet<_> = [(1, 1), (2, 1), (1, 2), (2, 2)].into_iter().collect();
        assert_eq!(filled(&square), expected);
    }

    #[test]
    fn axis_aligned_rectangle() {
        let rect = Rectangle::from_corners(p(1.0, 1.0), p(4.0, 3.0)).unwrap();
        let expected: BTreeSet<_> = (1..=3)
            .flat_map(|y| (1..=4).map(move |x| (x, y)))
            .collect();
        assert_eq!(filled(rect.as_polygon()), expected);
    }

    #[test]
    fn convex_diamond() {
        let diamond = polygon(&[(2.0, 0.0), (4.0, 2.0), (2.0, 4.0), (0.0, 2.0)]);
        let expected = rows(&[
            (0, vec![2]),
            (1, vec![1, 2, 3]),
            (2, vec![0, 1, 2, 3, 4]),
            (3, vec![1, 2, 3]),
            (4, vec![2]),
        ]);
        assert_eq!(filled(&diamond), expected);
    }

    #[test]
    fn trapezoid_with_horizontal_top() {
        let trapezoid = polygon(&[(0.0, 0.0), (1.0, 2.0), (3.0, 2.0), (4.0, 0.0)]);
        let expected = rows(&[
            (0, vec![0, 1, 2, 3, 4]),
            (1, vec![1, 2, 3]),
            (2, vec![1, 2, 3]),
        ]);
        assert_eq!(filled(&trapezoid), expected);
    }

    #[test]
    fn concave_notch_stays_empty() {
        let notched = polygon(&[(0.0, 0.0), (4.0, 0.0), (4.0, 4.0), (2.0, 2.0), (0.0, 4.0)]);
        let expected = rows(&[
            (0, vec![0, 1, 2, 3, 4]),
            (1, vec![0, 1, 2, 3, 4]),
            (2, vec![0, 1, 2, 3, 4]),
            (3, vec![0, 1, 3, 4]),
            (4, vec![0, 4]),
        ]);
        let cells = filled(&notched);
        assert!(!cells.contains(&(2, 3)));
        assert_eq!(cells, expected);
    }

    fn reversed(coords: &[(f64, f64)]) -> Vec<(f64, f64)> {
        coords.iter().rev().copied().collect()
    }

    /// Grid cells the polygon covers, boundary included.
    fn covered(polygon: &Polygon) -> BTreeSet<(u32, u32)> {
        use crate::geometry::Geometric;

        (0..=10)
            .flat_map(|y| (0..=10).map(move |x| (x, y)))
            .filter(|&(x, y)| polygon.contains_point(p(f64::from(x), f64::from(y))))
            .collect()
    }

    #[test]
    fn axis_aligned_concave_fill_ignores_vertex_order() {
        let u = [
            (1.0, 1.0),
            (1.0, 8.0),
            (3.0, 8.0),
            (3.0, 3.0),
            (6.0, 3.0),
            (6.0, 8.0),
            (8.0, 8.0),
            (8.0, 1.0),
        ];
        let inverted_u = [
            (1.0, 8.0),
            (1.0, 1.0),
            (3.0, 1.0),
            (3.0, 6.0),
            (6.0, 6.0),
            (6.0, 1.0),
            (8.0, 1.0),
            (8.0, 8.0),
        ];
        let c = [
            (1.0, 1.0),
            (8.0, 1.0),
            (8.0, 3.0),
            (3.0, 3.0),
            (3.0, 6.0),
            (8.0, 6.0),
            (8.0, 8.0),
            (1.0, 8.0),
        ];
        for coords in [u, inverted_u, c] {
            for order in [coords.to_vec(), reversed(&coords)] {
                let shape = polygon(&order);
                assert_eq!(filled(&shape), covered(&shape), "{shape}");
            }
        }
    }

    #[test]
    fn u_shape_rows() {
        let u = polygon(&[
            (1.0, 1.0),
            (1.0, 8.0),
            (3.0, 8.0),
            (3.0, 3.0),
            (6.0, 3.0),
            (6.0, 8.0),
            (8.0, 8.0),
            (8.0, 1.0),
        ]);
        let cells = filled(&u);
        let row = |y: u32| -> Vec<u32> {
            cells.iter().filter(|c| c.1 == y).map(|c| c.0).collect()
        };
        assert_eq!(row(3), vec![1, 2, 3, 4, 5, 6, 7, 8]);
        assert_eq!(row(5), vec![1, 2, 3, 6, 7, 8]);
        assert_eq!(row(8), vec![1, 2, 3, 6, 7, 8]);
    }

    #[test]
    fn sloped_concave_fill_matches_coverage() {
        let arrow = [(1.0, 1.0), (9.0, 5.0), (1.0, 9.0), (4.0, 5.0)];
        for order in [arrow.to_vec(), reversed(&arrow)] {
            let shape = polygon(&order);
            let cells = filled(&shape);
            assert!(covered(&shape).is_subset(&cells), "{shape}");
        }
    }

    #[test]
    fn filled_cells_lie_inside() {
        use crate::geometry::Geometric;

        let triangle = polygon(&[(1.0, 1.0), (9.0, 2.0), (4.0, 8.0)]);
        for (x, y) in filled(&triangle) {
            let center = p(f64::from(x), f64::from(y));
            let d = triangle
                .sides()
                .iter()
                .map(|s| s.line().project(center).dist(center))
                .fold(f64::INFINITY, f64::min);
            assert!(triangle.contains_point(center) || d <= 1.0, "({x}, {y})");
        }
    }
}
