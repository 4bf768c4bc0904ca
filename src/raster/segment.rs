use crate::geometry::{LineSegment, NaturalPoint, VirtualPoint};
use crate::math::{are_equal, TOLERANCE};

use super::GRID_LIMIT;

/// Rasterizes a segment into grid cells with Bresenham's algorithm.
///
/// The segment is clipped to the grid and its endpoints are rounded to
/// the nearest cell. The result runs from the first endpoint to the
/// second, both included.
#[derive(Debug, Clone, Copy)]
pub struct RasterizeSegment {
    /// Rounded endpoints, or `None` when nothing lies on the grid.
    ends: Option<((i64, i64), (i64, i64))>,
}

/// How a segment maps onto the single first-octant stepper.
#[derive(Debug, Clone, Copy)]
struct Octant {
    /// Step along y and emit `(y, x)` pairs.
    swap: bool,
    /// Minor axis decreases.
    descending: bool,
    /// Walk starts at the second endpoint.
    reversed: bool,
}

impl RasterizeSegment {
    /// Creates a new `RasterizeSegment` operation.
    #[must_use]
    pub fn new(segment: &LineSegment) -> Self {
        let ends = clip_to_grid(segment.first().into(), segment.second().into())
            .map(|(from, to)| (cell_of(from), cell_of(to)));
        Self { ends }
    }

    /// Executes the rasterization.
    #[must_use]
    pub fn execute(&self) -> Vec<NaturalPoint> {
        let Some(((x0, y0), (x1, y1))) = self.ends else {
            return Vec::new();
        };
        let dx = (x1 - x0).abs();
        let dy = (y1 - y0).abs();

        let octant = Octant::classify(x1 > x0, y1 >= y0, dy >= dx);
        let (sx, sy) = if octant.reversed { (x1, y1) } else { (x0, y0) };
        let mut cells = if octant.swap {
            step(sy, sx, dy, dx, octant)
        } else {
            step(sx, sy, dx, dy, octant)
        };
        if octant.reversed {
            cells.reverse();
        }
        cells
            .into_iter()
            .filter_map(|(x, y)| NaturalPoint::from_signed(x, y))
            .collect()
    }
}

impl Octant {
    fn classify(right: bool, up: bool, steep: bool) -> Self {
        let (swap, descending, reversed) = match (right, up, steep) {
            (true, true, false) => (false, false, false),
            (true, true, true) => (true, false, false),
            (false, true, true) => (true, true, false),
            (false, true, false) => (false, true, true),
            (false, false, false) => (false, false, true),
            (false, false, true) => (true, false, true),
            (true, false, true) => (true, true, true),
            (true, false, false) => (false, true, false),
        };
        Self {
            swap,
            descending,
            reversed,
        }
    }
}

/// First-octant stepper: `major` always increments, `minor` moves by one
/// whenever the decision variable is non-negative.
fn step(major: i64, minor: i64, d_major: i64, d_minor: i64, octant: Octant) -> Vec<(i64, i64)> {
    let len = d_major.max(d_minor) + 1;
    let mut cells = Vec::with_capacity(usize::try_from(len).unwrap_or(0));
    let (mut x, mut y) = (major, minor);
    let mut p = 2 * d_minor - d_major;
    for _ in 0..len {
        cells.push(if octant.swap { (y, x) } else { (x, y) });
        x += 1;
        if p < 0 {
            p += 2 * d_minor;
        } else {
            p += 2 * d_minor - 2 * d_major;
            y += if octant.descending { -1 } else { 1 };
        }
    }
    cells
}

/// Clips `from -> to` to the square `[0, GRID_LIMIT]` (Liang-Barsky),
/// keeping its direction.
fn clip_to_grid(from: VirtualPoint, to: VirtualPoint) -> Option<(VirtualPoint, VirtualPoint)> {
    let (dx, dy) = (to.x() - from.x(), to.y() - from.y());
    let (mut enter, mut leave) = (0.0_f64, 1.0_f64);
    let bounds = [
        (-dx, from.x()),
        (dx, GRID_LIMIT - from.x()),
        (-dy, from.y()),
        (dy, GRID_LIMIT - from.y()),
    ];
    for (p, q) in bounds {
        if are_equal(p, 0.0) {
            if q < -TOLERANCE {
                return None;
            }
            continue;
        }
        let t = q / p;
        if p < 0.0 {
            enter = enter.max(t);
        } else {
            leave = leave.min(t);
        }
        if enter > leave {
            return None;
        }
    }
    let at = |t: f64| {
        if t <= 0.0 {
            from
        } else if t >= 1.0 {
            to
        } else {
            VirtualPoint::new(from.x() + t * dx, from.y() + t * dy)
        }
    };
    Some((at(enter), at(leave)))
}

#[allow(clippy::cast_possible_truncation)]
fn cell_of(point: VirtualPoint) -> (i64, i64) {
    let round = |v: f64| v.round().clamp(0.0, GRID_LIMIT) as i64;
    (round(point.x()), round(point.y()))
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use std::collections::HashSet;

    use super::*;
    use crate::geometry::Point;

    fn p(x: f64, y: f64) -> Point {
        Point::new(x, y).unwrap()
    }

    fn raster(x0: f64, y0: f64, x1: f64, y1: f64) -> Vec<NaturalPoint> {
        RasterizeSegment::new(&LineSegment::new(p(x0, y0), p(x1, y1)).unwrap()).execute()
    }

    fn cells(coords: &[(u32, u32)]) -> Vec<NaturalPoint> {
        coords.iter().map(|&(x, y)| NaturalPoint::new(x, y)).collect()
    }

    #[test]
    fn horizontal_segment() {
        assert_eq!(
            raster(1.0, 1.0, 5.0, 1.0),
            cells(&[(1, 1), (2, 1), (3, 1), (4, 1), (5, 1)])
        );
    }

    #[test]
    fn reversed_horizontal_keeps_direction() {
        assert_eq!(raster(3.0, 2.0, 1.0, 2.0), cells(&[(3, 2), (2, 2), (1, 2)]));
    }

    #[test]
    fn vertical_segments() {
        assert_eq!(raster(2.0, 1.0, 2.0, 3.0), cells(&[(2, 1), (2, 2), (2, 3)]));
        assert_eq!(raster(2.0, 3.0, 2.0, 1.0), cells(&[(2, 3), (2, 2), (2, 1)]));
    }

    #[test]
    fn diagonal_segment() {
        assert_eq!(raster(0.0, 2.0, 2.0, 4.0), cells(&[(0, 2), (1, 3), (2, 4)]));
        assert_eq!(raster(2.0, 4.0, 4.0, 2.0), cells(&[(2, 4), (3, 3), (4, 2)]));
    }

    #[test]
    fn steep_segment() {
        assert_eq!(raster(0.0, 0.0, 1.0, 2.0), cells(&[(0, 0), (1, 1), (1, 2)]));
    }

    #[test]
    fn every_octant_covers_both_endpoints_once() {
        let center = (10.0, 10.0);
        let targets = [
            (16.0, 12.0),
            (12.0, 16.0),
            (8.0, 17.0),
            (3.0, 12.0),
            (4.0, 7.0),
            (9.0, 3.0),
            (13.0, 4.0),
            (17.0, 8.0),
            (10.0, 10.0),
            (10.0, 4.0),
            (2.0, 10.0),
        ];
        for (tx, ty) in targets {
            for (a, b) in [(center, (tx, ty)), ((tx, ty), center)] {
                if a == b {
                    continue;
                }
                let line = raster(a.0, a.1, b.0, b.1);
                let dx = (b.0 - a.0).abs();
                let dy = (b.1 - a.1).abs();
                #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
                let expected = dx.max(dy) as usize + 1;
                assert_eq!(line.len(), expected, "{a:?} -> {b:?}");

                #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
                let (start, end) = (
                    NaturalPoint::new(a.0 as u32, a.1 as u32),
                    NaturalPoint::new(b.0 as u32, b.1 as u32),
                );
                assert_eq!(line.first(), Some(&start), "{a:?} -> {b:?}");
                assert_eq!(line.last(), Some(&end), "{a:?} -> {b:?}");

                let unique: HashSet<_> = line.iter().collect();
                assert_eq!(unique.len(), line.len(), "{a:?} -> {b:?}");
            }
        }
    }

    #[test]
    fn consecutive_cells_are_adjacent() {
        let line = raster(1.0, 2.0, 14.0, 7.0);
        for pair in line.windows(2) {
            let ddx = pair[0].x().abs_diff(pair[1].x());
            let ddy = pair[0].y().abs_diff(pair[1].y());
            assert!(ddx <= 1 && ddy <= 1);
        }
    }

    #[test]
    fn far_segment_is_clipped_to_the_grid() {
        let far = raster(1e19, 5.0, 2e19, 5.0);
        assert!(far.is_empty());

        let line = raster(4_294_967_290.0, 3.0, 1e12, 3.0);
        assert_eq!(line.len(), 6);
        assert_eq!(line.first(), Some(&NaturalPoint::new(4_294_967_290, 3)));
        assert_eq!(line.last(), Some(&NaturalPoint::new(u32::MAX, 3)));

        let back = raster(1e12, 0.0, 4_294_967_293.0, 0.0);
        assert_eq!(back.first(), Some(&NaturalPoint::new(u32::MAX, 0)));
        assert_eq!(back.len(), 3);
    }

    #[test]
    fn endpoints_are_rounded() {
        assert_eq!(raster(0.4, 0.6, 2.6, 1.4), cells(&[(0, 1), (1, 1), (2, 1), (3, 1)]));
    }
}
