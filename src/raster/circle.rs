use crate::geometry::{Circle, NaturalPoint};

use super::GRID_LIMIT;

/// Largest center coordinate or radius, 2^40, the walk accepts. Keeps the
/// decision variable and every plotted coordinate well inside `i64`.
const WALK_LIMIT: f64 = 1_099_511_627_776.0;

/// Rasterizes a circle with the midpoint algorithm.
///
/// Center and radius are rounded to whole cells first. A radius below half
/// a cell yields the center cell only. Circles lying wholly off the grid,
/// or beyond the walk limit, yield nothing.
#[derive(Debug, Clone, Copy)]
pub struct RasterizeCircle {
    /// Rounded center and radius, or `None` when there is nothing to walk.
    walk: Option<((i64, i64), i64)>,
    filled: bool,
}

impl RasterizeCircle {
    /// Creates a new `RasterizeCircle` operation.
    #[must_use]
    #[allow(clippy::cast_possible_truncation)]
    pub fn new(circle: &Circle, filled: bool) -> Self {
        let (cx, cy) = (circle.center().x().round(), circle.center().y().round());
        let r = circle.radius().round();
        let off_grid = cx - r > GRID_LIMIT || cy - r > GRID_LIMIT;
        let walkable = [cx, cy, r].iter().all(|v| *v <= WALK_LIMIT);
        let walk = (walkable && !off_grid).then(|| ((cx as i64, cy as i64), r as i64));
        Self { walk, filled }
    }

    /// Executes the rasterization. Outline cells repeat where octants meet.
    #[must_use]
    pub fn execute(&self) -> Vec<NaturalPoint> {
        let mut cells = Vec::new();
        let Some((center, radius)) = self.walk else {
            return cells;
        };
        if radius == 0 {
            cells.extend(NaturalPoint::from_signed(center.0, center.1));
            return cells;
        }

        let (mut x, mut y) = (0, radius);
        let mut d = 3 - 2 * radius;
        self.plot(center, x, y, &mut cells);
        while y >= x {
            x += 1;
            if d > 0 {
                y -= 1;
                d += 4 * (x - y) + 10;
            } else {
                d += 4 * x + 6;
            }
            self.plot(center, x, y, &mut cells);
        }
        cells
    }

    /// Plots the eight symmetric cells of `(x, y)`, or the four rows they
    /// bound when filling.
    fn plot(&self, (cx, cy): (i64, i64), x: i64, y: i64, cells: &mut Vec<NaturalPoint>) {
        if self.filled {
            for (half, row) in [(x, cy + y), (x, cy - y), (y, cy + x), (y, cy - x)] {
                row_span(cx - half, cx + half, row, cells);
            }
        } else {
            for (dx, dy) in [(x, y), (y, x)] {
                for (sx, sy) in [(1, 1), (-1, 1), (1, -1), (-1, -1)] {
                    cells.extend(NaturalPoint::from_signed(cx + sx * dx, cy + sy * dy));
                }
            }
        }
    }
}

/// Emits the cells of `from..=to` on `row` that fit the grid.
#[allow(clippy::cast_possible_truncation)]
fn row_span(from: i64, to: i64, row: i64, cells: &mut Vec<NaturalPoint>) {
    let limit = GRID_LIMIT as i64;
    if !(0..=limit).contains(&row) {
        return;
    }
    let (from, to) = (from.max(0), to.min(limit));
    cells.extend((from..=to).filter_map(|col| NaturalPoint::from_signed(col, row)));
}
