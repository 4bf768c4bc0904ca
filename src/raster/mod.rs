//! Turning shapes into grid cells.

mod circle;
mod frame;
mod scanline;
mod segment;

pub use circle::RasterizeCircle;
pub use frame::{Frame, RenderItem, Renderer};
pub use scanline::ScanlineFill;
pub use segment::RasterizeSegment;

use tracing::trace;

use crate::geometry::{Geometric, NaturalPoint, Outline, Shape};

/// Largest cell coordinate, `u32::MAX`. Rasterizers never walk past it.
const GRID_LIMIT: f64 = 4_294_967_295.0;

/// Parameters controlling how frames are drawn.
#[derive(Debug, Clone, Copy)]
pub struct RenderSettings {
    /// Glyph for cells no shape covers.
    pub background: char,
    /// Glyph for items that do not pick their own.
    pub glyph: char,
}

impl Default for RenderSettings {
    fn default() -> Self {
        Self {
            background: ' ',
            glyph: '#',
        }
    }
}

/// Rasterizes any shape, either its outline or its whole area.
#[must_use]
pub fn rasterize(shape: &Shape, filled: bool) -> Vec<NaturalPoint> {
    let cells = match shape.outline() {
        Outline::Circle(circle) => RasterizeCircle::new(circle, filled).execute(),
        Outline::Polygon(polygon) if filled => ScanlineFill::new(polygon).execute(),
        Outline::Polygon(polygon) => polygon
            .sides()
            .iter()
            .flat_map(|side| RasterizeSegment::new(side).execute())
            .collect(),
    };
    trace!(filled, cells = cells.len(), "rasterized shape");
    cells
}
