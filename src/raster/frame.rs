use std::fmt;

use tracing::debug;

use crate::geometry::{Geometric, NaturalPoint, Rectangle, Shape};

use super::{rasterize, RenderSettings, GRID_LIMIT};

/// A character grid covering the cells a camera sees.
///
/// Row 0 of the grid is the top of the view, so world y grows upward.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Frame {
    left: i64,
    bottom: i64,
    width: usize,
    height: usize,
    cells: Vec<char>,
}

impl Frame {
    /// Creates a frame over the integer cells inside `camera`'s bounding box,
    /// limited to the grid.
    #[must_use]
    #[allow(clippy::cast_possible_truncation)]
    pub fn new(camera: &Rectangle, background: char) -> Self {
        let bbox = camera.bounding_box();
        let cell = |v: f64| v.clamp(0.0, GRID_LIMIT) as i64;
        let left = cell(bbox.min().x().ceil());
        let bottom = cell(bbox.min().y().ceil());
        let right = cell(bbox.max().x().floor());
        let top = cell(bbox.max().y().floor());
        let width = usize::try_from(right - left + 1).unwrap_or(0);
        let height = usize::try_from(top - bottom + 1).unwrap_or(0);
        Self {
            left,
            bottom,
            width,
            height,
            cells: vec![background; width.saturating_mul(height)],
        }
    }

    #[must_use]
    pub fn width(&self) -> usize {
        self.width
    }

    #[must_use]
    pub fn height(&self) -> usize {
        self.height
    }

    /// Paints a cell. Returns `false` if the cell is outside the view.
    pub fn draw(&mut self, cell: NaturalPoint, glyph: char) -> bool {
        match self.index(cell) {
            Some(i) => {
                self.cells[i] = glyph;
                true
            }
            None => false,
        }
    }

    /// The glyph at a world cell, if visible.
    #[must_use]
    pub fn get(&self, cell: NaturalPoint) -> Option<char> {
        self.index(cell).map(|i| self.cells[i])
    }

    fn index(&self, cell: NaturalPoint) -> Option<usize> {
        let col = usize::try_from(i64::from(cell.x()) - self.left).ok()?;
        let up = usize::try_from(i64::from(cell.y()) - self.bottom).ok()?;
        if col >= self.width || up >= self.height {
            return None;
        }
        let row = self.height - 1 - up;
        Some(row * self.width + col)
    }
}

impl fmt::Display for Frame {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.width == 0 {
            return Ok(());
        }
        for row in self.cells.chunks(self.width) {
            let line: String = row.iter().collect();
            writeln!(f, "{line}")?;
        }
        Ok(())
    }
}

/// A shape queued for drawing.
#[derive(Debug, Clone)]
pub struct RenderItem {
    pub shape: Shape,
    /// Fill the interior instead of drawing the outline only.
    pub filled: bool,
    /// Higher layers paint over lower ones.
    pub layer: i32,
    /// Overrides [`RenderSettings::glyph`].
    pub glyph: Option<char>,
}

impl RenderItem {
    /// An outlined item on layer 0 using the default glyph.
    #[must_use]
    pub fn new(shape: impl Into<Shape>) -> Self {
        Self {
            shape: shape.into(),
            filled: false,
            layer: 0,
            glyph: None,
        }
    }

    #[must_use]
    pub fn filled(mut self, filled: bool) -> Self {
        self.filled = filled;
        self
    }

    #[must_use]
    pub fn layer(mut self, layer: i32) -> Self {
        self.layer = layer;
        self
    }

    #[must_use]
    pub fn glyph(mut self, glyph: char) -> Self {
        self.glyph = Some(glyph);
        self
    }
}

/// Composites render items into a [`Frame`].
#[derive(Debug, Clone, Copy, Default)]
pub struct Renderer {
    settings: RenderSettings,
}

impl Renderer {
    #[must_use]
    pub fn new(settings: RenderSettings) -> Self {
        Self { settings }
    }

    #[must_use]
    pub fn settings(&self) -> RenderSettings {
        self.settings
    }

    /// Draws `items` as seen through `camera`, lowest layer first. Items
    /// on the same layer keep their order.
    #[must_use]
    pub fn render(&self, camera: &Rectangle, items: &[RenderItem]) -> Frame {
        let mut frame = Frame::new(camera, self.settings.background);
        let mut ordered: Vec<&RenderItem> = items.iter().collect();
        ordered.sort_by_key(|item| item.layer);

        let mut visible = 0usize;
        for item in ordered {
            let glyph = item.glyph.unwrap_or(self.settings.glyph);
            for cell in rasterize(&item.shape, item.filled) {
                if frame.draw(cell, glyph) {
                    visible += 1;
                }
            }
        }
        debug!(
            width = frame.width(),
            height = frame.height(),
            items = items.len(),
            visible,
            "frame rendered"
        );
        frame
    }
}
