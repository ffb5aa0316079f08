//! Mapping between the logical canvas and terminal cells.
//!
//! The adventure speaks in canvas pixels (1280×720 by default); the terminal
//! offers a grid of cells. The viewport scales one onto the other
//! independently per axis.

use adventure_core::{Point, Rect, Size};
use ratatui::layout::Rect as CellRect;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Viewport {
    pub area: CellRect,
    pub canvas: Size,
}

impl Viewport {
    pub fn new(area: CellRect, canvas: Size) -> Self {
        Self { area, canvas }
    }

    fn column_of(&self, x: f32) -> f32 {
        x * self.area.width as f32 / self.canvas.width
    }

    fn row_of(&self, y: f32) -> f32 {
        y * self.area.height as f32 / self.canvas.height
    }

    /// Cells covered by a canvas rectangle, clipped to the viewport.
    ///
    /// A non-empty rectangle inside the canvas always covers at least one
    /// cell so small props stay visible on tiny terminals.
    pub fn to_cells(&self, rect: Rect) -> CellRect {
        if self.area.is_empty() || rect.width <= 0.0 || rect.height <= 0.0 {
            return CellRect::new(self.area.x, self.area.y, 0, 0);
        }

        let left = self.column_of(rect.x).floor();
        let top = self.row_of(rect.y).floor();
        let right = self.column_of(rect.right()).ceil();
        let bottom = self.row_of(rect.bottom()).ceil();

        let max_w = self.area.width as f32;
        let max_h = self.area.height as f32;
        let left = left.clamp(0.0, max_w);
        let top = top.clamp(0.0, max_h);
        let right = right.clamp(0.0, max_w);
        let bottom = bottom.clamp(0.0, max_h);

        CellRect::new(
            self.area.x + left as u16,
            self.area.y + top as u16,
            (right - left) as u16,
            (bottom - top) as u16,
        )
    }

    /// Cell holding a canvas point, or `None` outside the viewport.
    pub fn to_cell(&self, point: Point) -> Option<(u16, u16)> {
        if point.x < 0.0 || point.y < 0.0 {
            return None;
        }
        let col = self.column_of(point.x).floor();
        let row = self.row_of(point.y).floor();
        if col >= self.area.width as f32 || row >= self.area.height as f32 {
            return None;
        }
        Some((self.area.x + col as u16, self.area.y + row as u16))
    }

    /// Canvas point at the centre of a terminal cell, or `None` if the
    /// cell lies outside the viewport.
    pub fn to_canvas(&self, column: u16, row: u16) -> Option<Point> {
        let area = self.area;
        if column < area.x
            || row < area.y
            || column >= area.x + area.width
            || row >= area.y + area.height
        {
            return None;
        }
        let x = ((column - area.x) as f32 + 0.5) * self.canvas.width / area.width as f32;
        let y = ((row - area.y) as f32 + 0.5) * self.canvas.height / area.height as f32;
        Some(Point::new(x, y))
    }
}
