//! Column geometry for the terminal view.
//!
//! Mirrors the browser board: five equal-width columns in a row, separated by
//! a fixed gap and inset by the board padding. Regions are computed from the
//! viewport every time they are requested.

#[cfg(test)]
#[path = "layout_test.rs"]
mod layout_test;

use board::doc::Column;
use board::geom::Rect;
use board::hit::{ColumnRegion, LayoutSource};

use crate::config::Viewport;

#[derive(Debug, thiserror::Error)]
#[error("viewport {width}x{height} is too small for {columns} columns")]
pub struct LayoutError {
    pub width: f64,
    pub height: f64,
    pub columns: usize,
}

/// Column layout derived from a viewport.
#[derive(Debug, Clone, Copy)]
pub struct BoardLayout {
    viewport: Viewport,
}

impl BoardLayout {
    /// Fails when the columns would have no area left after padding and gaps.
    pub fn new(viewport: Viewport) -> Result<Self, LayoutError> {
        let layout = Self { viewport };
        if layout.column_width() <= 0.0 || layout.column_height() <= 0.0 {
            return Err(LayoutError {
                width: viewport.width,
                height: viewport.height,
                columns: Column::ALL.len(),
            });
        }
        Ok(layout)
    }

    #[allow(clippy::cast_precision_loss)]
    fn column_width(&self) -> f64 {
        let n = Column::ALL.len() as f64;
        let vp = &self.viewport;
        (vp.width - 2.0 * vp.padding - (n - 1.0) * vp.gap) / n
    }

    fn column_height(&self) -> f64 {
        self.viewport.height - 2.0 * self.viewport.padding
    }

    /// Region of a single column.
    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub fn region(&self, column: Column) -> ColumnRegion {
        let vp = &self.viewport;
        let width = self.column_width();
        let left = vp.padding + column.index() as f64 * (width + vp.gap);
        ColumnRegion::new(column, Rect::from_origin_size(left, vp.padding, width, self.column_height()))
    }
}

impl LayoutSource for BoardLayout {
    fn column_regions(&self) -> Vec<ColumnRegion> {
        Column::ALL.iter().map(|col| self.region(*col)).collect()
    }
}
