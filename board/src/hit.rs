#[cfg(test)]
#[path = "hit_test.rs"]
mod hit_test;

use serde::{Deserialize, Serialize};

use crate::doc::Column;
use crate::geom::{Point, Rect};

/// On-screen area of one column, as measured by the view layer.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ColumnRegion {
    pub column: Column,
    pub rect: Rect,
}

impl ColumnRegion {
    #[must_use]
    pub fn new(column: Column, rect: Rect) -> Self {
        Self { column, rect }
    }
}

/// Supplies the column layout at the moment it is asked for.
///
/// Implemented by the view layer. The controller calls it once per drag-end
/// and never caches the result, since the viewport may have scrolled or
/// resized during the gesture.
pub trait LayoutSource {
    fn column_regions(&self) -> Vec<ColumnRegion>;
}

impl LayoutSource for [ColumnRegion] {
    fn column_regions(&self) -> Vec<ColumnRegion> {
        self.to_vec()
    }
}

impl LayoutSource for Vec<ColumnRegion> {
    fn column_regions(&self) -> Vec<ColumnRegion> {
        self.clone()
    }
}

/// Return the column whose region strictly contains `pt`.
///
/// Regions are checked in order and the first hit wins, so overlapping input
/// still yields a deterministic answer. A point on any region edge belongs to
/// no region.
#[must_use]
pub fn resolve_drop_target(pt: Point, regions: &[ColumnRegion]) -> Option<Column> {
    regions
        .iter()
        .find(|region| region.rect.contains_strict(pt))
        .map(|region| region.column)
}
