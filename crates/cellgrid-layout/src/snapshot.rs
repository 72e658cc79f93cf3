//! Resolved layout geometry, for debug overlays and inspection.

use cellgrid_core::{Constraints, Rect, Size};

/// Geometry of one grid after all four passes.
#[derive(Debug, Clone, PartialEq)]
pub struct LayoutSnapshot<K> {
    /// Rectangle the grid was laid out into
    pub bounds: Rect,
    pub preferred_size: Size,
    /// Column boundaries relative to `bounds`
    pub columns_coord: Vec<i32>,
    /// Row boundaries relative to `bounds`
    pub rows_coord: Vec<i32>,
    /// Visible cells in registration order
    pub cells: Vec<CellSnapshot<K>>,
}

/// Geometry of one visible cell.
#[derive(Debug, Clone, PartialEq)]
pub struct CellSnapshot<K> {
    pub constraints: Constraints,
    /// The spanned columns and rows, gaps included
    pub slot: Rect,
    /// Final bounds of the component or sub-grid
    pub bounds: Rect,
    /// Baseline, when the cell takes part in baseline alignment
    pub baseline: Option<i32>,
    pub content: SnapshotContent<K>,
}

#[derive(Debug, Clone, PartialEq)]
pub enum SnapshotContent<K> {
    Component(K),
    Grid(Box<LayoutSnapshot<K>>),
}

impl<K: PartialEq> LayoutSnapshot<K> {
    /// Find a component's cell anywhere in the tree.
    pub fn find(&self, component: &K) -> Option<&CellSnapshot<K>> {
        self.cells.iter().find_map(|cell| match &cell.content {
            SnapshotContent::Component(key) if key == component => Some(cell),
            SnapshotContent::Component(_) => None,
            SnapshotContent::Grid(sub) => sub.find(component),
        })
    }

    /// Snapshots of the directly nested sub-grids, in registration order.
    pub fn sub_grids(&self) -> impl Iterator<Item = &LayoutSnapshot<K>> {
        self.cells.iter().filter_map(|cell| match &cell.content {
            SnapshotContent::Grid(sub) => Some(sub.as_ref()),
            SnapshotContent::Component(_) => None,
        })
    }
}
