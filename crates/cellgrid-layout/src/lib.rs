//! Grid layout for form-style containers.
//!
//! Components and nested sub-grids are placed at integer (column, row)
//! rectangles with spans, gaps, alignment and baseline alignment. The engine
//! only consumes preferred sizes, visibility and baselines from the host and
//! hands back bounds.
//!
//! # Architecture
//!
//! 1. **Columns**: gather per-cell widths, solve column coordinates
//! 2. **Rows**: gather per-cell heights at the resolved widths (with baseline
//!    groups), solve row coordinates
//! 3. **Placement**: align each component inside its cell
//!
//! # Example
//!
//! ```ignore
//! use cellgrid_layout::{Grid, Constraints, Rect};
//!
//! let mut grid = Grid::new();
//! grid.register(label, Constraints::new(0, 0))?;
//! grid.register(field, Constraints::new(1, 0).fill())?;
//! grid.resizable_columns.insert(1);
//!
//! let size = grid.preferred_size(&host);
//! grid.layout(&mut host, Rect::from_size(size));
//! ```

mod baseline;
mod cell;
mod compute;
mod grid;
mod manager;
mod snapshot;

pub use cell::Cell;
pub use grid::Grid;
pub use manager::GridLayout;
pub use snapshot::{CellSnapshot, LayoutSnapshot, SnapshotContent};

pub use cellgrid_core::{
    ComponentHost, Constraints, Gaps, GridError, HorizontalAlign, HorizontalGaps, Rect, Size,
    VerticalAlign, VerticalGaps,
};
