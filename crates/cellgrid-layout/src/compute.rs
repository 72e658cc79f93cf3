//! Four-pass layout computation.
//!
//! Widths are solved before heights because a component's preferred height
//! and baseline may depend on the width it gets. Each axis is split into a
//! gathering pass (natural sizes into a [`SizeCalculator`]) and a resolving
//! pass (boundary coordinates, propagated down into sub-grids):
//!
//! 1. [`GridLayoutData::collect_columns`]
//! 2. [`GridLayoutData::resolve_columns`]
//! 3. [`GridLayoutData::collect_rows`], which also builds the baseline groups
//! 4. [`GridLayoutData::resolve_rows`]
//!
//! The data built here lives for one `preferred_size`/`layout` call and
//! mirrors the grid tree: one [`GridLayoutData`] per grid, one
//! [`CellLayoutData`] per visible cell.

use cellgrid_core::{
    ComponentHost, Constraints, HorizontalAlign, HorizontalGaps, Rect, Size, VerticalAlign,
    VerticalGaps,
};
use cellgrid_solver::{Coords, SizeCalculator};

use crate::baseline::BaselineGroups;
use crate::cell::Cell;
use crate::grid::Grid;
use crate::snapshot::{CellSnapshot, LayoutSnapshot, SnapshotContent};

/// Per-call layout state of one grid.
#[derive(Debug, Default)]
pub(crate) struct GridLayoutData {
    cells: Vec<CellLayoutData>,
    columns: SizeCalculator,
    rows: SizeCalculator,
    preferred_width: i32,
    preferred_height: i32,
    columns_coord: Coords,
    rows_coord: Coords,
    baselines: BaselineGroups,
}

/// Per-call layout state of one visible cell.
#[derive(Debug)]
struct CellLayoutData {
    /// Position of the cell in its grid's registration order
    index: usize,
    preferred_size: Size,
    column_gaps: HorizontalGaps,
    row_gaps: VerticalGaps,
    baseline: Option<i32>,
    sub_grid: Option<GridLayoutData>,
}

impl CellLayoutData {
    fn gap_width(&self, constraints: &Constraints) -> i32 {
        constraints.gaps.width() + self.column_gaps.width()
    }

    fn gap_height(&self, constraints: &Constraints) -> i32 {
        constraints.gaps.height() + self.row_gaps.height()
    }

    /// Width the cell asks the column calculator for.
    fn min_padded_width(&self, constraints: &Constraints) -> i32 {
        self.preferred_size.width + self.gap_width(constraints) - constraints.visual_paddings.width()
    }

    /// Height the cell asks the row calculator for.
    fn min_padded_height(&self, constraints: &Constraints) -> i32 {
        self.preferred_size.height + self.gap_height(constraints)
            - constraints.visual_paddings.height()
    }

    /// Width of the spanned columns without gaps, never negative.
    fn full_padded_width(&self, columns_coord: &[i32], constraints: &Constraints) -> i32 {
        (columns_coord[constraints.x + constraints.width]
            - columns_coord[constraints.x]
            - self.gap_width(constraints))
        .max(0)
    }

    /// Height of the spanned rows without gaps, never negative.
    fn full_padded_height(&self, rows_coord: &[i32], constraints: &Constraints) -> i32 {
        (rows_coord[constraints.y + constraints.height]
            - rows_coord[constraints.y]
            - self.gap_height(constraints))
        .max(0)
    }

    fn padded_width(&self, columns_coord: &[i32], constraints: &Constraints) -> i32 {
        let full = self.full_padded_width(columns_coord, constraints);
        match constraints.horizontal_align {
            HorizontalAlign::Fill => full,
            _ => full.min(self.preferred_size.width - constraints.visual_paddings.width()),
        }
    }

    fn padded_height(&self, rows_coord: &[i32], constraints: &Constraints) -> i32 {
        let full = self.full_padded_height(rows_coord, constraints);
        match constraints.vertical_align {
            VerticalAlign::Fill => full,
            _ => full.min(self.preferred_size.height - constraints.visual_paddings.height()),
        }
    }
}

impl GridLayoutData {
    /// Run all four passes. `None` extents mean "use the preferred size".
    pub(crate) fn compute<K, H: ComponentHost<K>>(
        grid: &Grid<K>,
        host: &H,
        width: Option<i32>,
        height: Option<i32>,
    ) -> Self {
        let mut data = Self::collect_columns(grid, host);
        data.resolve_columns(grid, width);
        data.collect_rows(grid, host);
        data.resolve_rows(grid, height);

        #[cfg(feature = "tracing")]
        tracing::debug!(
            cells = data.cells.len(),
            preferred_width = data.preferred_width,
            preferred_height = data.preferred_height,
            columns = ?data.columns_coord.as_slice(),
            rows = ?data.rows_coord.as_slice(),
            "computed grid layout"
        );

        data
    }

    pub(crate) fn preferred_size(&self) -> Size {
        Size::new(self.preferred_width, self.preferred_height)
    }

    /// Step 1: natural sizes and column constraints of the visible cells.
    ///
    /// Sub-grids contribute their preferred width only; their height is not
    /// known until step 3.
    pub(crate) fn collect_columns<K, H: ComponentHost<K>>(grid: &Grid<K>, host: &H) -> Self {
        let mut data = Self::default();

        for (index, cell) in grid.cells().iter().enumerate() {
            if !cell.is_visible(host) {
                continue;
            }
            let constraints = cell.constraints();
            let last_column = (constraints.x + constraints.width).saturating_sub(1);
            let column_gaps = HorizontalGaps::new(
                grid.column_gaps(constraints.x).left,
                grid.column_gaps(last_column).right,
            );

            let (preferred_size, sub_grid) = match cell {
                Cell::Component { component, .. } => (host.preferred_size(component), None),
                Cell::Grid { grid: nested, .. } => {
                    let sub = Self::collect_columns(nested, host);
                    (Size::new(sub.preferred_width, 0), Some(sub))
                }
            };

            let cell_data = CellLayoutData {
                index,
                preferred_size,
                column_gaps,
                row_gaps: VerticalGaps::EMPTY,
                baseline: None,
                sub_grid,
            };
            data.columns.add_constraint(
                constraints.x,
                constraints.width,
                cell_data.min_padded_width(constraints),
            );
            data.cells.push(cell_data);
        }

        data.preferred_width = data.columns.preferred_size();
        data
    }

    /// Step 2: column coordinates, then each sub-grid gets the width of its
    /// spanned columns.
    pub(crate) fn resolve_columns<K>(&mut self, grid: &Grid<K>, width: Option<i32>) {
        let total = width.unwrap_or(self.preferred_width);
        self.columns_coord = self.columns.coords(total, &grid.resizable_columns);

        for cell_data in &mut self.cells {
            let cell = &grid.cells()[cell_data.index];
            let available = cell_data.full_padded_width(&self.columns_coord, cell.constraints());
            if let (Cell::Grid { grid: nested, .. }, Some(sub)) = (cell, cell_data.sub_grid.as_mut()) {
                sub.resolve_columns(nested, Some(available));
            }
        }
    }

    /// Step 3: row constraints at the resolved widths, with baseline groups.
    pub(crate) fn collect_rows<K, H: ComponentHost<K>>(&mut self, grid: &Grid<K>, host: &H) {
        self.rows = SizeCalculator::new();
        self.baselines.clear();

        for cell_data in &mut self.cells {
            let cell = &grid.cells()[cell_data.index];
            let constraints = cell.constraints();
            let last_row = (constraints.y + constraints.height).saturating_sub(1);
            cell_data.row_gaps = VerticalGaps::new(
                grid.row_gaps(constraints.y).top,
                grid.row_gaps(last_row).bottom,
            );
            cell_data.baseline = None;

            match cell {
                Cell::Component { component, .. } => {
                    if !BaselineGroups::is_supported(constraints) {
                        continue;
                    }
                    let paddings = &constraints.visual_paddings;
                    let width = cell_data.padded_width(&self.columns_coord, constraints) + paddings.width();
                    let height = cell_data.preferred_size.height;
                    let Some(baseline) = host
                        .baseline(component, width, height)
                        .filter(|&baseline| baseline >= 0)
                    else {
                        continue;
                    };

                    let ascent = baseline + constraints.gaps.top + cell_data.row_gaps.top - paddings.top;
                    let descent = height - baseline + constraints.gaps.bottom + cell_data.row_gaps.bottom
                        - paddings.bottom;
                    self.baselines.register(constraints, ascent, descent);
                    cell_data.baseline = Some(baseline);
                }
                Cell::Grid { grid: nested, .. } => {
                    if let Some(sub) = cell_data.sub_grid.as_mut() {
                        sub.collect_rows(nested, host);
                        cell_data.preferred_size.height = sub.preferred_height;
                    }
                }
            }
        }

        for cell_data in &self.cells {
            let constraints = grid.cells()[cell_data.index].constraints();
            let height = match cell_data.baseline.and(self.baselines.get(constraints)) {
                Some(row) => row.height(),
                None => cell_data.min_padded_height(constraints),
            };
            self.rows.add_constraint(constraints.y, constraints.height, height);
        }

        self.preferred_height = self.rows.preferred_size();
    }

    /// Step 4: row coordinates, then each sub-grid gets the height of its
    /// spanned rows.
    pub(crate) fn resolve_rows<K>(&mut self, grid: &Grid<K>, height: Option<i32>) {
        let total = height.unwrap_or(self.preferred_height);
        self.rows_coord = self.rows.coords(total, &grid.resizable_rows);

        for cell_data in &mut self.cells {
            let cell = &grid.cells()[cell_data.index];
            let available = cell_data.full_padded_height(&self.rows_coord, cell.constraints());
            if let (Cell::Grid { grid: nested, .. }, Some(sub)) = (cell, cell_data.sub_grid.as_mut()) {
                sub.resolve_rows(nested, Some(available));
            }
        }
    }

    /// Hand the final bounds of every visible component to `visit`,
    /// descending into sub-grids. Positions are offset by `origin`.
    pub(crate) fn place<K, F>(&self, grid: &Grid<K>, origin_x: i32, origin_y: i32, visit: &mut F)
    where
        F: FnMut(&K, Rect),
    {
        for cell_data in &self.cells {
            let cell = &grid.cells()[cell_data.index];
            let bounds = self.cell_bounds(cell_data, cell.constraints(), origin_x, origin_y);
            match (cell, &cell_data.sub_grid) {
                (Cell::Component { component, .. }, _) => visit(component, bounds),
                (Cell::Grid { grid: nested, .. }, Some(sub)) => {
                    sub.place(nested, bounds.x, bounds.y, visit)
                }
                (Cell::Grid { .. }, None) => {}
            }
        }
    }

    pub(crate) fn snapshot<K: Clone>(&self, grid: &Grid<K>, bounds: Rect) -> LayoutSnapshot<K> {
        let cells = self
            .cells
            .iter()
            .filter_map(|cell_data| {
                let cell = &grid.cells()[cell_data.index];
                let constraints = *cell.constraints();
                let cell_bounds = self.cell_bounds(cell_data, &constraints, bounds.x, bounds.y);
                let content = match (cell, &cell_data.sub_grid) {
                    (Cell::Component { component, .. }, _) => {
                        SnapshotContent::Component(component.clone())
                    }
                    (Cell::Grid { grid: nested, .. }, Some(sub)) => {
                        SnapshotContent::Grid(Box::new(sub.snapshot(nested, cell_bounds)))
                    }
                    (Cell::Grid { .. }, None) => return None,
                };
                Some(CellSnapshot {
                    constraints,
                    slot: self.slot(&constraints, bounds.x, bounds.y),
                    bounds: cell_bounds,
                    baseline: cell_data.baseline,
                    content,
                })
            })
            .collect();

        LayoutSnapshot {
            bounds,
            preferred_size: self.preferred_size(),
            columns_coord: self.columns_coord.to_vec(),
            rows_coord: self.rows_coord.to_vec(),
            cells,
        }
    }

    /// The spanned columns/rows of a cell, gaps included.
    fn slot(&self, constraints: &Constraints, origin_x: i32, origin_y: i32) -> Rect {
        let x = self.columns_coord[constraints.x];
        let y = self.rows_coord[constraints.y];
        Rect::new(
            origin_x + x,
            origin_y + y,
            self.columns_coord[constraints.x + constraints.width] - x,
            self.rows_coord[constraints.y + constraints.height] - y,
        )
    }

    /// Final bounds: the aligned padded rectangle grown by the visual
    /// paddings.
    ///
    /// A sub-grid always gets the full padded rectangle it was resolved
    /// for, so its own coordinates stay inside its bounds.
    fn cell_bounds(
        &self,
        cell_data: &CellLayoutData,
        constraints: &Constraints,
        origin_x: i32,
        origin_y: i32,
    ) -> Rect {
        if cell_data.sub_grid.is_some() {
            return Rect::new(
                origin_x
                    + self.columns_coord[constraints.x]
                    + cell_data.column_gaps.left
                    + constraints.gaps.left,
                origin_y + self.rows_coord[constraints.y] + cell_data.row_gaps.top + constraints.gaps.top,
                cell_data.full_padded_width(&self.columns_coord, constraints),
                cell_data.full_padded_height(&self.rows_coord, constraints),
            );
        }

        let full_width = cell_data.full_padded_width(&self.columns_coord, constraints);
        let width = cell_data.padded_width(&self.columns_coord, constraints);
        let x = origin_x
            + self.columns_coord[constraints.x]
            + cell_data.column_gaps.left
            + constraints.gaps.left
            + match constraints.horizontal_align {
                HorizontalAlign::Left | HorizontalAlign::Fill => 0,
                HorizontalAlign::Center => (full_width - width) / 2,
                HorizontalAlign::Right => full_width - width,
            };

        let full_height = cell_data.full_padded_height(&self.rows_coord, constraints);
        let height = cell_data.padded_height(&self.rows_coord, constraints);
        let row_top = origin_y + self.rows_coord[constraints.y];
        let y = match cell_data.baseline.zip(self.baselines.get(constraints)) {
            Some((baseline, row)) => {
                let row_height = self.rows_coord[constraints.y + constraints.height]
                    - self.rows_coord[constraints.y];
                // Padded top such that the component's own top sits at
                // `line - baseline`.
                row_top + row.baseline_offset(constraints.vertical_align, row_height) - baseline
                    + constraints.visual_paddings.top
            }
            None => {
                row_top
                    + cell_data.row_gaps.top
                    + constraints.gaps.top
                    + match constraints.vertical_align {
                        VerticalAlign::Top | VerticalAlign::Fill => 0,
                        VerticalAlign::Center => (full_height - height) / 2,
                        VerticalAlign::Bottom => full_height - height,
                    }
            }
        };

        Rect::new(x, y, width, height).outset(&constraints.visual_paddings)
    }
}
