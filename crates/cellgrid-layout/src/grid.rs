//! Grid cell registry and layout entry points.

use std::collections::BTreeSet;

use cellgrid_core::{
    ComponentHost, Constraints, GridError, HorizontalGaps, Rect, Size, VerticalGaps,
};

use crate::cell::Cell;
use crate::compute::GridLayoutData;
use crate::snapshot::LayoutSnapshot;

/// A grid of cells placed at (column, row) rectangles.
///
/// Cells are kept in registration order and never overlap. Sub-grids are
/// owned by their cell; components are referenced by key `K` and measured
/// through a [`ComponentHost`].
///
/// No layout state is stored between calls, so measuring takes `&self`.
#[derive(Debug, Clone)]
pub struct Grid<K> {
    /// Columns that share any width beyond the preferred width
    pub resizable_columns: BTreeSet<usize>,
    /// Rows that share any height beyond the preferred height
    pub resizable_rows: BTreeSet<usize>,
    /// Extra left/right spacing per column index
    pub columns_gaps: Vec<HorizontalGaps>,
    /// Extra top/bottom spacing per row index
    pub rows_gaps: Vec<VerticalGaps>,
    cells: Vec<Cell<K>>,
}

impl<K> Default for Grid<K> {
    fn default() -> Self {
        Self::new()
    }
}

impl<K> Grid<K> {
    /// Create an empty grid.
    pub fn new() -> Self {
        Self {
            resizable_columns: BTreeSet::new(),
            resizable_rows: BTreeSet::new(),
            columns_gaps: Vec::new(),
            rows_gaps: Vec::new(),
            cells: Vec::new(),
        }
    }

    /// Register a component cell.
    ///
    /// Spans in `constraints` must be at least 1; this is not checked.
    pub fn register(&mut self, component: K, constraints: Constraints) -> Result<(), GridError> {
        self.check_free(&constraints)?;
        self.cells.push(Cell::Component { constraints, component });
        Ok(())
    }

    /// Register a cell holding a new, empty sub-grid and return the sub-grid
    /// for populating.
    pub fn register_sub_grid(&mut self, constraints: Constraints) -> Result<&mut Grid<K>, GridError> {
        self.check_free(&constraints)?;
        self.cells.push(Cell::Grid { constraints, grid: Grid::new() });
        match self.cells.last_mut() {
            Some(Cell::Grid { grid, .. }) => Ok(grid),
            _ => Err(occupied(&constraints)),
        }
    }

    fn check_free(&self, constraints: &Constraints) -> Result<(), GridError> {
        if self.cells.iter().any(|cell| cell.constraints().intersects(constraints)) {
            #[cfg(feature = "tracing")]
            tracing::debug!(?constraints, "rejected cell: rectangle already occupied");

            return Err(occupied(constraints));
        }
        Ok(())
    }

    /// Cells in registration order.
    pub fn cells(&self) -> &[Cell<K>] {
        &self.cells
    }

    pub fn len(&self) -> usize {
        self.cells.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    pub(crate) fn column_gaps(&self, column: usize) -> HorizontalGaps {
        self.columns_gaps.get(column).copied().unwrap_or_default()
    }

    pub(crate) fn row_gaps(&self, row: usize) -> VerticalGaps {
        self.rows_gaps.get(row).copied().unwrap_or_default()
    }

    /// Whether any cell, at any depth, is visible.
    pub fn is_visible<H: ComponentHost<K>>(&self, host: &H) -> bool {
        self.cells.iter().any(|cell| cell.is_visible(host))
    }

    /// Size the grid needs to show every visible cell at its preferred size.
    pub fn preferred_size<H: ComponentHost<K>>(&self, host: &H) -> Size {
        GridLayoutData::compute(self, host, None, None).preferred_size()
    }

    /// Lay the grid out into `rect` and apply the bounds of every visible
    /// component through the host.
    pub fn layout<H: ComponentHost<K>>(&self, host: &mut H, rect: Rect) {
        let data = GridLayoutData::compute(self, &*host, Some(rect.width), Some(rect.height));
        data.place(self, rect.x, rect.y, &mut |component, bounds| {
            host.set_bounds(component, bounds)
        });
    }

    /// Compute the bounds [`Grid::layout`] would apply, without applying
    /// them.
    pub fn arrange<H: ComponentHost<K>>(&self, host: &H, rect: Rect) -> Vec<(K, Rect)>
    where
        K: Clone,
    {
        let data = GridLayoutData::compute(self, host, Some(rect.width), Some(rect.height));
        let mut placements = Vec::with_capacity(self.cells.len());
        data.place(self, rect.x, rect.y, &mut |component: &K, bounds| {
            placements.push((component.clone(), bounds))
        });
        placements
    }

    /// Resolved geometry of the grid tree laid out into `rect`.
    pub fn snapshot<H: ComponentHost<K>>(&self, host: &H, rect: Rect) -> LayoutSnapshot<K>
    where
        K: Clone,
    {
        GridLayoutData::compute(self, host, Some(rect.width), Some(rect.height)).snapshot(self, rect)
    }
}

fn occupied(constraints: &Constraints) -> GridError {
    GridError::CellOccupied {
        x: constraints.x,
        y: constraints.y,
        width: constraints.width,
        height: constraints.height,
    }
}

impl<K: PartialEq> Grid<K> {
    /// Remove the first cell holding `component`, searching sub-grids depth
    /// first. Returns whether a cell was removed.
    pub fn unregister(&mut self, component: &K) -> bool {
        for index in 0..self.cells.len() {
            let found = match &mut self.cells[index] {
                Cell::Component { component: existing, .. } => existing == component,
                Cell::Grid { grid, .. } => {
                    if grid.unregister(component) {
                        return true;
                    }
                    false
                }
            };
            if found {
                self.cells.remove(index);

                #[cfg(feature = "tracing")]
                tracing::trace!(index, "unregistered component cell");

                return true;
            }
        }
        false
    }

    /// Constraints of a registered component, searching sub-grids depth
    /// first.
    pub fn constraints_of(&self, component: &K) -> Option<&Constraints> {
        self.cells.iter().find_map(|cell| match cell {
            Cell::Component { constraints, component: existing } if existing == component => {
                Some(constraints)
            }
            Cell::Component { .. } => None,
            Cell::Grid { grid, .. } => grid.constraints_of(component),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use cellgrid_core::{HorizontalAlign, VerticalAlign};
    use std::collections::HashMap;

    #[derive(Default)]
    struct TestHost {
        sizes: HashMap<u32, Size>,
        hidden: Vec<u32>,
        bounds: HashMap<u32, Rect>,
    }

    impl TestHost {
        fn with(mut self, key: u32, width: i32, height: i32) -> Self {
            self.sizes.insert(key, Size::new(width, height));
            self
        }
    }

    impl ComponentHost<u32> for TestHost {
        fn preferred_size(&self, component: &u32) -> Size {
            self.sizes.get(component).copied().unwrap_or_default()
        }

        fn is_visible(&self, component: &u32) -> bool {
            !self.hidden.contains(component)
        }

        fn set_bounds(&mut self, component: &u32, bounds: Rect) {
            self.bounds.insert(*component, bounds);
        }
    }

    #[test]
    fn test_register_rejects_overlap() {
        let mut grid = Grid::new();
        grid.register(1u32, Constraints::new(0, 0).span(2, 1)).unwrap();
        let err = grid.register(2, Constraints::new(1, 0)).unwrap_err();
        assert_eq!(err, GridError::CellOccupied { x: 1, y: 0, width: 1, height: 1 });
        assert_eq!(grid.len(), 1);
        assert!(grid.register(3, Constraints::new(2, 0)).is_ok());
    }

    #[test]
    fn test_register_sub_grid_rejects_overlap() {
        let mut grid: Grid<u32> = Grid::new();
        grid.register(1, Constraints::new(0, 1)).unwrap();
        assert!(grid.register_sub_grid(Constraints::new(0, 0).span(1, 2)).is_err());

        let sub = grid.register_sub_grid(Constraints::new(0, 0)).unwrap();
        sub.register(2, Constraints::new(0, 0)).unwrap();
        assert_eq!(grid.len(), 2);
    }

    #[test]
    fn test_register_sub_grid_returns_the_new_cell() {
        let mut grid: Grid<u32> = Grid::new();
        grid.register(1, Constraints::new(0, 0)).unwrap();
        grid.register_sub_grid(Constraints::new(1, 0)).unwrap().register(2, Constraints::new(0, 0)).unwrap();

        match &grid.cells()[1] {
            Cell::Grid { constraints, grid: sub } => {
                assert_eq!(constraints.x, 1);
                assert_eq!(sub.len(), 1);
            }
            Cell::Component { .. } => panic!("expected a sub-grid cell"),
        }
    }

    #[test]
    fn test_unregister_top_level_and_missing() {
        let mut grid = Grid::new();
        grid.register(1u32, Constraints::new(0, 0)).unwrap();
        assert!(!grid.unregister(&7));
        assert!(grid.unregister(&1));
        assert!(grid.is_empty());
        // The freed rectangle can be reused
        assert!(grid.register(2, Constraints::new(0, 0)).is_ok());
    }

    #[test]
    fn test_constraints_of_nested() {
        let mut grid = Grid::new();
        grid.register(1u32, Constraints::new(0, 0)).unwrap();
        let sub = grid.register_sub_grid(Constraints::new(0, 1)).unwrap();
        let nested = Constraints::new(3, 0).align(HorizontalAlign::Right, VerticalAlign::Top);
        sub.register(2, nested).unwrap();

        assert_eq!(grid.constraints_of(&2), Some(&nested));
        assert_eq!(grid.constraints_of(&1).map(|c| c.y), Some(0));
        assert_eq!(grid.constraints_of(&9), None);
    }

    #[test]
    fn test_visibility() {
        let mut grid = Grid::new();
        let host = TestHost { hidden: vec![1, 2], ..Default::default() };
        assert!(!grid.is_visible(&host));

        grid.register(1u32, Constraints::new(0, 0)).unwrap();
        let sub = grid.register_sub_grid(Constraints::new(1, 0)).unwrap();
        sub.register(2, Constraints::new(0, 0)).unwrap();
        assert!(!grid.is_visible(&host));

        let host = TestHost { hidden: vec![1], ..Default::default() };
        assert!(grid.is_visible(&host));
    }

    #[test]
    fn test_invisible_cells_take_no_space() {
        let mut grid = Grid::new();
        grid.register(1u32, Constraints::new(0, 0)).unwrap();
        grid.register(2, Constraints::new(1, 0)).unwrap();
        let mut host = TestHost::default().with(1, 100, 20).with(2, 50, 30);
        host.hidden.push(2);

        assert_eq!(grid.preferred_size(&host), Size::new(100, 20));
        grid.layout(&mut host, Rect::new(0, 0, 100, 20));
        assert!(host.bounds.contains_key(&1));
        assert!(!host.bounds.contains_key(&2));
    }

    #[test]
    fn test_empty_grid_has_zero_size() {
        let grid: Grid<u32> = Grid::new();
        let host = TestHost::default();
        assert_eq!(grid.preferred_size(&host), Size::ZERO);
        assert!(grid.arrange(&host, Rect::new(0, 0, 10, 10)).is_empty());
    }

    #[test]
    fn test_layout_offsets_by_rect_origin() {
        let mut grid = Grid::new();
        grid.register(1u32, Constraints::new(0, 0).fill()).unwrap();
        let mut host = TestHost::default().with(1, 40, 10);
        grid.layout(&mut host, Rect::new(5, 7, 40, 10));
        assert_eq!(host.bounds[&1], Rect::new(5, 7, 40, 10));
    }
}
