//! Grid cells.

use cellgrid_core::{ComponentHost, Constraints};

use crate::grid::Grid;

/// An occupant of a grid rectangle.
#[derive(Debug, Clone)]
pub enum Cell<K> {
    /// A host component, referenced by key.
    Component { constraints: Constraints, component: K },
    /// A nested grid owned by this cell.
    Grid { constraints: Constraints, grid: Grid<K> },
}

impl<K> Cell<K> {
    pub fn constraints(&self) -> &Constraints {
        match self {
            Cell::Component { constraints, .. } | Cell::Grid { constraints, .. } => constraints,
        }
    }

    /// A component cell follows its component; a grid cell is visible when
    /// anything inside it is.
    pub fn is_visible<H: ComponentHost<K>>(&self, host: &H) -> bool {
        match self {
            Cell::Component { component, .. } => host.is_visible(component),
            Cell::Grid { grid, .. } => grid.is_visible(host),
        }
    }
}
