//! Error types for the grid layout engine.

use thiserror::Error;

/// Errors raised while building a grid.
///
/// Layout itself never fails; the only failure is a cell registration that
/// collides with an existing sibling, which indicates a bug in the caller's
/// layout code.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GridError {
    #[error("cells occupied already: x={x}, y={y}, width={width}, height={height}")]
    CellOccupied {
        x: usize,
        y: usize,
        width: usize,
        height: usize,
    },
}
