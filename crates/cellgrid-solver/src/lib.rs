//! Axis solving for cellgrid layouts.
//!
//! This crate implements:
//! - Minimum per-index sizes from overlapping span constraints
//! - Boundary coordinates for a target extent with resizable indices

mod calculator;

pub use calculator::{Coords, SizeCalculator};
