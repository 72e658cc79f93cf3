//! Core types for the cellgrid layout engine.
//!
//! This crate provides the foundational types shared by the other cellgrid crates:
//! - Geometry and spacing values (`Size`, `Rect`, `Gaps`)
//! - Cell placement (`Constraints`, alignments)
//! - The host component interface
//! - Error types

pub mod errors;
pub mod host;
pub mod types;

pub use errors::*;
pub use host::*;
pub use types::*;
