#![deny(missing_docs)]
#![doc = env!("CARGO_PKG_DESCRIPTION")]

/// dense grid representation.
pub mod grid;

/// Error types for the image module.
pub mod error;

/// text rendering of grids for terminals.
pub mod render;

pub use crate::error::GridError;
pub use crate::grid::{ensure_same_size, BinaryGrid, GrayGrid, Grid, GridSize, LabelGrid};
