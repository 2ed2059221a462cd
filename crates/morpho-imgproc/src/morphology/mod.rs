//! Mathematical morphology over dense grids.
//!
//! Every operator reads its input through a list of relative offsets produced
//! by a [`StructuringElement`]. Out-of-bounds neighbors are resolved in one
//! place and each operator decides what a missing neighbor means:
//!
//! | operator          | missing neighbor acts as |
//! |-------------------|--------------------------|
//! | binary erosion    | background (`0`)         |
//! | binary dilation   | absent, contributes nothing |
//! | gray erosion      | `255`                    |
//! | gray dilation     | `0`                      |

use morpho_image::Grid;

/// Error types used for morphological operations.
pub mod error;
pub use error::MorphologyError;

/// Structuring element generation.
pub mod kernel;
pub use kernel::{Offset, StructuringElement};

/// Erosion, dilation, opening and closing over `{0, 1}` grids.
pub mod binary;

/// Erosion, dilation, opening and closing over `[0, 255]` grids.
pub mod gray;

/// Sample the neighbor of `(row, col)` displaced by `offset`, or `None` if it falls outside.
#[inline]
pub(crate) fn neighbor<T: Copy>(src: &Grid<T>, row: usize, col: usize, offset: Offset) -> Option<T> {
    let (dy, dx) = offset;
    src.get_signed(row as isize + dy, col as isize + dx).copied()
}

/// Build an output grid of the same size as `src` by evaluating `f` at every position.
pub(crate) fn per_pixel<T, U, F>(src: &Grid<T>, mut f: F) -> Grid<U>
where
    U: Clone + Default,
    F: FnMut(usize, usize) -> U,
{
    let mut dst = Grid::zeros(src.size());
    let width = src.width();
    for (idx, px) in dst.as_slice_mut().iter_mut().enumerate() {
        *px = f(idx / width, idx % width);
    }
    dst
}
