/// An error type for the grid module.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum GridError {
    /// Error when the data length does not match the grid size.
    #[error("Data length ({0}) does not match the grid size ({1})")]
    InvalidDataLength(usize, usize),

    /// Error when the rows used to build a grid have different lengths.
    #[error("Row {0} has length {1}, expected {2}")]
    RaggedRows(usize, usize, usize),

    /// Error when two grids that must be combined have different sizes.
    #[error("Grid size mismatch: {0}x{1} vs {2}x{3}")]
    DimensionMismatch(usize, usize, usize, usize),

    /// Error when a pixel index is out of bounds.
    #[error("Pixel index ({0}, {1}) is out of bounds ({2}, {3})")]
    IndexOutOfBounds(usize, usize, usize, usize),
}
