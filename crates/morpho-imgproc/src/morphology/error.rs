/// Errors related to morphological operations.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum MorphologyError {
    /// A structuring element was requested with an unusable shape parameter.
    #[error("invalid parameter `{name}` = {value}: {reason}")]
    InvalidParameter {
        /// Name of the offending parameter.
        name: &'static str,
        /// The rejected value.
        value: String,
        /// Why the value was rejected.
        reason: String,
    },

    /// Error from the underlying grid.
    #[error(transparent)]
    Grid(#[from] morpho_image::GridError),
}

#[cfg(test)]
mod tests {
    use super::*;
    use morpho_image::{Grid, GridError};

    fn build(len: usize) -> Result<Grid<u8>, MorphologyError> {
        Ok(Grid::new([2, 2].into(), vec![0u8; len])?)
    }

    #[test]
    fn grid_error_propagates() {
        assert!(build(4).is_ok());
        assert_eq!(
            build(3),
            Err(MorphologyError::Grid(GridError::InvalidDataLength(3, 4)))
        );
    }
}
