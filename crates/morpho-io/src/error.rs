/// An error type for the io module.
#[derive(thiserror::Error, Debug)]
pub enum IoError {
    /// Error when the file does not exist.
    #[error("File does not exist: {0}")]
    FileDoesNotExist(std::path::PathBuf),

    /// Error to open, read or write the file.
    #[error("Failed to manipulate the file. {0}")]
    FileError(#[from] std::io::Error),

    /// The raster content does not follow the expected layout.
    #[error("Malformed raster. {0}")]
    MalformedRaster(String),

    /// Error to create the grid.
    #[error("Failed to create grid. {0}")]
    GridCreationError(#[from] morpho_image::GridError),
}
