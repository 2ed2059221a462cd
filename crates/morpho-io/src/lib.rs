#![deny(missing_docs)]
#![doc = env!("CARGO_PKG_DESCRIPTION")]

/// Error types for I/O operations.
///
/// Defines [`IoError`] variants for file access and malformed raster content.
pub mod error;

/// ASCII PGM (`P2`) encoding and decoding.
///
/// Read and write single channel 8-bit rasters as whitespace separated text.
/// See [`pgm::read_image_pgm`] and [`pgm::write_image_pgm`].
pub mod pgm;

pub use crate::error::IoError;
