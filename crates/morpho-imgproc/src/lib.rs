#![deny(missing_docs)]
#![doc = env!("CARGO_PKG_DESCRIPTION")]

/// compute image histogram module.
pub mod histogram;

/// connected-component labeling module.
pub mod label;

/// binary and grayscale morphology module.
pub mod morphology;

/// size based filtering of objects and holes.
pub mod region;

/// operations to threshold images.
pub mod threshold;
