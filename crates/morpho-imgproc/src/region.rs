use morpho_image::BinaryGrid;

use crate::label::{component_sizes, label4};
use crate::morphology::binary::invert;

/// Remove 4-connected foreground components smaller than `min_size` pixels.
///
/// Pixels belonging to a component of at least `min_size` pixels are kept;
/// everything else becomes `0`. A `min_size` of `0` or `1` keeps every component.
///
/// # Example
///
/// ```
/// use morpho_image::Grid;
/// use morpho_imgproc::region::remove_small_objects;
///
/// let img = Grid::from_rows(vec![vec![1u8, 0, 1, 1]]).unwrap();
/// assert_eq!(remove_small_objects(&img, 2).as_slice(), &[0, 0, 1, 1]);
/// ```
pub fn remove_small_objects(src: &BinaryGrid, min_size: usize) -> BinaryGrid {
    let (labels, count) = label4(src);
    let sizes = component_sizes(&labels, count);

    labels.map(|&label| u8::from(label > 0 && sizes[label as usize] >= min_size))
}

/// Fill 4-connected background regions of at most `max_hole_size` pixels.
///
/// The grid is complemented, components smaller than `max_hole_size + 1` are
/// removed from the complement, and the result is complemented back. Background
/// regions touching the border are treated like any other region, so a small
/// border notch is filled too.
pub fn remove_small_holes(src: &BinaryGrid, max_hole_size: usize) -> BinaryGrid {
    let inverted = invert(src);
    let cleaned = remove_small_objects(&inverted, max_hole_size.saturating_add(1));
    invert(&cleaned)
}
