use morpho_image::GrayGrid;

use super::{neighbor, per_pixel, StructuringElement};

/// Value read for out-of-bounds neighbors during erosion.
pub const ERODE_BORDER: u8 = u8::MAX;

/// Value read for out-of-bounds neighbors during dilation.
pub const DILATE_BORDER: u8 = u8::MIN;

/// Erode a grayscale grid.
///
/// Each pixel is replaced by the minimum over the offsets of `se`. Neighbors
/// outside the grid read as [`ERODE_BORDER`], so the border never darkens the result.
///
/// # Example
///
/// ```
/// use morpho_image::Grid;
/// use morpho_imgproc::morphology::{gray, StructuringElement};
///
/// let img = Grid::from_rows(vec![vec![10u8, 20, 30]]).unwrap();
/// let se = StructuringElement::horizontal_line(3).unwrap();
/// assert_eq!(gray::erode(&img, &se).as_slice(), &[10, 10, 20]);
/// ```
pub fn erode(src: &GrayGrid, se: &StructuringElement) -> GrayGrid {
    per_pixel(src, |row, col| {
        se.offsets()
            .iter()
            .map(|&off| neighbor(src, row, col, off).unwrap_or(ERODE_BORDER))
            .fold(ERODE_BORDER, u8::min)
    })
}

/// Dilate a grayscale grid.
///
/// Each pixel is replaced by the maximum over the offsets of `se`. Neighbors
/// outside the grid read as [`DILATE_BORDER`], so the border never brightens the result.
pub fn dilate(src: &GrayGrid, se: &StructuringElement) -> GrayGrid {
    per_pixel(src, |row, col| {
        se.offsets()
            .iter()
            .map(|&off| neighbor(src, row, col, off).unwrap_or(DILATE_BORDER))
            .fold(DILATE_BORDER, u8::max)
    })
}

/// Grayscale opening: erosion followed by dilation.
pub fn opening(src: &GrayGrid, se: &StructuringElement) -> GrayGrid {
    dilate(&erode(src, se), se)
}

/// Grayscale closing: dilation followed by erosion.
pub fn closing(src: &GrayGrid, se: &StructuringElement) -> GrayGrid {
    erode(&dilate(src, se), se)
}
