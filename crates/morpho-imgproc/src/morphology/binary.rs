use morpho_image::BinaryGrid;

use super::{neighbor, per_pixel, StructuringElement};

const FOREGROUND: u8 = 1;

/// Erode a binary grid.
///
/// A pixel stays `1` only if every offset of `se` lands inside the grid on a
/// `1`. Offsets falling outside the grid count as background, so foreground
/// touching the border is eroded away.
///
/// # Example
///
/// ```
/// use morpho_image::Grid;
/// use morpho_imgproc::morphology::{binary, StructuringElement};
///
/// let img = Grid::from_rows(vec![vec![1u8]]).unwrap();
/// let se = StructuringElement::square(3).unwrap();
/// assert_eq!(binary::erode(&img, &se).as_slice(), &[0]);
/// ```
pub fn erode(src: &BinaryGrid, se: &StructuringElement) -> BinaryGrid {
    per_pixel(src, |row, col| {
        let fits = se
            .offsets()
            .iter()
            .all(|&off| neighbor(src, row, col, off) == Some(FOREGROUND));
        u8::from(fits)
    })
}

/// Dilate a binary grid.
///
/// A pixel becomes `1` if at least one offset of `se` lands inside the grid on
/// a `1`. Offsets falling outside the grid contribute nothing.
pub fn dilate(src: &BinaryGrid, se: &StructuringElement) -> BinaryGrid {
    per_pixel(src, |row, col| {
        let hit = se
            .offsets()
            .iter()
            .any(|&off| neighbor(src, row, col, off) == Some(FOREGROUND));
        u8::from(hit)
    })
}

/// Opening: erosion followed by dilation.
///
/// Removes foreground features the structuring element cannot fit into.
pub fn opening(src: &BinaryGrid, se: &StructuringElement) -> BinaryGrid {
    dilate(&erode(src, se), se)
}

/// Closing: dilation followed by erosion.
///
/// Fills background gaps the structuring element cannot fit into.
pub fn closing(src: &BinaryGrid, se: &StructuringElement) -> BinaryGrid {
    erode(&dilate(src, se), se)
}

/// Pixel-wise complement: `1` becomes `0` and every other sample becomes `1`.
///
/// Only `1` is foreground, so samples outside `{0, 1}` are inverted as background.
pub fn invert(src: &BinaryGrid) -> BinaryGrid {
    src.map(|&v| u8::from(v != FOREGROUND))
}
