use morpho_image::GrayGrid;

/// Number of bins of an 8-bit intensity histogram.
pub const NUM_BINS: usize = 256;

/// Compute the pixel intensity histogram of a grayscale grid.
///
/// # Arguments
///
/// * `src` - The input grid to compute the histogram.
///
/// # Returns
///
/// An array where entry `i` counts the pixels of intensity `i`.
///
/// # Example
///
/// ```
/// use morpho_image::Grid;
/// use morpho_imgproc::histogram::compute_histogram;
///
/// let img = Grid::from_rows(vec![vec![0u8, 2, 2], vec![255, 255, 255]]).unwrap();
/// let hist = compute_histogram(&img);
/// assert_eq!(hist[0], 1);
/// assert_eq!(hist[2], 2);
/// assert_eq!(hist[255], 3);
/// ```
pub fn compute_histogram(src: &GrayGrid) -> [usize; NUM_BINS] {
    let mut hist = [0usize; NUM_BINS];
    for &px in src.as_slice() {
        hist[px as usize] += 1;
    }
    hist
}

#[cfg(test)]
mod tests {
    use morpho_image::{Grid, GridError};

    #[test]
    fn test_compute_histogram() -> Result<(), GridError> {
        let image = Grid::from_rows(vec![
            vec![0, 2, 4],
            vec![128, 130, 132],
            vec![254, 255, 255],
        ])?;

        let histogram = super::compute_histogram(&image);
        assert_eq!(histogram.iter().sum::<usize>(), 9);
        assert_eq!(histogram[255], 2);
        assert_eq!(histogram[128], 1);
        assert_eq!(histogram[1], 0);

        Ok(())
    }
}
