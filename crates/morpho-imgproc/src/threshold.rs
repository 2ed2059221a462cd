use morpho_image::{BinaryGrid, GrayGrid};

use crate::histogram::compute_histogram;

/// Apply a binary threshold to a grid.
///
/// # Arguments
///
/// * `src` - The input grayscale grid.
/// * `threshold` - Samples strictly greater than this value are foreground.
/// * `max_value` - The value written for foreground samples.
///
/// # Returns
///
/// A new grid with `max_value` where `src > threshold` and `0` elsewhere.
///
/// # Examples
///
/// ```
/// use morpho_image::Grid;
/// use morpho_imgproc::threshold::threshold_binary;
///
/// let image = Grid::from_rows(vec![vec![100u8, 200], vec![50, 150]]).unwrap();
/// let thresholded = threshold_binary(&image, 100, 255);
/// assert_eq!(thresholded.as_slice(), &[0, 255, 0, 255]);
/// ```
pub fn threshold_binary(src: &GrayGrid, threshold: u8, max_value: u8) -> GrayGrid {
    src.map(|&px| if px > threshold { max_value } else { 0 })
}

/// Binarize a grayscale grid into `{0, 1}`: `1` where the sample is strictly above `threshold`.
pub fn apply_threshold(src: &GrayGrid, threshold: u8) -> BinaryGrid {
    threshold_binary(src, threshold, 1)
}

/// Scale a `{0, 1}` grid to `{0, 255}` for storage or display as grayscale.
pub fn binary_to_gray(src: &BinaryGrid) -> GrayGrid {
    src.map(|&v| if v != 0 { u8::MAX } else { 0 })
}

/// Compute Otsu's threshold of a grayscale grid.
///
/// Candidate thresholds `t` are scanned from `0` upwards; the background class
/// holds the samples `<= t`. Candidates with an empty background are skipped
/// and the scan stops as soon as the foreground becomes empty. The first `t`
/// reaching the largest between-class variance
/// `w_bg * w_fg * (mean_bg - mean_fg)^2` wins; later ties do not replace it.
///
/// An image with a single intensity, or no pixels, yields `0`.
///
/// # Examples
///
/// ```
/// use morpho_image::Grid;
/// use morpho_imgproc::threshold::otsu_threshold;
///
/// let image = Grid::from_rows(vec![vec![10u8, 10, 200, 200]]).unwrap();
/// assert_eq!(otsu_threshold(&image), 10);
/// ```
pub fn otsu_threshold(src: &GrayGrid) -> u8 {
    let histogram = compute_histogram(src);

    let total_pixels = src.as_slice().len() as f64;
    let sum_total: f64 = histogram
        .iter()
        .enumerate()
        .map(|(i, &count)| i as f64 * count as f64)
        .sum();

    let mut best_variance = -1.0;
    let mut best_threshold = 0u8;

    let mut weight_back = 0.0;
    let mut sum_back = 0.0;

    for (t, &count) in histogram.iter().enumerate() {
        weight_back += count as f64;
        if weight_back == 0.0 {
            continue;
        }
        let weight_fore = total_pixels - weight_back;
        if weight_fore == 0.0 {
            break;
        }

        sum_back += t as f64 * count as f64;
        let mean_back = sum_back / weight_back;
        let mean_fore = (sum_total - sum_back) / weight_fore;

        let variance = weight_back * weight_fore * (mean_back - mean_fore).powi(2);
        if variance > best_variance {
            best_variance = variance;
            best_threshold = t as u8;
        }
    }

    log::debug!("otsu threshold for {}: {}", src.size(), best_threshold);

    best_threshold
}

/// Compute Otsu's threshold and binarize the grid with it.
///
/// # Returns
///
/// The threshold and the `{0, 1}` grid produced by [`apply_threshold`].
pub fn otsu_binarize(src: &GrayGrid) -> (u8, BinaryGrid) {
    let threshold = otsu_threshold(src);
    (threshold, apply_threshold(src, threshold))
}

#[cfg(test)]
mod tests {
    use morpho_image::{Grid, GridError, GrayGrid};

    fn bimodal() -> Result<GrayGrid, GridError> {
        let mut img = Grid::from_size_val([10, 10].into(), 50u8);
        for y in 3..7 {
            for x in 3..7 {
                img.set(y, x, 200)?;
            }
        }
        Ok(img)
    }

    #[test]
    fn threshold_binary() -> Result<(), GridError> {
        let image = Grid::from_rows(vec![vec![100u8, 200, 50], vec![150, 200, 250]])?;
        let thresholded = super::threshold_binary(&image, 100, 255);
        assert_eq!(thresholded.as_slice(), &[0, 255, 0, 255, 255, 255]);
        assert_eq!(thresholded.size(), image.size());
        Ok(())
    }

    #[test]
    fn apply_threshold_is_strict() -> Result<(), GridError> {
        let image = Grid::from_rows(vec![vec![99u8, 100, 101]])?;
        assert_eq!(super::apply_threshold(&image, 100).as_slice(), &[0, 0, 1]);
        Ok(())
    }

    #[test]
    fn test_otsu_bimodal() -> Result<(), GridError> {
        let img = bimodal()?;
        let thr = super::otsu_threshold(&img);
        // every t in [50, 200) splits the same way; the first one is kept
        assert_eq!(thr, 50);

        let bin = super::apply_threshold(&img, thr);
        for y in 0..10 {
            for x in 0..10 {
                let inside = (3..7).contains(&y) && (3..7).contains(&x);
                assert_eq!(bin.get(y, x), Some(&u8::from(inside)));
            }
        }
        Ok(())
    }

    #[test]
    fn test_otsu_three_levels() -> Result<(), GridError> {
        let image = Grid::from_rows(vec![vec![100u8, 200, 50], vec![150, 200, 250]])?;
        let (thr, bin) = super::otsu_binarize(&image);
        assert_eq!(thr, 100);
        assert_eq!(bin.as_slice(), &[0, 1, 0, 1, 1, 1]);
        Ok(())
    }

    #[test]
    fn test_otsu_single_intensity() {
        let image = Grid::from_size_val([4, 3].into(), 77u8);
        assert_eq!(super::otsu_threshold(&image), 0);
    }

    #[test]
    fn test_otsu_empty() {
        let image: GrayGrid = Grid::zeros([0, 0].into());
        assert_eq!(super::otsu_threshold(&image), 0);
    }

    #[test]
    fn binary_to_gray_scales() -> Result<(), GridError> {
        let bin = Grid::from_rows(vec![vec![0u8, 1]])?;
        assert_eq!(super::binary_to_gray(&bin).as_slice(), &[0, 255]);
        Ok(())
    }
}
