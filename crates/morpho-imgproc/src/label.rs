use std::collections::VecDeque;

use morpho_image::{BinaryGrid, Grid, LabelGrid};

/// Up, down, left, right.
const NEIGHBORS_4: [(isize, isize); 4] = [(-1, 0), (1, 0), (0, -1), (0, 1)];

/// Label the 4-connected foreground components of a binary grid.
///
/// The grid is scanned in row-major order; each time an unlabeled foreground
/// pixel (value `1`) is found, the next identifier starting at `1` is assigned to
/// it and flood-filled to every foreground pixel reachable through edge-sharing
/// neighbors. Background pixels keep label `0`.
///
/// # Returns
///
/// The label grid and the number of components found.
///
/// # Example
///
/// ```
/// use morpho_image::Grid;
/// use morpho_imgproc::label::label4;
///
/// let img = Grid::from_rows(vec![vec![1u8, 0, 1], vec![1, 0, 0]]).unwrap();
/// let (labels, count) = label4(&img);
/// assert_eq!(count, 2);
/// assert_eq!(labels.as_slice(), &[1, 0, 2, 1, 0, 0]);
/// ```
pub fn label4(src: &BinaryGrid) -> (LabelGrid, u32) {
    let mut labels: LabelGrid = Grid::zeros(src.size());
    let width = src.width();
    let pixels = src.as_slice();
    let mut current = 0u32;
    let mut queue = VecDeque::new();

    for start in 0..pixels.len() {
        if pixels[start] != 1 || labels.as_slice()[start] != 0 {
            continue;
        }

        current += 1;
        labels.as_slice_mut()[start] = current;
        queue.push_back((start / width, start % width));

        while let Some((row, col)) = queue.pop_front() {
            for (dy, dx) in NEIGHBORS_4 {
                let (ny, nx) = (row as isize + dy, col as isize + dx);
                if src.get_signed(ny, nx) != Some(&1) {
                    continue;
                }
                let idx = ny as usize * width + nx as usize;
                let label = &mut labels.as_slice_mut()[idx];
                if *label == 0 {
                    *label = current;
                    queue.push_back((ny as usize, nx as usize));
                }
            }
        }
    }

    log::trace!("labeled {} components in a {} grid", current, src.size());

    (labels, current)
}

/// Count the pixels carrying each label.
///
/// The returned vector is indexed by label and has at least `count + 1`
/// entries; it grows to cover any label larger than `count` found in the grid.
/// Entry `0` (background) is always `0`.
pub fn component_sizes(labels: &LabelGrid, count: u32) -> Vec<usize> {
    let max_label = labels.as_slice().iter().copied().max().unwrap_or(0);
    let mut sizes = vec![0usize; count.max(max_label) as usize + 1];
    for &label in labels.as_slice() {
        if label > 0 {
            sizes[label as usize] += 1;
        }
    }
    sizes
}
