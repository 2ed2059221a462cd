use num_traits::{ToPrimitive, Zero};

use crate::grid::Grid;

/// Intensity ramp from dark to bright used by [`render_gray`].
pub const GRAY_RAMP: &[u8] = b" .:-=+*#%@";

/// Render a binary grid as text, one line per row.
///
/// Non-zero samples become `#` and zero samples `.`, each followed by a space.
///
/// # Example
///
/// ```
/// use morpho_image::{render::render_binary, Grid};
///
/// let grid = Grid::from_rows(vec![vec![0u8, 1], vec![1, 1]]).unwrap();
/// assert_eq!(render_binary(&grid), ". # \n# # \n");
/// ```
pub fn render_binary<T: Zero + PartialEq>(src: &Grid<T>) -> String {
    let mut out = String::with_capacity(src.height() * (src.width() * 2 + 1));
    for row in src.rows_iter() {
        for v in row {
            out.push_str(if v.is_zero() { ". " } else { "# " });
        }
        out.push('\n');
    }
    out
}

/// Render a grayscale grid as text using [`GRAY_RAMP`].
///
/// Samples are clamped to `[0, 255]` and mapped onto the ramp linearly.
/// Glyphs in a row are separated by a single space.
pub fn render_gray<T: ToPrimitive>(src: &Grid<T>) -> String {
    let mut out = String::new();
    for row in src.rows_iter() {
        let line = row
            .iter()
            .map(|v| char::from(GRAY_RAMP[gray_level(v)]).to_string())
            .collect::<Vec<_>>()
            .join(" ");
        out.push_str(&line);
        out.push('\n');
    }
    out
}

fn gray_level<T: ToPrimitive>(v: &T) -> usize {
    let val = v.to_i64().unwrap_or(0).clamp(0, 255) as usize;
    val * GRAY_RAMP.len() / 256
}
