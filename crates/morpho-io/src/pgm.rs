use std::path::Path;

use morpho_image::{GrayGrid, Grid, GridSize};
use num_traits::ToPrimitive;

use crate::error::IoError;

/// Format tag opening every ASCII PGM file.
pub const PGM_MAGIC: &str = "P2";

/// Maximum sample value written in the header.
pub const PGM_MAX_VALUE: u8 = u8::MAX;

/// Decodes an ASCII PGM raster from text.
///
/// The expected layout is the `P2` tag, the width, the height, a max-value
/// marker and then `width * height` integers in row-major order, all separated
/// by whitespace. Text from a `#` to the end of its line is a comment. The
/// max-value marker must be an integer but does not rescale samples; samples
/// are clamped to `[0, 255]`. Tokens after the last sample are ignored.
///
/// # Errors
///
/// Returns [`IoError::MalformedRaster`] if the tag is wrong, a header field or
/// sample is not an integer, or fewer than `width * height` samples are present.
///
/// # Example
///
/// ```
/// use morpho_io::pgm::decode_pgm;
///
/// let image = decode_pgm("P2\n2 1\n255\n0 300\n").unwrap();
/// assert_eq!(image.as_slice(), &[0, 255]);
/// ```
pub fn decode_pgm(text: &str) -> Result<GrayGrid, IoError> {
    let mut tokens = text
        .lines()
        .map(|line| line.split('#').next().unwrap_or_default())
        .flat_map(|line| line.split_whitespace());

    match tokens.next() {
        Some(PGM_MAGIC) => {}
        Some(tag) => {
            return Err(IoError::MalformedRaster(format!(
                "expected format tag {PGM_MAGIC}, found {tag}"
            )))
        }
        None => return Err(IoError::MalformedRaster("empty raster".to_string())),
    }

    let width = parse_header(tokens.next(), "width")?;
    let height = parse_header(tokens.next(), "height")?;
    parse_header(tokens.next(), "max value")?;

    let num_samples = width.checked_mul(height).ok_or_else(|| {
        IoError::MalformedRaster(format!("raster size {width}x{height} overflows"))
    })?;

    // the header is untrusted, grow with the samples actually present
    let mut data = Vec::new();
    for idx in 0..num_samples {
        let token = tokens.next().ok_or_else(|| {
            IoError::MalformedRaster(format!("expected {num_samples} samples, found {idx}"))
        })?;
        let val: i64 = token
            .parse()
            .map_err(|_| IoError::MalformedRaster(format!("invalid sample `{token}`")))?;
        data.push(val.clamp(0, PGM_MAX_VALUE as i64) as u8);
    }

    Ok(Grid::new(GridSize { width, height }, data)?)
}

fn parse_header(token: Option<&str>, field: &str) -> Result<usize, IoError> {
    let token =
        token.ok_or_else(|| IoError::MalformedRaster(format!("missing header field {field}")))?;
    token
        .parse()
        .map_err(|_| IoError::MalformedRaster(format!("invalid {field} `{token}`")))
}

/// Encodes a grid as ASCII PGM text.
///
/// Every sample is clamped to `[0, 255]` before being written; samples that
/// cannot be represented as an integer are written as `0`. Each grid row is
/// written on its own line.
pub fn encode_pgm<T: ToPrimitive>(image: &Grid<T>) -> String {
    let mut out = format!(
        "{PGM_MAGIC}\n{} {}\n{PGM_MAX_VALUE}\n",
        image.width(),
        image.height()
    );
    for row in image.rows_iter() {
        let line = row
            .iter()
            .map(|v| clamp_sample(v).to_string())
            .collect::<Vec<_>>()
            .join(" ");
        out.push_str(&line);
        out.push('\n');
    }
    out
}

fn clamp_sample<T: ToPrimitive>(v: &T) -> u8 {
    v.to_i64().unwrap_or(0).clamp(0, PGM_MAX_VALUE as i64) as u8
}

/// Reads an ASCII PGM image from the given file path.
///
/// # Arguments
///
/// * `file_path` - The path to the PGM image.
///
/// # Returns
///
/// A grayscale grid containing the image data.
pub fn read_image_pgm(file_path: impl AsRef<Path>) -> Result<GrayGrid, IoError> {
    let file_path = file_path.as_ref();
    if !file_path.exists() {
        return Err(IoError::FileDoesNotExist(file_path.to_path_buf()));
    }

    let text = std::fs::read_to_string(file_path)?;
    let image = decode_pgm(&text)?;

    log::debug!(
        "read {} ({}x{})",
        file_path.display(),
        image.width(),
        image.height()
    );

    Ok(image)
}

/// Writes a grid to the given file path as an ASCII PGM image.
///
/// # Arguments
///
/// * `file_path` - The path to the PGM image.
/// * `image` - The grid to write; samples are clamped to `[0, 255]`.
pub fn write_image_pgm<T: ToPrimitive>(
    file_path: impl AsRef<Path>,
    image: &Grid<T>,
) -> Result<(), IoError> {
    let file_path = file_path.as_ref();
    std::fs::write(file_path, encode_pgm(image))?;

    log::debug!(
        "wrote {} ({}x{})",
        file_path.display(),
        image.width(),
        image.height()
    );

    Ok(())
}
