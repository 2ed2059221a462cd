use crate::error::GridError;

/// Grid size in pixels
///
/// A struct to represent the size of a grid in pixels.
///
/// # Examples
///
/// ```
/// use morpho_image::GridSize;
///
/// let size = GridSize {
///   width: 10,
///   height: 20,
/// };
///
/// assert_eq!(size.width, 10);
/// assert_eq!(size.height, 20);
/// ```
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct GridSize {
    /// Width of the grid in pixels
    pub width: usize,
    /// Height of the grid in pixels
    pub height: usize,
}

impl GridSize {
    /// Total number of pixels covered by the size.
    pub fn area(&self) -> usize {
        self.width * self.height
    }
}

impl std::fmt::Display for GridSize {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(
            f,
            "GridSize {{ width: {}, height: {} }}",
            self.width, self.height
        )
    }
}

impl From<[usize; 2]> for GridSize {
    fn from(size: [usize; 2]) -> Self {
        GridSize {
            width: size[0],
            height: size[1],
        }
    }
}

/// A dense, row-major 2D array of samples.
///
/// Every morphology, labeling and thresholding operation takes grids by
/// reference and returns a freshly allocated one; inputs are never mutated.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Grid<T> {
    size: GridSize,
    data: Vec<T>,
}

/// A grid whose samples are restricted to `0` and `1`.
pub type BinaryGrid = Grid<u8>;

/// A grid of 8-bit intensities in `[0, 255]`.
pub type GrayGrid = Grid<u8>;

/// Component identifiers produced by connected-component labeling; `0` is background.
pub type LabelGrid = Grid<u32>;

impl<T> Grid<T> {
    /// Create a new grid from row-major pixel data.
    ///
    /// # Arguments
    ///
    /// * `size` - The size of the grid in pixels.
    /// * `data` - The pixel data of the grid.
    ///
    /// # Errors
    ///
    /// If the length of the pixel data does not match the grid size, an error is returned.
    ///
    /// # Examples
    ///
    /// ```
    /// use morpho_image::{Grid, GridSize};
    ///
    /// let grid = Grid::new(
    ///     GridSize {
    ///         width: 3,
    ///         height: 2,
    ///     },
    ///     vec![0u8; 6],
    /// )
    /// .unwrap();
    ///
    /// assert_eq!(grid.width(), 3);
    /// assert_eq!(grid.height(), 2);
    /// ```
    pub fn new(size: GridSize, data: Vec<T>) -> Result<Self, GridError> {
        if data.len() != size.area() {
            return Err(GridError::InvalidDataLength(data.len(), size.area()));
        }
        Ok(Self { size, data })
    }

    /// Create a grid from a list of equally long rows.
    ///
    /// An empty list yields a 0x0 grid.
    ///
    /// # Errors
    ///
    /// Returns [`GridError::RaggedRows`] if any row length differs from the first one.
    pub fn from_rows(rows: Vec<Vec<T>>) -> Result<Self, GridError> {
        let height = rows.len();
        let width = rows.first().map_or(0, Vec::len);
        let mut data = Vec::with_capacity(width * height);
        for (i, row) in rows.into_iter().enumerate() {
            if row.len() != width {
                return Err(GridError::RaggedRows(i, row.len(), width));
            }
            data.extend(row);
        }
        Self::new(GridSize { width, height }, data)
    }

    /// Get the size of the grid in pixels.
    pub fn size(&self) -> GridSize {
        self.size
    }

    /// Get the width of the grid in pixels.
    pub fn width(&self) -> usize {
        self.size.width
    }

    /// Get the height of the grid in pixels.
    pub fn height(&self) -> usize {
        self.size.height
    }

    /// Get the number of columns of the grid.
    pub fn cols(&self) -> usize {
        self.width()
    }

    /// Get the number of rows of the grid.
    pub fn rows(&self) -> usize {
        self.height()
    }

    /// Whether the grid holds no pixels at all.
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Get a reference to the pixel at `(row, col)`, or `None` when out of bounds.
    pub fn get(&self, row: usize, col: usize) -> Option<&T> {
        if row >= self.size.height || col >= self.size.width {
            return None;
        }
        self.data.get(row * self.size.width + col)
    }

    /// Get the pixel at a signed position, as produced by adding an offset to a center.
    ///
    /// Returns `None` for any position outside the grid.
    pub fn get_signed(&self, row: isize, col: isize) -> Option<&T> {
        if row < 0 || col < 0 {
            return None;
        }
        self.get(row as usize, col as usize)
    }

    /// Overwrite the pixel at `(row, col)`.
    ///
    /// # Errors
    ///
    /// Returns [`GridError::IndexOutOfBounds`] if the position is outside the grid.
    pub fn set(&mut self, row: usize, col: usize, val: T) -> Result<(), GridError> {
        if row >= self.size.height || col >= self.size.width {
            return Err(GridError::IndexOutOfBounds(
                row,
                col,
                self.size.height,
                self.size.width,
            ));
        }
        self.data[row * self.size.width + col] = val;
        Ok(())
    }

    /// Get the pixel data in row-major order.
    pub fn as_slice(&self) -> &[T] {
        &self.data
    }

    /// Get the mutable pixel data in row-major order.
    pub fn as_slice_mut(&mut self) -> &mut [T] {
        &mut self.data
    }

    /// Consume the grid and return its pixel data.
    pub fn into_vec(self) -> Vec<T> {
        self.data
    }

    /// Iterate over the rows of the grid, top to bottom.
    pub fn rows_iter(&self) -> impl Iterator<Item = &[T]> + '_ {
        // chunks_exact panics on a zero chunk size
        self.data.chunks_exact(self.size.width.max(1))
    }

    /// Build a new grid of the same size by applying `f` to every pixel.
    pub fn map<U, F>(&self, f: F) -> Grid<U>
    where
        F: FnMut(&T) -> U,
    {
        Grid {
            size: self.size,
            data: self.data.iter().map(f).collect(),
        }
    }
}

impl<T: Clone> Grid<T> {
    /// Create a new grid with the given size, filled with `val`.
    ///
    /// # Examples
    ///
    /// ```
    /// use morpho_image::{Grid, GridSize};
    ///
    /// let grid = Grid::from_size_val(GridSize { width: 4, height: 2 }, 50u8);
    /// assert!(grid.as_slice().iter().all(|&v| v == 50));
    /// ```
    pub fn from_size_val(size: GridSize, val: T) -> Self {
        Self {
            size,
            data: vec![val; size.area()],
        }
    }
}

impl<T: Clone + Default> Grid<T> {
    /// Create a zero-initialized grid with the given size.
    pub fn zeros(size: GridSize) -> Self {
        Self::from_size_val(size, T::default())
    }
}

/// Check that two grids share the same size.
///
/// # Errors
///
/// Returns [`GridError::DimensionMismatch`] when heights or widths differ.
pub fn ensure_same_size<T, U>(a: &Grid<T>, b: &Grid<U>) -> Result<(), GridError> {
    if a.size() != b.size() {
        return Err(GridError::DimensionMismatch(
            a.height(),
            a.width(),
            b.height(),
            b.width(),
        ));
    }
    Ok(())
}
