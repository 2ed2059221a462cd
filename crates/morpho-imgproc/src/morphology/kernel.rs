use super::error::MorphologyError;

/// A relative `(dy, dx)` displacement from a center pixel.
pub type Offset = (isize, isize);

/// A morphological structuring element.
///
/// The element is stored as the list of offsets, relative to the center pixel,
/// that make up the neighborhood. It holds no reference to any image and can be
/// reused across calls.
///
/// # Example
///
/// ```rust
/// use morpho_imgproc::morphology::StructuringElement;
///
/// let se = StructuringElement::square(3).unwrap();
/// assert_eq!(se.len(), 9);
/// assert_eq!(se.radius(), 1);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StructuringElement {
    offsets: Vec<Offset>,
}

impl StructuringElement {
    /// A `k x k` block centered on the origin.
    ///
    /// Offsets are emitted row by row, from `(-k/2, -k/2)` to `(k/2, k/2)`.
    ///
    /// # Errors
    ///
    /// Returns [`MorphologyError::InvalidParameter`] if `k` is zero or even.
    pub fn square(k: usize) -> Result<Self, MorphologyError> {
        let r = half_extent("k", k)?;
        let offsets = (-r..=r)
            .flat_map(|dy| (-r..=r).map(move |dx| (dy, dx)))
            .collect();
        Ok(Self { offsets })
    }

    /// A vertical segment of height `k`: offsets `(dy, 0)` for `dy` in `[-k/2, k/2]`.
    ///
    /// # Errors
    ///
    /// Returns [`MorphologyError::InvalidParameter`] if `k` is zero or even.
    pub fn vertical_line(k: usize) -> Result<Self, MorphologyError> {
        let r = half_extent("k", k)?;
        Ok(Self {
            offsets: (-r..=r).map(|dy| (dy, 0)).collect(),
        })
    }

    /// A horizontal segment of width `k`: offsets `(0, dx)` for `dx` in `[-k/2, k/2]`.
    ///
    /// # Errors
    ///
    /// Returns [`MorphologyError::InvalidParameter`] if `k` is zero or even.
    pub fn horizontal_line(k: usize) -> Result<Self, MorphologyError> {
        let r = half_extent("k", k)?;
        Ok(Self {
            offsets: (-r..=r).map(|dx| (0, dx)).collect(),
        })
    }

    /// A plus-shaped element with arms of length `k/2`; the center appears once.
    ///
    /// # Errors
    ///
    /// Returns [`MorphologyError::InvalidParameter`] if `k` is zero or even.
    pub fn cross(k: usize) -> Result<Self, MorphologyError> {
        let r = half_extent("k", k)?;
        let mut offsets = Vec::with_capacity(2 * k - 1);
        for d in -r..=r {
            offsets.push((d, 0));
            if d != 0 {
                offsets.push((0, d));
            }
        }
        Ok(Self { offsets })
    }

    /// Build an element from an arbitrary list of offsets.
    ///
    /// No symmetry is required. An empty list is accepted: erosion with it keeps
    /// everything and dilation with it clears everything.
    pub fn from_offsets(offsets: Vec<Offset>) -> Self {
        Self { offsets }
    }

    /// The offsets making up the neighborhood.
    pub fn offsets(&self) -> &[Offset] {
        &self.offsets
    }

    /// Number of offsets in the element.
    pub fn len(&self) -> usize {
        self.offsets.len()
    }

    /// Whether the element has no offsets.
    pub fn is_empty(&self) -> bool {
        self.offsets.is_empty()
    }

    /// Largest absolute displacement along either axis.
    pub fn radius(&self) -> usize {
        self.offsets
            .iter()
            .map(|&(dy, dx)| dy.unsigned_abs().max(dx.unsigned_abs()))
            .max()
            .unwrap_or(0)
    }
}

fn half_extent(name: &'static str, k: usize) -> Result<isize, MorphologyError> {
    if k == 0 || k % 2 == 0 {
        return Err(MorphologyError::InvalidParameter {
            name,
            value: k.to_string(),
            reason: "structuring element size must be odd and at least 1".to_string(),
        });
    }
    Ok((k / 2) as isize)
}
