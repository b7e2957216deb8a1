//! Core geometry types for tile addressing.
//!
//! This module defines the fundamental types used throughout the tessera
//! stack:
//!
//! - Type aliases for extents and coordinates ([`Shape`], [`Pos`])
//! - The inclusive axis-aligned [`Interval`] value type
//! - Flat position iteration over an interval ([`Positions`])
//!
//! Coordinates are signed (`i64`) because positions may leave an interval's
//! domain (the boundary-extension layer depends on that); extents and tile
//! counts are `usize`.

use smallvec::SmallVec;

use crate::error::{Result, TilingError};

/// Extent type using SmallVec to avoid heap allocation for common cases.
///
/// Optimized for grids with up to 6 dimensions. Automatically falls back to
/// heap allocation for higher ranks.
///
/// # Examples
///
/// ```
/// use tessera_core::Shape;
///
/// let shape: Shape = Shape::from_slice(&[20, 20, 10]);
/// assert_eq!(shape.len(), 3);
/// ```
pub type Shape = SmallVec<[usize; 6]>;

/// Coordinate vector type.
///
/// Signed so that positions outside an interval's domain remain
/// representable.
pub type Pos = SmallVec<[i64; 6]>;

/// An axis-aligned integer interval with inclusive bounds.
///
/// The invariant `min[d] <= max[d]` holds for every dimension; violating it
/// at construction is an error. Intervals are immutable once constructed
/// and take defensive copies of the bounds they are given.
///
/// # Examples
///
/// ```
/// use tessera_core::Interval;
///
/// let interval = Interval::new(&[0, 0], &[19, 9])?;
/// assert_eq!(interval.num_dimensions(), 2);
/// assert_eq!(interval.dimension(0), 20);
/// assert_eq!(interval.dimension(1), 10);
/// assert!(interval.contains(&[19, 0]));
/// assert!(!interval.contains(&[20, 0]));
/// # Ok::<(), tessera_core::TilingError>(())
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Interval {
    min: Pos,
    max: Pos,
}

impl Interval {
    /// Create an interval from inclusive per-dimension bounds.
    ///
    /// # Errors
    ///
    /// Returns [`TilingError::DimensionMismatch`] if `min` and `max` differ
    /// in length, and [`TilingError::OutOfRange`] if `max[d] < min[d]` for
    /// any dimension.
    pub fn new(min: &[i64], max: &[i64]) -> Result<Self> {
        if min.len() != max.len() {
            return Err(TilingError::DimensionMismatch {
                expected: min.len(),
                got: max.len(),
            });
        }
        if min.iter().zip(max.iter()).any(|(&lo, &hi)| hi < lo) {
            return Err(TilingError::OutOfRange {
                what: "interval max below min",
                index: max.to_vec(),
                bound: min.to_vec(),
            });
        }
        Ok(Self {
            min: Pos::from_slice(min),
            max: Pos::from_slice(max),
        })
    }

    /// Create a zero-min interval covering `[0, shape[d] - 1]` per dimension.
    ///
    /// # Errors
    ///
    /// Returns [`TilingError::OutOfRange`] if any extent is zero.
    pub fn from_shape(shape: &[usize]) -> Result<Self> {
        if shape.contains(&0) {
            return Err(TilingError::OutOfRange {
                what: "interval extent must be positive",
                index: shape.iter().map(|&s| s as i64).collect(),
                bound: vec![1; shape.len()],
            });
        }
        let min: Pos = shape.iter().map(|_| 0).collect();
        let max: Pos = shape.iter().map(|&s| s as i64 - 1).collect();
        Ok(Self { min, max })
    }

    /// Number of dimensions.
    pub fn num_dimensions(&self) -> usize {
        self.min.len()
    }

    /// Inclusive lower bound in dimension `d`.
    pub fn min(&self, d: usize) -> i64 {
        self.min[d]
    }

    /// Inclusive upper bound in dimension `d`.
    pub fn max(&self, d: usize) -> i64 {
        self.max[d]
    }

    /// All lower bounds.
    pub fn min_slice(&self) -> &[i64] {
        &self.min
    }

    /// All upper bounds.
    pub fn max_slice(&self) -> &[i64] {
        &self.max
    }

    /// Extent in dimension `d`.
    pub fn dimension(&self, d: usize) -> usize {
        (self.max[d] - self.min[d] + 1) as usize
    }

    /// Extents of all dimensions.
    pub fn shape(&self) -> Shape {
        (0..self.num_dimensions()).map(|d| self.dimension(d)).collect()
    }

    /// Total number of positions inside the interval.
    pub fn num_elements(&self) -> usize {
        (0..self.num_dimensions()).map(|d| self.dimension(d)).product()
    }

    /// Whether `position` lies inside the interval.
    ///
    /// A position of the wrong rank is never contained.
    pub fn contains(&self, position: &[i64]) -> bool {
        position.len() == self.num_dimensions()
            && position
                .iter()
                .zip(self.min.iter().zip(self.max.iter()))
                .all(|(&p, (&lo, &hi))| lo <= p && p <= hi)
    }

    /// Whether every lower bound is zero.
    pub fn is_zero_min(&self) -> bool {
        self.min.iter().all(|&lo| lo == 0)
    }

    /// Iterate all positions in flat order (dimension 0 varies fastest).
    pub fn positions(&self) -> Positions {
        Positions {
            min: self.min.clone(),
            max: self.max.clone(),
            next: Some(self.min.clone()),
        }
    }
}

/// Iterator over all positions of an [`Interval`] in flat order.
///
/// Dimension 0 varies fastest, matching the flat iteration order used by
/// the tile cursors.
#[derive(Debug, Clone)]
pub struct Positions {
    min: Pos,
    max: Pos,
    next: Option<Pos>,
}

impl Iterator for Positions {
    type Item = Pos;

    fn next(&mut self) -> Option<Self::Item> {
        let current = self.next.take()?;
        let mut following = current.clone();
        let mut advanced = false;
        for d in 0..following.len() {
            if following[d] < self.max[d] {
                following[d] += 1;
                advanced = true;
                break;
            }
            following[d] = self.min[d];
        }
        if advanced {
            self.next = Some(following);
        }
        Some(current)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_interval_bounds() {
        let interval = Interval::new(&[2, -3], &[5, 3]).unwrap();
        assert_eq!(interval.num_dimensions(), 2);
        assert_eq!(interval.min(0), 2);
        assert_eq!(interval.max(1), 3);
        assert_eq!(interval.dimension(0), 4);
        assert_eq!(interval.dimension(1), 7);
        assert_eq!(interval.num_elements(), 28);
        assert!(!interval.is_zero_min());
    }

    #[test]
    fn test_interval_from_shape() {
        let interval = Interval::from_shape(&[20, 20, 10]).unwrap();
        assert!(interval.is_zero_min());
        assert_eq!(interval.max_slice(), &[19, 19, 9]);
        assert_eq!(interval.num_elements(), 4000);
    }

    #[test]
    fn test_interval_errors() {
        assert!(matches!(
            Interval::new(&[0], &[1, 2]),
            Err(TilingError::DimensionMismatch { .. })
        ));
        assert!(matches!(
            Interval::new(&[0, 5], &[9, 4]),
            Err(TilingError::OutOfRange { .. })
        ));
        assert!(Interval::from_shape(&[3, 0]).is_err());
    }

    #[test]
    fn test_contains() {
        let interval = Interval::new(&[0, 0], &[4, 4]).unwrap();
        assert!(interval.contains(&[0, 0]));
        assert!(interval.contains(&[4, 4]));
        assert!(!interval.contains(&[5, 0]));
        assert!(!interval.contains(&[0, -1]));
        assert!(!interval.contains(&[0, 0, 0]));
    }

    #[test]
    fn test_positions_flat_order() {
        let interval = Interval::from_shape(&[2, 3]).unwrap();
        let positions: Vec<Pos> = interval.positions().collect();
        assert_eq!(positions.len(), 6);
        assert_eq!(&positions[0][..], &[0, 0]);
        assert_eq!(&positions[1][..], &[1, 0]);
        assert_eq!(&positions[2][..], &[0, 1]);
        assert_eq!(&positions[5][..], &[1, 2]);
    }

    #[test]
    fn test_positions_nonzero_min() {
        let interval = Interval::new(&[-1, 2], &[0, 3]).unwrap();
        let positions: Vec<Pos> = interval.positions().collect();
        assert_eq!(positions.len(), 4);
        assert_eq!(&positions[0][..], &[-1, 2]);
        assert_eq!(&positions[3][..], &[0, 3]);
    }
}
