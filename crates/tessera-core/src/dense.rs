//! Minimal dense reference backend.
//!
//! [`DenseGrid`] is a zero-min dense array implementing the consumed
//! source and access contracts, backed by [`ndarray::ArrayD`]. It exists
//! so the view layer and the boundary-extension layer have a concrete
//! collaborator and so tests are runnable; it is not a general array
//! library.

use ndarray::{ArrayD, Dimension, IxDyn};
use smallvec::SmallVec;

use crate::error::{Result, TilingError};
use crate::source::{NdAccess, NdSource};
use crate::types::{Interval, Pos};

/// A zero-min dense n-dimensional grid.
///
/// # Examples
///
/// ```
/// use tessera_core::{DenseGrid, NdSource};
///
/// let grid = DenseGrid::from_shape_fn(&[3, 3], |pos| (pos[0] * 10 + pos[1]) as f32)?;
/// assert_eq!(grid.at(&[2, 1])?, 21.0);
/// # Ok::<(), tessera_core::TilingError>(())
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct DenseGrid<T> {
    data: ArrayD<T>,
    interval: Interval,
}

impl<T: Clone> DenseGrid<T> {
    /// Create a grid filled with `elem`.
    ///
    /// # Errors
    ///
    /// Returns [`TilingError::OutOfRange`] if any extent is zero.
    pub fn from_elem(shape: &[usize], elem: T) -> Result<Self> {
        let interval = Interval::from_shape(shape)?;
        Ok(Self {
            data: ArrayD::from_elem(IxDyn(shape), elem),
            interval,
        })
    }

    /// Create a grid by evaluating `f` at every position.
    ///
    /// # Errors
    ///
    /// Returns [`TilingError::OutOfRange`] if any extent is zero.
    pub fn from_shape_fn(shape: &[usize], f: impl Fn(&[i64]) -> T) -> Result<Self> {
        let interval = Interval::from_shape(shape)?;
        let data = ArrayD::from_shape_fn(IxDyn(shape), |ix| {
            let pos: Pos = ix.slice().iter().map(|&i| i as i64).collect();
            f(&pos)
        });
        Ok(Self { data, interval })
    }

    /// Create a grid from a flat vector in standard (row-major) layout.
    ///
    /// # Errors
    ///
    /// Returns [`TilingError::OutOfRange`] if any extent is zero and
    /// [`TilingError::DimensionMismatch`] if the element count does not
    /// match the shape.
    pub fn from_vec(data: Vec<T>, shape: &[usize]) -> Result<Self> {
        let interval = Interval::from_shape(shape)?;
        let expected: usize = shape.iter().product();
        let got = data.len();
        let data = ArrayD::from_shape_vec(IxDyn(shape), data)
            .map_err(|_| TilingError::DimensionMismatch { expected, got })?;
        Ok(Self { data, interval })
    }

    /// The grid's extents.
    pub fn shape(&self) -> &[usize] {
        self.data.shape()
    }

    /// Overwrite the value at `position`.
    ///
    /// # Errors
    ///
    /// Returns [`TilingError::OutOfRange`] if `position` lies outside the
    /// grid.
    pub fn set(&mut self, position: &[i64], value: T) -> Result<()> {
        let ix = self.checked_index(position)?;
        self.data[IxDyn(&ix)] = value;
        Ok(())
    }

    /// A fresh access positioned at the origin.
    pub fn random_access(&self) -> DenseAccess<'_, T> {
        DenseAccess {
            grid: self,
            position: self.interval.min_slice().iter().copied().collect(),
        }
    }

    fn checked_index(&self, position: &[i64]) -> Result<SmallVec<[usize; 6]>> {
        if !self.interval.contains(position) {
            return Err(TilingError::OutOfRange {
                what: "position outside grid",
                index: position.to_vec(),
                bound: self.interval.max_slice().to_vec(),
            });
        }
        Ok(position.iter().map(|&p| p as usize).collect())
    }
}

impl<T: Clone> NdSource for DenseGrid<T> {
    type Elem = T;

    fn interval(&self) -> &Interval {
        &self.interval
    }

    fn at(&self, position: &[i64]) -> Result<T> {
        let ix = self.checked_index(position)?;
        Ok(self.data[IxDyn(&ix)].clone())
    }
}

/// A movable access over a [`DenseGrid`].
///
/// Reading outside the grid is a contract violation and panics; wrap the
/// grid in a boundary extension for safe out-of-domain reads.
#[derive(Debug)]
pub struct DenseAccess<'a, T> {
    grid: &'a DenseGrid<T>,
    position: Pos,
}

impl<'a, T> Clone for DenseAccess<'a, T> {
    fn clone(&self) -> Self {
        Self {
            grid: self.grid,
            position: self.position.clone(),
        }
    }
}

impl<'a, T: Clone> DenseAccess<'a, T> {
    /// An independent access at the same position.
    pub fn copy(&self) -> Self {
        self.clone()
    }
}

impl<'a, T: Clone> NdAccess for DenseAccess<'a, T> {
    type Elem = T;

    fn num_dimensions(&self) -> usize {
        self.position.len()
    }

    fn position(&self) -> &[i64] {
        &self.position
    }

    fn set_position(&mut self, position: &[i64]) {
        debug_assert_eq!(position.len(), self.position.len());
        self.position.copy_from_slice(position);
    }

    fn fwd(&mut self, d: usize) {
        self.position[d] += 1;
    }

    fn bck(&mut self, d: usize) {
        self.position[d] -= 1;
    }

    fn move_by(&mut self, steps: i64, d: usize) {
        self.position[d] += steps;
    }

    fn get(&self) -> T {
        self.grid
            .at(&self.position)
            .expect("access read outside the grid; wrap it in a boundary extension")
    }
}
