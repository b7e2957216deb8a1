//! The consumed array abstraction: bounded sources, cursors, and
//! sub-interval views.
//!
//! The tiling core does not define array storage; it composes with
//! anything that exposes an interval and positional sampling
//! ([`NdSource`]) or a movable cursor ([`NdAccess`]). [`IntervalView`]
//! restricts a source to a sub-interval without copying, which is how the
//! tile views hand out individual tiles.

use crate::error::{Result, TilingError};
use crate::types::Interval;

/// A bounded n-dimensional source of values, sampled by absolute position.
pub trait NdSource {
    /// Element type.
    type Elem: Clone;

    /// The interval this source is defined on.
    fn interval(&self) -> &Interval;

    /// Sample the value at `position`.
    ///
    /// # Errors
    ///
    /// Returns [`TilingError::OutOfRange`] if `position` lies outside the
    /// source's interval.
    fn at(&self, position: &[i64]) -> Result<Self::Elem>;

    /// Number of dimensions.
    fn num_dimensions(&self) -> usize {
        self.interval().num_dimensions()
    }

    /// Extent in dimension `d`.
    fn dimension(&self, d: usize) -> usize {
        self.interval().dimension(d)
    }
}

/// A stateful cursor over an n-dimensional domain.
///
/// Accesses are mutable, single-owner state; independent traversals each
/// hold their own access. Movement never fails: an access may be
/// positioned anywhere, and what [`get`](Self::get) does outside the
/// underlying domain is up to the implementation (raw accesses treat it
/// as a contract violation; the boundary-extension layer synthesizes a
/// value).
pub trait NdAccess {
    /// Element type.
    type Elem;

    /// Number of dimensions.
    fn num_dimensions(&self) -> usize;

    /// The current position.
    fn position(&self) -> &[i64];

    /// Place the access at `position`.
    fn set_position(&mut self, position: &[i64]);

    /// Move one step forward in dimension `d`.
    fn fwd(&mut self, d: usize);

    /// Move one step backward in dimension `d`.
    fn bck(&mut self, d: usize);

    /// Move `steps` (possibly negative) in dimension `d`.
    fn move_by(&mut self, steps: i64, d: usize);

    /// The value at the current position.
    fn get(&self) -> Self::Elem;
}

/// A read-only view of a source restricted to a sub-interval.
///
/// Keeps the source's absolute coordinates; owns no data. The view is
/// itself an [`NdSource`], so views nest.
///
/// # Examples
///
/// ```
/// use tessera_core::{DenseGrid, IntervalView, NdSource};
///
/// let grid = DenseGrid::from_shape_fn(&[4, 4], |pos| (pos[0] + 10 * pos[1]) as f64)?;
/// let view = IntervalView::new(&grid, &[1, 1], &[2, 2])?;
///
/// assert_eq!(view.dimension(0), 2);
/// assert_eq!(view.at(&[2, 1])?, 12.0);
/// assert!(view.at(&[0, 0]).is_err()); // inside the grid, outside the view
/// # Ok::<(), tessera_core::TilingError>(())
/// ```
#[derive(Debug)]
pub struct IntervalView<'a, S: NdSource> {
    source: &'a S,
    interval: Interval,
}

impl<'a, S: NdSource> IntervalView<'a, S> {
    /// Restrict `source` to `[min, max]` (inclusive).
    ///
    /// # Errors
    ///
    /// Returns [`TilingError::DimensionMismatch`] on rank disagreement and
    /// [`TilingError::OutOfRange`] if the requested interval is not fully
    /// contained in the source's interval.
    pub fn new(source: &'a S, min: &[i64], max: &[i64]) -> Result<Self> {
        let interval = Interval::new(min, max)?;
        let outer = source.interval();
        if interval.num_dimensions() != outer.num_dimensions() {
            return Err(TilingError::DimensionMismatch {
                expected: outer.num_dimensions(),
                got: interval.num_dimensions(),
            });
        }
        if !outer.contains(interval.min_slice()) || !outer.contains(interval.max_slice()) {
            return Err(TilingError::OutOfRange {
                what: "view interval outside source",
                index: interval.max_slice().to_vec(),
                bound: outer.max_slice().to_vec(),
            });
        }
        Ok(Self { source, interval })
    }

    /// The underlying source.
    pub fn source(&self) -> &'a S {
        self.source
    }
}

impl<'a, S: NdSource> Clone for IntervalView<'a, S> {
    fn clone(&self) -> Self {
        Self {
            source: self.source,
            interval: self.interval.clone(),
        }
    }
}

impl<'a, S: NdSource> NdSource for IntervalView<'a, S> {
    type Elem = S::Elem;

    fn interval(&self) -> &Interval {
        &self.interval
    }

    fn at(&self, position: &[i64]) -> Result<Self::Elem> {
        if !self.interval.contains(position) {
            return Err(TilingError::OutOfRange {
                what: "position outside view interval",
                index: position.to_vec(),
                bound: self.interval.max_slice().to_vec(),
            });
        }
        self.source.at(position)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dense::DenseGrid;

    #[test]
    fn test_view_restricts_sampling() {
        let grid = DenseGrid::from_shape_fn(&[4, 4], |pos| (pos[0] + 10 * pos[1]) as f64).unwrap();
        let view = IntervalView::new(&grid, &[1, 0], &[3, 2]).unwrap();

        assert_eq!(view.interval().min_slice(), &[1, 0]);
        assert_eq!(view.at(&[3, 2]).unwrap(), 23.0);
        assert!(view.at(&[0, 0]).is_err());
        assert!(view.at(&[1, 3]).is_err());
    }

    #[test]
    fn test_view_must_be_contained() {
        let grid = DenseGrid::from_elem(&[4, 4], 0.0).unwrap();
        assert!(matches!(
            IntervalView::new(&grid, &[0, 0], &[4, 3]),
            Err(TilingError::OutOfRange { .. })
        ));
        assert!(matches!(
            IntervalView::new(&grid, &[0], &[3]),
            Err(TilingError::DimensionMismatch { .. })
        ));
    }

    #[test]
    fn test_views_nest() {
        let grid = DenseGrid::from_shape_fn(&[8], |pos| pos[0] as f64).unwrap();
        let outer = IntervalView::new(&grid, &[2], &[6]).unwrap();
        let inner = IntervalView::new(&outer, &[3], &[5]).unwrap();
        assert_eq!(inner.at(&[4]).unwrap(), 4.0);
        assert!(inner.at(&[2]).is_err());
    }
}
