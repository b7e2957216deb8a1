//! Exponential edge windows (apodization).
//!
//! An [`ExpWindow`] holds one precomputed weight per in-bounds coordinate
//! and dimension. Weights are exactly 0 at both domain ends and rise
//! exponentially toward 1, so values sampled through a mirrored boundary
//! extension fade out smoothly instead of cutting off — the periodic
//! artifacts of tiled processing taper away at every copy boundary.

use std::sync::Arc;

use num_traits::Float;
use tessera_core::{Interval, Result, TilingError};

/// Per-dimension fade weight tables for a bounded domain.
///
/// For a dimension of length `len` and fade fraction `fade`, the weight at
/// offset `pos` is `1 - a^(-2x)` with steepness `a = 1000`, where `x` is
/// the relative distance `pos / (len - 1)` folded symmetrically about the
/// midpoint and scaled so the ramp completes within `fade` of each edge
/// (capped at the midpoint). A fade fraction of `0.5` spreads the ramp
/// over the full half-dimension.
///
/// Tables are immutable and shared by reference; cloning a window is an
/// `Arc` bump.
///
/// # Examples
///
/// ```
/// use tessera_core::Interval;
/// use tessera_oob::ExpWindow;
///
/// let interval = Interval::from_shape(&[11])?;
/// let window: ExpWindow<f64> = ExpWindow::new(&interval, &[0.5])?;
///
/// assert_eq!(window.weight(0, 0), 0.0);
/// assert!(window.weight(0, 5) > 0.99);
/// assert_eq!(window.weight(0, 10), 0.0);
/// # Ok::<(), tessera_core::TilingError>(())
/// ```
#[derive(Debug, Clone)]
pub struct ExpWindow<T> {
    tables: Arc<Vec<Vec<T>>>,
}

impl<T: Float> ExpWindow<T> {
    /// Base of the exponential falloff.
    pub const STEEPNESS: f64 = 1000.0;

    /// Precompute weight tables for every dimension of `interval`.
    ///
    /// # Errors
    ///
    /// Returns [`TilingError::DimensionMismatch`] if `fade` does not match
    /// the interval's rank and [`TilingError::OutOfRange`] if any fade
    /// fraction lies outside `(0, 1]`.
    ///
    /// # Panics
    ///
    /// Panics if the sample type cannot represent an `f64` weight (never
    /// the case for the standard float types).
    pub fn new(interval: &Interval, fade: &[f64]) -> Result<Self> {
        let n = interval.num_dimensions();
        if fade.len() != n {
            return Err(TilingError::DimensionMismatch {
                expected: n,
                got: fade.len(),
            });
        }
        if let Some(d) = fade.iter().position(|&f| !(f > 0.0 && f <= 1.0)) {
            return Err(TilingError::OutOfRange {
                what: "fade fraction must lie in (0, 1] in dimension",
                index: vec![d as i64],
                bound: vec![1],
            });
        }
        let tables = (0..n)
            .map(|d| {
                let len = interval.dimension(d);
                (0..len)
                    .map(|pos| {
                        T::from(weight_at(pos, len, fade[d]))
                            .expect("sample type must represent f64 weights")
                    })
                    .collect()
            })
            .collect();
        Ok(Self {
            tables: Arc::new(tables),
        })
    }

    /// Number of dimensions.
    pub fn num_dimensions(&self) -> usize {
        self.tables.len()
    }

    /// Table length in dimension `d`.
    pub fn len(&self, d: usize) -> usize {
        self.tables[d].len()
    }

    /// The weight at in-bounds offset `pos` in dimension `d`.
    pub fn weight(&self, d: usize, pos: usize) -> T {
        self.tables[d][pos]
    }
}

fn weight_at(pos: usize, len: usize, fade: f64) -> f64 {
    if len == 1 {
        return 1.0;
    }
    let rel = pos as f64 / (len - 1) as f64;
    let folded = rel.min(1.0 - rel);
    let x = (folded * 0.5 / fade).min(0.5);
    1.0 - ExpWindow::<f64>::STEEPNESS.powf(-2.0 * x)
}
