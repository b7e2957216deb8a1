//! Tiling configuration: declared tiling intent and overlap expansion.
//!
//! A [`TilingConfig`] declares how an interval should be tiled without
//! being bound to one yet: either a fixed tile size (tile counts derived
//! later) or a fixed number of tiles per dimension (tile size derived
//! later), plus a per-dimension overlap margin for neighborhood
//! operations. Binding to a concrete interval happens in
//! [`Tiling::resolve`](crate::Tiling::resolve).
//!
//! # Example
//!
//! ```
//! use tessera_core::{Interval, TilingConfig, TilingType};
//!
//! let config = TilingConfig::new(&[5, 5], TilingType::FixedTileSize, &[1, 1])?;
//!
//! // The declared quantity needs no interval.
//! assert_eq!(&config.tile_size(None)?[..], &[5, 5]);
//!
//! // The complementary quantity needs a governing interval.
//! let interval = Interval::from_shape(&[20, 20])?;
//! assert_eq!(&config.tiles_per_dim(Some(&interval))?[..], &[4, 4]);
//! assert!(config.tiles_per_dim(None).is_err());
//! # Ok::<(), tessera_core::TilingError>(())
//! ```

use crate::error::{Result, TilingError};
use crate::types::{Interval, Shape};

/// How the declared dimension vector of a [`TilingConfig`] is interpreted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum TilingType {
    /// The declared vector is the default size of a single tile; the
    /// number of tiles per dimension is derived from a governing interval
    /// (border tiles may differ in size).
    FixedTileSize,
    /// The declared vector is the number of tiles per dimension; the tile
    /// size is derived from a governing interval.
    FixedTilesPerDimension,
}

/// Declared tiling intent: one dimension vector interpreted per
/// [`TilingType`], plus a per-dimension overlap margin.
///
/// Each tile can be expanded by the overlap to enable neighborhood
/// operations without running into tile-boundary problems; expansion is
/// always clipped to the governing interval.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TilingConfig {
    dimensions: Shape,
    tiling_type: TilingType,
    overlap: Shape,
}

impl TilingConfig {
    /// Create a configuration.
    ///
    /// # Errors
    ///
    /// Returns [`TilingError::DimensionMismatch`] if `dimensions` and
    /// `overlap` differ in rank, and [`TilingError::OutOfRange`] if any
    /// declared entry is zero.
    pub fn new(dimensions: &[usize], tiling_type: TilingType, overlap: &[usize]) -> Result<Self> {
        if dimensions.len() != overlap.len() {
            return Err(TilingError::DimensionMismatch {
                expected: dimensions.len(),
                got: overlap.len(),
            });
        }
        if dimensions.contains(&0) {
            return Err(TilingError::OutOfRange {
                what: "declared tiling dimensions must be positive",
                index: dimensions.iter().map(|&v| v as i64).collect(),
                bound: vec![1; dimensions.len()],
            });
        }
        Ok(Self {
            dimensions: Shape::from_slice(dimensions),
            tiling_type,
            overlap: Shape::from_slice(overlap),
        })
    }

    /// Create a configuration with zero overlap.
    pub fn without_overlap(dimensions: &[usize], tiling_type: TilingType) -> Result<Self> {
        let overlap = vec![0; dimensions.len()];
        Self::new(dimensions, tiling_type, &overlap)
    }

    /// The declared dimension vector, interpreted per
    /// [`tiling_type`](Self::tiling_type).
    pub fn dimensions(&self) -> &[usize] {
        &self.dimensions
    }

    /// The declared tiling type.
    pub fn tiling_type(&self) -> TilingType {
        self.tiling_type
    }

    /// The per-dimension overlap margin.
    pub fn overlap(&self) -> &[usize] {
        &self.overlap
    }

    /// The default tile size.
    ///
    /// For a [`TilingType::FixedTileSize`] configuration the interval may
    /// be `None`; otherwise the size is derived from the governing
    /// interval by truncating division (clamped to at least 1), with the
    /// remainder handled by the border policy of the bound tiling
    /// strategy.
    ///
    /// # Errors
    ///
    /// Returns [`TilingError::UnresolvedQuery`] when the derived quantity
    /// is requested without an interval, and
    /// [`TilingError::DimensionMismatch`] if the interval's rank differs.
    pub fn tile_size(&self, interval: Option<&Interval>) -> Result<Shape> {
        match self.tiling_type {
            TilingType::FixedTileSize => Ok(self.dimensions.clone()),
            TilingType::FixedTilesPerDimension => self.derive("tile size", interval),
        }
    }

    /// The number of tiles per dimension.
    ///
    /// For a [`TilingType::FixedTilesPerDimension`] configuration the
    /// interval may be `None`; otherwise the count is derived from the
    /// governing interval by truncating division (clamped to at least 1).
    ///
    /// # Errors
    ///
    /// Returns [`TilingError::UnresolvedQuery`] when the derived quantity
    /// is requested without an interval, and
    /// [`TilingError::DimensionMismatch`] if the interval's rank differs.
    pub fn tiles_per_dim(&self, interval: Option<&Interval>) -> Result<Shape> {
        match self.tiling_type {
            TilingType::FixedTilesPerDimension => Ok(self.dimensions.clone()),
            TilingType::FixedTileSize => self.derive("tiles per dimension", interval),
        }
    }

    /// Expand a tile's bounds by the overlap in dimension `d`.
    ///
    /// The lower bound moves unless the tile is first in `d`; the upper
    /// bound moves unless it is last. Both bounds are then clipped to the
    /// governing interval so an expanded border tile never reaches outside
    /// the original domain.
    ///
    /// # Errors
    ///
    /// Returns [`TilingError::DimensionMismatch`] on rank disagreement and
    /// [`TilingError::OutOfRange`] if `d` is not a valid dimension.
    pub fn expand_by_overlap(
        &self,
        tile_coord: &[usize],
        tile_min: &mut [i64],
        tile_max: &mut [i64],
        d: usize,
        interval: &Interval,
    ) -> Result<()> {
        let tiles_per_dim = self.check_overlap_args(tile_coord, tile_min, tile_max, d, interval)?;
        let overlap = self.overlap[d] as i64;
        if tile_coord[d] > 0 {
            tile_min[d] -= overlap;
        }
        if tile_coord[d] + 1 < tiles_per_dim[d] {
            tile_max[d] += overlap;
        }
        tile_min[d] = tile_min[d].max(interval.min(d));
        tile_max[d] = tile_max[d].min(interval.max(d));
        Ok(())
    }

    /// Recover a tile's inner bounds from overlap-expanded bounds in
    /// dimension `d`; the inverse of
    /// [`expand_by_overlap`](Self::expand_by_overlap) for bounds whose
    /// expansion was not clipped.
    pub fn shrink_by_overlap(
        &self,
        tile_coord: &[usize],
        tile_min: &mut [i64],
        tile_max: &mut [i64],
        d: usize,
        interval: &Interval,
    ) -> Result<()> {
        let tiles_per_dim = self.check_overlap_args(tile_coord, tile_min, tile_max, d, interval)?;
        let overlap = self.overlap[d] as i64;
        if tile_coord[d] > 0 {
            tile_min[d] += overlap;
        }
        if tile_coord[d] + 1 < tiles_per_dim[d] {
            tile_max[d] -= overlap;
        }
        Ok(())
    }

    fn check_overlap_args(
        &self,
        tile_coord: &[usize],
        tile_min: &[i64],
        tile_max: &[i64],
        d: usize,
        interval: &Interval,
    ) -> Result<Shape> {
        let n = self.dimensions.len();
        for len in [tile_coord.len(), tile_min.len(), tile_max.len()] {
            if len != n {
                return Err(TilingError::DimensionMismatch { expected: n, got: len });
            }
        }
        if d >= n {
            return Err(TilingError::OutOfRange {
                what: "dimension index",
                index: vec![d as i64],
                bound: vec![n as i64],
            });
        }
        self.tiles_per_dim(Some(interval))
    }

    fn derive(&self, query: &'static str, interval: Option<&Interval>) -> Result<Shape> {
        let interval = interval.ok_or(TilingError::UnresolvedQuery {
            query,
            tiling_type: self.tiling_type,
        })?;
        if interval.num_dimensions() != self.dimensions.len() {
            return Err(TilingError::DimensionMismatch {
                expected: self.dimensions.len(),
                got: interval.num_dimensions(),
            });
        }
        Ok(self
            .dimensions
            .iter()
            .enumerate()
            .map(|(d, &declared)| (interval.dimension(d) / declared).max(1))
            .collect())
    }
}
