//! Resolved tilings: a [`TilingConfig`] bound to a concrete interval.
//!
//! [`Tiling::resolve`] is the explicit second phase of configuration: it
//! derives the realized tile size, tile counts, and total tile count from
//! the governing interval and binds a [`TilingStrategy`] that adjusts tile
//! bounds for borders and overlap.
//!
//! # Example
//!
//! ```
//! use tessera_core::{Interval, Tiling, TilingConfig, TilingType};
//!
//! let config = TilingConfig::without_overlap(&[5, 5, 2], TilingType::FixedTileSize)?;
//! let interval = Interval::from_shape(&[20, 20, 10])?;
//! let tiling = Tiling::resolve(config, &interval)?;
//!
//! assert_eq!(&tiling.tiles_per_dim()[..], &[4, 4, 5]);
//! assert_eq!(tiling.num_tiles(), 80);
//! # Ok::<(), tessera_core::TilingError>(())
//! ```

use tracing::debug;

use crate::config::TilingConfig;
use crate::error::{Result, TilingError};
use crate::mapper::TileIndexMapper;
use crate::source::NdSource;
use crate::types::{Interval, Shape};
use crate::view::TilingView;

/// Bound geometry adjustment applied to every tile a view hands out.
///
/// A closed set of variants dispatched through [`adjust`](Self::adjust);
/// new strategies are added by extending the enum.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum TilingStrategy {
    /// Tiles keep their nominal bounds. Overlap is ignored and the
    /// remainder of an interval not divisible by the tile size stays
    /// uncovered.
    Exact,
    /// The last tile per dimension absorbs the division remainder, and
    /// every tile is expanded by the configured overlap with clipping to
    /// the governing interval.
    #[default]
    ExpandBorder,
}

impl TilingStrategy {
    /// Adjust a tile's nominal bounds in dimension `d`.
    pub fn adjust(
        &self,
        config: &TilingConfig,
        interval: &Interval,
        tile_coord: &[usize],
        tile_min: &mut [i64],
        tile_max: &mut [i64],
        d: usize,
    ) -> Result<()> {
        match self {
            TilingStrategy::Exact => Ok(()),
            TilingStrategy::ExpandBorder => {
                let tiles_per_dim = config.tiles_per_dim(Some(interval))?;
                if tile_coord[d] + 1 == tiles_per_dim[d] {
                    tile_max[d] = interval.max(d);
                }
                config.expand_by_overlap(tile_coord, tile_min, tile_max, d, interval)
            }
        }
    }
}

/// A [`TilingConfig`] resolved against a concrete interval.
///
/// Holds the realized geometry (tile size, tiles per dimension, total
/// count) and the bound strategy. Immutable after resolution and cheap to
/// clone; the source array is never referenced here, only by the views.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Tiling {
    interval: Interval,
    config: TilingConfig,
    tiles_per_dim: Shape,
    tile_size: Shape,
    num_tiles: usize,
    strategy: TilingStrategy,
}

impl Tiling {
    /// Resolve `config` against `interval` with the default strategy
    /// ([`TilingStrategy::ExpandBorder`]).
    pub fn resolve(config: TilingConfig, interval: &Interval) -> Result<Self> {
        Self::resolve_with(config, interval, TilingStrategy::default())
    }

    /// Resolve `config` against `interval` with an explicit strategy.
    ///
    /// # Errors
    ///
    /// Returns [`TilingError::DimensionMismatch`] if the config and the
    /// interval disagree on rank.
    pub fn resolve_with(
        config: TilingConfig,
        interval: &Interval,
        strategy: TilingStrategy,
    ) -> Result<Self> {
        if config.dimensions().len() != interval.num_dimensions() {
            return Err(TilingError::DimensionMismatch {
                expected: config.dimensions().len(),
                got: interval.num_dimensions(),
            });
        }
        let tiles_per_dim = config.tiles_per_dim(Some(interval))?;
        let tile_size = config.tile_size(Some(interval))?;
        let num_tiles = tiles_per_dim.iter().product();
        debug!(
            ?tiles_per_dim,
            ?tile_size,
            num_tiles,
            ?strategy,
            "resolved tiling"
        );
        Ok(Self {
            interval: interval.clone(),
            config,
            tiles_per_dim,
            tile_size,
            num_tiles,
            strategy,
        })
    }

    /// Number of dimensions.
    pub fn num_dimensions(&self) -> usize {
        self.interval.num_dimensions()
    }

    /// The governing interval.
    pub fn interval(&self) -> &Interval {
        &self.interval
    }

    /// The configuration this tiling was resolved from.
    pub fn config(&self) -> &TilingConfig {
        &self.config
    }

    /// Realized number of tiles per dimension.
    pub fn tiles_per_dim(&self) -> &[usize] {
        &self.tiles_per_dim
    }

    /// Total number of tiles.
    pub fn num_tiles(&self) -> usize {
        self.num_tiles
    }

    /// Realized default tile size (border tiles may differ under
    /// [`TilingStrategy::ExpandBorder`]).
    pub fn default_tile_size(&self) -> &[usize] {
        &self.tile_size
    }

    /// The per-dimension overlap margin.
    pub fn overlap(&self) -> &[usize] {
        self.config.overlap()
    }

    /// The bound strategy.
    pub fn strategy(&self) -> TilingStrategy {
        self.strategy
    }

    /// A [`TileIndexMapper`] over the resolved geometry with the default
    /// mapping order.
    pub fn index_mapper(&self) -> Result<TileIndexMapper> {
        self.index_mapper_with_order(TileIndexMapper::default_mapping_order(self.num_dimensions()))
    }

    /// A [`TileIndexMapper`] over the resolved geometry with an explicit
    /// mapping order.
    pub fn index_mapper_with_order(&self, mapping_order: Vec<usize>) -> Result<TileIndexMapper> {
        TileIndexMapper::new(
            self.interval.clone(),
            &self.tile_size,
            &self.tiles_per_dim,
            mapping_order,
        )
    }

    /// A [`TilingView`] exposing `source` as a virtual collection of tile
    /// sub-views.
    ///
    /// # Errors
    ///
    /// Returns [`TilingError::DimensionMismatch`] or
    /// [`TilingError::OutOfRange`] if the source's interval does not equal
    /// the tiling interval.
    pub fn view<'a, S: NdSource>(&self, source: &'a S) -> Result<TilingView<'a, S>> {
        TilingView::new(source, self.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::TilingType;

    #[test]
    fn test_resolve_fixed_tile_size() {
        let config = TilingConfig::without_overlap(&[5, 5, 2], TilingType::FixedTileSize).unwrap();
        let interval = Interval::from_shape(&[20, 20, 10]).unwrap();
        let tiling = Tiling::resolve(config, &interval).unwrap();

        assert_eq!(&tiling.tiles_per_dim()[..], &[4, 4, 5]);
        assert_eq!(&tiling.default_tile_size()[..], &[5, 5, 2]);
        assert_eq!(tiling.num_tiles(), 80);
        assert_eq!(tiling.strategy(), TilingStrategy::ExpandBorder);
    }

    #[test]
    fn test_resolve_fixed_tiles_per_dim() {
        let config =
            TilingConfig::without_overlap(&[4, 4], TilingType::FixedTilesPerDimension).unwrap();
        let interval = Interval::from_shape(&[100, 100]).unwrap();
        let tiling = Tiling::resolve(config, &interval).unwrap();

        assert_eq!(&tiling.default_tile_size()[..], &[25, 25]);
        assert_eq!(tiling.num_tiles(), 16);
    }

    #[test]
    fn test_resolve_uneven_division() {
        let config =
            TilingConfig::without_overlap(&[4, 4], TilingType::FixedTilesPerDimension).unwrap();
        let interval = Interval::from_shape(&[100, 102]).unwrap();
        let tiling = Tiling::resolve(config, &interval).unwrap();

        // 102 / 4 truncates; the strategy's border handling covers the rest.
        assert_eq!(&tiling.default_tile_size()[..], &[25, 25]);
        assert_eq!(tiling.num_tiles(), 16);
    }

    #[test]
    fn test_resolve_rank_mismatch() {
        let config = TilingConfig::without_overlap(&[5, 5], TilingType::FixedTileSize).unwrap();
        let interval = Interval::from_shape(&[20]).unwrap();
        assert!(matches!(
            Tiling::resolve(config, &interval),
            Err(TilingError::DimensionMismatch { .. })
        ));
    }

    #[test]
    fn test_strategy_adjust_border_and_overlap() {
        let config = TilingConfig::new(&[5], TilingType::FixedTileSize, &[2]).unwrap();
        let interval = Interval::from_shape(&[22]).unwrap();

        // Last tile absorbs the remainder and expands left by the overlap.
        let mut min = [15];
        let mut max = [19];
        TilingStrategy::ExpandBorder
            .adjust(&config, &interval, &[3], &mut min, &mut max, 0)
            .unwrap();
        assert_eq!(min, [13]);
        assert_eq!(max, [21]);

        // Exact leaves the remainder uncovered.
        let mut min = [15];
        let mut max = [19];
        TilingStrategy::Exact
            .adjust(&config, &interval, &[3], &mut min, &mut max, 0)
            .unwrap();
        assert_eq!(min, [15]);
        assert_eq!(max, [19]);
    }

    #[test]
    fn test_index_mapper_round_trip() {
        let config = TilingConfig::without_overlap(&[5, 5, 2], TilingType::FixedTileSize).unwrap();
        let interval = Interval::from_shape(&[20, 20, 10]).unwrap();
        let tiling = Tiling::resolve(config, &interval).unwrap();
        let mapper = tiling.index_mapper().unwrap();

        assert_eq!(mapper.flat_index(&[3, 2, 1]).unwrap(), 27);
        assert_eq!(&mapper.tile_coord(27).unwrap()[..], &[3, 2, 1]);
    }
}
