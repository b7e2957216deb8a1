//! Lazy tile views: virtual collections of sub-interval views.
//!
//! A tile view owns no array data. It borrows a source and hands out one
//! [`IntervalView`] per tile coordinate, either by random access or by
//! flat iteration. Two flavors exist:
//!
//! - [`TilesView`]: nominal equal-size tiles over a zero-min source, no
//!   geometry adjustment.
//! - [`TilingView`]: tiles of a resolved [`Tiling`], with the bound
//!   strategy applied to every tile (border enlargement, overlap
//!   expansion, clipping), over any interval.
//!
//! Views are immutable and freely shareable; every traversal holds its own
//! cursor or random access, and `copy` produces an independent one at the
//! same position.
//!
//! # Example
//!
//! ```
//! use tessera_core::{DenseGrid, NdSource, TilesView};
//!
//! let grid = DenseGrid::from_shape_fn(&[4, 4], |pos| (pos[0] + 4 * pos[1]) as f64)?;
//! let tiles = TilesView::new(&grid, &[2, 2])?;
//!
//! assert_eq!(tiles.size(), 4);
//! let tile = tiles.get(&[1, 0])?;
//! assert_eq!(tile.interval().min_slice(), &[2, 0]);
//! assert_eq!(tile.interval().max_slice(), &[3, 1]);
//! # Ok::<(), tessera_core::TilingError>(())
//! ```

use crate::error::{Result, TilingError};
use crate::mapper::TileIndexMapper;
use crate::source::{IntervalView, NdSource};
use crate::tiling::Tiling;
use crate::types::{Pos, Shape};

/// A virtual collection of nominal equal-size tiles over a zero-min
/// source.
///
/// The realized tile size is `source.dimension(d) / tiles_per_dim[d]`
/// (truncating); the remainder of a non-divisible source is not covered.
/// Use a [`TilingView`] when border or overlap handling is needed.
#[derive(Debug)]
pub struct TilesView<'a, S: NdSource> {
    source: &'a S,
    tiles_per_dim: Shape,
    tile_size: Shape,
    size: usize,
}

impl<'a, S: NdSource> TilesView<'a, S> {
    /// Create a view splitting `source` into `tiles_per_dim` tiles per
    /// dimension.
    ///
    /// The source must be zero-min.
    ///
    /// # Errors
    ///
    /// Returns [`TilingError::DimensionMismatch`] on rank disagreement and
    /// [`TilingError::OutOfRange`] if any tile count is zero or exceeds
    /// the source extent.
    pub fn new(source: &'a S, tiles_per_dim: &[usize]) -> Result<Self> {
        let interval = source.interval();
        assert!(
            interval.is_zero_min(),
            "TilesView requires a zero-min source"
        );
        let n = interval.num_dimensions();
        if tiles_per_dim.len() != n {
            return Err(TilingError::DimensionMismatch {
                expected: n,
                got: tiles_per_dim.len(),
            });
        }
        let mut tile_size = Shape::with_capacity(n);
        let mut size = 1;
        for (d, &num) in tiles_per_dim.iter().enumerate() {
            if num == 0 || num > interval.dimension(d) {
                return Err(TilingError::OutOfRange {
                    what: "tiles per dimension",
                    index: tiles_per_dim.iter().map(|&v| v as i64).collect(),
                    bound: (0..n).map(|d| interval.dimension(d) as i64).collect(),
                });
            }
            tile_size.push(interval.dimension(d) / num);
            size *= num;
        }
        Ok(Self {
            source,
            tiles_per_dim: Shape::from_slice(tiles_per_dim),
            tile_size,
            size,
        })
    }

    /// The underlying source.
    pub fn source(&self) -> &'a S {
        self.source
    }

    /// Total number of tiles.
    pub fn size(&self) -> usize {
        self.size
    }

    /// Number of tiles per dimension.
    pub fn tiles_per_dim(&self) -> &[usize] {
        &self.tiles_per_dim
    }

    /// Realized tile size per dimension.
    pub fn tile_size(&self) -> &[usize] {
        &self.tile_size
    }

    /// The tile at `tile_coord`.
    ///
    /// A pure computation, independent of any traversal state.
    ///
    /// # Errors
    ///
    /// Returns [`TilingError::OutOfRange`] for a coordinate outside the
    /// tile grid and [`TilingError::DimensionMismatch`] on rank
    /// disagreement.
    pub fn get(&self, tile_coord: &[usize]) -> Result<IntervalView<'a, S>> {
        self.check_coord(tile_coord)?;
        let n = self.tiles_per_dim.len();
        let mut min = Pos::with_capacity(n);
        let mut max = Pos::with_capacity(n);
        for d in 0..n {
            let lo = (tile_coord[d] * self.tile_size[d]) as i64;
            min.push(lo);
            max.push(lo + self.tile_size[d] as i64 - 1);
        }
        IntervalView::new(self.source, &min, &max)
    }

    /// A fresh random access positioned at tile `(0, …, 0)`.
    pub fn random_access(&self) -> TilesRandomAccess<'_, 'a, S> {
        TilesRandomAccess {
            view: self,
            position: Shape::from_elem(0, self.tiles_per_dim.len()),
        }
    }

    /// A fresh cursor over all tiles in flat order (dimension 0 fastest).
    pub fn cursor(&self) -> TilesCursor<'_, 'a, S> {
        TilesCursor {
            view: self,
            coord: Shape::from_elem(0, self.tiles_per_dim.len()),
            flat: 0,
        }
    }

    fn check_coord(&self, tile_coord: &[usize]) -> Result<()> {
        if tile_coord.len() != self.tiles_per_dim.len() {
            return Err(TilingError::DimensionMismatch {
                expected: self.tiles_per_dim.len(),
                got: tile_coord.len(),
            });
        }
        if tile_coord
            .iter()
            .zip(self.tiles_per_dim.iter())
            .any(|(&c, &num)| c >= num)
        {
            return Err(TilingError::OutOfRange {
                what: "tile coordinate",
                index: tile_coord.iter().map(|&c| c as i64).collect(),
                bound: self.tiles_per_dim.iter().map(|&c| c as i64).collect(),
            });
        }
        Ok(())
    }
}

impl<'v, 'a, S: NdSource> IntoIterator for &'v TilesView<'a, S> {
    type Item = IntervalView<'a, S>;
    type IntoIter = TilesCursor<'v, 'a, S>;

    fn into_iter(self) -> Self::IntoIter {
        self.cursor()
    }
}

/// A random access over the tile grid of a [`TilesView`].
///
/// Holds its own position; the view and its geometry are shared immutably.
#[derive(Debug)]
pub struct TilesRandomAccess<'v, 'a, S: NdSource> {
    view: &'v TilesView<'a, S>,
    position: Shape,
}

impl<'v, 'a, S: NdSource> TilesRandomAccess<'v, 'a, S> {
    /// The current tile coordinate.
    pub fn position(&self) -> &[usize] {
        &self.position
    }

    /// Place the access at `tile_coord`.
    pub fn set_position(&mut self, tile_coord: &[usize]) {
        debug_assert_eq!(tile_coord.len(), self.position.len());
        self.position.copy_from_slice(tile_coord);
    }

    /// Move one tile forward in dimension `d`.
    pub fn fwd(&mut self, d: usize) {
        self.position[d] += 1;
    }

    /// Move one tile backward in dimension `d`.
    pub fn bck(&mut self, d: usize) {
        self.position[d] -= 1;
    }

    /// The tile at the current position.
    pub fn get(&self) -> Result<IntervalView<'a, S>> {
        self.view.get(&self.position)
    }

    /// An independent access at the same position.
    pub fn copy(&self) -> Self {
        self.clone()
    }
}

impl<'v, 'a, S: NdSource> Clone for TilesRandomAccess<'v, 'a, S> {
    fn clone(&self) -> Self {
        Self {
            view: self.view,
            position: self.position.clone(),
        }
    }
}

/// A cursor enumerating the tiles of a [`TilesView`] in flat order
/// (dimension 0 fastest).
#[derive(Debug)]
pub struct TilesCursor<'v, 'a, S: NdSource> {
    view: &'v TilesView<'a, S>,
    coord: Shape,
    flat: usize,
}

impl<'v, 'a, S: NdSource> TilesCursor<'v, 'a, S> {
    /// The coordinate of the tile the next call to `next` will yield.
    pub fn position(&self) -> &[usize] {
        &self.coord
    }

    /// Restart the iteration from the first tile.
    pub fn reset(&mut self) {
        self.coord.iter_mut().for_each(|c| *c = 0);
        self.flat = 0;
    }

    /// An independent cursor at the same point of the iteration.
    pub fn copy(&self) -> Self {
        self.clone()
    }
}

impl<'v, 'a, S: NdSource> Clone for TilesCursor<'v, 'a, S> {
    fn clone(&self) -> Self {
        Self {
            view: self.view,
            coord: self.coord.clone(),
            flat: self.flat,
        }
    }
}

impl<'v, 'a, S: NdSource> Iterator for TilesCursor<'v, 'a, S> {
    type Item = IntervalView<'a, S>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.flat >= self.view.size() {
            return None;
        }
        let tile = self
            .view
            .get(&self.coord)
            .expect("cursor coordinate stays inside the tile grid");
        self.flat += 1;
        advance(&mut self.coord, self.view.tiles_per_dim());
        Some(tile)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.view.size() - self.flat;
        (remaining, Some(remaining))
    }
}

impl<'v, 'a, S: NdSource> ExactSizeIterator for TilesCursor<'v, 'a, S> {
    fn len(&self) -> usize {
        self.view.size() - self.flat
    }
}

/// A virtual collection of the tiles of a resolved [`Tiling`].
///
/// Every tile's nominal bounds are post-processed by the tiling's
/// strategy before the sub-view is handed out.
#[derive(Debug)]
pub struct TilingView<'a, S: NdSource> {
    source: &'a S,
    tiling: Tiling,
}

impl<'a, S: NdSource> TilingView<'a, S> {
    /// Create a view of `source` through `tiling`.
    ///
    /// # Errors
    ///
    /// Returns [`TilingError::DimensionMismatch`] on rank disagreement and
    /// [`TilingError::OutOfRange`] if the source's interval does not equal
    /// the tiling interval.
    pub fn new(source: &'a S, tiling: Tiling) -> Result<Self> {
        let outer = source.interval();
        if outer.num_dimensions() != tiling.num_dimensions() {
            return Err(TilingError::DimensionMismatch {
                expected: tiling.num_dimensions(),
                got: outer.num_dimensions(),
            });
        }
        if outer != tiling.interval() {
            return Err(TilingError::OutOfRange {
                what: "source interval must equal the tiling interval",
                index: outer.max_slice().to_vec(),
                bound: tiling.interval().max_slice().to_vec(),
            });
        }
        Ok(Self { source, tiling })
    }

    /// The underlying source.
    pub fn source(&self) -> &'a S {
        self.source
    }

    /// The resolved tiling.
    pub fn tiling(&self) -> &Tiling {
        &self.tiling
    }

    /// Total number of tiles.
    pub fn size(&self) -> usize {
        self.tiling.num_tiles()
    }

    /// Number of tiles per dimension.
    pub fn tiles_per_dim(&self) -> &[usize] {
        self.tiling.tiles_per_dim()
    }

    /// Nominal tile size per dimension.
    pub fn tile_size(&self) -> &[usize] {
        self.tiling.default_tile_size()
    }

    /// The tile at `tile_coord`, with the tiling strategy applied.
    ///
    /// A pure computation, independent of any traversal state.
    ///
    /// # Errors
    ///
    /// Returns [`TilingError::OutOfRange`] for a coordinate outside the
    /// tile grid and [`TilingError::DimensionMismatch`] on rank
    /// disagreement.
    pub fn get(&self, tile_coord: &[usize]) -> Result<IntervalView<'a, S>> {
        let tiles_per_dim = self.tiling.tiles_per_dim();
        let tile_size = self.tiling.default_tile_size();
        let interval = self.tiling.interval();
        let n = tiles_per_dim.len();

        if tile_coord.len() != n {
            return Err(TilingError::DimensionMismatch {
                expected: n,
                got: tile_coord.len(),
            });
        }
        if tile_coord
            .iter()
            .zip(tiles_per_dim.iter())
            .any(|(&c, &num)| c >= num)
        {
            return Err(TilingError::OutOfRange {
                what: "tile coordinate",
                index: tile_coord.iter().map(|&c| c as i64).collect(),
                bound: tiles_per_dim.iter().map(|&c| c as i64).collect(),
            });
        }

        let mut min = Pos::with_capacity(n);
        let mut max = Pos::with_capacity(n);
        for d in 0..n {
            let lo = interval.min(d) + (tile_coord[d] * tile_size[d]) as i64;
            min.push(lo);
            max.push(lo + tile_size[d] as i64 - 1);
        }
        for d in 0..n {
            self.tiling.strategy().adjust(
                self.tiling.config(),
                interval,
                tile_coord,
                &mut min,
                &mut max,
                d,
            )?;
        }
        IntervalView::new(self.source, &min, &max)
    }

    /// A fresh random access positioned at tile `(0, …, 0)`.
    pub fn random_access(&self) -> TilingRandomAccess<'_, 'a, S> {
        TilingRandomAccess {
            view: self,
            position: Shape::from_elem(0, self.tiling.num_dimensions()),
        }
    }

    /// A fresh cursor over all tiles in the tiling's default mapping
    /// order (dimension 0 fastest).
    pub fn cursor(&self) -> Result<TilingCursor<'_, 'a, S>> {
        self.cursor_with_order(TileIndexMapper::default_mapping_order(
            self.tiling.num_dimensions(),
        ))
    }

    /// A fresh cursor enumerating tiles in an explicit mapping order.
    pub fn cursor_with_order(&self, mapping_order: Vec<usize>) -> Result<TilingCursor<'_, 'a, S>> {
        let mapper = self.tiling.index_mapper_with_order(mapping_order)?;
        Ok(TilingCursor {
            view: self,
            mapper,
            flat: 0,
        })
    }
}

/// A random access over the tile grid of a [`TilingView`].
#[derive(Debug)]
pub struct TilingRandomAccess<'v, 'a, S: NdSource> {
    view: &'v TilingView<'a, S>,
    position: Shape,
}

impl<'v, 'a, S: NdSource> TilingRandomAccess<'v, 'a, S> {
    /// The current tile coordinate.
    pub fn position(&self) -> &[usize] {
        &self.position
    }

    /// Place the access at `tile_coord`.
    pub fn set_position(&mut self, tile_coord: &[usize]) {
        debug_assert_eq!(tile_coord.len(), self.position.len());
        self.position.copy_from_slice(tile_coord);
    }

    /// Move one tile forward in dimension `d`.
    pub fn fwd(&mut self, d: usize) {
        self.position[d] += 1;
    }

    /// Move one tile backward in dimension `d`.
    pub fn bck(&mut self, d: usize) {
        self.position[d] -= 1;
    }

    /// The tile at the current position, strategy applied.
    pub fn get(&self) -> Result<IntervalView<'a, S>> {
        self.view.get(&self.position)
    }

    /// An independent access at the same position.
    pub fn copy(&self) -> Self {
        self.clone()
    }
}

impl<'v, 'a, S: NdSource> Clone for TilingRandomAccess<'v, 'a, S> {
    fn clone(&self) -> Self {
        Self {
            view: self.view,
            position: self.position.clone(),
        }
    }
}

/// A cursor enumerating the tiles of a [`TilingView`] through its
/// [`TileIndexMapper`].
#[derive(Debug)]
pub struct TilingCursor<'v, 'a, S: NdSource> {
    view: &'v TilingView<'a, S>,
    mapper: TileIndexMapper,
    flat: usize,
}

impl<'v, 'a, S: NdSource> TilingCursor<'v, 'a, S> {
    /// The coordinate of the tile the next call to `next` will yield.
    pub fn position(&self) -> Result<Shape> {
        self.mapper.tile_coord(self.flat)
    }

    /// Restart the iteration from the first tile.
    pub fn reset(&mut self) {
        self.flat = 0;
    }

    /// An independent cursor at the same point of the iteration.
    pub fn copy(&self) -> Self {
        self.clone()
    }
}

impl<'v, 'a, S: NdSource> Clone for TilingCursor<'v, 'a, S> {
    fn clone(&self) -> Self {
        Self {
            view: self.view,
            mapper: self.mapper.clone(),
            flat: self.flat,
        }
    }
}

impl<'v, 'a, S: NdSource> Iterator for TilingCursor<'v, 'a, S> {
    type Item = IntervalView<'a, S>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.flat >= self.view.size() {
            return None;
        }
        let coord = self
            .mapper
            .tile_coord(self.flat)
            .expect("cursor flat index stays below the tile count");
        let tile = self
            .view
            .get(&coord)
            .expect("mapped coordinate stays inside the tile grid");
        self.flat += 1;
        Some(tile)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.view.size() - self.flat;
        (remaining, Some(remaining))
    }
}

impl<'v, 'a, S: NdSource> ExactSizeIterator for TilingCursor<'v, 'a, S> {
    fn len(&self) -> usize {
        self.view.size() - self.flat
    }
}

fn advance(coord: &mut Shape, tiles_per_dim: &[usize]) {
    for d in 0..coord.len() {
        coord[d] += 1;
        if coord[d] < tiles_per_dim[d] {
            return;
        }
        coord[d] = 0;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{TilingConfig, TilingType};
    use crate::dense::DenseGrid;
    use crate::types::Interval;

    fn grid_2d() -> DenseGrid<f64> {
        DenseGrid::from_shape_fn(&[100, 100], |pos| (pos[0] + 100 * pos[1]) as f64).unwrap()
    }

    #[test]
    fn test_tiles_view_bounds() {
        let grid = grid_2d();
        let tiles = TilesView::new(&grid, &[4, 4]).unwrap();
        assert_eq!(tiles.size(), 16);
        assert_eq!(tiles.tile_size(), &[25, 25]);

        let first = tiles.get(&[0, 0]).unwrap();
        assert_eq!(first.interval().min_slice(), &[0, 0]);
        assert_eq!(first.interval().max_slice(), &[24, 24]);

        let middle = tiles.get(&[1, 2]).unwrap();
        assert_eq!(middle.interval().min_slice(), &[25, 50]);
        assert_eq!(middle.interval().max_slice(), &[49, 74]);

        let last = tiles.get(&[3, 3]).unwrap();
        assert_eq!(last.interval().max_slice(), &[99, 99]);
    }

    #[test]
    fn test_tiles_view_errors() {
        let grid = grid_2d();
        let tiles = TilesView::new(&grid, &[4, 4]).unwrap();
        assert!(matches!(
            tiles.get(&[4, 0]),
            Err(TilingError::OutOfRange { .. })
        ));
        assert!(matches!(
            tiles.get(&[0, 0, 0]),
            Err(TilingError::DimensionMismatch { .. })
        ));
        assert!(TilesView::new(&grid, &[4]).is_err());
        assert!(TilesView::new(&grid, &[0, 4]).is_err());
    }

    #[test]
    fn test_tiles_cursor_order() {
        let grid = DenseGrid::from_elem(&[4, 4], 0u8).unwrap();
        let tiles = TilesView::new(&grid, &[2, 2]).unwrap();
        let mins: Vec<Vec<i64>> = tiles
            .cursor()
            .map(|tile| tile.interval().min_slice().to_vec())
            .collect();
        // Dimension 0 varies fastest.
        assert_eq!(
            mins,
            vec![vec![0, 0], vec![2, 0], vec![0, 2], vec![2, 2]]
        );
    }

    #[test]
    fn test_tiles_cursor_reset_and_size_hint() {
        let grid = DenseGrid::from_elem(&[4, 4], 0u8).unwrap();
        let tiles = TilesView::new(&grid, &[2, 2]).unwrap();
        let mut cursor = tiles.cursor();

        assert_eq!(cursor.len(), 4);
        assert_eq!(cursor.size_hint(), (4, Some(4)));
        cursor.next();
        assert_eq!(cursor.len(), 3);

        cursor.reset();
        assert_eq!(cursor.len(), 4);
        assert_eq!(cursor.position(), &[0, 0]);
    }

    #[test]
    fn test_random_access_copy_is_independent() {
        let grid = grid_2d();
        let tiles = TilesView::new(&grid, &[4, 4]).unwrap();
        let mut access = tiles.random_access();
        access.set_position(&[3, 2]);

        let mut copy = access.copy();
        assert_eq!(copy.position(), access.position());
        copy.fwd(1);
        assert_eq!(access.position(), &[3, 2]);
        assert_eq!(copy.position(), &[3, 3]);
        assert_eq!(
            access.get().unwrap().interval().min_slice(),
            &[75, 50]
        );
    }

    #[test]
    fn test_tiling_view_expand_border() {
        let grid = DenseGrid::from_elem(&[22, 22], 0u8).unwrap();
        let config = TilingConfig::without_overlap(&[5, 5], TilingType::FixedTileSize).unwrap();
        let tiling = Tiling::resolve(config, grid.interval()).unwrap();
        let view = tiling.view(&grid).unwrap();

        assert_eq!(view.size(), 16);
        // Interior tiles keep nominal bounds.
        let tile = view.get(&[1, 1]).unwrap();
        assert_eq!(tile.interval().min_slice(), &[5, 5]);
        assert_eq!(tile.interval().max_slice(), &[9, 9]);
        // Border tiles absorb the remainder.
        let tile = view.get(&[3, 3]).unwrap();
        assert_eq!(tile.interval().min_slice(), &[15, 15]);
        assert_eq!(tile.interval().max_slice(), &[21, 21]);
    }

    #[test]
    fn test_tiling_view_overlap() {
        let grid = DenseGrid::from_elem(&[20, 20], 0u8).unwrap();
        let config = TilingConfig::new(&[5, 5], TilingType::FixedTileSize, &[2, 2]).unwrap();
        let tiling = Tiling::resolve(config, grid.interval()).unwrap();
        let view = tiling.view(&grid).unwrap();

        let tile = view.get(&[1, 1]).unwrap();
        assert_eq!(tile.interval().min_slice(), &[3, 3]);
        assert_eq!(tile.interval().max_slice(), &[11, 11]);

        // Corner tiles only expand inward.
        let tile = view.get(&[0, 0]).unwrap();
        assert_eq!(tile.interval().min_slice(), &[0, 0]);
        assert_eq!(tile.interval().max_slice(), &[6, 6]);
        let tile = view.get(&[3, 3]).unwrap();
        assert_eq!(tile.interval().min_slice(), &[13, 13]);
        assert_eq!(tile.interval().max_slice(), &[19, 19]);
    }

    #[test]
    fn test_tiling_view_nonzero_min() {
        let config = TilingConfig::without_overlap(&[5], TilingType::FixedTileSize).unwrap();
        let interval = Interval::new(&[10], &[29]).unwrap();
        let tiling = Tiling::resolve(config, &interval).unwrap();

        // An IntervalView is a valid non-zero-min source for a TilingView.
        let grid = DenseGrid::from_shape_fn(&[40], |pos| pos[0]).unwrap();
        let restricted = IntervalView::new(&grid, &[10], &[29]).unwrap();
        let view = tiling.view(&restricted).unwrap();

        let tile = view.get(&[0]).unwrap();
        assert_eq!(tile.interval().min_slice(), &[10]);
        assert_eq!(tile.interval().max_slice(), &[14]);
        let tile = view.get(&[3]).unwrap();
        assert_eq!(tile.interval().max_slice(), &[29]);
    }

    #[test]
    fn test_tiling_view_interval_must_match() {
        let grid = DenseGrid::from_elem(&[20, 20], 0u8).unwrap();
        let config = TilingConfig::without_overlap(&[5, 5], TilingType::FixedTileSize).unwrap();
        let other = Interval::from_shape(&[25, 25]).unwrap();
        let tiling = Tiling::resolve(config, &other).unwrap();
        assert!(tiling.view(&grid).is_err());
    }

    #[test]
    fn test_tiling_cursor_mapping_order() {
        let grid = DenseGrid::from_elem(&[4, 6], 0u8).unwrap();
        let config =
            TilingConfig::without_overlap(&[2, 3], TilingType::FixedTilesPerDimension).unwrap();
        let tiling = Tiling::resolve(config, grid.interval()).unwrap();
        let view = tiling.view(&grid).unwrap();

        let default_mins: Vec<i64> = view
            .cursor()
            .unwrap()
            .map(|tile| tile.interval().min(0))
            .collect();
        assert_eq!(default_mins, vec![0, 2, 0, 2, 0, 2]);

        // Reversed order makes dimension 1 vary fastest.
        let reversed_mins: Vec<i64> = view
            .cursor_with_order(vec![1, 0])
            .unwrap()
            .map(|tile| tile.interval().min(0))
            .collect();
        assert_eq!(reversed_mins, vec![0, 0, 0, 2, 2, 2]);
    }
}
