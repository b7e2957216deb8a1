//! Tile index algebra: flat indices, tile coordinates, local positions.
//!
//! A [`TileIndexMapper`] converts between multidimensional tile coordinates
//! and flat (linearized) tile indices under a configurable mapping order,
//! and decomposes absolute positions into (tile, local) pairs. Mappers are
//! stateless after construction and can be shared freely between cursors,
//! random accesses, and entire tilings.
//!
//! # Example
//!
//! ```
//! use tessera_core::{Interval, TileIndexMapper};
//!
//! // A 20x20x10 grid split into 5x5x2 tiles.
//! let interval = Interval::from_shape(&[20, 20, 10])?;
//! let mapper = TileIndexMapper::new(
//!     interval,
//!     &[5, 5, 2],
//!     &[4, 4, 5],
//!     TileIndexMapper::default_mapping_order(3),
//! )?;
//!
//! let flat = mapper.flat_index(&[3, 2, 1])?;
//! assert_eq!(flat, 27);
//! assert_eq!(&mapper.tile_coord(27)?[..], &[3, 2, 1]);
//! # Ok::<(), tessera_core::TilingError>(())
//! ```

use crate::error::{Result, TilingError};
use crate::types::{Interval, Pos, Shape};

/// Converts between tile coordinates, flat tile indices, and absolute
/// positions for a regular tile grid over an interval.
///
/// The mapping order is a permutation of the dimensions controlling which
/// dimension is most significant during linearization; the first entry is
/// the least significant (it varies fastest along consecutive flat
/// indices). The default order makes dimension 0 fastest, matching the
/// flat iteration order of the tile cursors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TileIndexMapper {
    n: usize,
    interval: Interval,
    tile_size: Shape,
    tiles_per_dim: Shape,
    mapping_order: Vec<usize>,
    num_tiles: usize,
}

impl TileIndexMapper {
    /// Create a mapper over `interval` for the given tile geometry.
    ///
    /// # Errors
    ///
    /// Returns [`TilingError::DimensionMismatch`] if `tile_size`,
    /// `tiles_per_dim`, or `mapping_order` disagree with the interval's
    /// rank, or if `mapping_order` is not a permutation of the dimensions.
    /// Returns [`TilingError::OutOfRange`] if any tile size or tile count
    /// is zero.
    pub fn new(
        interval: Interval,
        tile_size: &[usize],
        tiles_per_dim: &[usize],
        mapping_order: Vec<usize>,
    ) -> Result<Self> {
        let n = interval.num_dimensions();
        check_rank(n, tile_size.len())?;
        check_rank(n, tiles_per_dim.len())?;
        check_rank(n, mapping_order.len())?;
        check_permutation(&mapping_order)?;
        check_positive(tile_size, "tile size")?;
        check_positive(tiles_per_dim, "tiles per dimension")?;

        let num_tiles = tiles_per_dim.iter().product();
        Ok(Self {
            n,
            interval,
            tile_size: Shape::from_slice(tile_size),
            tiles_per_dim: Shape::from_slice(tiles_per_dim),
            mapping_order,
            num_tiles,
        })
    }

    /// Create a mapper for a grid of `tiles_per_dim` tiles of `tile_size`,
    /// deriving the governing zero-min interval from the grid itself.
    pub fn for_tile_grid(
        tile_size: &[usize],
        tiles_per_dim: &[usize],
        mapping_order: Vec<usize>,
    ) -> Result<Self> {
        check_rank(tile_size.len(), tiles_per_dim.len())?;
        let shape: Shape = tile_size
            .iter()
            .zip(tiles_per_dim.iter())
            .map(|(&ts, &num)| ts * num)
            .collect();
        let interval = Interval::from_shape(&shape)?;
        Self::new(interval, tile_size, tiles_per_dim, mapping_order)
    }

    /// The identity permutation `0..n`: dimension 0 is least significant.
    pub fn default_mapping_order(n: usize) -> Vec<usize> {
        (0..n).collect()
    }

    /// The governing interval.
    pub fn interval(&self) -> &Interval {
        &self.interval
    }

    /// The nominal tile size per dimension.
    pub fn tile_size(&self) -> &[usize] {
        &self.tile_size
    }

    /// The number of tiles per dimension.
    pub fn tiles_per_dim(&self) -> &[usize] {
        &self.tiles_per_dim
    }

    /// The mapping order.
    pub fn mapping_order(&self) -> &[usize] {
        &self.mapping_order
    }

    /// The total number of tiles.
    pub fn num_tiles(&self) -> usize {
        self.num_tiles
    }

    /// Linearize a tile coordinate into a flat tile index.
    ///
    /// # Errors
    ///
    /// Returns [`TilingError::OutOfRange`] if any coordinate reaches its
    /// per-dimension tile count, and [`TilingError::DimensionMismatch`]
    /// on rank disagreement.
    pub fn flat_index(&self, tile_coord: &[usize]) -> Result<usize> {
        check_rank(self.n, tile_coord.len())?;
        let mut flat = 0;
        for k in (0..self.n).rev() {
            let d = self.mapping_order[k];
            if tile_coord[d] >= self.tiles_per_dim[d] {
                return Err(self.coord_out_of_range(tile_coord));
            }
            flat = flat * self.tiles_per_dim[d] + tile_coord[d];
        }
        Ok(flat)
    }

    /// Recover the tile coordinate of a flat tile index.
    ///
    /// Exact inverse of [`flat_index`](Self::flat_index) for every value in
    /// `[0, num_tiles)`.
    ///
    /// # Errors
    ///
    /// Returns [`TilingError::OutOfRange`] if `flat_index >= num_tiles`.
    pub fn tile_coord(&self, mut flat_index: usize) -> Result<Shape> {
        if flat_index >= self.num_tiles {
            return Err(TilingError::OutOfRange {
                what: "flat tile index",
                index: vec![flat_index as i64],
                bound: vec![self.num_tiles as i64],
            });
        }
        let mut coord = Shape::from_elem(0, self.n);
        for &d in &self.mapping_order {
            let q = flat_index / self.tiles_per_dim[d];
            coord[d] = flat_index - q * self.tiles_per_dim[d];
            flat_index = q;
        }
        Ok(coord)
    }

    /// Decompose an absolute position into its tile coordinate and the
    /// local position within that tile.
    ///
    /// Positions are taken relative to the governing interval's lower
    /// bound. A position falling past the nominal tile grid in some
    /// dimension (the interval is not divisible by the tile size there) is
    /// assigned to the last tile of that dimension with the excess folded
    /// into the local position; border tiles may therefore be larger than
    /// the nominal tile size.
    ///
    /// # Errors
    ///
    /// Returns [`TilingError::OutOfRange`] if `position` lies outside the
    /// governing interval.
    pub fn position_to_tile_and_local(&self, position: &[i64]) -> Result<(Shape, Pos)> {
        check_rank(self.n, position.len())?;
        let mut tile = Shape::from_elem(0, self.n);
        let mut local = Pos::from_elem(0, self.n);
        for d in 0..self.n {
            let (t, l) = self.split_dim(position, d)?;
            tile[d] = t;
            local[d] = l;
        }
        Ok((tile, local))
    }

    /// Combined [`flat_index`](Self::flat_index) over
    /// [`position_to_tile_and_local`](Self::position_to_tile_and_local) in
    /// a single pass, without materializing the tile coordinate.
    pub fn flat_index_and_local(&self, position: &[i64]) -> Result<(usize, Pos)> {
        check_rank(self.n, position.len())?;
        let mut local = Pos::from_elem(0, self.n);
        let mut flat = 0;
        for k in (0..self.n).rev() {
            let d = self.mapping_order[k];
            let (t, l) = self.split_dim(position, d)?;
            flat = flat * self.tiles_per_dim[d] + t;
            local[d] = l;
        }
        Ok((flat, local))
    }

    fn split_dim(&self, position: &[i64], d: usize) -> Result<(usize, i64)> {
        if position[d] < self.interval.min(d) || position[d] > self.interval.max(d) {
            return Err(TilingError::OutOfRange {
                what: "position outside governing interval",
                index: position.to_vec(),
                bound: self.interval.max_slice().to_vec(),
            });
        }
        let rel = (position[d] - self.interval.min(d)) as usize;
        let mut t = rel / self.tile_size[d];
        if t >= self.tiles_per_dim[d] {
            t = self.tiles_per_dim[d] - 1;
        }
        let l = (rel - t * self.tile_size[d]) as i64;
        Ok((t, l))
    }

    fn coord_out_of_range(&self, tile_coord: &[usize]) -> TilingError {
        TilingError::OutOfRange {
            what: "tile coordinate",
            index: tile_coord.iter().map(|&c| c as i64).collect(),
            bound: self.tiles_per_dim.iter().map(|&c| c as i64).collect(),
        }
    }
}

fn check_rank(expected: usize, got: usize) -> Result<()> {
    if expected != got {
        return Err(TilingError::DimensionMismatch { expected, got });
    }
    Ok(())
}

fn check_permutation(mapping_order: &[usize]) -> Result<()> {
    let n = mapping_order.len();
    let mut seen = vec![false; n];
    for &d in mapping_order {
        if d >= n || seen[d] {
            return Err(TilingError::OutOfRange {
                what: "mapping order must be a permutation of the dimensions",
                index: mapping_order.iter().map(|&v| v as i64).collect(),
                bound: vec![n as i64],
            });
        }
        seen[d] = true;
    }
    Ok(())
}

fn check_positive(values: &[usize], what: &'static str) -> Result<()> {
    if values.contains(&0) {
        return Err(TilingError::OutOfRange {
            what,
            index: values.iter().map(|&v| v as i64).collect(),
            bound: vec![1; values.len()],
        });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn scenario_mapper() -> TileIndexMapper {
        let interval = Interval::from_shape(&[20, 20, 10]).unwrap();
        TileIndexMapper::new(
            interval,
            &[5, 5, 2],
            &[4, 4, 5],
            TileIndexMapper::default_mapping_order(3),
        )
        .unwrap()
    }

    #[test]
    fn test_flat_index_concrete() {
        let mapper = scenario_mapper();
        assert_eq!(mapper.num_tiles(), 80);
        // 3 + 4 * (2 + 4 * 1)
        assert_eq!(mapper.flat_index(&[3, 2, 1]).unwrap(), 27);
        assert_eq!(mapper.flat_index(&[0, 0, 0]).unwrap(), 0);
        assert_eq!(mapper.flat_index(&[3, 3, 4]).unwrap(), 79);
    }

    #[test]
    fn test_tile_coord_inverse() {
        let mapper = scenario_mapper();
        assert_eq!(&mapper.tile_coord(27).unwrap()[..], &[3, 2, 1]);
        for flat in 0..mapper.num_tiles() {
            let coord = mapper.tile_coord(flat).unwrap();
            assert_eq!(mapper.flat_index(&coord).unwrap(), flat);
        }
    }

    #[test]
    fn test_custom_mapping_order() {
        let interval = Interval::from_shape(&[20, 20, 10]).unwrap();
        // Dimension 2 varies fastest.
        let mapper =
            TileIndexMapper::new(interval, &[5, 5, 2], &[4, 4, 5], vec![2, 1, 0]).unwrap();
        // 1 + 5 * (2 + 4 * 3)
        assert_eq!(mapper.flat_index(&[3, 2, 1]).unwrap(), 71);
        assert_eq!(&mapper.tile_coord(71).unwrap()[..], &[3, 2, 1]);
    }

    #[test]
    fn test_position_to_tile_and_local() {
        let mapper = scenario_mapper();
        let (tile, local) = mapper.position_to_tile_and_local(&[17, 10, 3]).unwrap();
        assert_eq!(&tile[..], &[3, 2, 1]);
        assert_eq!(&local[..], &[2, 0, 1]);
    }

    #[test]
    fn test_border_tile_enlargement() {
        // 22 wide with tile size 5 keeps 4 tiles; positions 20 and 21 fold
        // into the last tile.
        let interval = Interval::from_shape(&[22]).unwrap();
        let mapper = TileIndexMapper::new(interval, &[5], &[4], vec![0]).unwrap();
        let (tile, local) = mapper.position_to_tile_and_local(&[21]).unwrap();
        assert_eq!(&tile[..], &[3]);
        assert_eq!(&local[..], &[6]);
    }

    #[test]
    fn test_nonzero_min_interval() {
        let interval = Interval::new(&[10], &[29]).unwrap();
        let mapper = TileIndexMapper::new(interval, &[5], &[4], vec![0]).unwrap();
        let (tile, local) = mapper.position_to_tile_and_local(&[12]).unwrap();
        assert_eq!(&tile[..], &[0]);
        assert_eq!(&local[..], &[2]);
        let (tile, _) = mapper.position_to_tile_and_local(&[29]).unwrap();
        assert_eq!(&tile[..], &[3]);
    }

    #[test]
    fn test_flat_index_and_local_matches_composition() {
        let mapper = scenario_mapper();
        for position in [[0, 0, 0], [17, 10, 3], [19, 19, 9], [4, 5, 1]] {
            let (tile, local) = mapper.position_to_tile_and_local(&position).unwrap();
            let flat = mapper.flat_index(&tile).unwrap();
            let (merged_flat, merged_local) = mapper.flat_index_and_local(&position).unwrap();
            assert_eq!(merged_flat, flat);
            assert_eq!(merged_local, local);
        }
    }

    #[test]
    fn test_out_of_range_errors() {
        let mapper = scenario_mapper();
        assert!(matches!(
            mapper.flat_index(&[4, 0, 0]),
            Err(TilingError::OutOfRange { .. })
        ));
        assert!(matches!(
            mapper.tile_coord(80),
            Err(TilingError::OutOfRange { .. })
        ));
        assert!(matches!(
            mapper.position_to_tile_and_local(&[20, 0, 0]),
            Err(TilingError::OutOfRange { .. })
        ));
        assert!(matches!(
            mapper.position_to_tile_and_local(&[-1, 0, 0]),
            Err(TilingError::OutOfRange { .. })
        ));
    }

    #[test]
    fn test_construction_errors() {
        let interval = Interval::from_shape(&[20, 20]).unwrap();
        assert!(matches!(
            TileIndexMapper::new(interval.clone(), &[5], &[4, 4], vec![0, 1]),
            Err(TilingError::DimensionMismatch { .. })
        ));
        assert!(matches!(
            TileIndexMapper::new(interval.clone(), &[5, 5], &[4, 4], vec![0, 0]),
            Err(TilingError::OutOfRange { .. })
        ));
        assert!(matches!(
            TileIndexMapper::new(interval, &[5, 0], &[4, 4], vec![0, 1]),
            Err(TilingError::OutOfRange { .. })
        ));
    }

    #[test]
    fn test_for_tile_grid() {
        let mapper =
            TileIndexMapper::for_tile_grid(&[5, 5], &[4, 3], TileIndexMapper::default_mapping_order(2))
                .unwrap();
        assert_eq!(mapper.interval().max_slice(), &[19, 14]);
        assert_eq!(mapper.num_tiles(), 12);
    }
}
