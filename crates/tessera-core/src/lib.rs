//! # tessera-core
//!
//! Tile geometry, index mapping, and lazy tile views over n-dimensional
//! grids.
//!
//! This crate provides the addressing layer for pipelines that process
//! large arrays tile by tile:
//!
//! - **Index algebra** ([`TileIndexMapper`]): tile coordinates ↔ flat
//!   indices under a configurable mapping order, and position ↔
//!   (tile, local) decomposition with border folding
//! - **Tiling configuration** ([`TilingConfig`], [`TilingType`]): fixed
//!   tile size or fixed tile count, plus per-dimension overlap
//! - **Resolution** ([`Tiling`], [`TilingStrategy`]): binding a config to
//!   a concrete [`Interval`]
//! - **Lazy views** ([`TilesView`], [`TilingView`]): virtual collections
//!   handing out one sub-interval view per tile, by random access or flat
//!   iteration, without materializing anything
//!
//! Array storage itself is out of scope; the crate composes with anything
//! implementing the small [`NdSource`]/[`NdAccess`] contracts. A minimal
//! dense reference backend ([`DenseGrid`]) is included.
//!
//! ## Quick start
//!
//! ```
//! use tessera_core::{DenseGrid, NdSource, Tiling, TilingConfig, TilingType};
//!
//! // A 20x20 grid split into 5x5 tiles with a 1-pixel overlap.
//! let grid = DenseGrid::from_shape_fn(&[20, 20], |pos| (pos[0] + 20 * pos[1]) as f64)?;
//! let config = TilingConfig::new(&[5, 5], TilingType::FixedTileSize, &[1, 1])?;
//! let tiling = Tiling::resolve(config, grid.interval())?;
//!
//! assert_eq!(tiling.num_tiles(), 16);
//!
//! let view = tiling.view(&grid)?;
//! for tile in view.cursor()? {
//!     // Each tile is a lazy sub-interval view of the grid.
//!     assert!(tile.interval().num_elements() >= 25);
//! }
//! # Ok::<(), tessera_core::TilingError>(())
//! ```
//!
//! ## Concurrency
//!
//! Geometry objects and views are immutable after construction and safe to
//! share across threads. Cursors and random accesses are single-owner
//! mutable state; give each thread its own via the access factories or
//! `copy`.

#![deny(warnings)]

pub mod config;
pub mod dense;
pub mod error;
pub mod mapper;
pub mod source;
pub mod tiling;
pub mod types;
pub mod view;


pub use config::{TilingConfig, TilingType};
pub use dense::{DenseAccess, DenseGrid};
pub use error::{Result, TilingError};
pub use mapper::TileIndexMapper;
pub use source::{IntervalView, NdAccess, NdSource};
pub use tiling::{Tiling, TilingStrategy};
pub use types::{Interval, Pos, Positions, Shape};
pub use view::{
    TilesCursor, TilesRandomAccess, TilesView, TilingCursor, TilingRandomAccess, TilingView,
};
