//! # tessera-oob
//!
//! Out-of-bounds boundary extension for n-dimensional grids: triangle-wave
//! mirroring with exponential edge windowing, maintained incrementally
//! across cursor movement.
//!
//! A bounded source only defines values inside its interval. Wrapping it
//! in an [`ExtendedAccess`] yields a cursor over all of ℤⁿ: in-domain
//! reads pass through, out-of-domain reads are synthesized by a
//! [`BoundaryExtension`] strategy. The shipped strategy mirrors the
//! position back into the domain (bouncing off both boundaries) and
//! scales the sample by a precomputed [`ExpWindow`] weight, so values fade
//! smoothly to zero instead of cutting off at tile or image edges.
//!
//! Sequential movement is cheap: the mirrored cursor and its per-dimension
//! direction flags are updated in O(1) per unit step, and only jumps
//! beyond [`INCREMENTAL_STEP_LIMIT`] trigger a fresh reflection
//! computation.
//!
//! ## Quick start
//!
//! ```
//! use tessera_core::{DenseGrid, NdAccess};
//! use tessera_oob::ExtendedAccess;
//!
//! let grid = DenseGrid::from_shape_fn(&[16, 16], |pos| (pos[0] * pos[1]) as f64)?;
//! let mut access = ExtendedAccess::mirror_exp_windowing(&grid, &[0.5, 0.5])?;
//!
//! access.set_position(&[15, 8]);
//! let inside = access.get();
//!
//! // Step past the edge: the value is mirrored back and fades out.
//! access.fwd(0);
//! assert!(access.is_out_of_bounds());
//! assert!(access.get().abs() <= inside.abs());
//! # Ok::<(), tessera_core::TilingError>(())
//! ```
//!
//! Accesses are single-owner mutable state; [`ExtendedAccess::copy`]
//! produces an independent cursor sharing only the immutable weight
//! tables.

#![deny(warnings)]

pub mod mirror;
pub mod strategy;
pub mod window;

pub use mirror::{reflect, MirrorExpWindowing, INCREMENTAL_STEP_LIMIT};
pub use strategy::{BoundaryExtension, ExtendedAccess};
pub use window::ExpWindow;
