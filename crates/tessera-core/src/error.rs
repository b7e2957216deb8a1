//! Unified error types for tile geometry and addressing.
//!
//! All failures in this crate are local, synchronous, and surfaced to the
//! immediate caller; nothing is retried internally and nothing is silently
//! swallowed. Border enlargement, overlap clipping, and mirror reflection
//! are documented policies, not error recovery.
//!
//! # Examples
//!
//! ```
//! use tessera_core::{Result, TilingError};
//!
//! fn check_rank(expected: usize, got: usize) -> Result<()> {
//!     if expected != got {
//!         return Err(TilingError::DimensionMismatch { expected, got });
//!     }
//!     Ok(())
//! }
//!
//! assert!(check_rank(3, 2).is_err());
//! ```

use thiserror::Error;

use crate::config::TilingType;

/// Top-level error type for tiling and addressing operations.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TilingError {
    /// A tile coordinate, flat index, or position falls outside its
    /// governing bound.
    #[error("{what}: {index:?} exceeds {bound:?}")]
    OutOfRange {
        /// What was being checked.
        what: &'static str,
        /// The offending value (scalar indices are wrapped in a one-element
        /// vector).
        index: Vec<i64>,
        /// The bound it was checked against.
        bound: Vec<i64>,
    },

    /// Operands disagree on dimensionality. A programming or configuration
    /// error; fails fast at construction.
    #[error("dimension count mismatch: expected {expected}, got {got}")]
    DimensionMismatch {
        /// Expected rank.
        expected: usize,
        /// Actual rank.
        got: usize,
    },

    /// A [`TilingConfig`](crate::TilingConfig) query for the complementary
    /// quantity was made without supplying a governing interval.
    #[error("{query} is undefined for a {tiling_type:?} configuration without a governing interval")]
    UnresolvedQuery {
        /// The quantity that was asked for.
        query: &'static str,
        /// The declared tiling type of the configuration.
        tiling_type: TilingType,
    },
}

/// Result type alias for tiling and addressing operations.
pub type Result<T> = std::result::Result<T, TilingError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_out_of_range_display() {
        let err = TilingError::OutOfRange {
            what: "tile coordinate",
            index: vec![4, 0],
            bound: vec![4, 4],
        };
        assert_eq!(err.to_string(), "tile coordinate: [4, 0] exceeds [4, 4]");
    }

    #[test]
    fn test_dimension_mismatch_display() {
        let err = TilingError::DimensionMismatch {
            expected: 3,
            got: 2,
        };
        assert_eq!(err.to_string(), "dimension count mismatch: expected 3, got 2");
    }

    #[test]
    fn test_unresolved_query_display() {
        let err = TilingError::UnresolvedQuery {
            query: "tiles per dimension",
            tiling_type: TilingType::FixedTileSize,
        };
        assert!(err.to_string().contains("tiles per dimension"));
        assert!(err.to_string().contains("FixedTileSize"));
    }
}
