//! Validation errors for the grid data model.

use crate::grid::NodeCounts;
use std::fmt;

/// Errors detected while constructing or reshaping grid types.
///
/// All variants are structural validation failures: they are raised before
/// any resampling or I/O happens and carry the offending values so the
/// caller can report the problem without re-running.
#[derive(Clone, Debug, PartialEq)]
pub enum GridError {
    /// The grid is neither 2-D nor 3-D.
    UnsupportedDimensionality {
        /// Number of axes found.
        found: usize,
    },
    /// A per-axis node count is zero.
    InvalidNodeCount {
        /// Index of the offending axis (0 = x).
        axis: usize,
        /// The rejected count.
        count: u32,
    },
    /// An axis extent is inverted or non-finite.
    InvalidExtent {
        /// Index of the offending axis (0 = x).
        axis: usize,
        /// Lower bound as given.
        min: f64,
        /// Upper bound as given.
        max: f64,
    },
    /// Node counts and extents disagree on the number of axes.
    AxisCountMismatch {
        /// Axes described by the node counts.
        counts: usize,
        /// Axes described by the extents.
        extents: usize,
    },
    /// The total node count does not fit in a `u32`.
    ///
    /// Element connectivity stores vertex indices as `u32`, so grids
    /// beyond that are unrepresentable in the checkpoint format.
    TooManyNodes {
        /// The rejected per-axis node counts.
        counts: NodeCounts,
    },
    /// A flat value sequence does not match the grid's node count.
    LengthMismatch {
        /// Node count implied by the grid.
        expected: usize,
        /// Length of the sequence as given.
        actual: usize,
    },
}

impl fmt::Display for GridError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::UnsupportedDimensionality { found } => {
                write!(f, "grid must be 2-D or 3-D, got {found} axes")
            }
            Self::InvalidNodeCount { axis, count } => {
                write!(f, "axis {axis} node count must be at least 1, got {count}")
            }
            Self::InvalidExtent { axis, min, max } => {
                write!(
                    f,
                    "axis {axis} extent invalid: min={min}, max={max} \
                     (bounds must be finite with min <= max)"
                )
            }
            Self::AxisCountMismatch { counts, extents } => {
                write!(
                    f,
                    "node counts describe {counts} axes but extents describe {extents}"
                )
            }
            Self::TooManyNodes { counts } => {
                write!(f, "node counts {counts:?} overflow the u32 index space")
            }
            Self::LengthMismatch { expected, actual } => {
                write!(
                    f,
                    "field has {actual} values but the grid has {expected} nodes"
                )
            }
        }
    }
}

impl std::error::Error for GridError {}
