//! Errors for field resampling.

use regrid_core::GridError;
use std::fmt;

/// Errors raised while validating or executing a resample.
#[derive(Clone, Debug, PartialEq)]
pub enum ResampleError {
    /// A target node count is zero.
    InvalidTargetCount {
        /// Index of the offending axis (0 = x).
        axis: usize,
        /// The rejected count.
        count: u32,
    },
    /// The target rank differs from the source field's rank.
    DimensionalityMismatch {
        /// Axes in the source field.
        source: usize,
        /// Axes in the requested target counts.
        target: usize,
    },
    /// The target grid itself failed validation.
    Grid(GridError),
}

impl fmt::Display for ResampleError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidTargetCount { axis, count } => {
                write!(
                    f,
                    "target node count for axis {axis} must be positive, got {count}"
                )
            }
            Self::DimensionalityMismatch { source, target } => {
                write!(
                    f,
                    "target resolution has {target} axes but the source field has {source}"
                )
            }
            Self::Grid(e) => write!(f, "target grid invalid: {e}"),
        }
    }
}

impl std::error::Error for ResampleError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Grid(e) => Some(e),
            _ => None,
        }
    }
}

impl From<GridError> for ResampleError {
    fn from(e: GridError) -> Self {
        Self::Grid(e)
    }
}
