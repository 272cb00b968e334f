//! Error type for the resampling pipeline.

use regrid_checkpoint::StoreError;
use regrid_resample::ResampleError;
use std::fmt;

/// Errors from a [`remap`](crate::remap) invocation.
///
/// Validation failures are caught before any I/O; store and resample
/// failures wrap the subsystem error and expose it through
/// [`source()`](std::error::Error::source).
#[derive(Debug)]
pub enum RemapError {
    /// A target axis count is unusable.
    ///
    /// Every axis needs at least two node planes to carry elements; `z`
    /// may instead be 0 to mark a 2-D run. A `z` of 1 (a single-plane
    /// collapse of a 3-D grid) is rejected rather than degraded to 2-D.
    InvalidTarget {
        /// Axis name (`"x"`, `"y"`, or `"z"`).
        axis: &'static str,
        /// The rejected count.
        count: u32,
    },
    /// The target rank differs from the source checkpoint's rank.
    DimensionalityMismatch {
        /// Axes in the source checkpoint.
        source: usize,
        /// Axes in the requested target resolution.
        target: usize,
    },
    /// Loading or writing a checkpoint failed.
    Store(StoreError),
    /// Resampling the field failed.
    Resample(ResampleError),
}

impl fmt::Display for RemapError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidTarget { axis, count } => {
                write!(
                    f,
                    "invalid target resolution: axis {axis} count {count} \
                     (counts must be at least 2; z may be 0 for a 2-D run)"
                )
            }
            Self::DimensionalityMismatch { source, target } => {
                write!(
                    f,
                    "target resolution is {target}-D but the source checkpoint is {source}-D"
                )
            }
            Self::Store(e) => write!(f, "checkpoint store: {e}"),
            Self::Resample(e) => write!(f, "resample: {e}"),
        }
    }
}

impl std::error::Error for RemapError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Store(e) => Some(e),
            Self::Resample(e) => Some(e),
            _ => None,
        }
    }
}

impl From<StoreError> for RemapError {
    fn from(e: StoreError) -> Self {
        Self::Store(e)
    }
}

impl From<ResampleError> for RemapError {
    fn from(e: ResampleError) -> Self {
        Self::Resample(e)
    }
}
