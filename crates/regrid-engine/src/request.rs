//! The remap invocation contract.

use crate::error::RemapError;
use regrid_core::{NodeCounts, Timestep};
use std::path::PathBuf;

/// Field resampled when the caller does not name one.
pub const DEFAULT_FIELD_NAME: &str = "TemperatureField";

/// Target resolution as supplied by the job configuration: three node
/// counts, with `z = 0` marking a 2-D run.
///
/// # Examples
///
/// ```
/// use regrid_engine::TargetResolution;
///
/// let planar = TargetResolution::new(9, 9, 0);
/// assert_eq!(planar.ndim(), 2);
/// assert_eq!(planar.node_counts().unwrap().as_slice(), &[9, 9]);
///
/// // A single z-plane is not a 3-D grid and not a 2-D marker.
/// assert!(TargetResolution::new(9, 9, 1).node_counts().is_err());
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct TargetResolution {
    /// Node count along x.
    pub x: u32,
    /// Node count along y.
    pub y: u32,
    /// Node count along z; 0 for a 2-D run.
    pub z: u32,
}

impl TargetResolution {
    /// Bundle three per-axis node counts.
    pub fn new(x: u32, y: u32, z: u32) -> Self {
        Self { x, y, z }
    }

    /// Number of axes this resolution describes.
    pub fn ndim(&self) -> usize {
        if self.z == 0 {
            2
        } else {
            3
        }
    }

    /// Validate and convert to per-axis node counts.
    ///
    /// Each axis needs at least two node planes to carry elements, so
    /// counts of 0 and 1 are rejected — except `z = 0`, which selects a
    /// 2-D grid. This runs before any file is touched.
    pub fn node_counts(&self) -> Result<NodeCounts, RemapError> {
        if self.x < 2 {
            return Err(RemapError::InvalidTarget {
                axis: "x",
                count: self.x,
            });
        }
        if self.y < 2 {
            return Err(RemapError::InvalidTarget {
                axis: "y",
                count: self.y,
            });
        }
        match self.z {
            0 => Ok([self.x, self.y].into_iter().collect()),
            1 => Err(RemapError::InvalidTarget {
                axis: "z",
                count: self.z,
            }),
            _ => Ok([self.x, self.y, self.z].into_iter().collect()),
        }
    }
}

/// Everything a resampling run needs, fixed up front.
///
/// The request is deliberately self-contained: the engine reads nothing
/// from global configuration. `dest_dir` may equal `source_dir`; the
/// output lands at the source timestep plus one, so the source files are
/// never touched.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RemapRequest {
    /// Directory holding the source checkpoint pair.
    pub source_dir: PathBuf,
    /// Timestep of the source checkpoint.
    pub source_timestep: Timestep,
    /// Resolution of the checkpoint to produce.
    pub target: TargetResolution,
    /// Directory to write the new checkpoint pair into.
    pub dest_dir: PathBuf,
    /// Name of the scalar field, used in checkpoint file names.
    pub field_name: String,
}

impl RemapRequest {
    /// Build a request for [`DEFAULT_FIELD_NAME`].
    pub fn new(
        source_dir: impl Into<PathBuf>,
        source_timestep: Timestep,
        target: TargetResolution,
        dest_dir: impl Into<PathBuf>,
    ) -> Self {
        Self {
            source_dir: source_dir.into(),
            source_timestep,
            target,
            dest_dir: dest_dir.into(),
            field_name: DEFAULT_FIELD_NAME.to_string(),
        }
    }

    /// Resample a differently named scalar field.
    pub fn with_field_name(mut self, name: impl Into<String>) -> Self {
        self.field_name = name.into();
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn two_d_marker_yields_two_counts() {
        let counts = TargetResolution::new(5, 7, 0).node_counts().unwrap();
        assert_eq!(counts.as_slice(), &[5, 7]);
    }

    #[test]
    fn three_d_yields_three_counts() {
        let counts = TargetResolution::new(5, 7, 9).node_counts().unwrap();
        assert_eq!(counts.as_slice(), &[5, 7, 9]);
    }

    #[test]
    fn zero_and_one_counts_are_rejected() {
        assert!(matches!(
            TargetResolution::new(0, 5, 0).node_counts(),
            Err(RemapError::InvalidTarget { axis: "x", count: 0 })
        ));
        assert!(matches!(
            TargetResolution::new(5, 1, 0).node_counts(),
            Err(RemapError::InvalidTarget { axis: "y", count: 1 })
        ));
        assert!(matches!(
            TargetResolution::new(5, 5, 1).node_counts(),
            Err(RemapError::InvalidTarget { axis: "z", count: 1 })
        ));
    }

    #[test]
    fn request_defaults_to_temperature_field() {
        let req = RemapRequest::new(
            "/tmp/in",
            Timestep(3),
            TargetResolution::new(9, 9, 0),
            "/tmp/out",
        );
        assert_eq!(req.field_name, DEFAULT_FIELD_NAME);

        let req = req.with_field_name("PressureField");
        assert_eq!(req.field_name, "PressureField");
    }
}
