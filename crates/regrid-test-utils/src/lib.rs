//! Shared fixtures for regrid tests and benches.
//!
//! Provides scratch checkpoint directories with drop cleanup, ramp
//! fields whose values encode their own node indices, deterministic
//! noise fields, and helpers that stage complete checkpoints on disk.

#![forbid(unsafe_code)]
#![allow(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

use std::fs;
use std::path::{Path, PathBuf};

use rand_chacha::rand_core::{RngCore, SeedableRng};
use rand_chacha::ChaCha8Rng;
use regrid_checkpoint::{write_checkpoint, Checkpoint, CheckpointPaths};
use regrid_core::{AxisExtent, GridSpec, ScalarField, Timestep};
use regrid_mesh::MeshGeometry;
use smallvec::smallvec;

/// Field name used by every fixture checkpoint.
pub const FIELD_NAME: &str = "TemperatureField";

/// Checkpoint version attribute stamped on fixture checkpoints.
pub const FIXTURE_VERSION: u32 = 2;

/// A unique scratch directory under the system temp dir, removed on drop.
///
/// The tag keeps concurrently running tests out of each other's way;
/// use a distinct tag per test.
pub struct ScratchDir {
    path: PathBuf,
}

impl ScratchDir {
    pub fn new(tag: &str) -> Self {
        let path = std::env::temp_dir().join(format!("regrid-{tag}-{}", std::process::id()));
        let _ = fs::remove_dir_all(&path);
        fs::create_dir_all(&path).expect("create scratch dir");
        Self { path }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// A path inside the scratch dir that is not created yet.
    pub fn subdir(&self, name: &str) -> PathBuf {
        self.path.join(name)
    }
}

impl Drop for ScratchDir {
    fn drop(&mut self) {
        let _ = fs::remove_dir_all(&self.path);
    }
}

/// 2-D grid over `[0, nx−1] × [0, ny−1]` — node spacing 1.
pub fn index_spec_2d(nx: u32, ny: u32) -> GridSpec {
    GridSpec::new(
        smallvec![nx, ny],
        smallvec![
            AxisExtent::new(0.0, (nx - 1) as f64),
            AxisExtent::new(0.0, (ny - 1) as f64),
        ],
    )
    .expect("fixture grid")
}

/// 3-D grid over `[0, nx−1] × [0, ny−1] × [0, nz−1]`.
pub fn index_spec_3d(nx: u32, ny: u32, nz: u32) -> GridSpec {
    GridSpec::new(
        smallvec![nx, ny, nz],
        smallvec![
            AxisExtent::new(0.0, (nx - 1) as f64),
            AxisExtent::new(0.0, (ny - 1) as f64),
            AxisExtent::new(0.0, (nz - 1) as f64),
        ],
    )
    .expect("fixture grid")
}

/// The ramp `x + y·nx` over [`index_spec_2d`] — node i holds the value i.
pub fn ramp_field_2d(nx: u32, ny: u32) -> ScalarField {
    let spec = index_spec_2d(nx, ny);
    let values = (0..spec.node_count()).map(|i| i as f64).collect();
    ScalarField::new(spec, values).expect("fixture field")
}

/// The ramp `x + y·nx + z·nx·ny` over [`index_spec_3d`].
pub fn ramp_field_3d(nx: u32, ny: u32, nz: u32) -> ScalarField {
    let spec = index_spec_3d(nx, ny, nz);
    let values = (0..spec.node_count()).map(|i| i as f64).collect();
    ScalarField::new(spec, values).expect("fixture field")
}

/// Deterministic noise in `[0, 1)` from a seeded ChaCha8 stream.
///
/// The same seed and grid always produce the same field.
pub fn noise_field(spec: &GridSpec, seed: u64) -> ScalarField {
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    let values = (0..spec.node_count())
        .map(|_| (rng.next_u64() >> 11) as f64 / (1u64 << 53) as f64)
        .collect();
    ScalarField::new(spec.clone(), values).expect("fixture field")
}

/// Pair a field with its regenerated mesh at a timestep.
pub fn checkpoint_from_field(field: ScalarField, timestep: Timestep) -> Checkpoint {
    let mesh = MeshGeometry::regenerate(field.spec());
    Checkpoint {
        field,
        mesh,
        timestep,
        version: FIXTURE_VERSION,
    }
}

/// Write a complete checkpoint pair for `field` into `dir`.
pub fn seed_checkpoint(dir: &Path, field: ScalarField, timestep: Timestep) -> CheckpointPaths {
    let checkpoint = checkpoint_from_field(field, timestep);
    write_checkpoint(dir, FIELD_NAME, &checkpoint).expect("seed checkpoint")
}
