//! Benchmark profiles for the regrid workspace.
//!
//! Provides standard source fields sized like real equilibration output:
//!
//! - [`equilibration_2d`]: 65×65 noise field (typical 2-D thermal run)
//! - [`equilibration_3d`]: 17×17×17 noise field (small 3-D thermal run)
//!
//! Benches resample these onto [`PRODUCTION_2D`] / [`PRODUCTION_3D`],
//! roughly doubling the lattice density per axis the way a production
//! reseed does.

#![forbid(unsafe_code)]
#![deny(rustdoc::broken_intra_doc_links)]

use regrid_core::ScalarField;
use regrid_test_utils::{index_spec_2d, index_spec_3d, noise_field};

/// Target node counts for the 2-D production profile.
pub const PRODUCTION_2D: (u32, u32) = (129, 129);

/// Target node counts for the 3-D production profile.
pub const PRODUCTION_3D: (u32, u32, u32) = (33, 33, 33);

/// Seed shared by every profile so runs are comparable.
pub const PROFILE_SEED: u64 = 42;

/// A 65×65 noise field standing in for 2-D equilibration output.
pub fn equilibration_2d() -> ScalarField {
    noise_field(&index_spec_2d(65, 65), PROFILE_SEED)
}

/// A 17×17×17 noise field standing in for 3-D equilibration output.
pub fn equilibration_3d() -> ScalarField {
    noise_field(&index_spec_3d(17, 17, 17), PROFILE_SEED)
}
