//! Regrid: a checkpoint resampling engine for structured-mesh geodynamic
//! models.
//!
//! A cheap low-resolution equilibration run leaves behind a scalar-field
//! checkpoint. Regrid reconstructs that field and its mesh at a different
//! resolution so the result can seed a higher-resolution solver run:
//! load, spline-resample, regenerate the mesh, write at the next
//! timestep.
//!
//! This is the top-level facade crate re-exporting the public API from
//! all regrid sub-crates. For most users, adding `regrid` as a single
//! dependency is sufficient.
//!
//! # Quick start
//!
//! ```rust
//! use regrid::prelude::*;
//! use smallvec::smallvec;
//!
//! // A scratch directory standing in for a solver output directory.
//! let dir = std::env::temp_dir().join(format!("regrid-quickstart-{}", std::process::id()));
//! let _ = std::fs::remove_dir_all(&dir);
//!
//! // A coarse 5×5 equilibration checkpoint over [0,4]×[0,4].
//! let spec = GridSpec::new(
//!     smallvec![5, 5],
//!     smallvec![AxisExtent::new(0.0, 4.0), AxisExtent::new(0.0, 4.0)],
//! )
//! .unwrap();
//! let field = ScalarField::new(spec.clone(), (0..25).map(f64::from).collect()).unwrap();
//! let checkpoint = Checkpoint {
//!     mesh: MeshGeometry::regenerate(&spec),
//!     field,
//!     timestep: Timestep(0),
//!     version: 2,
//! };
//! write_checkpoint(&dir, DEFAULT_FIELD_NAME, &checkpoint).unwrap();
//!
//! // Reseed it at 9×9 for the production run.
//! let request = RemapRequest::new(&dir, Timestep(0), TargetResolution::new(9, 9, 0), &dir);
//! let summary = remap(&request).unwrap();
//! assert_eq!(summary.timestep, Timestep(1));
//!
//! let finer = load_checkpoint(&dir, Timestep(1), DEFAULT_FIELD_NAME).unwrap();
//! assert_eq!(finer.field.values().len(), 81);
//! assert_eq!(finer.mesh.element_count(), 64);
//!
//! std::fs::remove_dir_all(&dir).unwrap();
//! ```
//!
//! # Modules
//!
//! Each module corresponds to a sub-crate. Use them for items not in the
//! prelude:
//!
//! | Module | Sub-crate | Contents |
//! |--------|-----------|----------|
//! | [`types`] | `regrid-core` | Grid spec, scalar field, timestep, validation errors |
//! | [`mesh`] | `regrid-mesh` | Vertex lattice and element connectivity reconstruction |
//! | [`resample`] | `regrid-resample` | Cubic spline and N-d field resampling |
//! | [`checkpoint`] | `regrid-checkpoint` | Binary checkpoint store, codec, naming |
//! | [`engine`] | `regrid-engine` | The remap request and pipeline |

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

/// Core grid and field types (`regrid-core`).
pub use regrid_core as types;

/// Mesh reconstruction (`regrid-mesh`).
pub use regrid_mesh as mesh;

/// Field resampling (`regrid-resample`).
pub use regrid_resample as resample;

/// The binary checkpoint store (`regrid-checkpoint`).
pub use regrid_checkpoint as checkpoint;

/// The resampling pipeline (`regrid-engine`).
pub use regrid_engine as engine;

/// The most commonly used regrid items in one import.
pub mod prelude {
    pub use regrid_checkpoint::{
        latest_timestep, load_checkpoint, write_checkpoint, Checkpoint, CheckpointPaths,
        StoreError,
    };
    pub use regrid_core::{AxisExtent, GridSpec, NodeCounts, ScalarField, Timestep};
    pub use regrid_engine::{
        remap, RemapError, RemapRequest, RemapSummary, TargetResolution, DEFAULT_FIELD_NAME,
    };
    pub use regrid_mesh::MeshGeometry;
    pub use regrid_resample::{resample, ResampleError};
}
