//! Core types for the regrid checkpoint resampler.
//!
//! This is the leaf crate with no internal dependencies. It defines the
//! data model shared by every other regrid crate: the structured grid
//! description ([`GridSpec`]), the node-aligned scalar field
//! ([`ScalarField`]), the timestep identifier ([`Timestep`]), and the
//! validation errors ([`GridError`]).
//!
//! # Node ordering
//!
//! Everything in regrid flattens grids the same way: row-major with the
//! **first axis varying fastest** (x, then y, then z). The node at grid
//! coordinate `(x, y, z)` lives at flat index `x + y·nx + z·nx·ny`. Scalar
//! fields, mesh vertices, and element corners all share this convention,
//! which is what keeps field values and mesh vertices index-aligned
//! without any explicit mapping.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod error;
pub mod field;
pub mod grid;
pub mod timestep;

pub use error::GridError;
pub use field::ScalarField;
pub use grid::{AxisExtent, Extents, GridSpec, NodeCounts};
pub use timestep::Timestep;
