//! Binary checkpoint store: one scalar-field file and one mesh file per
//! timestep.
//!
//! Files are named `<FieldName>.<NNNNN>.ckp` and `Mesh.<NNNNN>.ckp`, with
//! the timestep zero-padded to five digits. Reading and writing go
//! through [`load_checkpoint`] and [`write_checkpoint`]; the raw codec is
//! public for tooling.
//!
//! # Format
//!
//! All integers are little-endian. Strings and arrays are
//! length-prefixed. There is no compression, no alignment padding, and no
//! self-describing schema.
//!
//! ```text
//! [MAGIC "RGRD"] [STORE_VERSION u8] [KIND u8]
//! [attribute table: u32 count, then (name, u8 tag, value) entries]
//! KIND 0 (field): [data: u64 len, f64 × len]
//! KIND 1 (mesh):  [vertices:     u64 rows, u8 cols, f64 × rows·cols]
//!                 [connectivity: u64 rows, u8 cols, u32 × rows·cols]
//! ```
//!
//! Both files carry the `"dimensionality"`, `"mesh resolution"` (node
//! counts − 1 per axis), and `"checkpoint version"` attributes; mesh
//! files additionally carry the `"min"`/`"max"` domain extents. The
//! checkpoint version attribute travels through resampling unchanged,
//! while `STORE_VERSION` is the wire-format revision this crate can
//! parse.
//!
//! # Atomic commit
//!
//! [`write_checkpoint`] stages both files under temporary names and
//! renames them into place only after both encode successfully, so a
//! failed write never leaves a partial checkpoint behind.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod attrs;
pub mod codec;
pub mod error;
pub mod reader;
pub mod types;
pub mod writer;

pub use attrs::{AttrValue, Attributes};
pub use error::{CodecError, StoreError};
pub use reader::{latest_timestep, load_checkpoint};
pub use types::{Checkpoint, FieldRecord, MeshRecord};
pub use writer::{write_checkpoint, CheckpointPaths};

use regrid_core::Timestep;

/// Magic bytes at the start of every checkpoint file.
pub const MAGIC: [u8; 4] = *b"RGRD";

/// Wire-format revision understood by this crate.
pub const STORE_VERSION: u8 = 1;

/// Attribute naming the grid dimensionality (2 or 3).
pub const ATTR_DIMENSIONALITY: &str = "dimensionality";

/// Attribute naming the per-axis element counts (node counts − 1).
pub const ATTR_MESH_RESOLUTION: &str = "mesh resolution";

/// Attribute carrying the solver's checkpoint version, copied through
/// resampling unchanged.
pub const ATTR_CHECKPOINT_VERSION: &str = "checkpoint version";

/// Mesh attribute: per-axis lower domain bounds.
pub const ATTR_MIN: &str = "min";

/// Mesh attribute: per-axis upper domain bounds.
pub const ATTR_MAX: &str = "max";

/// File name of a scalar-field checkpoint at a timestep.
pub fn field_file_name(field_name: &str, timestep: Timestep) -> String {
    format!("{}.{:05}.ckp", field_name, timestep.0)
}

/// File name of a mesh checkpoint at a timestep.
pub fn mesh_file_name(timestep: Timestep) -> String {
    format!("Mesh.{:05}.ckp", timestep.0)
}
