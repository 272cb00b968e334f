//! The checkpoint resampling pipeline.
//!
//! [`remap`] turns one checkpoint into another at a different resolution:
//! it loads the source field and mesh, resamples the field onto the
//! target node counts, regenerates the mesh analytically over the
//! unchanged domain extents, and writes the pair at the next timestep.
//! The four steps run strictly in sequence; nothing is retried, and every
//! failure propagates with the context needed to diagnose it.
//!
//! The engine holds no state across invocations. Each call is a pure
//! transformation of one [`RemapRequest`] — concurrent invocations for
//! independent checkpoints need no coordination.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod error;
pub mod remap;
pub mod request;

pub use error::RemapError;
pub use remap::{remap, RemapSummary};
pub use request::{RemapRequest, TargetResolution, DEFAULT_FIELD_NAME};
