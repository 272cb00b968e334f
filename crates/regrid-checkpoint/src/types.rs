//! Record types mirroring the on-disk layout, and the semantic
//! [`Checkpoint`] pairing.

use crate::attrs::Attributes;
use regrid_core::{ScalarField, Timestep};
use regrid_mesh::MeshGeometry;

/// Kind tag for scalar-field files.
pub const KIND_FIELD: u8 = 0;

/// Kind tag for mesh files.
pub const KIND_MESH: u8 = 1;

/// Decoded contents of a scalar-field file.
///
/// This is the wire-level view: attributes plus the flat data array,
/// before any cross-file validation.
#[derive(Clone, Debug, PartialEq)]
pub struct FieldRecord {
    /// The file's attribute table.
    pub attrs: Attributes,
    /// Flat field values in node ordering.
    pub data: Vec<f64>,
}

/// Decoded contents of a mesh file.
#[derive(Clone, Debug, PartialEq)]
pub struct MeshRecord {
    /// The file's attribute table.
    pub attrs: Attributes,
    /// Coordinate values per vertex row.
    pub vertex_dims: u8,
    /// Flat vertex coordinates, `vertex_dims` values per row.
    pub vertices: Vec<f64>,
    /// Vertex indices per element row.
    pub verts_per_element: u8,
    /// Flat element connectivity, `verts_per_element` indices per row.
    pub connectivity: Vec<u32>,
}

/// A timestep-indexed snapshot pairing a scalar field with its mesh.
///
/// Checkpoints are read-only once produced: resampling consumes one and
/// writes a new one at the next timestep, never mutating the source.
#[derive(Clone, Debug, PartialEq)]
pub struct Checkpoint {
    /// The scalar field, index-aligned with the mesh vertices.
    pub field: ScalarField,
    /// The mesh geometry.
    pub mesh: MeshGeometry,
    /// The timestep this snapshot belongs to.
    pub timestep: Timestep,
    /// The solver's checkpoint version attribute, copied through
    /// resampling unchanged.
    pub version: u32,
}
