//! The [`MeshGeometry`] type: explicit vertices plus element connectivity.

use crate::connectivity::element_connectivity;
use crate::error::MeshError;
use crate::vertices::vertex_lattice;
use regrid_core::GridSpec;

/// Explicit mesh geometry for a structured grid.
///
/// Vertices are flat d-tuples in node ordering (index-aligned with the
/// grid's scalar field); connectivity is flat `2^d`-tuples of vertex
/// indices in the crate's winding convention.
///
/// # Examples
///
/// ```
/// use regrid_core::{AxisExtent, GridSpec};
/// use regrid_mesh::MeshGeometry;
/// use smallvec::smallvec;
///
/// let spec = GridSpec::new(
///     smallvec![9, 9],
///     smallvec![AxisExtent::new(0.0, 4.0), AxisExtent::new(0.0, 4.0)],
/// )
/// .unwrap();
/// let mesh = MeshGeometry::regenerate(&spec);
///
/// assert_eq!(mesh.vertex_count(), 81);
/// assert_eq!(mesh.element_count(), 64);
/// assert_eq!(mesh.vertex(0), &[0.0, 0.0]);
/// assert_eq!(mesh.vertex(80), &[4.0, 4.0]);
/// ```
#[derive(Clone, Debug, PartialEq)]
pub struct MeshGeometry {
    spec: GridSpec,
    vertices: Vec<f64>,
    connectivity: Vec<u32>,
}

impl MeshGeometry {
    /// Rebuild the mesh for a grid from scratch.
    ///
    /// Infallible: every structural precondition is already guaranteed by
    /// [`GridSpec`] construction. A grid with a single-node axis yields a
    /// mesh with zero elements.
    pub fn regenerate(spec: &GridSpec) -> Self {
        Self {
            vertices: vertex_lattice(spec),
            connectivity: element_connectivity(spec),
            spec: spec.clone(),
        }
    }

    /// Adopt vertex and connectivity data read from a checkpoint.
    ///
    /// Validates the array lengths against the grid and every referenced
    /// vertex index against the node count.
    pub fn from_parts(
        spec: GridSpec,
        vertices: Vec<f64>,
        connectivity: Vec<u32>,
    ) -> Result<Self, MeshError> {
        let want_coords = spec.node_count() * spec.ndim();
        if vertices.len() != want_coords {
            return Err(MeshError::VertexLengthMismatch {
                expected: want_coords,
                actual: vertices.len(),
            });
        }
        let want_indices = spec.element_count() * spec.verts_per_element();
        if connectivity.len() != want_indices {
            return Err(MeshError::ConnectivityLengthMismatch {
                expected: want_indices,
                actual: connectivity.len(),
            });
        }
        let node_count = spec.node_count();
        let per_element = spec.verts_per_element();
        for (i, &index) in connectivity.iter().enumerate() {
            if index as usize >= node_count {
                return Err(MeshError::VertexIndexOutOfRange {
                    element: i / per_element,
                    index,
                    node_count,
                });
            }
        }
        Ok(Self {
            spec,
            vertices,
            connectivity,
        })
    }

    /// The grid this mesh realizes.
    pub fn spec(&self) -> &GridSpec {
        &self.spec
    }

    /// Flat vertex coordinates, `ndim` values per vertex.
    pub fn vertices(&self) -> &[f64] {
        &self.vertices
    }

    /// Flat element connectivity, `2^d` indices per element.
    pub fn connectivity(&self) -> &[u32] {
        &self.connectivity
    }

    /// Number of vertices.
    pub fn vertex_count(&self) -> usize {
        self.vertices.len() / self.spec.ndim()
    }

    /// Number of elements.
    pub fn element_count(&self) -> usize {
        self.connectivity.len() / self.spec.verts_per_element()
    }

    /// Coordinates of vertex `i`.
    pub fn vertex(&self, i: usize) -> &[f64] {
        let d = self.spec.ndim();
        &self.vertices[i * d..(i + 1) * d]
    }

    /// Vertex indices of element `e`.
    pub fn element(&self, e: usize) -> &[u32] {
        let k = self.spec.verts_per_element();
        &self.connectivity[e * k..(e + 1) * k]
    }
}
