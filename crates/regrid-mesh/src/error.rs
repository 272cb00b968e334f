//! Errors for mesh geometry validation.

use std::fmt;

/// Errors detected when pairing externally supplied mesh data with a grid.
///
/// [`MeshGeometry::regenerate`](crate::MeshGeometry::regenerate) cannot
/// fail — these arise only when adopting vertex and connectivity data
/// read from a checkpoint file.
#[derive(Clone, Debug, PartialEq)]
pub enum MeshError {
    /// The vertex array does not hold one d-tuple per grid node.
    VertexLengthMismatch {
        /// Expected number of coordinate values (`node_count · ndim`).
        expected: usize,
        /// Length of the array as given.
        actual: usize,
    },
    /// The connectivity array does not hold `2^d` indices per element.
    ConnectivityLengthMismatch {
        /// Expected number of indices (`element_count · 2^d`).
        expected: usize,
        /// Length of the array as given.
        actual: usize,
    },
    /// An element references a vertex outside the grid.
    VertexIndexOutOfRange {
        /// Flat element index.
        element: usize,
        /// The offending vertex index.
        index: u32,
        /// Number of vertices in the grid.
        node_count: usize,
    },
}

impl fmt::Display for MeshError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::VertexLengthMismatch { expected, actual } => {
                write!(
                    f,
                    "vertex array has {actual} coordinates, grid requires {expected}"
                )
            }
            Self::ConnectivityLengthMismatch { expected, actual } => {
                write!(
                    f,
                    "connectivity array has {actual} indices, grid requires {expected}"
                )
            }
            Self::VertexIndexOutOfRange {
                element,
                index,
                node_count,
            } => {
                write!(
                    f,
                    "element {element} references vertex {index}, \
                     but the grid has only {node_count} vertices"
                )
            }
        }
    }
}

impl std::error::Error for MeshError {}
