//! Error types for the checkpoint store.

use regrid_core::GridError;
use regrid_mesh::MeshError;
use std::fmt;
use std::io;
use std::path::PathBuf;

/// Errors from the stream-level codec.
///
/// Codec functions operate on `Read`/`Write` and do not know which file
/// they are decoding; [`StoreError::Codec`] attaches the path.
#[derive(Debug)]
pub enum CodecError {
    /// An I/O error occurred during read or write.
    Io(io::Error),
    /// The stream does not start with the expected `b"RGRD"` magic bytes.
    InvalidMagic,
    /// The wire-format revision is not supported by this build.
    UnsupportedVersion {
        /// The revision found in the stream.
        found: u8,
    },
    /// The file holds the other kind of record (field vs. mesh).
    UnexpectedKind {
        /// The kind tag required by the caller.
        expected: u8,
        /// The kind tag found in the stream.
        found: u8,
    },
    /// Truncated or corrupt data.
    Malformed {
        /// Human-readable description of what went wrong.
        detail: String,
    },
}

impl fmt::Display for CodecError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Io(e) => write!(f, "I/O error: {e}"),
            Self::InvalidMagic => write!(f, "invalid magic bytes (expected b\"RGRD\")"),
            Self::UnsupportedVersion { found } => {
                write!(f, "unsupported store version {found}")
            }
            Self::UnexpectedKind { expected, found } => {
                write!(f, "expected record kind {expected}, found {found}")
            }
            Self::Malformed { detail } => write!(f, "malformed data: {detail}"),
        }
    }
}

impl std::error::Error for CodecError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io(e) => Some(e),
            _ => None,
        }
    }
}

impl From<io::Error> for CodecError {
    fn from(e: io::Error) -> Self {
        Self::Io(e)
    }
}

/// Errors from loading or writing checkpoint files.
///
/// Every variant carries the path (or paths' metadata) needed to diagnose
/// the failure without re-running.
#[derive(Debug)]
pub enum StoreError {
    /// An expected checkpoint file is absent.
    NotFound {
        /// The path that was looked up.
        path: PathBuf,
    },
    /// An I/O operation failed.
    Io {
        /// The file or directory being accessed.
        path: PathBuf,
        /// The underlying cause.
        source: io::Error,
    },
    /// A file exists but could not be decoded.
    Codec {
        /// The offending file.
        path: PathBuf,
        /// The underlying codec failure.
        source: CodecError,
    },
    /// A required attribute is absent.
    MissingAttribute {
        /// The offending file.
        path: PathBuf,
        /// The attribute that was looked up.
        name: &'static str,
    },
    /// A required attribute has the wrong type or shape.
    MalformedAttribute {
        /// The offending file.
        path: PathBuf,
        /// The attribute that was looked up.
        name: &'static str,
        /// What was wrong with it.
        detail: String,
    },
    /// The field and mesh files disagree on dimensionality.
    DimensionalityMismatch {
        /// Dimensionality recorded in the field file.
        field: u32,
        /// Dimensionality recorded in the mesh file.
        mesh: u32,
    },
    /// Decoded grid metadata failed validation.
    Grid {
        /// The offending file.
        path: PathBuf,
        /// The underlying validation failure.
        source: GridError,
    },
    /// Decoded mesh data failed validation.
    Mesh {
        /// The offending file.
        path: PathBuf,
        /// The underlying validation failure.
        source: MeshError,
    },
}

impl fmt::Display for StoreError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NotFound { path } => {
                write!(f, "checkpoint file not found: {}", path.display())
            }
            Self::Io { path, source } => {
                write!(f, "I/O error on {}: {source}", path.display())
            }
            Self::Codec { path, source } => {
                write!(f, "checkpoint file {}: {source}", path.display())
            }
            Self::MissingAttribute { path, name } => {
                write!(
                    f,
                    "checkpoint file {} is missing the \"{name}\" attribute",
                    path.display()
                )
            }
            Self::MalformedAttribute { path, name, detail } => {
                write!(
                    f,
                    "checkpoint file {}: attribute \"{name}\" {detail}",
                    path.display()
                )
            }
            Self::DimensionalityMismatch { field, mesh } => {
                write!(
                    f,
                    "field file records dimensionality {field} but mesh file records {mesh}"
                )
            }
            Self::Grid { path, source } => {
                write!(f, "checkpoint file {}: {source}", path.display())
            }
            Self::Mesh { path, source } => {
                write!(f, "checkpoint file {}: {source}", path.display())
            }
        }
    }
}

impl std::error::Error for StoreError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io { source, .. } => Some(source),
            Self::Codec { source, .. } => Some(source),
            Self::Grid { source, .. } => Some(source),
            Self::Mesh { source, .. } => Some(source),
            _ => None,
        }
    }
}
