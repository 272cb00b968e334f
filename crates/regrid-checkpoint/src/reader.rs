//! Checkpoint loading and timestep discovery.

use std::fs::File;
use std::io::BufReader;
use std::path::{Path, PathBuf};

use regrid_core::{AxisExtent, Extents, GridSpec, NodeCounts, ScalarField, Timestep};
use regrid_mesh::MeshGeometry;

use crate::attrs::{AttrValue, Attributes};
use crate::codec::{decode_field, decode_mesh};
use crate::error::StoreError;
use crate::types::Checkpoint;
use crate::{
    field_file_name, mesh_file_name, ATTR_CHECKPOINT_VERSION, ATTR_DIMENSIONALITY, ATTR_MAX,
    ATTR_MESH_RESOLUTION, ATTR_MIN,
};

/// Open a checkpoint file, mapping a missing file to
/// [`StoreError::NotFound`] with the attempted path.
fn open_file(path: &Path) -> Result<BufReader<File>, StoreError> {
    match File::open(path) {
        Ok(f) => Ok(BufReader::new(f)),
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => Err(StoreError::NotFound {
            path: path.to_path_buf(),
        }),
        Err(e) => Err(StoreError::Io {
            path: path.to_path_buf(),
            source: e,
        }),
    }
}

fn require_u32(attrs: &Attributes, path: &Path, name: &'static str) -> Result<u32, StoreError> {
    match attrs.get(name) {
        None => Err(StoreError::MissingAttribute {
            path: path.to_path_buf(),
            name,
        }),
        Some(v) => v.as_u32().ok_or_else(|| StoreError::MalformedAttribute {
            path: path.to_path_buf(),
            name,
            detail: "must be a u32 scalar".into(),
        }),
    }
}

fn require_u32_vec(
    attrs: &Attributes,
    path: &Path,
    name: &'static str,
) -> Result<Vec<u32>, StoreError> {
    match attrs.get(name) {
        None => Err(StoreError::MissingAttribute {
            path: path.to_path_buf(),
            name,
        }),
        Some(v) => v
            .as_u32_vec()
            .map(|v| v.to_vec())
            .ok_or_else(|| StoreError::MalformedAttribute {
                path: path.to_path_buf(),
                name,
                detail: "must be a u32 array".into(),
            }),
    }
}

fn require_f64_vec(
    attrs: &Attributes,
    path: &Path,
    name: &'static str,
) -> Result<Vec<f64>, StoreError> {
    match attrs.get(name) {
        None => Err(StoreError::MissingAttribute {
            path: path.to_path_buf(),
            name,
        }),
        Some(v) => v
            .as_f64_vec()
            .map(|v| v.to_vec())
            .ok_or_else(|| StoreError::MalformedAttribute {
                path: path.to_path_buf(),
                name,
                detail: "must be an f64 array".into(),
            }),
    }
}

/// Node counts from a `"mesh resolution"` attribute (element counts).
fn counts_from_resolution(
    resolution: &[u32],
    dims: u32,
    path: &Path,
) -> Result<NodeCounts, StoreError> {
    if resolution.len() != dims as usize {
        return Err(StoreError::MalformedAttribute {
            path: path.to_path_buf(),
            name: ATTR_MESH_RESOLUTION,
            detail: format!(
                "has {} entries but dimensionality is {dims}",
                resolution.len()
            ),
        });
    }
    Ok(resolution.iter().map(|&r| r + 1).collect())
}

/// Load the checkpoint at `timestep` from `dir`.
///
/// Reads the field file first, then the mesh file; each is opened, fully
/// decoded, and closed before the next. The two files are cross-checked:
/// dimensionality, mesh resolution, and checkpoint version must agree,
/// and the field length must match the mesh's node count.
///
/// # Errors
///
/// - [`StoreError::NotFound`] if either file is absent, quoting the
///   expected path.
/// - [`StoreError::Codec`] for unreadable or truncated files.
/// - [`StoreError::MissingAttribute`] / [`StoreError::MalformedAttribute`]
///   for broken metadata.
/// - [`StoreError::DimensionalityMismatch`] if the files disagree.
/// - [`StoreError::Grid`] / [`StoreError::Mesh`] if the decoded data
///   fails structural validation (including dimensionality outside 2–3).
pub fn load_checkpoint(
    dir: &Path,
    timestep: Timestep,
    field_name: &str,
) -> Result<Checkpoint, StoreError> {
    let field_path = dir.join(field_file_name(field_name, timestep));
    let mesh_path = dir.join(mesh_file_name(timestep));

    let mut reader = open_file(&field_path)?;
    let field_record = decode_field(&mut reader).map_err(|e| StoreError::Codec {
        path: field_path.clone(),
        source: e,
    })?;
    drop(reader);

    let mut reader = open_file(&mesh_path)?;
    let mesh_record = decode_mesh(&mut reader).map_err(|e| StoreError::Codec {
        path: mesh_path.clone(),
        source: e,
    })?;
    drop(reader);

    let field_dims = require_u32(&field_record.attrs, &field_path, ATTR_DIMENSIONALITY)?;
    let mesh_dims = require_u32(&mesh_record.attrs, &mesh_path, ATTR_DIMENSIONALITY)?;
    if field_dims != mesh_dims {
        return Err(StoreError::DimensionalityMismatch {
            field: field_dims,
            mesh: mesh_dims,
        });
    }

    let version = require_u32(&field_record.attrs, &field_path, ATTR_CHECKPOINT_VERSION)?;
    let mesh_version = require_u32(&mesh_record.attrs, &mesh_path, ATTR_CHECKPOINT_VERSION)?;
    if version != mesh_version {
        return Err(StoreError::MalformedAttribute {
            path: mesh_path,
            name: ATTR_CHECKPOINT_VERSION,
            detail: format!("is {mesh_version} but the field file records {version}"),
        });
    }

    let resolution = require_u32_vec(&mesh_record.attrs, &mesh_path, ATTR_MESH_RESOLUTION)?;
    let counts = counts_from_resolution(&resolution, mesh_dims, &mesh_path)?;

    let min = require_f64_vec(&mesh_record.attrs, &mesh_path, ATTR_MIN)?;
    let max = require_f64_vec(&mesh_record.attrs, &mesh_path, ATTR_MAX)?;
    if min.len() != max.len() {
        return Err(StoreError::MalformedAttribute {
            path: mesh_path,
            name: ATTR_MAX,
            detail: format!("has {} entries but \"min\" has {}", max.len(), min.len()),
        });
    }
    let extents: Extents = min
        .iter()
        .zip(&max)
        .map(|(&lo, &hi)| AxisExtent::new(lo, hi))
        .collect();

    let spec = GridSpec::new(counts, extents).map_err(|e| StoreError::Grid {
        path: mesh_path.clone(),
        source: e,
    })?;

    let field =
        ScalarField::new(spec.clone(), field_record.data).map_err(|e| StoreError::Grid {
            path: field_path.clone(),
            source: e,
        })?;

    let mesh = MeshGeometry::from_parts(spec, mesh_record.vertices, mesh_record.connectivity)
        .map_err(|e| StoreError::Mesh {
            path: mesh_path.clone(),
            source: e,
        })?;

    Ok(Checkpoint {
        field,
        mesh,
        timestep,
        version,
    })
}

/// Highest timestep with a field file in `dir`.
///
/// Scans for names matching `<field_name>.<digits>.ckp`, the convention
/// used by [`write_checkpoint`](crate::write_checkpoint). Useful for
/// picking up "the last equilibration output" without knowing its index.
///
/// # Errors
///
/// [`StoreError::NotFound`] if the directory does not exist or contains
/// no matching file; the error path names the directory joined with the
/// glob that was searched for.
pub fn latest_timestep(dir: &Path, field_name: &str) -> Result<Timestep, StoreError> {
    let entries = match std::fs::read_dir(dir) {
        Ok(entries) => entries,
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
            return Err(StoreError::NotFound {
                path: dir.to_path_buf(),
            })
        }
        Err(e) => {
            return Err(StoreError::Io {
                path: dir.to_path_buf(),
                source: e,
            })
        }
    };

    let mut latest: Option<u32> = None;
    for entry in entries {
        let entry = entry.map_err(|e| StoreError::Io {
            path: dir.to_path_buf(),
            source: e,
        })?;
        let name = entry.file_name();
        let Some(name) = name.to_str() else { continue };
        let Some(step) = parse_timestep(name, field_name) else {
            continue;
        };
        latest = Some(latest.map_or(step, |best| best.max(step)));
    }

    latest.map(Timestep).ok_or_else(|| StoreError::NotFound {
        path: search_pattern(dir, field_name),
    })
}

/// The glob-style path reported when no checkpoint matches.
fn search_pattern(dir: &Path, field_name: &str) -> PathBuf {
    dir.join(format!("{field_name}.*.ckp"))
}

/// Parse `<field_name>.<digits>.ckp` into a timestep index.
fn parse_timestep(name: &str, field_name: &str) -> Option<u32> {
    let rest = name.strip_prefix(field_name)?.strip_prefix('.')?;
    let digits = rest.strip_suffix(".ckp")?;
    if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    digits.parse().ok()
}
