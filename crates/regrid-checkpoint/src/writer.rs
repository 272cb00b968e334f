//! Checkpoint writing with atomic two-file commit.

use std::fs::{self, File};
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

use crate::attrs::{AttrValue, Attributes};
use crate::codec::{encode_field, encode_mesh};
use crate::error::{CodecError, StoreError};
use crate::types::{Checkpoint, FieldRecord, MeshRecord};
use crate::{
    field_file_name, mesh_file_name, ATTR_CHECKPOINT_VERSION, ATTR_DIMENSIONALITY, ATTR_MAX,
    ATTR_MESH_RESOLUTION, ATTR_MIN,
};

/// Paths of a written checkpoint pair.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CheckpointPaths {
    /// The scalar-field file.
    pub field: PathBuf,
    /// The mesh file.
    pub mesh: PathBuf,
}

/// Shared attribute set derived from the checkpoint's grid.
fn base_attrs(checkpoint: &Checkpoint) -> Attributes {
    let spec = checkpoint.field.spec();
    let mut attrs = Attributes::new();
    attrs.insert(
        ATTR_DIMENSIONALITY,
        AttrValue::U32(spec.ndim() as u32),
    );
    attrs.insert(
        ATTR_MESH_RESOLUTION,
        AttrValue::U32Vec(spec.counts().iter().map(|&c| c - 1).collect()),
    );
    attrs.insert(
        ATTR_CHECKPOINT_VERSION,
        AttrValue::U32(checkpoint.version),
    );
    attrs
}

/// Write a checkpoint pair into `dir`, creating the directory if needed.
///
/// The `"mesh resolution"` attribute is recomputed from the checkpoint's
/// node counts; `"dimensionality"` and `"checkpoint version"` come from
/// the checkpoint itself. Files are staged under `.tmp` names and renamed
/// into place only after both encode successfully, so a failure leaves no
/// partial checkpoint in `dir`.
///
/// # Errors
///
/// [`StoreError::Io`] (with the destination path and underlying cause)
/// if the directory cannot be created or a file cannot be staged,
/// flushed, or renamed. Write failures are fatal; nothing retries.
pub fn write_checkpoint(
    dir: &Path,
    field_name: &str,
    checkpoint: &Checkpoint,
) -> Result<CheckpointPaths, StoreError> {
    fs::create_dir_all(dir).map_err(|e| StoreError::Io {
        path: dir.to_path_buf(),
        source: e,
    })?;

    let field_path = dir.join(field_file_name(field_name, checkpoint.timestep));
    let mesh_path = dir.join(mesh_file_name(checkpoint.timestep));
    let field_tmp = staging_path(&field_path);
    let mesh_tmp = staging_path(&mesh_path);

    let attrs = base_attrs(checkpoint);

    let field_record = FieldRecord {
        attrs: attrs.clone(),
        data: checkpoint.field.values().to_vec(),
    };

    let spec = checkpoint.field.spec();
    let mut mesh_attrs = attrs;
    mesh_attrs.insert(
        ATTR_MIN,
        AttrValue::F64Vec(spec.extents().iter().map(|e| e.min).collect()),
    );
    mesh_attrs.insert(
        ATTR_MAX,
        AttrValue::F64Vec(spec.extents().iter().map(|e| e.max).collect()),
    );
    let mesh_record = MeshRecord {
        attrs: mesh_attrs,
        vertex_dims: spec.ndim() as u8,
        vertices: checkpoint.mesh.vertices().to_vec(),
        verts_per_element: spec.verts_per_element() as u8,
        connectivity: checkpoint.mesh.connectivity().to_vec(),
    };

    let staged = stage_file(&field_tmp, |w| encode_field(w, &field_record))
        .and_then(|()| stage_file(&mesh_tmp, |w| encode_mesh(w, &mesh_record)));
    if let Err(e) = staged {
        discard(&field_tmp);
        discard(&mesh_tmp);
        return Err(e);
    }

    if let Err(e) = fs::rename(&field_tmp, &field_path) {
        discard(&field_tmp);
        discard(&mesh_tmp);
        return Err(StoreError::Io {
            path: field_path,
            source: e,
        });
    }
    if let Err(e) = fs::rename(&mesh_tmp, &mesh_path) {
        // Undo the half-committed pair so the directory never holds a
        // field file without its mesh.
        discard(&field_path);
        discard(&mesh_tmp);
        return Err(StoreError::Io {
            path: mesh_path,
            source: e,
        });
    }

    Ok(CheckpointPaths {
        field: field_path,
        mesh: mesh_path,
    })
}

/// Staging name alongside the final path: `<file>.tmp`.
fn staging_path(path: &Path) -> PathBuf {
    let mut name = path.file_name().unwrap_or_default().to_os_string();
    name.push(".tmp");
    path.with_file_name(name)
}

/// Create, encode, and flush one staged file.
fn stage_file(
    path: &Path,
    encode: impl FnOnce(&mut dyn Write) -> Result<(), CodecError>,
) -> Result<(), StoreError> {
    let io_err = |source| StoreError::Io {
        path: path.to_path_buf(),
        source,
    };
    let file = File::create(path).map_err(io_err)?;
    let mut writer = BufWriter::new(file);
    encode(&mut writer).map_err(|e| StoreError::Codec {
        path: path.to_path_buf(),
        source: e,
    })?;
    writer.flush().map_err(io_err)?;
    Ok(())
}

/// Best-effort removal of a staged or half-committed file.
fn discard(path: &Path) {
    let _ = fs::remove_file(path);
}
