//! Binary encode/decode for checkpoint files.
//!
//! All integers are little-endian. Attribute names are length-prefixed
//! UTF-8; arrays are length-prefixed with a `u32` (attributes) or `u64`
//! (datasets). See the crate docs for the full layout.

use std::io::{Read, Write};

use crate::attrs::{AttrValue, Attributes};
use crate::error::CodecError;
use crate::types::{FieldRecord, MeshRecord, KIND_FIELD, KIND_MESH};
use crate::{MAGIC, STORE_VERSION};

// ── Primitive writers ───────────────────────────────────────────

/// Write a single byte.
pub fn write_u8(w: &mut dyn Write, v: u8) -> Result<(), CodecError> {
    w.write_all(&[v])?;
    Ok(())
}

/// Write a little-endian u32.
pub fn write_u32_le(w: &mut dyn Write, v: u32) -> Result<(), CodecError> {
    w.write_all(&v.to_le_bytes())?;
    Ok(())
}

/// Write a little-endian u64.
pub fn write_u64_le(w: &mut dyn Write, v: u64) -> Result<(), CodecError> {
    w.write_all(&v.to_le_bytes())?;
    Ok(())
}

/// Write a little-endian f64.
pub fn write_f64_le(w: &mut dyn Write, v: f64) -> Result<(), CodecError> {
    w.write_all(&v.to_le_bytes())?;
    Ok(())
}

/// Write a length-prefixed UTF-8 string (u32 length + bytes).
pub fn write_length_prefixed_str(w: &mut dyn Write, s: &str) -> Result<(), CodecError> {
    write_u32_le(w, s.len() as u32)?;
    w.write_all(s.as_bytes())?;
    Ok(())
}

// ── Primitive readers ───────────────────────────────────────────

/// Read a single byte.
pub fn read_u8(r: &mut dyn Read) -> Result<u8, CodecError> {
    let mut buf = [0u8; 1];
    r.read_exact(&mut buf)?;
    Ok(buf[0])
}

/// Read a little-endian u32.
pub fn read_u32_le(r: &mut dyn Read) -> Result<u32, CodecError> {
    let mut buf = [0u8; 4];
    r.read_exact(&mut buf)?;
    Ok(u32::from_le_bytes(buf))
}

/// Read a little-endian u64.
pub fn read_u64_le(r: &mut dyn Read) -> Result<u64, CodecError> {
    let mut buf = [0u8; 8];
    r.read_exact(&mut buf)?;
    Ok(u64::from_le_bytes(buf))
}

/// Read a little-endian f64.
pub fn read_f64_le(r: &mut dyn Read) -> Result<f64, CodecError> {
    let mut buf = [0u8; 8];
    r.read_exact(&mut buf)?;
    Ok(f64::from_le_bytes(buf))
}

/// Read a length-prefixed UTF-8 string.
pub fn read_length_prefixed_str(r: &mut dyn Read) -> Result<String, CodecError> {
    let len = read_u32_le(r)? as usize;
    let mut buf = vec![0u8; len];
    r.read_exact(&mut buf)?;
    String::from_utf8(buf).map_err(|e| CodecError::Malformed {
        detail: format!("invalid UTF-8 attribute name: {e}"),
    })
}

// ── Attribute table ─────────────────────────────────────────────

/// Encode an attribute table in insertion order.
pub fn encode_attributes(w: &mut dyn Write, attrs: &Attributes) -> Result<(), CodecError> {
    write_u32_le(w, attrs.len() as u32)?;
    for (name, value) in attrs.iter() {
        write_length_prefixed_str(w, name)?;
        write_u8(w, value.tag())?;
        match value {
            AttrValue::U32(v) => write_u32_le(w, *v)?,
            AttrValue::U32Vec(v) => {
                write_u32_le(w, v.len() as u32)?;
                for &x in v {
                    write_u32_le(w, x)?;
                }
            }
            AttrValue::F64Vec(v) => {
                write_u32_le(w, v.len() as u32)?;
                for &x in v {
                    write_f64_le(w, x)?;
                }
            }
        }
    }
    Ok(())
}

/// Decode an attribute table.
pub fn decode_attributes(r: &mut dyn Read) -> Result<Attributes, CodecError> {
    let count = read_u32_le(r)?;
    let mut attrs = Attributes::new();
    for _ in 0..count {
        let name = read_length_prefixed_str(r)?;
        let value = match read_u8(r)? {
            0 => AttrValue::U32(read_u32_le(r)?),
            1 => {
                let len = read_u32_le(r)? as usize;
                let mut v = Vec::with_capacity(len);
                for _ in 0..len {
                    v.push(read_u32_le(r)?);
                }
                AttrValue::U32Vec(v)
            }
            2 => {
                let len = read_u32_le(r)? as usize;
                let mut v = Vec::with_capacity(len);
                for _ in 0..len {
                    v.push(read_f64_le(r)?);
                }
                AttrValue::F64Vec(v)
            }
            tag => {
                return Err(CodecError::Malformed {
                    detail: format!("unknown attribute type tag {tag} for \"{name}\""),
                })
            }
        };
        attrs.insert(name, value);
    }
    Ok(attrs)
}

// ── Header ──────────────────────────────────────────────────────

/// Write the magic bytes, store version, and record kind.
fn encode_header(w: &mut dyn Write, kind: u8) -> Result<(), CodecError> {
    w.write_all(&MAGIC)?;
    write_u8(w, STORE_VERSION)?;
    write_u8(w, kind)?;
    Ok(())
}

/// Validate the magic bytes, store version, and record kind.
fn decode_header(r: &mut dyn Read, expected_kind: u8) -> Result<(), CodecError> {
    let mut magic = [0u8; 4];
    r.read_exact(&mut magic)?;
    if magic != MAGIC {
        return Err(CodecError::InvalidMagic);
    }
    let version = read_u8(r)?;
    if version != STORE_VERSION {
        return Err(CodecError::UnsupportedVersion { found: version });
    }
    let kind = read_u8(r)?;
    if kind != expected_kind {
        return Err(CodecError::UnexpectedKind {
            expected: expected_kind,
            found: kind,
        });
    }
    Ok(())
}

// ── Datasets ────────────────────────────────────────────────────

/// Read a `u64` dataset length into a `usize`.
fn read_dataset_len(r: &mut dyn Read, what: &str) -> Result<usize, CodecError> {
    let len = read_u64_le(r)?;
    usize::try_from(len).map_err(|_| CodecError::Malformed {
        detail: format!("{what} length {len} exceeds the address space"),
    })
}

fn write_f64_dataset(w: &mut dyn Write, data: &[f64]) -> Result<(), CodecError> {
    write_u64_le(w, data.len() as u64)?;
    for &v in data {
        write_f64_le(w, v)?;
    }
    Ok(())
}

fn read_f64_dataset(r: &mut dyn Read, len: usize) -> Result<Vec<f64>, CodecError> {
    let mut data = Vec::with_capacity(len);
    for _ in 0..len {
        data.push(read_f64_le(r)?);
    }
    Ok(data)
}

// ── Field files ─────────────────────────────────────────────────

/// Encode a complete scalar-field file.
pub fn encode_field(w: &mut dyn Write, record: &FieldRecord) -> Result<(), CodecError> {
    encode_header(w, KIND_FIELD)?;
    encode_attributes(w, &record.attrs)?;
    write_f64_dataset(w, &record.data)
}

/// Decode a complete scalar-field file.
pub fn decode_field(r: &mut dyn Read) -> Result<FieldRecord, CodecError> {
    decode_header(r, KIND_FIELD)?;
    let attrs = decode_attributes(r)?;
    let len = read_dataset_len(r, "field data")?;
    let data = read_f64_dataset(r, len)?;
    Ok(FieldRecord { attrs, data })
}

// ── Mesh files ──────────────────────────────────────────────────

/// Encode a complete mesh file.
pub fn encode_mesh(w: &mut dyn Write, record: &MeshRecord) -> Result<(), CodecError> {
    encode_header(w, KIND_MESH)?;
    encode_attributes(w, &record.attrs)?;

    let vertex_rows = record.vertices.len() / record.vertex_dims.max(1) as usize;
    write_u64_le(w, vertex_rows as u64)?;
    write_u8(w, record.vertex_dims)?;
    for &v in &record.vertices {
        write_f64_le(w, v)?;
    }

    let element_rows = record.connectivity.len() / record.verts_per_element.max(1) as usize;
    write_u64_le(w, element_rows as u64)?;
    write_u8(w, record.verts_per_element)?;
    for &v in &record.connectivity {
        write_u32_le(w, v)?;
    }
    Ok(())
}

/// Decode a complete mesh file.
pub fn decode_mesh(r: &mut dyn Read) -> Result<MeshRecord, CodecError> {
    decode_header(r, KIND_MESH)?;
    let attrs = decode_attributes(r)?;

    let vertex_rows = read_dataset_len(r, "vertex")?;
    let vertex_dims = read_u8(r)?;
    let vertices = read_f64_dataset(
        r,
        vertex_rows
            .checked_mul(vertex_dims as usize)
            .ok_or_else(|| CodecError::Malformed {
                detail: format!("vertex dataset {vertex_rows}×{vertex_dims} overflows"),
            })?,
    )?;

    let element_rows = read_dataset_len(r, "connectivity")?;
    let verts_per_element = read_u8(r)?;
    let index_count = element_rows
        .checked_mul(verts_per_element as usize)
        .ok_or_else(|| CodecError::Malformed {
            detail: format!("connectivity dataset {element_rows}×{verts_per_element} overflows"),
        })?;
    let mut connectivity = Vec::with_capacity(index_count);
    for _ in 0..index_count {
        connectivity.push(read_u32_le(r)?);
    }

    Ok(MeshRecord {
        attrs,
        vertex_dims,
        vertices,
        verts_per_element,
        connectivity,
    })
}
