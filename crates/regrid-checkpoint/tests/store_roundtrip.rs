//! On-disk behavior of the checkpoint store: round-trips, missing files,
//! broken metadata, and timestep discovery.

use std::fs;
use std::path::{Path, PathBuf};

use regrid_checkpoint::codec::{encode_field, encode_mesh};
use regrid_checkpoint::types::{FieldRecord, MeshRecord};
use regrid_checkpoint::{
    field_file_name, latest_timestep, load_checkpoint, mesh_file_name, write_checkpoint,
    AttrValue, Attributes, Checkpoint, CodecError, StoreError, ATTR_CHECKPOINT_VERSION,
    ATTR_DIMENSIONALITY, ATTR_MAX, ATTR_MESH_RESOLUTION, ATTR_MIN,
};
use regrid_core::{AxisExtent, GridSpec, ScalarField, Timestep};
use regrid_mesh::MeshGeometry;
use smallvec::smallvec;

/// Unique scratch directory, removed on drop.
struct ScratchDir(PathBuf);

impl ScratchDir {
    fn new(tag: &str) -> Self {
        let path = std::env::temp_dir().join(format!(
            "regrid-checkpoint-{tag}-{}",
            std::process::id()
        ));
        let _ = fs::remove_dir_all(&path);
        fs::create_dir_all(&path).unwrap();
        Self(path)
    }

    fn path(&self) -> &Path {
        &self.0
    }
}

impl Drop for ScratchDir {
    fn drop(&mut self) {
        let _ = fs::remove_dir_all(&self.0);
    }
}

/// The 5×5 ramp checkpoint over [0,4]×[0,4] at the given timestep.
fn ramp_checkpoint(timestep: Timestep) -> Checkpoint {
    let spec = GridSpec::new(
        smallvec![5, 5],
        smallvec![AxisExtent::new(0.0, 4.0), AxisExtent::new(0.0, 4.0)],
    )
    .unwrap();
    let field = ScalarField::new(spec.clone(), (0..25).map(f64::from).collect()).unwrap();
    let mesh = MeshGeometry::regenerate(&spec);
    Checkpoint {
        field,
        mesh,
        timestep,
        version: 2,
    }
}

#[test]
fn write_then_load_round_trips() {
    let dir = ScratchDir::new("roundtrip");
    let checkpoint = ramp_checkpoint(Timestep(3));

    let paths = write_checkpoint(dir.path(), "TemperatureField", &checkpoint).unwrap();
    assert_eq!(
        paths.field.file_name().unwrap(),
        "TemperatureField.00003.ckp"
    );
    assert_eq!(paths.mesh.file_name().unwrap(), "Mesh.00003.ckp");

    let loaded = load_checkpoint(dir.path(), Timestep(3), "TemperatureField").unwrap();
    assert_eq!(loaded, checkpoint);

    // No staging residue.
    for entry in fs::read_dir(dir.path()).unwrap() {
        let name = entry.unwrap().file_name();
        assert!(!name.to_string_lossy().ends_with(".tmp"), "left {name:?}");
    }
}

#[test]
fn missing_mesh_file_is_not_found_with_path() {
    let dir = ScratchDir::new("missing-mesh");
    let checkpoint = ramp_checkpoint(Timestep(5));
    let paths = write_checkpoint(dir.path(), "TemperatureField", &checkpoint).unwrap();
    fs::remove_file(&paths.mesh).unwrap();

    let err = load_checkpoint(dir.path(), Timestep(5), "TemperatureField").unwrap_err();
    match err {
        StoreError::NotFound { path } => assert_eq!(path, paths.mesh),
        other => panic!("expected NotFound, got {other:?}"),
    }
}

#[test]
fn missing_field_file_is_not_found_with_path() {
    let dir = ScratchDir::new("missing-field");
    let err = load_checkpoint(dir.path(), Timestep(0), "TemperatureField").unwrap_err();
    match err {
        StoreError::NotFound { path } => {
            assert_eq!(
                path,
                dir.path().join(field_file_name("TemperatureField", Timestep(0)))
            );
        }
        other => panic!("expected NotFound, got {other:?}"),
    }
}

#[test]
fn corrupt_magic_is_a_codec_error() {
    let dir = ScratchDir::new("corrupt");
    let checkpoint = ramp_checkpoint(Timestep(1));
    let paths = write_checkpoint(dir.path(), "TemperatureField", &checkpoint).unwrap();

    let mut bytes = fs::read(&paths.field).unwrap();
    bytes[0] = b'X';
    fs::write(&paths.field, bytes).unwrap();

    let err = load_checkpoint(dir.path(), Timestep(1), "TemperatureField").unwrap_err();
    match err {
        StoreError::Codec { path, source } => {
            assert_eq!(path, paths.field);
            assert!(matches!(source, CodecError::InvalidMagic));
        }
        other => panic!("expected Codec, got {other:?}"),
    }
}

/// Hand-write a file pair where the field file lacks `dimensionality`.
#[test]
fn missing_attribute_is_reported_by_name() {
    let dir = ScratchDir::new("missing-attr");
    let checkpoint = ramp_checkpoint(Timestep(2));
    write_checkpoint(dir.path(), "TemperatureField", &checkpoint).unwrap();

    // Replace the field file with one whose attribute table is empty.
    let record = FieldRecord {
        attrs: Attributes::new(),
        data: checkpoint.field.values().to_vec(),
    };
    let mut buf = Vec::new();
    encode_field(&mut buf, &record).unwrap();
    let field_path = dir
        .path()
        .join(field_file_name("TemperatureField", Timestep(2)));
    fs::write(&field_path, buf).unwrap();

    let err = load_checkpoint(dir.path(), Timestep(2), "TemperatureField").unwrap_err();
    match err {
        StoreError::MissingAttribute { path, name } => {
            assert_eq!(path, field_path);
            assert_eq!(name, ATTR_DIMENSIONALITY);
        }
        other => panic!("expected MissingAttribute, got {other:?}"),
    }
}

/// Hand-write a mesh file disagreeing with the field file on rank.
#[test]
fn field_mesh_dimensionality_mismatch_is_detected() {
    let dir = ScratchDir::new("dims-mismatch");
    let checkpoint = ramp_checkpoint(Timestep(4));
    write_checkpoint(dir.path(), "TemperatureField", &checkpoint).unwrap();

    let mut attrs = Attributes::new();
    attrs.insert(ATTR_DIMENSIONALITY, AttrValue::U32(3));
    attrs.insert(ATTR_MESH_RESOLUTION, AttrValue::U32Vec(vec![4, 4, 4]));
    attrs.insert(ATTR_CHECKPOINT_VERSION, AttrValue::U32(2));
    attrs.insert(ATTR_MIN, AttrValue::F64Vec(vec![0.0; 3]));
    attrs.insert(ATTR_MAX, AttrValue::F64Vec(vec![4.0; 3]));
    let record = MeshRecord {
        attrs,
        vertex_dims: 3,
        vertices: vec![],
        verts_per_element: 8,
        connectivity: vec![],
    };
    let mut buf = Vec::new();
    encode_mesh(&mut buf, &record).unwrap();
    fs::write(dir.path().join(mesh_file_name(Timestep(4))), buf).unwrap();

    let err = load_checkpoint(dir.path(), Timestep(4), "TemperatureField").unwrap_err();
    assert!(matches!(
        err,
        StoreError::DimensionalityMismatch { field: 2, mesh: 3 }
    ));
}

#[test]
fn latest_timestep_finds_the_highest() {
    let dir = ScratchDir::new("latest");
    for step in [3u32, 7, 5] {
        let checkpoint = ramp_checkpoint(Timestep(step));
        write_checkpoint(dir.path(), "TemperatureField", &checkpoint).unwrap();
    }

    assert_eq!(
        latest_timestep(dir.path(), "TemperatureField").unwrap(),
        Timestep(7)
    );
}

#[test]
fn latest_timestep_on_missing_dir_names_it() {
    let missing = std::env::temp_dir().join(format!(
        "regrid-checkpoint-no-such-dir-{}",
        std::process::id()
    ));
    let err = latest_timestep(&missing, "TemperatureField").unwrap_err();
    match err {
        StoreError::NotFound { path } => assert_eq!(path, missing),
        other => panic!("expected NotFound, got {other:?}"),
    }
}

#[test]
fn latest_timestep_with_no_matches_reports_the_pattern() {
    let dir = ScratchDir::new("no-matches");
    fs::write(dir.path().join("notes.txt"), b"not a checkpoint").unwrap();

    let err = latest_timestep(dir.path(), "TemperatureField").unwrap_err();
    match err {
        StoreError::NotFound { path } => {
            assert_eq!(path, dir.path().join("TemperatureField.*.ckp"));
        }
        other => panic!("expected NotFound, got {other:?}"),
    }
}

#[test]
fn unwritable_destination_is_an_io_error() {
    let dir = ScratchDir::new("unwritable");
    // A plain file where the destination directory should be.
    let blocked = dir.path().join("occupied");
    fs::write(&blocked, b"").unwrap();

    let checkpoint = ramp_checkpoint(Timestep(0));
    let err = write_checkpoint(&blocked, "TemperatureField", &checkpoint).unwrap_err();
    assert!(matches!(err, StoreError::Io { .. }));
}
