//! Criterion micro-benchmarks for the checkpoint codec.

use criterion::{criterion_group, criterion_main, Criterion};
use regrid_bench::equilibration_2d;
use regrid_checkpoint::codec::{decode_field, decode_mesh, encode_field, encode_mesh};
use regrid_checkpoint::types::{FieldRecord, MeshRecord};
use regrid_checkpoint::{
    AttrValue, Attributes, ATTR_CHECKPOINT_VERSION, ATTR_DIMENSIONALITY, ATTR_MAX,
    ATTR_MESH_RESOLUTION, ATTR_MIN,
};
use regrid_mesh::MeshGeometry;
use std::hint::black_box;

fn field_record() -> FieldRecord {
    let field = equilibration_2d();
    let mut attrs = Attributes::new();
    attrs.insert(ATTR_DIMENSIONALITY, AttrValue::U32(2));
    attrs.insert(ATTR_MESH_RESOLUTION, AttrValue::U32Vec(vec![64, 64]));
    attrs.insert(ATTR_CHECKPOINT_VERSION, AttrValue::U32(2));
    FieldRecord {
        attrs,
        data: field.values().to_vec(),
    }
}

fn mesh_record() -> MeshRecord {
    let field = equilibration_2d();
    let spec = field.spec();
    let mesh = MeshGeometry::regenerate(spec);
    let mut attrs = Attributes::new();
    attrs.insert(ATTR_DIMENSIONALITY, AttrValue::U32(2));
    attrs.insert(ATTR_MESH_RESOLUTION, AttrValue::U32Vec(vec![64, 64]));
    attrs.insert(ATTR_CHECKPOINT_VERSION, AttrValue::U32(2));
    attrs.insert(ATTR_MIN, AttrValue::F64Vec(vec![0.0, 0.0]));
    attrs.insert(ATTR_MAX, AttrValue::F64Vec(vec![64.0, 64.0]));
    MeshRecord {
        attrs,
        vertex_dims: 2,
        vertices: mesh.vertices().to_vec(),
        verts_per_element: 4,
        connectivity: mesh.connectivity().to_vec(),
    }
}

/// Benchmark: encode a 65×65 field record to memory.
fn bench_encode_field(c: &mut Criterion) {
    let record = field_record();

    c.bench_function("encode_field_65x65", |b| {
        b.iter(|| {
            let mut buf = Vec::with_capacity(64 * 1024);
            encode_field(&mut buf, black_box(&record)).unwrap();
            black_box(buf);
        });
    });
}

/// Benchmark: decode a 65×65 field record from memory.
fn bench_decode_field(c: &mut Criterion) {
    let record = field_record();
    let mut buf = Vec::new();
    encode_field(&mut buf, &record).unwrap();

    c.bench_function("decode_field_65x65", |b| {
        b.iter(|| {
            let got = decode_field(&mut black_box(buf.as_slice())).unwrap();
            black_box(got);
        });
    });
}

/// Benchmark: encode + decode a 65×65 mesh record.
fn bench_mesh_roundtrip(c: &mut Criterion) {
    let record = mesh_record();

    c.bench_function("mesh_codec_roundtrip_65x65", |b| {
        b.iter(|| {
            let mut buf = Vec::with_capacity(256 * 1024);
            encode_mesh(&mut buf, black_box(&record)).unwrap();
            let got = decode_mesh(&mut buf.as_slice()).unwrap();
            black_box(got);
        });
    });
}

criterion_group!(
    benches,
    bench_encode_field,
    bench_decode_field,
    bench_mesh_roundtrip,
);
criterion_main!(benches);
