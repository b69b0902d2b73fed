//! End-to-end extraction tests: source → clip → color → OBJ/MTL on disk.

#![allow(clippy::unwrap_used)]

use std::path::Path;

use approx::assert_relative_eq;
use mesh_clip::ClipParams;
use mesh_extract::{
    ExtractConfig, ExtractError, Extractor, InMemorySource, SegmentError, SegmentStage,
    SourceError,
};
use mesh_io::load_obj;
use mesh_material::ColorMap;
use mesh_types::{Aabb, IndexedMesh, MeshTopology, Rgb, SegmentId, Vector3};
use tempfile::tempdir;

const A: SegmentId = SegmentId::new(101);
const B: SegmentId = SegmentId::new(202);

/// Vertices (0,0,0), (5,5,5), (10,10,10) and the triangle joining them.
fn diagonal_mesh() -> IndexedMesh {
    IndexedMesh::from_flat(&[0.0, 0.0, 0.0, 5.0, 5.0, 5.0, 10.0, 10.0, 10.0], &[0, 1, 2]).unwrap()
}

fn config_for(dir: &Path, bounds: Option<Aabb>) -> ExtractConfig {
    let clip = match bounds {
        Some(b) => ClipParams::bounded(b),
        None => ClipParams::default(),
    };
    ExtractConfig::default().with_output_dir(dir).with_clip(clip)
}

#[test]
fn box_cutting_a_triangle_drops_it() {
    let dir = tempdir().unwrap();
    let source: InMemorySource = [(A, diagonal_mesh())].into_iter().collect();
    let config = config_for(
        dir.path(),
        Some(Aabb::from_arrays([0.0, 0.0, 0.0], [6.0, 6.0, 6.0])),
    );
    let extractor = Extractor::builder()
        .source(&source)
        .config(config)
        .build()
        .unwrap();

    let out = extractor.extract_segment(A).unwrap();
    assert_eq!(out.vertices, 2);
    assert_eq!(out.faces, 0);

    let written = load_obj(&out.files.obj).unwrap();
    assert_eq!(written.vertex_count(), 2);
    assert_eq!(written.face_count(), 0);
    assert_relative_eq!(written.vertices[1].position.x, 5.0);
}

#[test]
fn box_holding_everything_keeps_mesh() {
    let dir = tempdir().unwrap();
    let source: InMemorySource = [(A, diagonal_mesh())].into_iter().collect();
    let config = config_for(
        dir.path(),
        Some(Aabb::from_arrays([0.0, 0.0, 0.0], [10.0, 10.0, 10.0])),
    );
    let extractor = Extractor::builder()
        .source(&source)
        .config(config)
        .build()
        .unwrap();

    let out = extractor.extract_segment(A).unwrap();
    let written = load_obj(&out.files.obj).unwrap();
    assert_eq!(written.faces, vec![[0, 1, 2]]);
    for (w, r) in written.vertices.iter().zip(&diagonal_mesh().vertices) {
        assert_eq!(w.position, r.position);
    }
}

#[test]
fn offset_applies_after_box_test() {
    let dir = tempdir().unwrap();
    let source: InMemorySource = [(A, diagonal_mesh())].into_iter().collect();
    let config = config_for(
        dir.path(),
        Some(Aabb::from_arrays([4.0, 4.0, 4.0], [10.0, 10.0, 10.0])),
    );
    let config = ExtractConfig {
        clip: config.clip.with_offset(Vector3::new(5.0, 5.0, 5.0)),
        ..config
    };
    let extractor = Extractor::builder()
        .source(&source)
        .config(config)
        .build()
        .unwrap();

    let written = load_obj(extractor.extract_segment(A).unwrap().files.obj).unwrap();
    assert_eq!(written.vertex_count(), 2);
    assert_relative_eq!(written.vertices[0].position.x, 0.0);
    assert_relative_eq!(written.vertices[1].position.z, 5.0);
}

#[test]
fn failed_fetch_does_not_stop_batch() {
    let dir = tempdir().unwrap();
    let source = |id: SegmentId| -> Result<IndexedMesh, SourceError> {
        if id == A {
            Err(SourceError::Transient {
                id,
                message: "service unavailable".into(),
            })
        } else {
            Ok(diagonal_mesh())
        }
    };
    let extractor = Extractor::builder()
        .source(&source)
        .config(config_for(dir.path(), None))
        .build()
        .unwrap();

    let report = extractor.run(&[A, B]).unwrap();
    assert_eq!(report.failure_count(), 1);
    assert_eq!(report.success_count(), 1);

    let failure = report.failed().next().unwrap();
    assert_eq!(failure.id, A);
    assert_eq!(failure.stage, SegmentStage::Pending);
    assert!(matches!(failure.cause, SegmentError::Fetch(_)));

    assert!(!dir.path().join("seg_101.obj").exists());
    assert!(dir.path().join("seg_202.obj").exists());
    assert!(dir.path().join("seg_202.mtl").exists());
}

#[test]
fn unknown_segment_is_white() {
    let dir = tempdir().unwrap();
    let source: InMemorySource = [(A, diagonal_mesh()), (B, diagonal_mesh())]
        .into_iter()
        .collect();
    let colors: ColorMap = [(A, Rgb::new(1.0, 0.0, 0.0))].into_iter().collect();
    let extractor = Extractor::builder()
        .source(&source)
        .colors(&colors)
        .config(config_for(dir.path(), None))
        .build()
        .unwrap();

    let report = extractor.run(&[A, B]).unwrap();
    assert!(report.all_succeeded());

    let red = load_obj(dir.path().join("seg_101.obj")).unwrap();
    assert!(red
        .vertices
        .iter()
        .all(|v| v.color == Some(Rgb::new(1.0, 0.0, 0.0))));

    let white = load_obj(dir.path().join("seg_202.obj")).unwrap();
    assert!(white.vertices.iter().all(|v| v.color == Some(Rgb::WHITE)));

    let mtl = std::fs::read_to_string(dir.path().join("seg_202.mtl")).unwrap();
    assert!(mtl.contains("Kd 1.000000 1.000000 1.000000"));
}

#[test]
fn obj_references_its_own_material() {
    let dir = tempdir().unwrap();
    let source: InMemorySource = [(B, diagonal_mesh())].into_iter().collect();
    let extractor = Extractor::builder()
        .source(&source)
        .config(config_for(dir.path(), None))
        .build()
        .unwrap();

    let out = extractor.extract_segment(B).unwrap();
    let obj = std::fs::read_to_string(&out.files.obj).unwrap();
    let head: Vec<&str> = obj.lines().take(2).collect();
    assert_eq!(head, vec!["mtllib seg_202.mtl", "usemtl SegmentMaterial_202"]);

    let mtl = std::fs::read_to_string(&out.files.mtl).unwrap();
    assert!(mtl.starts_with("newmtl SegmentMaterial_202\n"));
}

#[test]
fn parallel_run_keeps_input_order() {
    let dir = tempdir().unwrap();
    let ids: Vec<SegmentId> = (1..=16).map(SegmentId::new).collect();
    let source: InMemorySource = ids
        .iter()
        .filter(|id| id.get() % 4 != 0)
        .map(|&id| (id, diagonal_mesh()))
        .collect();
    let config = config_for(dir.path(), None)
        .with_parallel(true)
        .with_num_threads(4);
    let extractor = Extractor::builder()
        .source(&source)
        .config(config)
        .build()
        .unwrap();

    let report = extractor.run(&ids).unwrap();
    assert_eq!(report.outcomes.len(), ids.len());
    for (outcome, id) in report.outcomes.iter().zip(&ids) {
        match outcome {
            Ok(out) => assert_eq!(out.id, *id),
            Err(failure) => {
                assert_eq!(failure.id, *id);
                assert_eq!(id.get() % 4, 0);
            }
        }
    }
    assert_eq!(report.failure_count(), 4);
    assert_eq!(report.summary().succeeded, 12);
}

#[test]
fn empty_batch_is_rejected() {
    let source = InMemorySource::new();
    let extractor = Extractor::builder().source(&source).build().unwrap();
    assert!(matches!(extractor.run(&[]), Err(ExtractError::EmptyBatch)));
}

#[test]
fn missing_source_is_rejected() {
    let result = Extractor::builder()
        .config(ExtractConfig::default())
        .build();
    assert!(matches!(result, Err(ExtractError::MissingSource)));
}
