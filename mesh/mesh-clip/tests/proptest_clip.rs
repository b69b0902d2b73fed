//! Property-based tests for mesh clipping.
//!
//! These tests use proptest to generate random meshes and boxes and verify
//! the retention and face invariants.
//!
//! Run with: cargo test -p mesh-clip -- proptest

#![allow(clippy::unwrap_used, clippy::expect_used)]

use mesh_clip::{clip_mesh, ClipParams};
use mesh_types::{Aabb, IndexedMesh, Point3, Vector3, Vertex};
use proptest::prelude::*;

// =============================================================================
// Strategies
// =============================================================================

/// Generate a random vertex position in a bounded range.
fn arb_position() -> impl Strategy<Value = [f64; 3]> {
    prop::array::uniform3(-100.0..100.0f64)
}

/// Generate a mesh whose face indices are all valid (possibly degenerate).
fn arb_mesh(max_vertices: usize, max_faces: usize) -> impl Strategy<Value = IndexedMesh> {
    (1..=max_vertices).prop_flat_map(move |num_vertices| {
        let vertices = prop::collection::vec(arb_position(), num_vertices);
        let n = u32::try_from(num_vertices).unwrap();
        let faces = prop::collection::vec(prop::array::uniform3(0..n), 0..=max_faces);
        (vertices, faces).prop_map(|(positions, faces)| {
            let vertices = positions
                .into_iter()
                .map(|[x, y, z]| Vertex::from_coords(x, y, z))
                .collect();
            IndexedMesh::from_parts(vertices, faces)
        })
    })
}

/// Generate a box with ordered corners.
fn arb_box() -> impl Strategy<Value = Aabb> {
    (arb_position(), arb_position()).prop_map(|(a, b)| {
        Aabb::new(
            Point3::new(a[0].min(b[0]), a[1].min(b[1]), a[2].min(b[2])),
            Point3::new(a[0].max(b[0]), a[1].max(b[1]), a[2].max(b[2])),
        )
    })
}

fn arb_offset() -> impl Strategy<Value = Vector3<f64>> {
    arb_position().prop_map(|[x, y, z]| Vector3::new(x, y, z))
}

fn is_distinct([a, b, c]: [u32; 3]) -> bool {
    a != b && b != c && a != c
}

// =============================================================================
// Property Tests: Retention Map
// =============================================================================

proptest! {
    /// Every vertex is classified exactly once.
    #[test]
    fn partition_covers_every_vertex(mesh in arb_mesh(60, 80), bounds in arb_box()) {
        let out = clip_mesh(&mesh, &ClipParams::bounded(bounds)).unwrap();

        prop_assert_eq!(out.retention.len(), mesh.vertices.len());
        prop_assert_eq!(
            out.retention.kept_count() + out.retention.dropped_count(),
            mesh.vertices.len()
        );
        for (i, v) in mesh.vertices.iter().enumerate() {
            let i = u32::try_from(i).unwrap();
            prop_assert_eq!(out.retention.is_kept(i), bounds.contains(&v.position));
        }
    }

    /// New indices are exactly 0..kept_count, in original order.
    #[test]
    fn new_indices_are_dense(mesh in arb_mesh(60, 0), bounds in arb_box()) {
        let out = clip_mesh(&mesh, &ClipParams::bounded(bounds)).unwrap();

        let assigned: Vec<u32> = out.retention.iter().flatten().collect();
        let expected: Vec<u32> = (0..u32::try_from(out.kept_vertices()).unwrap()).collect();
        prop_assert_eq!(assigned, expected);
    }

    /// Kept vertices are the originals minus the offset.
    #[test]
    fn kept_vertices_are_offset(
        mesh in arb_mesh(40, 0),
        bounds in arb_box(),
        offset in arb_offset(),
    ) {
        let params = ClipParams::bounded(bounds).with_offset(offset);
        let out = clip_mesh(&mesh, &params).unwrap();

        for (i, slot) in out.retention.iter().enumerate() {
            if let Some(new) = slot {
                let expected = mesh.vertices[i].position - offset;
                prop_assert_eq!(out.mesh.vertices[new as usize].position, expected);
            }
        }
    }
}

// =============================================================================
// Property Tests: Faces
// =============================================================================

proptest! {
    /// Every output face has three distinct, in-range indices.
    #[test]
    fn faces_are_valid(mesh in arb_mesh(40, 120), bounds in arb_box()) {
        let out = clip_mesh(&mesh, &ClipParams::bounded(bounds)).unwrap();
        let n = out.kept_vertices();

        for &face in &out.mesh.faces {
            prop_assert!(face.iter().all(|&i| (i as usize) < n));
            prop_assert!(is_distinct(face));
        }
    }

    /// A face survives iff all three of its vertices were kept (and it is
    /// not degenerate); face count never grows.
    #[test]
    fn faces_are_conserved(mesh in arb_mesh(40, 120), bounds in arb_box()) {
        let out = clip_mesh(&mesh, &ClipParams::bounded(bounds)).unwrap();

        let expected: Vec<[u32; 3]> = mesh
            .faces
            .iter()
            .filter(|&&f| is_distinct(f))
            .filter_map(|&f| out.retention.remap_face(f))
            .collect();

        prop_assert_eq!(&out.mesh.faces, &expected);
        prop_assert!(out.kept_faces() <= mesh.faces.len());
        prop_assert_eq!(
            out.kept_faces() + out.faces_dropped_outside + out.faces_dropped_degenerate,
            mesh.faces.len()
        );
    }

    /// With bounds disabled, every vertex and every face comes through,
    /// repeated-index faces included.
    #[test]
    fn unbounded_is_identity(mesh in arb_mesh(40, 120), offset in arb_offset()) {
        let params = ClipParams::default().with_offset(offset);
        let out = clip_mesh(&mesh, &params).unwrap();

        prop_assert_eq!(out.kept_vertices(), mesh.vertices.len());
        prop_assert_eq!(out.kept_faces(), mesh.faces.len());
        prop_assert_eq!(&out.mesh.faces, &mesh.faces);
        prop_assert_eq!(out.faces_dropped_outside, 0);
        prop_assert_eq!(out.faces_dropped_degenerate, 0);
    }
}
