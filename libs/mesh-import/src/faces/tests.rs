//! Tests for face reconstruction.

use glam::DVec3;
use scene_ir::{IndexList, IrError, MeshPrimitive, PrimitiveKind, UniqueId, VertexData};

use super::*;

/// Quad `0..4` around the origin square of side 4, triangle `4..7` inside it.
/// Both wind counter-clockwise seen from +z.
fn quad_with_hole_positions() -> VertexData {
    VertexData::float(vec![
        0.0, 0.0, 0.0, //
        4.0, 0.0, 0.0, //
        4.0, 4.0, 0.0, //
        0.0, 4.0, 0.0, //
        1.0, 1.0, 0.0, //
        3.0, 1.0, 0.0, //
        2.0, 3.0, 0.0, //
    ])
}

fn quad_with_hole() -> Mesh {
    Mesh::new(UniqueId(2), "holed")
        .with_positions(quad_with_hole_positions())
        .with_uv_coords(VertexData::float(vec![0.0; 14]).with_input("map1", 2, 14))
        .with_primitive(
            MeshPrimitive::new(PrimitiveKind::Polygons, (0..7).collect())
                .with_vertex_counts(vec![4, -3])
                .with_uv_indices(IndexList::new("map1", 0, (0..7).collect())),
        )
}

fn build(mesh: &Mesh) -> (EdgeIndex, BuiltFaces, Diagnostics) {
    let edges = EdgeIndex::build(mesh).unwrap();
    let mut diagnostics = Diagnostics::new();
    let built = FaceBuilder::new(mesh, &edges).build(&mut diagnostics).unwrap();
    (edges, built, diagnostics)
}

fn raw(edges: &[SignedEdge]) -> Vec<i32> {
    edges.iter().map(|e| e.raw()).collect()
}

/// Vertex a signed reference starts from when walked in its direction.
fn traversal_start(index: &EdgeIndex, signed: SignedEdge) -> u32 {
    let [a, b] = index.edge(signed.index() as usize).unwrap();
    if signed.is_forward() { a } else { b }
}

/// Vertices a loop of signed edges visits, in traversal order.
fn loop_vertices(index: &EdgeIndex, edges: &[SignedEdge]) -> Vec<u32> {
    edges.iter().map(|e| traversal_start(index, *e)).collect()
}

fn loop_normal(mesh: &Mesh, vertices: &[u32]) -> DVec3 {
    let p: Vec<DVec3> = vertices[..3]
        .iter()
        .map(|v| mesh.position(*v as usize).unwrap())
        .collect();
    (p[1] - p[0]).cross(p[2] - p[0])
}

// =============================================================================
// POLYGONS
// =============================================================================

#[test]
fn test_single_quad_is_one_forward_face() {
    let mesh = Mesh::new(UniqueId(1), "quad")
        .with_positions(VertexData::float(vec![0.0; 12]))
        .with_primitive(
            MeshPrimitive::new(PrimitiveKind::Polygons, vec![0, 1, 2, 3])
                .with_vertex_counts(vec![4]),
        );
    let (edges, built, _) = build(&mesh);

    assert_eq!(edges.len(), 4);
    assert_eq!(built.len(), 1);
    let face = &built.faces[0];
    assert!(!face.has_holes());
    // 3 -> 0 closes the loop against the stored (0, 3) direction
    assert_eq!(raw(&face.edges), vec![0, 1, 2, -4]);
    assert_eq!(loop_vertices(&edges, &face.edges), vec![0, 1, 2, 3]);
}

#[test]
fn test_same_winding_hole_is_flipped() {
    let mesh = quad_with_hole();
    let (edges, built, _) = build(&mesh);

    assert_eq!(built.len(), 1);
    let face = &built.faces[0];
    assert_eq!(face.holes.len(), 1);
    // before correction the hole reads [4, 5, -7]
    assert_eq!(raw(&face.holes[0].edges), vec![6, -6, -5]);
    assert_eq!(loop_vertices(&edges, &face.holes[0].edges), vec![4, 6, 5]);
}

#[test]
fn test_corrected_hole_winds_against_its_face() {
    let mesh = quad_with_hole();
    let (edges, built, _) = build(&mesh);

    let face = &built.faces[0];
    let face_normal = loop_normal(&mesh, &loop_vertices(&edges, &face.edges));
    let hole_normal = loop_normal(&mesh, &loop_vertices(&edges, &face.holes[0].edges));
    assert!(face_normal.dot(hole_normal) <= 0.0);
}

#[test]
fn test_flipped_hole_keeps_uvs_on_their_vertices() {
    let mesh = quad_with_hole();
    let (edges, built, _) = build(&mesh);

    let hole = &built.faces[0].holes[0];
    assert_eq!(hole.uvs.len(), 1);
    // uv index == vertex index in this mesh
    assert_eq!(hole.uvs[0].indices, loop_vertices(&edges, &hole.edges));
}

#[test]
fn test_opposite_winding_hole_is_kept() {
    let mut mesh = quad_with_hole();
    mesh.primitives[0].position_indices = vec![0, 1, 2, 3, 4, 6, 5];
    let (_, built, _) = build(&mesh);
    // 4 -> 6 forward, 6 -> 5 backward, 5 -> 4 backward
    assert_eq!(raw(&built.faces[0].holes[0].edges), vec![4, -6, -7]);
}

#[test]
fn test_hole_correction_can_be_disabled() {
    let mesh = quad_with_hole();
    let edges = EdgeIndex::build(&mesh).unwrap();
    let built = FaceBuilder::new(&mesh, &edges)
        .with_hole_correction(false)
        .build(&mut Diagnostics::new())
        .unwrap();
    assert_eq!(raw(&built.faces[0].holes[0].edges), vec![4, 5, -7]);
}

// =============================================================================
// FANS, STRIPS, TRIANGLES
// =============================================================================

#[test]
fn test_fan_faces_share_apex_and_uvs() {
    let mesh = Mesh::new(UniqueId(3), "fan")
        .with_positions(VertexData::float(vec![0.0; 15]))
        .with_uv_coords(VertexData::float(vec![0.0; 10]).with_input("map1", 2, 10))
        .with_primitive(
            MeshPrimitive::new(PrimitiveKind::TriangleFans, vec![0, 1, 2, 3, 4])
                .with_vertex_counts(vec![5])
                .with_uv_indices(IndexList::new("map1", 10, vec![10, 11, 12, 13, 14])),
        );
    let (edges, built, _) = build(&mesh);

    assert_eq!(built.len(), 3);
    assert_eq!(built.face_count(0), 3);
    for face in &built.faces {
        assert_eq!(face.edges.len(), 3);
        assert_eq!(loop_vertices(&edges, &face.edges)[0], 0);
        assert_eq!(face.uvs[0].indices[0], 0);
    }
    assert_eq!(built.faces[2].uvs[0].indices, vec![0, 3, 4]);
}

#[test]
fn test_strip_faces_alternate_winding() {
    let mesh = Mesh::new(UniqueId(4), "strip")
        .with_positions(VertexData::float(vec![0.0; 15]))
        .with_primitive(
            MeshPrimitive::new(PrimitiveKind::TriangleStrips, vec![0, 1, 2, 3, 4])
                .with_vertex_counts(vec![5]),
        );
    let (edges, built, _) = build(&mesh);

    let loops: Vec<_> = built
        .faces
        .iter()
        .map(|face| loop_vertices(&edges, &face.edges))
        .collect();
    assert_eq!(loops, vec![vec![0, 1, 2], vec![2, 1, 3], vec![2, 3, 4]]);
}

#[test]
fn test_short_strip_group_is_reported() {
    let mesh = Mesh::new(UniqueId(4), "strip")
        .with_positions(VertexData::float(vec![0.0; 15]))
        .with_primitive(
            MeshPrimitive::new(PrimitiveKind::TriangleStrips, vec![0, 1, 2, 3, 4])
                .with_vertex_counts(vec![2, 3]),
        );
    let (_, built, diagnostics) = build(&mesh);
    assert_eq!(built.len(), 1);
    assert_eq!(diagnostics.warnings().count(), 1);
}

#[test]
fn test_every_face_edge_resolves_and_chains() {
    let mesh = quad_with_hole()
        .with_primitive(
            MeshPrimitive::new(PrimitiveKind::TriangleFans, vec![2, 1, 5, 6])
                .with_vertex_counts(vec![4]),
        )
        .with_primitive(
            MeshPrimitive::new(PrimitiveKind::TriangleStrips, vec![3, 2, 6, 4, 0])
                .with_vertex_counts(vec![5]),
        )
        .with_primitive(MeshPrimitive::new(PrimitiveKind::Triangles, vec![0, 4, 5, 5, 1, 0]));
    let (edges, built, _) = build(&mesh);

    assert_eq!(built.primitive_face_counts, vec![1, 2, 3, 2]);
    let loops = built
        .faces
        .iter()
        .flat_map(|face| std::iter::once(&face.edges).chain(face.holes.iter().map(|h| &h.edges)));
    for signed_loop in loops {
        for (k, edge) in signed_loop.iter().enumerate() {
            assert!(edges.edge(edge.index() as usize).is_some());
            let next = signed_loop[(k + 1) % signed_loop.len()];
            // end of this edge is the start of the next one
            assert_eq!(
                traversal_start(&edges, edge.reversed()),
                traversal_start(&edges, next)
            );
        }
    }
}

// =============================================================================
// SETS AND SKIPPED PRIMITIVES
// =============================================================================

#[test]
fn test_unknown_uv_set_is_skipped_with_warning() {
    let mut mesh = quad_with_hole();
    mesh.primitives[0].uv_indices[0].name = "missing".into();
    let (_, built, diagnostics) = build(&mesh);

    assert!(built.faces[0].uvs.is_empty());
    assert_eq!(diagnostics.warnings().count(), 1);
}

#[test]
fn test_color_indices_use_named_set() {
    let mesh = Mesh::new(UniqueId(5), "painted")
        .with_positions(VertexData::float(vec![0.0; 9]))
        .with_colors(
            VertexData::float(vec![0.0; 12])
                .with_input("base", 3, 3)
                .with_input("dirt", 3, 9),
        )
        .with_primitive(
            MeshPrimitive::new(PrimitiveKind::Triangles, vec![0, 1, 2])
                .with_color_indices(IndexList::new("dirt", 0, vec![2, 1, 0])),
        );
    let (_, built, _) = build(&mesh);
    assert_eq!(
        built.faces[0].colors,
        vec![SetIndices {
            set: 1,
            indices: vec![2, 1, 0]
        }]
    );
}

#[test]
fn test_index_below_initial_index_is_fatal() {
    let mut mesh = quad_with_hole();
    mesh.primitives[0].uv_indices[0].initial_index = 3;
    let edges = EdgeIndex::build(&mesh).unwrap();
    let err = FaceBuilder::new(&mesh, &edges)
        .build(&mut Diagnostics::new())
        .unwrap_err();
    assert!(matches!(err, ImportError::Data(IrError::BelowInitialIndex { .. })));
}

#[test]
fn test_line_primitives_emit_no_faces() {
    let mesh =
        quad_with_hole().with_primitive(MeshPrimitive::new(PrimitiveKind::Lines, vec![0, 1]));
    let (_, built, diagnostics) = build(&mesh);
    assert_eq!(built.primitive_face_counts, vec![1, 0]);
    assert_eq!(diagnostics.warnings().count(), 1);
}

#[test]
fn test_face_built_against_foreign_index_fails() {
    let mesh = quad_with_hole();
    let other = EdgeIndex::new();
    let err = FaceBuilder::new(&mesh, &other)
        .build(&mut Diagnostics::new())
        .unwrap_err();
    assert!(matches!(err, ImportError::EdgeNotFound { start: 0, end: 1 }));
}
