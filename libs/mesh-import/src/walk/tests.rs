//! Tests for primitive walking.

use scene_ir::{MeshPrimitive, PrimitiveKind};

use super::*;
use crate::error::ImportError;

fn fan(counts: Vec<i32>) -> MeshPrimitive {
    let total: i32 = counts.iter().sum();
    MeshPrimitive::new(PrimitiveKind::TriangleFans, (0..total as u32).collect())
        .with_vertex_counts(counts)
}

fn strip(counts: Vec<i32>) -> MeshPrimitive {
    let total: i32 = counts.iter().sum();
    MeshPrimitive::new(PrimitiveKind::TriangleStrips, (0..total as u32).collect())
        .with_vertex_counts(counts)
}

// =============================================================================
// POLYGONS
// =============================================================================

#[test]
fn test_quad_is_one_face_loop() {
    let prim =
        MeshPrimitive::new(PrimitiveKind::Polygons, vec![0, 1, 2, 3]).with_vertex_counts(vec![4]);
    let walk = walk_primitive(0, &prim).unwrap();
    assert_eq!(walk.loops, vec![CornerLoop::face(vec![0, 1, 2, 3])]);
    assert_eq!(walk.face_count(), 1);
}

#[test]
fn test_hole_follows_face() {
    let prim = MeshPrimitive::new(PrimitiveKind::Polygons, (0..7).collect())
        .with_vertex_counts(vec![4, -3]);
    let walk = walk_primitive(0, &prim).unwrap();
    assert_eq!(walk.loops.len(), 2);
    assert_eq!(walk.loops[1], CornerLoop::hole(vec![4, 5, 6]));
    // Holes do not count as faces
    assert_eq!(walk.face_count(), 1);
}

#[test]
fn test_leading_hole_is_rejected() {
    let prim =
        MeshPrimitive::new(PrimitiveKind::Polygons, (0..3).collect()).with_vertex_counts(vec![-3]);
    let err = walk_primitive(4, &prim).unwrap_err();
    assert!(matches!(err, ImportError::InvalidTopology { primitive: 4, .. }));
}

#[test]
fn test_consecutive_holes_attach_to_the_same_face() {
    let prim = MeshPrimitive::new(PrimitiveKind::Polygons, (0..13).collect())
        .with_vertex_counts(vec![4, -3, -3, 3]);
    let walk = walk_primitive(0, &prim).unwrap();
    let kinds: Vec<_> = walk.loops.iter().map(|lp| lp.kind).collect();
    assert_eq!(
        kinds,
        vec![LoopKind::Face, LoopKind::Hole, LoopKind::Hole, LoopKind::Face]
    );
    assert_eq!(walk.face_count(), 2);
}

#[test]
fn test_hole_after_empty_run_is_rejected() {
    // an empty run is not a face a hole could belong to
    let prim = MeshPrimitive::new(PrimitiveKind::Polygons, (0..3).collect())
        .with_vertex_counts(vec![0, -3]);
    assert!(matches!(
        walk_primitive(2, &prim),
        Err(ImportError::InvalidTopology { primitive: 2, .. })
    ));
}

#[test]
fn test_hole_in_polylist_is_rejected() {
    let prim = MeshPrimitive::new(PrimitiveKind::Polylist, (0..6).collect())
        .with_vertex_counts(vec![3, -3]);
    assert!(walk_primitive(0, &prim).is_err());
}

#[test]
fn test_run_past_end_is_rejected() {
    let prim =
        MeshPrimitive::new(PrimitiveKind::Polylist, vec![0, 1, 2]).with_vertex_counts(vec![4]);
    assert!(matches!(
        walk_primitive(0, &prim),
        Err(ImportError::InvalidTopology { .. })
    ));
}

#[test]
fn test_missing_counts_are_rejected_for_polylist() {
    let prim = MeshPrimitive::new(PrimitiveKind::Polylist, vec![0, 1, 2]);
    assert!(walk_primitive(0, &prim).is_err());
}

#[test]
fn test_triangles_without_counts_use_runs_of_three() {
    let prim = MeshPrimitive::new(PrimitiveKind::Triangles, vec![0, 1, 2, 2, 1, 3]);
    let walk = walk_primitive(0, &prim).unwrap();
    assert_eq!(
        walk.loops,
        vec![CornerLoop::face(vec![0, 1, 2]), CornerLoop::face(vec![3, 4, 5])]
    );
}

#[test]
fn test_empty_run_is_counted_as_degenerate() {
    let prim =
        MeshPrimitive::new(PrimitiveKind::Polylist, vec![0, 1, 2]).with_vertex_counts(vec![0, 3]);
    let walk = walk_primitive(0, &prim).unwrap();
    assert_eq!(walk.face_count(), 1);
    assert_eq!(walk.degenerate_groups, 1);
}

// =============================================================================
// FANS AND STRIPS
// =============================================================================

#[test]
fn test_fan_triangles_share_apex() {
    let walk = walk_primitive(0, &fan(vec![5])).unwrap();
    assert_eq!(walk.face_count(), 3);
    for lp in &walk.loops {
        assert_eq!(lp.corners[0], 0);
        assert_eq!(lp.len(), 3);
    }
    assert_eq!(walk.loops[2].corners, vec![0, 3, 4]);
}

#[test]
fn test_second_fan_has_its_own_apex() {
    let walk = walk_primitive(0, &fan(vec![4, 3])).unwrap();
    assert_eq!(walk.face_count(), 3);
    assert_eq!(walk.loops[2].corners, vec![4, 5, 6]);
}

#[test]
fn test_strip_alternates_winding() {
    let walk = walk_primitive(0, &strip(vec![5])).unwrap();
    let corners: Vec<_> = walk.loops.iter().map(|lp| lp.corners.clone()).collect();
    assert_eq!(corners, vec![vec![0, 1, 2], vec![2, 1, 3], vec![2, 3, 4]]);
}

#[test]
fn test_strip_triangles_share_an_edge_with_predecessor() {
    let prim = strip(vec![6]);
    let walk = walk_primitive(0, &prim).unwrap();
    for pair in walk.loops.windows(2) {
        let previous = pair[0].edges(&prim).unwrap();
        let current = pair[1].edges(&prim).unwrap();
        assert!(current.iter().any(|edge| previous.contains(edge)));
    }
}

#[test]
fn test_fan_and_strip_produce_n_minus_two_triangles() {
    for n in 3..12 {
        let expected = (n - 2) as usize;
        assert_eq!(
            walk_primitive(0, &fan(vec![n])).unwrap().face_count(),
            expected
        );
        assert_eq!(
            walk_primitive(0, &strip(vec![n])).unwrap().face_count(),
            expected
        );
    }
}

#[test]
fn test_short_fan_group_is_degenerate() {
    let walk = walk_primitive(0, &fan(vec![2, 3])).unwrap();
    assert_eq!(walk.face_count(), 1);
    assert_eq!(walk.degenerate_groups, 1);
    assert_eq!(walk.loops[0].corners, vec![2, 3, 4]);
}

#[test]
fn test_negative_strip_count_is_rejected() {
    let prim = MeshPrimitive::new(PrimitiveKind::TriangleStrips, vec![0, 1, 2])
        .with_vertex_counts(vec![-3]);
    assert!(walk_primitive(0, &prim).is_err());
}

#[test]
fn test_lines_have_no_loops() {
    let prim = MeshPrimitive::new(PrimitiveKind::Lines, vec![0, 1, 1, 2]);
    assert_eq!(walk_primitive(0, &prim).unwrap(), PrimitiveWalk::default());
}

// =============================================================================
// LOOP EDGES
// =============================================================================

#[test]
fn test_loop_edges_wrap_around() {
    let prim =
        MeshPrimitive::new(PrimitiveKind::Polygons, vec![7, 3, 9]).with_vertex_counts(vec![3]);
    let edges = CornerLoop::face(vec![0, 1, 2]).edges(&prim).unwrap();
    let pairs: Vec<_> = edges.iter().map(|e| (e.start(), e.end())).collect();
    assert_eq!(pairs, vec![(7, 3), (3, 9), (9, 7)]);
}
