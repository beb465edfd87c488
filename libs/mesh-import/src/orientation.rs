//! # Hole Orientation
//!
//! A hole must wind opposite to the face that owns it. Windings are compared
//! through the normals `(p2 - p1) × (p3 - p1)` of the first three points of the
//! face and of the hole.

use config::constants::ORIENTATION_POINT_COUNT;
use glam::DVec3;

use crate::topology::SignedEdge;

/// Fixed-capacity buffer of the leading points of a face or hole.
///
/// Points beyond the capacity are ignored, so callers can push every corner
/// without checking.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct OrientationPoints {
    points: [DVec3; ORIENTATION_POINT_COUNT],
    len: usize,
}

impl OrientationPoints {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds the buffer from the first points of `points`.
    pub fn from_points(points: &[DVec3]) -> Self {
        let mut buffer = Self::new();
        for point in points {
            buffer.push(*point);
        }
        buffer
    }

    pub fn clear(&mut self) {
        self.len = 0;
    }

    pub fn push(&mut self, point: DVec3) {
        if self.len < ORIENTATION_POINT_COUNT {
            self.points[self.len] = point;
            self.len += 1;
        }
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.len
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    #[inline]
    pub fn is_complete(&self) -> bool {
        self.len == ORIENTATION_POINT_COUNT
    }

    /// Unnormalized winding normal, or `None` until three points are stored.
    pub fn normal(&self) -> Option<DVec3> {
        if !self.is_complete() {
            return None;
        }
        let [p1, p2, p3] = self.points;
        Some((p2 - p1).cross(p3 - p1))
    }
}

/// Returns true when the hole winds the same way as its face and must be flipped.
///
/// Degenerate inputs (fewer than three points on either side) never flip.
///
/// # Example
///
/// ```rust
/// use glam::DVec3;
/// use mesh_import::orientation::{change_hole_orientation, OrientationPoints};
///
/// let ccw = OrientationPoints::from_points(&[DVec3::ZERO, DVec3::X, DVec3::Y]);
/// let cw = OrientationPoints::from_points(&[DVec3::ZERO, DVec3::Y, DVec3::X]);
/// assert!(change_hole_orientation(&ccw, &ccw));
/// assert!(!change_hole_orientation(&ccw, &cw));
/// ```
pub fn change_hole_orientation(face: &OrientationPoints, hole: &OrientationPoints) -> bool {
    match (face.normal(), hole.normal()) {
        (Some(face_normal), Some(hole_normal)) => face_normal.dot(hole_normal) > 0.0,
        _ => false,
    }
}

/// Reverses a hole's edge loop in place.
///
/// The order is reversed and every reference switches direction
/// (`v -> -(v + 1)`), so the loop visits the same edges the other way round.
pub fn flip_hole_orientation(edges: &mut [SignedEdge]) {
    edges.reverse();
    for edge in edges.iter_mut() {
        *edge = edge.reversed();
    }
}

/// Reorders per-corner values of a loop to match [`flip_hole_orientation`].
///
/// Corner `k` of the flipped loop is corner `(n - k) % n` of the original: the
/// first vertex stays in place and the rest run backwards.
pub fn flip_corner_values<T: Copy>(values: &mut [T]) {
    if values.len() > 1 {
        values[1..].reverse();
    }
}
