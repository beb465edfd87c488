//! # Primitive Walk
//!
//! Expands a primitive's grouped vertex runs into corner loops: ordered lists of
//! positions into the primitive's index arrays, one loop per emitted face or hole.
//!
//! The edge index and the face reconstructor both consume these loops, so the
//! edges extracted from a primitive are exactly the edges its faces reference.
//!
//! ## Loop rules
//!
//! - **Polygons / Polylist / Triangles**: one loop per run, negative runs are holes
//! - **Triangle fans**: `n - 2` triangles `(apex, v[i+1], v[i+2])` per group
//! - **Triangle strips**: `n - 2` triangles with alternating winding per group
//! - **Lines / line strips**: no loops

mod fans;
mod polygons;
mod strips;

use scene_ir::{MeshPrimitive, PrimitiveKind};

use crate::error::{ImportError, ImportResult};
use crate::topology::Edge;

/// Whether a loop is a face boundary or a hole of the preceding face.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoopKind {
    Face,
    Hole,
}

/// One face or hole boundary, as positions into the primitive's index arrays.
///
/// Corner `k` reads `position_indices[corners[k]]` for its vertex and the same
/// position of every uv and color index list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CornerLoop {
    pub kind: LoopKind,
    pub corners: Vec<usize>,
}

impl CornerLoop {
    pub fn face(corners: Vec<usize>) -> Self {
        Self {
            kind: LoopKind::Face,
            corners,
        }
    }

    pub fn hole(corners: Vec<usize>) -> Self {
        Self {
            kind: LoopKind::Hole,
            corners,
        }
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.corners.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.corners.is_empty()
    }

    /// Vertex position index of every corner, in loop order.
    pub fn vertices(&self, primitive: &MeshPrimitive) -> ImportResult<Vec<u32>> {
        self.corners
            .iter()
            .map(|&corner| primitive.position_index(corner).map_err(ImportError::from))
            .collect()
    }

    /// The loop's edges: consecutive corner pairs, wrapping back to the first.
    pub fn edges(&self, primitive: &MeshPrimitive) -> ImportResult<Vec<Edge>> {
        let vertices = self.vertices(primitive)?;
        let count = vertices.len();
        Ok((0..count)
            .map(|k| Edge::new(vertices[k], vertices[(k + 1) % count]))
            .collect())
    }
}

/// All loops of one primitive plus bookkeeping for skipped groups.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PrimitiveWalk {
    pub loops: Vec<CornerLoop>,
    /// Fan or strip groups with fewer than three vertices, or empty polygon runs.
    pub degenerate_groups: usize,
}

impl PrimitiveWalk {
    /// Number of faces (holes excluded).
    pub fn face_count(&self) -> usize {
        self.loops
            .iter()
            .filter(|lp| lp.kind == LoopKind::Face)
            .count()
    }
}

/// Walks the primitive at `primitive_index` according to its kind.
pub fn walk_primitive(
    primitive_index: usize,
    primitive: &MeshPrimitive,
) -> ImportResult<PrimitiveWalk> {
    match primitive.kind {
        PrimitiveKind::Polygons | PrimitiveKind::Polylist | PrimitiveKind::Triangles => {
            polygons::walk(primitive_index, primitive)
        }
        PrimitiveKind::TriangleFans => fans::walk(primitive_index, primitive),
        PrimitiveKind::TriangleStrips => strips::walk(primitive_index, primitive),
        PrimitiveKind::Lines | PrimitiveKind::LineStrips => Ok(PrimitiveWalk::default()),
    }
}

/// Validates that a run of `len` indices starting at `cursor` fits the primitive.
fn checked_run(
    primitive_index: usize,
    primitive: &MeshPrimitive,
    cursor: usize,
    len: usize,
) -> ImportResult<usize> {
    let end = cursor + len;
    let available = primitive.position_indices.len();
    if end > available {
        return Err(ImportError::invalid_topology(
            primitive_index,
            format!("run of {len} vertices at {cursor} exceeds {available} position indices"),
        ));
    }
    Ok(end)
}

/// Fan and strip groups must use non-negative counts.
fn group_len(primitive_index: usize, group: usize, count: i32) -> ImportResult<usize> {
    usize::try_from(count).map_err(|_| {
        ImportError::invalid_topology(
            primitive_index,
            format!("negative vertex count {count} in group {group}"),
        )
    })
}

/// Rejects primitives that have position indices but no grouped runs.
fn require_counts(
    primitive_index: usize,
    primitive: &MeshPrimitive,
    counts: &[i32],
) -> ImportResult<()> {
    if counts.is_empty() && !primitive.position_indices.is_empty() {
        return Err(ImportError::invalid_topology(
            primitive_index,
            format!(
                "{} primitive has {} position indices but no vertex counts",
                primitive.kind.name(),
                primitive.position_indices.len()
            ),
        ));
    }
    Ok(())
}

#[cfg(test)]
mod tests;
