//! # Face Reconstruction
//!
//! Rebuilds every face of a mesh as a list of signed edge references into the
//! [`EdgeIndex`], with polygon holes attached to their face and per-corner uv
//! and color indices carried alongside.
//!
//! ## Pipeline
//!
//! ```text
//! primitive → walk (corner loops) → signed edges + set indices → FaceRecord
//!                                        ↓ (hole loops)
//!                              orientation check → flip
//! ```
//!
//! Faces are emitted primitive by primitive, so each primitive owns a
//! contiguous range of the face list. [`BuiltFaces::face_count`] exposes the
//! range sizes for object groups.

use config::constants::ORIENTATION_POINT_COUNT;
use pipeline_types::Stage;
use scene_ir::{IndexList, Mesh, MeshPrimitive, PrimitiveKind};
use serde::{Deserialize, Serialize};

use crate::diagnostics::Diagnostics;
use crate::error::{ImportError, ImportResult};
use crate::orientation::{
    change_hole_orientation, flip_corner_values, flip_hole_orientation, OrientationPoints,
};
use crate::topology::{EdgeIndex, SignedEdge};
use crate::walk::{walk_primitive, CornerLoop, LoopKind};

// =============================================================================
// RECORDS
// =============================================================================

/// Per-corner indices of one uv or color set.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SetIndices {
    /// Set number, the index of the set's input in the mesh buffer.
    pub set: usize,
    /// One index per edge of the loop, rebased to the set's first value.
    pub indices: Vec<u32>,
}

/// A hole of a polygon face.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct HoleRecord {
    pub edges: Vec<SignedEdge>,
    pub uvs: Vec<SetIndices>,
    pub colors: Vec<SetIndices>,
}

/// One output face.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct FaceRecord {
    pub edges: Vec<SignedEdge>,
    pub holes: Vec<HoleRecord>,
    pub uvs: Vec<SetIndices>,
    pub colors: Vec<SetIndices>,
}

impl FaceRecord {
    pub fn has_holes(&self) -> bool {
        !self.holes.is_empty()
    }
}

/// All faces of a mesh plus the number each primitive contributed.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct BuiltFaces {
    pub faces: Vec<FaceRecord>,
    pub primitive_face_counts: Vec<usize>,
}

impl BuiltFaces {
    /// Faces emitted by `primitive`; zero for unknown primitives.
    pub fn face_count(&self, primitive: usize) -> usize {
        self.primitive_face_counts.get(primitive).copied().unwrap_or(0)
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.faces.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.faces.is_empty()
    }
}

// =============================================================================
// BUILDER
// =============================================================================

/// Uv or color index list of a primitive, resolved to its set number.
struct BoundSet<'a> {
    set: usize,
    list: &'a IndexList,
}

impl BoundSet<'_> {
    fn corner_indices(&self, corners: &[usize]) -> ImportResult<SetIndices> {
        let indices = corners
            .iter()
            .map(|&corner| self.list.rebased(corner).map_err(ImportError::from))
            .collect::<ImportResult<Vec<_>>>()?;
        Ok(SetIndices {
            set: self.set,
            indices,
        })
    }
}

/// Builds the face list of one mesh against its edge index.
///
/// # Example
///
/// ```rust
/// use mesh_import::diagnostics::Diagnostics;
/// use mesh_import::faces::FaceBuilder;
/// use mesh_import::topology::EdgeIndex;
/// use scene_ir::{Mesh, MeshPrimitive, PrimitiveKind, UniqueId, VertexData};
///
/// let mesh = Mesh::new(UniqueId(1), "quad")
///     .with_positions(VertexData::float(vec![0.0; 12]))
///     .with_primitive(
///         MeshPrimitive::new(PrimitiveKind::Polygons, vec![0, 1, 2, 3])
///             .with_vertex_counts(vec![4]),
///     );
/// let edges = EdgeIndex::build(&mesh).unwrap();
/// let built = FaceBuilder::new(&mesh, &edges)
///     .build(&mut Diagnostics::new())
///     .unwrap();
/// assert_eq!(built.len(), 1);
/// assert_eq!(built.faces[0].edges.len(), 4);
/// ```
pub struct FaceBuilder<'a> {
    mesh: &'a Mesh,
    edge_index: &'a EdgeIndex,
    correct_holes: bool,
}

impl<'a> FaceBuilder<'a> {
    pub fn new(mesh: &'a Mesh, edge_index: &'a EdgeIndex) -> Self {
        Self {
            mesh,
            edge_index,
            correct_holes: true,
        }
    }

    /// Enables or disables flipping of holes that wind like their face.
    pub fn with_hole_correction(mut self, enabled: bool) -> Self {
        self.correct_holes = enabled;
        self
    }

    pub fn build(&self, diagnostics: &mut Diagnostics) -> ImportResult<BuiltFaces> {
        let mut built = BuiltFaces::default();
        for (primitive_index, primitive) in self.mesh.primitives.iter().enumerate() {
            let before = built.faces.len();
            if primitive.kind.is_surface() {
                self.build_primitive(primitive_index, primitive, &mut built.faces, diagnostics)?;
            } else {
                diagnostics.warn(
                    Stage::Faces,
                    &self.mesh.label(),
                    format!("Import of {} not supported!", primitive.kind.name()),
                );
            }
            built.primitive_face_counts.push(built.faces.len() - before);
        }

        log::debug!(
            "built {} faces for {} over {} primitives",
            built.faces.len(),
            self.mesh.label(),
            self.mesh.primitives.len()
        );
        Ok(built)
    }

    fn build_primitive(
        &self,
        primitive_index: usize,
        primitive: &MeshPrimitive,
        faces: &mut Vec<FaceRecord>,
        diagnostics: &mut Diagnostics,
    ) -> ImportResult<()> {
        let walk = walk_primitive(primitive_index, primitive)?;
        if walk.degenerate_groups > 0 {
            diagnostics.warn(
                Stage::Faces,
                &self.mesh.label(),
                format!(
                    "{} vertex groups of {} primitive {} are too short for a face",
                    walk.degenerate_groups,
                    primitive.kind.name(),
                    primitive_index
                ),
            );
        }

        let uv_sets = self.bind_sets(&primitive.uv_indices, "uv", diagnostics, |name| {
            self.mesh.uv_set_index(name)
        });
        let color_sets = self.bind_sets(&primitive.color_indices, "color", diagnostics, |name| {
            self.mesh.color_set_index(name)
        });

        let first_face = faces.len();
        let caches_points = primitive.kind == PrimitiveKind::Polygons;
        let mut face_points = OrientationPoints::new();

        for corner_loop in &walk.loops {
            let edges = self.signed_edges(corner_loop, primitive)?;
            let uvs = corner_sets(&uv_sets, &corner_loop.corners)?;
            let colors = corner_sets(&color_sets, &corner_loop.corners)?;

            match corner_loop.kind {
                LoopKind::Face => {
                    if caches_points {
                        face_points.clear();
                        self.cache_points(corner_loop, primitive, &mut face_points)?;
                    }
                    faces.push(FaceRecord {
                        edges,
                        holes: Vec::new(),
                        uvs,
                        colors,
                    });
                }
                LoopKind::Hole => {
                    let mut hole = HoleRecord { edges, uvs, colors };
                    if self.correct_holes {
                        let mut hole_points = OrientationPoints::new();
                        self.cache_points(corner_loop, primitive, &mut hole_points)?;
                        if change_hole_orientation(&face_points, &hole_points) {
                            flip_hole(&mut hole);
                        }
                    }

                    if faces.len() == first_face {
                        return Err(ImportError::invalid_topology(
                            primitive_index,
                            "hole run without a preceding face",
                        ));
                    }
                    if let Some(face) = faces.last_mut() {
                        face.holes.push(hole);
                    }
                }
            }
        }
        Ok(())
    }

    /// Resolves each index list to the set of the same name.
    ///
    /// Lists naming an unknown set are reported and dropped.
    fn bind_sets<'p>(
        &self,
        lists: &'p [IndexList],
        kind: &str,
        diagnostics: &mut Diagnostics,
        lookup: impl Fn(&str) -> Option<usize>,
    ) -> Vec<BoundSet<'p>> {
        lists
            .iter()
            .filter_map(|list| match lookup(&list.name) {
                Some(set) => Some(BoundSet { set, list }),
                None => {
                    diagnostics.warn(
                        Stage::Faces,
                        &self.mesh.label(),
                        format!("No {kind} set named '{}', its indices are ignored", list.name),
                    );
                    None
                }
            })
            .collect()
    }

    fn signed_edges(
        &self,
        corner_loop: &CornerLoop,
        primitive: &MeshPrimitive,
    ) -> ImportResult<Vec<SignedEdge>> {
        corner_loop
            .edges(primitive)?
            .into_iter()
            .map(|edge| self.edge_index.signed(edge))
            .collect()
    }

    fn cache_points(
        &self,
        corner_loop: &CornerLoop,
        primitive: &MeshPrimitive,
        points: &mut OrientationPoints,
    ) -> ImportResult<()> {
        for &corner in corner_loop.corners.iter().take(ORIENTATION_POINT_COUNT) {
            let vertex = primitive.position_index(corner)?;
            points.push(self.mesh.position(vertex as usize)?);
        }
        Ok(())
    }
}

fn corner_sets(sets: &[BoundSet<'_>], corners: &[usize]) -> ImportResult<Vec<SetIndices>> {
    sets.iter().map(|bound| bound.corner_indices(corners)).collect()
}

/// Reverses a hole's winding, keeping its corner indices aligned with the edges.
fn flip_hole(hole: &mut HoleRecord) {
    flip_hole_orientation(&mut hole.edges);
    for set in hole.uvs.iter_mut().chain(hole.colors.iter_mut()) {
        flip_corner_values(&mut set.indices);
    }
}

#[cfg(test)]
mod tests;
