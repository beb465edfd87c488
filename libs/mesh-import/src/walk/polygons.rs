//! Polygon, polylist and triangle runs.
//!
//! A run with a positive count is a face; a negative count is a hole of the
//! last face. Holes are only valid in polygon primitives.

use scene_ir::{MeshPrimitive, PrimitiveKind};

use super::{checked_run, require_counts, CornerLoop, PrimitiveWalk};
use crate::error::{ImportError, ImportResult};

pub(super) fn walk(
    primitive_index: usize,
    primitive: &MeshPrimitive,
) -> ImportResult<PrimitiveWalk> {
    let counts = primitive.grouped_vertex_counts();
    require_counts(primitive_index, primitive, &counts)?;

    let allows_holes = primitive.kind == PrimitiveKind::Polygons;
    let mut walk = PrimitiveWalk::default();
    let mut seen_face = false;
    let mut cursor = 0;

    for &count in counts.iter() {
        let len = count.unsigned_abs() as usize;
        let end = checked_run(primitive_index, primitive, cursor, len)?;

        if count == 0 {
            walk.degenerate_groups += 1;
        } else if count > 0 {
            walk.loops.push(CornerLoop::face((cursor..end).collect()));
            seen_face = true;
        } else {
            if !allows_holes {
                return Err(ImportError::invalid_topology(
                    primitive_index,
                    format!("hole run in a {} primitive", primitive.kind.name()),
                ));
            }
            if !seen_face {
                return Err(ImportError::invalid_topology(
                    primitive_index,
                    "hole run without a preceding face",
                ));
            }
            walk.loops.push(CornerLoop::hole((cursor..end).collect()));
        }

        cursor = end;
    }

    Ok(walk)
}
