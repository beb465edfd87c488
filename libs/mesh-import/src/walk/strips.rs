//! Triangle strips: each triangle shares an edge with the previous one and the
//! winding alternates so all triangles face the same way.

use scene_ir::MeshPrimitive;

use super::{checked_run, group_len, require_counts, CornerLoop, PrimitiveWalk};
use crate::error::ImportResult;

pub(super) fn walk(
    primitive_index: usize,
    primitive: &MeshPrimitive,
) -> ImportResult<PrimitiveWalk> {
    let counts = primitive.grouped_vertex_counts();
    require_counts(primitive_index, primitive, &counts)?;

    let mut walk = PrimitiveWalk::default();
    let mut cursor = 0;

    for (group, &count) in counts.iter().enumerate() {
        let len = group_len(primitive_index, group, count)?;
        let end = checked_run(primitive_index, primitive, cursor, len)?;

        if len < 3 {
            walk.degenerate_groups += 1;
        } else {
            for i in 0..len - 2 {
                let base = cursor + i;
                let corners = if i % 2 == 0 {
                    vec![base, base + 1, base + 2]
                } else {
                    vec![base + 1, base, base + 2]
                };
                walk.loops.push(CornerLoop::face(corners));
            }
        }

        cursor = end;
    }

    Ok(walk)
}
