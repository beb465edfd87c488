//! Triangle fans: every group shares its first vertex (the apex).

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
            let apex = cursor;
            for i in 0..len - 2 {
                walk.loops
                    .push(CornerLoop::face(vec![apex, cursor + i + 1, cursor + i + 2]));
            }
        }

        cursor = end;
    }

    Ok(walk)
}
