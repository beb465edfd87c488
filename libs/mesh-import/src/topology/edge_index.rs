//! # Edge Index
//!
//! The deduplicated, insertion-ordered edge list of a mesh and the lookup from
//! an edge to its position in that list.

use std::collections::HashMap;

use scene_ir::Mesh;

use crate::error::{ImportError, ImportResult};
use crate::topology::{Edge, SignedEdge};
use crate::walk::walk_primitive;

/// Unique edges of a mesh in first-seen order.
///
/// Built once per mesh from every primitive's loops, read-only afterwards.
///
/// # Example
///
/// ```rust
/// use mesh_import::topology::{Edge, EdgeIndex};
///
/// let mut index = EdgeIndex::new();
/// index.insert(Edge::new(0, 1)).unwrap();
/// index.insert(Edge::new(1, 2)).unwrap();
/// index.insert(Edge::new(1, 0)).unwrap(); // shared edge, not re-inserted
/// assert_eq!(index.len(), 2);
/// assert_eq!(index.signed(Edge::new(1, 0)).unwrap().raw(), -1);
/// ```
#[derive(Debug, Clone, Default)]
pub struct EdgeIndex {
    /// Canonical `(min, max)` vertex pairs.
    edges: Vec<[u32; 2]>,
    lookup: HashMap<[u32; 2], i32>,
}

impl EdgeIndex {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds the edge index of `mesh`.
    ///
    /// Primitives are visited in order, and each primitive's loops in walk
    /// order, so the first face touching an edge fixes its index.
    pub fn build(mesh: &Mesh) -> ImportResult<Self> {
        let mut index = Self::new();
        for (primitive_index, primitive) in mesh.primitives.iter().enumerate() {
            let walk = walk_primitive(primitive_index, primitive)?;
            for lp in &walk.loops {
                for edge in lp.edges(primitive)? {
                    index.insert(edge)?;
                }
            }
        }
        log::debug!(
            "built edge index for {}: {} edges",
            mesh.label(),
            index.len()
        );
        Ok(index)
    }

    /// Inserts `edge` unless an equal edge exists. Returns the edge's index.
    pub fn insert(&mut self, edge: Edge) -> ImportResult<i32> {
        let key = edge.canonical();
        if let Some(&existing) = self.lookup.get(&key) {
            return Ok(existing);
        }
        let next = i32::try_from(self.edges.len()).map_err(|_| ImportError::TooManyEdges {
            count: self.edges.len() + 1,
            max: i32::MAX as usize,
        })?;
        self.edges.push(key);
        self.lookup.insert(key, next);
        Ok(next)
    }

    /// Resolves `edge` to its signed reference.
    ///
    /// The reference is negative when `edge` runs against the stored direction.
    /// A missing edge means the face walk and the edge extraction disagree.
    pub fn signed(&self, edge: Edge) -> ImportResult<SignedEdge> {
        let index = self
            .lookup
            .get(&edge.canonical())
            .copied()
            .ok_or(ImportError::EdgeNotFound {
                start: edge.start(),
                end: edge.end(),
            })?;
        Ok(SignedEdge::new(index, !edge.is_reverse()))
    }

    #[inline]
    pub fn edges(&self) -> &[[u32; 2]] {
        &self.edges
    }

    #[inline]
    pub fn edge(&self, index: usize) -> Option<[u32; 2]> {
        self.edges.get(index).copied()
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.edges.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.edges.is_empty()
    }
}
