//! # Mesh Primitives
//!
//! A primitive is a sub-group of a mesh sharing one material and one topology
//! kind. It carries the index arrays of every input bound to it.

use std::borrow::Cow;

use serde::{Deserialize, Serialize};

use crate::error::{IrError, IrResult};
use crate::MaterialId;

/// Topology kind of a [`MeshPrimitive`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PrimitiveKind {
    /// Polygons, optionally followed by holes (negative vertex counts).
    Polygons,
    Polylist,
    Triangles,
    TriangleFans,
    TriangleStrips,
    Lines,
    LineStrips,
}

impl PrimitiveKind {
    /// Whether the kind describes surface faces.
    pub fn is_surface(self) -> bool {
        !matches!(self, PrimitiveKind::Lines | PrimitiveKind::LineStrips)
    }

    pub fn name(self) -> &'static str {
        match self {
            PrimitiveKind::Polygons => "polygons",
            PrimitiveKind::Polylist => "polylist",
            PrimitiveKind::Triangles => "triangles",
            PrimitiveKind::TriangleFans => "trifans",
            PrimitiveKind::TriangleStrips => "tristrips",
            PrimitiveKind::Lines => "lines",
            PrimitiveKind::LineStrips => "linestrips",
        }
    }
}

/// Index array of one uv or color input bound to a primitive.
///
/// Values are absolute in the mesh buffer; subtracting `initial_index` makes them
/// relative to the start of the named input set.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IndexList {
    /// Name of the input set in the mesh's uv or color buffer.
    pub name: String,
    pub initial_index: u32,
    pub indices: Vec<u32>,
}

impl IndexList {
    pub fn new(name: impl Into<String>, initial_index: u32, indices: Vec<u32>) -> Self {
        Self {
            name: name.into(),
            initial_index,
            indices,
        }
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.indices.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.indices.is_empty()
    }

    /// Reads the index at `position`, rebased onto the input set's own index space.
    ///
    /// # Examples
    /// ```
    /// use scene_ir::IndexList;
    /// let list = IndexList::new("map1", 4, vec![4, 5, 7]);
    /// assert_eq!(list.rebased(2).unwrap(), 3);
    /// assert!(list.rebased(3).is_err());
    /// ```
    pub fn rebased(&self, position: usize) -> IrResult<u32> {
        let value = *self
            .indices
            .get(position)
            .ok_or(IrError::IndexOutOfRange {
                what: "input index list",
                index: position,
                len: self.indices.len(),
            })?;
        value
            .checked_sub(self.initial_index)
            .ok_or_else(|| IrError::BelowInitialIndex {
                input: self.name.clone(),
                value,
                initial: self.initial_index,
            })
    }
}

/// One primitive element of a mesh.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MeshPrimitive {
    pub kind: PrimitiveKind,
    pub position_indices: Vec<u32>,
    /// Vertices per grouped run. Negative counts mark polygon holes.
    pub vertex_counts: Vec<i32>,
    pub normal_indices: Vec<u32>,
    pub uv_indices: Vec<IndexList>,
    pub color_indices: Vec<IndexList>,
    /// Material symbol as written in the source document.
    pub material: String,
    pub material_id: MaterialId,
}

impl MeshPrimitive {
    pub fn new(kind: PrimitiveKind, position_indices: Vec<u32>) -> Self {
        Self {
            kind,
            position_indices,
            vertex_counts: Vec::new(),
            normal_indices: Vec::new(),
            uv_indices: Vec::new(),
            color_indices: Vec::new(),
            material: String::new(),
            material_id: MaterialId::default(),
        }
    }

    pub fn with_vertex_counts(mut self, counts: Vec<i32>) -> Self {
        self.vertex_counts = counts;
        self
    }

    pub fn with_normal_indices(mut self, indices: Vec<u32>) -> Self {
        self.normal_indices = indices;
        self
    }

    pub fn with_uv_indices(mut self, list: IndexList) -> Self {
        self.uv_indices.push(list);
        self
    }

    pub fn with_color_indices(mut self, list: IndexList) -> Self {
        self.color_indices.push(list);
        self
    }

    pub fn with_material(mut self, symbol: impl Into<String>, id: MaterialId) -> Self {
        self.material = symbol.into();
        self.material_id = id;
        self
    }

    /// Grouped vertex counts of the primitive.
    ///
    /// Triangle lists may omit explicit counts, in which case every three
    /// position indices form one run.
    ///
    /// # Examples
    /// ```
    /// use scene_ir::{MeshPrimitive, PrimitiveKind};
    /// let tris = MeshPrimitive::new(PrimitiveKind::Triangles, vec![0, 1, 2, 2, 1, 3]);
    /// assert_eq!(tris.grouped_vertex_counts().as_ref(), &[3, 3]);
    /// ```
    pub fn grouped_vertex_counts(&self) -> Cow<'_, [i32]> {
        if self.vertex_counts.is_empty() && self.kind == PrimitiveKind::Triangles {
            Cow::Owned(vec![3; self.position_indices.len() / 3])
        } else {
            Cow::Borrowed(&self.vertex_counts)
        }
    }

    /// Reads the position index at `position`.
    pub fn position_index(&self, position: usize) -> IrResult<u32> {
        self.position_indices
            .get(position)
            .copied()
            .ok_or(IrError::IndexOutOfRange {
                what: "position indices",
                index: position,
                len: self.position_indices.len(),
            })
    }
}
