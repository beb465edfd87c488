//! # Interchange Mesh
//!
//! Vertex buffers plus the ordered list of primitives that index into them.

use glam::DVec3;
use serde::{Deserialize, Serialize};

use crate::error::IrResult;
use crate::primitive::MeshPrimitive;
use crate::vertex_data::VertexData;
use crate::UniqueId;

/// A polygonal mesh as delivered by the document loader.
///
/// The mesh is read-only for the importer; all accessors borrow.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Mesh {
    pub id: UniqueId,
    pub name: String,
    /// Vertex positions, stride 3.
    pub positions: VertexData,
    /// Normal vectors, stride 3, referenced through the primitives' normal indices.
    pub normals: VertexData,
    /// All uv sets, one input info per set.
    pub uv_coords: VertexData,
    /// All color sets, one input info per set.
    pub colors: VertexData,
    pub primitives: Vec<MeshPrimitive>,
}

impl Mesh {
    pub fn new(id: UniqueId, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            positions: VertexData::default(),
            normals: VertexData::default(),
            uv_coords: VertexData::default(),
            colors: VertexData::default(),
            primitives: Vec::new(),
        }
    }

    pub fn with_positions(mut self, positions: VertexData) -> Self {
        self.positions = positions;
        self
    }

    pub fn with_normals(mut self, normals: VertexData) -> Self {
        self.normals = normals;
        self
    }

    pub fn with_uv_coords(mut self, uv_coords: VertexData) -> Self {
        self.uv_coords = uv_coords;
        self
    }

    pub fn with_colors(mut self, colors: VertexData) -> Self {
        self.colors = colors;
        self
    }

    pub fn with_primitive(mut self, primitive: MeshPrimitive) -> Self {
        self.primitives.push(primitive);
        self
    }

    /// Number of vertex positions (values / 3).
    #[inline]
    pub fn position_count(&self) -> usize {
        self.positions.len() / 3
    }

    /// Reads the position of vertex `index` at full precision.
    pub fn position(&self, index: usize) -> IrResult<DVec3> {
        self.positions.point3("positions", index)
    }

    /// Number of normal occurrences over all primitives.
    ///
    /// Normals are bound per face corner, so this is the sum of the
    /// primitives' normal index counts rather than the buffer size.
    pub fn normals_count(&self) -> usize {
        self.primitives
            .iter()
            .map(|primitive| primitive.normal_indices.len())
            .sum()
    }

    /// Index of the uv set called `name`.
    pub fn uv_set_index(&self, name: &str) -> Option<usize> {
        self.uv_coords.input_index(name)
    }

    /// Index of the color set called `name`.
    pub fn color_set_index(&self, name: &str) -> Option<usize> {
        self.colors.input_index(name)
    }

    /// Display label used in diagnostics: the name, or the id when unnamed.
    pub fn label(&self) -> String {
        if self.name.is_empty() {
            self.id.to_string()
        } else {
            self.name.clone()
        }
    }
}
