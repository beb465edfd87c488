//! # Mesh Sinks
//!
//! The append-only output seam of the importer. The assembler computes every
//! block of a mesh first and then hands them to a [`MeshSink`] in a fixed order:
//!
//! ```text
//! create_mesh_node → set_object_group* → write_positions → write_normals
//!   → write_uv_set* → write_color_set* → write_edges → write_faces
//!   → parent_shape* → create_group_id*
//! ```
//!
//! - [`RecordingSink`] keeps every call as a [`SinkRecord`] for inspection
//! - [`AsciiWriter`] writes scene-file commands to any `io::Write`

mod ascii;
mod recording;

pub use ascii::AsciiWriter;
pub use recording::{RecordingSink, SinkRecord};

use serde::{Deserialize, Serialize};

use crate::attributes::{ColorSetBlock, UvSetBlock};
use crate::context::FaceRange;
use crate::error::SinkError;
use crate::faces::FaceRecord;

/// One entry of the edge block.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct EdgeRecord {
    pub start: u32,
    pub end: u32,
    pub hard: bool,
}

/// Adds an existing mesh node under another transform without copying it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ParentShape {
    /// DAG path of the mesh node.
    pub source: String,
    /// DAG path of the transform receiving the instance.
    pub destination: String,
    pub no_connections: bool,
    pub relative: bool,
    pub add_object: bool,
}

impl ParentShape {
    /// Shape instancing directive: no connections, relative, add object.
    pub fn instance(source: impl Into<String>, destination: impl Into<String>) -> Self {
        Self {
            source: source.into(),
            destination: destination.into(),
            no_connections: true,
            relative: true,
            add_object: true,
        }
    }
}

/// Receiver of the converted mesh data.
///
/// # Examples
/// ```
/// use mesh_import::sink::{MeshSink, RecordingSink};
/// let mut sink = RecordingSink::default();
/// sink.create_mesh_node("Geometry", "|pCube1").unwrap();
/// sink.write_positions(&[0.0, 0.0, 0.0]).unwrap();
/// assert_eq!(sink.records().len(), 2);
/// ```
pub trait MeshSink {
    /// Creates a mesh node named `name` under the transform at `parent_path`.
    fn create_mesh_node(&mut self, name: &str, parent_path: &str) -> Result<(), SinkError>;

    /// Assigns a face range of the current mesh to object group `group` of `instance`.
    fn set_object_group(
        &mut self,
        instance: usize,
        group: usize,
        faces: FaceRange,
    ) -> Result<(), SinkError>;

    /// Flat `x y z` positions.
    fn write_positions(&mut self, values: &[f32]) -> Result<(), SinkError>;

    /// Flat `x y z` normals, one triple per face corner.
    fn write_normals(&mut self, values: &[f32]) -> Result<(), SinkError>;

    fn write_uv_set(&mut self, block: &UvSetBlock) -> Result<(), SinkError>;

    fn write_color_set(&mut self, block: &ColorSetBlock) -> Result<(), SinkError>;

    fn write_edges(&mut self, edges: &[EdgeRecord]) -> Result<(), SinkError>;

    fn write_faces(&mut self, faces: &[FaceRecord]) -> Result<(), SinkError>;

    fn parent_shape(&mut self, directive: &ParentShape) -> Result<(), SinkError>;

    fn create_group_id(&mut self, name: &str) -> Result<(), SinkError>;
}
