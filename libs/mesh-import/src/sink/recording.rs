//! In-memory sink keeping every call for later inspection.

use serde::{Deserialize, Serialize};

use super::{EdgeRecord, MeshSink, ParentShape};
use crate::attributes::{ColorSetBlock, UvSetBlock};
use crate::context::FaceRange;
use crate::error::SinkError;
use crate::faces::FaceRecord;

/// One call received by a [`RecordingSink`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum SinkRecord {
    MeshNode { name: String, parent_path: String },
    ObjectGroup { instance: usize, group: usize, faces: FaceRange },
    Positions(Vec<f32>),
    Normals(Vec<f32>),
    UvSet(UvSetBlock),
    ColorSet(ColorSetBlock),
    Edges(Vec<EdgeRecord>),
    Faces(Vec<FaceRecord>),
    ParentShape(ParentShape),
    GroupId(String),
}

/// Sink that stores [`SinkRecord`]s in call order.
#[derive(Debug, Clone, Default)]
pub struct RecordingSink {
    records: Vec<SinkRecord>,
}

impl RecordingSink {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn records(&self) -> &[SinkRecord] {
        &self.records
    }

    pub fn into_records(self) -> Vec<SinkRecord> {
        self.records
    }

    /// Names of the created mesh nodes.
    pub fn mesh_nodes(&self) -> Vec<&str> {
        self.records
            .iter()
            .filter_map(|record| match record {
                SinkRecord::MeshNode { name, .. } => Some(name.as_str()),
                _ => None,
            })
            .collect()
    }

    pub fn parent_shapes(&self) -> Vec<&ParentShape> {
        self.records
            .iter()
            .filter_map(|record| match record {
                SinkRecord::ParentShape(directive) => Some(directive),
                _ => None,
            })
            .collect()
    }

    pub fn group_ids(&self) -> Vec<&str> {
        self.records
            .iter()
            .filter_map(|record| match record {
                SinkRecord::GroupId(name) => Some(name.as_str()),
                _ => None,
            })
            .collect()
    }

    pub fn object_groups(&self) -> Vec<(usize, usize, FaceRange)> {
        self.records
            .iter()
            .filter_map(|record| match record {
                SinkRecord::ObjectGroup {
                    instance,
                    group,
                    faces,
                } => Some((*instance, *group, *faces)),
                _ => None,
            })
            .collect()
    }

    /// The most recent face block.
    pub fn faces(&self) -> Option<&[FaceRecord]> {
        self.records.iter().rev().find_map(|record| match record {
            SinkRecord::Faces(faces) => Some(faces.as_slice()),
            _ => None,
        })
    }

    /// The most recent edge block.
    pub fn edges(&self) -> Option<&[EdgeRecord]> {
        self.records.iter().rev().find_map(|record| match record {
            SinkRecord::Edges(edges) => Some(edges.as_slice()),
            _ => None,
        })
    }
}

impl MeshSink for RecordingSink {
    fn create_mesh_node(&mut self, name: &str, parent_path: &str) -> Result<(), SinkError> {
        self.records.push(SinkRecord::MeshNode {
            name: name.to_string(),
            parent_path: parent_path.to_string(),
        });
        Ok(())
    }

    fn set_object_group(
        &mut self,
        instance: usize,
        group: usize,
        faces: FaceRange,
    ) -> Result<(), SinkError> {
        self.records.push(SinkRecord::ObjectGroup {
            instance,
            group,
            faces,
        });
        Ok(())
    }

    fn write_positions(&mut self, values: &[f32]) -> Result<(), SinkError> {
        self.records.push(SinkRecord::Positions(values.to_vec()));
        Ok(())
    }

    fn write_normals(&mut self, values: &[f32]) -> Result<(), SinkError> {
        self.records.push(SinkRecord::Normals(values.to_vec()));
        Ok(())
    }

    fn write_uv_set(&mut self, block: &UvSetBlock) -> Result<(), SinkError> {
        self.records.push(SinkRecord::UvSet(block.clone()));
        Ok(())
    }

    fn write_color_set(&mut self, block: &ColorSetBlock) -> Result<(), SinkError> {
        self.records.push(SinkRecord::ColorSet(block.clone()));
        Ok(())
    }

    fn write_edges(&mut self, edges: &[EdgeRecord]) -> Result<(), SinkError> {
        self.records.push(SinkRecord::Edges(edges.to_vec()));
        Ok(())
    }

    fn write_faces(&mut self, faces: &[FaceRecord]) -> Result<(), SinkError> {
        self.records.push(SinkRecord::Faces(faces.to_vec()));
        Ok(())
    }

    fn parent_shape(&mut self, directive: &ParentShape) -> Result<(), SinkError> {
        self.records.push(SinkRecord::ParentShape(directive.clone()));
        Ok(())
    }

    fn create_group_id(&mut self, name: &str) -> Result<(), SinkError> {
        self.records.push(SinkRecord::GroupId(name.to_string()));
        Ok(())
    }
}
