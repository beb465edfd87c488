//! # Mesh Assembler
//!
//! Top-level orchestration of one geometry: resolve its instances, compute all
//! blocks, then emit the mesh node, its instances and group ids through a
//! [`MeshSink`].
//!
//! ## Flow
//!
//! ```text
//! Geometry ─┬─ convex mesh / spline ──→ warning, skipped
//!           └─ mesh ─→ instances ─→ MeshBlocks::compute ─→ emit
//!                                    (positions, normals, uvs,
//!                                     colors, edges, faces)
//! ```
//!
//! Blocks are computed before anything reaches the sink, so a mesh that fails
//! validation leaves no partial node behind. Once the sink has accepted the
//! node the geometry counts as imported, even if a later sink write fails.

use config::constants::{ImportConfig, DAG_PATH_SEPARATOR, GEOMETRY_NAME, GROUPID_NAME};
use pipeline_types::Stage;
use scene_ir::{Geometry, Mesh, UniqueId};

use crate::attributes::{
    write_color_sets, write_normals, write_positions, write_uv_sets, ColorSetBlock, UvSetBlock,
};
use crate::context::{
    ConversionContext, FaceRange, GroupIdAssignment, MeshNode, ObjectGroup, TransformNode,
};
use crate::diagnostics::Diagnostics;
use crate::error::{ImportError, ImportResult};
use crate::faces::{BuiltFaces, FaceBuilder};
use crate::sink::{EdgeRecord, MeshSink, ParentShape};
use crate::topology::EdgeIndex;

// =============================================================================
// OUTCOME
// =============================================================================

/// What happened to a geometry handed to the importer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ImportOutcome {
    /// A mesh node was created and attached to `instances` transforms.
    Imported { instances: usize },
    /// The geometry kind is not supported.
    Skipped,
    /// A mesh node for this geometry id exists already.
    AlreadyImported,
    /// None of the referencing transforms could be resolved.
    NoInstances,
}

/// Tally of a scene import.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SceneSummary {
    pub imported: usize,
    pub skipped: usize,
    pub failed: usize,
}

// =============================================================================
// BLOCKS
// =============================================================================

/// Every block of one mesh, computed before emission.
#[derive(Debug, Clone)]
pub struct MeshBlocks {
    pub positions: Vec<f32>,
    pub normals: Vec<f32>,
    pub uv_sets: Vec<UvSetBlock>,
    pub color_sets: Vec<ColorSetBlock>,
    pub edges: Vec<EdgeRecord>,
    pub faces: BuiltFaces,
}

impl MeshBlocks {
    pub fn compute(
        mesh: &Mesh,
        config: &ImportConfig,
        diagnostics: &mut Diagnostics,
    ) -> ImportResult<Self> {
        let positions = write_positions(mesh, config)?;
        let normals = write_normals(mesh)?;
        let uv_sets = write_uv_sets(mesh, diagnostics)?;
        let color_sets = write_color_sets(mesh)?;

        let edge_index = EdgeIndex::build(mesh)?;
        let edges = edge_index
            .edges()
            .iter()
            .map(|&[start, end]| EdgeRecord {
                start,
                end,
                hard: config.hard_edges,
            })
            .collect();
        let faces = FaceBuilder::new(mesh, &edge_index).build(diagnostics)?;

        log::debug!(
            "{}: {} positions, {} normals, {} uv sets, {} color sets, {} edges, {} faces",
            mesh.label(),
            positions.len() / 3,
            normals.len() / 3,
            uv_sets.len(),
            color_sets.len(),
            edge_index.len(),
            faces.len()
        );

        Ok(Self {
            positions,
            normals,
            uv_sets,
            color_sets,
            edges,
            faces,
        })
    }

    /// Cumulative face range of every primitive, in primitive order.
    pub fn primitive_ranges(&self) -> Vec<FaceRange> {
        let mut first = 0;
        self.faces
            .primitive_face_counts
            .iter()
            .map(|&count| {
                let range = FaceRange::new(first, count);
                first += count;
                range
            })
            .collect()
    }
}

// =============================================================================
// IMPORTER
// =============================================================================

/// Converts geometries into mesh nodes written to a sink.
///
/// # Example
///
/// ```rust
/// use mesh_import::assembler::{ImportOutcome, MeshImporter};
/// use mesh_import::context::ConversionContext;
/// use mesh_import::sink::RecordingSink;
/// use scene_ir::{Geometry, Mesh, MeshPrimitive, PrimitiveKind, UniqueId, VertexData};
///
/// let mut ctx = ConversionContext::default();
/// ctx.register_transform(UniqueId(10), "pPlane1", "");
/// let mut sink = RecordingSink::new();
///
/// let mesh = Mesh::new(UniqueId(1), "")
///     .with_positions(VertexData::float(vec![0.0; 9]))
///     .with_primitive(MeshPrimitive::new(PrimitiveKind::Triangles, vec![0, 1, 2]));
/// let outcome = MeshImporter::new(&mut ctx, &mut sink)
///     .import_geometry(&Geometry::from(mesh), &[UniqueId(10)])
///     .unwrap();
///
/// assert_eq!(outcome, ImportOutcome::Imported { instances: 1 });
/// assert_eq!(sink.mesh_nodes(), vec!["Geometry"]);
/// ```
pub struct MeshImporter<'a, S: MeshSink + ?Sized> {
    ctx: &'a mut ConversionContext,
    sink: &'a mut S,
}

impl<'a, S: MeshSink + ?Sized> MeshImporter<'a, S> {
    pub fn new(ctx: &'a mut ConversionContext, sink: &'a mut S) -> Self {
        Self { ctx, sink }
    }

    /// Imports one geometry instanced under the transforms `instances`.
    ///
    /// A returned error is also recorded as an error diagnostic; the context
    /// stays usable for further geometries.
    pub fn import_geometry(
        &mut self,
        geometry: &Geometry,
        instances: &[UniqueId],
    ) -> ImportResult<ImportOutcome> {
        let Some(mesh) = geometry.as_mesh() else {
            self.ctx.diagnostics_mut().warn(
                Stage::Geometry,
                geometry.name(),
                format!("Import of {} not supported!", geometry.kind().name()),
            );
            return Ok(ImportOutcome::Skipped);
        };

        if self.ctx.is_imported(mesh.id) {
            log::debug!("{} already imported", mesh.label());
            return Ok(ImportOutcome::AlreadyImported);
        }

        let result = self.import_mesh(mesh, instances);
        if let Err(err) = &result {
            self.ctx
                .diagnostics_mut()
                .error(error_stage(err), &mesh.label(), err.to_string());
        }
        result
    }

    /// Imports every geometry, continuing past failed ones.
    pub fn import_scene<'g, I>(&mut self, geometries: I) -> SceneSummary
    where
        I: IntoIterator<Item = (&'g Geometry, &'g [UniqueId])>,
    {
        let mut summary = SceneSummary::default();
        for (geometry, instances) in geometries {
            match self.import_geometry(geometry, instances) {
                Ok(ImportOutcome::Imported { .. }) => summary.imported += 1,
                Ok(_) => summary.skipped += 1,
                Err(_) => summary.failed += 1,
            }
        }
        summary
    }

    fn import_mesh(&mut self, mesh: &Mesh, instances: &[UniqueId]) -> ImportResult<ImportOutcome> {
        let transforms = self.resolve_instances(mesh, instances);
        let Some(first) = transforms.first() else {
            return Ok(ImportOutcome::NoInstances);
        };

        let config = *self.ctx.config();
        let blocks = MeshBlocks::compute(mesh, &config, self.ctx.diagnostics_mut())?;

        let base_name = if mesh.name.is_empty() {
            GEOMETRY_NAME
        } else {
            mesh.name.as_str()
        };
        let name = self.ctx.allocate_name(base_name);
        let path = format!("{}{DAG_PATH_SEPARATOR}{name}", first.path);
        self.sink.create_mesh_node(&name, &first.path)?;

        // Known to the context from here on, even if a later sink write fails.
        self.ctx.insert_mesh_node(MeshNode {
            geometry: mesh.id,
            name,
            path: path.clone(),
            parent_path: first.path.clone(),
            face_count: blocks.faces.len(),
            edge_count: blocks.edges.len(),
        });

        for (primitive_index, primitive) in mesh.primitives.iter().enumerate() {
            self.ctx.record_shading_primitive(mesh.id, primitive.material_id, primitive_index);
        }

        let grouped = mesh.primitives.len() > 1;
        if grouped {
            self.emit_object_groups(mesh.id, transforms.len(), &blocks)?;
        }
        self.emit_blocks(&blocks)?;

        for transform in &transforms[1..] {
            self.sink
                .parent_shape(&ParentShape::instance(path.as_str(), transform.path.as_str()))?;
        }

        if grouped {
            self.emit_group_ids(mesh, transforms.len())?;
        }

        Ok(ImportOutcome::Imported {
            instances: transforms.len(),
        })
    }

    /// Looks up every instance transform; unknown ids are reported and dropped.
    fn resolve_instances(&mut self, mesh: &Mesh, instances: &[UniqueId]) -> Vec<TransformNode> {
        let mut resolved = Vec::with_capacity(instances.len());
        for &id in instances {
            match self.ctx.transform(id) {
                Some(transform) => resolved.push(transform.clone()),
                None => self.ctx.diagnostics_mut().error(
                    Stage::Instancing,
                    &mesh.label(),
                    format!("Transform node {id} not found, instance not imported"),
                ),
            }
        }
        resolved
    }

    fn emit_object_groups(
        &mut self,
        geometry: UniqueId,
        instances: usize,
        blocks: &MeshBlocks,
    ) -> ImportResult<()> {
        let ranges = blocks.primitive_ranges();
        for instance in 0..instances {
            for (primitive, range) in ranges.iter().enumerate() {
                if range.count == 0 {
                    continue;
                }
                self.sink.set_object_group(instance, primitive, *range)?;
                self.ctx.push_object_group(ObjectGroup {
                    geometry,
                    instance,
                    primitive,
                    faces: *range,
                });
            }
        }
        Ok(())
    }

    fn emit_blocks(&mut self, blocks: &MeshBlocks) -> ImportResult<()> {
        if !blocks.positions.is_empty() {
            self.sink.write_positions(&blocks.positions)?;
        }
        if !blocks.normals.is_empty() {
            self.sink.write_normals(&blocks.normals)?;
        }
        for uv_set in &blocks.uv_sets {
            self.sink.write_uv_set(uv_set)?;
        }
        for color_set in &blocks.color_sets {
            self.sink.write_color_set(color_set)?;
        }
        if !blocks.edges.is_empty() {
            self.sink.write_edges(&blocks.edges)?;
        }
        if !blocks.faces.is_empty() {
            self.sink.write_faces(&blocks.faces.faces)?;
        }
        Ok(())
    }

    fn emit_group_ids(&mut self, mesh: &Mesh, instances: usize) -> ImportResult<()> {
        for instance in 0..instances {
            for primitive in 0..mesh.primitives.len() {
                let name = self.ctx.allocate_name(GROUPID_NAME);
                self.sink.create_group_id(&name)?;
                self.ctx.push_group_id(GroupIdAssignment {
                    name,
                    geometry: mesh.id,
                    instance,
                    primitive,
                });
            }
        }
        Ok(())
    }
}

fn error_stage(err: &ImportError) -> Stage {
    match err {
        ImportError::Data(_) | ImportError::InvalidStride { .. } => Stage::Attributes,
        ImportError::EdgeNotFound { .. } | ImportError::TooManyEdges { .. } => Stage::Topology,
        ImportError::InvalidTopology { .. } => Stage::Faces,
        ImportError::Sink(_) => Stage::Sink,
    }
}
