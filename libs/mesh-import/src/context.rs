//! # Conversion Context
//!
//! Owned state shared by every geometry of one conversion: the transform
//! table, node name allocation, created mesh nodes, group ids, object groups,
//! the shading-engine map and the diagnostics list.
//!
//! Two contexts never share state, so independent conversions can run side by
//! side (e.g. in tests).

use std::collections::{HashMap, HashSet};

use config::constants::{ImportConfig, DAG_PATH_SEPARATOR};
use scene_ir::{MaterialId, UniqueId};
use serde::{Deserialize, Serialize};

use crate::diagnostics::Diagnostics;

// =============================================================================
// NODE RECORDS
// =============================================================================

/// A transform node mesh instances can be parented under.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TransformNode {
    pub name: String,
    /// Full DAG path, e.g. `|group1|pCube1`.
    pub path: String,
}

/// The mesh node created for a geometry on its first instance.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MeshNode {
    pub geometry: UniqueId,
    pub name: String,
    pub path: String,
    pub parent_path: String,
    pub face_count: usize,
    pub edge_count: usize,
}

/// A synthetic group id node for one (instance, primitive) pair.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GroupIdAssignment {
    pub name: String,
    pub geometry: UniqueId,
    pub instance: usize,
    pub primitive: usize,
}

/// Contiguous range of faces, `count` faces starting at `first`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct FaceRange {
    pub first: usize,
    pub count: usize,
}

impl FaceRange {
    pub fn new(first: usize, count: usize) -> Self {
        Self { first, count }
    }

    /// Index of the last face in the range.
    pub fn last(&self) -> usize {
        (self.first + self.count).saturating_sub(1)
    }

    /// Component list entry, e.g. `f[2:5]`.
    pub fn component(&self) -> String {
        format!("f[{}:{}]", self.first, self.last())
    }
}

/// Faces of one primitive as seen through one instance.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ObjectGroup {
    pub geometry: UniqueId,
    pub instance: usize,
    pub primitive: usize,
    pub faces: FaceRange,
}

// =============================================================================
// NAME ALLOCATION
// =============================================================================

/// Hands out node names unique within one conversion.
///
/// # Example
///
/// ```rust
/// use mesh_import::context::NameAllocator;
///
/// let mut names = NameAllocator::new();
/// assert_eq!(names.allocate("Geometry"), "Geometry");
/// assert_eq!(names.allocate("Geometry"), "Geometry1");
/// assert_eq!(names.allocate("Geometry"), "Geometry2");
/// ```
#[derive(Debug, Clone, Default)]
pub struct NameAllocator {
    used: HashSet<String>,
    counters: HashMap<String, usize>,
}

impl NameAllocator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns `base` on first use, then `base1`, `base2`, ...
    pub fn allocate(&mut self, base: &str) -> String {
        if self.used.insert(base.to_string()) {
            return base.to_string();
        }
        let counter = self.counters.entry(base.to_string()).or_insert(0);
        loop {
            *counter += 1;
            let candidate = format!("{base}{counter}");
            if self.used.insert(candidate.clone()) {
                return candidate;
            }
        }
    }

    /// Marks `name` as taken, e.g. for nodes that already exist in the scene.
    pub fn reserve(&mut self, name: &str) {
        self.used.insert(name.to_string());
    }
}

// =============================================================================
// CONTEXT
// =============================================================================

/// State of one conversion, passed by `&mut` through the importer.
#[derive(Debug, Clone, Default)]
pub struct ConversionContext {
    config: ImportConfig,
    transforms: HashMap<UniqueId, TransformNode>,
    names: NameAllocator,
    mesh_nodes: HashMap<UniqueId, MeshNode>,
    group_ids: Vec<GroupIdAssignment>,
    object_groups: Vec<ObjectGroup>,
    shading_engines: HashMap<(UniqueId, MaterialId), Vec<usize>>,
    diagnostics: Diagnostics,
}

impl ConversionContext {
    pub fn new(config: ImportConfig) -> Self {
        Self {
            config,
            ..Self::default()
        }
    }

    #[inline]
    pub fn config(&self) -> &ImportConfig {
        &self.config
    }

    /// Registers a transform node and reserves its name.
    ///
    /// `parent_path` is the DAG path of the node's parent, empty for the world.
    pub fn register_transform(&mut self, id: UniqueId, name: impl Into<String>, parent_path: &str) {
        let name = name.into();
        self.names.reserve(&name);
        let path = format!("{parent_path}{DAG_PATH_SEPARATOR}{name}");
        self.transforms.insert(id, TransformNode { name, path });
    }

    pub fn transform(&self, id: UniqueId) -> Option<&TransformNode> {
        self.transforms.get(&id)
    }

    pub fn allocate_name(&mut self, base: &str) -> String {
        self.names.allocate(base)
    }

    pub fn mesh_node(&self, geometry: UniqueId) -> Option<&MeshNode> {
        self.mesh_nodes.get(&geometry)
    }

    pub fn is_imported(&self, geometry: UniqueId) -> bool {
        self.mesh_nodes.contains_key(&geometry)
    }

    pub(crate) fn insert_mesh_node(&mut self, node: MeshNode) {
        self.mesh_nodes.insert(node.geometry, node);
    }

    pub fn group_ids(&self) -> &[GroupIdAssignment] {
        &self.group_ids
    }

    pub(crate) fn push_group_id(&mut self, assignment: GroupIdAssignment) {
        self.group_ids.push(assignment);
    }

    pub fn object_groups(&self) -> &[ObjectGroup] {
        &self.object_groups
    }

    pub(crate) fn push_object_group(&mut self, group: ObjectGroup) {
        self.object_groups.push(group);
    }

    /// Records that `primitive` of `geometry` is shaded with `material`.
    pub fn record_shading_primitive(
        &mut self,
        geometry: UniqueId,
        material: MaterialId,
        primitive: usize,
    ) {
        self.shading_engines
            .entry((geometry, material))
            .or_default()
            .push(primitive);
    }

    /// Primitive indices of `geometry` shaded with `material`, in mesh order.
    pub fn shading_engine_primitives(&self, geometry: UniqueId, material: MaterialId) -> &[usize] {
        self.shading_engines
            .get(&(geometry, material))
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    #[inline]
    pub fn diagnostics(&self) -> &Diagnostics {
        &self.diagnostics
    }

    #[inline]
    pub fn diagnostics_mut(&mut self) -> &mut Diagnostics {
        &mut self.diagnostics
    }
}
