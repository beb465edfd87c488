//! # Geometry
//!
//! Top-level geometry objects of a scene. Only polygon meshes carry data the
//! importer converts; the other kinds exist so they can be reported.

use serde::{Deserialize, Serialize};

use crate::mesh::Mesh;
use crate::UniqueId;

/// Kind tag of a [`Geometry`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GeometryKind {
    Mesh,
    ConvexMesh,
    Spline,
}

impl GeometryKind {
    pub fn name(self) -> &'static str {
        match self {
            GeometryKind::Mesh => "mesh",
            GeometryKind::ConvexMesh => "convex_mesh",
            GeometryKind::Spline => "spline",
        }
    }
}

/// A geometry object of the interchange scene.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Geometry {
    Mesh(Mesh),
    ConvexMesh { id: UniqueId, name: String },
    Spline { id: UniqueId, name: String },
}

impl Geometry {
    pub fn id(&self) -> UniqueId {
        match self {
            Geometry::Mesh(mesh) => mesh.id,
            Geometry::ConvexMesh { id, .. } | Geometry::Spline { id, .. } => *id,
        }
    }

    pub fn name(&self) -> &str {
        match self {
            Geometry::Mesh(mesh) => &mesh.name,
            Geometry::ConvexMesh { name, .. } | Geometry::Spline { name, .. } => name,
        }
    }

    pub fn kind(&self) -> GeometryKind {
        match self {
            Geometry::Mesh(_) => GeometryKind::Mesh,
            Geometry::ConvexMesh { .. } => GeometryKind::ConvexMesh,
            Geometry::Spline { .. } => GeometryKind::Spline,
        }
    }

    pub fn as_mesh(&self) -> Option<&Mesh> {
        match self {
            Geometry::Mesh(mesh) => Some(mesh),
            _ => None,
        }
    }
}

impl From<Mesh> for Geometry {
    fn from(mesh: Mesh) -> Self {
        Geometry::Mesh(mesh)
    }
}
