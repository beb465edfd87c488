//! # Scene IR
//!
//! The in-memory interchange scene model consumed by `mesh-import`.
//!
//! ## Architecture
//!
//! ```text
//! document loader → scene-ir (Geometry, Mesh) → mesh-import → scene file sink
//! ```
//!
//! A [`Mesh`] owns flat vertex data buffers ([`VertexData`]) and an ordered list
//! of [`MeshPrimitive`]s. Every primitive indexes into the shared buffers with its
//! own position, normal, uv and color index arrays.
//!
//! ## Usage
//!
//! ```rust
//! use scene_ir::{Mesh, MeshPrimitive, PrimitiveKind, UniqueId, VertexData};
//!
//! let mesh = Mesh::new(UniqueId(1), "quad")
//!     .with_positions(VertexData::float(vec![
//!         0.0, 0.0, 0.0, 1.0, 0.0, 0.0, 1.0, 1.0, 0.0, 0.0, 1.0, 0.0,
//!     ]))
//!     .with_primitive(
//!         MeshPrimitive::new(PrimitiveKind::Polygons, vec![0, 1, 2, 3])
//!             .with_vertex_counts(vec![4]),
//!     );
//! assert_eq!(mesh.position_count(), 4);
//! ```

pub mod error;
pub mod geometry;
pub mod mesh;
pub mod primitive;
pub mod vertex_data;

pub use error::{IrError, IrResult};
pub use geometry::{Geometry, GeometryKind};
pub use mesh::Mesh;
pub use primitive::{IndexList, MeshPrimitive, PrimitiveKind};
pub use vertex_data::{DataType, InputInfo, VertexData, VertexValues};

use serde::{Deserialize, Serialize};
use std::fmt;

/// Unique id of a scene object (geometry, transform node).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct UniqueId(pub u64);

impl fmt::Display for UniqueId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Id of the material bound to a primitive.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default, Serialize, Deserialize,
)]
pub struct MaterialId(pub u64);
