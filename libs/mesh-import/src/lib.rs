//! # Mesh Import
//!
//! Converts interchange meshes into scene-file mesh nodes: an explicit edge
//! list, faces as signed edge references with polygon holes, flat attribute
//! blocks and per-instance object groups.
//!
//! ## Architecture
//!
//! ```text
//! scene-ir (Geometry) → walk → EdgeIndex → FaceBuilder ─┐
//!                     → attributes ─────────────────────┼→ assembler → MeshSink
//!                                                       ┘
//! ```
//!
//! ## Modules
//!
//! - **walk**: corner loops of every primitive kind (polygons, holes, fans, strips)
//! - **topology**: edges, signed edge references and the edge index
//! - **faces**: face records against the edge index
//! - **orientation**: hole winding check and flip
//! - **attributes**: position, normal, uv and color blocks
//! - **assembler**: instances, group ids, shading-engine bookkeeping
//! - **sink**: recording and ASCII outputs
//!
//! ## Usage
//!
//! ```rust
//! use mesh_import::{ConversionContext, MeshImporter, RecordingSink};
//! use scene_ir::{Geometry, Mesh, MeshPrimitive, PrimitiveKind, UniqueId, VertexData};
//!
//! let quad = Mesh::new(UniqueId(1), "quad")
//!     .with_positions(VertexData::float(vec![
//!         0.0, 0.0, 0.0, 1.0, 0.0, 0.0, 1.0, 1.0, 0.0, 0.0, 1.0, 0.0,
//!     ]))
//!     .with_primitive(
//!         MeshPrimitive::new(PrimitiveKind::Polygons, vec![0, 1, 2, 3])
//!             .with_vertex_counts(vec![4]),
//!     );
//!
//! let mut ctx = ConversionContext::default();
//! ctx.register_transform(UniqueId(100), "pPlane1", "");
//! let mut sink = RecordingSink::new();
//! MeshImporter::new(&mut ctx, &mut sink)
//!     .import_geometry(&Geometry::from(quad), &[UniqueId(100)])
//!     .unwrap();
//!
//! assert_eq!(sink.edges().map(|e| e.len()), Some(4));
//! assert_eq!(sink.faces().map(|f| f.len()), Some(1));
//! ```

pub mod assembler;
pub mod attributes;
pub mod context;
pub mod diagnostics;
pub mod error;
pub mod faces;
pub mod orientation;
pub mod sink;
pub mod topology;
pub mod walk;

pub use assembler::{ImportOutcome, MeshImporter, SceneSummary};
pub use context::ConversionContext;
pub use diagnostics::Diagnostics;
pub use error::{ImportError, ImportResult, SinkError};
pub use faces::{FaceBuilder, FaceRecord, HoleRecord};
pub use sink::{AsciiWriter, MeshSink, RecordingSink};
pub use topology::{Edge, EdgeIndex, SignedEdge};
