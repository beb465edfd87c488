//! # Import Errors
//!
//! Error types for mesh import. Every variant is fatal for the mesh being
//! converted; recoverable conditions are reported as diagnostics instead.
//!
//! ## Error Policy
//!
//! - NO repair of inconsistent input
//! - A failing mesh is abandoned, sibling meshes continue
//! - Errors include the offending values for debugging

use scene_ir::IrError;
use thiserror::Error;

// =============================================================================
// ERROR TYPES
// =============================================================================

/// Errors that abort the conversion of the current mesh.
#[derive(Debug, Error)]
pub enum ImportError {
    /// A face references an edge missing from the edge index.
    ///
    /// Edge extraction and face reconstruction disagree on topology.
    #[error("Edge not found: {start}, {end}")]
    EdgeNotFound { start: u32, end: u32 },

    /// Reading the interchange data failed (unsupported storage type,
    /// index out of range, index below its input's initial index).
    #[error(transparent)]
    Data(#[from] IrError),

    /// An attribute set declares a stride the target format cannot hold.
    #[error("Invalid stride {stride} for {buffer} set '{set}'")]
    InvalidStride {
        buffer: &'static str,
        set: String,
        stride: usize,
    },

    /// A primitive's grouped vertex runs are malformed.
    #[error("Invalid topology in primitive {primitive}: {message}")]
    InvalidTopology { primitive: usize, message: String },

    /// More edges than a signed edge reference can address.
    #[error("Too many edges: {count} (max: {max})")]
    TooManyEdges { count: usize, max: usize },

    /// The output sink rejected a block.
    #[error("Sink error: {0}")]
    Sink(#[from] SinkError),
}

impl ImportError {
    /// Creates an invalid topology error.
    pub fn invalid_topology(primitive: usize, message: impl Into<String>) -> Self {
        Self::InvalidTopology {
            primitive,
            message: message.into(),
        }
    }
}

/// Errors raised by [`crate::sink::MeshSink`] implementations.
#[derive(Debug, Error)]
pub enum SinkError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

// =============================================================================
// RESULT TYPE ALIAS
// =============================================================================

/// Result type alias for import operations.
pub type ImportResult<T> = Result<T, ImportError>;
