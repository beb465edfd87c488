//! # Topology
//!
//! Edge deduplication and the signed edge reference convention shared by
//! every face record.

mod edge;
mod edge_index;

pub use edge::{Edge, SignedEdge};
pub use edge_index::EdgeIndex;
