//! # Edges and Signed Edge References
//!
//! An [`Edge`] is an unordered vertex pair that remembers the direction it was
//! traversed in. A [`SignedEdge`] is the integer a face stores to reference an
//! edge of the edge list together with that direction.

use serde::{Deserialize, Serialize};
use std::hash::{Hash, Hasher};

/// An edge between two vertex positions, as traversed by a face.
///
/// Equality and hashing only consider the canonical `(min, max)` pair, so
/// `Edge::new(a, b) == Edge::new(b, a)`.
///
/// # Example
///
/// ```rust
/// use mesh_import::topology::Edge;
///
/// let edge = Edge::new(5, 2);
/// assert_eq!(edge.canonical(), [2, 5]);
/// assert!(edge.is_reverse());
/// assert_eq!(edge, Edge::new(2, 5));
/// ```
#[derive(Debug, Clone, Copy)]
pub struct Edge {
    start: u32,
    end: u32,
}

impl Edge {
    pub fn new(start: u32, end: u32) -> Self {
        Self { start, end }
    }

    #[inline]
    pub fn start(&self) -> u32 {
        self.start
    }

    #[inline]
    pub fn end(&self) -> u32 {
        self.end
    }

    /// The stored orientation: lower vertex index first.
    #[inline]
    pub fn canonical(&self) -> [u32; 2] {
        if self.start <= self.end {
            [self.start, self.end]
        } else {
            [self.end, self.start]
        }
    }

    /// True when the traversal runs against the canonical orientation.
    #[inline]
    pub fn is_reverse(&self) -> bool {
        self.start > self.end
    }
}

impl PartialEq for Edge {
    fn eq(&self, other: &Self) -> bool {
        self.canonical() == other.canonical()
    }
}

impl Eq for Edge {}

impl Hash for Edge {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.canonical().hash(state);
    }
}

/// Signed reference from a face into the edge list.
///
/// A non-negative value `i` means edge `i` traversed forward. A negative value
/// `v` means edge `-(v + 1)` traversed backward. The mapping is its own inverse
/// (`!v` in two's complement), so encoding and decoding are total over `i32`.
///
/// # Example
///
/// ```rust
/// use mesh_import::topology::SignedEdge;
///
/// let back = SignedEdge::new(4, false);
/// assert_eq!(back.raw(), -5);
/// assert_eq!(back.decode(), (4, false));
/// assert_eq!(back.reversed().raw(), 4);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SignedEdge(i32);

impl SignedEdge {
    /// Encodes edge `index` with a traversal direction. `index` must be non-negative.
    #[inline]
    pub fn new(index: i32, forward: bool) -> Self {
        debug_assert!(index >= 0, "edge index must be non-negative");
        if forward {
            Self(index)
        } else {
            Self(!index)
        }
    }

    /// Wraps an already encoded value.
    #[inline]
    pub const fn from_raw(value: i32) -> Self {
        Self(value)
    }

    #[inline]
    pub fn raw(self) -> i32 {
        self.0
    }

    #[inline]
    pub fn is_forward(self) -> bool {
        self.0 >= 0
    }

    /// Index of the referenced edge.
    #[inline]
    pub fn index(self) -> i32 {
        if self.0 >= 0 {
            self.0
        } else {
            !self.0
        }
    }

    /// Splits the reference into `(edge index, forward)`.
    #[inline]
    pub fn decode(self) -> (i32, bool) {
        (self.index(), self.is_forward())
    }

    /// Same edge, opposite direction (`v -> -(v + 1)`).
    #[inline]
    pub fn reversed(self) -> Self {
        Self(!self.0)
    }
}
