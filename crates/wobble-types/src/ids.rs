//! Strongly-typed identifiers for mesh vertices and physical points.
//!
//! A raw vertex index and a canonical point index are both `usize` under
//! the hood, but they live in different spaces: many vertices share one
//! point. The newtypes keep public APIs from mixing them up.

use serde::{Deserialize, Serialize};

/// Index into the raw mesh vertex array.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct VertexId(pub u32);

/// Index of a canonical physical point.
///
/// A canonical point is identified by its representative raw vertex, so a
/// `PointId` is always also a valid `VertexId`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct PointId(pub u32);

impl VertexId {
    /// Returns the raw index as `usize` for array indexing.
    #[inline]
    pub fn index(self) -> usize {
        self.0 as usize
    }
}

impl PointId {
    #[inline]
    pub fn index(self) -> usize {
        self.0 as usize
    }

    /// The representative raw vertex of this point.
    #[inline]
    pub fn vertex(self) -> VertexId {
        VertexId(self.0)
    }
}

impl From<u32> for VertexId {
    fn from(val: u32) -> Self {
        Self(val)
    }
}

impl From<u32> for PointId {
    fn from(val: u32) -> Self {
        Self(val)
    }
}
