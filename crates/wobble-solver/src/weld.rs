//! Vertex welding: collapses raw vertices with identical positions into
//! canonical physical points.
//!
//! A mesh exported with seams or UV splits carries several raw vertices at
//! one spatial position. The solver treats each such cluster as a single
//! point mass whose weight is the cluster size.

use glam::Vec3;
use wobble_types::{PointId, VertexId, WobbleError, WobbleResult};

/// Group membership between raw vertices and canonical points.
///
/// The canonical index of a group is the smallest raw index in it, so
/// canonical indices live in the raw index space. `members` partitions
/// `0..vertex_count`.
#[derive(Debug, Clone)]
pub struct PointGroups {
    /// For each raw vertex, the canonical vertex it maps to.
    canonical: Vec<usize>,
    /// For each raw index, the group members if it is canonical, else empty.
    members: Vec<Vec<usize>>,
    /// Canonical indices in ascending order.
    canonicals: Vec<usize>,
}

impl PointGroups {
    /// Groups positions by exact floating-point equality.
    ///
    /// Walks raw indices in ascending order; the first unassigned index
    /// becomes canonical and claims every later unassigned index at the same
    /// position. O(n²) in the vertex count. Near-duplicates that differ in
    /// any bit stay separate.
    pub fn weld(positions: &[Vec3]) -> Self {
        let n = positions.len();
        let mut canonical: Vec<Option<usize>> = vec![None; n];
        let mut members: Vec<Vec<usize>> = vec![Vec::new(); n];
        let mut canonicals = Vec::new();

        for i in 0..n {
            if canonical[i].is_some() {
                continue;
            }
            canonical[i] = Some(i);
            canonicals.push(i);
            members[i].push(i);

            let p = positions[i];
            for j in (i + 1)..n {
                if canonical[j].is_none() && positions[j] == p {
                    canonical[j] = Some(i);
                    members[i].push(j);
                }
            }
        }

        Self {
            canonical: canonical.into_iter().enumerate().map(|(i, c)| c.unwrap_or(i)).collect(),
            members,
            canonicals,
        }
    }

    /// Number of raw vertices.
    #[inline]
    pub fn vertex_count(&self) -> usize {
        self.canonical.len()
    }

    /// Number of canonical points (distinct positions).
    #[inline]
    pub fn point_count(&self) -> usize {
        self.canonicals.len()
    }

    /// Canonical index for raw vertex `raw`.
    #[inline]
    pub fn canonical_of(&self, raw: usize) -> usize {
        self.canonical[raw]
    }

    /// Typed form of [`PointGroups::canonical_of`].
    pub fn point_of(&self, vertex: VertexId) -> PointId {
        PointId(self.canonical[vertex.index()] as u32)
    }

    #[inline]
    pub fn is_canonical(&self, raw: usize) -> bool {
        self.canonical[raw] == raw
    }

    /// Raw vertices sharing canonical `k`, ascending. Empty if `k` is not canonical.
    #[inline]
    pub fn members(&self, k: usize) -> &[usize] {
        &self.members[k]
    }

    /// Group size of canonical `k`; the point's mass proxy.
    #[inline]
    pub fn multiplicity(&self, k: usize) -> usize {
        self.members[k].len()
    }

    /// Canonical indices in ascending order.
    #[inline]
    pub fn canonicals(&self) -> &[usize] {
        &self.canonicals
    }

    /// Maps a flat triangle index buffer onto canonical indices.
    pub fn canonicalize_triangles(&self, indices: &[u32]) -> WobbleResult<Vec<[usize; 3]>> {
        if indices.len() % 3 != 0 {
            return Err(WobbleError::InvalidMesh(
                "Index count is not divisible by 3".into(),
            ));
        }
        indices
            .chunks_exact(3)
            .map(|tri| {
                let mut out = [0usize; 3];
                for (slot, &raw) in out.iter_mut().zip(tri) {
                    let raw = raw as usize;
                    if raw >= self.vertex_count() {
                        return Err(WobbleError::InvalidMesh(format!(
                            "Triangle index {} out of range (vertex count: {})",
                            raw,
                            self.vertex_count()
                        )));
                    }
                    *slot = self.canonical[raw];
                }
                Ok(out)
            })
            .collect()
    }
}
