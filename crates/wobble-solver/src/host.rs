//! The renderable mesh as seen by the solver.
//!
//! The host owns normals and bounds. The solver reads normals for nudges,
//! uploads positions after each step, and then asks the host to refresh
//! bounds and normals.

use glam::Vec3;
use wobble_mesh::TriangleMesh;
use wobble_types::WobbleResult;

/// Mesh consumer/provider driven by [`Simulation::step`](crate::Simulation::step).
pub trait MeshHost {
    /// Number of raw vertices the host holds.
    fn vertex_count(&self) -> usize;

    /// Current normal of raw vertex `i`.
    fn normal(&self, i: usize) -> Vec3;

    /// Receives one position per raw vertex.
    fn upload_positions(&mut self, positions: &[Vec3]) -> WobbleResult<()>;

    /// Refreshes bounds from the uploaded positions.
    fn recalculate_bounds(&mut self);

    /// Refreshes per-vertex normals from the uploaded positions.
    fn recalculate_normals(&mut self);
}

impl MeshHost for TriangleMesh {
    fn vertex_count(&self) -> usize {
        TriangleMesh::vertex_count(self)
    }

    fn normal(&self, i: usize) -> Vec3 {
        self.normal_vec3(i)
    }

    fn upload_positions(&mut self, positions: &[Vec3]) -> WobbleResult<()> {
        self.set_positions(positions)
    }

    fn recalculate_bounds(&mut self) {
        TriangleMesh::recalculate_bounds(self);
    }

    fn recalculate_normals(&mut self) {
        TriangleMesh::recalculate_normals(self);
    }
}
