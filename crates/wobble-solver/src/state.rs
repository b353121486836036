//! Simulation state: SoA buffers for all per-vertex data.
//!
//! This is the primary mutable data structure during simulation.
//! Every array is indexed by raw vertex. Only the canonical slot of a
//! group is read by the integrator; the other slots mirror it.

use glam::Vec3;
use wobble_mesh::TriangleMesh;

/// SoA simulation state buffers.
///
/// All arrays have length `vertex_count` and are sized once at
/// construction.
#[derive(Debug, Clone)]
pub struct SimulationState {
    /// Number of raw vertices.
    pub vertex_count: usize,

    // ─── Position (current) ───
    pub pos_x: Vec<f32>,
    pub pos_y: Vec<f32>,
    pub pos_z: Vec<f32>,

    // ─── Velocity ───
    pub vel_x: Vec<f32>,
    pub vel_y: Vec<f32>,
    pub vel_z: Vec<f32>,

    // ─── Acceleration from the most recent step ───
    pub acc_x: Vec<f32>,
    pub acc_y: Vec<f32>,
    pub acc_z: Vec<f32>,

    /// Per-step spring force accumulator. Scratch space, zeroed each step.
    pub(crate) forces: Vec<Vec3>,
}

impl SimulationState {
    /// Initialize state from a mesh at rest: positions copied, velocity
    /// and acceleration zero.
    pub fn from_mesh(mesh: &TriangleMesh) -> Self {
        Self::from_positions(&mesh.positions())
    }

    /// Initialize state at rest from AoS positions.
    pub fn from_positions(positions: &[Vec3]) -> Self {
        let n = positions.len();
        Self {
            vertex_count: n,
            pos_x: positions.iter().map(|p| p.x).collect(),
            pos_y: positions.iter().map(|p| p.y).collect(),
            pos_z: positions.iter().map(|p| p.z).collect(),
            vel_x: vec![0.0; n],
            vel_y: vec![0.0; n],
            vel_z: vec![0.0; n],
            acc_x: vec![0.0; n],
            acc_y: vec![0.0; n],
            acc_z: vec![0.0; n],
            forces: vec![Vec3::ZERO; n],
        }
    }

    #[inline]
    pub fn position(&self, i: usize) -> Vec3 {
        Vec3::new(self.pos_x[i], self.pos_y[i], self.pos_z[i])
    }

    #[inline]
    pub fn velocity(&self, i: usize) -> Vec3 {
        Vec3::new(self.vel_x[i], self.vel_y[i], self.vel_z[i])
    }

    #[inline]
    pub fn acceleration(&self, i: usize) -> Vec3 {
        Vec3::new(self.acc_x[i], self.acc_y[i], self.acc_z[i])
    }

    #[inline]
    pub fn set_position(&mut self, i: usize, p: Vec3) {
        self.pos_x[i] = p.x;
        self.pos_y[i] = p.y;
        self.pos_z[i] = p.z;
    }

    #[inline]
    pub fn set_velocity(&mut self, i: usize, v: Vec3) {
        self.vel_x[i] = v.x;
        self.vel_y[i] = v.y;
        self.vel_z[i] = v.z;
    }

    #[inline]
    pub fn set_acceleration(&mut self, i: usize, a: Vec3) {
        self.acc_x[i] = a.x;
        self.acc_y[i] = a.y;
        self.acc_z[i] = a.z;
    }

    /// All positions gathered into AoS form, one per raw vertex.
    pub fn positions(&self) -> Vec<Vec3> {
        (0..self.vertex_count).map(|i| self.position(i)).collect()
    }

    /// All velocities gathered into AoS form, one per raw vertex.
    /// Writes every position into `out`, reusing its allocation.
    pub fn positions_into(&self, out: &mut Vec<Vec3>) {
        out.clear();
        out.extend((0..self.vertex_count).map(|i| self.position(i)));
    }

    pub fn velocities(&self) -> Vec<Vec3> {
        (0..self.vertex_count).map(|i| self.velocity(i)).collect()
    }

    /// Spring forces accumulated during the most recent step.
    pub fn forces(&self) -> &[Vec3] {
        &self.forces
    }

    /// Kinetic energy `0.5 * Σ m_k * |v_k|²` over the given canonical
    /// points, with multiplicity as mass.
    pub fn kinetic_energy(&self, canonicals: impl IntoIterator<Item = (usize, usize)>) -> f64 {
        canonicals
            .into_iter()
            .map(|(k, multiplicity)| {
                0.5 * multiplicity as f64 * self.velocity(k).length_squared() as f64
            })
            .sum()
    }
}
