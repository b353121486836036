//! State snapshot serialization for replay and debugging.

use std::path::Path;

use glam::Vec3;
use serde::{Deserialize, Serialize};
use wobble_mesh::Aabb;
use wobble_solver::{Simulation, SimulationState};
use wobble_types::{WobbleError, WobbleResult};

/// Raw vertex positions and velocities at one step.
///
/// Serialized with `bincode`. Buffers are interleaved: `[x0, y0, z0, x1, ...]`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StateSnapshot {
    /// Number of steps completed when the snapshot was taken.
    pub step: u64,
    /// Simulation time in seconds.
    pub sim_time: f64,
    pub positions: Vec<f32>,
    pub velocities: Vec<f32>,
    pub vertex_count: usize,
}

impl StateSnapshot {
    /// Copies the SoA buffers of `state` into a snapshot.
    pub fn capture(step: u64, sim_time: f64, state: &SimulationState) -> Self {
        let n = state.vertex_count;
        let mut positions = Vec::with_capacity(n * 3);
        let mut velocities = Vec::with_capacity(n * 3);

        for i in 0..n {
            positions.extend_from_slice(&[state.pos_x[i], state.pos_y[i], state.pos_z[i]]);
            velocities.extend_from_slice(&[state.vel_x[i], state.vel_y[i], state.vel_z[i]]);
        }

        Self {
            step,
            sim_time,
            positions,
            velocities,
            vertex_count: n,
        }
    }

    /// Snapshot of a running simulation at its current step.
    pub fn of_simulation(sim: &Simulation) -> Self {
        Self::capture(sim.step_count(), sim.sim_time(), sim.state())
    }

    pub fn position(&self, i: usize) -> Vec3 {
        Vec3::from_slice(&self.positions[i * 3..i * 3 + 3])
    }

    pub fn velocity(&self, i: usize) -> Vec3 {
        Vec3::from_slice(&self.velocities[i * 3..i * 3 + 3])
    }

    /// Bounding box of the captured positions.
    pub fn bounds(&self) -> Aabb {
        Aabb::from_points((0..self.vertex_count).map(|i| self.position(i)))
    }

    /// Largest per-vertex distance between two snapshots of the same mesh.
    pub fn max_displacement(&self, other: &StateSnapshot) -> WobbleResult<f32> {
        if self.vertex_count != other.vertex_count {
            return Err(WobbleError::InvalidMesh(format!(
                "Snapshot vertex counts differ: {} vs {}",
                self.vertex_count, other.vertex_count
            )));
        }
        Ok((0..self.vertex_count)
            .map(|i| self.position(i).distance(other.position(i)))
            .fold(0.0, f32::max))
    }

    /// Serializes to compact binary format.
    pub fn to_bytes(&self) -> WobbleResult<Vec<u8>> {
        bincode::serialize(self)
            .map_err(|e| WobbleError::Serialization(format!("Snapshot serialization failed: {e}")))
    }

    /// Deserializes from binary format and checks buffer lengths.
    pub fn from_bytes(data: &[u8]) -> WobbleResult<Self> {
        let snapshot: Self = bincode::deserialize(data).map_err(|e| {
            WobbleError::Serialization(format!("Snapshot deserialization failed: {e}"))
        })?;
        let expected = snapshot.vertex_count.checked_mul(3).ok_or_else(|| {
            WobbleError::Serialization(format!(
                "Snapshot vertex count {} is out of range",
                snapshot.vertex_count
            ))
        })?;
        if snapshot.positions.len() != expected || snapshot.velocities.len() != expected {
            return Err(WobbleError::Serialization(format!(
                "Snapshot buffers do not match vertex count {}",
                snapshot.vertex_count
            )));
        }
        Ok(snapshot)
    }

    pub fn write_to(&self, path: impl AsRef<Path>) -> WobbleResult<()> {
        std::fs::write(path, self.to_bytes()?)?;
        Ok(())
    }

    pub fn read_from(path: impl AsRef<Path>) -> WobbleResult<Self> {
        Self::from_bytes(&std::fs::read(path)?)
    }
}
