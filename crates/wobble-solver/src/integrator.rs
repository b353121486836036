//! Explicit integrator for the spring network.
//!
//! One step:
//! 1. zero the force accumulator,
//! 2. accumulate every spring's force on its two canonical endpoints,
//! 3. for each canonical point `k`, with `a = F[k] / multiplicity[k]`:
//!    `x += v*dt + a*dt²/2`, then `v += a*dt`, and copy the result to every
//!    raw vertex in the group.
//!
//! The acceleration is evaluated once, before the position update, and is
//! reused for the velocity update. This is not velocity Verlet; the
//! ordering is kept as is.

use glam::Vec3;

use crate::spring::SpringNetwork;
use crate::state::SimulationState;
use crate::weld::PointGroups;

/// Sums spring forces into `state.forces`, indexed by canonical vertex.
///
/// Endpoint `a` receives `+F`, endpoint `b` receives `-F`. Reads positions
/// and velocities from canonical slots only.
pub fn accumulate_forces(state: &mut SimulationState, springs: &SpringNetwork) {
    state.forces.fill(Vec3::ZERO);

    for spring in springs {
        let (a, b) = (spring.a(), spring.b());
        let force = spring.force(
            state.position(a),
            state.position(b),
            state.velocity(a),
            state.velocity(b),
        );
        state.forces[a] += force;
        state.forces[b] -= force;
    }
}

/// Advances every canonical point by `dt` using the accumulated forces and
/// writes the new state to each member of its group.
pub fn advance(state: &mut SimulationState, groups: &PointGroups, dt: f32) {
    let half_dt2 = 0.5 * dt * dt;

    for &k in groups.canonicals() {
        let acceleration = state.forces[k] / groups.multiplicity(k) as f32;
        let position = state.position(k) + state.velocity(k) * dt + acceleration * half_dt2;
        let velocity = state.velocity(k) + acceleration * dt;

        for &i in groups.members(k) {
            state.set_acceleration(i, acceleration);
            state.set_position(i, position);
            state.set_velocity(i, velocity);
        }
    }
}

/// Force accumulation followed by integration.
pub fn step(state: &mut SimulationState, groups: &PointGroups, springs: &SpringNetwork, dt: f32) {
    accumulate_forces(state, springs);
    advance(state, groups, dt);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lone_point_keeps_constant_velocity() {
        let mut state = SimulationState::from_positions(&[Vec3::ZERO]);
        state.set_velocity(0, Vec3::new(1.0, 0.0, 0.0));
        let groups = PointGroups::weld(&state.positions());
        let springs = SpringNetwork::default();

        step(&mut state, &groups, &springs, 0.5);

        assert_eq!(state.position(0), Vec3::new(0.5, 0.0, 0.0));
        assert_eq!(state.velocity(0), Vec3::new(1.0, 0.0, 0.0));
        assert_eq!(state.acceleration(0), Vec3::ZERO);
    }
}
