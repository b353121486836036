//! Interaction adapter: pointer picks and collision contacts become
//! direct positional nudges on the nearest vertex group.
//!
//! A nudge is not physics: no impulse is recorded and velocities are left
//! alone. The displaced points then pull on their springs in the same step.

use glam::Vec3;
use serde::{Deserialize, Serialize};

use crate::host::MeshHost;
use crate::state::SimulationState;
use crate::weld::PointGroups;

/// External stimulus delivered to [`Simulation::step`](crate::Simulation::step).
///
/// Points are in mesh-local space.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum InteractionEvent {
    /// A pick ray hit the mesh at `point`.
    PointerPick { point: Vec3 },
    /// The mesh collided with something; one nudge per contact point.
    Collision { contacts: Vec<Vec3> },
}

impl InteractionEvent {
    /// Every point this event nudges, in order.
    pub fn points(&self) -> &[Vec3] {
        match self {
            InteractionEvent::PointerPick { point } => std::slice::from_ref(point),
            InteractionEvent::Collision { contacts } => contacts,
        }
    }
}

/// Record of one applied nudge.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Nudge {
    /// Raw vertex nearest to the stimulus.
    pub vertex: usize,
    /// Its canonical point.
    pub canonical: usize,
    /// Displacement applied to every vertex in the group.
    pub offset: Vec3,
    /// Number of raw vertices moved.
    pub moved: usize,
}

/// Raw vertex nearest to `point`, by Euclidean distance.
///
/// Linear scan; on ties the lowest index wins. `None` for an empty set or a
/// non-finite query point.
pub fn nearest_vertex(state: &SimulationState, point: Vec3) -> Option<usize> {
    if !point.is_finite() {
        return None;
    }
    let mut best: Option<(usize, f32)> = None;
    for i in 0..state.vertex_count {
        let d = state.position(i).distance_squared(point);
        match best {
            Some((_, best_d)) if d >= best_d => {}
            _ => best = Some((i, d)),
        }
    }
    best.map(|(i, _)| i)
}

/// Pushes the group nearest to `point` into the surface by `distance`.
///
/// Every member moves by `-normal * distance`, where `normal` is the host's
/// normal at the canonical vertex, so the group stays coincident.
pub fn nudge_nearest<H: MeshHost + ?Sized>(
    state: &mut SimulationState,
    groups: &PointGroups,
    host: &H,
    point: Vec3,
    distance: f32,
) -> Option<Nudge> {
    let Some(vertex) = nearest_vertex(state, point) else {
        tracing::trace!(?point, "nudge ignored: no target vertex");
        return None;
    };
    let canonical = groups.canonical_of(vertex);
    let offset = -host.normal(canonical) * distance;

    let members = groups.members(canonical);
    for &i in members {
        let moved = state.position(i) + offset;
        state.set_position(i, moved);
    }

    tracing::trace!(vertex, canonical, moved = members.len(), "nudged vertex group");
    Some(Nudge {
        vertex,
        canonical,
        offset,
        moved: members.len(),
    })
}
