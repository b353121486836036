//! Simulation event types.
//!
//! Events are small value types tagged with the step index that produced
//! them.

use serde::{Deserialize, Serialize};

/// A simulation event emitted by the driver loop.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SimulationEvent {
    /// Step number (0-indexed).
    pub step: u64,
    /// Event payload.
    pub kind: EventKind,
}

/// Event payload variants.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum EventKind {
    /// Step started.
    StepBegin {
        /// Simulation time at the start of the step (seconds).
        sim_time: f64,
        /// Timestep requested for this step.
        dt: f32,
    },

    /// Step completed.
    StepEnd {
        /// Wall-clock time spent inside the step (seconds).
        wall_time: f64,
    },

    /// A contact point displaced a vertex group.
    Nudge {
        /// Raw vertex nearest to the contact point.
        vertex: usize,
        /// Canonical point of that vertex's group.
        canonical: usize,
        /// Number of raw vertices moved.
        moved: usize,
    },

    /// Energy of the spring network after the step.
    Energy {
        /// Kinetic energy, using group multiplicity as mass.
        kinetic: f64,
        /// Elastic energy stored in the springs.
        potential: f64,
    },

    /// Free-form event.
    Custom {
        label: String,
        /// JSON-encoded payload.
        payload: String,
    },
}

impl SimulationEvent {
    pub fn new(step: u64, kind: EventKind) -> Self {
        Self { step, kind }
    }
}
