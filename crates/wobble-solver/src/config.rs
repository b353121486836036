//! Simulation configuration.
//!
//! Spring coefficients, nudge size and the default frame timestep.

use serde::{Deserialize, Serialize};
use wobble_types::constants::{
    DEFAULT_DAMPING, DEFAULT_DT, DEFAULT_NUDGE_DISTANCE, DEFAULT_STIFFNESS,
};
use wobble_types::{WobbleError, WobbleResult};

/// Configuration for a [`Simulation`](crate::Simulation).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SimulationConfig {
    /// Global spring stiffness applied at build time.
    pub stiffness: f32,

    /// Global spring damping applied at build time.
    pub damping: f32,

    /// How far a pick or contact pushes a vertex group into the surface.
    pub nudge_distance: f32,

    /// Timestep used by drivers that run at a fixed rate (seconds).
    pub dt: f32,
}

impl Default for SimulationConfig {
    fn default() -> Self {
        Self {
            stiffness: DEFAULT_STIFFNESS,
            damping: DEFAULT_DAMPING,
            nudge_distance: DEFAULT_NUDGE_DISTANCE,
            dt: DEFAULT_DT,
        }
    }
}

impl SimulationConfig {
    pub fn with_stiffness(mut self, stiffness: f32) -> Self {
        self.stiffness = stiffness;
        self
    }

    pub fn with_damping(mut self, damping: f32) -> Self {
        self.damping = damping;
        self
    }

    pub fn with_nudge_distance(mut self, nudge_distance: f32) -> Self {
        self.nudge_distance = nudge_distance;
        self
    }

    pub fn with_dt(mut self, dt: f32) -> Self {
        self.dt = dt;
        self
    }

    /// Rejects non-finite values and negative coefficients.
    pub fn validate(&self) -> WobbleResult<()> {
        let fields = [
            ("stiffness", self.stiffness),
            ("damping", self.damping),
            ("nudge_distance", self.nudge_distance),
            ("dt", self.dt),
        ];
        for (name, value) in fields {
            if !value.is_finite() || value < 0.0 {
                return Err(WobbleError::InvalidConfig(format!(
                    "{name} must be finite and non-negative, got {value}"
                )));
            }
        }
        Ok(())
    }
}
