//! Simulation defaults.

/// Default spring stiffness (force per unit of extension).
pub const DEFAULT_STIFFNESS: f32 = 0.5;

/// Default spring damping, applied to relative velocity along the spring axis.
pub const DEFAULT_DAMPING: f32 = 0.20;

/// Default displacement applied to a vertex group by a pointer pick or contact.
pub const DEFAULT_NUDGE_DISTANCE: f32 = 0.2;

/// Default simulation timestep (seconds). 1/60th of a second.
pub const DEFAULT_DT: f32 = 1.0 / 60.0;

/// Below this length a spring has no usable direction.
pub const ZERO_LENGTH_EPSILON: f32 = 1.0e-10;
