//! # wobble-solver
//!
//! Soft-body deformation of a triangle mesh with damped edge springs.
//!
//! ## Key Types
//!
//! - [`PointGroups`]: raw vertices welded into canonical points
//! - [`SpringNetwork`]: one spring per distinct welded edge
//! - [`SimulationState`]: SoA buffers for positions, velocities, accelerations
//! - [`Simulation`]: owns everything; `initialize` once, `step` per frame
//! - [`MeshHost`]: the renderable mesh that receives updated positions

pub mod config;
pub mod host;
pub mod integrator;
pub mod interaction;
pub mod simulation;
pub mod spring;
pub mod state;
pub mod weld;

pub use config::SimulationConfig;
pub use host::MeshHost;
pub use interaction::{InteractionEvent, Nudge};
pub use simulation::{Simulation, StepReport};
pub use spring::{Spring, SpringKey, SpringNetwork};
pub use state::SimulationState;
pub use weld::PointGroups;
