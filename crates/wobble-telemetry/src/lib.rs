//! # wobble-telemetry
//!
//! Event bus for simulation telemetry. The driver emits structured events
//! (step timing, nudges, energy) which pluggable sinks consume.

pub mod bus;
pub mod events;
pub mod sinks;

pub use bus::EventBus;
pub use events::{EventKind, SimulationEvent};
pub use sinks::{EventSink, TracingSink, VecSink};
