//! # wobble-debug
//!
//! Binary state snapshots for replay and offline inspection.

pub mod snapshot;

pub use snapshot::StateSnapshot;
