//! # wobble-types
//!
//! Shared types, identifiers, error types, and physical defaults
//! for the wobble soft-body simulator.
//!
//! This crate has zero domain logic. It defines the vocabulary
//! that all other wobble crates share.

pub mod constants;
pub mod error;
pub mod ids;

pub use error::{WobbleError, WobbleResult};
pub use ids::{PointId, VertexId};
