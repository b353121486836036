//! Integration tests for wobble-types.

use wobble_types::constants::{DEFAULT_DAMPING, DEFAULT_NUDGE_DISTANCE, DEFAULT_STIFFNESS};
use wobble_types::{PointId, VertexId, WobbleError};

// ─── ID Tests ──────────────────────────────────────────────────

#[test]
fn vertex_id_index() {
    let id = VertexId(42);
    assert_eq!(id.index(), 42);
}

#[test]
fn point_id_maps_to_representative_vertex() {
    let id = PointId(7);
    assert_eq!(id.index(), 7);
    assert_eq!(id.vertex(), VertexId(7));
}

#[test]
fn ids_are_serializable() {
    let id = PointId(100);
    let json = serde_json::to_string(&id).unwrap();
    let deserialized: PointId = serde_json::from_str(&json).unwrap();
    assert_eq!(id, deserialized);
}

// ─── Error Tests ──────────────────────────────────────────────

#[test]
fn error_display() {
    let err = WobbleError::InvalidMesh("index 42 out of range".into());
    assert!(err.to_string().contains("index 42"));
}

#[test]
fn timestep_error_display() {
    let err = WobbleError::InvalidTimestep(-0.5);
    let msg = err.to_string();
    assert!(msg.contains("-0.5"));
    assert!(msg.contains("non-negative"));
}

#[test]
fn io_error_converts() {
    let io = std::io::Error::new(std::io::ErrorKind::NotFound, "missing.toml");
    let err: WobbleError = io.into();
    assert!(matches!(err, WobbleError::Io(_)));
}

// ─── Constants ────────────────────────────────────────────────

#[test]
fn spring_defaults() {
    assert_eq!(DEFAULT_STIFFNESS, 0.5);
    assert_eq!(DEFAULT_DAMPING, 0.20);
    assert_eq!(DEFAULT_NUDGE_DISTANCE, 0.2);
}
