//! # wobble-mesh
//!
//! Triangle mesh representation with Structure-of-Arrays (SoA) layout.
//! This is the renderable side of the simulator: the solver reads rest
//! positions and normals from it, and writes deformed positions back.
//!
//! ## Key Types
//!
//! - [`TriangleMesh`]: Positions, normals, UVs, and a flat index buffer.
//! - [`Aabb`]: Axis-aligned bounds, recomputed after every deformation.
//! - Procedural generators for tests and the CLI (quad grids, UV spheres,
//!   split-face cubes).

pub mod bounds;
pub mod generators;
pub mod mesh;
pub mod normals;

pub use bounds::Aabb;
pub use mesh::TriangleMesh;
