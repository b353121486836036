//! Vertex normal computation from triangle mesh data.
//!
//! Area-weighted: each face normal is accumulated, unnormalized, at its
//! three corners. Normals are per raw vertex, so split vertices on a hard
//! seam only see the faces that index them directly.

use glam::Vec3;

use crate::mesh::TriangleMesh;

/// Recompute vertex normals from triangle geometry (area-weighted).
///
/// Vertices touched by no triangle, or only by zero-area ones, keep a
/// zero normal. Modifies `normal_x`, `normal_y`, `normal_z` in place.
pub fn compute_vertex_normals(mesh: &mut TriangleMesh) {
    let n = mesh.vertex_count();
    let mut accum = vec![Vec3::ZERO; n];

    for t in 0..mesh.triangle_count() {
        let [ia, ib, ic] = mesh.triangle(t);
        let (a, b, c) = (ia as usize, ib as usize, ic as usize);

        let pa = mesh.position_vec3(a);
        let e1 = mesh.position_vec3(b) - pa;
        let e2 = mesh.position_vec3(c) - pa;

        // Magnitude = 2 × triangle area
        let face = e1.cross(e2);
        accum[a] += face;
        accum[b] += face;
        accum[c] += face;
    }

    for (i, normal) in accum.into_iter().enumerate() {
        let unit = normal.normalize_or_zero();
        mesh.normal_x[i] = unit.x;
        mesh.normal_y[i] = unit.y;
        mesh.normal_z[i] = unit.z;
    }
}

/// Unit normal of a single triangle, or zero if it has no area.
pub fn face_normal(a: Vec3, b: Vec3, c: Vec3) -> Vec3 {
    (b - a).cross(c - a).normalize_or_zero()
}
