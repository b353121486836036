//! Integration tests for wobble-mesh.

use glam::Vec3;
use wobble_mesh::generators::{quad_grid, split_cube, uv_sphere};
use wobble_mesh::normals::{compute_vertex_normals, face_normal};
use wobble_mesh::TriangleMesh;

// ─── TriangleMesh Tests ───────────────────────────────────────

fn make_single_triangle() -> TriangleMesh {
    TriangleMesh::from_interleaved(
        &[0.0, 0.0, 0.0, 1.0, 0.0, 0.0, 0.0, 1.0, 0.0],
        &[0, 1, 2],
        &[0.0, 0.0, 1.0, 0.0, 0.0, 1.0],
    )
    .unwrap()
}

fn distinct_positions(mesh: &TriangleMesh) -> usize {
    let mut seen: Vec<[u32; 3]> = Vec::new();
    for i in 0..mesh.vertex_count() {
        let [x, y, z] = mesh.position(i);
        // +0.0 and -0.0 compare equal, so fold them before hashing bits.
        let key = [(x + 0.0).to_bits(), (y + 0.0).to_bits(), (z + 0.0).to_bits()];
        if !seen.contains(&key) {
            seen.push(key);
        }
    }
    seen.len()
}

#[test]
fn basic_counts() {
    let mesh = make_single_triangle();
    assert_eq!(mesh.vertex_count(), 3);
    assert_eq!(mesh.triangle_count(), 1);
}

#[test]
fn position_access() {
    let mesh = make_single_triangle();
    assert_eq!(mesh.position(1), [1.0, 0.0, 0.0]);
    assert_eq!(mesh.position_vec3(2), Vec3::new(0.0, 1.0, 0.0));
}

#[test]
fn from_interleaved_computes_normals_and_bounds() {
    let mesh = make_single_triangle();
    assert_eq!(mesh.normal_vec3(0), Vec3::Z);
    assert_eq!(mesh.bounds.min, Vec3::ZERO);
    assert_eq!(mesh.bounds.max, Vec3::new(1.0, 1.0, 0.0));
    assert_eq!(mesh.uv_u, vec![0.0, 1.0, 0.0]);
}

#[test]
fn from_interleaved_rejects_ragged_positions() {
    let result = TriangleMesh::from_interleaved(&[0.0, 1.0], &[], &[]);
    assert!(result.is_err());
}

#[test]
fn validate_catches_inconsistent_lengths() {
    let mut mesh = make_single_triangle();
    mesh.pos_y.push(99.0);
    assert!(mesh.validate().is_err());
}

#[test]
fn validate_catches_oob_index() {
    let mut mesh = make_single_triangle();
    mesh.indices[2] = 99;
    assert!(mesh.validate().is_err());
}

#[test]
fn validate_catches_partial_triangle() {
    let mut mesh = make_single_triangle();
    mesh.indices.push(0);
    assert!(mesh.validate().is_err());
}

#[test]
fn degenerate_triangles_are_legal_but_counted() {
    let mut mesh = make_single_triangle();
    mesh.indices.extend_from_slice(&[0, 0, 1]);
    assert!(mesh.validate().is_ok());
    assert_eq!(mesh.degenerate_triangle_count(), 1);
}

#[test]
fn set_positions_requires_full_upload() {
    let mut mesh = make_single_triangle();
    assert!(mesh.set_positions(&[Vec3::ZERO]).is_err());

    let moved = [Vec3::ONE, Vec3::new(2.0, 1.0, 1.0), Vec3::new(1.0, 2.0, 1.0)];
    mesh.set_positions(&moved).unwrap();
    assert_eq!(mesh.positions(), moved.to_vec());
}

#[test]
fn recalculate_bounds_follows_positions() {
    let mut mesh = make_single_triangle();
    mesh.set_position(0, Vec3::new(-3.0, 0.0, 0.0));
    mesh.recalculate_bounds();
    assert_eq!(mesh.bounds.min.x, -3.0);
}

#[test]
fn json_round_trip() {
    let mesh = make_single_triangle();
    let json = serde_json::to_string(&mesh).unwrap();
    let recovered: TriangleMesh = serde_json::from_str(&json).unwrap();
    assert_eq!(recovered.indices, mesh.indices);
    assert_eq!(recovered.pos_x, mesh.pos_x);
}

// ─── Generator Tests ──────────────────────────────────────────

#[test]
fn quad_grid_2x2() {
    let mesh = quad_grid(2, 2, 1.0, 1.0);
    assert_eq!(mesh.vertex_count(), 9);
    assert_eq!(mesh.triangle_count(), 8);
    assert!(mesh.validate().is_ok());
    assert_eq!(distinct_positions(&mesh), 9);
}

#[test]
fn quad_grid_dimensions() {
    let mesh = quad_grid(4, 4, 2.0, 2.0);
    assert!((mesh.pos_x[0] - (-1.0)).abs() < 1e-6);
    assert!((mesh.pos_y[0] - 1.0).abs() < 1e-6);
    assert!((mesh.pos_x[4] - 1.0).abs() < 1e-6);
}

#[test]
fn uv_sphere_counts() {
    let mesh = uv_sphere(1.0, 8, 16);
    assert_eq!(mesh.vertex_count(), 9 * 17);
    assert!(mesh.validate().is_ok());
    assert_eq!(mesh.degenerate_triangle_count(), 0);
}

#[test]
fn uv_sphere_seams_are_bit_identical() {
    let mesh = uv_sphere(1.0, 8, 16);
    // Two poles plus seven full rings of sixteen.
    assert_eq!(distinct_positions(&mesh), 2 + 7 * 16);
}

#[test]
fn uv_sphere_radius() {
    let mesh = uv_sphere(2.5, 8, 16);
    for i in 0..mesh.vertex_count() {
        let dist = mesh.position_vec3(i).length();
        assert!((dist - 2.5).abs() < 1e-4, "Vertex {} at distance {}", i, dist);
    }
}

#[test]
fn split_cube_has_24_vertices_over_8_corners() {
    let mesh = split_cube(2.0);
    assert_eq!(mesh.vertex_count(), 24);
    assert_eq!(mesh.triangle_count(), 12);
    assert_eq!(distinct_positions(&mesh), 8);
    assert_eq!(mesh.bounds.min, Vec3::splat(-1.0));
    assert_eq!(mesh.bounds.max, Vec3::splat(1.0));
}

#[test]
fn split_cube_faces_wind_outward() {
    let mesh = split_cube(1.0);
    for t in 0..mesh.triangle_count() {
        let [a, b, c] = mesh.triangle(t);
        let n = face_normal(
            mesh.position_vec3(a as usize),
            mesh.position_vec3(b as usize),
            mesh.position_vec3(c as usize),
        );
        let centroid = (mesh.position_vec3(a as usize)
            + mesh.position_vec3(b as usize)
            + mesh.position_vec3(c as usize))
            / 3.0;
        assert!(n.dot(centroid) > 0.0, "Triangle {} faces inward", t);
    }
}

// ─── Normal Tests ─────────────────────────────────────────────

#[test]
fn flat_grid_normals() {
    let mut mesh = quad_grid(4, 4, 1.0, 1.0);
    compute_vertex_normals(&mut mesh);
    for i in 0..mesh.vertex_count() {
        let n = mesh.normal_vec3(i);
        assert!(n.x.abs() < 1e-5);
        assert!(n.y.abs() < 1e-5);
        assert!(n.z.abs() > 0.99);
    }
}

#[test]
fn normals_are_unit_length() {
    let mut mesh = quad_grid(10, 10, 2.0, 2.0);
    mesh.recalculate_normals();
    for i in 0..mesh.vertex_count() {
        let len = mesh.normal_vec3(i).length();
        assert!((len - 1.0).abs() < 1e-5, "Normal at {} has length {}", i, len);
    }
}

#[test]
fn split_cube_normals_stay_per_face() {
    let mut mesh = split_cube(1.0);
    let before: Vec<Vec3> = (0..24).map(|i| mesh.normal_vec3(i)).collect();
    mesh.recalculate_normals();
    for (i, expected) in before.iter().enumerate() {
        assert!((mesh.normal_vec3(i) - *expected).length() < 1e-5);
    }
}

#[test]
fn sphere_normals_point_outward() {
    let mut mesh = uv_sphere(1.0, 8, 16);
    compute_vertex_normals(&mut mesh);
    let mut checked = 0;
    for i in 0..mesh.vertex_count() {
        let p = mesh.position_vec3(i);
        if (p.x * p.x + p.z * p.z).sqrt() < 0.15 {
            continue;
        }
        let dot = p.normalize().dot(mesh.normal_vec3(i));
        assert!(dot.abs() > 0.5, "Vertex {} normal misaligned: dot={}", i, dot);
        checked += 1;
    }
    assert!(checked > 0);
}
