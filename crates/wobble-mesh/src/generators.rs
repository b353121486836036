//! Procedural mesh generators for tests and the CLI.
//!
//! Generators that produce seams (`uv_sphere`, `split_cube`) emit the
//! duplicate vertices with bit-identical positions, the way engine
//! exporters do, so the solver's exact-equality weld collapses them.

use glam::Vec3;

use crate::mesh::TriangleMesh;

/// Generates a flat rectangular quad grid in the XY plane.
///
/// The grid spans `[-width/2, width/2]` in X and `[-height/2, height/2]` in Y,
/// centered at the origin at Z=0. Every vertex is unique.
///
/// # Example
/// ```
/// use wobble_mesh::generators::quad_grid;
/// let mesh = quad_grid(2, 2, 1.0, 1.0);
/// assert_eq!(mesh.vertex_count(), 9);  // 3×3 vertices
/// assert_eq!(mesh.triangle_count(), 8); // 2×2 quads × 2 tris each
/// ```
pub fn quad_grid(cols: usize, rows: usize, width: f32, height: f32) -> TriangleMesh {
    let verts_x = cols + 1;
    let verts_y = rows + 1;
    let mut mesh = TriangleMesh::with_capacity(verts_x * verts_y, cols * rows * 2);

    let half_w = width / 2.0;
    let half_h = height / 2.0;

    for j in 0..verts_y {
        for i in 0..verts_x {
            let u = i as f32 / cols as f32;
            let v = j as f32 / rows as f32;
            mesh.push_vertex(
                Vec3::new(-half_w + u * width, half_h - v * height, 0.0),
                Vec3::Z,
                [u, v],
            );
        }
    }

    for j in 0..rows {
        for i in 0..cols {
            let top_left = (j * verts_x + i) as u32;
            let top_right = top_left + 1;
            let bot_left = top_left + verts_x as u32;
            let bot_right = bot_left + 1;

            mesh.push_triangle(top_left, bot_left, top_right);
            mesh.push_triangle(top_right, bot_left, bot_right);
        }
    }

    mesh.recalculate_bounds();
    mesh
}

/// Generates a UV sphere centered at the origin.
///
/// Every pole row collapses onto the exact pole position, and the last
/// longitude column repeats the first one, so the raw mesh has
/// `(stacks + 1) * (slices + 1)` vertices but only
/// `2 + (stacks - 1) * slices` distinct positions.
pub fn uv_sphere(radius: f32, stacks: usize, slices: usize) -> TriangleMesh {
    let vertex_count = (stacks + 1) * (slices + 1);
    let tri_count = stacks * slices * 2;
    let mut mesh = TriangleMesh::with_capacity(vertex_count, tri_count);

    for i in 0..=stacks {
        let phi = std::f32::consts::PI * i as f32 / stacks as f32;

        for j in 0..=slices {
            // The seam column reuses theta = 0 so it matches column 0 bit for bit.
            let column = if j == slices { 0 } else { j };
            let theta = 2.0 * std::f32::consts::PI * column as f32 / slices as f32;

            let unit = if i == 0 {
                Vec3::Y
            } else if i == stacks {
                Vec3::NEG_Y
            } else {
                Vec3::new(phi.sin() * theta.cos(), phi.cos(), phi.sin() * theta.sin())
            };

            mesh.push_vertex(
                unit * radius,
                unit,
                [j as f32 / slices as f32, i as f32 / stacks as f32],
            );
        }
    }

    for i in 0..stacks {
        for j in 0..slices {
            let a = (i * (slices + 1) + j) as u32;
            let b = a + (slices + 1) as u32;

            // Skip degenerate triangles at poles
            if i != 0 {
                mesh.push_triangle(a, b, a + 1);
            }
            if i != stacks - 1 {
                mesh.push_triangle(a + 1, b, b + 1);
            }
        }
    }

    mesh.recalculate_bounds();
    mesh
}

/// Corner sign patterns for each cube face, wound counter-clockwise
/// when seen from outside.
const CUBE_FACES: [([f32; 3], [[f32; 3]; 4]); 6] = [
    ([1.0, 0.0, 0.0], [[1.0, -1.0, -1.0], [1.0, 1.0, -1.0], [1.0, 1.0, 1.0], [1.0, -1.0, 1.0]]),
    ([-1.0, 0.0, 0.0], [[-1.0, -1.0, -1.0], [-1.0, -1.0, 1.0], [-1.0, 1.0, 1.0], [-1.0, 1.0, -1.0]]),
    ([0.0, 1.0, 0.0], [[-1.0, 1.0, -1.0], [-1.0, 1.0, 1.0], [1.0, 1.0, 1.0], [1.0, 1.0, -1.0]]),
    ([0.0, -1.0, 0.0], [[-1.0, -1.0, -1.0], [1.0, -1.0, -1.0], [1.0, -1.0, 1.0], [-1.0, -1.0, 1.0]]),
    ([0.0, 0.0, 1.0], [[-1.0, -1.0, 1.0], [1.0, -1.0, 1.0], [1.0, 1.0, 1.0], [-1.0, 1.0, 1.0]]),
    ([0.0, 0.0, -1.0], [[-1.0, -1.0, -1.0], [-1.0, 1.0, -1.0], [1.0, 1.0, -1.0], [1.0, -1.0, -1.0]]),
];

/// Generates an axis-aligned cube with hard edges: each face owns its
/// four vertices, giving 24 raw vertices over 8 distinct corners.
pub fn split_cube(size: f32) -> TriangleMesh {
    let half = size / 2.0;
    let mut mesh = TriangleMesh::with_capacity(24, 12);
    let uvs = [[0.0, 0.0], [1.0, 0.0], [1.0, 1.0], [0.0, 1.0]];

    for (normal, corners) in CUBE_FACES {
        let normal = Vec3::from_array(normal);
        let base = mesh.vertex_count() as u32;
        for (corner, uv) in corners.iter().zip(uvs) {
            mesh.push_vertex(Vec3::from_array(*corner) * half, normal, uv);
        }
        mesh.push_triangle(base, base + 1, base + 2);
        mesh.push_triangle(base, base + 2, base + 3);
    }

    mesh.recalculate_bounds();
    mesh
}
