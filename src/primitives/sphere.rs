//! Latitude/longitude sphere grid.

use glam::{DVec2, DVec3};
use std::f64::consts::PI;

use crate::mesh::Mesh;

use super::clamp_dimension;

/// Generate a full UV sphere as one fully indexed `(slices+1) x (stacks+1)`
/// grid.
///
/// `slices` subdivides latitude (`theta` from 0 to pi, pole to pole) and
/// `stacks` longitude (`phi` from 0 to 2*pi). Pole rows and the wrap seam
/// are duplicated rather than welded, so every column owns a vertex with its
/// own texture coordinate; quads are emitted only for `i > 0 && j < stacks`,
/// which skips the degenerate pole row and the seam column.
pub fn generate_sphere(origin: DVec3, radius: f64, stacks: u32, slices: u32) -> Mesh {
    let radius = clamp_dimension("generate_sphere", "radius", radius);
    let stacks = stacks.clamp(3, 256);
    let slices = slices.clamp(2, 256);

    let mut mesh = Mesh::new();

    for i in 0..=slices {
        let theta = PI * i as f64 / slices as f64;
        let y = radius * theta.cos();

        for j in 0..=stacks {
            let phi = 2.0 * PI * j as f64 / stacks as f64;
            let x = -radius * theta.sin() * phi.sin();
            let z = -radius * theta.sin() * phi.cos();

            mesh.add_vertex(
                DVec3::new(x + origin.x, y + origin.y, z + origin.z),
                DVec2::new(j as f64 / stacks as f64, i as f64 / slices as f64),
            );

            if i > 0 && j < stacks {
                let row = i * (stacks + 1);
                let prev_row = (i - 1) * (stacks + 1);

                mesh.add_triangle(row + j, row + j + 1, prev_row + j);
                mesh.add_triangle(prev_row + j, row + j + 1, prev_row + j + 1);
            }
        }
    }

    mesh
}
