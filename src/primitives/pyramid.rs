//! Right pyramid: independent apex triangles over an N-gon base.

use glam::{DVec2, DVec3};
use std::f64::consts::PI;

use crate::circle::{arc_length_angle, generate_circle_fan, point_on_circle};
use crate::mesh::Mesh;

use super::clamp_dimension;

/// Sub-meshes of a pyramid: one mesh per side face plus the base, so each
/// side can carry its own material while the base stays one fan.
#[derive(Clone, Debug, PartialEq)]
pub struct PyramidMesh {
    pub sides: Vec<Mesh>,
    pub bottom: Mesh,
}

impl PyramidMesh {
    pub fn meshes(&self) -> impl Iterator<Item = &Mesh> {
        self.sides.iter().chain(std::iter::once(&self.bottom))
    }
}

/// Generate a pyramid with `sides` triangular faces meeting at the apex.
///
/// Base rim points sit on the circle of `radius` around `origin`, placed by
/// the same arc-length stepping as the revolved generators. Side faces share
/// no vertices; the base is an unshared circle fan over each face's two rim
/// points. Every call rebuilds all faces.
pub fn generate_pyramid(origin: DVec3, radius: f64, height: f64, sides: u32) -> PyramidMesh {
    let radius = clamp_dimension("generate_pyramid", "radius", radius);
    let height = clamp_dimension("generate_pyramid", "height", height);
    let sides = sides.max(3);

    let apex = DVec3::new(origin.x, origin.y + height, origin.z);
    let circumference = 2.0 * PI * radius;

    let side_meshes: Vec<Mesh> = (0..sides)
        .map(|i| {
            let left = point_on_circle(
                arc_length_angle(radius, circumference, i, sides),
                origin,
                radius,
                0.0,
            );
            let right = point_on_circle(
                arc_length_angle(radius, circumference, i + 1, sides),
                origin,
                radius,
                0.0,
            );

            let mut mesh = Mesh::new();
            mesh.add_vertex(apex, DVec2::new(0.5, 0.0));
            mesh.add_vertex(left, DVec2::new(0.0, 1.0));
            mesh.add_vertex(right, DVec2::new(1.0, 1.0));
            mesh.add_triangle(0, 1, 2);
            mesh
        })
        .collect();

    // Each face contributes its two rim points, giving the pairwise layout
    // the unshared fan expects.
    let rim: Vec<DVec3> = side_meshes
        .iter()
        .flat_map(|mesh| mesh.positions[1..].iter().copied())
        .collect();

    let bottom = generate_circle_fan(&rim, radius, origin, false, |mesh, i| {
        let center = mesh.positions.len() as u32 - 1;
        mesh.add_triangle(i, center, i + 1);
    });

    PyramidMesh {
        sides: side_meshes,
        bottom,
    }
}
