//! Hollow cylindrical ring: two walls and two annuli.

use glam::{DVec2, DVec3};

use crate::mesh::Mesh;

use super::clamp_dimension;

/// Sub-meshes of a ring, one per material slot. The outer wall and the
/// bottom annulus are wound opposite their counterparts so all four surfaces
/// face outward.
#[derive(Clone, Debug, PartialEq)]
pub struct RingMesh {
    pub inner_side: Mesh,
    pub outer_side: Mesh,
    pub top: Mesh,
    pub bottom: Mesh,
}

impl RingMesh {
    pub fn meshes(&self) -> [&Mesh; 4] {
        [&self.inner_side, &self.outer_side, &self.top, &self.bottom]
    }
}

/// One angular stack's worth of rim points, shared by all four sub-meshes.
struct RingPoint {
    inner_bottom: DVec3,
    inner_top: DVec3,
    outer_bottom: DVec3,
    outer_top: DVec3,
}

/// Generate a hollow ring of wall height `height`: inner radius `radius`,
/// outer radius `radius + thickness`.
///
/// The point table is computed once per call with plain angular stepping
/// (`360/stacks` degrees per stack) and every sub-mesh indexes into it.
///
/// Wall texture coordinates carry raw degrees in `u` (0 to 360) with `v` in
/// `[0, 1]`; callers that want normalized tiling rescale `u` themselves.
pub fn generate_ring(
    origin: DVec3,
    radius: f64,
    thickness: f64,
    height: f64,
    stacks: u32,
) -> RingMesh {
    let radius = clamp_dimension("generate_ring", "radius", radius);
    let thickness = clamp_dimension("generate_ring", "thickness", thickness);
    let height = clamp_dimension("generate_ring", "height", height);
    let stacks = stacks.clamp(3, 256);

    let inner_radius = radius;
    let outer_radius = radius + thickness;

    let table: Vec<RingPoint> = (0..=stacks)
        .map(|i| {
            let radian = stack_degrees(i, stacks).to_radians();
            let (sin, cos) = radian.sin_cos();

            let ix = inner_radius * cos;
            let ox = outer_radius * cos;
            let iz = -inner_radius * sin;
            let oz = -outer_radius * sin;

            RingPoint {
                inner_bottom: DVec3::new(origin.x + ix, origin.y, origin.z + iz),
                inner_top: DVec3::new(origin.x + ix, origin.y + height, origin.z + iz),
                outer_bottom: DVec3::new(origin.x + ox, origin.y, origin.z + oz),
                outer_top: DVec3::new(origin.x + ox, origin.y + height, origin.z + oz),
            }
        })
        .collect();

    RingMesh {
        inner_side: wall(&table, stacks, true),
        outer_side: wall(&table, stacks, false),
        top: annulus(&table, stacks, inner_radius, outer_radius, true),
        bottom: annulus(&table, stacks, inner_radius, outer_radius, false),
    }
}

fn stack_degrees(index: u32, stacks: u32) -> f64 {
    360.0 / stacks as f64 * index as f64
}

fn wall(table: &[RingPoint], stacks: u32, is_inner: bool) -> Mesh {
    let mut mesh = Mesh::new();

    for i in 0..=stacks {
        let p = &table[i as usize];
        let (bottom, top) = if is_inner {
            (p.inner_bottom, p.inner_top)
        } else {
            (p.outer_bottom, p.outer_top)
        };

        let u = stack_degrees(i, stacks);
        mesh.add_vertex(bottom, DVec2::new(u, 1.0));
        mesh.add_vertex(top, DVec2::new(u, 0.0));

        if i < stacks {
            let base = i * 2;
            if is_inner {
                // Faces the axis.
                mesh.add_triangle(base, base + 1, base + 2);
                mesh.add_triangle(base + 2, base + 1, base + 3);
            } else {
                mesh.add_triangle(base, base + 2, base + 1);
                mesh.add_triangle(base + 2, base + 3, base + 1);
            }
        }
    }

    mesh
}

fn annulus(
    table: &[RingPoint],
    stacks: u32,
    inner_radius: f64,
    outer_radius: f64,
    is_top: bool,
) -> Mesh {
    let mut mesh = Mesh::new();

    for i in 0..=stacks {
        let p = &table[i as usize];
        let (inner, outer) = if is_top {
            (p.inner_top, p.outer_top)
        } else {
            (p.inner_bottom, p.outer_bottom)
        };

        let radian = stack_degrees(i, stacks).to_radians();
        let (sin, cos) = radian.sin_cos();
        mesh.add_vertex(
            inner,
            DVec2::new(
                (outer_radius + inner_radius * cos) / (2.0 * outer_radius),
                (outer_radius - inner_radius * sin) / (2.0 * outer_radius),
            ),
        );
        mesh.add_vertex(
            outer,
            DVec2::new(
                (outer_radius + outer_radius * cos) / (2.0 * outer_radius),
                (outer_radius - inner_radius * sin) / (2.0 * outer_radius),
            ),
        );

        if i < stacks {
            let base = i * 2;
            if is_top {
                mesh.add_triangle(base, base + 1, base + 2);
                mesh.add_triangle(base + 2, base + 1, base + 3);
            } else {
                mesh.add_triangle(base, base + 2, base + 1);
                mesh.add_triangle(base + 2, base + 3, base + 1);
            }
        }
    }

    mesh
}
