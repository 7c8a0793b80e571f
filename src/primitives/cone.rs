//! Cone lateral surface and base cap.

use glam::{DVec2, DVec3};
use std::f64::consts::PI;

use crate::circle::{arc_length_angle, generate_circle_fan, point_on_circle};
use crate::fuzzy;
use crate::mesh::Mesh;
use crate::sector::SectorArc;

use super::clamp_dimension;

/// Sub-meshes of a cone, one per material slot.
#[derive(Clone, Debug, PartialEq)]
pub struct ConeMesh {
    pub side: Mesh,
    pub bottom: Mesh,
}

impl ConeMesh {
    pub fn meshes(&self) -> [&Mesh; 2] {
        [&self.side, &self.bottom]
    }
}

/// Generate a cone: a lateral fan of stacks meeting at a single apex, plus
/// a base cap.
///
/// Unlike the frustum, the full cone flattens to one plain circular sector
/// (`R = sqrt(r^2 + h^2)`, angle `2*pi*r/R`), so the lateral texture
/// coordinates come straight from that sector's arc; the apex maps to
/// `(0.5, 0)`. The apex position is reused for every stack's top vertex.
pub fn generate_cone(
    origin: DVec3,
    radius: f64,
    height: f64,
    stacks: u32,
    share_points: bool,
) -> ConeMesh {
    let radius = clamp_dimension("generate_cone", "radius", radius);
    let height = clamp_dimension("generate_cone", "height", height);
    let stacks = stacks.clamp(3, 256);

    let apex = DVec3::new(origin.x, origin.y + height, origin.z);
    let apex_uv = DVec2::new(0.5, 0.0);
    let circumference = 2.0 * PI * radius;
    let texture = ConeArcTexture::new((radius * radius + height * height).sqrt(), circumference);

    let stride = if share_points { 2 } else { 4 };

    let mut side = Mesh::new();
    for i in 0..=stacks {
        let rim = point_on_circle(
            arc_length_angle(radius, circumference, i, stacks),
            origin,
            radius,
            0.0,
        );
        side.add_vertex(rim, texture.point(i, stacks));
        side.add_vertex(apex, apex_uv);

        if i < stacks {
            let base = i * stride;
            side.add_triangle(base, base + 2, base + 1);
            side.add_triangle(base + 1, base + 2, base + 3);

            if !share_points {
                let rim_next = point_on_circle(
                    arc_length_angle(radius, circumference, i + 1, stacks),
                    origin,
                    radius,
                    0.0,
                );
                // The duplicated seam vertex takes the next column's texture
                // so u runs from 0 to 1 without a jump inside any quad.
                side.add_vertex(rim_next, texture.point(i + 1, stacks));
                side.add_vertex(apex, apex_uv);

                if i == stacks - 1 {
                    break;
                }
            }
        }
    }

    let rim: Vec<DVec3> = side.positions.iter().copied().step_by(2).collect();
    let bottom = generate_circle_fan(&rim, radius, origin, share_points, |mesh, i| {
        let center = mesh.positions.len() as u32 - 1;
        mesh.add_triangle(i, center, i + 1);
    });

    ConeMesh { side, bottom }
}

/// Normalized texture position along the flattened cone's rim arc.
struct ConeArcTexture {
    arc: SectorArc,
}

impl ConeArcTexture {
    fn new(sector_radius: f64, sector_arc_length: f64) -> Self {
        Self {
            arc: SectorArc::new(sector_radius, sector_arc_length / sector_radius),
        }
    }

    fn point(&self, index: u32, stacks: u32) -> DVec2 {
        let p = self.arc.position(index, stacks);
        let v_extent = if fuzzy::less_than_or_close(self.arc.sector_radian, PI) {
            self.arc.height
        } else {
            self.arc.height + self.arc.sector_radius
        };
        DVec2::new(p.x / (self.arc.width * 2.0), p.y / v_extent)
    }
}
