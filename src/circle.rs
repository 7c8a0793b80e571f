//! Shared primitives for revolved surfaces: arc-length stepping, rim point
//! placement, and the triangle-fan builder used for disk-shaped caps.

use glam::{DVec2, DVec3};
use std::f64::consts::PI;

use crate::mesh::Mesh;

/// Angle of the `index`-th of `stacks` equal arc-length divisions.
///
/// Dividing by arc length rather than by angle keeps unequal top/bottom
/// radii on a frustum aligned stack-for-stack. The arc is clamped to one
/// full circumference so an oversized range cannot lap the circle.
pub fn arc_length_angle(radius: f64, arc_length: f64, index: u32, stacks: u32) -> f64 {
    arc_length.min(2.0 * PI * radius) * index as f64 / stacks as f64 / radius
}

/// Point on a horizontal circle around `origin`, lifted by `y_offset`.
pub fn point_on_circle(radian: f64, origin: DVec3, radius: f64, y_offset: f64) -> DVec3 {
    DVec3::new(
        origin.x - radius * radian.sin(),
        origin.y + y_offset,
        origin.z - radius * radian.cos(),
    )
}

/// Build a disk cap as a triangle fan from a ring of perimeter points and an
/// explicit center point.
///
/// The fan's winding is supplied by `emit`, which receives the mesh and the
/// perimeter index to fan from; top caps emit `(i, i+1, center)` and bottom
/// caps `(i, center, i+1)` so outward normals stay consistent. The center
/// point is the last position in the returned mesh.
///
/// `share_points` must match the mode the perimeter was generated with: a
/// shared-point rim is one continuous loop, an unshared rim repeats each
/// seam point and is fanned pairwise.
///
/// Texture coordinates are the plain disk mapping of the XZ offsets from the
/// cap center, normalized by the rim radius.
pub fn generate_circle_fan(
    perimeter: &[DVec3],
    radius: f64,
    center: DVec3,
    share_points: bool,
    emit: impl Fn(&mut Mesh, u32),
) -> Mesh {
    let mut mesh = Mesh::new();
    mesh.positions.extend_from_slice(perimeter);
    mesh.positions.push(center);

    let count = mesh.positions.len();
    for i in 0..count {
        let p = mesh.positions[i];
        mesh.texcoords.push(DVec2::new(
            (radius + p.x - center.x) / (2.0 * radius),
            (radius + p.z - center.z) / (2.0 * radius),
        ));

        if share_points && i + 3 <= count {
            emit(&mut mesh, i as u32);
        }
        if !share_points && i + 2 <= count && i % 2 == 0 {
            emit(&mut mesh, i as u32);
        }
    }

    mesh
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ring(stacks: u32, radius: f64) -> Vec<DVec3> {
        (0..=stacks)
            .map(|i| {
                point_on_circle(
                    arc_length_angle(radius, 2.0 * PI * radius, i, stacks),
                    DVec3::ZERO,
                    radius,
                    0.0,
                )
            })
            .collect()
    }

    #[test]
    fn arc_length_angle_divides_the_circle() {
        let r = 4.0;
        assert_eq!(arc_length_angle(r, 2.0 * PI * r, 0, 8), 0.0);
        assert!((arc_length_angle(r, 2.0 * PI * r, 8, 8) - 2.0 * PI).abs() < 1e-12);
        // Longer-than-circumference arcs clamp to a single full turn.
        assert!((arc_length_angle(r, 100.0 * r, 8, 8) - 2.0 * PI).abs() < 1e-12);
    }

    #[test]
    fn point_on_circle_starts_at_negative_z() {
        let p = point_on_circle(0.0, DVec3::new(1.0, 2.0, 3.0), 4.0, 0.5);
        assert!((p - DVec3::new(1.0, 2.5, -1.0)).length() < 1e-12);
    }

    #[test]
    fn shared_fan_emits_one_triangle_per_stack() {
        let stacks = 6;
        let rim = ring(stacks, 2.0);
        let fan = generate_circle_fan(&rim, 2.0, DVec3::ZERO, true, |mesh, i| {
            let center = mesh.positions.len() as u32 - 1;
            mesh.add_triangle(i, i + 1, center);
        });

        assert_eq!(fan.vertex_count(), stacks as usize + 2);
        assert_eq!(fan.triangle_count(), stacks as usize);
        assert_eq!(fan.texcoords.len(), fan.positions.len());
    }

    #[test]
    fn unshared_fan_consumes_point_pairs() {
        // An unshared rim carries each edge's two endpoints explicitly.
        let stacks = 5;
        let shared = ring(stacks, 3.0);
        let mut rim = Vec::new();
        for w in shared.windows(2) {
            rim.push(w[0]);
            rim.push(w[1]);
        }

        let fan = generate_circle_fan(&rim, 3.0, DVec3::ZERO, false, |mesh, i| {
            let center = mesh.positions.len() as u32 - 1;
            mesh.add_triangle(i, center, i + 1);
        });

        assert_eq!(fan.vertex_count(), 2 * stacks as usize + 1);
        assert_eq!(fan.triangle_count(), stacks as usize);
    }

    #[test]
    fn fan_uvs_map_the_unit_disk() {
        let rim = ring(8, 5.0);
        let center = DVec3::new(7.0, 1.0, -2.0);
        let shifted: Vec<DVec3> = rim.iter().map(|p| *p + center).collect();

        let fan = generate_circle_fan(&shifted, 5.0, center, true, |mesh, i| {
            let c = mesh.positions.len() as u32 - 1;
            mesh.add_triangle(i, i + 1, c);
        });

        // Center maps to (0.5, 0.5) regardless of where the cap sits.
        let center_uv = *fan.texcoords.last().unwrap();
        assert!((center_uv - DVec2::new(0.5, 0.5)).length() < 1e-12);
        for uv in &fan.texcoords {
            assert!(uv.x >= -1e-12 && uv.x <= 1.0 + 1e-12);
            assert!(uv.y >= -1e-12 && uv.y <= 1.0 + 1e-12);
        }
    }
}
