//! Cylinder and frustum lateral surfaces plus their caps.

use glam::{DVec2, DVec3};

use crate::circle::{generate_circle_fan, point_on_circle};
use crate::fuzzy;
use crate::mesh::Mesh;
use crate::sector::{self, SectorArc, SectorUnwrap, Trapezoid};

use super::clamp_dimension;

/// Sub-meshes of a closed cylinder, one per material slot.
#[derive(Clone, Debug, PartialEq)]
pub struct CylinderMesh {
    pub side: Mesh,
    pub top: Mesh,
    pub bottom: Mesh,
}

impl CylinderMesh {
    pub fn meshes(&self) -> [&Mesh; 3] {
        [&self.side, &self.top, &self.bottom]
    }
}

/// Angular and vertical sub-range of a lateral surface.
///
/// `arc_start` and `arc_width` are arc lengths along the bottom rim;
/// `y_offset` is measured down from the top edge and `height` is the band's
/// own vertical extent. The full surface is
/// `{ arc_start: 0, arc_width: bottom circumference, y_offset: 0, height: slant height }`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ArcBand {
    pub arc_start: f64,
    pub arc_width: f64,
    pub y_offset: f64,
    pub height: f64,
}

/// Generate a closed right cylinder: lateral strip plus top and bottom caps.
///
/// The caps reuse the side mesh's rim vertices (selected by parity: odd
/// entries are the top rim, even the bottom) with an explicit center point,
/// fanned with opposite winding so both face outward.
pub fn generate_cylinder(
    origin: DVec3,
    radius: f64,
    height: f64,
    stacks: u32,
    share_points: bool,
) -> CylinderMesh {
    let radius = clamp_dimension("generate_cylinder", "radius", radius);
    let height = clamp_dimension("generate_cylinder", "height", height);
    let stacks = stacks.clamp(3, 256);

    let trapezoid = Trapezoid::of_frustum(radius, radius, height);
    let side = generate_frustum_side(origin, radius, radius, trapezoid, None, stacks, share_points);

    let top_rim: Vec<DVec3> = side.positions.iter().copied().skip(1).step_by(2).collect();
    let bottom_rim: Vec<DVec3> = side.positions.iter().copied().step_by(2).collect();

    let top_center = DVec3::new(origin.x, origin.y + height, origin.z);
    let top = generate_circle_fan(&top_rim, radius, top_center, share_points, |mesh, i| {
        let center = mesh.positions.len() as u32 - 1;
        mesh.add_triangle(i, i + 1, center);
    });
    let bottom = generate_circle_fan(&bottom_rim, radius, origin, share_points, |mesh, i| {
        let center = mesh.positions.len() as u32 - 1;
        mesh.add_triangle(i, center, i + 1);
    });

    CylinderMesh { side, top, bottom }
}

/// Generate the lateral surface of a cylinder or frustum.
///
/// Equal radii (under [`fuzzy::are_close`]) take the rectangular unwrap:
/// `u = i / stacks`, `v = 1` on the bottom rim and `0` on the top. Unequal
/// radii take the sector unwrap from [`crate::sector`], producing a
/// trapezoidal texture island that matches the true flattened shape.
///
/// With `share_points` set, consecutive stacks share their seam vertices
/// (index stride 2); otherwise every quad owns four fresh vertices (stride
/// 4) so both sides of a seam can carry distinct texture coordinates, which
/// partial bands and non-wrapping textures require.
///
/// `band` selects a sub-range of the surface; `None` generates the whole
/// circumference at full height. Callers validate dimensions; this routine
/// divides by `bottom_radius` without checking it.
pub fn generate_frustum_side(
    origin: DVec3,
    top_radius: f64,
    bottom_radius: f64,
    trapezoid: Trapezoid,
    band: Option<ArcBand>,
    stacks: u32,
    share_points: bool,
) -> Mesh {
    let band = band.unwrap_or(ArcBand {
        arc_start: 0.0,
        arc_width: trapezoid.bottom_width,
        y_offset: 0.0,
        height: trapezoid.height,
    });

    let unwrap = if fuzzy::are_close(top_radius, bottom_radius) {
        None
    } else {
        Some(FrustumUv::new(top_radius, bottom_radius, trapezoid.height))
    };

    let stride = if share_points { 2 } else { 4 };
    let bottom_y = trapezoid.height - band.y_offset - band.height;

    let mut mesh = Mesh::new();
    for i in 0..=stacks {
        push_side_pair(
            &mut mesh,
            i,
            stacks,
            origin,
            top_radius,
            bottom_radius,
            &band,
            bottom_y,
            unwrap.as_ref(),
        );

        if i < stacks {
            let base = i * stride;
            mesh.add_triangle(base, base + 2, base + 1);
            mesh.add_triangle(base + 1, base + 2, base + 3);

            if !share_points {
                push_side_pair(
                    &mut mesh,
                    i + 1,
                    stacks,
                    origin,
                    top_radius,
                    bottom_radius,
                    &band,
                    bottom_y,
                    unwrap.as_ref(),
                );

                if i == stacks - 1 {
                    break;
                }
            }
        }
    }

    mesh
}

/// Append one stack's bottom and top vertex, in that order.
#[allow(clippy::too_many_arguments)]
fn push_side_pair(
    mesh: &mut Mesh,
    index: u32,
    stacks: u32,
    origin: DVec3,
    top_radius: f64,
    bottom_radius: f64,
    band: &ArcBand,
    bottom_y: f64,
    unwrap: Option<&FrustumUv>,
) {
    let radian = band.arc_start / bottom_radius
        + band.arc_width * index as f64 / stacks as f64 / bottom_radius;

    let bottom_point = point_on_circle(radian, origin, bottom_radius, bottom_y);
    let top_point = point_on_circle(radian, origin, top_radius, bottom_y + band.height);

    let (bottom_uv, top_uv) = side_texcoords(index, stacks, top_radius, bottom_radius, unwrap);
    mesh.add_vertex(bottom_point, bottom_uv);
    mesh.add_vertex(top_point, top_uv);
}

/// Texture coordinates of one stack's (bottom, top) vertex pair.
fn side_texcoords(
    index: u32,
    stacks: u32,
    top_radius: f64,
    bottom_radius: f64,
    unwrap: Option<&FrustumUv>,
) -> (DVec2, DVec2) {
    let Some(uv) = unwrap else {
        let u = index as f64 / stacks as f64;
        return (DVec2::new(u, 1.0), DVec2::new(u, 0.0));
    };

    let top_point = uv.top_arc.position(index, stacks);
    let bottom_point = uv.bottom_arc.position(index, stacks);

    let radian = uv.unwrap.sector_radian;
    let size = uv.unwrap.size;

    if fuzzy::less_than(top_radius, bottom_radius) {
        let small = sector::small_arc_texture_point(
            top_point,
            uv.unwrap.top_sector_radius,
            uv.unwrap.bottom_sector_radius,
            radian,
        );
        let large = sector::large_arc_texture_point(
            bottom_point,
            uv.unwrap.top_sector_radius,
            radian,
        );
        (large / size, small / size)
    } else {
        let small = sector::small_arc_texture_point(
            bottom_point,
            uv.unwrap.bottom_sector_radius,
            uv.unwrap.top_sector_radius,
            radian,
        );
        let large = sector::large_arc_texture_point(
            top_point,
            uv.unwrap.bottom_sector_radius,
            radian,
        );

        // The narrow end is on top: reflect so the island stays upright.
        let small = DVec2::new(small.x, size.y - small.y);
        let large = DVec2::new(large.x, size.y - large.y);
        (small / size, large / size)
    }
}

/// Per-call sector unwrap state: the flattened geometry plus one parametric
/// arc per rim.
struct FrustumUv {
    unwrap: SectorUnwrap,
    top_arc: SectorArc,
    bottom_arc: SectorArc,
}

impl FrustumUv {
    fn new(top_radius: f64, bottom_radius: f64, slant_height: f64) -> Self {
        let unwrap = sector::unwrap_unchecked(top_radius, bottom_radius, slant_height);
        Self {
            top_arc: SectorArc::new(unwrap.top_sector_radius, unwrap.sector_radian),
            bottom_arc: SectorArc::new(unwrap.bottom_sector_radius, unwrap.sector_radian),
            unwrap,
        }
    }
}
