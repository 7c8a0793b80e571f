//! Axis-aligned box built from six independent quad faces.

use glam::{DVec2, DVec3};

use crate::mesh::Mesh;

use super::clamp_dimension;

/// The six faces of a box, each its own mesh so every face can carry its
/// own material and stay flat-shaded.
#[derive(Clone, Debug, PartialEq)]
pub struct CubeMesh {
    pub left: Mesh,
    pub right: Mesh,
    pub top: Mesh,
    pub bottom: Mesh,
    pub front: Mesh,
    pub back: Mesh,
}

impl CubeMesh {
    pub fn faces(&self) -> [&Mesh; 6] {
        [
            &self.left,
            &self.right,
            &self.top,
            &self.bottom,
            &self.front,
            &self.back,
        ]
    }
}

/// Generate a box from its minimum (left-back-bottom) corner.
///
/// Length runs along X, height along Y, width along Z. No vertices are
/// shared across faces. Each face is two triangles in a fixed winding
/// (`0,1,2` then `2,1,3`) with corner UVs `(0,1) (1,1) (0,0) (1,0)`:
///
/// ```text
///  (2)            (3)
///   @--------------@
///   |              |
///   |              |
///   @--------------@
///  (0)            (1)
/// ```
pub fn generate_cube(origin: DVec3, width: f64, height: f64, length: f64) -> CubeMesh {
    let w = clamp_dimension("generate_cube", "width", width);
    let h = clamp_dimension("generate_cube", "height", height);
    let l = clamp_dimension("generate_cube", "length", length);

    CubeMesh {
        left: quad_face(
            origin,
            [
                DVec3::new(0.0, 0.0, 0.0),
                DVec3::new(0.0, 0.0, w),
                DVec3::new(0.0, h, 0.0),
                DVec3::new(0.0, h, w),
            ],
        ),
        right: quad_face(
            origin,
            [
                DVec3::new(l, 0.0, w),
                DVec3::new(l, 0.0, 0.0),
                DVec3::new(l, h, w),
                DVec3::new(l, h, 0.0),
            ],
        ),
        top: quad_face(
            origin,
            [
                DVec3::new(0.0, h, w),
                DVec3::new(l, h, w),
                DVec3::new(0.0, h, 0.0),
                DVec3::new(l, h, 0.0),
            ],
        ),
        bottom: quad_face(
            origin,
            [
                DVec3::new(l, 0.0, w),
                DVec3::new(0.0, 0.0, w),
                DVec3::new(l, 0.0, 0.0),
                DVec3::new(0.0, 0.0, 0.0),
            ],
        ),
        front: quad_face(
            origin,
            [
                DVec3::new(0.0, 0.0, w),
                DVec3::new(l, 0.0, w),
                DVec3::new(0.0, h, w),
                DVec3::new(l, h, w),
            ],
        ),
        back: quad_face(
            origin,
            [
                DVec3::new(l, 0.0, 0.0),
                DVec3::new(0.0, 0.0, 0.0),
                DVec3::new(l, h, 0.0),
                DVec3::new(0.0, h, 0.0),
            ],
        ),
    }
}

fn quad_face(origin: DVec3, corners: [DVec3; 4]) -> Mesh {
    const CORNER_UVS: [DVec2; 4] = [
        DVec2::new(0.0, 1.0),
        DVec2::new(1.0, 1.0),
        DVec2::new(0.0, 0.0),
        DVec2::new(1.0, 0.0),
    ];

    let mut mesh = Mesh::new();
    for (corner, uv) in corners.into_iter().zip(CORNER_UVS) {
        mesh.add_vertex(origin + corner, uv);
    }
    mesh.add_triangle(0, 1, 2);
    mesh.add_triangle(2, 1, 3);
    mesh
}
