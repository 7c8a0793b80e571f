//! Triangle mesh value type shared by every generator.

use glam::{DVec2, DVec3};

/// An indexed triangle mesh with per-vertex texture coordinates.
///
/// `texcoords` parallels `positions` (same length, same order) and
/// `triangles` holds index triples into both. Winding is counter-clockwise
/// as seen from the outward-normal side of each face; generators enforce
/// this by fixed index-emission order rather than by computing normals.
///
/// Every generator returns a freshly allocated mesh and never mutates one
/// after returning it, so results can be cached, discarded, and regenerated
/// by the caller without coordination.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Mesh {
    pub positions: Vec<DVec3>,
    pub texcoords: Vec<DVec2>,
    pub triangles: Vec<u32>,
}

impl Mesh {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a vertex and its texture coordinate, returning the new index.
    pub fn add_vertex(&mut self, position: DVec3, uv: DVec2) -> u32 {
        let index = self.positions.len() as u32;
        self.positions.push(position);
        self.texcoords.push(uv);
        index
    }

    /// Append one triangle's worth of indices.
    pub fn add_triangle(&mut self, i0: u32, i1: u32, i2: u32) {
        self.triangles.push(i0);
        self.triangles.push(i1);
        self.triangles.push(i2);
    }

    pub fn vertex_count(&self) -> usize {
        self.positions.len()
    }

    pub fn triangle_count(&self) -> usize {
        self.triangles.len() / 3
    }
}
