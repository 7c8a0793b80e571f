//! Procedural mesh generation for primitive solids.
//!
//! Generators build cylinders, cones, frustums, cubes, spheres, pyramids and
//! rings as indexed triangle meshes with `f64` positions and texture
//! coordinates. Shapes whose surfaces can carry different materials come
//! back as one [`Mesh`] per surface (a cylinder is a side plus two caps, a
//! cube six faces) rather than one welded blob.
//!
//! Texture coordinates are geometrically accurate where it matters: the
//! lateral surface of a frustum is unwrapped as a true annular sector (see
//! [`unwrap_frustum_sector`]) instead of stretched onto a rectangle, and the
//! cone maps its side onto the flattened circular sector.
//!
//! All revolved generators share the same conventions: the axis is +Y, rims
//! start at `-Z` from the shape's origin, and `share_points` picks between
//! welded seam vertices and per-quad duplicates (needed when both sides of a
//! seam want distinct texture coordinates).

pub mod fuzzy;

mod circle;
mod mesh;
mod primitives;
mod sector;

pub use circle::{arc_length_angle, generate_circle_fan, point_on_circle};
pub use mesh::Mesh;
pub use primitives::{
    ArcBand, ConeMesh, CubeMesh, CylinderMesh, DEFAULT_SLICES, DEFAULT_STACKS, PyramidMesh,
    RingMesh, generate_cone, generate_cube, generate_cylinder, generate_frustum_side,
    generate_pyramid, generate_ring, generate_sphere,
};
pub use sector::{SectorError, SectorUnwrap, Trapezoid, unwrap_frustum_sector};
