//! Mesh generators for the primitive solids.
//!
//! Every generator is a pure function from scalar parameters to one or more
//! freshly allocated [`Mesh`](crate::Mesh) values. Shapes whose surfaces can
//! carry different materials return one mesh per surface.

mod cone;
mod cube;
mod cylinder;
mod pyramid;
mod ring;
mod sphere;

pub use cone::{ConeMesh, generate_cone};
pub use cube::{CubeMesh, generate_cube};
pub use cylinder::{ArcBand, CylinderMesh, generate_cylinder, generate_frustum_side};
pub use pyramid::{PyramidMesh, generate_pyramid};
pub use ring::{RingMesh, generate_ring};
pub use sphere::generate_sphere;

use tracing::warn;

/// Default stack count for revolved surfaces.
pub const DEFAULT_STACKS: u32 = 20;
/// Latitude subdivision count for spheres.
pub const DEFAULT_SLICES: u32 = 20;

/// Clamp a length-like parameter to a small positive value.
///
/// Generators never divide by zero or emit NaN geometry; a bad dimension is
/// reported and replaced rather than poisoning the mesh.
pub(crate) fn clamp_dimension(generator: &str, name: &str, value: f64) -> f64 {
    if !value.is_finite() || value <= 0.0 {
        warn!("{generator}: {name} must be finite and > 0.0, clamping to 0.001");
        0.001
    } else {
        value
    }
}
