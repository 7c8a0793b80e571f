//! Frustum sector-unwrap math.
//!
//! Cutting the lateral surface of a truncated cone along one generator line
//! and laying it flat produces an annular sector: the difference of two
//! similar circular sectors that share the notional cone apex obtained by
//! extending the narrow end. The radii of those sectors, the angle they
//! span, and the bounding box of the half sector are everything the
//! generators need to place geometrically accurate texture coordinates on
//! the side of a frustum, so the narrow end is not stretched the way a
//! plain rectangular unwrap would stretch it.
//!
//! All of this is texture-only: nothing here touches vertex positions.

use glam::DVec2;
use std::f64::consts::PI;
use thiserror::Error;

use crate::fuzzy;

/// Unwrapped lateral boundary of a frustum: the top and bottom rim arc
/// lengths and the slant height between them.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Trapezoid {
    pub top_width: f64,
    pub bottom_width: f64,
    pub height: f64,
}

impl Trapezoid {
    /// Boundary of the full lateral surface for the given rim radii and
    /// slant height.
    pub fn of_frustum(top_radius: f64, bottom_radius: f64, height: f64) -> Self {
        Self {
            top_width: 2.0 * PI * top_radius,
            bottom_width: 2.0 * PI * bottom_radius,
            height,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Error)]
pub enum SectorError {
    /// Both rims have the same radius, so the lateral surface unrolls to a
    /// rectangle and there is no cone apex to unwrap around. Reaching this
    /// means a caller skipped the equal-radii branch it should have taken.
    #[error("top and bottom radius are equal; lateral surface unrolls to a rectangle, not a sector")]
    EqualRadii,
}

/// Flattened-cone geometry of a frustum's lateral surface.
///
/// Derived and transient: computed per generation call, consumed by the UV
/// pass, never persisted.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SectorUnwrap {
    /// Distance from the notional apex to the top rim once flattened.
    pub top_sector_radius: f64,
    /// Distance from the notional apex to the bottom rim once flattened.
    pub bottom_sector_radius: f64,
    /// Angle spanned by the flattened sector.
    pub sector_radian: f64,
    /// Bounding size (width, height) of the half sector, used to normalize
    /// texture coordinates into [0, 1].
    pub size: DVec2,
}

/// Compute the flattened-sector geometry for a frustum's lateral surface.
///
/// `height` is the slant height of the surface. Fails with
/// [`SectorError::EqualRadii`] when the radii are indistinguishable under
/// [`fuzzy::are_close`]; that configuration is a cylinder and must take the
/// rectangular-unwrap path instead (the slope terms below would divide by
/// zero).
pub fn unwrap_frustum_sector(
    top_radius: f64,
    bottom_radius: f64,
    height: f64,
) -> Result<SectorUnwrap, SectorError> {
    if fuzzy::are_close(top_radius, bottom_radius) {
        return Err(SectorError::EqualRadii);
    }

    Ok(unwrap_unchecked(top_radius, bottom_radius, height))
}

/// Same as [`unwrap_frustum_sector`] without the contract check, for callers
/// that have already taken the unequal-radii branch.
pub(crate) fn unwrap_unchecked(top_radius: f64, bottom_radius: f64, height: f64) -> SectorUnwrap {
    let (top_sector_radius, bottom_sector_radius) =
        sector_radii(top_radius, bottom_radius, height);

    // A rim keeps its arc length when flattened, so the sector angle is the
    // original circumference over the flattened radius. By similarity the
    // result is identical computed from either rim.
    let sector_radian = 2.0 * PI * top_radius / top_sector_radius;

    let size = half_sector_size(
        top_radius,
        bottom_radius,
        top_sector_radius,
        bottom_sector_radius,
        sector_radian,
    );

    SectorUnwrap {
        top_sector_radius,
        bottom_sector_radius,
        sector_radian,
        size,
    }
}

/// Distances from the notional apex to each rim once flattened.
///
/// Extending the narrow rim to an apex gives a right cone whose slant length
/// above the narrow rim is `r_small * height / (r_large - r_small)`; both
/// flattened radii follow from Pythagoras on that extension.
fn sector_radii(top_radius: f64, bottom_radius: f64, height: f64) -> (f64, f64) {
    if fuzzy::less_than(top_radius, bottom_radius) {
        let extension = top_radius * height / (bottom_radius - top_radius);
        let top = (top_radius.powi(2) + extension.powi(2)).sqrt();
        let bottom = (bottom_radius.powi(2) + (height + extension).powi(2)).sqrt();
        (top, bottom)
    } else {
        let extension = bottom_radius * height / (top_radius - bottom_radius);
        let bottom = (bottom_radius.powi(2) + extension.powi(2)).sqrt();
        let top = (top_radius.powi(2) + (height + extension).powi(2)).sqrt();
        (top, bottom)
    }
}

/// Bounding box of the half sector, case-split on whether the sector opens
/// wider than a half turn.
///
/// Below pi the sector fits under its chord, so the height is the large
/// radius minus the small rim's projection; at or above pi the arc bulges
/// past the apex and the box is governed by the large radius alone.
fn half_sector_size(
    top_radius: f64,
    bottom_radius: f64,
    top_sector_radius: f64,
    bottom_sector_radius: f64,
    sector_radian: f64,
) -> DVec2 {
    let (small, large) = if fuzzy::less_than(top_radius, bottom_radius) {
        (top_sector_radius, bottom_sector_radius)
    } else {
        (bottom_sector_radius, top_sector_radius)
    };

    let half = sector_radian / 2.0;
    if fuzzy::less_than(sector_radian, PI) {
        DVec2::new(large * half.sin() * 2.0, large - small * half.cos())
    } else {
        DVec2::new(large * 2.0, large * (1.0 - half.cos()))
    }
}

/// Parametric arc of one flattened rim.
///
/// Evaluates the point at the `index`-th of `stacks` equal angular divisions
/// within the sector. The sector is kept upright and centered: for spans at
/// or beyond pi the bounding box is anchored differently so the curve still
/// starts at the box's left edge.
pub(crate) struct SectorArc {
    pub(crate) sector_radius: f64,
    pub(crate) sector_radian: f64,
    left_radian: f64,
    pub(crate) width: f64,
    pub(crate) height: f64,
}

impl SectorArc {
    pub(crate) fn new(sector_radius: f64, sector_radian: f64) -> Self {
        let left_radian = (2.0 * PI - sector_radian) / 2.0;
        let width = if fuzzy::greater_than_or_close(sector_radian, PI) {
            sector_radius
        } else {
            sector_radius * left_radian.sin()
        };
        let height = if fuzzy::less_than_or_close(sector_radian, PI) {
            sector_radius
        } else {
            sector_radius * left_radian.cos()
        };

        Self {
            sector_radius,
            sector_radian,
            left_radian,
            width,
            height,
        }
    }

    pub(crate) fn position(&self, index: u32, stacks: u32) -> DVec2 {
        let radian = self.left_radian + self.sector_radian * index as f64 / stacks as f64;

        let y_base = if fuzzy::less_than_or_close(self.sector_radian, PI) {
            0.0
        } else {
            self.height
        };

        DVec2::new(
            self.width - self.sector_radius * radian.sin(),
            y_base - self.sector_radius * radian.cos(),
        )
    }
}

/// Translate a small-rim arc point into the frame of the combined unwrap,
/// whose origin sits at the large arc's bounding-box corner.
pub(crate) fn small_arc_texture_point(
    point: DVec2,
    small_sector_radius: f64,
    large_sector_radius: f64,
    sector_radian: f64,
) -> DVec2 {
    let half = sector_radian / 2.0;
    if fuzzy::less_than(sector_radian, PI) {
        DVec2::new(
            point.x + (large_sector_radius - small_sector_radius) * half.sin(),
            point.y - small_sector_radius * half.cos(),
        )
    } else {
        DVec2::new(
            point.x + (large_sector_radius - small_sector_radius),
            point.y + (small_sector_radius - large_sector_radius) * half.cos(),
        )
    }
}

/// Translate a large-rim arc point into the combined unwrap's frame.
pub(crate) fn large_arc_texture_point(
    point: DVec2,
    small_sector_radius: f64,
    sector_radian: f64,
) -> DVec2 {
    if fuzzy::less_than(sector_radian, PI) {
        DVec2::new(point.x, point.y - small_sector_radius * (sector_radian / 2.0).cos())
    } else {
        point
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn frustum_unwrap_basic_properties() {
        let unwrap = unwrap_frustum_sector(2.0, 5.0, 10.0).unwrap();

        assert!(unwrap.top_sector_radius > 0.0);
        assert!(unwrap.bottom_sector_radius > unwrap.top_sector_radius);
        assert!(unwrap.sector_radian > 0.0 && unwrap.sector_radian < 2.0 * PI);
        assert!(unwrap.size.x > 0.0 && unwrap.size.y > 0.0);
    }

    #[test]
    fn sector_angle_agrees_from_both_rims() {
        let unwrap = unwrap_frustum_sector(2.0, 5.0, 10.0).unwrap();
        let from_bottom = 2.0 * PI * 5.0 / unwrap.bottom_sector_radius;
        assert!(
            (unwrap.sector_radian - from_bottom).abs() < 1e-12,
            "similar sectors must span the same angle: {} vs {}",
            unwrap.sector_radian,
            from_bottom
        );
    }

    #[test]
    fn inverted_frustum_swaps_radii() {
        // Same solid upside down: the flattened radii trade places.
        let narrow_top = unwrap_frustum_sector(2.0, 5.0, 10.0).unwrap();
        let narrow_bottom = unwrap_frustum_sector(5.0, 2.0, 10.0).unwrap();

        assert!((narrow_top.top_sector_radius - narrow_bottom.bottom_sector_radius).abs() < 1e-12);
        assert!((narrow_top.bottom_sector_radius - narrow_bottom.top_sector_radius).abs() < 1e-12);
        assert!((narrow_top.size - narrow_bottom.size).length() < 1e-12);
    }

    #[test]
    fn equal_radii_is_an_invalid_operation() {
        assert_eq!(
            unwrap_frustum_sector(3.0, 3.0, 7.0),
            Err(SectorError::EqualRadii)
        );
        // Differences below the comparison tolerance count as equal too.
        assert_eq!(
            unwrap_frustum_sector(3.0, 3.0 + 1e-15, 7.0),
            Err(SectorError::EqualRadii)
        );
    }

    #[test]
    fn arc_positions_span_the_bounding_width() {
        let unwrap = unwrap_unchecked(2.0, 5.0, 10.0);
        let arc = SectorArc::new(unwrap.bottom_sector_radius, unwrap.sector_radian);

        let first = arc.position(0, 8);
        let last = arc.position(8, 8);

        // The sector is symmetric, so the endpoints mirror about the center
        // of the bounding box.
        assert!((first.x + last.x - 2.0 * arc.width).abs() < 1e-12);
        assert!((first.y - last.y).abs() < 1e-12);
    }

    #[test]
    fn wide_sector_takes_the_reflex_branch() {
        // A squat frustum unrolls past a half turn.
        let unwrap = unwrap_unchecked(4.0, 5.0, 0.5);
        assert!(unwrap.sector_radian > PI);
        assert!((unwrap.size.x - unwrap.bottom_sector_radius * 2.0).abs() < 1e-12);
    }
}
