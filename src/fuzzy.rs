//! Tolerant floating-point comparisons.
//!
//! Geometry branches ("is this a cylinder or a frustum?") must not hinge on
//! exact `==` over values that went through trigonometry. The epsilon here
//! scales with the magnitude of the operands, so comparisons neither fail at
//! large magnitudes nor fire spuriously near zero. Every generator in this
//! crate goes through these functions instead of comparing directly; an
//! inconsistent tolerance between two call sites shows up as visibly wrong
//! texture coordinates.

/// Whether two values are within rounding error of each other.
pub fn are_close(a: f64, b: f64) -> bool {
    // Handles infinities and exact matches before the subtraction below.
    if a == b {
        return true;
    }

    let eps = (a.abs() + b.abs() + 10.0) * f64::EPSILON;
    let delta = a - b;
    -eps < delta && delta < eps
}

/// Strictly less, treating near-equal values as equal.
pub fn less_than(a: f64, b: f64) -> bool {
    a < b && !are_close(a, b)
}

/// Strictly greater, treating near-equal values as equal.
pub fn greater_than(a: f64, b: f64) -> bool {
    a > b && !are_close(a, b)
}

/// Less than, or within rounding error.
pub fn less_than_or_close(a: f64, b: f64) -> bool {
    a < b || are_close(a, b)
}

/// Greater than, or within rounding error.
pub fn greater_than_or_close(a: f64, b: f64) -> bool {
    a > b || are_close(a, b)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn equal_values_are_close() {
        for r in [0.0, 1.0, 4.0, 1e-12, 1e12, std::f64::consts::PI] {
            assert!(are_close(r, r), "are_close({r}, {r}) should hold");
            assert!(!less_than(r, r));
            assert!(!greater_than(r, r));
            assert!(less_than_or_close(r, r));
            assert!(greater_than_or_close(r, r));
        }
    }

    #[test]
    fn sub_epsilon_differences_are_close() {
        assert!(are_close(1.0, 1.0 + 1e-17));
        assert!(!less_than(1.0, 1.0 + 1e-17));
        assert!(greater_than_or_close(1.0, 1.0 + 1e-17));
    }

    #[test]
    fn real_differences_are_detected() {
        assert!(less_than(1.0, 1.0 + 1e-9));
        assert!(greater_than(2.0, 1.0));
        assert!(!are_close(1.0, 1.0 + 1e-9));
    }

    #[test]
    fn tolerance_scales_with_magnitude() {
        // One-ulp gaps at large magnitude are close, large gaps are not.
        let big = 1e12;
        assert!(are_close(big, big + big * f64::EPSILON));
        assert!(!are_close(big, big + 1.0));

        // Near zero the +10.0 term acts as an absolute floor, so values that
        // only differ by denormal-scale noise still compare equal.
        assert!(are_close(1e-20, 3e-20));
        assert!(!are_close(0.0, 1e-9));
    }

    #[test]
    fn close_implies_both_or_comparisons() {
        let pairs = [(4.0, 4.0 + 1e-16), (-7.0, -7.0), (0.0, f64::EPSILON)];
        for (a, b) in pairs {
            assert!(are_close(a, b));
            assert!(less_than_or_close(a, b) && greater_than_or_close(a, b));
        }
    }
}
