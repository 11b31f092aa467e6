//! Snap-back correction for out-of-bounds pan.
//!
//! Runs after anything that can shrink the pan bounds while no drag is in
//! progress (zoom lowered, viewport resized, image swapped). The gesture
//! controller clamps its own output, so this only fires on constraint
//! changes that invalidate a previously valid pan.

use super::geometry::{Constraints, Pan};

/// Tolerance absorbing float noise from repeated pixel/fraction conversion.
/// Kept as a parameter so callers can tune it; this is the default.
pub const SNAP_EPSILON: f64 = 0.001;

/// Re-clamp a pan that violates the given constraints. Returns `None` when
/// the pan is already within tolerance, which is what makes the correction
/// idempotent: one emission, then silence.
pub fn corrected_pan(pan: Pan, constraints: &Constraints, epsilon: f64) -> Option<Pan> {
    let mut out = pan;
    let mut changed = false;
    if pan.x.abs() > constraints.max_pan_x + epsilon {
        out.x = pan.x.signum() * constraints.max_pan_x;
        changed = true;
    }
    if pan.y.abs() > constraints.max_pan_y + epsilon {
        out.y = pan.y.signum() * constraints.max_pan_y;
        changed = true;
    }
    changed.then_some(out)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::geometry::{compute_constraints, Dimensions};

    const EPS: f64 = 1e-9;

    fn constraints(max_x: f64, max_y: f64) -> Constraints {
        Constraints {
            max_pan_x: max_x,
            max_pan_y: max_y,
            base_width: 600.0,
            base_height: 300.0,
        }
    }

    #[test]
    fn out_of_bounds_pan_is_clamped_once() {
        // Scenario D: pan.x 0.6 against a 0.5 bound.
        let c = constraints(0.5, 0.0);
        let fixed = corrected_pan(Pan::new(0.6, 0.0), &c, SNAP_EPSILON).unwrap();
        assert!((fixed.x - 0.5).abs() < EPS);
        assert_eq!(fixed.y, 0.0);
        // Second pass sees the corrected value and stays silent.
        assert_eq!(corrected_pan(fixed, &c, SNAP_EPSILON), None);
    }

    #[test]
    fn sign_is_preserved() {
        let c = constraints(0.5, 0.5);
        let fixed = corrected_pan(Pan::new(-0.9, 0.9), &c, SNAP_EPSILON).unwrap();
        assert!((fixed.x + 0.5).abs() < EPS);
        assert!((fixed.y - 0.5).abs() < EPS);
    }

    #[test]
    fn violations_within_tolerance_are_ignored() {
        let c = constraints(0.5, 0.5);
        assert_eq!(corrected_pan(Pan::new(0.5005, -0.5009), &c, SNAP_EPSILON), None);
    }

    #[test]
    fn axes_correct_independently() {
        let c = constraints(0.5, 0.2);
        let fixed = corrected_pan(Pan::new(0.1, 0.4), &c, SNAP_EPSILON).unwrap();
        assert_eq!(fixed.x, 0.1);
        assert!((fixed.y - 0.2).abs() < EPS);
    }

    #[test]
    fn viewport_resize_reclamps_stale_pan() {
        // Scenario E flavor: a 600x300 image panned to the bound in a 300x300
        // viewport; widening the viewport to 600x300 makes the image an exact
        // cover again, so the pan must snap back to zero.
        let viewport = Some(Dimensions::new(300.0, 300.0));
        let image = Some(Dimensions::new(600.0, 300.0));
        let before = compute_constraints(viewport, image, 1.0).unwrap();
        let pan = before.clamp(Pan::new(0.5, 0.0));

        let widened = Some(Dimensions::new(600.0, 300.0));
        let after = compute_constraints(widened, image, 1.0).unwrap();
        let fixed = corrected_pan(pan, &after, SNAP_EPSILON).unwrap();
        assert_eq!(fixed, Pan::default());
        assert_eq!(corrected_pan(fixed, &after, SNAP_EPSILON), None);
    }

    #[test]
    fn zoom_out_reclamps_stale_pan() {
        let viewport = Some(Dimensions::new(300.0, 300.0));
        let image = Some(Dimensions::new(600.0, 300.0));
        let at_two = compute_constraints(viewport, image, 2.0).unwrap();
        let pan = at_two.clamp(Pan::new(9.0, 9.0));
        assert!((pan.x - 1.5).abs() < EPS);

        let at_one = compute_constraints(viewport, image, 1.0).unwrap();
        let fixed = corrected_pan(pan, &at_one, SNAP_EPSILON).unwrap();
        assert!((fixed.x - 0.5).abs() < EPS);
        assert_eq!(fixed.y, 0.0);
    }

    #[test]
    fn repeated_roundtrips_do_not_oscillate() {
        // Pixel -> fraction -> pixel conversion noise must never re-trigger a
        // correction on an already corrected value.
        let viewport = Dimensions::new(313.0, 207.0);
        let image = Some(Dimensions::new(1021.0, 769.0));
        let c = compute_constraints(Some(viewport), image, 1.7).unwrap();
        let mut pan = c.clamp(Pan::new(5.0, -5.0));
        for _ in 0..10 {
            let px = pan.x * viewport.width;
            let py = pan.y * viewport.height;
            pan = Pan::new(px / viewport.width, py / viewport.height);
            assert_eq!(corrected_pan(pan, &c, SNAP_EPSILON), None);
        }
    }
}
