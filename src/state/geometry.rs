//! Cover-fit geometry for the photo viewport.
//!
//! All pan values are signed fractions of the viewport dimension on the same
//! axis, measured from the viewport center. Pixel values only appear here
//! transiently while deriving the pan bounds.

/// A measured pixel size. Sizes that have not been observed yet are carried
/// around as `Option<Dimensions>`, never as a zeroed value.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Dimensions {
    pub width: f64,
    pub height: f64,
}

impl Dimensions {
    pub fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }

    fn has_zero_axis(&self) -> bool {
        self.width <= 0.0 || self.height <= 0.0
    }
}

/// Offset of the image center from the viewport center, as a fraction of the
/// viewport size per axis.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Pan {
    pub x: f64,
    pub y: f64,
}

impl Pan {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// Derived pan bounds and cover-fit base size for the current geometry.
/// Recomputed whenever viewport size, image size, or zoom changes; never
/// stored across events.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Constraints {
    pub max_pan_x: f64,
    pub max_pan_y: f64,
    pub base_width: f64,
    pub base_height: f64,
}

impl Constraints {
    /// Clamp a candidate pan into the allowed range on both axes.
    pub fn clamp(&self, pan: Pan) -> Pan {
        Pan {
            x: pan.x.clamp(-self.max_pan_x, self.max_pan_x),
            y: pan.y.clamp(-self.max_pan_y, self.max_pan_y),
        }
    }
}

/// Cover-fit constraint calculation.
///
/// Returns `None` until both sizes are known and non-degenerate; callers are
/// expected to defer all pan/zoom math in that case. At `zoom = 1` the image
/// exactly covers the viewport and both pan bounds are zero.
pub fn compute_constraints(
    viewport: Option<Dimensions>,
    image: Option<Dimensions>,
    zoom: f64,
) -> Option<Constraints> {
    let viewport = viewport?;
    let image = image?;
    if viewport.has_zero_axis() || image.has_zero_axis() {
        return None;
    }

    let image_ratio = image.width / image.height;
    let viewport_ratio = viewport.width / viewport.height;

    // Cover fit: the relatively shorter axis of the image matches the
    // viewport exactly, the other overflows.
    let (base_width, base_height) = if image_ratio > viewport_ratio {
        (viewport.height * image_ratio, viewport.height)
    } else {
        (viewport.width, viewport.width / image_ratio)
    };

    let scaled_width = base_width * zoom;
    let scaled_height = base_height * zoom;

    // Pixel overflow past the viewport edge, per side.
    let overflow_x = ((scaled_width - viewport.width) / 2.0).max(0.0);
    let overflow_y = ((scaled_height - viewport.height) / 2.0).max(0.0);

    Some(Constraints {
        max_pan_x: overflow_x / viewport.width,
        max_pan_y: overflow_y / viewport.height,
        base_width,
        base_height,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPS: f64 = 1e-9;

    fn dims(w: f64, h: f64) -> Option<Dimensions> {
        Some(Dimensions::new(w, h))
    }

    #[test]
    fn unknown_sizes_yield_no_constraints() {
        assert_eq!(compute_constraints(None, dims(600.0, 300.0), 1.0), None);
        assert_eq!(compute_constraints(dims(300.0, 300.0), None, 1.0), None);
        assert_eq!(compute_constraints(None, None, 1.0), None);
    }

    #[test]
    fn zero_axis_is_treated_as_unknown() {
        assert_eq!(compute_constraints(dims(0.0, 300.0), dims(600.0, 300.0), 1.0), None);
        assert_eq!(compute_constraints(dims(300.0, 300.0), dims(600.0, 0.0), 1.0), None);
    }

    #[test]
    fn wide_image_in_square_viewport() {
        // Scenario A: 600x300 image in a 300x300 viewport at zoom 1.
        let c = compute_constraints(dims(300.0, 300.0), dims(600.0, 300.0), 1.0).unwrap();
        assert!((c.base_width - 600.0).abs() < EPS);
        assert!((c.base_height - 300.0).abs() < EPS);
        assert!((c.max_pan_x - 0.5).abs() < EPS);
        assert!(c.max_pan_y.abs() < EPS);
    }

    #[test]
    fn zoomed_wide_image_grows_pan_bound() {
        // Scenario B: same geometry at zoom 2, scaled width 1200.
        let c = compute_constraints(dims(300.0, 300.0), dims(600.0, 300.0), 2.0).unwrap();
        assert!((c.base_width * 2.0 - 1200.0).abs() < EPS);
        assert!((c.max_pan_x - 1.5).abs() < EPS);
        assert!((c.max_pan_y - 0.5).abs() < EPS);
    }

    #[test]
    fn base_size_preserves_image_aspect_and_covers_viewport() {
        let cases = [
            ((300.0, 300.0), (600.0, 300.0)),
            ((300.0, 300.0), (300.0, 600.0)),
            ((400.0, 250.0), (1024.0, 768.0)),
            ((250.0, 400.0), (3000.0, 1000.0)),
            ((333.0, 777.0), (123.0, 456.0)),
        ];
        for ((vw, vh), (iw, ih)) in cases {
            for zoom in [1.0, 1.5, 2.0, 3.0] {
                let c = compute_constraints(dims(vw, vh), dims(iw, ih), zoom).unwrap();
                let aspect = c.base_width / c.base_height;
                assert!(
                    (aspect - iw / ih).abs() < 1e-6,
                    "aspect drifted for {vw}x{vh} / {iw}x{ih}"
                );
                assert!(c.base_width * zoom >= vw - EPS);
                assert!(c.base_height * zoom >= vh - EPS);
            }
        }
    }

    #[test]
    fn no_panning_at_exact_cover() {
        let cases = [
            ((300.0, 300.0), (600.0, 300.0)),
            ((300.0, 300.0), (300.0, 600.0)),
            ((640.0, 480.0), (640.0, 480.0)),
            ((17.0, 43.0), (512.0, 512.0)),
        ];
        for ((vw, vh), (iw, ih)) in cases {
            let c = compute_constraints(dims(vw, vh), dims(iw, ih), 1.0).unwrap();
            // The matched axis is exact; the other overflows, so exactly one
            // bound may be positive but the matched one must be zero.
            assert!(c.max_pan_x.abs() < 1e-9 || c.max_pan_y.abs() < 1e-9);
            if (iw / ih - vw / vh).abs() < EPS {
                assert!(c.max_pan_x.abs() < 1e-9 && c.max_pan_y.abs() < 1e-9);
            }
        }
    }

    #[test]
    fn square_image_in_square_viewport_has_zero_bounds_at_cover() {
        let c = compute_constraints(dims(300.0, 300.0), dims(512.0, 512.0), 1.0).unwrap();
        assert!(c.max_pan_x.abs() < EPS);
        assert!(c.max_pan_y.abs() < EPS);
    }

    #[test]
    fn pan_bounds_grow_monotonically_with_zoom() {
        let viewport = dims(320.0, 240.0);
        let image = dims(800.0, 600.0);
        let mut prev = compute_constraints(viewport, image, 1.0).unwrap();
        for zoom in [1.2, 1.5, 2.0, 2.5, 3.0] {
            let c = compute_constraints(viewport, image, zoom).unwrap();
            assert!(c.max_pan_x > prev.max_pan_x);
            assert!(c.max_pan_y > prev.max_pan_y);
            prev = c;
        }
    }

    #[test]
    fn zoom_below_one_degrades_to_zero_bounds() {
        // Out-of-range zoom is not rejected; the overflow floor of zero just
        // disables panning.
        let c = compute_constraints(dims(300.0, 300.0), dims(600.0, 300.0), 0.25).unwrap();
        assert_eq!(c.max_pan_x, 0.0);
        assert_eq!(c.max_pan_y, 0.0);
    }

    #[test]
    fn clamp_limits_both_axes() {
        let c = compute_constraints(dims(300.0, 300.0), dims(600.0, 300.0), 2.0).unwrap();
        let clamped = c.clamp(Pan::new(9.0, -9.0));
        assert!((clamped.x - c.max_pan_x).abs() < EPS);
        assert!((clamped.y + c.max_pan_y).abs() < EPS);
        let inside = Pan::new(0.1, -0.2);
        assert_eq!(c.clamp(inside), inside);
    }
}
