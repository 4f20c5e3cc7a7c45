//! Viewport rectangle math for the scroll effects.
//!
//! Kept free of `web_sys` types so the visibility rules can be tested
//! without a browser; `utils::dom` feeds these from live layout data.

/// An element's bounding box in viewport coordinates, CSS pixels.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rect {
    pub top: f64,
    pub right: f64,
    pub bottom: f64,
    pub left: f64,
}

/// Visible viewport size in CSS pixels.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Viewport {
    pub width: f64,
    pub height: f64,
}

/// Whether `rect` lies entirely inside the viewport once the viewport is
/// expanded by `offset` pixels on every side. Touching the expanded
/// boundary counts as inside.
pub fn rect_in_viewport(rect: Rect, viewport: Viewport, offset: f64) -> bool {
    rect.top >= -offset
        && rect.left >= -offset
        && rect.bottom <= viewport.height + offset
        && rect.right <= viewport.width + offset
}

#[cfg(test)]
mod tests {
    use super::*;

    const VIEWPORT: Viewport = Viewport {
        width: 1280.0,
        height: 800.0,
    };

    fn rect(top: f64, bottom: f64) -> Rect {
        Rect {
            top,
            right: 600.0,
            bottom,
            left: 100.0,
        }
    }

    #[test]
    fn fully_visible_rect_is_in_viewport() {
        assert!(rect_in_viewport(rect(100.0, 400.0), VIEWPORT, 0.0));
    }

    #[test]
    fn rect_below_the_fold_is_out() {
        assert!(!rect_in_viewport(rect(900.0, 1100.0), VIEWPORT, 0.0));
    }

    #[test]
    fn rect_above_the_viewport_is_out() {
        assert!(!rect_in_viewport(rect(-300.0, -50.0), VIEWPORT, 0.0));
    }

    #[test]
    fn offset_expands_the_viewport() {
        // Bottom edge at 880 is outside an 800px viewport but inside
        // the 100px-expanded one.
        assert!(!rect_in_viewport(rect(500.0, 880.0), VIEWPORT, 0.0));
        assert!(rect_in_viewport(rect(500.0, 880.0), VIEWPORT, 100.0));
    }

    #[test]
    fn boundary_contact_counts_as_inside() {
        assert!(rect_in_viewport(rect(-100.0, 900.0), VIEWPORT, 100.0));
        assert!(rect_in_viewport(rect(0.0, 800.0), VIEWPORT, 0.0));
    }

    #[test]
    fn horizontal_overflow_is_out() {
        let wide = Rect {
            top: 100.0,
            right: 1400.0,
            bottom: 300.0,
            left: 50.0,
        };
        assert!(!rect_in_viewport(wide, VIEWPORT, 0.0));
        assert!(rect_in_viewport(wide, VIEWPORT, 120.0));
    }
}
