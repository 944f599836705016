use crate::sprite::Viewport;

/// Axis-aligned rectangle used for containment and edge checks.
///
/// All comparisons are inclusive: a coordinate sitting exactly on an edge is
/// both within the bounds and has reached that edge.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Boundaries {
    pub x_min: f32,
    pub x_max: f32,
    pub y_min: f32,
    pub y_max: f32,
}

impl Boundaries {
    pub fn new(x_min: f32, x_max: f32, y_min: f32, y_max: f32) -> Self {
        debug_assert!(x_min <= x_max, "x_min {x_min} > x_max {x_max}");
        debug_assert!(y_min <= y_max, "y_min {y_min} > y_max {y_max}");
        Self {
            x_min,
            x_max,
            y_min,
            y_max,
        }
    }

    /// The whole window.
    pub fn of_viewport(viewport: Viewport) -> Self {
        Self::new(0.0, viewport.width, 0.0, viewport.height)
    }

    /// The window shrunk by `margin_x` on the left and right and by
    /// `margin_y` on the top and bottom. An axis shorter than both margins
    /// together collapses onto its first margin.
    pub fn inset(viewport: Viewport, margin_x: f32, margin_y: f32) -> Self {
        let x_max = (viewport.width - margin_x).max(margin_x);
        let y_max = (viewport.height - margin_y).max(margin_y);
        Self::new(margin_x.min(x_max), x_max, margin_y.min(y_max), y_max)
    }

    pub fn is_within_x_bounds(&self, x: f32) -> bool {
        self.x_min <= x && x <= self.x_max
    }

    pub fn is_within_y_bounds(&self, y: f32) -> bool {
        self.y_min <= y && y <= self.y_max
    }

    pub fn has_reached_x_min(&self, x: f32) -> bool {
        self.x_min >= x
    }

    pub fn has_reached_x_max(&self, x: f32) -> bool {
        self.x_max <= x
    }

    pub fn has_reached_y_min(&self, y: f32) -> bool {
        self.y_min >= y
    }

    pub fn has_reached_y_max(&self, y: f32) -> bool {
        self.y_max <= y
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn bounds() -> Boundaries {
        Boundaries::new(50.0, 450.0, 60.0, 440.0)
    }

    #[test]
    fn containment_is_inclusive() {
        let b = bounds();
        assert!(b.is_within_x_bounds(50.0));
        assert!(b.is_within_x_bounds(450.0));
        assert!(!b.is_within_x_bounds(49.9));
        assert!(!b.is_within_x_bounds(450.1));
        assert!(b.is_within_y_bounds(60.0));
        assert!(b.is_within_y_bounds(440.0));
        assert!(!b.is_within_y_bounds(59.0));
        assert!(!b.is_within_y_bounds(441.0));
    }

    #[test]
    fn reached_at_or_beyond_edge() {
        let b = bounds();
        assert!(b.has_reached_x_min(50.0));
        assert!(b.has_reached_x_min(10.0));
        assert!(!b.has_reached_x_min(51.0));

        assert!(b.has_reached_x_max(450.0));
        assert!(b.has_reached_x_max(900.0));
        assert!(!b.has_reached_x_max(449.0));

        assert!(b.has_reached_y_min(60.0));
        assert!(!b.has_reached_y_min(61.0));

        assert!(b.has_reached_y_max(440.0));
        assert!(!b.has_reached_y_max(439.0));
    }

    #[test]
    fn inset_applies_margins() {
        let b = Boundaries::inset(Viewport::new(500.0, 500.0), 50.0, 60.0);
        assert_eq!(b, bounds());
        assert_eq!(
            Boundaries::of_viewport(Viewport::new(500.0, 400.0)),
            Boundaries::new(0.0, 500.0, 0.0, 400.0)
        );
    }

    #[test]
    fn inset_collapses_on_tiny_viewport() {
        let b = Boundaries::inset(Viewport::new(80.0, 100.0), 50.0, 60.0);
        assert!(b.x_min <= b.x_max);
        assert!(b.y_min <= b.y_max);
    }
}
