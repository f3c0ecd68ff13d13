/// The golden ratio: φ = (1 + √5) / 2
const PHI: f64 = 1.618_033_988_749_895;

/// The inverse golden ratio: 1/φ
///
/// This equals φ - 1 due to the golden ratio's unique property.
pub(super) const INV_PHI: f64 = PHI - 1.0;

/// Fraction of the width between each bound and its nearer interior point
/// in tolerance mode: `1 − 1/φ`.
pub(super) const GOLDEN_SPLIT: f64 = 1.0 - INV_PHI;

/// Fraction used by the fixed-iteration mode.
pub(super) const FIXED_SPLIT: f64 = 0.382;

/// Search bracket.
///
/// Maintains the outer interval [left, right] and two interior points, each
/// `split * width` in from its nearer bound.
#[derive(Debug, Clone, Copy)]
pub(super) struct Bracket {
    /// Outer left bound.
    pub(super) left: f64,

    /// Outer right bound.
    pub(super) right: f64,

    /// Inner left point at `left + split * width`.
    pub(super) inner_left: f64,

    /// Inner right point at `right - split * width`.
    pub(super) inner_right: f64,

    split: f64,
}

impl Bracket {
    /// Creates a bracket from ordered bounds.
    pub(super) fn new(left: f64, right: f64, split: f64) -> Self {
        let width = right - left;
        Self {
            left,
            right,
            inner_left: left + split * width,
            inner_right: right - split * width,
            split,
        }
    }

    /// Returns the width of the current bounds.
    pub(super) fn width(&self) -> f64 {
        self.right - self.left
    }

    /// Returns the current bounds.
    pub(super) fn bounds(&self) -> [f64; 2] {
        [self.left, self.right]
    }

    /// Returns the midpoint of the current bounds.
    pub(super) fn midpoint(&self) -> f64 {
        0.5 * (self.left + self.right)
    }

    /// Shrinks the bounds to `[inner_left, right]`.
    ///
    /// The old `inner_right` becomes the new `inner_left`. Returns the new
    /// `inner_right`, which is the only point that needs evaluating.
    pub(super) fn shrink_left(&mut self) -> f64 {
        self.left = self.inner_left;
        self.inner_left = self.inner_right;
        self.inner_right = self.right - self.split * self.width();
        self.inner_right
    }

    /// Shrinks the bounds to `[left, inner_right]`.
    ///
    /// The old `inner_left` becomes the new `inner_right`. Returns the new
    /// `inner_left`, which is the only point that needs evaluating.
    pub(super) fn shrink_right(&mut self) -> f64 {
        self.right = self.inner_right;
        self.inner_right = self.inner_left;
        self.inner_left = self.left + self.split * self.width();
        self.inner_left
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;

    #[test]
    fn bracket_initialized_with_golden_ratio_points() {
        let bracket = Bracket::new(0.0, 1.0, GOLDEN_SPLIT);

        assert_relative_eq!(bracket.left, 0.0);
        assert_relative_eq!(bracket.right, 1.0);
        assert_relative_eq!(bracket.width(), 1.0);

        // inner_left ≈ 0.382, inner_right ≈ 0.618
        assert_relative_eq!(bracket.inner_left, 1.0 - INV_PHI);
        assert_relative_eq!(bracket.inner_right, INV_PHI, epsilon = 1e-15);

        // They should divide the interval in golden ratio
        assert_relative_eq!(
            bracket.inner_left / (1.0 - bracket.inner_left),
            INV_PHI,
            epsilon = 1e-15
        );
    }

    #[test]
    fn shrink_left_reuses_point_and_computes_new_inner_right() {
        let mut bracket = Bracket::new(0.0, 1.0, GOLDEN_SPLIT);
        let old_inner_right = bracket.inner_right;

        let new_x = bracket.shrink_left();

        // Old inner_left becomes new left bound
        assert_relative_eq!(bracket.left, 1.0 - INV_PHI);
        assert_relative_eq!(bracket.right, 1.0);

        // Old inner_right becomes new inner_left
        assert_relative_eq!(bracket.inner_left, old_inner_right);
        assert_relative_eq!(bracket.inner_right, new_x);
    }

    #[test]
    fn shrink_right_reuses_point_and_computes_new_inner_left() {
        let mut bracket = Bracket::new(0.0, 1.0, GOLDEN_SPLIT);
        let old_inner_left = bracket.inner_left;

        let new_x = bracket.shrink_right();

        assert_relative_eq!(bracket.left, 0.0);
        assert_relative_eq!(bracket.right, INV_PHI, epsilon = 1e-15);
        assert_relative_eq!(bracket.inner_right, old_inner_left);
        assert_relative_eq!(bracket.inner_left, new_x);
    }

    #[test]
    fn golden_shrink_preserves_ratio() {
        let mut bracket = Bracket::new(-2.0, 2.0, GOLDEN_SPLIT);

        for _ in 0..5 {
            let before = bracket.width();
            bracket.shrink_left();
            assert_relative_eq!(bracket.width() / before, INV_PHI, epsilon = 1e-10);

            let before = bracket.width();
            bracket.shrink_right();
            assert_relative_eq!(bracket.width() / before, INV_PHI, epsilon = 1e-10);
        }
    }

    #[test]
    fn fixed_split_places_points_symmetrically() {
        let bracket = Bracket::new(0.0, 3.0, FIXED_SPLIT);

        assert_relative_eq!(bracket.inner_left, 1.146, epsilon = 1e-12);
        assert_relative_eq!(bracket.inner_right, 1.854, epsilon = 1e-12);
    }
}
