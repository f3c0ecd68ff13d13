//! Reference objectives with closed-form derivatives.
//!
//! These are the textbook functions the solvers are demonstrated and tested
//! on. Each has a known minimizer, so results can be checked exactly.

use crate::{Gradient, Hessian, Objective};

/// Location of the local minimum of [`arctan_well`] on `[−2, 0)`.
///
/// Root of `0.65 x² + 1.5 x + 0.65 = 0` nearest the origin.
pub const ARCTAN_WELL_LOCAL_MIN: f64 = -0.578_206_555_880_932_1;

/// `f(x) = 0.65 − 0.75 / (1 + x²) − 0.65 · atan(1 / x)`.
///
/// On `[−2, 0)` the function is unimodal around the local minimum at
/// [`ARCTAN_WELL_LOCAL_MIN`]. At the origin `atan(1 / x)` switches branch, so
/// the function jumps down and increases again for `x > 0`; a bracket that
/// straddles zero is drawn toward `0⁺`. Wrap it in [`GuardNearZero`] before
/// searching such a bracket.
///
/// [`GuardNearZero`]: crate::GuardNearZero
#[must_use]
pub fn arctan_well(x: f64) -> f64 {
    0.65 - 0.75 / (1.0 + x * x) - 0.65 * (1.0 / x).atan()
}

/// The convex quadratic `f(x1, x2) = x1² − x1·x2 + x2² + x1 + x2`.
///
/// Its Hessian is the constant matrix `[[2, −1], [−1, 2]]` and its unique
/// minimizer is `(−1, −1)` with `f = −1`.
#[derive(Debug, Clone, Copy, Default)]
pub struct Bowl;

impl Bowl {
    /// The unique minimizer.
    pub const MINIMIZER: [f64; 2] = [-1.0, -1.0];

    /// The objective value at [`Self::MINIMIZER`].
    pub const MINIMUM: f64 = -1.0;
}

impl Objective<2> for Bowl {
    fn value(&self, x: &[f64; 2]) -> f64 {
        let [x1, x2] = *x;
        x1 * x1 - x1 * x2 + x2 * x2 + x1 + x2
    }
}

impl Gradient<2> for Bowl {
    fn gradient(&self, x: &[f64; 2]) -> [f64; 2] {
        let [x1, x2] = *x;
        [2.0 * x1 - x2 + 1.0, 2.0 * x2 - x1 + 1.0]
    }
}

impl Hessian<2> for Bowl {
    fn hessian(&self, _x: &[f64; 2]) -> [[f64; 2]; 2] {
        [[2.0, -1.0], [-1.0, 2.0]]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;

    #[test]
    fn bowl_gradient_vanishes_at_minimizer() {
        let g = Bowl.gradient(&Bowl::MINIMIZER);

        assert_relative_eq!(g[0], 0.0);
        assert_relative_eq!(g[1], 0.0);
        assert_relative_eq!(Bowl.value(&Bowl::MINIMIZER), Bowl::MINIMUM);
    }

    #[test]
    fn arctan_well_has_local_minimum_left_of_origin() {
        let at_min = arctan_well(ARCTAN_WELL_LOCAL_MIN);

        assert!(at_min < arctan_well(-1.0));
        assert!(at_min < arctan_well(-0.2));
    }

    #[test]
    fn arctan_well_local_min_solves_stationarity() {
        let x = ARCTAN_WELL_LOCAL_MIN;
        assert_relative_eq!(0.65 * x * x + 1.5 * x + 0.65, 0.0, epsilon = 1e-12);
    }
}
