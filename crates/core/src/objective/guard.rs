use super::{Gradient, Objective};

/// Adapter that keeps every coordinate at least `epsilon` away from zero.
///
/// Any coordinate with `|x| < epsilon` is replaced by `epsilon` carrying the
/// sign of `x` before the wrapped objective is called. `+0.0` becomes
/// `+epsilon` and `-0.0` becomes `-epsilon`. Use this for objectives with a
/// pole at the origin, such as [`arctan_well`].
///
/// The guard belongs to the objective, not to any solver, so results remain
/// reproducible no matter which search evaluates the function.
///
/// [`arctan_well`]: crate::functions::arctan_well
#[derive(Debug, Clone, Copy)]
pub struct GuardNearZero<P> {
    inner: P,
    epsilon: f64,
}

impl<P> GuardNearZero<P> {
    /// Default substitution distance.
    pub const DEFAULT_EPSILON: f64 = 1e-8;

    /// Wraps `inner` using [`Self::DEFAULT_EPSILON`].
    pub fn new(inner: P) -> Self {
        Self::with_epsilon(inner, Self::DEFAULT_EPSILON)
    }

    /// Wraps `inner` using a custom substitution distance.
    pub fn with_epsilon(inner: P, epsilon: f64) -> Self {
        Self {
            inner,
            epsilon: epsilon.abs(),
        }
    }

    /// Returns the guarded coordinate for `x`.
    #[must_use]
    pub fn guard(&self, x: f64) -> f64 {
        if x.abs() < self.epsilon {
            x.signum() * self.epsilon
        } else {
            x
        }
    }

    fn guard_point<const N: usize>(&self, x: &[f64; N]) -> [f64; N] {
        x.map(|xi| self.guard(xi))
    }
}

impl<P, const N: usize> Objective<N> for GuardNearZero<P>
where
    P: Objective<N>,
{
    fn value(&self, x: &[f64; N]) -> f64 {
        self.inner.value(&self.guard_point(x))
    }
}

impl<P, const N: usize> Gradient<N> for GuardNearZero<P>
where
    P: Gradient<N>,
{
    fn gradient(&self, x: &[f64; N]) -> [f64; N] {
        self.inner.gradient(&self.guard_point(x))
    }
}
