mod guard;
mod scalar;
mod smooth;

pub use guard::GuardNearZero;
pub use scalar::Scalar;
pub use smooth::Smooth;

/// A real-valued function of `N` variables.
///
/// The const generic `N` is the number of variables.
/// For example, `N = 1` represents a scalar objective.
///
/// Callers are responsible for domain safety: a solver may evaluate the
/// objective at any point it visits. Wrap an objective in [`GuardNearZero`]
/// when it has a pole at the origin.
pub trait Objective<const N: usize> {
    /// Evaluates the objective at `x`.
    fn value(&self, x: &[f64; N]) -> f64;
}

/// An [`Objective`] with an analytic first derivative.
pub trait Gradient<const N: usize>: Objective<N> {
    /// Returns the vector of first partial derivatives at `x`.
    fn gradient(&self, x: &[f64; N]) -> [f64; N];
}

/// A [`Gradient`] objective with an analytic second derivative.
pub trait Hessian<const N: usize>: Gradient<N> {
    /// Returns the square, symmetric matrix of second partial derivatives at `x`.
    ///
    /// Rows are stored as the outer array.
    fn hessian(&self, x: &[f64; N]) -> [[f64; N]; N];
}

/// Any closure over a point is an objective.
impl<F, const N: usize> Objective<N> for F
where
    F: Fn(&[f64; N]) -> f64,
{
    fn value(&self, x: &[f64; N]) -> f64 {
        self(x)
    }
}
