use super::{Gradient, Hessian, Objective};

/// Bundles closed-form closures for an objective and its derivatives.
///
/// Start with [`Smooth::new`] for an objective and gradient, then attach a
/// Hessian with [`Smooth::with_hessian`] when a second-order solver needs one.
///
/// ```
/// use descent_core::{Gradient, Hessian, Objective, Smooth};
///
/// let bowl = Smooth::new(
///     |x: &[f64; 2]| x[0] * x[0] + x[1] * x[1],
///     |x: &[f64; 2]| [2.0 * x[0], 2.0 * x[1]],
/// )
/// .with_hessian(|_: &[f64; 2]| [[2.0, 0.0], [0.0, 2.0]]);
///
/// assert_eq!(bowl.value(&[1.0, 2.0]), 5.0);
/// assert_eq!(bowl.gradient(&[1.0, 2.0]), [2.0, 4.0]);
/// assert_eq!(bowl.hessian(&[1.0, 2.0]), [[2.0, 0.0], [0.0, 2.0]]);
/// ```
#[derive(Debug, Clone, Copy)]
pub struct Smooth<F, G, H = ()> {
    objective: F,
    gradient: G,
    hessian: H,
}

impl<F, G> Smooth<F, G> {
    /// Creates a smooth objective from a value closure and a gradient closure.
    pub fn new(objective: F, gradient: G) -> Self {
        Self {
            objective,
            gradient,
            hessian: (),
        }
    }

    /// Attaches an analytic Hessian closure.
    pub fn with_hessian<H>(self, hessian: H) -> Smooth<F, G, H> {
        Smooth {
            objective: self.objective,
            gradient: self.gradient,
            hessian,
        }
    }
}

impl<F, G, H, const N: usize> Objective<N> for Smooth<F, G, H>
where
    F: Fn(&[f64; N]) -> f64,
{
    fn value(&self, x: &[f64; N]) -> f64 {
        (self.objective)(x)
    }
}

impl<F, G, H, const N: usize> Gradient<N> for Smooth<F, G, H>
where
    F: Fn(&[f64; N]) -> f64,
    G: Fn(&[f64; N]) -> [f64; N],
{
    fn gradient(&self, x: &[f64; N]) -> [f64; N] {
        (self.gradient)(x)
    }
}

impl<F, G, H, const N: usize> Hessian<N> for Smooth<F, G, H>
where
    F: Fn(&[f64; N]) -> f64,
    G: Fn(&[f64; N]) -> [f64; N],
    H: Fn(&[f64; N]) -> [[f64; N]; N],
{
    fn hessian(&self, x: &[f64; N]) -> [[f64; N]; N] {
        (self.hessian)(x)
    }
}
