use std::fmt;

use crate::optimization::Point;

use super::Status;

/// Events emitted by the cubic interpolation solver.
#[derive(Debug, Clone, PartialEq)]
pub enum Event {
    /// A cubic was fitted and its best interior critical point evaluated.
    Iteration {
        iter: usize,
        points: [Point; 4],

        /// Fitted `[a, b, c, d]` of `a x³ + b x² + c x + d`.
        coefficients: [f64; 4],

        estimate: Point,
    },

    /// The search has ended.
    Finished {
        status: Status,
        iters: usize,
        estimate: Point,
    },
}

impl fmt::Display for Event {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Iteration {
                iter,
                points: [p0, p1, p2, p3],
                estimate,
                ..
            } => write!(
                f,
                "iteration {iter}: f(x0) = {:.6}, f(x1) = {:.6}, f(x2) = {:.6}, f(x3) = {:.6}; \
                 critical point x = {:.6}, f = {:.6}",
                p0.objective,
                p1.objective,
                p2.objective,
                p3.objective,
                estimate.x,
                estimate.objective
            ),
            Self::Finished {
                status,
                iters,
                estimate,
            } => write!(f, "{status} after {iters} iterations at {estimate}"),
        }
    }
}
