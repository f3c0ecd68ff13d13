use std::fmt;

use crate::optimization::Point;

use super::Status;

/// Events emitted by the quadratic interpolation solver.
#[derive(Debug, Clone, PartialEq)]
pub enum Event {
    /// A parabola was fitted.
    Iteration {
        /// 1-based iteration number.
        iter: usize,

        /// The samples the parabola was fitted through.
        points: [Point; 3],

        /// The vertex and its objective.
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
                points: [p0, p1, p2],
                estimate,
            } => write!(
                f,
                "iteration {iter}: f(x0) = {:.6}, f(x1) = {:.6}, f(x2) = {:.6}; \
                 vertex x = {:.6}, f = {:.6}; interval |x2 - x0| = {:.6}",
                p0.objective,
                p1.objective,
                p2.objective,
                estimate.x,
                estimate.objective,
                (p2.x - p0.x).abs()
            ),
            Self::Finished {
                status,
                iters,
                estimate,
            } => write!(f, "{status} after {iters} iterations at {estimate}"),
        }
    }
}
