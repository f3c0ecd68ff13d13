use std::fmt;

use crate::optimization::Point;

use super::Status;

/// Events emitted by the golden section solver.
#[derive(Debug, Clone, PartialEq)]
pub enum Event {
    /// About to shrink the bracket.
    Iteration {
        /// 1-based iteration number.
        iter: usize,

        /// Current bracket `[a, b]`.
        bracket: [f64; 2],

        /// Inner left point.
        left: Point,

        /// Inner right point.
        right: Point,
    },

    /// The search has ended.
    Finished {
        /// Final status.
        status: Status,

        /// Number of completed iterations.
        iters: usize,

        /// Final bracket `[a, b]`.
        bracket: [f64; 2],

        /// Estimated minimum (bracket midpoint and its objective).
        estimate: Point,
    },
}

impl Event {
    /// Returns the bracket carried by the event.
    #[must_use]
    pub fn bracket(&self) -> [f64; 2] {
        match self {
            Self::Iteration { bracket, .. } | Self::Finished { bracket, .. } => *bracket,
        }
    }
}

impl fmt::Display for Event {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Iteration {
                iter,
                bracket: [a, b],
                left,
                right,
            } => write!(
                f,
                "iteration {iter}: a = {a:.12}, b = {b:.12}, x1 = {:.12}, x2 = {:.12}, \
                 f1 = {:.12}, f2 = {:.12}",
                left.x, right.x, left.objective, right.objective
            ),
            Self::Finished {
                status,
                iters,
                bracket: [a, b],
                estimate,
            } => write!(
                f,
                "{status} after {iters} iterations; final bracket [{a:.12}, {b:.12}] \
                 (width {:.12e}); minimum x = {:.12}, f(x) = {:.12}",
                b - a,
                estimate.x,
                estimate.objective
            ),
        }
    }
}
