use std::fmt;

use super::Status;

/// Events emitted by Newton's method.
#[derive(Debug, Clone, PartialEq)]
pub enum Event<const N: usize> {
    /// A full Newton step was taken.
    Iteration {
        /// 1-based step number.
        iter: usize,

        /// Point after the step.
        x: [f64; N],

        /// Objective value at `x`.
        objective: f64,

        /// Gradient norm at the point the step was taken from.
        gradient_norm: f64,

        /// Length of the step.
        step_norm: f64,
    },

    /// The run has ended.
    Finished {
        status: Status,
        iters: usize,
        x: [f64; N],
        objective: f64,
    },
}

impl<const N: usize> fmt::Display for Event<N> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Iteration {
                iter,
                x,
                objective,
                gradient_norm,
                step_norm,
            } => write!(
                f,
                "iteration {iter}: x = {x:.6?}, f(x) = {objective:.6}, \
                 |g| = {gradient_norm:.3e}, |dx| = {step_norm:.3e}"
            ),
            Self::Finished {
                status,
                iters,
                x,
                objective,
            } => write!(f, "{status} after {iters} steps; x = {x:.6?}, f(x) = {objective:.6}"),
        }
    }
}
