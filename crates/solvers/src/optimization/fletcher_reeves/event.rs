use std::fmt;

use super::Status;

/// Events emitted by the Fletcher-Reeves solver.
#[derive(Debug, Clone, PartialEq)]
pub enum Event<const N: usize> {
    /// An iterate was accepted.
    Iteration {
        /// 1-based iteration number.
        iter: usize,

        /// The accepted point.
        x: [f64; N],

        /// Objective value at `x`.
        objective: f64,

        /// Gradient norm at `x`.
        gradient_norm: f64,

        /// Step size along the previous direction.
        alpha: f64,

        /// Coefficient of the previous direction in the next one.
        ///
        /// Zero on a restart and on the converging iteration.
        beta: f64,

        /// Whether the next direction was reset to steepest descent.
        restarted: bool,
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
                alpha,
                beta,
                restarted,
            } => {
                write!(
                    f,
                    "iteration {iter}: x = {x:.6?}, f(x) = {objective:.6}, \
                     |g| = {gradient_norm:.3e}, alpha = {alpha:.6}, beta = {beta:.6}"
                )?;
                if *restarted {
                    f.write_str(" (restart)")?;
                }
                Ok(())
            }
            Self::Finished {
                status,
                iters,
                x,
                objective,
            } => write!(f, "{status} after {iters} iterations; x = {x:.6?}, f(x) = {objective:.6}"),
        }
    }
}
