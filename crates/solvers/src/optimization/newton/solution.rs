use std::fmt;

/// Indicates why Newton iteration stopped.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Status {
    /// The gradient norm fell below the tolerance.
    GradientConverged,

    /// The last step was shorter than the tolerance.
    StepConverged,

    /// The Hessian system had no unique solution.
    SingularHessian,

    /// Took the maximum number of steps without converging.
    MaxIters,

    /// Stopped early due to an observer decision.
    StoppedByObserver,
}

impl Status {
    /// Returns `true` for the two convergence outcomes.
    #[must_use]
    pub fn is_converged(self) -> bool {
        matches!(self, Self::GradientConverged | Self::StepConverged)
    }
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::GradientConverged => "converged on the gradient norm",
            Self::StepConverged => "converged on the step size",
            Self::SingularHessian => "Hessian is singular, no further progress possible",
            Self::MaxIters => "reached the iteration limit without converging",
            Self::StoppedByObserver => "stopped by observer",
        })
    }
}

/// The result of a Newton run.
#[derive(Debug, Clone, PartialEq)]
pub struct Solution<const N: usize> {
    /// Final solver status.
    pub status: Status,

    /// The last accepted point.
    pub x: [f64; N],

    /// Objective value at `x`.
    pub objective: f64,

    /// Number of Newton steps taken.
    pub iters: usize,

    /// Starting point followed by the point after each step.
    pub trace: Vec<[f64; N]>,
}
