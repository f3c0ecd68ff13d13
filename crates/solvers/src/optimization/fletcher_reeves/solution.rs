use std::fmt;

/// Indicates why the conjugate gradient iteration stopped.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Status {
    /// The gradient norm fell below the tolerance.
    GradientConverged,

    /// The objective changed by less than the tolerance.
    ObjectiveConverged,

    /// The step was shorter than the tolerance.
    StepConverged,

    /// The search direction degenerated to (numerically) zero.
    DirectionVanished,

    /// Reached the iteration limit without converging.
    MaxIters,

    /// Stopped early due to an observer decision.
    StoppedByObserver,
}

impl Status {
    /// Returns `true` for the three convergence outcomes.
    #[must_use]
    pub fn is_converged(self) -> bool {
        matches!(
            self,
            Self::GradientConverged | Self::ObjectiveConverged | Self::StepConverged
        )
    }
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::GradientConverged => "converged on the gradient norm",
            Self::ObjectiveConverged => "converged on the objective change",
            Self::StepConverged => "converged on the step size",
            Self::DirectionVanished => "search direction vanished",
            Self::MaxIters => "reached the iteration limit without converging",
            Self::StoppedByObserver => "stopped by observer",
        })
    }
}

/// The result of a Fletcher-Reeves run.
#[derive(Debug, Clone, PartialEq)]
pub struct Solution<const N: usize> {
    pub status: Status,

    /// The last accepted point.
    pub x: [f64; N],

    pub objective: f64,
    pub iters: usize,

    /// Starting point followed by each accepted iterate.
    pub trace: Vec<[f64; N]>,
}
