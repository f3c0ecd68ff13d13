use std::fmt;

/// Indicates why the search stopped.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Status {
    /// The bracket shrank to the configured tolerance, or collapsed in
    /// fixed-iteration mode.
    Converged,

    /// Reached the iteration limit before the bracket met the tolerance.
    MaxIters,

    /// Ran every iteration requested in fixed-iteration mode.
    Completed,

    /// Stopped early due to an observer decision.
    StoppedByObserver,
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Converged => "converged",
            Self::MaxIters => "reached the iteration limit without converging",
            Self::Completed => "completed the requested iterations",
            Self::StoppedByObserver => "stopped by observer",
        })
    }
}

/// The result of a golden section search.
#[derive(Debug, Clone, PartialEq)]
pub struct Solution {
    /// Final solver status.
    pub status: Status,

    /// Midpoint of the final bracket.
    pub x: f64,

    /// Objective value at `x`.
    pub objective: f64,

    /// Final bracket `[a, b]`.
    pub bracket: [f64; 2],

    /// Iteration count when the solver finished.
    pub iters: usize,

    /// Interior point evaluated in each iteration, in order.
    pub trace: Vec<f64>,
}
