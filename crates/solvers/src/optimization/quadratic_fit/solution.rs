use std::fmt;

/// Indicates why the search stopped.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Status {
    /// The vertex estimate agreed with `x1` in both position and value.
    Converged,

    /// Reached the iteration limit; the solution holds the best interior point.
    MaxIters,

    /// Stopped early due to an observer decision.
    StoppedByObserver,
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Converged => "converged",
            Self::MaxIters => "reached the iteration limit without converging",
            Self::StoppedByObserver => "stopped by observer",
        })
    }
}

/// The result of a quadratic interpolation search.
#[derive(Debug, Clone, PartialEq)]
pub struct Solution {
    /// Final solver status.
    pub status: Status,

    /// Best estimate of the minimizer.
    pub x: f64,

    /// Objective value at `x`.
    pub objective: f64,

    /// The three samples held when the search ended.
    pub points: [f64; 3],

    /// Iteration count when the solver finished.
    pub iters: usize,

    /// Vertex estimate of each iteration, in order.
    pub trace: Vec<f64>,
}
