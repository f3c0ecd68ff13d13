use std::fmt;

/// Indicates why the search stopped.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Status {
    /// The critical point agreed with `x1` in both position and value.
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

/// The result of a cubic interpolation search.
#[derive(Debug, Clone, PartialEq)]
pub struct Solution {
    pub status: Status,
    pub x: f64,
    pub objective: f64,

    /// The four samples held when the search ended.
    pub points: [f64; 4],

    pub iters: usize,

    /// Critical point chosen in each iteration.
    pub trace: Vec<f64>,
}
