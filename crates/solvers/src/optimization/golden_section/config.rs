use crate::optimization::{self, ConfigError};

use super::bracket::{FIXED_SPLIT, GOLDEN_SPLIT};
use super::solution::Status;

/// Bracket width below which the fixed-iteration mode stops early.
const COLLAPSED_WIDTH: f64 = 1e-8;

/// How a golden section search decides to stop.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Stopping {
    /// Stop once the bracket is no wider than `tolerance`, or after
    /// `max_iters` iterations.
    Tolerance { tolerance: f64, max_iters: usize },

    /// Run exactly `iters` iterations unless the bracket collapses first.
    FixedIterations { iters: usize },
}

/// Configuration for the golden section solver.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Config {
    stopping: Stopping,
}

impl Default for Config {
    fn default() -> Self {
        // Known-good values, unwrap is safe
        Self::tolerance(1e-6, 100).unwrap()
    }
}

impl From<optimization::Config> for Config {
    fn from(config: optimization::Config) -> Self {
        Self {
            stopping: Stopping::Tolerance {
                tolerance: config.tolerance(),
                max_iters: config.max_iters(),
            },
        }
    }
}

impl Config {
    /// Creates a tolerance-mode config with golden-ratio interior points.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Tolerance`] if `tolerance` is not finite and
    /// positive, or [`ConfigError::MaxIters`] if `max_iters` is zero.
    pub fn tolerance(tolerance: f64, max_iters: usize) -> Result<Self, ConfigError> {
        optimization::Config::new(tolerance, max_iters).map(Self::from)
    }

    /// Creates a fixed-iteration config with interior points at `0.382`.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::MaxIters`] if `iters` is zero.
    pub fn fixed(iters: usize) -> Result<Self, ConfigError> {
        if iters == 0 {
            return Err(ConfigError::MaxIters);
        }
        Ok(Self {
            stopping: Stopping::FixedIterations { iters },
        })
    }

    /// Returns the stopping mode.
    #[must_use]
    pub fn stopping(&self) -> Stopping {
        self.stopping
    }

    /// Returns the maximum number of shrink iterations.
    #[must_use]
    pub fn max_iters(&self) -> usize {
        match self.stopping {
            Stopping::Tolerance { max_iters, .. } => max_iters,
            Stopping::FixedIterations { iters } => iters,
        }
    }

    /// Fraction of the width between each bound and its nearer interior point.
    pub(super) fn split(&self) -> f64 {
        match self.stopping {
            Stopping::Tolerance { .. } => GOLDEN_SPLIT,
            Stopping::FixedIterations { .. } => FIXED_SPLIT,
        }
    }

    /// Whether to discard the left segment given the interior objectives.
    ///
    /// Tolerance mode keeps the left segment on ties; fixed mode drops it.
    pub(super) fn shrinks_left(&self, left: f64, right: f64) -> bool {
        match self.stopping {
            Stopping::Tolerance { .. } => left > right,
            Stopping::FixedIterations { .. } => left >= right,
        }
    }

    /// Returns the terminal status if the search should stop before `iters + 1`.
    pub(super) fn check(&self, width: f64, iters: usize) -> Option<Status> {
        match self.stopping {
            Stopping::Tolerance {
                tolerance,
                max_iters,
            } => {
                if width.abs() <= tolerance {
                    Some(Status::Converged)
                } else if iters >= max_iters {
                    Some(Status::MaxIters)
                } else {
                    None
                }
            }
            Stopping::FixedIterations { iters: n } => {
                if iters > 0 && width.abs() < COLLAPSED_WIDTH {
                    Some(Status::Converged)
                } else if iters >= n {
                    Some(Status::Completed)
                } else {
                    None
                }
            }
        }
    }
}
