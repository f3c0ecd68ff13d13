//! Golden section search for single-variable minimization.
//!
//! # Algorithm
//!
//! Golden section search finds the minimum of a unimodal function on a
//! bounded interval `[a, b]`. It keeps two interior points, compares their
//! objectives, and discards the outer segment next to the worse one. One of
//! the old interior points always survives as an interior point of the new
//! bracket, so each iteration costs exactly one new evaluation.
//!
//! # Stopping modes
//!
//! - [`Config::tolerance`] — interior points split the bracket by the golden
//!   ratio; the search stops once `b − a ≤ tolerance`, or reports
//!   [`Status::MaxIters`] when the budget runs out first.
//! - [`Config::fixed`] — interior points sit at the fixed fraction `0.382`
//!   from each end; the search runs exactly `n` iterations unless the bracket
//!   collapses below `1e-8` first.
//!
//! Either way the reported minimum is the midpoint of the final bracket.
//!
//! # Observer Events
//!
//! The solver emits [`Event::Iteration`] before each shrink, carrying the
//! current bracket and both interior points, and [`Event::Finished`] once.
//! Observers can return [`Action::StopEarly`] to halt at the next iteration.

mod bracket;
mod config;
mod error;
mod event;
mod search;
mod solution;


pub use config::{Config, Stopping};
pub use error::Error;
pub use event::Event;
pub use solution::{Solution, Status};

use descent_core::{Objective, Observer};

use super::Action;

/// Finds the minimum of the objective on `bracket = [a, b]`.
///
/// The observer receives an [`Event`] for each iteration and one when the
/// search ends. See the [module docs](self) for details.
///
/// # Errors
///
/// Returns [`Error::InvalidRange`] if `a >= b` or either bound is not finite,
/// and [`Error::NotANumber`] if the objective returns NaN.
pub fn minimize<P, Obs>(
    objective: &P,
    bracket: [f64; 2],
    config: &Config,
    observer: Obs,
) -> Result<Solution, Error>
where
    P: Objective<1>,
    Obs: Observer<Event, Action>,
{
    search::search(objective, bracket, config, observer)
}

/// Finds the minimum of the objective without observer support.
///
/// This is a convenience wrapper around [`minimize`] that uses a no-op observer.
///
/// # Errors
///
/// Returns an error under the same conditions as [`minimize`].
pub fn minimize_unobserved<P>(
    objective: &P,
    bracket: [f64; 2],
    config: &Config,
) -> Result<Solution, Error>
where
    P: Objective<1>,
{
    minimize(objective, bracket, config, ())
}
