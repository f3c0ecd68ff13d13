//! Quadratic interpolation search for single-variable minimization.
//!
//! # Algorithm
//!
//! Three samples `(x0, f0), (x1, f1), (x2, f2)` determine a unique parabola.
//! Its vertex
//!
//! ```text
//! x* = ½ · [f0(x1² − x2²) + f1(x2² − x0²) + f2(x0² − x1²)]
//!        / [f0(x1 − x2)   + f1(x2 − x0)   + f2(x0 − x1)]
//! ```
//!
//! becomes the next estimate. The search accepts `x*` once both
//! `|x* − x1| < tolerance` and `|f(x*) − f1| < tolerance`; otherwise `x*`
//! replaces one of the three samples (see [`update`]) and the fit repeats.
//!
//! On a true quadratic the fitted parabola is the function itself, so the
//! first vertex is the exact minimizer.
//!
//! # Degeneracy
//!
//! When the denominator is smaller than `1e-10` in magnitude (collinear or
//! repeated samples) the run aborts with [`Error::DegenerateFit`].
//!
//! # Observer Events
//!
//! [`Event::Iteration`] after each fit and [`Event::Finished`] once at the end.

mod event;
mod solution;

pub use event::Event;
pub use solution::{Solution, Status};

use descent_core::{Objective, Observer};

use super::{Action, Config, Point};

/// Magnitude below which the vertex denominator counts as zero.
const DEGENERATE_DENOMINATOR: f64 = 1e-10;

/// Errors that can occur during quadratic interpolation.
#[derive(Debug, Clone, Copy, PartialEq, thiserror::Error)]
pub enum Error {
    #[error("degenerate parabola through {points:?}: denominator {denominator:e}")]
    DegenerateFit { points: [f64; 3], denominator: f64 },

    #[error("objective returned NaN at x = {x}")]
    NotANumber { x: f64 },
}

/// Minimizes the objective starting from three samples `[x0, x1, x2]`.
///
/// The samples should bracket the minimum with `x1` the best of the three.
///
/// # Errors
///
/// Returns [`Error::DegenerateFit`] if a fit has a vanishing denominator and
/// [`Error::NotANumber`] if the objective returns NaN.
pub fn minimize<P, Obs>(
    objective: &P,
    points: [f64; 3],
    config: &Config,
    mut observer: Obs,
) -> Result<Solution, Error>
where
    P: Objective<1>,
    Obs: Observer<Event, Action>,
{
    let mut points = [
        eval(objective, points[0])?,
        eval(objective, points[1])?,
        eval(objective, points[2])?,
    ];
    let mut trace = Vec::new();

    for iter in 1..=config.max_iters() {
        let x = vertex(&points)?;
        let estimate = eval(objective, x)?;
        trace.push(x);

        let event = Event::Iteration {
            iter,
            points,
            estimate,
        };
        log::trace!("quadratic fit: {event}");
        if let Some(Action::StopEarly) = observer.observe(&event) {
            return Ok(finish(
                Status::StoppedByObserver,
                points[1],
                iter,
                points,
                trace,
                &mut observer,
            ));
        }

        let best = points[1];
        if (estimate.x - best.x).abs() < config.tolerance()
            && (estimate.objective - best.objective).abs() < config.tolerance()
        {
            return Ok(finish(
                Status::Converged,
                estimate,
                iter,
                points,
                trace,
                &mut observer,
            ));
        }

        points = update(points, estimate);
    }

    Ok(finish(
        Status::MaxIters,
        points[1],
        config.max_iters(),
        points,
        trace,
        &mut observer,
    ))
}

/// Minimizes the objective without observer support.
///
/// # Errors
///
/// Returns an error under the same conditions as [`minimize`].
pub fn minimize_unobserved<P>(
    objective: &P,
    points: [f64; 3],
    config: &Config,
) -> Result<Solution, Error>
where
    P: Objective<1>,
{
    minimize(objective, points, config, ())
}

/// Returns the vertex of the parabola through the three samples.
///
/// # Errors
///
/// Returns [`Error::DegenerateFit`] if the denominator is below `1e-10`.
pub fn vertex(points: &[Point; 3]) -> Result<f64, Error> {
    let [p0, p1, p2] = *points;
    let (x0, x1, x2) = (p0.x, p1.x, p2.x);
    let (f0, f1, f2) = (p0.objective, p1.objective, p2.objective);

    let numerator = f0 * (x1 * x1 - x2 * x2) + f1 * (x2 * x2 - x0 * x0) + f2 * (x0 * x0 - x1 * x1);
    let denominator = f0 * (x1 - x2) + f1 * (x2 - x0) + f2 * (x0 - x1);

    if denominator.abs() < DEGENERATE_DENOMINATOR {
        return Err(Error::DegenerateFit {
            points: [x0, x1, x2],
            denominator,
        });
    }

    Ok(0.5 * numerator / denominator)
}

/// Replaces one sample with the new estimate.
///
/// - Estimate left of `x1` and better than it: `(x1, x2) ← (x*, x1)`.
/// - Estimate left of `x1` but not better: `x0 ← x*`.
/// - Estimate at or right of `x1` and better: `(x0, x1) ← (x1, x*)`.
/// - Estimate at or right of `x1` but not better: `x2 ← x*`.
#[must_use]
pub fn update(points: [Point; 3], estimate: Point) -> [Point; 3] {
    let [p0, p1, p2] = points;
    let better = estimate.objective < p1.objective;

    if estimate.x < p1.x {
        if better {
            [p0, estimate, p1]
        } else {
            [estimate, p1, p2]
        }
    } else if better {
        [p1, estimate, p2]
    } else {
        [p0, p1, estimate]
    }
}

fn finish<Obs>(
    status: Status,
    estimate: Point,
    iters: usize,
    points: [Point; 3],
    trace: Vec<f64>,
    observer: &mut Obs,
) -> Solution
where
    Obs: Observer<Event, Action>,
{
    let event = Event::Finished {
        status,
        iters,
        estimate,
    };
    log::debug!("quadratic fit: {event}");
    observer.observe(&event);

    Solution {
        status,
        x: estimate.x,
        objective: estimate.objective,
        points: points.map(|p| p.x),
        iters,
        trace,
    }
}

fn eval<P: Objective<1>>(objective: &P, x: f64) -> Result<Point, Error> {
    let value = objective.value(&[x]);
    if value.is_nan() {
        return Err(Error::NotANumber { x });
    }
    Ok(Point::new(x, value))
}
