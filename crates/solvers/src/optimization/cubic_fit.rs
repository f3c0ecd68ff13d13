//! Cubic interpolation search for single-variable minimization.
//!
//! Four samples determine a unique cubic `a x³ + b x² + c x + d`. The
//! coefficients come from the 4×4 Vandermonde system
//!
//! ```text
//! | x0³ x0² x0 1 |   | a |   | f0 |
//! | x1³ x1² x1 1 | · | b | = | f1 |
//! | x2³ x2² x2 1 |   | c |   | f2 |
//! | x3³ x3² x3 1 |   | d |   | f3 |
//! ```
//!
//! The next estimate is the real root of `3a x² + 2b x + c` strictly inside
//! `(x0, x3)` with the smallest objective value. Acceptance mirrors
//! [`quadratic_fit`]: both `|x* − x1|` and `|f(x*) − f1|` must fall below the
//! tolerance. Otherwise [`update`] folds the estimate into the four samples.
//!
//! A singular system (repeated abscissas) aborts with
//! [`Error::SingularSystem`], and a fit with no admissible critical point
//! aborts with [`Error::NoInteriorCriticalPoint`].
//!
//! [`quadratic_fit`]: super::quadratic_fit

mod event;
mod solution;

pub use event::Event;
pub use solution::{Solution, Status};

use descent_core::{Objective, Observer, linalg};

use super::{Action, Config, Point};

/// Errors that can occur during cubic interpolation.
#[derive(Debug, Clone, Copy, PartialEq, thiserror::Error)]
pub enum Error {
    #[error("singular system fitting a cubic through {points:?}")]
    SingularSystem { points: [f64; 4] },

    #[error(
        "no critical point of the fitted cubic lies strictly inside ({}, {})",
        .points[0],
        .points[3]
    )]
    NoInteriorCriticalPoint { points: [f64; 4] },

    #[error("objective returned NaN at x = {x}")]
    NotANumber { x: f64 },
}

/// Minimizes the objective starting from four samples `[x0, x1, x2, x3]`.
///
/// The samples should be distinct and bracket the minimum, with `x0` and
/// `x3` the outer ends.
///
/// # Errors
///
/// Returns [`Error::SingularSystem`] if a fit cannot be solved,
/// [`Error::NoInteriorCriticalPoint`] if a fitted cubic has no admissible
/// critical point, and [`Error::NotANumber`] if the objective returns NaN.
pub fn minimize<P, Obs>(
    objective: &P,
    points: [f64; 4],
    config: &Config,
    mut observer: Obs,
) -> Result<Solution, Error>
where
    P: Objective<1>,
    Obs: Observer<Event, Action>,
{
    let mut samples = [Point::new(0.0, 0.0); 4];
    for (sample, &x) in samples.iter_mut().zip(&points) {
        *sample = eval(objective, x)?;
    }
    let mut trace = Vec::new();

    for iter in 1..=config.max_iters() {
        let coefficients = fit(&samples)?;
        let estimate = interior_minimum(objective, &coefficients, &samples)?;
        trace.push(estimate.x);

        let event = Event::Iteration {
            iter,
            points: samples,
            coefficients,
            estimate,
        };
        log::trace!("cubic fit: {event}");
        if let Some(Action::StopEarly) = observer.observe(&event) {
            return Ok(finish(
                Status::StoppedByObserver,
                samples[1],
                iter,
                samples,
                trace,
                &mut observer,
            ));
        }

        let best = samples[1];
        if (estimate.x - best.x).abs() < config.tolerance()
            && (estimate.objective - best.objective).abs() < config.tolerance()
        {
            return Ok(finish(
                Status::Converged,
                estimate,
                iter,
                samples,
                trace,
                &mut observer,
            ));
        }

        samples = update(samples, estimate);
    }

    Ok(finish(
        Status::MaxIters,
        samples[1],
        config.max_iters(),
        samples,
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
    points: [f64; 4],
    config: &Config,
) -> Result<Solution, Error>
where
    P: Objective<1>,
{
    minimize(objective, points, config, ())
}

/// Returns the coefficients `[a, b, c, d]` of the cubic through the samples.
///
/// # Errors
///
/// Returns [`Error::SingularSystem`] if the Vandermonde system is singular.
pub fn fit(samples: &[Point; 4]) -> Result<[f64; 4], Error> {
    let matrix = samples.map(|p| [p.x.powi(3), p.x.powi(2), p.x, 1.0]);
    let values = samples.map(|p| p.objective);

    linalg::solve(&matrix, &values).ok_or(Error::SingularSystem {
        points: samples.map(|p| p.x),
    })
}

/// Returns the real roots of `3a x² + 2b x + c`, the derivative of the cubic.
///
/// A vanishing leading coefficient leaves the linear root, and a constant
/// derivative has none.
#[must_use]
pub fn critical_points(coefficients: &[f64; 4]) -> Vec<f64> {
    let [a, b, c, _] = *coefficients;
    let (qa, qb, qc) = (3.0 * a, 2.0 * b, c);

    if qa == 0.0 {
        return if qb == 0.0 { vec![] } else { vec![-qc / qb] };
    }

    let discriminant = qb * qb - 4.0 * qa * qc;
    if discriminant < 0.0 {
        return vec![];
    }

    // Pair the root computed without cancellation with its Vieta partner.
    let q = -0.5 * (qb + qb.signum() * discriminant.sqrt());
    if q == 0.0 {
        return vec![0.0];
    }
    vec![q / qa, qc / q]
}

/// Folds a new estimate into the four samples.
///
/// - Estimate left of `x1` and better than it: `(x1, x2, x3) ← (x*, x1, x2)`.
/// - Estimate left of `x1` but not better: `x0 ← x*`.
/// - Estimate at or right of `x1` and better: `(x0, x1) ← (x1, x*)`.
/// - Estimate at or right of `x1` but not better: `x3 ← x*`.
#[must_use]
pub fn update(samples: [Point; 4], estimate: Point) -> [Point; 4] {
    let [p0, p1, p2, p3] = samples;
    let better = estimate.objective < p1.objective;

    if estimate.x < p1.x {
        if better {
            [p0, estimate, p1, p2]
        } else {
            [estimate, p1, p2, p3]
        }
    } else if better {
        [p1, estimate, p2, p3]
    } else {
        [p0, p1, p2, estimate]
    }
}

/// Picks the admissible critical point with the smallest objective.
fn interior_minimum<P: Objective<1>>(
    objective: &P,
    coefficients: &[f64; 4],
    samples: &[Point; 4],
) -> Result<Point, Error> {
    let (lower, upper) = (samples[0].x, samples[3].x);

    let mut best: Option<Point> = None;
    for x in critical_points(coefficients) {
        if x <= lower || x >= upper {
            continue;
        }
        let candidate = eval(objective, x)?;
        if best.is_none_or(|b| candidate.objective < b.objective) {
            best = Some(candidate);
        }
    }

    best.ok_or(Error::NoInteriorCriticalPoint {
        points: samples.map(|p| p.x),
    })
}

fn finish<Obs>(
    status: Status,
    estimate: Point,
    iters: usize,
    samples: [Point; 4],
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
    log::debug!("cubic fit: {event}");
    observer.observe(&event);

    Solution {
        status,
        x: estimate.x,
        objective: estimate.objective,
        points: samples.map(|p| p.x),
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

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;
    use descent_core::Scalar;

    fn cubic() -> Scalar<impl Fn(f64) -> f64> {
        Scalar(|x: f64| x.powi(3) - 3.0 * x)
    }

    #[test]
    fn recovers_critical_point_of_true_cubic() {
        let solution = minimize_unobserved(&cubic(), [0.0, 1.0, 1.5, 2.0], &Config::default())
            .expect("should converge");

        assert_eq!(solution.status, Status::Converged);
        assert_eq!(solution.iters, 1);
        assert_relative_eq!(solution.x, 1.0, epsilon = 1e-5);
        assert_relative_eq!(solution.objective, -2.0, epsilon = 1e-5);
    }

    #[test]
    fn moves_best_point_then_accepts() {
        let solution = minimize_unobserved(&cubic(), [0.0, 0.5, 1.5, 2.0], &Config::default())
            .expect("should converge");

        assert_relative_eq!(solution.trace[0], 1.0, epsilon = 1e-9);
        assert_eq!(solution.status, Status::Converged);
        assert_eq!(solution.iters, 2);
        assert_relative_eq!(solution.points[0], 0.5);
        assert_relative_eq!(solution.points[2], 1.5);
        assert_relative_eq!(solution.points[3], 2.0);
    }

    #[test]
    fn budget_exhaustion_returns_best_interior_point() {
        // A quartic is never fitted exactly, so one fit cannot be accepted.
        let quartic = Scalar(|x: f64| (x - 1.0).powi(4) + 0.1 * x);
        let config = Config::new(1e-12, 1).unwrap();

        let solution = minimize_unobserved(&quartic, [-1.0, 0.0, 2.0, 3.0], &config)
            .expect("should finish");

        assert_eq!(solution.status, Status::MaxIters);
        assert_eq!(solution.iters, 1);
        assert_eq!(solution.x, solution.points[1]);
        // The first critical point (0.99) beat x1 = 0 and took its place.
        assert_relative_eq!(solution.x, 0.99, epsilon = 1e-9);
        assert_eq!(solution.points[0], 0.0);
        assert_eq!(solution.trace, vec![solution.x]);
    }

    #[test]
    fn repeated_abscissa_is_singular() {
        let result = minimize_unobserved(&cubic(), [0.0, 1.0, 1.0, 2.0], &Config::default());

        assert_eq!(
            result,
            Err(Error::SingularSystem {
                points: [0.0, 1.0, 1.0, 2.0]
            })
        );
    }

    #[test]
    fn monotone_cubic_has_no_critical_point() {
        let monotone = Scalar(|x: f64| x.powi(3) + x);

        let result = minimize_unobserved(&monotone, [-1.0, 0.0, 1.0, 2.0], &Config::default());

        assert!(matches!(result, Err(Error::NoInteriorCriticalPoint { .. })));
    }

    #[test]
    fn critical_point_outside_bracket_is_rejected() {
        // Critical points of x³ - 3x are ±1, neither inside (2, 5).
        let result = minimize_unobserved(&cubic(), [2.0, 3.0, 4.0, 5.0], &Config::default());

        assert!(matches!(result, Err(Error::NoInteriorCriticalPoint { .. })));
    }

    #[test]
    fn critical_points_of_derivative() {
        // d/dx (x³ - 3x) = 3x² - 3
        let mut roots = critical_points(&[1.0, 0.0, -3.0, 0.0]);
        roots.sort_by(f64::total_cmp);
        assert_eq!(roots.len(), 2);
        assert_relative_eq!(roots[0], -1.0);
        assert_relative_eq!(roots[1], 1.0);

        // Quadratic: d/dx (x² - 4x) = 2x - 4
        assert_eq!(critical_points(&[0.0, 1.0, -4.0, 0.0]), vec![2.0]);

        // Linear: constant derivative.
        assert!(critical_points(&[0.0, 0.0, 2.0, 1.0]).is_empty());

        // x³ + x: 3x² + 1 has no real roots.
        assert!(critical_points(&[1.0, 0.0, 1.0, 0.0]).is_empty());
    }

    #[test]
    fn update_follows_all_four_branches() {
        let p = [
            Point::new(0.0, 5.0),
            Point::new(1.0, 1.0),
            Point::new(2.0, 2.0),
            Point::new(3.0, 6.0),
        ];

        let left_better = update(p, Point::new(0.5, 0.5));
        assert_eq!(left_better.map(|q| q.x), [0.0, 0.5, 1.0, 2.0]);

        let left_worse = update(p, Point::new(0.5, 3.0));
        assert_eq!(left_worse.map(|q| q.x), [0.5, 1.0, 2.0, 3.0]);

        let right_better = update(p, Point::new(1.5, 0.5));
        assert_eq!(right_better.map(|q| q.x), [1.0, 1.5, 2.0, 3.0]);

        let right_worse = update(p, Point::new(2.5, 4.0));
        assert_eq!(right_worse.map(|q| q.x), [0.0, 1.0, 2.0, 2.5]);
    }

    #[test]
    fn observer_receives_iteration_then_finished() {
        let mut events = Vec::new();
        let observer = |event: &Event| {
            events.push(event.clone());
            None
        };

        let solution = minimize(&cubic(), [0.0, 0.5, 1.5, 2.0], &Config::default(), observer)
            .expect("should converge");

        assert_eq!(events.len(), solution.iters + 1);
        assert!(matches!(events[0], Event::Iteration { iter: 1, .. }));
        assert!(matches!(
            events.last(),
            Some(Event::Finished {
                status: Status::Converged,
                ..
            })
        ));
    }
}
