//! Newton's method for multivariate minimization with an exact Hessian.
//!
//! Each iteration solves `H(x) · Δx = −∇f(x)` and takes the full step
//! `x ← x + Δx`. There is no line search or damping, so convergence is only
//! local: far from a minimizer, or where the Hessian is indefinite, the
//! iterates can wander or head for a saddle point.
//!
//! # Termination
//!
//! - [`Status::GradientConverged`] when `‖∇f(x)‖ < tolerance`, checked
//!   before every step.
//! - [`Status::StepConverged`] when a step had `‖Δx‖ < tolerance`; the
//!   solution holds the point after that step.
//! - [`Status::SingularHessian`] when the linear system has no unique
//!   solution. The run ends with the progress made so far.
//! - [`Status::MaxIters`] when the step budget is spent.
//!
//! On a quadratic objective the first step lands exactly on the minimizer.

mod event;
mod solution;

pub use event::Event;
pub use solution::{Solution, Status};

use descent_core::{Hessian, Observer, linalg};

use super::{Action, Config};

/// Errors that can occur during Newton iteration.
#[derive(Debug, Clone, Copy, PartialEq, thiserror::Error)]
pub enum Error {
    #[error("objective or gradient is not finite after {iters} steps")]
    NonFinite { iters: usize },
}

/// Minimizes the objective from `x0` with full Newton steps.
///
/// `config.max_iters()` bounds the number of steps taken.
///
/// # Errors
///
/// Returns [`Error::NonFinite`] if the objective or gradient evaluates to a
/// non-finite value at a visited point.
pub fn minimize<P, Obs, const N: usize>(
    objective: &P,
    x0: [f64; N],
    config: &Config,
    mut observer: Obs,
) -> Result<Solution<N>, Error>
where
    P: Hessian<N>,
    Obs: Observer<Event<N>, Action>,
{
    let mut x = x0;
    let mut value = objective.value(&x);
    let mut trace = vec![x];
    let mut iters = 0;

    let status = loop {
        let gradient = objective.gradient(&x);
        let gradient_norm = linalg::norm(&gradient);
        if !value.is_finite() || !gradient_norm.is_finite() {
            return Err(Error::NonFinite { iters });
        }

        if gradient_norm < config.tolerance() {
            break Status::GradientConverged;
        }
        if iters >= config.max_iters() {
            break Status::MaxIters;
        }

        let hessian = objective.hessian(&x);
        let Some(step) = linalg::solve(&hessian, &linalg::scale(-1.0, &gradient)) else {
            break Status::SingularHessian;
        };
        let step_norm = linalg::norm(&step);

        x = linalg::axpy(&x, 1.0, &step);
        value = objective.value(&x);
        trace.push(x);
        iters += 1;

        let event = Event::Iteration {
            iter: iters,
            x,
            objective: value,
            gradient_norm,
            step_norm,
        };
        log::trace!("newton: {event}");
        if let Some(Action::StopEarly) = observer.observe(&event) {
            break Status::StoppedByObserver;
        }

        if step_norm < config.tolerance() {
            break Status::StepConverged;
        }
    };

    if !value.is_finite() {
        return Err(Error::NonFinite { iters });
    }

    let event = Event::Finished {
        status,
        iters,
        x,
        objective: value,
    };
    log::debug!("newton: {event}");
    observer.observe(&event);

    Ok(Solution {
        status,
        x,
        objective: value,
        iters,
        trace,
    })
}

/// Minimizes the objective without observer support.
///
/// # Errors
///
/// Returns an error under the same conditions as [`minimize`].
pub fn minimize_unobserved<P, const N: usize>(
    objective: &P,
    x0: [f64; N],
    config: &Config,
) -> Result<Solution<N>, Error>
where
    P: Hessian<N>,
{
    minimize(objective, x0, config, ())
}
