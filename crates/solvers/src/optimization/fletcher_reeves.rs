//! Fletcher-Reeves nonlinear conjugate gradient.
//!
//! # Algorithm
//!
//! Starting from `d = −∇f(x0)`, each iteration
//!
//! 1. steps to `x_new = x + α d` with `α = −(g · d) / (d · d)`,
//! 2. tests for convergence,
//! 3. updates the direction to `d = −g_new + β d` with the Fletcher-Reeves
//!    coefficient `β = ‖g_new‖² / ‖g‖²`.
//!
//! Every `restart_interval` iterations the direction is reset to steepest
//! descent (`β = 0`), discarding the accumulated conjugacy.
//!
//! The step size is the exact line minimizer only when the Hessian is a
//! multiple of the identity. On other objectives it is an approximation and
//! the iteration may stall or diverge; callers should treat it that way.
//!
//! # Termination
//!
//! Checked on each candidate in this order, the first match wins:
//! [`Status::GradientConverged`] (`‖∇f(x_new)‖ < tolerance`),
//! [`Status::ObjectiveConverged`] (`|f(x_new) − f(x)| < tolerance`) and
//! [`Status::StepConverged`] (`‖x_new − x‖ < tolerance`). The converging
//! candidate is accepted. A search direction shorter than `1e-15` ends the
//! run with [`Status::DirectionVanished`].

mod config;
mod event;
mod solution;

#[cfg(test)]
mod tests;

pub use config::Config;
pub use event::Event;
pub use solution::{Solution, Status};

use descent_core::{Gradient, Observer, linalg};

use super::Action;

/// Direction norm below which the search direction counts as vanished.
const VANISHING_DIRECTION: f64 = 1e-15;

/// Errors that can occur during conjugate gradient iteration.
#[derive(Debug, Clone, Copy, PartialEq, thiserror::Error)]
pub enum Error {
    #[error("objective or gradient is not finite after {iters} iterations")]
    NonFinite { iters: usize },
}

/// Minimizes the objective from `x0`.
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
    P: Gradient<N>,
    Obs: Observer<Event<N>, Action>,
{
    let (mut value, mut gradient) = evaluate(objective, &x0, 0)?;
    let mut x = x0;
    let mut trace = vec![x0];
    let mut iters = 0;

    let mut direction = linalg::scale(-1.0, &gradient);

    let status = loop {
        if iters == 0 && linalg::norm(&gradient) < config.tolerance() {
            break Status::GradientConverged;
        }
        if iters >= config.max_iters() {
            break Status::MaxIters;
        }
        if linalg::norm(&direction) < VANISHING_DIRECTION {
            break Status::DirectionVanished;
        }

        let alpha = -linalg::dot(&gradient, &direction) / linalg::dot(&direction, &direction);
        let x_new = linalg::axpy(&x, alpha, &direction);
        let (value_new, gradient_new) = evaluate(objective, &x_new, iters)?;

        let converged = if linalg::norm(&gradient_new) < config.tolerance() {
            Some(Status::GradientConverged)
        } else if (value_new - value).abs() < config.tolerance() {
            Some(Status::ObjectiveConverged)
        } else if linalg::norm(&linalg::sub(&x_new, &x)) < config.tolerance() {
            Some(Status::StepConverged)
        } else {
            None
        };

        let restart = converged.is_none() && config.restarts_after(iters);
        let beta = if converged.is_some() || restart {
            0.0
        } else {
            linalg::dot(&gradient_new, &gradient_new) / linalg::dot(&gradient, &gradient)
        };
        if converged.is_none() {
            direction = linalg::axpy(&linalg::scale(-1.0, &gradient_new), beta, &direction);
        }

        x = x_new;
        value = value_new;
        gradient = gradient_new;
        trace.push(x);
        iters += 1;

        let event = Event::Iteration {
            iter: iters,
            x,
            objective: value,
            gradient_norm: linalg::norm(&gradient),
            alpha,
            beta,
            restarted: restart,
        };
        log::trace!("fletcher-reeves: {event}");
        if let Some(Action::StopEarly) = observer.observe(&event) {
            break Status::StoppedByObserver;
        }

        if let Some(status) = converged {
            break status;
        }
    };

    let event = Event::Finished {
        status,
        iters,
        x,
        objective: value,
    };
    log::debug!("fletcher-reeves: {event}");
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
    P: Gradient<N>,
{
    minimize(objective, x0, config, ())
}

/// Evaluates the objective and gradient, rejecting non-finite results.
fn evaluate<P, const N: usize>(
    objective: &P,
    x: &[f64; N],
    iters: usize,
) -> Result<(f64, [f64; N]), Error>
where
    P: Gradient<N>,
{
    let value = objective.value(x);
    let gradient = objective.gradient(x);
    if value.is_finite() && gradient.iter().all(|g| g.is_finite()) {
        Ok((value, gradient))
    } else {
        Err(Error::NonFinite { iters })
    }
}
