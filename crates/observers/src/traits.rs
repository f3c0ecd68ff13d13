//! Capability traits for cross-solver observers.
//!
//! These traits abstract over the solver-specific event types, so one
//! observer can steer any of the solvers.
//!
//! # Event traits
//!
//! - [`HasIteration`] — events that belong to a numbered iteration
//! - [`HasObjective`] — events that carry an objective value
//!
//! # Action traits
//!
//! - [`CanStopEarly`] — actions that can signal early termination
//!
//! # Example
//!
//! ```rust
//! use descent_core::Observer;
//! use descent_observers::traits::{CanStopEarly, HasObjective};
//!
//! /// Stops once the objective drops below a target.
//! struct GoodEnough {
//!     target: f64,
//! }
//!
//! impl<E: HasObjective, A: CanStopEarly> Observer<E, A> for GoodEnough {
//!     fn observe(&mut self, event: &E) -> Option<A> {
//!         (event.objective() < self.target).then(A::stop_early)
//!     }
//! }
//! ```

use descent_solvers::optimization::{
    Action, cubic_fit, fletcher_reeves, golden_section, newton, quadratic_fit,
};

/// An event that may belong to a numbered iteration.
pub trait HasIteration {
    /// Returns the 1-based iteration number, or `None` for the final event.
    fn iteration(&self) -> Option<usize>;
}

/// An event that carries an objective value.
pub trait HasObjective {
    /// Returns the best objective value the event reports.
    fn objective(&self) -> f64;
}

/// An action type that can signal early termination.
pub trait CanStopEarly {
    /// Returns the action that stops the solver early.
    fn stop_early() -> Self;
}

impl CanStopEarly for Action {
    fn stop_early() -> Self {
        Self::StopEarly
    }
}

// --- golden_section::Event ---

impl HasIteration for golden_section::Event {
    fn iteration(&self) -> Option<usize> {
        match self {
            golden_section::Event::Iteration { iter, .. } => Some(*iter),
            golden_section::Event::Finished { .. } => None,
        }
    }
}

impl HasObjective for golden_section::Event {
    fn objective(&self) -> f64 {
        match self {
            golden_section::Event::Iteration { left, right, .. } => {
                left.objective.min(right.objective)
            }
            golden_section::Event::Finished { estimate, .. } => estimate.objective,
        }
    }
}

// --- quadratic_fit::Event ---

impl HasIteration for quadratic_fit::Event {
    fn iteration(&self) -> Option<usize> {
        match self {
            quadratic_fit::Event::Iteration { iter, .. } => Some(*iter),
            quadratic_fit::Event::Finished { .. } => None,
        }
    }
}

impl HasObjective for quadratic_fit::Event {
    fn objective(&self) -> f64 {
        match self {
            quadratic_fit::Event::Iteration { estimate, .. }
            | quadratic_fit::Event::Finished { estimate, .. } => estimate.objective,
        }
    }
}

// --- cubic_fit::Event ---

impl HasIteration for cubic_fit::Event {
    fn iteration(&self) -> Option<usize> {
        match self {
            cubic_fit::Event::Iteration { iter, .. } => Some(*iter),
            cubic_fit::Event::Finished { .. } => None,
        }
    }
}

impl HasObjective for cubic_fit::Event {
    fn objective(&self) -> f64 {
        match self {
            cubic_fit::Event::Iteration { estimate, .. }
            | cubic_fit::Event::Finished { estimate, .. } => estimate.objective,
        }
    }
}

// --- newton::Event ---

impl<const N: usize> HasIteration for newton::Event<N> {
    fn iteration(&self) -> Option<usize> {
        match self {
            newton::Event::Iteration { iter, .. } => Some(*iter),
            newton::Event::Finished { .. } => None,
        }
    }
}

impl<const N: usize> HasObjective for newton::Event<N> {
    fn objective(&self) -> f64 {
        match self {
            newton::Event::Iteration { objective, .. }
            | newton::Event::Finished { objective, .. } => *objective,
        }
    }
}

// --- fletcher_reeves::Event ---

impl<const N: usize> HasIteration for fletcher_reeves::Event<N> {
    fn iteration(&self) -> Option<usize> {
        match self {
            fletcher_reeves::Event::Iteration { iter, .. } => Some(*iter),
            fletcher_reeves::Event::Finished { .. } => None,
        }
    }
}

impl<const N: usize> HasObjective for fletcher_reeves::Event<N> {
    fn objective(&self) -> f64 {
        match self {
            fletcher_reeves::Event::Iteration { objective, .. }
            | fletcher_reeves::Event::Finished { objective, .. } => *objective,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use descent_core::{Observer, functions::Bowl};
    use descent_solvers::optimization::Config;

    /// Stops after a fixed number of iterations.
    struct StopAt(usize);

    impl<E: HasIteration, A: CanStopEarly> Observer<E, A> for StopAt {
        fn observe(&mut self, event: &E) -> Option<A> {
            (event.iteration() == Some(self.0)).then(A::stop_early)
        }
    }

    #[test]
    fn generic_observer_stops_any_solver() {
        let quartic = descent_core::Scalar(|x: f64| x.powi(4) - 3.0 * x);

        let golden = golden_section::minimize(
            &quartic,
            [0.0, 2.0],
            &golden_section::Config::default(),
            StopAt(3),
        )
        .unwrap();
        assert_eq!(golden.status, golden_section::Status::StoppedByObserver);
        assert_eq!(golden.iters, 2);

        let quadratic = quadratic_fit::minimize(
            &quartic,
            [0.0, 0.5, 2.0],
            &Config::new(1e-12, 100).unwrap(),
            StopAt(3),
        )
        .unwrap();
        assert_eq!(quadratic.status, quadratic_fit::Status::StoppedByObserver);
        assert_eq!(quadratic.iters, 3);
    }

    #[test]
    fn objective_of_multivariate_events() {
        let mut objectives = Vec::new();
        let observer = |event: &newton::Event<2>| {
            objectives.push(event.objective());
            None::<Action>
        };

        newton::minimize(&Bowl, [3.0, 3.0], &Config::default(), observer).unwrap();

        assert_eq!(objectives.len(), 2);
        assert!(objectives.iter().all(|&f| (f - Bowl::MINIMUM).abs() < 1e-10));
    }
}
