use super::*;

use approx::assert_relative_eq;
use descent_core::{Smooth, functions::Bowl, linalg};

fn sphere(scale: f64) -> impl Gradient<2> {
    Smooth::new(
        move |x: &[f64; 2]| scale * (x[0] * x[0] + x[1] * x[1]),
        move |x: &[f64; 2]| [2.0 * scale * x[0], 2.0 * scale * x[1]],
    )
}

fn elliptic() -> impl Gradient<2> {
    Smooth::new(
        |x: &[f64; 2]| 0.5 * (x[0] * x[0] + 4.0 * x[1] * x[1]),
        |x: &[f64; 2]| [x[0], 4.0 * x[1]],
    )
}

// The closed-form step is the exact line minimizer only when the Hessian is a
// multiple of the identity. Bowl's is not, so from a start off the diagonal,
// e.g. (3, -2), the iterates grow without bound. Symmetric starts keep the
// first direction on the diagonal, an eigenvector, where the step is exact.
#[test]
fn bowl_from_symmetric_starts() {
    for x0 in [[0.0, 0.0], [2.0, 2.0]] {
        let solution = minimize_unobserved(&Bowl, x0, &Config::default()).expect("finite");

        assert_eq!(solution.status, Status::GradientConverged, "from {x0:?}");
        assert!(solution.status.is_converged());
        assert_eq!(solution.iters, 1);
        assert_eq!(solution.x, Bowl::MINIMIZER);
        assert_relative_eq!(solution.objective, Bowl::MINIMUM);
        assert_eq!(solution.trace, vec![x0, Bowl::MINIMIZER]);
    }
}

#[test]
fn converged_start_returns_immediately() {
    let solution = minimize_unobserved(&Bowl, Bowl::MINIMIZER, &Config::default()).expect("finite");

    assert_eq!(solution.status, Status::GradientConverged);
    assert_eq!(solution.iters, 0);
    assert_eq!(solution.trace, vec![Bowl::MINIMIZER]);
}

#[test]
fn unit_step_overshoots_to_equal_objective() {
    // With f = |x|² the step α = 1 jumps from (1, 1) to (−1, −1), where the
    // objective is unchanged.
    let solution =
        minimize_unobserved(&sphere(1.0), [1.0, 1.0], &Config::default()).expect("finite");

    assert_eq!(solution.status, Status::ObjectiveConverged);
    assert_eq!(solution.iters, 1);
    assert_eq!(solution.x, [-1.0, -1.0]);
}

#[test]
fn short_step_converges_when_objective_still_moves() {
    let config = Config::new(10.0, 100, 10).unwrap();

    let solution = minimize_unobserved(&elliptic(), [8.0, 2.0], &config).expect("finite");

    // Second step: |dx| ≈ 7.59 while |df| ≈ 20.2 and |g| ≈ 16.1.
    assert_eq!(solution.status, Status::StepConverged);
    assert!(solution.status.is_converged());
    assert_eq!(solution.iters, 2);
    assert_relative_eq!(solution.x[0], 7.2, epsilon = 1e-12);
    assert_relative_eq!(solution.x[1], -3.6, epsilon = 1e-12);
}

#[test]
fn objective_test_takes_priority_over_step_test() {
    let config = Config::new(1.0, 100, 10).unwrap();

    let mut last_gradient_norm = f64::NAN;
    let observer = |event: &Event<2>| {
        if let Event::Iteration { gradient_norm, .. } = event {
            last_gradient_norm = *gradient_norm;
        }
        None::<Action>
    };

    let solution = minimize(&elliptic(), [6.0, 2.0], &config, observer).expect("finite");

    // Fourth step: |df| ≈ 0.0037 and |dx| ≈ 0.086 both pass, |g| ≈ 15.8 does not.
    assert_eq!(solution.status, Status::ObjectiveConverged);
    assert!(solution.status.is_converged());
    assert_eq!(solution.iters, 4);
    assert_relative_eq!(solution.x[0], 0.4266662039963194, epsilon = 1e-9);
    assert_relative_eq!(solution.x[1], -3.9550071474971897, epsilon = 1e-9);

    let [.., previous, last] = solution.trace[..] else {
        panic!("trace too short");
    };
    assert!(linalg::norm(&linalg::sub(&last, &previous)) < 1.0);
    assert!(last_gradient_norm > 1.0);
}

#[test]
fn periodic_restart_resets_direction() {
    let config = Config::new(1e-5, 100, 2).unwrap();

    let mut events = Vec::new();
    let observer = |event: &Event<2>| {
        events.push(event.clone());
        None
    };

    let solution = minimize(&sphere(0.25), [4.0, 4.0], &config, observer).expect("finite");

    assert_eq!(solution.status, Status::ObjectiveConverged);
    assert_eq!(solution.iters, 11);
    assert_eq!(solution.trace.len(), 12);

    let iterations: Vec<_> = events
        .iter()
        .filter_map(|event| match event {
            Event::Iteration {
                objective,
                beta,
                restarted,
                ..
            } => Some((*objective, *beta, *restarted)),
            Event::Finished { .. } => None,
        })
        .collect();
    assert_eq!(iterations.len(), 11);

    let (_, beta, restarted) = iterations[0];
    assert_relative_eq!(beta, 0.25);
    assert!(!restarted);

    let (_, beta, restarted) = iterations[2];
    assert_eq!(beta, 0.0);
    assert!(restarted);

    for pair in iterations.windows(2) {
        assert!(pair[1].0 <= pair[0].0, "objective increased: {pair:?}");
    }
}

#[test]
fn tiny_gradient_with_tighter_tolerance_vanishes() {
    let config = Config::new(1e-20, 100, 10).unwrap();

    let solution = minimize_unobserved(&sphere(1.0), [1e-16, 0.0], &config).expect("finite");

    assert_eq!(solution.status, Status::DirectionVanished);
    assert_eq!(solution.iters, 0);
    assert_eq!(solution.x, [1e-16, 0.0]);
}

#[test]
fn budget_exhaustion_is_not_an_error() {
    let config = Config::new(1e-12, 3, 10).unwrap();

    let solution = minimize_unobserved(&sphere(0.25), [4.0, 4.0], &config).expect("finite");

    assert_eq!(solution.status, Status::MaxIters);
    assert_eq!(solution.iters, 3);
    assert_eq!(solution.trace.len(), 4);
}

#[test]
fn non_finite_gradient_is_an_error() {
    let steep = Smooth::new(
        |x: &[f64; 1]| x[0].abs().sqrt(),
        |x: &[f64; 1]| [0.5 * x[0].signum() / x[0].abs().sqrt()],
    );

    let result = minimize_unobserved(&steep, [0.0], &Config::default());

    assert_eq!(result, Err(Error::NonFinite { iters: 0 }));
}

#[test]
fn observer_can_stop_early() {
    let observer = |event: &Event<2>| match event {
        Event::Iteration { iter: 2, .. } => Some(Action::StopEarly),
        _ => None,
    };

    let solution =
        minimize(&sphere(0.25), [4.0, 4.0], &Config::default(), observer).expect("finite");

    assert_eq!(solution.status, Status::StoppedByObserver);
    assert_eq!(solution.iters, 2);
    assert_eq!(solution.x, [1.0, 1.0]);
}
