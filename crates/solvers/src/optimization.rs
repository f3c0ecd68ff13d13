//! Solvers for minimization problems.
//!
//! One-dimensional searches work on an [`Objective<1>`] (wrap a plain scalar
//! closure in [`Scalar`]). The multivariate solvers work on `[f64; N]` points
//! and need caller-supplied analytic derivatives.
//!
//! # Solvers
//!
//! - [`golden_section`] — derivative-free bracket shrinking for unimodal
//!   functions, with a tolerance mode and a fixed-iteration mode
//! - [`quadratic_fit`] — three-point parabolic interpolation
//! - [`cubic_fit`] — four-point cubic interpolation
//! - [`newton`] — full Newton steps with an exact Hessian
//! - [`fletcher_reeves`] — nonlinear conjugate gradient with periodic restarts
//!
//! # Shared conventions
//!
//! - Configs are validated on construction, so invalid tolerances or
//!   iteration budgets fail before any iteration runs.
//! - Numerical degeneracy (a vanishing denominator, a singular system) either
//!   aborts with an `Error` or, where partial progress is meaningful, ends the
//!   run with a dedicated `Status`.
//! - Running out of iterations is never an error. The solution carries a
//!   status that distinguishes it from convergence.
//! - Observers receive one event per iteration plus one when the run ends,
//!   and may answer [`Action::StopEarly`].
//!
//! [`Objective<1>`]: descent_core::Objective
//! [`Scalar`]: descent_core::Scalar

mod action;
mod config;
mod point;
mod settings;

pub use action::Action;
pub use config::{Config, ConfigError};
pub use point::Point;
pub use settings::{Settings, SettingsError};

pub mod cubic_fit;
pub mod fletcher_reeves;
pub mod golden_section;
pub mod newton;
pub mod quadratic_fit;
