//! Classical unconstrained minimizers for closed-form objectives.
//!
//! Every solver is a pure function of an objective (plus any analytic
//! derivatives), initial data and a validated config. Each returns the best
//! point found together with a status and an ordered trace of visited points,
//! and reports its progress to an optional [`Observer`].
//!
//! See [`optimization`] for the available solvers.
//!
//! [`Observer`]: descent_core::Observer

pub mod optimization;
