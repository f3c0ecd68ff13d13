//! Core traits and types for the descent solvers.
//!
//! This crate defines the shared abstractions that solvers and observers
//! build on:
//!
//! - [`Objective`], [`Gradient`], [`Hessian`] — closed-form functions and
//!   their analytic derivatives, evaluated at fixed-length points `[f64; N]`
//! - [`Scalar`], [`Smooth`], [`GuardNearZero`] — adapters that turn plain
//!   closures into objectives
//! - [`Observer`] — receives solver events and optionally returns control actions
//! - [`linalg`] — dot products, norms and dense linear solves for small `N`
//! - [`functions`] — reference objectives with known minimizers

mod objective;
mod observer;

pub mod functions;
pub mod linalg;

pub use objective::{Gradient, GuardNearZero, Hessian, Objective, Scalar, Smooth};
pub use observer::Observer;
