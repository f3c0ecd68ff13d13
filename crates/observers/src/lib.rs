//! Reusable observers for the descent solvers.
//!
//! This crate provides [`Observer`] implementations and capability traits that
//! work across every solver in [`descent_solvers::optimization`].
//!
//! # Modules
//!
//! - [`traits`] — Capability traits for cross-solver observers
//!   ([`HasIteration`], [`HasObjective`], [`CanStopEarly`])
//! - [`ConsoleLog`] — Renders each event as a line of an append-only text log
//!
//! [`Observer`]: descent_core::Observer
//! [`HasIteration`]: traits::HasIteration
//! [`HasObjective`]: traits::HasObjective
//! [`CanStopEarly`]: traits::CanStopEarly

pub mod traits;

mod console;

pub use console::ConsoleLog;
