//! Core traits and types for the rheo workspace.
//!
//! This crate defines the shared abstractions that solvers, observers, and
//! material models build on:
//!
//! - [`Model`] — a callable that maps a typed input to a typed output
//! - [`Snapshot`] — a captured input/output pair from a model call
//! - [`Observer`] — receives solver events and optionally returns control actions
//! - [`OdeProblem`] — adapts model inputs and outputs to an integrable state
//! - [`StepIntegrable`] — a state that can be stepped by its derivative
//! - [`TimeIncrement`] — a strictly positive time step

mod increment;
mod model;
mod observer;
mod problems;
mod step;

pub use increment::{TimeIncrement, TimeIncrementError};
pub use observer::Observer;
pub use problems::OdeProblem;
pub use step::{DerivativeOf, StepIntegrable};
pub use {model::Model, model::Snapshot};
