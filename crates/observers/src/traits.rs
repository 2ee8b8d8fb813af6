//! Capability traits for cross-solver observers.
//!
//! These traits abstract over event types so that observers can be written
//! once and reused by any run that reports its position.
//!
//! # Example
//!
//! ```rust
//! use rheo_core::Observer;
//! use rheo_observers::traits::HasStep;
//!
//! struct LastStep(usize);
//!
//! impl<E: HasStep, A> Observer<E, A> for LastStep {
//!     fn observe(&mut self, event: &E) -> Option<A> {
//!         self.0 = event.step();
//!         None
//!     }
//! }
//! ```

/// An event that knows its position within a fixed-length run.
pub trait HasStep {
    /// Returns the step number, where 0 is the initial state.
    fn step(&self) -> usize;

    /// Returns the total number of steps in the run.
    fn total(&self) -> usize;
}
