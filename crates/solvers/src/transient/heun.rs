//! Heun solver for ODE problems.
//!
//! Heun's method is the explicit trapezoidal Runge-Kutta scheme of order two.
//! Each step takes an Euler predictor and then corrects it with the average of
//! the slopes at both ends of the interval:
//!
//! ```text
//! k1          = f(state_n)
//! predicted   = state_n + k1 * dt
//! k2          = f(predicted)
//! state_{n+1} = state_n + (k1 + k2) / 2 * dt
//! ```
//!
//! The step size is fixed and the solver runs exactly the requested number of
//! steps unless an observer stops it. Stability for stiff problems is the
//! caller's responsibility through the choice of `dt`.
//!
//! # Example
//!
//! ```ignore
//! use rheo_solvers::transient::heun;
//!
//! let solution = heun::solve_unobserved(&model, &problem, initial_input, dt, steps)?;
//!
//! for snapshot in solution.integrated() {
//!     println!("{:?} -> {:?}", snapshot.input, snapshot.output);
//! }
//! ```

mod action;
mod error;
mod event;
mod solution;

pub use action::Action;
pub use error::Error;
pub use event::Event;
pub use solution::{Retain, Solution, Status};

use std::ops::{Add, Mul};

use rheo_core::{DerivativeOf, Model, Observer, OdeProblem, Snapshot, StepIntegrable};

/// Integrates an ODE problem using Heun's method.
///
/// # Algorithm
///
/// 1. Call the model with the initial input to get the initial snapshot.
/// 2. For each step:
///    - Extract the state and the slope `k1` from the current snapshot.
///    - Build the predictor input from `state + k1 * dt` and call the model.
///    - Compute the slope `k2` at the predicted state.
///    - Step the state with the averaged slope `(k1 + k2) * 0.5`.
///    - Build and finalize the next input, then call the model on it.
///    - Emit an [`Event`] to the observer and stop if it asks to.
/// 3. Return the solution with the full history.
///
/// Use [`solve_retaining`] with [`Retain::Last`] to keep only the final
/// snapshot for long runs.
///
/// The model output of an accepted step doubles as the `k1` of the next
/// step, so each step costs exactly two model calls.
///
/// # Errors
///
/// Returns an error if the model or problem returns an error at any point.
/// No partial solution is returned in that case.
pub fn solve<M, P, Obs>(
    model: &M,
    problem: &P,
    initial: M::Input,
    dt: P::Delta,
    steps: usize,
    observer: Obs,
) -> Result<Solution<M::Input, M::Output>, Error>
where
    M: Model,
    M::Input: Clone,
    M::Output: Clone,
    P: OdeProblem<Input = M::Input, Output = M::Output>,
    P::Delta: Clone,
    DerivativeOf<P::State, P::Delta>: Clone
        + Add<Output = DerivativeOf<P::State, P::Delta>>
        + Mul<f64, Output = DerivativeOf<P::State, P::Delta>>,
    Obs: Observer<Event<M::Input, M::Output>, Action>,
{
    solve_retaining(model, problem, initial, dt, steps, Retain::All, observer)
}

/// Integrates an ODE problem using Heun's method, keeping the snapshots
/// selected by `retain`.
///
/// Observers still see every step; `retain` only controls what ends up in
/// [`Solution::history`].
///
/// # Errors
///
/// Returns an error if the model or problem returns an error at any point.
pub fn solve_retaining<M, P, Obs>(
    model: &M,
    problem: &P,
    initial: M::Input,
    dt: P::Delta,
    steps: usize,
    retain: Retain,
    mut observer: Obs,
) -> Result<Solution<M::Input, M::Output>, Error>
where
    M: Model,
    M::Input: Clone,
    M::Output: Clone,
    P: OdeProblem<Input = M::Input, Output = M::Output>,
    P::Delta: Clone,
    DerivativeOf<P::State, P::Delta>: Clone
        + Add<Output = DerivativeOf<P::State, P::Delta>>
        + Mul<f64, Output = DerivativeOf<P::State, P::Delta>>,
    Obs: Observer<Event<M::Input, M::Output>, Action>,
{
    let initial_output = model.call(&initial).map_err(Error::model)?;
    let initial_snapshot = Snapshot::new(initial, initial_output);

    let mut history = match retain {
        Retain::All => Vec::with_capacity(steps + 1),
        Retain::Last => Vec::with_capacity(1),
    };
    history.push(initial_snapshot.clone());

    let event = Event {
        step: 0,
        total: steps,
        snapshot: initial_snapshot.clone(),
    };
    if let Some(Action::StopEarly) = observer.observe(&event) {
        return Ok(Solution {
            status: Status::StoppedByObserver,
            history,
            steps: 0,
        });
    }

    let mut current = initial_snapshot;

    for step in 1..=steps {
        let state = problem.state(&current.input).map_err(Error::problem)?;

        // Predictor.
        let k1 = problem
            .derivative(&current.input, &current.output)
            .map_err(Error::problem)?;
        let predicted_state = state.step(k1.clone(), dt.clone());
        let predicted_input = problem
            .build_input(&current.input, &predicted_state, &dt)
            .map_err(Error::problem)?;
        let predicted_output = model.call(&predicted_input).map_err(Error::model)?;

        // Corrector.
        let k2 = problem
            .derivative(&predicted_input, &predicted_output)
            .map_err(Error::problem)?;
        let next_state = state.step((k1 + k2) * 0.5, dt.clone());

        let next_input = problem
            .build_input(&current.input, &next_state, &dt)
            .map_err(Error::problem)?;
        let next_input = problem
            .finalize_step(next_input, &current.input, &current.output, &dt)
            .map_err(Error::problem)?;

        let next_output = model.call(&next_input).map_err(Error::model)?;
        let next_snapshot = Snapshot::new(next_input, next_output);

        if retain == Retain::Last {
            history.clear();
        }
        history.push(next_snapshot.clone());

        let event = Event {
            step,
            total: steps,
            snapshot: next_snapshot.clone(),
        };
        if let Some(Action::StopEarly) = observer.observe(&event) {
            return Ok(Solution {
                status: Status::StoppedByObserver,
                history,
                steps: step,
            });
        }

        current = next_snapshot;
    }

    Ok(Solution {
        status: Status::Complete,
        history,
        steps,
    })
}

/// Integrates an ODE problem using Heun's method without observation.
///
/// This is a convenience wrapper around [`solve`] that discards events.
///
/// # Errors
///
/// Returns an error if the model or problem returns an error at any point.
pub fn solve_unobserved<M, P>(
    model: &M,
    problem: &P,
    initial: M::Input,
    dt: P::Delta,
    steps: usize,
) -> Result<Solution<M::Input, M::Output>, Error>
where
    M: Model,
    M::Input: Clone,
    M::Output: Clone,
    P: OdeProblem<Input = M::Input, Output = M::Output>,
    P::Delta: Clone,
    DerivativeOf<P::State, P::Delta>: Clone
        + Add<Output = DerivativeOf<P::State, P::Delta>>
        + Mul<f64, Output = DerivativeOf<P::State, P::Delta>>,
{
    solve(model, problem, initial, dt, steps, ())
}
