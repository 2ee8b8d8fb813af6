//! Stress start-up of viscoelastic fluids under homogeneous flow.
//!
//! A fluid at rest is suddenly subjected to a constant velocity gradient `L`
//! and the extra stress `T` evolves according to
//!
//! ```text
//! dT/dt = L·T + T·Lᵗ − (T + f(T)) / λ + G·(L + Lᵗ)
//! ```
//!
//! where `λ` is the relaxation time, `G` the shear modulus and `f` the
//! nonlinear term of the chosen [`ConstitutiveModel`]. The equation is
//! integrated with Heun's method from [`rheo_solvers::transient::heun`].
//!
//! # Example
//!
//! ```
//! use rheo_viscoelastic::Config;
//!
//! let config = Config::from_json_str(
//!     r#"{ "modelnr": 1, "lamb": 1.0, "Gmod": 1.0, "flownr": 1,
//!          "rate": 1.0, "deltat": 0.01, "nsteps": 100 }"#,
//! )
//! .unwrap();
//!
//! let series = rheo_viscoelastic::run(&config).unwrap();
//! assert_eq!(series.len(), 100);
//! ```

pub mod analytic;

mod config;
mod error;
mod flow;
mod model;
mod problem;
mod rhs;
mod series;
mod simulation;
mod tensor;

pub use config::{Config, ConfigError};
pub use error::Error;
pub use flow::{Flow, FlowKind};
pub use model::{ConstitutiveModel, ModelKind};
pub use problem::{Stress, StressInput, StressProblem, StressRate};
pub use rhs::{StressModel, stress_rate};
pub use series::{Sample, StepEvent, TimeSeries};
pub use simulation::{Outcome, Simulation, run};
pub use tensor::{Tensor3, frobenius_norm};
