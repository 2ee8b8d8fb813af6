//! Numerical solvers for rheo models.
//!
//! - [`transient::heun`] — explicit second-order Heun integration of an
//!   [`OdeProblem`](rheo_core::OdeProblem)

pub mod transient;
