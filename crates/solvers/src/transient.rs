//! Fixed-step solvers for transient problems.

pub mod heun;
