//! Reusable observers for rheo solvers.
//!
//! This crate provides [`Observer`] implementations and capability traits that
//! work across solvers and the event types built on top of them.
//!
//! # Modules
//!
//! - [`traits`] — Capability traits for cross-solver observers ([`HasStep`])
//! - [`progress`] — [`ProgressObserver`], which logs completion milestones
//!
//! # Features
//!
//! - `plot` — Enables [`PlotObserver`] for visualizing results via egui.
//!   This feature adds dependencies on `eframe` and `egui_plot`.
//!
//! [`Observer`]: rheo_core::Observer
//! [`HasStep`]: traits::HasStep

pub mod progress;
pub mod traits;

#[cfg(feature = "plot")]
mod plot;

pub use progress::ProgressObserver;

#[cfg(feature = "plot")]
pub use plot::{PlotObserver, Plottable, ShowConfig};
