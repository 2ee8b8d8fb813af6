use rheo_core::Snapshot;

/// Indicates how the solver terminated.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Status {
    /// Completed all requested steps.
    Complete,

    /// Stopped early due to an observer action.
    StoppedByObserver,
}

/// Which accepted snapshots a solver run keeps in [`Solution::history`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Retain {
    /// Keep every snapshot, starting with the initial state.
    #[default]
    All,

    /// Keep only the most recent snapshot.
    Last,
}

/// The result of a Heun integration.
#[derive(Debug, Clone)]
pub struct Solution<I, O> {
    /// How the solver terminated.
    pub status: Status,

    /// Accepted snapshots, starting with the initial state when run with
    /// [`Retain::All`], or only the final snapshot with [`Retain::Last`].
    pub history: Vec<Snapshot<I, O>>,

    /// Number of integration steps completed.
    pub steps: usize,
}

impl<I, O> Solution<I, O> {
    /// Returns the snapshots produced by integration steps, skipping the
    /// initial state.
    ///
    /// Only meaningful for runs that used [`Retain::All`].
    pub fn integrated(&self) -> &[Snapshot<I, O>] {
        self.history.get(1..).unwrap_or_default()
    }

    /// Returns the last accepted snapshot.
    pub fn last(&self) -> Option<&Snapshot<I, O>> {
        self.history.last()
    }
}
