//! Progress reporting at every tenth of a run.
//!
//! A milestone is reported whenever a step moves the run into a new tenth of
//! its total length. When the total is a multiple of ten this happens exactly
//! at 10%, 20%, ..., 100%. Otherwise the milestone is reported on the first
//! step past each boundary, using the percentage actually reached, and a step
//! that crosses two boundaries at once reports only once. The final step
//! always reports 100%.

use rheo_core::Observer;

use crate::traits::HasStep;

/// Returns the percentage to report after `step` of `total`, if any.
///
/// Step 0 (the initial state) and steps beyond `total` never report.
///
/// ```
/// use rheo_observers::progress::milestone;
///
/// assert_eq!(milestone(10, 100), Some(10));
/// assert_eq!(milestone(11, 100), None);
/// assert_eq!(milestone(3, 7), Some(42));
/// ```
#[must_use]
pub fn milestone(step: usize, total: usize) -> Option<u32> {
    if step == 0 || step > total {
        return None;
    }

    let tenth = |n: usize| n * 10 / total;
    if tenth(step) > tenth(step - 1) {
        u32::try_from(step * 100 / total).ok()
    } else {
        None
    }
}

/// An observer that logs completion milestones through `tracing`.
///
/// Works with any event implementing [`HasStep`] and never returns an action.
#[derive(Debug, Default)]
pub struct ProgressObserver {
    last: Option<u32>,
}

impl ProgressObserver {
    /// Creates an observer that has not reported anything yet.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// The most recently reported percentage.
    #[must_use]
    pub fn last_reported(&self) -> Option<u32> {
        self.last
    }
}

impl<E: HasStep, A> Observer<E, A> for ProgressObserver {
    fn observe(&mut self, event: &E) -> Option<A> {
        if let Some(percent) = milestone(event.step(), event.total()) {
            tracing::info!(step = event.step(), "{percent}% completed");
            self.last = Some(percent);
        }
        None
    }
}

impl<E: HasStep, A> Observer<E, A> for &mut ProgressObserver {
    fn observe(&mut self, event: &E) -> Option<A> {
        (*self).observe(event)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Tick {
        step: usize,
        total: usize,
    }

    impl HasStep for Tick {
        fn step(&self) -> usize {
            self.step
        }

        fn total(&self) -> usize {
            self.total
        }
    }

    fn reported(total: usize) -> Vec<(usize, u32)> {
        (0..=total)
            .filter_map(|step| milestone(step, total).map(|p| (step, p)))
            .collect()
    }

    #[test]
    fn multiple_of_ten_reports_exact_deciles() {
        let expected: Vec<_> = (1..=10).map(|k| (k * 10, k as u32 * 10)).collect();
        assert_eq!(reported(100), expected);
    }

    #[test]
    fn short_run_reports_every_step() {
        assert_eq!(
            reported(7),
            vec![(1, 14), (2, 28), (3, 42), (4, 57), (5, 71), (6, 85), (7, 100)]
        );
    }

    #[test]
    fn uneven_run_reports_first_step_past_each_boundary() {
        let steps: Vec<_> = reported(15).into_iter().map(|(s, _)| s).collect();
        assert_eq!(steps, vec![2, 3, 5, 6, 8, 9, 11, 12, 14, 15]);
        assert_eq!(milestone(15, 15), Some(100));
    }

    #[test]
    fn initial_state_and_overrun_never_report() {
        assert_eq!(milestone(0, 10), None);
        assert_eq!(milestone(11, 10), None);
        assert_eq!(milestone(0, 0), None);
    }

    #[test]
    fn observer_tracks_last_milestone_and_never_acts() {
        let mut obs = ProgressObserver::new();

        for step in 0..=25 {
            let action: Option<()> = obs.observe(&Tick { step, total: 50 });
            assert!(action.is_none());
        }

        assert_eq!(obs.last_reported(), Some(50));
    }
}
