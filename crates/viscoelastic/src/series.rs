use rheo_observers::traits::HasStep;
use serde::{Deserialize, Serialize};

/// The recorded outcome of one integration step.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Sample {
    /// Completed step number, starting at 1.
    pub step: usize,
    /// Accumulated strain `step * rate * dt`.
    pub strain: f64,
    /// Frobenius norm of the stress after the step, in pascals.
    pub stress_norm: f64,
}

/// Event handed to simulation observers after every step.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StepEvent {
    pub sample: Sample,
    /// Total number of steps in the run.
    pub total: usize,
}

impl HasStep for StepEvent {
    fn step(&self) -> usize {
        self.sample.step
    }

    fn total(&self) -> usize {
        self.total
    }
}

/// Plots the stress norm against strain.
#[cfg(feature = "plot")]
impl rheo_observers::Plottable<1> for StepEvent {
    fn x(&self) -> Option<f64> {
        Some(self.sample.strain)
    }

    fn traces(&self) -> [Option<f64>; 1] {
        [Some(self.sample.stress_norm)]
    }
}

/// Strain and stress-norm history, one [`Sample`] per step in temporal order.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TimeSeries {
    samples: Vec<Sample>,
}

impl TimeSeries {
    pub(crate) fn with_capacity(capacity: usize) -> Self {
        Self {
            samples: Vec::with_capacity(capacity),
        }
    }

    pub(crate) fn push(&mut self, sample: Sample) {
        self.samples.push(sample);
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.samples.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }

    #[must_use]
    pub fn samples(&self) -> &[Sample] {
        &self.samples
    }

    #[must_use]
    pub fn last(&self) -> Option<&Sample> {
        self.samples.last()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Sample> {
        self.samples.iter()
    }

    pub fn strains(&self) -> impl Iterator<Item = f64> + '_ {
        self.samples.iter().map(|s| s.strain)
    }

    pub fn stress_norms(&self) -> impl Iterator<Item = f64> + '_ {
        self.samples.iter().map(|s| s.stress_norm)
    }

    /// Returns `[strain, stress_norm]` pairs, ready for plotting.
    #[must_use]
    pub fn points(&self) -> Vec<[f64; 2]> {
        self.samples
            .iter()
            .map(|s| [s.strain, s.stress_norm])
            .collect()
    }
}

impl<'a> IntoIterator for &'a TimeSeries {
    type Item = &'a Sample;
    type IntoIter = std::slice::Iter<'a, Sample>;

    fn into_iter(self) -> Self::IntoIter {
        self.samples.iter()
    }
}
