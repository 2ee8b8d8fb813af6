use std::convert::Infallible;

use rheo_core::{Observer, TimeIncrement};
use rheo_observers::ProgressObserver;
use rheo_solvers::transient::heun;
use tracing::{debug, info};
use uom::si::frequency::hertz;

use crate::{
    Config, ConstitutiveModel, Error, Flow, Sample, StepEvent, StressInput, StressModel,
    StressProblem, StressRate, TimeSeries,
    tensor::{Tensor3, frobenius_norm},
};

/// Runs the simulation described by `config`, logging progress.
///
/// # Errors
///
/// Returns an error if the configuration is invalid or integration fails.
pub fn run(config: &Config) -> Result<TimeSeries, Error> {
    config.build()?.run()
}

/// Everything produced by a completed run.
#[derive(Debug, Clone, PartialEq)]
pub struct Outcome {
    pub series: TimeSeries,
    /// Stress tensor after the last step.
    pub final_stress: Tensor3,
}

/// A validated start-up flow simulation.
///
/// Starting from a stress-free material, the stress is advanced `steps` times
/// by `dt` with Heun's method under the constant velocity gradient of `flow`.
#[derive(Debug, Clone)]
pub struct Simulation {
    model: StressModel,
    flow: Flow,
    dt: TimeIncrement,
    steps: usize,
}

impl Simulation {
    /// Creates a simulation.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidConfiguration`] if `steps` is zero or the
    /// flow rate is not finite.
    pub fn new(
        model: ConstitutiveModel,
        flow: Flow,
        dt: TimeIncrement,
        steps: usize,
    ) -> Result<Self, Error> {
        if steps == 0 {
            return Err(Error::invalid("number of steps must be positive"));
        }
        let rate = flow.rate().get::<hertz>();
        if !rate.is_finite() {
            return Err(Error::invalid(format!("rate must be finite, got {rate}")));
        }

        Ok(Self {
            model: StressModel::new(model, &flow),
            flow,
            dt,
            steps,
        })
    }

    #[must_use]
    pub fn model(&self) -> &ConstitutiveModel {
        self.model.constitutive()
    }

    #[must_use]
    pub fn flow(&self) -> &Flow {
        &self.flow
    }

    #[must_use]
    pub fn velocity_gradient(&self) -> &Tensor3 {
        self.model.velocity_gradient()
    }

    #[must_use]
    pub fn dt(&self) -> TimeIncrement {
        self.dt
    }

    #[must_use]
    pub fn steps(&self) -> usize {
        self.steps
    }

    /// Runs the simulation, logging progress at every tenth of the run.
    ///
    /// # Errors
    ///
    /// Returns an error if integration fails.
    pub fn run(&self) -> Result<TimeSeries, Error> {
        self.run_observed(ProgressObserver::new())
    }

    /// Runs the simulation, passing a [`StepEvent`] to `observer` after
    /// every step.
    ///
    /// # Errors
    ///
    /// Returns an error if integration fails.
    pub fn run_observed<Obs>(&self, observer: Obs) -> Result<TimeSeries, Error>
    where
        Obs: Observer<StepEvent, Infallible>,
    {
        self.solve(observer).map(|outcome| outcome.series)
    }

    /// Runs the simulation and returns the series together with the final
    /// stress tensor.
    ///
    /// Observers use [`Infallible`] as their action type, so they can watch
    /// the run but never cut it short: the series always holds exactly
    /// [`steps`](Self::steps) samples.
    ///
    /// # Errors
    ///
    /// Returns an error if integration fails. No partial series is returned.
    pub fn solve<Obs>(&self, mut observer: Obs) -> Result<Outcome, Error>
    where
        Obs: Observer<StepEvent, Infallible>,
    {
        info!(model = %self.model(), "starting simulation");
        debug!(gradient = ?self.velocity_gradient(), "velocity gradient");

        let rate = self.flow.rate().get::<hertz>();
        let dt = self.dt.seconds();
        let total = self.steps;
        let mut series = TimeSeries::with_capacity(total);

        let solution = heun::solve_retaining(
            &self.model,
            &StressProblem,
            StressInput::at_rest(),
            self.dt.into_inner(),
            total,
            heun::Retain::Last,
            |event: &heun::Event<StressInput, StressRate>| -> Option<heun::Action> {
                if event.step == 0 {
                    return None;
                }

                let sample = Sample {
                    step: event.step,
                    strain: event.step as f64 * rate * dt,
                    stress_norm: frobenius_norm(&event.snapshot.input.stress.0),
                };
                debug!(
                    step = sample.step,
                    "strain: {:.3}, stress: {:.3}",
                    sample.strain,
                    sample.stress_norm
                );
                series.push(sample);

                if let Some(never) = observer.observe(&StepEvent { sample, total }) {
                    match never {}
                }
                None
            },
        )?;

        let final_stress = solution
            .last()
            .map_or_else(crate::tensor::zeros, |snapshot| snapshot.input.stress.0.clone());

        info!(steps = solution.steps, "simulation complete");

        Ok(Outcome {
            series,
            final_stress,
        })
    }
}
