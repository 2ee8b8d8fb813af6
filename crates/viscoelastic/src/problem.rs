use std::{
    convert::Infallible,
    ops::{Add, Mul},
};

use rheo_core::{OdeProblem, StepIntegrable};
use uom::si::{f64::Time, time::second};

use crate::tensor::{self, Tensor3};

/// The extra stress tensor, in pascals.
#[derive(Debug, Clone, PartialEq)]
pub struct Stress(pub Tensor3);

/// The rate of change of the extra stress, in pascals per second.
#[derive(Debug, Clone, PartialEq)]
pub struct StressRate(pub Tensor3);

impl Stress {
    /// The stress-free state.
    #[must_use]
    pub fn zero() -> Self {
        Self(tensor::zeros())
    }
}

impl Add for StressRate {
    type Output = StressRate;

    fn add(self, rhs: StressRate) -> StressRate {
        StressRate(self.0 + rhs.0)
    }
}

impl Mul<f64> for StressRate {
    type Output = StressRate;

    fn mul(self, rhs: f64) -> StressRate {
        StressRate(self.0 * rhs)
    }
}

impl StepIntegrable<Time> for Stress {
    type Derivative = StressRate;

    fn step(&self, derivative: StressRate, delta: Time) -> Self {
        Stress(&self.0 + &(derivative.0 * delta.get::<second>()))
    }
}

/// Model input: the stress state and the time elapsed since flow start-up.
#[derive(Debug, Clone, PartialEq)]
pub struct StressInput {
    pub time: Time,
    pub stress: Stress,
}

impl StressInput {
    /// Zero stress at time zero, the state before the flow is switched on.
    #[must_use]
    pub fn at_rest() -> Self {
        Self {
            time: Time::new::<second>(0.0),
            stress: Stress::zero(),
        }
    }
}

/// Integrates the stress carried by [`StressInput`] using the rate returned
/// by [`StressModel`](crate::StressModel).
#[derive(Debug, Clone, Copy, Default)]
pub struct StressProblem;

impl OdeProblem for StressProblem {
    type Input = StressInput;
    type Output = StressRate;
    type Delta = Time;
    type State = Stress;
    type Error = Infallible;

    fn state(&self, input: &StressInput) -> Result<Stress, Infallible> {
        Ok(input.stress.clone())
    }

    fn derivative(&self, _input: &StressInput, output: &StressRate) -> Result<StressRate, Infallible> {
        Ok(output.clone())
    }

    fn build_input(
        &self,
        base: &StressInput,
        state: &Stress,
        delta: &Time,
    ) -> Result<StressInput, Infallible> {
        Ok(StressInput {
            time: base.time + *delta,
            stress: state.clone(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;
    use ndarray::{Array2, array};
    use uom::si::time::millisecond;

    #[test]
    fn stress_steps_along_its_rate() {
        let stress = Stress(Array2::eye(3));
        let rate = StressRate(array![[0.0, 10.0, 0.0], [10.0, 0.0, 0.0], [0.0, 0.0, -10.0]]);

        let next = stress.step(rate, Time::new::<millisecond>(100.0));

        let expected = array![[1.0, 1.0, 0.0], [1.0, 1.0, 0.0], [0.0, 0.0, 0.0]];
        for (a, e) in next.0.iter().zip(expected.iter()) {
            assert_relative_eq!(a, e, epsilon = 1e-12);
        }
    }

    #[test]
    fn rates_average_elementwise() {
        let k1 = StressRate(Array2::<f64>::eye(3) * 2.0);
        let k2 = StressRate(Array2::<f64>::eye(3) * 4.0);

        assert_eq!((k1 + k2) * 0.5, StressRate(Array2::<f64>::eye(3) * 3.0));
    }

    #[test]
    fn build_input_advances_time_and_keeps_state() {
        let base = StressInput::at_rest();
        let state = Stress(Array2::eye(3));

        let next = StressProblem
            .build_input(&base, &state, &Time::new::<second>(0.5))
            .unwrap();

        assert_relative_eq!(next.time.get::<second>(), 0.5);
        assert_eq!(next.stress, state);
        assert_eq!(StressProblem.state(&next).unwrap(), state);
    }
}
