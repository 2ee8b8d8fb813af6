//! Closed-form reference solutions.

use ndarray::array;
use uom::si::{
    f64::Time,
    frequency::hertz,
    pressure::pascal,
    time::second,
};

use crate::{ConstitutiveModel, Flow, FlowKind, Tensor3, frobenius_norm};

/// Stress growth of a Maxwell fluid in steady shear started from rest.
///
/// With shear rate `γ̇`, relaxation time `λ` and modulus `G`, the nonzero
/// components are
///
/// ```text
/// T01 = T10 = Gλγ̇ (1 − e^(−t/λ))
/// T00       = 2Gλ²γ̇² (1 − e^(−t/λ)) − 2Gλγ̇² t e^(−t/λ)
/// ```
///
/// and the stress approaches `T01 = Gλγ̇`, `T00 = 2Gλ²γ̇²` as `t → ∞`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MaxwellShear {
    /// Relaxation time, in seconds.
    pub lambda: f64,
    /// Shear modulus, in pascals.
    pub modulus: f64,
    /// Shear rate, in s⁻¹.
    pub shear_rate: f64,
}

impl MaxwellShear {
    /// Returns the reference solution for a Maxwell model in shear flow, or
    /// `None` for any other model or flow.
    #[must_use]
    pub fn from_model(model: &ConstitutiveModel, flow: &Flow) -> Option<Self> {
        match (model, flow.kind()) {
            (ConstitutiveModel::Maxwell { .. }, FlowKind::Shear) => Some(Self {
                lambda: model.relaxation_time().get::<second>(),
                modulus: model.modulus().get::<pascal>(),
                shear_rate: flow.rate().get::<hertz>(),
            }),
            _ => None,
        }
    }

    /// The stress tensor at `time` after start-up.
    #[must_use]
    pub fn stress(&self, time: Time) -> Tensor3 {
        let Self {
            lambda,
            modulus: g,
            shear_rate: rate,
        } = *self;
        let t = time.get::<second>();
        let decay = (-t / lambda).exp();

        let shear = g * lambda * rate * (1.0 - decay);
        let normal = 2.0 * g * lambda * rate * rate * (lambda * (1.0 - decay) - t * decay);

        array![
            [normal, shear, 0.0],
            [shear, 0.0, 0.0],
            [0.0, 0.0, 0.0]
        ]
    }

    /// The Frobenius norm of the stress at `time`.
    #[must_use]
    pub fn stress_norm(&self, time: Time) -> f64 {
        frobenius_norm(&self.stress(time))
    }

    /// The limit of the stress norm for long times.
    #[must_use]
    pub fn steady_state_norm(&self) -> f64 {
        let shear = self.modulus * self.lambda * self.shear_rate;
        let normal = 2.0 * self.lambda * self.shear_rate * shear;
        (normal * normal + 2.0 * shear * shear).sqrt()
    }
}
