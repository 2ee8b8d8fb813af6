use rheo_core::Model;
use uom::si::{pressure::pascal, time::second};

use crate::{
    ConstitutiveModel, Error, Flow, StressInput, StressRate,
    tensor::{self, Tensor3},
};

/// Evaluates the stress rate of the upper-convected constitutive equation:
///
/// ```text
/// dT/dt = L·T + T·Lᵗ − (T + f(T)) / λ + G·(L + Lᵗ)
/// ```
///
/// The function is pure and may be called concurrently for independent
/// `(L, T)` pairs.
///
/// # Errors
///
/// Returns [`Error::ShapeMismatch`] naming the offending operand if either
/// `velocity_gradient` or `stress` is not 3×3.
pub fn stress_rate(
    velocity_gradient: &Tensor3,
    model: &ConstitutiveModel,
    stress: &Tensor3,
) -> Result<Tensor3, Error> {
    tensor::check_shape("velocity gradient", velocity_gradient)?;
    tensor::check_shape("stress", stress)?;

    let l = velocity_gradient;
    let lt = l.t();
    let lambda = model.relaxation_time().get::<second>();
    let g = model.modulus().get::<pascal>();

    let convected = l.dot(stress) + stress.dot(&lt);
    let relaxation = (stress + &model.nonlinear_term(stress)?) / lambda;
    let driving = (l + &lt) * g;

    Ok(convected - relaxation + driving)
}

/// A [`ConstitutiveModel`] subjected to a fixed velocity gradient.
///
/// Calling the model maps the current stress to its rate of change. The
/// velocity gradient is computed once from the [`Flow`] and reused for every
/// call.
#[derive(Debug, Clone)]
pub struct StressModel {
    constitutive: ConstitutiveModel,
    velocity_gradient: Tensor3,
}

impl StressModel {
    #[must_use]
    pub fn new(constitutive: ConstitutiveModel, flow: &Flow) -> Self {
        Self {
            constitutive,
            velocity_gradient: flow.velocity_gradient(),
        }
    }

    #[must_use]
    pub fn constitutive(&self) -> &ConstitutiveModel {
        &self.constitutive
    }

    #[must_use]
    pub fn velocity_gradient(&self) -> &Tensor3 {
        &self.velocity_gradient
    }
}

impl Model for StressModel {
    type Input = StressInput;
    type Output = StressRate;
    type Error = Error;

    fn call(&self, input: &StressInput) -> Result<StressRate, Error> {
        stress_rate(&self.velocity_gradient, &self.constitutive, &input.stress.0).map(StressRate)
    }
}
