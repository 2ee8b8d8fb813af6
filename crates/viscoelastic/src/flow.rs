use ndarray::array;
use uom::si::{
    f64::{Frequency, Time},
    frequency::hertz,
    time::second,
};

use crate::{Error, tensor::Tensor3};

/// Selects a homogeneous flow by its configuration number.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FlowKind {
    /// Simple shear, number 1.
    Shear,
    /// Uniaxial extension, number 2.
    Extensional,
}

impl FlowKind {
    /// The configuration number of this kind.
    #[must_use]
    pub fn code(self) -> i64 {
        match self {
            Self::Shear => 1,
            Self::Extensional => 2,
        }
    }
}

impl TryFrom<i64> for FlowKind {
    type Error = Error;

    fn try_from(code: i64) -> Result<Self, Self::Error> {
        match code {
            1 => Ok(Self::Shear),
            2 => Ok(Self::Extensional),
            other => Err(Error::InvalidFlowKind(other)),
        }
    }
}

/// A homogeneous, time-invariant flow with a constant deformation rate.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Flow {
    kind: FlowKind,
    rate: Frequency,
}

impl Flow {
    #[must_use]
    pub fn new(kind: FlowKind, rate: Frequency) -> Self {
        Self { kind, rate }
    }

    /// Builds a flow from its configuration number.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidFlowKind`] for an unknown number.
    pub fn from_code(code: i64, rate: Frequency) -> Result<Self, Error> {
        Ok(Self::new(FlowKind::try_from(code)?, rate))
    }

    #[must_use]
    pub fn shear(rate: Frequency) -> Self {
        Self::new(FlowKind::Shear, rate)
    }

    #[must_use]
    pub fn extensional(rate: Frequency) -> Self {
        Self::new(FlowKind::Extensional, rate)
    }

    #[must_use]
    pub fn kind(&self) -> FlowKind {
        self.kind
    }

    /// The shear rate or the extension rate, depending on the kind.
    #[must_use]
    pub fn rate(&self) -> Frequency {
        self.rate
    }

    /// Returns the velocity gradient `Lᵢⱼ = ∂vᵢ/∂xⱼ` in s⁻¹.
    ///
    /// Shear flows along x with a gradient in y; extension stretches along x
    /// and contracts equally in y and z so the flow stays incompressible.
    #[must_use]
    pub fn velocity_gradient(&self) -> Tensor3 {
        let r = self.rate.get::<hertz>();
        match self.kind {
            FlowKind::Shear => array![[0.0, r, 0.0], [0.0, 0.0, 0.0], [0.0, 0.0, 0.0]],
            FlowKind::Extensional => {
                array![[r, 0.0, 0.0], [0.0, -r / 2.0, 0.0], [0.0, 0.0, -r / 2.0]]
            }
        }
    }

    /// Returns the accumulated strain `rate * time` after `time` of flow.
    #[must_use]
    pub fn strain_at(&self, time: Time) -> f64 {
        self.rate.get::<hertz>() * time.get::<second>()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;

    fn per_second(value: f64) -> Frequency {
        Frequency::new::<hertz>(value)
    }

    #[test]
    fn shear_gradient() {
        let gradient = Flow::shear(per_second(2.0)).velocity_gradient();

        assert_eq!(
            gradient,
            array![[0.0, 2.0, 0.0], [0.0, 0.0, 0.0], [0.0, 0.0, 0.0]]
        );
    }

    #[test]
    fn extensional_gradient_is_traceless() {
        let gradient = Flow::extensional(per_second(2.0)).velocity_gradient();

        assert_eq!(
            gradient,
            array![[2.0, 0.0, 0.0], [0.0, -1.0, 0.0], [0.0, 0.0, -1.0]]
        );
        assert_relative_eq!(gradient.diag().sum(), 0.0);
    }

    #[test]
    fn from_code_selects_kind() {
        let flow = Flow::from_code(2, per_second(0.5)).unwrap();

        assert_eq!(flow.kind(), FlowKind::Extensional);
        assert_eq!(flow.kind().code(), 2);
        assert_relative_eq!(flow.rate().get::<hertz>(), 0.5);
    }

    #[test]
    fn unknown_code_is_rejected() {
        assert!(matches!(
            Flow::from_code(3, per_second(1.0)),
            Err(Error::InvalidFlowKind(3))
        ));
    }

    #[test]
    fn strain_grows_linearly_with_time() {
        let flow = Flow::shear(per_second(4.0));

        assert_relative_eq!(flow.strain_at(Time::new::<second>(0.25)), 1.0);
        assert_relative_eq!(flow.strain_at(Time::new::<second>(0.0)), 0.0);
    }
}
