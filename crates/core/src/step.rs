/// A trait for types that can be stepped using their derivative.
///
/// Implementing this trait lets generic ODE solvers advance the type via
/// `state + derivative * delta`, where the derivative is taken with respect
/// to `Delta`.
///
/// `Delta` can be a plain scalar like `f64` or a dimensioned type like
/// `uom::si::f64::Time` for compile-time unit checking.
pub trait StepIntegrable<Delta> {
    /// The derivative of the type with respect to `Delta`.
    type Derivative;

    /// Returns the value after stepping with a derivative and step size.
    #[must_use]
    fn step(&self, derivative: Self::Derivative, delta: Delta) -> Self;
}

/// Type alias for the derivative of a `StepIntegrable` type.
pub type DerivativeOf<T, Delta> = <T as StepIntegrable<Delta>>::Derivative;

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;
    use uom::si::{
        f64::{Frequency, Time},
        frequency::hertz,
        time::second,
    };

    /// Relaxing scalar quantity, e.g. a single stress component.
    #[derive(Debug, Clone, Copy)]
    struct Component(f64);

    /// Rate of change of a component, per second.
    struct ComponentRate(Frequency);

    impl StepIntegrable<Time> for Component {
        type Derivative = ComponentRate;

        fn step(&self, derivative: ComponentRate, delta: Time) -> Self {
            Component(self.0 + derivative.0.get::<hertz>() * delta.get::<second>())
        }
    }

    #[derive(Debug, PartialEq)]
    struct Pair([f64; 2]);

    impl StepIntegrable<f64> for Pair {
        type Derivative = [f64; 2];

        fn step(&self, derivative: [f64; 2], delta: f64) -> Self {
            Pair([
                self.0[0] + derivative[0] * delta,
                self.0[1] + derivative[1] * delta,
            ])
        }
    }

    #[test]
    fn step_with_dimensioned_delta() {
        let start = Component(1.0);
        let rate = ComponentRate(Frequency::new::<hertz>(-0.5));

        let next = start.step(rate, Time::new::<second>(0.2));

        assert_relative_eq!(next.0, 0.9);
    }

    #[test]
    fn step_with_scalar_delta() {
        let next = Pair([0.0, 4.0]).step([1.0, -2.0], 0.5);

        assert_eq!(next, Pair([0.5, 3.0]));
    }
}
