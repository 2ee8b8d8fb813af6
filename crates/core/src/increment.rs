use std::{fmt, ops::Deref};

use thiserror::Error;
use uom::{
    Conversion,
    si::{f64::Time, time},
};

/// A unit-safe, strictly positive duration used to advance a simulation.
///
/// Wraps a [`Time`] while enforcing that the duration is finite and greater
/// than zero, so an explicit integrator can never be handed a degenerate or
/// backwards step.
///
/// ```
/// use rheo_core::TimeIncrement;
/// use uom::si::time::millisecond;
///
/// let dt = TimeIncrement::new::<millisecond>(10.0).unwrap();
/// assert!((dt.seconds() - 0.01).abs() < 1e-15);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd)]
pub struct TimeIncrement(Time);

/// Error returned when constructing an invalid [`TimeIncrement`].
#[derive(Debug, Clone, Copy, PartialEq, Error)]
pub enum TimeIncrementError {
    #[error("time increment must be finite and greater than zero, got {0} s")]
    NotPositive(f64),
}

impl TimeIncrement {
    /// Constructs a `TimeIncrement` from a numeric value and unit.
    ///
    /// # Errors
    ///
    /// Returns [`TimeIncrementError::NotPositive`] if `value` is zero,
    /// negative, or not finite.
    pub fn new<U>(value: f64) -> Result<Self, TimeIncrementError>
    where
        U: time::Unit + Conversion<f64, T = f64>,
    {
        Self::from_time(Time::new::<U>(value))
    }

    /// Constructs a `TimeIncrement` from an existing [`Time`] value.
    ///
    /// # Errors
    ///
    /// Returns [`TimeIncrementError::NotPositive`] if the time is zero,
    /// negative, or not finite.
    pub fn from_time(time: Time) -> Result<Self, TimeIncrementError> {
        let seconds = time.get::<time::second>();
        if seconds.is_finite() && seconds > 0.0 {
            Ok(Self(time))
        } else {
            Err(TimeIncrementError::NotPositive(seconds))
        }
    }

    /// Returns the increment in seconds.
    #[must_use]
    pub fn seconds(&self) -> f64 {
        self.0.get::<time::second>()
    }

    /// Consumes the `TimeIncrement` and returns the underlying [`Time`].
    #[must_use]
    pub fn into_inner(self) -> Time {
        self.0
    }
}

impl TryFrom<Time> for TimeIncrement {
    type Error = TimeIncrementError;

    fn try_from(t: Time) -> Result<Self, Self::Error> {
        Self::from_time(t)
    }
}

impl Deref for TimeIncrement {
    type Target = Time;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl fmt::Display for TimeIncrement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} s", self.seconds())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;
    use uom::si::time::{millisecond, second};

    #[test]
    fn accepts_positive_increment() {
        let dt = TimeIncrement::new::<millisecond>(250.0).unwrap();
        assert_relative_eq!(dt.seconds(), 0.25);

        let dt = TimeIncrement::new::<second>(0.5).unwrap();
        assert_eq!(dt.to_string(), "0.5 s");
    }

    #[test]
    fn rejects_zero_negative_and_nan() {
        for value in [0.0, -0.01, f64::NAN, f64::INFINITY] {
            let result = TimeIncrement::new::<second>(value);
            assert!(
                matches!(result, Err(TimeIncrementError::NotPositive(_))),
                "expected rejection of {value}"
            );
        }
    }

    #[test]
    fn try_from_time_round_trips_inner_value() {
        let t = Time::new::<second>(0.01);
        let dt = TimeIncrement::try_from(t).unwrap();
        assert_eq!(dt.into_inner(), t);
        assert_eq!(*dt, t);
    }
}
