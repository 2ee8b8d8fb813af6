use std::fmt;

use uom::si::{
    f64::{Pressure, Time},
    pressure::pascal,
    time::second,
};

use crate::{
    Error,
    tensor::{self, Tensor3},
};

/// Selects a constitutive law by its configuration number.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ModelKind {
    /// Upper-convected Maxwell, number 1.
    Maxwell,
    /// Giesekus, number 2.
    Giesekus,
}

impl ModelKind {
    /// The configuration number of this kind.
    #[must_use]
    pub fn code(self) -> i64 {
        match self {
            Self::Maxwell => 1,
            Self::Giesekus => 2,
        }
    }

    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            Self::Maxwell => "Maxwell",
            Self::Giesekus => "Giesekus",
        }
    }
}

impl TryFrom<i64> for ModelKind {
    type Error = Error;

    fn try_from(code: i64) -> Result<Self, Self::Error> {
        match code {
            1 => Ok(Self::Maxwell),
            2 => Ok(Self::Giesekus),
            other => Err(Error::InvalidModelKind(other)),
        }
    }
}

/// A constitutive law together with its material parameters.
///
/// Each variant carries exactly the parameters its law needs, so the Giesekus
/// mobility factor `alpha` cannot exist on a Maxwell model. Values are only
/// obtainable through the validating constructors and are immutable.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ConstitutiveModel {
    /// Linear upper-convected Maxwell fluid: `f(T) = 0`.
    Maxwell {
        relaxation_time: Time,
        modulus: Pressure,
    },
    /// Giesekus fluid: `f(T) = (α / G) T·T`.
    Giesekus {
        relaxation_time: Time,
        modulus: Pressure,
        alpha: f64,
    },
}

impl ConstitutiveModel {
    /// Builds a model of the given kind.
    ///
    /// `extra` holds kind-specific parameters in order. The Giesekus model
    /// reads `alpha` from `extra[0]`; the Maxwell model ignores `extra`.
    ///
    /// # Errors
    ///
    /// - [`Error::MissingParameter`] if a Giesekus model gets no `alpha`.
    /// - [`Error::InvalidConfiguration`] if the relaxation time or modulus is
    ///   not strictly positive, or `alpha` is not finite.
    pub fn new(
        kind: ModelKind,
        relaxation_time: Time,
        modulus: Pressure,
        extra: &[f64],
    ) -> Result<Self, Error> {
        positive("relaxation time", relaxation_time.get::<second>())?;
        positive("modulus", modulus.get::<pascal>())?;

        match kind {
            ModelKind::Maxwell => Ok(Self::Maxwell {
                relaxation_time,
                modulus,
            }),
            ModelKind::Giesekus => {
                let alpha = *extra.first().ok_or(Error::MissingParameter {
                    model: kind.name(),
                    parameter: "alpha",
                })?;
                if !alpha.is_finite() {
                    return Err(Error::invalid(format!("alpha must be finite, got {alpha}")));
                }
                Ok(Self::Giesekus {
                    relaxation_time,
                    modulus,
                    alpha,
                })
            }
        }
    }

    /// Builds a model from its configuration number.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidModelKind`] for an unknown number, otherwise
    /// the same errors as [`ConstitutiveModel::new`].
    pub fn from_code(
        code: i64,
        relaxation_time: Time,
        modulus: Pressure,
        extra: &[f64],
    ) -> Result<Self, Error> {
        Self::new(ModelKind::try_from(code)?, relaxation_time, modulus, extra)
    }

    /// Builds a Maxwell model.
    ///
    /// # Errors
    ///
    /// See [`ConstitutiveModel::new`].
    pub fn maxwell(relaxation_time: Time, modulus: Pressure) -> Result<Self, Error> {
        Self::new(ModelKind::Maxwell, relaxation_time, modulus, &[])
    }

    /// Builds a Giesekus model.
    ///
    /// # Errors
    ///
    /// See [`ConstitutiveModel::new`].
    pub fn giesekus(relaxation_time: Time, modulus: Pressure, alpha: f64) -> Result<Self, Error> {
        Self::new(ModelKind::Giesekus, relaxation_time, modulus, &[alpha])
    }

    #[must_use]
    pub fn kind(&self) -> ModelKind {
        match self {
            Self::Maxwell { .. } => ModelKind::Maxwell,
            Self::Giesekus { .. } => ModelKind::Giesekus,
        }
    }

    #[must_use]
    pub fn name(&self) -> &'static str {
        self.kind().name()
    }

    #[must_use]
    pub fn relaxation_time(&self) -> Time {
        match *self {
            Self::Maxwell {
                relaxation_time, ..
            }
            | Self::Giesekus {
                relaxation_time, ..
            } => relaxation_time,
        }
    }

    #[must_use]
    pub fn modulus(&self) -> Pressure {
        match *self {
            Self::Maxwell { modulus, .. } | Self::Giesekus { modulus, .. } => modulus,
        }
    }

    /// The Giesekus mobility factor, or `None` for other models.
    #[must_use]
    pub fn alpha(&self) -> Option<f64> {
        match *self {
            Self::Maxwell { .. } => None,
            Self::Giesekus { alpha, .. } => Some(alpha),
        }
    }

    /// Computes the nonlinear term `f(T)` of the constitutive equation.
    ///
    /// # Errors
    ///
    /// Returns [`Error::ShapeMismatch`] if `stress` is not 3×3.
    pub fn nonlinear_term(&self, stress: &Tensor3) -> Result<Tensor3, Error> {
        tensor::check_shape("stress", stress)?;

        Ok(match *self {
            Self::Maxwell { .. } => tensor::zeros(),
            Self::Giesekus { modulus, alpha, .. } => {
                stress.dot(stress) * (alpha / modulus.get::<pascal>())
            }
        })
    }
}

impl fmt::Display for ConstitutiveModel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} model (lambda = {} s, G = {} Pa",
            self.name(),
            self.relaxation_time().get::<second>(),
            self.modulus().get::<pascal>(),
        )?;
        if let Some(alpha) = self.alpha() {
            write!(f, ", alpha = {alpha}")?;
        }
        write!(f, ")")
    }
}

fn positive(name: &str, value: f64) -> Result<(), Error> {
    if value.is_finite() && value > 0.0 {
        Ok(())
    } else {
        Err(Error::invalid(format!("{name} must be positive, got {value}")))
    }
}
