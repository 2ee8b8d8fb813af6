use rheo_solvers::transient::heun;
use thiserror::Error;

/// Errors raised while building or running a viscoelastic simulation.
///
/// Every variant is a fatal precondition violation. Nothing is retried and no
/// partial time series is produced.
#[derive(Debug, Error)]
pub enum Error {
    #[error("unknown constitutive model number {0} (expected 1 = Maxwell, 2 = Giesekus)")]
    InvalidModelKind(i64),

    #[error("{model} model requires parameter `{parameter}`")]
    MissingParameter {
        model: &'static str,
        parameter: &'static str,
    },

    #[error("unknown flow number {0} (expected 1 = shear, 2 = extensional)")]
    InvalidFlowKind(i64),

    #[error("{operand} must be a 3x3 tensor, got {rows}x{cols}")]
    ShapeMismatch {
        operand: &'static str,
        rows: usize,
        cols: usize,
    },

    #[error("invalid configuration: {reason}")]
    InvalidConfiguration { reason: String },

    #[error("time integration failed")]
    Solver(#[source] heun::Error),
}

impl Error {
    pub(crate) fn invalid(reason: impl Into<String>) -> Self {
        Self::InvalidConfiguration {
            reason: reason.into(),
        }
    }
}

/// Unwraps errors raised by [`StressModel`](crate::StressModel) inside the
/// solver so callers can match on the underlying variant.
impl From<heun::Error> for Error {
    fn from(err: heun::Error) -> Self {
        match err {
            heun::Error::Model(source) => match source.downcast::<Error>() {
                Ok(inner) => *inner,
                Err(other) => Self::Solver(heun::Error::Model(other)),
            },
            other @ heun::Error::Problem(_) => Self::Solver(other),
        }
    }
}
