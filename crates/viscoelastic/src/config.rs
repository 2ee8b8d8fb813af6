use std::{
    fs,
    path::{Path, PathBuf},
};

use rheo_core::TimeIncrement;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use uom::si::{
    f64::{Frequency, Pressure, Time},
    frequency::hertz,
    pressure::pascal,
    time::second,
};

use crate::{ConstitutiveModel, Error, Flow, Simulation};

/// Simulation parameters as read from an input file.
///
/// Field names follow the input file format. All values are in SI units:
/// `lamb` and `deltat` in seconds, `Gmod` in pascals, `rate` in s⁻¹.
///
/// ```json
/// {
///   "modelnr": 2,
///   "lamb": 1.0,
///   "Gmod": 1.0,
///   "alpha": 0.3,
///   "flownr": 1,
///   "rate": 1.0,
///   "deltat": 0.01,
///   "nsteps": 2000
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Config {
    /// Constitutive model: 1 = Maxwell, 2 = Giesekus.
    pub modelnr: i64,
    /// Relaxation time λ.
    pub lamb: f64,
    /// Shear modulus G.
    #[serde(rename = "Gmod")]
    pub gmod: f64,
    /// Giesekus mobility factor α, only read when `modelnr` is 2.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub alpha: Option<f64>,
    /// Flow type: 1 = shear, 2 = extensional.
    pub flownr: i64,
    /// Shear or extension rate.
    pub rate: f64,
    /// Time step.
    pub deltat: f64,
    /// Number of time steps.
    pub nsteps: i64,
}

/// Errors raised while loading a [`Config`].
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read {}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse configuration")]
    Parse(#[from] serde_json::Error),
}

impl Config {
    /// Parses a configuration from JSON text.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Parse`] if the text is not a valid configuration.
    pub fn from_json_str(text: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(text)?)
    }

    /// Reads and parses a JSON configuration file.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Io`] if the file cannot be read and
    /// [`ConfigError::Parse`] if its content is not a valid configuration.
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let text = fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json_str(&text)
    }

    /// Builds the constitutive model.
    ///
    /// # Errors
    ///
    /// See [`ConstitutiveModel::from_code`].
    pub fn model(&self) -> Result<ConstitutiveModel, Error> {
        let extra: Vec<f64> = self.alpha.into_iter().collect();
        ConstitutiveModel::from_code(
            self.modelnr,
            Time::new::<second>(self.lamb),
            Pressure::new::<pascal>(self.gmod),
            &extra,
        )
    }

    /// Builds the flow.
    ///
    /// # Errors
    ///
    /// See [`Flow::from_code`].
    pub fn flow(&self) -> Result<Flow, Error> {
        Flow::from_code(self.flownr, Frequency::new::<hertz>(self.rate))
    }

    /// Validates every value and builds the simulation.
    ///
    /// # Errors
    ///
    /// Returns the first model, flow, or step error found.
    pub fn build(&self) -> Result<Simulation, Error> {
        let model = self.model()?;
        let flow = self.flow()?;
        let dt = TimeIncrement::new::<second>(self.deltat)
            .map_err(|err| Error::invalid(err.to_string()))?;
        let steps = usize::try_from(self.nsteps)
            .map_err(|_| Error::invalid(format!("nsteps must be positive, got {}", self.nsteps)))?;

        Simulation::new(model, flow, dt, steps)
    }
}
